//! Receipt pricing.
//!
//! Pure functions from a stored booking to a priced receipt. All amounts
//! are INR; flat surcharges and the nightly rate stay integer rupees, GST
//! and the grand total are rounded to paise.

use database::models::{BedType, Booking};
use serde::Serialize;

use crate::profile::HotelProfile;

/// Nightly room rate, flat across all room types.
pub const ROOM_RATE: i64 = 4000;

/// Flat surcharge for an air-conditioned room.
pub const AC_SURCHARGE: i64 = 500;

/// Flat surcharge for a double bed.
pub const DOUBLE_BED_SURCHARGE: i64 = 800;

/// Flat surcharge for an extra mattress.
pub const EXTRA_MATTRESS_SURCHARGE: i64 = 200;

/// GST rate applied to the surcharge-adjusted subtotal.
pub const GST_RATE: f64 = 0.18;

/// Tax registration label printed on every receipt.
pub const GST_NUMBER: &str = "GST123456789";

/// A priced receipt derived from a booking. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub room_number: i64,
    pub guest_name: String,
    pub gst_number: &'static str,
    pub check_in_date: chrono::NaiveDate,
    pub check_out_date: chrono::NaiveDate,
    /// Whole nights charged. Never negative; see [`nights`].
    pub nights: i64,
    /// Nightly rate times nights, before surcharges.
    pub base_cost: i64,
    pub ac_surcharge: i64,
    pub bed_surcharge: i64,
    pub mattress_surcharge: i64,
    /// Base cost plus all applicable surcharges.
    pub subtotal: i64,
    /// 18% of the subtotal, rounded to paise.
    pub gst: f64,
    pub grand_total: f64,
    /// UPI handle to show in the payment section.
    pub upi_id: String,
    /// Payment phone number to show in the payment section.
    pub payment_number: String,
}

/// Whole nights between check-in and check-out, clamped at zero.
///
/// Bookings created through the manager always have a positive stay, but a
/// receipt must be well-defined for any booking value, so a zero or
/// inverted date range prices as zero nights rather than a negative charge.
pub fn nights(booking: &Booking) -> i64 {
    (booking.check_out_date - booking.check_in_date)
        .num_days()
        .max(0)
}

/// Price a booking into a receipt.
///
/// Deterministic over the booking's fields; reads nothing and writes
/// nothing.
pub fn price(booking: &Booking, profile: &HotelProfile) -> Receipt {
    let nights = nights(booking);
    let base_cost = ROOM_RATE * nights;

    let ac_surcharge = if booking.ac { AC_SURCHARGE } else { 0 };
    let bed_surcharge = match booking.bed_type {
        BedType::Double => DOUBLE_BED_SURCHARGE,
        BedType::Single => 0,
    };
    let mattress_surcharge = if booking.extra_mattress {
        EXTRA_MATTRESS_SURCHARGE
    } else {
        0
    };

    let subtotal = base_cost + ac_surcharge + bed_surcharge + mattress_surcharge;
    let gst = round_to_paise(subtotal as f64 * GST_RATE);
    let grand_total = round_to_paise(subtotal as f64 + gst);

    Receipt {
        room_number: booking.room_number,
        guest_name: booking.guest_name.clone(),
        gst_number: GST_NUMBER,
        check_in_date: booking.check_in_date,
        check_out_date: booking.check_out_date,
        nights,
        base_cost,
        ac_surcharge,
        bed_surcharge,
        mattress_surcharge,
        subtotal,
        gst,
        grand_total,
        upi_id: profile.upi_id.clone(),
        payment_number: profile.payment_number.clone(),
    }
}

/// Round a monetary amount to two decimal places, half away from zero.
fn round_to_paise(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(nights: i64, ac: bool, bed_type: BedType, extra_mattress: bool) -> Booking {
        let check_in: chrono::NaiveDate = "2024-01-01".parse().unwrap();
        Booking {
            id: 1,
            room_number: 101,
            check_in_date: check_in,
            check_out_date: check_in + chrono::Duration::days(nights),
            guest_name: "Asha".to_string(),
            ac,
            bed_type,
            extra_mattress,
        }
    }

    #[test]
    fn test_all_surcharges_three_nights() {
        // 3 nights, AC, double bed, extra mattress:
        // base 12000, subtotal 13500, GST 2430, grand total 15930.
        let profile = HotelProfile::default();
        let receipt = price(&booking(3, true, BedType::Double, true), &profile);

        assert_eq!(receipt.nights, 3);
        assert_eq!(receipt.base_cost, 12_000);
        assert_eq!(receipt.ac_surcharge, 500);
        assert_eq!(receipt.bed_surcharge, 800);
        assert_eq!(receipt.mattress_surcharge, 200);
        assert_eq!(receipt.subtotal, 13_500);
        assert_eq!(receipt.gst, 2430.0);
        assert_eq!(receipt.grand_total, 15_930.0);
        assert_eq!(receipt.gst_number, "GST123456789");
    }

    #[test]
    fn test_no_surcharges() {
        let profile = HotelProfile::default();
        let receipt = price(&booking(2, false, BedType::Single, false), &profile);

        assert_eq!(receipt.base_cost, 8000);
        assert_eq!(receipt.subtotal, 8000);
        assert_eq!(receipt.gst, 1440.0);
        assert_eq!(receipt.grand_total, 9440.0);
    }

    #[test]
    fn test_surcharges_are_flat_not_per_night() {
        let profile = HotelProfile::default();
        let one = price(&booking(1, true, BedType::Double, true), &profile);
        let ten = price(&booking(10, true, BedType::Double, true), &profile);

        assert_eq!(one.subtotal - one.base_cost, 1500);
        assert_eq!(ten.subtotal - ten.base_cost, 1500);
    }

    #[test]
    fn test_zero_night_stay_prices_to_surcharges_only() {
        // check_out == check_in: nights clamp to zero, base cost is zero,
        // surcharges and GST still apply.
        let profile = HotelProfile::default();
        let receipt = price(&booking(0, true, BedType::Double, true), &profile);

        assert_eq!(receipt.nights, 0);
        assert_eq!(receipt.base_cost, 0);
        assert_eq!(receipt.subtotal, 1500);
        assert_eq!(receipt.gst, 270.0);
        assert_eq!(receipt.grand_total, 1770.0);
    }

    #[test]
    fn test_inverted_dates_clamp_to_zero_nights() {
        let profile = HotelProfile::default();
        let receipt = price(&booking(-3, false, BedType::Single, false), &profile);

        assert_eq!(receipt.nights, 0);
        assert_eq!(receipt.base_cost, 0);
        assert_eq!(receipt.grand_total, 0.0);
    }

    #[test]
    fn test_pricing_is_deterministic() {
        let profile = HotelProfile::default();
        let b = booking(3, true, BedType::Double, true);
        assert_eq!(price(&b, &profile), price(&b, &profile));
    }

    #[test]
    fn test_round_to_paise() {
        assert_eq!(round_to_paise(2430.0), 2430.0);
        assert_eq!(round_to_paise(0.125), 0.13);
        assert_eq!(round_to_paise(1.004), 1.0);
    }
}
