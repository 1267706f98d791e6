//! Booking lifecycle manager.

use chrono::NaiveDate;
use database::models::{BedType, Booking, NewBooking, RoomInfo};
use database::{booking as store, room_info, Database, DatabaseError};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::pricing::{self, Receipt};
use crate::profile::HotelProfile;
use crate::validation;

/// Caller-supplied fields for a new booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub room_number: u32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_name: String,
    pub ac: bool,
    pub bed_type: BedType,
    pub extra_mattress: bool,
}

/// Coordinates booking creation, cancellation, availability, and receipts
/// over the store.
///
/// Stateless between calls: every answer is derived from the current store
/// contents, and the at-most-one-booking-per-room invariant is enforced by
/// the store's conditional insert rather than a read-then-write here.
#[derive(Debug, Clone)]
pub struct BookingManager {
    db: Database,
    profile: HotelProfile,
}

impl BookingManager {
    pub fn new(db: Database, profile: HotelProfile) -> Self {
        Self { db, profile }
    }

    /// The hotel profile this manager was built with.
    pub fn profile(&self) -> &HotelProfile {
        &self.profile
    }

    /// Book a room.
    ///
    /// Validates the request, then inserts if and only if the room has no
    /// existing booking. Fails with [`BookingError::RoomUnavailable`] when
    /// it does, writing nothing.
    pub async fn book(&self, request: BookingRequest) -> Result<Booking> {
        validation::validate_room_number(&self.profile, request.room_number)?;
        validation::validate_guest_name(&request.guest_name)?;
        validation::validate_stay(request.check_in_date, request.check_out_date)?;

        let new = NewBooking {
            room_number: i64::from(request.room_number),
            check_in_date: request.check_in_date,
            check_out_date: request.check_out_date,
            guest_name: request.guest_name.trim().to_string(),
            ac: request.ac,
            bed_type: request.bed_type,
            extra_mattress: request.extra_mattress,
        };

        let booking = store::create_booking(self.db.pool(), &new)
            .await
            .map_err(|e| match e {
                DatabaseError::AlreadyExists { .. } => {
                    BookingError::RoomUnavailable(request.room_number)
                }
                other => BookingError::Database(other),
            })?;

        tracing::info!(
            room = booking.room_number,
            guest = %booking.guest_name,
            check_in = %booking.check_in_date,
            check_out = %booking.check_out_date,
            "Room booked"
        );

        Ok(booking)
    }

    /// Cancel the booking for a room, removing every row that matches.
    ///
    /// Cancellation is lenient: a room with no booking cancels successfully
    /// with a count of zero.
    pub async fn cancel(&self, room_number: u32) -> Result<u64> {
        let removed = store::delete_bookings(self.db.pool(), i64::from(room_number)).await?;
        tracing::info!(room = room_number, removed, "Booking cancelled");
        Ok(removed)
    }

    /// Whether a room currently has no booking.
    pub async fn is_available(&self, room_number: u32) -> Result<bool> {
        let existing = store::get_booking(self.db.pool(), i64::from(room_number)).await?;
        Ok(existing.is_none())
    }

    /// Room numbers in the hotel's range with no booking, ascending.
    pub async fn list_available(&self) -> Result<Vec<u32>> {
        let booked = store::booked_rooms(self.db.pool()).await?;
        let available = self
            .profile
            .room_range()
            .filter(|room| !booked.contains(&i64::from(*room)))
            .collect();
        Ok(available)
    }

    /// All bookings in store order.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        Ok(store::list_bookings(self.db.pool()).await?)
    }

    /// Price the booking for a room into a receipt.
    ///
    /// Fails with [`BookingError::NoSuchBooking`] when the room has no
    /// booking.
    pub async fn receipt(&self, room_number: u32) -> Result<Receipt> {
        let booking = store::get_booking(self.db.pool(), i64::from(room_number))
            .await?
            .ok_or(BookingError::NoSuchBooking(room_number))?;

        Ok(pricing::price(&booking, &self.profile))
    }

    /// Stored room inventory counts, if first-run setup has happened.
    pub async fn room_info(&self) -> Result<Option<RoomInfo>> {
        Ok(room_info::get_room_info(self.db.pool()).await?)
    }

    /// First-run room inventory setup. Returns false when counts already
    /// exist; the stored values win in that case.
    pub async fn init_room_info(&self, total_rooms: i64, total_ac_rooms: i64) -> Result<bool> {
        validation::validate_room_counts(total_rooms, total_ac_rooms)?;
        Ok(room_info::init_room_info(self.db.pool(), total_rooms, total_ac_rooms).await?)
    }
}
