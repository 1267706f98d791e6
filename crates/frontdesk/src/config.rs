//! Configuration loaded from environment variables.

use std::env;

use booking::HotelProfile;

/// Front desk configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database URL.
    pub database_url: String,
    /// Customer care phone number.
    pub care_number: String,
    /// UPI handle shown on receipts.
    pub upi_id: String,
    /// Payment phone number shown on receipts.
    pub payment_number: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `HOTEL_DATABASE_URL` | SQLite database URL | `sqlite:hotel.db?mode=rwc` |
    /// | `HOTEL_CARE_NUMBER` | Customer care phone number | `1234567890` |
    /// | `HOTEL_UPI_ID` | UPI handle for payments | `hotel@example.com` |
    /// | `HOTEL_PAYMENT_NUMBER` | Phone number for payments | `9876543210` |
    pub fn from_env() -> Self {
        let database_url = env::var("HOTEL_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:hotel.db?mode=rwc".to_string());

        let care_number =
            env::var("HOTEL_CARE_NUMBER").unwrap_or_else(|_| "1234567890".to_string());

        let upi_id =
            env::var("HOTEL_UPI_ID").unwrap_or_else(|_| "hotel@example.com".to_string());

        let payment_number =
            env::var("HOTEL_PAYMENT_NUMBER").unwrap_or_else(|_| "9876543210".to_string());

        Self {
            database_url,
            care_number,
            upi_id,
            payment_number,
        }
    }

    /// Build the hotel profile handed to the booking manager.
    ///
    /// The room number range is fixed at 101-150.
    pub fn hotel_profile(&self) -> HotelProfile {
        HotelProfile {
            care_number: self.care_number.clone(),
            upi_id: self.upi_id.clone(),
            payment_number: self.payment_number.clone(),
            ..HotelProfile::default()
        }
    }
}
