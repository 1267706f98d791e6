//! Booking lifecycle and pricing rules for the hotel front desk.
//!
//! This crate provides the [`BookingManager`] type, which enforces the
//! one-booking-per-room rule over the store, and the [`pricing`] module,
//! which derives a priced [`Receipt`] from a stored booking.
//!
//! # Example
//!
//! ```rust,ignore
//! use booking::{BookingManager, BookingRequest, HotelProfile};
//! use database::{BedType, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite:hotel.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let manager = BookingManager::new(db, HotelProfile::default());
//!     manager
//!         .book(BookingRequest {
//!             room_number: 101,
//!             check_in_date: "2024-01-01".parse()?,
//!             check_out_date: "2024-01-04".parse()?,
//!             guest_name: "Asha".to_string(),
//!             ac: true,
//!             bed_type: BedType::Double,
//!             extra_mattress: false,
//!         })
//!         .await?;
//!
//!     let receipt = manager.receipt(101).await?;
//!     println!("Grand total: {} INR", receipt.grand_total);
//!     Ok(())
//! }
//! ```

mod error;
mod manager;
pub mod pricing;
mod profile;
pub mod validation;

// Public exports
pub use error::{BookingError, Result};
pub use manager::{BookingManager, BookingRequest};
pub use pricing::Receipt;
pub use profile::HotelProfile;
pub use validation::ValidationError;

// Re-export commonly used types from the store
pub use database::models::{BedType, Booking};
