//! Error types for booking operations.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while managing bookings.
///
/// Every variant is local to a single operation; none leaves the store in a
/// partial state.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Create attempted on a room that already has a booking.
    #[error("room {0} is already booked")]
    RoomUnavailable(u32),

    /// Receipt or lookup requested for a room with no booking.
    #[error("room {0} is not booked")]
    NoSuchBooking(u32),

    /// A caller-supplied field failed validation.
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    /// Underlying store failure.
    #[error(transparent)]
    Database(#[from] database::DatabaseError),
}

/// Result type for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;
