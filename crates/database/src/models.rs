//! Database models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Bed configuration of a room, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum BedType {
    Single,
    Double,
}

impl BedType {
    /// Parse a bed type from user input.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(BedType::Single),
            "double" => Some(BedType::Double),
            _ => None,
        }
    }

    /// The lowercase form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            BedType::Single => "single",
            BedType::Double => "double",
        }
    }
}

impl std::fmt::Display for BedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored room booking. At most one row exists per room number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Auto-incrementing surrogate key.
    pub id: i64,
    /// Room number, the natural key into bookings.
    pub room_number: i64,
    /// First night of the stay (ISO `YYYY-MM-DD`).
    pub check_in_date: NaiveDate,
    /// Morning of departure (ISO `YYYY-MM-DD`).
    pub check_out_date: NaiveDate,
    /// Name of the guest the room is held for.
    pub guest_name: String,
    /// Whether the room is air-conditioned.
    pub ac: bool,
    /// Bed configuration.
    pub bed_type: BedType,
    /// Whether an extra mattress was requested.
    pub extra_mattress: bool,
}

/// Fields for a booking that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub room_number: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_name: String,
    pub ac: bool,
    pub bed_type: BedType,
    pub extra_mattress: bool,
}

/// Room inventory counts, written once on first run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RoomInfo {
    /// Single-row table key.
    pub id: i64,
    /// Total number of rooms in the hotel.
    pub total_rooms: i64,
    /// Number of air-conditioned rooms.
    pub total_ac_rooms: i64,
    /// Number of rooms without air conditioning.
    pub total_non_ac_rooms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_type_parse() {
        assert_eq!(BedType::parse("single"), Some(BedType::Single));
        assert_eq!(BedType::parse("DOUBLE"), Some(BedType::Double));
        assert_eq!(BedType::parse(" double "), Some(BedType::Double));
        assert_eq!(BedType::parse("queen"), None);
        assert_eq!(BedType::parse(""), None);
    }

    #[test]
    fn test_bed_type_display() {
        assert_eq!(BedType::Single.to_string(), "single");
        assert_eq!(BedType::Double.to_string(), "double");
    }
}
