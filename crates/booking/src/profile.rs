//! Hotel configuration supplied at startup.

use serde::{Deserialize, Serialize};

/// Static hotel configuration: the room number range, the customer care
/// line, and the identifiers printed in the payment section of a receipt.
///
/// Built once at startup and passed by reference; nothing here is
/// recomputed or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelProfile {
    /// Lowest valid room number.
    pub first_room: u32,
    /// Highest valid room number (inclusive).
    pub last_room: u32,
    /// Customer care phone number.
    pub care_number: String,
    /// UPI handle for payments.
    pub upi_id: String,
    /// Phone number for payments.
    pub payment_number: String,
}

impl HotelProfile {
    /// Whether a room number falls inside the hotel's range.
    pub fn contains_room(&self, room: u32) -> bool {
        (self.first_room..=self.last_room).contains(&room)
    }

    /// All room numbers in ascending order.
    pub fn room_range(&self) -> std::ops::RangeInclusive<u32> {
        self.first_room..=self.last_room
    }
}

impl Default for HotelProfile {
    fn default() -> Self {
        Self {
            first_room: 101,
            last_room: 150,
            care_number: "1234567890".to_string(),
            upi_id: "hotel@example.com".to_string(),
            payment_number: "9876543210".to_string(),
        }
    }
}
