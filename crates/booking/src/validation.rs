//! Input validation for booking requests.

use chrono::NaiveDate;
use thiserror::Error;

use crate::profile::HotelProfile;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Room number outside the hotel's configured range.
    #[error("room number {room} is out of range ({first}-{last})")]
    RoomOutOfRange { room: u32, first: u32, last: u32 },

    /// Guest name missing or blank.
    #[error("guest name cannot be empty")]
    EmptyGuestName,

    /// Check-out does not fall after check-in.
    #[error("check-out date {check_out} must be after check-in date {check_in}")]
    StayNotPositive {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// AC room count larger than the total room count.
    #[error("AC room count {ac} exceeds total room count {total}")]
    AcRoomsExceedTotal { total: i64, ac: i64 },
}

/// Validate that a room number is within the hotel's range.
pub fn validate_room_number(profile: &HotelProfile, room: u32) -> Result<(), ValidationError> {
    if !profile.contains_room(room) {
        return Err(ValidationError::RoomOutOfRange {
            room,
            first: profile.first_room,
            last: profile.last_room,
        });
    }
    Ok(())
}

/// Validate that a guest name is non-empty after trimming.
pub fn validate_guest_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyGuestName);
    }
    Ok(())
}

/// Validate that a stay covers at least one night.
pub fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), ValidationError> {
    if check_out <= check_in {
        return Err(ValidationError::StayNotPositive {
            check_in,
            check_out,
        });
    }
    Ok(())
}

/// Validate first-run room counts.
pub fn validate_room_counts(total: i64, ac: i64) -> Result<(), ValidationError> {
    if ac > total {
        return Err(ValidationError::AcRoomsExceedTotal { total, ac });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> HotelProfile {
        HotelProfile::default()
    }

    #[test]
    fn test_validate_room_number() {
        assert!(validate_room_number(&profile(), 101).is_ok());
        assert!(validate_room_number(&profile(), 150).is_ok());

        assert!(matches!(
            validate_room_number(&profile(), 100),
            Err(ValidationError::RoomOutOfRange { room: 100, .. })
        ));
        assert!(matches!(
            validate_room_number(&profile(), 151),
            Err(ValidationError::RoomOutOfRange { room: 151, .. })
        ));
    }

    #[test]
    fn test_validate_guest_name() {
        assert!(validate_guest_name("Asha").is_ok());
        assert!(matches!(
            validate_guest_name(""),
            Err(ValidationError::EmptyGuestName)
        ));
        assert!(matches!(
            validate_guest_name("   "),
            Err(ValidationError::EmptyGuestName)
        ));
    }

    #[test]
    fn test_validate_stay() {
        let d1: NaiveDate = "2024-01-01".parse().unwrap();
        let d2: NaiveDate = "2024-01-04".parse().unwrap();

        assert!(validate_stay(d1, d2).is_ok());

        // Same-day check-out is not a bookable stay.
        assert!(matches!(
            validate_stay(d1, d1),
            Err(ValidationError::StayNotPositive { .. })
        ));
        // Neither is a check-out before check-in.
        assert!(matches!(
            validate_stay(d2, d1),
            Err(ValidationError::StayNotPositive { .. })
        ));
    }

    #[test]
    fn test_validate_room_counts() {
        assert!(validate_room_counts(50, 30).is_ok());
        assert!(validate_room_counts(50, 50).is_ok());
        assert!(matches!(
            validate_room_counts(50, 51),
            Err(ValidationError::AcRoomsExceedTotal { .. })
        ));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::RoomOutOfRange {
            room: 99,
            first: 101,
            last: 150,
        };
        assert_eq!(err.to_string(), "room number 99 is out of range (101-150)");

        let err = ValidationError::EmptyGuestName;
        assert_eq!(err.to_string(), "guest name cannot be empty");
    }
}
