//! Booking row operations.
//!
//! The booking table holds at most one row per room number. Creation is a
//! single conditional insert so the check and the write cannot be split by
//! another writer; a unique index on `room_number` backs the same invariant
//! at the schema level.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Booking, NewBooking};

/// Insert a booking if the room has none, returning the stored row.
///
/// Fails with [`DatabaseError::AlreadyExists`] when any booking for the
/// room is present. Nothing is written in that case.
pub async fn create_booking(pool: &SqlitePool, new: &NewBooking) -> Result<Booking> {
    let result = sqlx::query(
        r#"
        INSERT INTO room_bookings
            (room_number, check_in_date, check_out_date, guest_name, ac, bed_type, extra_mattress)
        SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7
        WHERE NOT EXISTS (SELECT 1 FROM room_bookings WHERE room_number = ?1)
        "#,
    )
    .bind(new.room_number)
    .bind(new.check_in_date)
    .bind(new.check_out_date)
    .bind(&new.guest_name)
    .bind(new.ac)
    .bind(new.bed_type)
    .bind(new.extra_mattress)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    room: new.room_number,
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::AlreadyExists {
            room: new.room_number,
        });
    }

    tracing::debug!(room = new.room_number, "Booking row inserted");

    Ok(Booking {
        id: result.last_insert_rowid(),
        room_number: new.room_number,
        check_in_date: new.check_in_date,
        check_out_date: new.check_out_date,
        guest_name: new.guest_name.clone(),
        ac: new.ac,
        bed_type: new.bed_type,
        extra_mattress: new.extra_mattress,
    })
}

/// Get the booking for a room, if any.
pub async fn get_booking(pool: &SqlitePool, room_number: i64) -> Result<Option<Booking>> {
    let record = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, room_number, check_in_date, check_out_date,
               guest_name, ac, bed_type, extra_mattress
        FROM room_bookings
        WHERE room_number = ?
        "#,
    )
    .bind(room_number)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Delete every booking row for a room.
///
/// Returns the number of rows removed. Deleting a room with no booking is
/// not an error; the count is simply zero.
pub async fn delete_bookings(pool: &SqlitePool, room_number: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM room_bookings
        WHERE room_number = ?
        "#,
    )
    .bind(room_number)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// List all bookings in insertion order.
pub async fn list_bookings(pool: &SqlitePool) -> Result<Vec<Booking>> {
    let bookings = sqlx::query_as::<_, Booking>(
        r#"
        SELECT id, room_number, check_in_date, check_out_date,
               guest_name, ac, bed_type, extra_mattress
        FROM room_bookings
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Room numbers that currently have a booking, ascending.
pub async fn booked_rooms(pool: &SqlitePool) -> Result<Vec<i64>> {
    let rooms = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT DISTINCT room_number
        FROM room_bookings
        ORDER BY room_number
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Count total booking rows.
pub async fn count_bookings(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM room_bookings
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
