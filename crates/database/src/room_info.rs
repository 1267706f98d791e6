//! Room inventory storage, written once on first run.

use sqlx::SqlitePool;

use crate::models::RoomInfo;
use crate::Result;

/// Get the stored room counts, if the first-run setup has happened.
pub async fn get_room_info(pool: &SqlitePool) -> Result<Option<RoomInfo>> {
    let record = sqlx::query_as::<_, RoomInfo>(
        r#"
        SELECT id, total_rooms, total_ac_rooms, total_non_ac_rooms
        FROM room_info
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Store room counts if none are stored yet.
///
/// The non-AC count is derived from the other two. Returns true when this
/// call wrote the row, false when counts were already present (the existing
/// row is left untouched).
pub async fn init_room_info(pool: &SqlitePool, total_rooms: i64, total_ac_rooms: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO room_info (total_rooms, total_ac_rooms, total_non_ac_rooms)
        SELECT ?1, ?2, ?1 - ?2
        WHERE NOT EXISTS (SELECT 1 FROM room_info)
        "#,
    )
    .bind(total_rooms)
    .bind(total_ac_rooms)
    .execute(pool)
    .await?;

    let written = result.rows_affected() > 0;
    if written {
        tracing::info!(total_rooms, total_ac_rooms, "Room inventory initialized");
    }

    Ok(written)
}
