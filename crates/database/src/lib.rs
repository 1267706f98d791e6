//! SQLite persistence layer for the hotel front desk.
//!
//! This crate provides async database operations for room bookings and the
//! write-once room inventory row using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{booking, models::{BedType, NewBooking}, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:hotel.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Book a room
//!     let new = NewBooking {
//!         room_number: 101,
//!         check_in_date: "2024-01-01".parse()?,
//!         check_out_date: "2024-01-04".parse()?,
//!         guest_name: "Asha".to_string(),
//!         ac: true,
//!         bed_type: BedType::Double,
//!         extra_mattress: false,
//!     };
//!     booking::create_booking(db.pool(), &new).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod error;
pub mod models;
pub mod room_info;

pub use error::{DatabaseError, Result};
pub use models::{BedType, Booking, NewBooking, RoomInfo};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Pool size for database connections. One interactive session drives
    /// the store, so a handful of connections is plenty.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/hotel.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
