//! Interactive front desk for hotel room bookings.
//!
//! Drives the booking manager through a text menu: book, cancel, receipt,
//! availability, listing, and customer care enquiry.

mod config;
mod menu;

use booking::BookingManager;
use clap::Parser;
use database::Database;
use tracing::info;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "frontdesk")]
#[command(about = "Interactive front desk for hotel room bookings")]
struct Args {
    /// SQLite database URL (overrides HOTEL_DATABASE_URL)
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = Config::from_env();
    let database_url = args
        .database
        .unwrap_or_else(|| config.database_url.clone());

    // Connect to the store and bring the schema up to date
    let db = Database::connect(&database_url).await?;
    db.migrate().await?;

    let manager = BookingManager::new(db, config.hotel_profile());
    info!("Front desk ready");

    menu::first_run_setup(&manager).await?;
    menu::run(&manager).await?;

    Ok(())
}
