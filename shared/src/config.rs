use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub booking: BookingPolicy,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let booking = BookingPolicy {
            reject_past_bookings: env::var("REJECT_PAST_BOOKINGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        };
        Ok(Self { database, booking })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Policy knobs the engine leaves to the deployment rather than
/// hard-coding as invariants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingPolicy {
    /// Reject bookings whose start lies before "now". Off by default;
    /// the overlap invariant does not depend on it.
    pub reject_past_bookings: bool,
}
