use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct InspeksiConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

/// Fixed-width UTC timestamp used for transaction rows. The format is
/// zero-padded so string comparison orders the same as time.
pub const TS_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub fn format_ts_utc(ts: DateTime<Utc>) -> String {
    ts.format(TS_UTC_FORMAT).to_string()
}

pub fn now_ts_utc() -> String {
    format_ts_utc(Utc::now())
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ts_utc_is_fixed_width_and_sortable() {
        let early = Utc.with_ymd_and_hms(2025, 3, 7, 4, 5, 6).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 11, 23, 18, 45, 0).unwrap();

        let a = format_ts_utc(early);
        let b = format_ts_utc(late);

        assert_eq!(a, "2025-03-07T04:05:06Z");
        assert_eq!(a.len(), 20);
        assert_eq!(b.len(), 20);
        assert!(a < b);
    }
}
