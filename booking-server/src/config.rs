//! Server configuration

use chrono::{TimeDelta, Weekday};
use chrono_tz::Tz;

use crate::BoxError;
use crate::reservations::BusinessHours;
use crate::utils::time::parse_time;

const DEV_DATABASE_URL: &str = "sqlite:bookings.db";

/// Booking server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Directory for daily rolling log files
    pub log_dir: Option<String>,
    pub business_hours: BusinessHours,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let environment = var("ENVIRONMENT").unwrap_or_else(|| "development".into());

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None if environment == "development" => DEV_DATABASE_URL.into(),
            None => {
                let message = format!("DATABASE_URL must be set in {environment} environment");
                return Err(message.into());
            }
        };

        let http_port = match var("HTTP_PORT") {
            Some(p) => p.parse().map_err(|_| format!("HTTP_PORT is not a valid port: {p}"))?,
            None => 5001,
        };

        let defaults = BusinessHours::default();

        let open = match var("OPEN_TIME") {
            Some(t) => parse_time(&t).ok_or_else(|| format!("OPEN_TIME is not a time: {t}"))?,
            None => defaults.open(),
        };
        let close = match var("CLOSE_TIME") {
            Some(t) => parse_time(&t).ok_or_else(|| format!("CLOSE_TIME is not a time: {t}"))?,
            None => defaults.close(),
        };
        let closing_buffer = match var("CLOSING_BUFFER_MINUTES") {
            Some(m) => m
                .parse()
                .ok()
                .and_then(TimeDelta::try_minutes)
                .ok_or_else(|| format!("CLOSING_BUFFER_MINUTES is not a number: {m}"))?,
            None => TimeDelta::minutes(60),
        };
        let closed_day: Weekday = match var("CLOSED_WEEKDAY") {
            Some(d) => d.parse().map_err(|_| format!("CLOSED_WEEKDAY is not a weekday: {d}"))?,
            None => defaults.closed_day(),
        };
        let timezone: Tz = match var("BUSINESS_TIMEZONE") {
            Some(tz) => tz
                .parse()
                .map_err(|_| format!("BUSINESS_TIMEZONE is not a known timezone: {tz}"))?,
            None => defaults.timezone(),
        };

        let business_hours = BusinessHours::new(
            open,
            close,
            closing_buffer,
            closed_day,
            timezone,
        )?;

        Ok(Self {
            database_url,
            http_port,
            environment,
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR"),
            business_hours,
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, BoxError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite:bookings.db");
        assert_eq!(config.http_port, 5001);
        assert_eq!(config.log_level, "info");
        assert!(config.log_dir.is_none());
        assert!(config.is_development());
        assert_eq!(config.business_hours, BusinessHours::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "sqlite:/var/lib/bookings.db"),
            ("HTTP_PORT", "8080"),
            ("OPEN_TIME", "09:00"),
            ("CLOSE_TIME", "23:00"),
            ("CLOSING_BUFFER_MINUTES", "30"),
            ("CLOSED_WEEKDAY", "Monday"),
            ("BUSINESS_TIMEZONE", "Europe/Madrid"),
            ("LOG_DIR", "/var/log/bookings"),
        ])
        .unwrap();
        assert_eq!(config.http_port, 8080);
        let hours = config.business_hours;
        assert_eq!(hours.open(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(hours.last_seating(), NaiveTime::from_hms_opt(22, 30, 0).unwrap());
        assert_eq!(hours.closed_day(), Weekday::Mon);
        assert_eq!(hours.timezone(), chrono_tz::Europe::Madrid);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/bookings"));
    }

    #[test]
    fn test_database_url_required_outside_development() {
        let err = load(&[("ENVIRONMENT", "production")]).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL must be set in production environment");

        let config =
            load(&[("ENVIRONMENT", "production"), ("DATABASE_URL", "sqlite:x.db")]).unwrap();
        assert!(!config.is_development());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(load(&[("HTTP_PORT", "port")]).is_err());
        assert!(load(&[("OPEN_TIME", "half past ten")]).is_err());
        assert!(load(&[("CLOSED_WEEKDAY", "Someday")]).is_err());
        assert!(load(&[("BUSINESS_TIMEZONE", "Mars/Olympus")]).is_err());
        assert!(load(&[("CLOSING_BUFFER_MINUTES", "-5")]).is_err());
        assert!(load(&[("CLOSING_BUFFER_MINUTES", "ninety")]).is_err());
        assert!(load(&[("OPEN_TIME", "23:00"), ("CLOSE_TIME", "22:00")]).is_err());
    }

    #[test]
    fn test_out_of_range_buffer_is_an_error() {
        let err = load(&[("CLOSING_BUFFER_MINUTES", "9223372036854775807")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "CLOSING_BUFFER_MINUTES is not a number: 9223372036854775807"
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = load(&[("HTTP_PORT", ""), ("LOG_DIR", " ")]).unwrap();
        assert_eq!(config.http_port, 5001);
        assert!(config.log_dir.is_none());
    }
}
