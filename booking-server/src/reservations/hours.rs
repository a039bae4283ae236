//! Business hours
//!
//! Opening time, closing time, closing buffer and the weekly closed day,
//! plus the timezone that defines "now" for the restaurant.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc, Weekday};
use chrono_tz::Tz;

/// Invalid business hours configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoursError {
    #[error("closing time {close} must be after opening time {open}")]
    CloseBeforeOpen { open: NaiveTime, close: NaiveTime },
    #[error("closing buffer of {minutes} minutes leaves no bookable time")]
    BufferTooLong { minutes: i64 },
    #[error("closing buffer must not be negative")]
    NegativeBuffer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open: NaiveTime,
    close: NaiveTime,
    closing_buffer: TimeDelta,
    closed_day: Weekday,
    timezone: Tz,
}

impl Default for BusinessHours {
    /// 10:30 to 22:30, last seating an hour before close, closed on Tuesdays
    fn default() -> Self {
        Self {
            open: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or(NaiveTime::MIN),
            close: NaiveTime::from_hms_opt(22, 30, 0).unwrap_or(NaiveTime::MIN),
            closing_buffer: TimeDelta::minutes(60),
            closed_day: Weekday::Tue,
            timezone: Tz::UTC,
        }
    }
}

impl BusinessHours {
    pub fn new(
        open: NaiveTime,
        close: NaiveTime,
        closing_buffer: TimeDelta,
        closed_day: Weekday,
        timezone: Tz,
    ) -> Result<Self, HoursError> {
        if close <= open {
            return Err(HoursError::CloseBeforeOpen { open, close });
        }
        if closing_buffer < TimeDelta::zero() {
            return Err(HoursError::NegativeBuffer);
        }
        if close - open <= closing_buffer {
            return Err(HoursError::BufferTooLong {
                minutes: closing_buffer.num_minutes(),
            });
        }

        Ok(Self {
            open,
            close,
            closing_buffer,
            closed_day,
            timezone,
        })
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }

    pub fn closed_day(&self) -> Weekday {
        self.closed_day
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Latest bookable time: closing time minus the closing buffer
    pub fn last_seating(&self) -> NaiveTime {
        self.close - self.closing_buffer
    }

    pub fn is_closed_on(&self, date: NaiveDate) -> bool {
        date.weekday() == self.closed_day
    }

    /// Both ends inclusive: `open..=last_seating`
    pub fn accepts(&self, time: NaiveTime) -> bool {
        time >= self.open && time <= self.last_seating()
    }

    /// Wall-clock time at the restaurant
    pub fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_hours() {
        let hours = BusinessHours::default();
        assert_eq!(hours.open(), hm(10, 30));
        assert_eq!(hours.close(), hm(22, 30));
        assert_eq!(hours.last_seating(), hm(21, 30));
        assert_eq!(hours.closed_day(), Weekday::Tue);
    }

    #[test]
    fn test_accepts_bounds() {
        let hours = BusinessHours::default();
        assert!(!hours.accepts(hm(10, 29)));
        assert!(hours.accepts(hm(10, 30)));
        assert!(hours.accepts(hm(21, 30)));
        assert!(!hours.accepts(hm(21, 31)));
        assert!(!hours.accepts(hm(22, 0)));
    }

    #[test]
    fn test_closed_day() {
        let hours = BusinessHours::default();
        // 2099-06-09 is a Tuesday
        assert!(hours.is_closed_on(NaiveDate::from_ymd_opt(2099, 6, 9).unwrap()));
        assert!(!hours.is_closed_on(NaiveDate::from_ymd_opt(2099, 6, 10).unwrap()));
    }

    #[test]
    fn test_new_rejects_inverted_hours() {
        let err = BusinessHours::new(
            hm(22, 0),
            hm(10, 0),
            TimeDelta::minutes(30),
            Weekday::Mon,
            Tz::UTC,
        )
        .unwrap_err();
        assert!(matches!(err, HoursError::CloseBeforeOpen { .. }));
    }

    #[test]
    fn test_new_rejects_buffer_covering_whole_day() {
        let err = BusinessHours::new(
            hm(10, 0),
            hm(11, 0),
            TimeDelta::minutes(60),
            Weekday::Mon,
            Tz::UTC,
        )
        .unwrap_err();
        assert_eq!(err, HoursError::BufferTooLong { minutes: 60 });

        let err = BusinessHours::new(
            hm(10, 0),
            hm(11, 0),
            TimeDelta::minutes(-5),
            Weekday::Mon,
            Tz::UTC,
        )
        .unwrap_err();
        assert_eq!(err, HoursError::NegativeBuffer);
    }

    #[test]
    fn test_custom_hours() {
        let hours = BusinessHours::new(
            hm(17, 0),
            hm(23, 0),
            TimeDelta::minutes(45),
            Weekday::Mon,
            chrono_tz::Europe::Madrid,
        )
        .unwrap();
        assert_eq!(hours.last_seating(), hm(22, 15));
        assert_eq!(hours.timezone(), chrono_tz::Europe::Madrid);
    }
}
