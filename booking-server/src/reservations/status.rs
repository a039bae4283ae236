//! Reservation status guard
//!
//! Only blocks changes to finished reservations and unknown target values.
//! It does not enforce `booked → seated → finished` ordering: a booked
//! reservation may be marked finished directly.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationStatus};

/// Full edits are refused once the reservation is finished.
pub fn ensure_editable(reservation: &Reservation) -> AppResult<()> {
    if reservation.status.is_terminal() {
        return Err(AppError::new(ErrorCode::ReservationFinished));
    }
    Ok(())
}

/// Decide whether `current` may move to `requested`.
pub fn check_status_transition(
    current: ReservationStatus,
    requested: &str,
) -> AppResult<ReservationStatus> {
    if current.is_terminal() {
        return Err(AppError::new(ErrorCode::ReservationFinished));
    }
    if requested == ReservationStatus::Cancelled.as_str() {
        return Ok(ReservationStatus::Cancelled);
    }
    requested
        .parse()
        .map_err(|e: shared::models::UnknownStatus| {
            AppError::with_message(ErrorCode::InvalidStatus, e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    use ReservationStatus::*;

    #[test]
    fn test_finished_is_frozen() {
        for requested in ["booked", "seated", "finished", "cancelled", "bogus"] {
            let err = check_status_transition(Finished, requested).unwrap_err();
            assert_eq!(err.code, ErrorCode::ReservationFinished);
            assert_eq!(err.message, "a finished reservation cannot be updated");
        }
    }

    #[test]
    fn test_cancel_from_any_open_status() {
        for current in [Booked, Seated, Cancelled] {
            assert_eq!(check_status_transition(current, "cancelled"), Ok(Cancelled));
        }
    }

    #[test]
    fn test_unknown_target_rejected() {
        let err = check_status_transition(Booked, "unknown").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
        assert_eq!(err.message, "unknown status: unknown");

        let err = check_status_transition(Seated, "").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);
    }

    #[test]
    fn test_permissive_ordering_is_preserved() {
        assert_eq!(check_status_transition(Booked, "seated"), Ok(Seated));
        assert_eq!(check_status_transition(Seated, "finished"), Ok(Finished));
        assert_eq!(check_status_transition(Booked, "finished"), Ok(Finished));
        assert_eq!(check_status_transition(Seated, "booked"), Ok(Booked));
    }

    #[test]
    fn test_ensure_editable() {
        let mut reservation = Reservation {
            reservation_id: 1,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            mobile_number: "123".into(),
            reservation_date: NaiveDate::from_ymd_opt(2099, 6, 10).unwrap(),
            reservation_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            people: 2,
            status: Seated,
            created_at: 0,
            updated_at: 0,
        };
        assert!(ensure_editable(&reservation).is_ok());

        reservation.status = Finished;
        assert_eq!(
            ensure_editable(&reservation).unwrap_err().code,
            ErrorCode::ReservationFinished
        );
    }
}
