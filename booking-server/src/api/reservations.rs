//! Reservation API
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | /reservations?date= or ?mobile_number= | [`list`] |
//! | POST | /reservations | [`create`] |
//! | GET | /reservations/{reservation_id} | [`read`] |
//! | PUT | /reservations/{reservation_id} | [`update`] |
//! | PUT | /reservations/{reservation_id}/status | [`update_status`] |

use axum::extract::{Path, Query, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Extension, Router};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError};
use shared::models::Reservation;

use super::extract::{JsonBody, RequestBody};
use crate::db::reservations as db;
use crate::error::ServiceResult;
use crate::reservations::{check_status_transition, ensure_editable, validate_reservation};
use crate::state::AppState;
use crate::utils::time::parse_date;
use crate::utils::validation::{require_fields, text_field};

pub fn router(state: &AppState) -> Router<AppState> {
    let by_id = Router::new()
        .route("/reservations/{reservation_id}", get(read).put(update))
        .route("/reservations/{reservation_id}/status", put(update_status))
        .route_layer(middleware::from_fn_with_state(state.clone(), load_reservation));

    Router::new()
        .route("/reservations", get(list).post(create))
        .merge(by_id)
}

/// Resolve `{reservation_id}` and attach the row as an `Extension`,
/// answering 404 when it does not exist.
async fn load_reservation(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> ServiceResult<Response> {
    let not_found = || AppError::reservation_not_found(&raw_id);

    let reservation_id: i64 = raw_id.parse().map_err(|_| not_found())?;
    let reservation = db::read(&state.pool, reservation_id)
        .await?
        .ok_or_else(not_found)?;

    request.extensions_mut().insert(reservation);
    Ok(next.run(request).await)
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub mobile_number: Option<String>,
}

/// GET /reservations - by date (open reservations only) or by mobile number
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ServiceResult<ApiResponse<Vec<Reservation>>> {
    let rows = match (query.date, query.mobile_number) {
        (Some(date), _) => {
            let date = parse_date(&date)
                .ok_or_else(|| AppError::validation("date must be a date in YYYY-MM-DD format"))?;
            db::list_by_date(&state.pool, date).await?
        }
        (None, Some(mobile_number)) => db::search_by_mobile(&state.pool, &mobile_number).await?,
        (None, None) => {
            return Err(AppError::validation(
                "a date or mobile_number query parameter is required",
            )
            .into());
        }
    };
    Ok(ApiResponse::ok(rows))
}

/// POST /reservations
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RequestBody>,
) -> ServiceResult<ApiResponse<Reservation>> {
    let payload = body.into_data()?;
    let input = validate_reservation(&payload, &state.validation_context())?;

    let reservation = db::create(&state.pool, &input).await?;
    tracing::info!(reservation_id = reservation.reservation_id, "Reservation created");
    Ok(ApiResponse::created(reservation))
}

/// GET /reservations/{reservation_id}
pub async fn read(Extension(reservation): Extension<Reservation>) -> ApiResponse<Reservation> {
    ApiResponse::ok(reservation)
}

/// PUT /reservations/{reservation_id} - full edit, validated like a new booking
pub async fn update(
    State(state): State<AppState>,
    Extension(existing): Extension<Reservation>,
    JsonBody(body): JsonBody<RequestBody>,
) -> ServiceResult<ApiResponse<Reservation>> {
    ensure_editable(&existing)?;

    let payload = body.into_data()?;
    let input = validate_reservation(&payload, &state.validation_context())?;

    let reservation_id = existing.reservation_id;
    let reservation = db::update(&state.pool, reservation_id, &input)
        .await?
        .ok_or_else(|| AppError::reservation_not_found(reservation_id))?;
    Ok(ApiResponse::ok(reservation))
}

/// PUT /reservations/{reservation_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Extension(existing): Extension<Reservation>,
    JsonBody(body): JsonBody<RequestBody>,
) -> ServiceResult<ApiResponse<Reservation>> {
    let payload = body.into_data()?;
    require_fields(&payload, &["status"])?;
    let requested = text_field(&payload, "status")?;

    let status = check_status_transition(existing.status, requested)?;

    let reservation_id = existing.reservation_id;
    let reservation = db::update_status(&state.pool, reservation_id, status)
        .await?
        .ok_or_else(|| AppError::reservation_not_found(reservation_id))?;
    tracing::info!(
        reservation_id,
        from = %existing.status,
        to = %reservation.status,
        "Reservation status changed"
    );
    Ok(ApiResponse::ok(reservation))
}
