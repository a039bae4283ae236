//! Dining Table API

use axum::extract::{Path, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Extension, Router};
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::DiningTable;

use super::extract::{JsonBody, RequestBody};
use crate::db::tables::SeatOutcome;
use crate::db::{reservations as reservation_db, tables as db};
use crate::error::ServiceResult;
use crate::state::AppState;
use crate::tables::{check_can_finish, check_can_seat, validate_seat_request, validate_table};

pub fn router(state: &AppState) -> Router<AppState> {
    let by_id = Router::new()
        .route("/tables/{table_id}", get(read))
        .route("/tables/{table_id}/seat", put(seat).delete(finish))
        .route_layer(middleware::from_fn_with_state(state.clone(), load_table));

    Router::new()
        .route("/tables", get(list).post(create))
        .merge(by_id)
}

async fn load_table(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> ServiceResult<Response> {
    let not_found = || AppError::table_not_found(&raw_id);

    let table_id: i64 = raw_id.parse().map_err(|_| not_found())?;
    let table = db::read(&state.pool, table_id).await?.ok_or_else(not_found)?;

    request.extensions_mut().insert(table);
    Ok(next.run(request).await)
}

/// GET /tables
pub async fn list(State(state): State<AppState>) -> ServiceResult<ApiResponse<Vec<DiningTable>>> {
    let tables = db::list(&state.pool).await?;
    Ok(ApiResponse::ok(tables))
}

/// POST /tables
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RequestBody>,
) -> ServiceResult<ApiResponse<DiningTable>> {
    let data = validate_table(&body.into_data()?)?;
    let table = db::create(&state.pool, &data).await?;
    tracing::info!(table_id = table.table_id, table_name = %table.table_name, "Table created");
    Ok(ApiResponse::created(table))
}

/// GET /tables/{table_id}
pub async fn read(Extension(table): Extension<DiningTable>) -> ApiResponse<DiningTable> {
    ApiResponse::ok(table)
}

/// PUT /tables/{table_id}/seat - seat a booked reservation
pub async fn seat(
    State(state): State<AppState>,
    Extension(table): Extension<DiningTable>,
    JsonBody(body): JsonBody<RequestBody>,
) -> ServiceResult<ApiResponse<DiningTable>> {
    let reservation_id = validate_seat_request(&body.into_data()?)?;
    let reservation = reservation_db::read(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| AppError::reservation_not_found(reservation_id))?;

    check_can_seat(&table, &reservation)?;

    // either row may have changed since it was loaded
    let seated = match db::seat(&state.pool, table.table_id, reservation_id).await? {
        SeatOutcome::Seated(seated) => seated,
        SeatOutcome::TableTaken => {
            return Err(AppError::with_message(
                ErrorCode::TableOccupied,
                format!("Table {} is occupied", table.table_name),
            )
            .into());
        }
        SeatOutcome::NotBooked => {
            return Err(AppError::with_message(
                ErrorCode::ReservationNotBooked,
                format!("Reservation {reservation_id} is no longer booked"),
            )
            .into());
        }
    };
    tracing::info!(table_id = seated.table_id, reservation_id, "Reservation seated");
    Ok(ApiResponse::ok(seated))
}

/// DELETE /tables/{table_id}/seat - finish the seated reservation and free the table
pub async fn finish(
    State(state): State<AppState>,
    Extension(table): Extension<DiningTable>,
) -> ServiceResult<ApiResponse<DiningTable>> {
    let reservation_id = check_can_finish(&table)?;

    let freed = db::finish(&state.pool, table.table_id, reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::TableNotOccupied,
                format!("Table {} is not occupied", table.table_id),
            )
        })?;
    tracing::info!(table_id = freed.table_id, reservation_id, "Table freed");
    Ok(ApiResponse::ok(freed))
}
