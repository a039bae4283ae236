//! Request body extraction
//!
//! Bodies arrive wrapped as `{ "data": { ... } }`. Malformed JSON is
//! reported through the same `{ error }` envelope as every other failure.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::Deserialize;
use serde_json::Value;
use shared::error::{AppError, AppResult};

use crate::utils::Payload;

/// `axum::Json` with rejections mapped to [`AppError`]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::invalid_request(rejection.body_text())),
        }
    }
}

/// The `{ data }` request envelope
#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub data: Option<Value>,
}

impl RequestBody {
    /// The `data` object, or a 400 when it is absent or not an object.
    pub fn into_data(self) -> AppResult<Payload> {
        match self.data {
            Some(Value::Object(map)) => Ok(map),
            Some(_) => Err(AppError::validation("data must be an object")),
            None => Err(AppError::validation("body must have a data property")),
        }
    }
}
