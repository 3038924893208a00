use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::product_actor::ProductError;

/// Everything a product route can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or rule-breaking input. Carries one message per problem.
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Product(#[from] ProductError),
}

impl ApiError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::Validation(vec![message.into()])
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
            })
            .collect();
        ApiError::Validation(messages)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(mut messages) => {
                messages.sort();
                json_error(StatusCode::BAD_REQUEST, json!(messages))
            }
            ApiError::Product(e @ ProductError::NotFound(_)) => {
                json_error(StatusCode::NOT_FOUND, json!(e.to_string()))
            }
            ApiError::Product(e @ ProductError::ActorCommunicationError(_)) => {
                error!(error = %e, "Product store unavailable");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!("Internal server error"),
                )
            }
        }
    }
}

pub fn json_error(status: StatusCode, message: Value) -> Response {
    (
        status,
        Json(json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": message,
        })),
    )
        .into_response()
}
