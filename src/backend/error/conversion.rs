/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses so handlers can return
 * `Result<_, AuthError>` directly.
 *
 * # Response Formats
 *
 * - `InvalidCredentials` → `422 {"errors": {"email": ["..."]}}` (field-keyed
 *   validation error, identical for unknown email and wrong password)
 * - `Unauthenticated` → `401 {"message": "Unauthenticated."}`
 * - everything else → `500 {"message": "Server error"}`, details logged only
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::{AuthError, INVALID_CREDENTIALS_MESSAGE};

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::InvalidCredentials => {
                let body = serde_json::json!({
                    "errors": {
                        "email": [INVALID_CREDENTIALS_MESSAGE],
                    },
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AuthError::Unauthenticated => {
                let body = serde_json::json!({ "message": "Unauthenticated." });
                (StatusCode::UNAUTHORIZED, Json(body)).into_response()
            }
            AuthError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error()
            }
            AuthError::Hash(e) => {
                tracing::error!("Password hash error: {:?}", e);
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    let body = serde_json::json!({ "message": "Server error" });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
