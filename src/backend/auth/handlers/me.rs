/**
 * Current User Handler
 *
 * Implements the handler for GET /api/me, which returns the user bound to
 * the presented bearer token.
 *
 * # Authentication
 *
 * The route sits behind the auth middleware, which resolves the token and
 * attaches the user to the request. A missing or invalid token never
 * reaches this handler; it is rejected with a 401 upstream.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::user::UserDto;

/// Current user handler
///
/// Returns the same user shape as the login response, so the client can use
/// either interchangeably.
///
/// # Example Response
///
/// ```json
/// {"id": "1", "name": "Alice", "email": "a@x.com", "role": "user"}
/// ```
pub async fn get_me(AuthUser(authenticated): AuthUser) -> Json<UserDto> {
    Json(authenticated.user.to_dto())
}
