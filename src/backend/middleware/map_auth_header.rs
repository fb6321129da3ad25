/**
 * Authorization Header Remapping Shim
 *
 * Some deployment environments (Apache CGI/FastCGI setups, certain shared
 * hosts and proxies) strip or relocate the standard `Authorization` header.
 * This middleware copies the credential back from known alternate slots so
 * the rest of the stack only ever reads `Authorization`.
 *
 * This is purely a transport concern executed before authentication
 * parsing; it never overwrites an `Authorization` header that is already
 * present, and it makes no security decision of its own.
 */

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Alternate header slots checked in order when `Authorization` is absent
pub const ALTERNATE_AUTH_HEADERS: [&str; 2] = ["x-authorization", "redirect-http-authorization"];

/// Header remapping middleware
///
/// Copies the first populated alternate header into `Authorization` when
/// the standard header is missing, then forwards the request unchanged.
pub async fn map_auth_header(mut request: Request, next: Next) -> Response {
    if !request.headers().contains_key(AUTHORIZATION) {
        let relocated = ALTERNATE_AUTH_HEADERS
            .iter()
            .find_map(|name| request.headers().get(*name).cloned());

        if let Some(value) = relocated {
            tracing::debug!("Relocated bearer credential from alternate header");
            request.headers_mut().insert(AUTHORIZATION, value);
        }
    }

    next.run(request).await
}
