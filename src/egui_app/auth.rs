/**
 * Authentication State and API Calls
 *
 * Client-side auth state machine plus the HTTP calls that feed it.
 *
 * # State Machine
 *
 * Three phases: `LoggedOut`, `Loading`, `LoggedIn`.
 *
 * - Startup with a cached token → `Loading` until whoami settles
 * - Startup without a token → `LoggedOut`
 * - Successful login → `LoggedIn`, user seeded from the login response
 * - Whoami 401 → `LoggedOut` silently (stale token, no error banner)
 * - Explicit logout → `LoggedOut` immediately, server call best-effort
 *
 * # Staleness Guard
 *
 * Responses arrive from detached worker threads and carry the generation
 * they were dispatched under. Every transition that clears authenticated
 * state bumps the generation, so a whoami or login response that raced a
 * logout is dropped instead of resurrecting the session.
 */

use serde::{Deserialize, Serialize};

use crate::egui_app::api::{ApiClient, ApiError};
use crate::egui_app::config::Config;
use crate::shared::user::UserDto;

/// Authentication phase driving route protection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// No usable token; the login view is shown
    LoggedOut,
    /// A cached token exists and whoami is in flight
    Loading,
    /// Token verified (or freshly issued); protected content is shown
    LoggedIn,
}

/// Login response from the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

/// Client-side authentication state
///
/// Owned by the UI thread; worker threads never touch it directly, they
/// send results back tagged with the generation they started under.
#[derive(Debug)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<UserDto>,
    pub error: Option<String>,
    /// A login call is in flight; the form disables duplicate submissions
    pub is_logging_in: bool,
    generation: u64,
}

impl AuthState {
    /// Derive the initial state from whether a cached token exists
    pub fn new(has_cached_token: bool) -> Self {
        Self {
            phase: if has_cached_token {
                AuthPhase::Loading
            } else {
                AuthPhase::LoggedOut
            },
            user: None,
            error: None,
            is_logging_in: false,
            generation: 0,
        }
    }

    /// Generation to tag an outbound request with
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        generation != self.generation
    }

    /// Mark a login as in flight
    pub fn begin_login(&mut self) {
        self.is_logging_in = true;
        self.error = None;
    }

    /// Apply a successful login response
    ///
    /// Returns `true` when the result was applied; the caller then persists
    /// the token. A stale result is dropped and returns `false`.
    pub fn apply_login_success(&mut self, generation: u64, user: UserDto) -> bool {
        if self.is_stale(generation) {
            return false;
        }
        self.is_logging_in = false;
        self.phase = AuthPhase::LoggedIn;
        self.user = Some(user);
        self.error = None;
        true
    }

    /// Apply a failed login; the message is shown inline on the form
    pub fn apply_login_failure(&mut self, generation: u64, message: String) {
        if self.is_stale(generation) {
            return;
        }
        self.is_logging_in = false;
        self.error = Some(message);
    }

    /// Apply a successful whoami check (startup verification path)
    pub fn apply_whoami_success(&mut self, generation: u64, user: UserDto) -> bool {
        if self.is_stale(generation) {
            return false;
        }
        self.phase = AuthPhase::LoggedIn;
        self.user = Some(user);
        true
    }

    /// Apply a whoami 401: the cached token is dead
    ///
    /// Demotes to `LoggedOut` without surfacing an error (an expired token
    /// is expected, not exceptional). Returns `true` when the caller must
    /// clear the token cache.
    pub fn apply_whoami_unauthenticated(&mut self, generation: u64) -> bool {
        if self.is_stale(generation) {
            return false;
        }
        self.generation += 1;
        self.phase = AuthPhase::LoggedOut;
        self.user = None;
        self.error = None;
        true
    }

    /// Apply a whoami transport/server failure
    ///
    /// Demotes to `LoggedOut` with the error surfaced. The cached token is
    /// kept: only a 401 proves it dead.
    pub fn apply_whoami_failure(&mut self, generation: u64, message: String) {
        if self.is_stale(generation) {
            return;
        }
        self.generation += 1;
        self.phase = AuthPhase::LoggedOut;
        self.user = None;
        self.error = Some(message);
    }

    /// Explicit logout
    ///
    /// Local state clears unconditionally; the server-side revoke happens
    /// elsewhere and its outcome is irrelevant here. The generation bump
    /// invalidates every in-flight response.
    pub fn logout(&mut self) {
        self.generation += 1;
        self.phase = AuthPhase::LoggedOut;
        self.user = None;
        self.error = None;
        self.is_logging_in = false;
    }
}

/// Log in with email and password
pub fn login(config: &Config, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let client = ApiClient::new(config, None)?;
    client.post_json(
        "/api/login",
        &serde_json::json!({ "email": email, "password": password }),
    )
}

/// Fetch the current user for a cached token
pub fn fetch_me(config: &Config, token: &str) -> Result<UserDto, ApiError> {
    let client = ApiClient::new(config, Some(token.to_string()))?;
    client.get_json("/api/me")
}

/// Best-effort server-side token revocation
///
/// Errors are swallowed: local state has already cleared and the token is
/// gone from the cache either way.
pub fn post_logout(config: &Config, token: &str) {
    match ApiClient::new(config, Some(token.to_string())) {
        Ok(client) => {
            if let Err(e) = client.post_empty("/api/logout") {
                tracing::debug!("Logout request failed (ignored): {}", e);
            }
        }
        Err(e) => tracing::debug!("Logout client build failed (ignored): {}", e),
    }
}
