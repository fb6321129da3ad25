/**
 * Central Application State
 *
 * Owns the auth state machine, the token cache, the login form buffers,
 * and the channel that worker threads report back on.
 *
 * # Threading
 *
 * Network calls run on detached worker threads so the UI never blocks.
 * Each worker captures the generation it was dispatched under and sends
 * an [`AuthEvent`] back over an mpsc channel; [`AppState::process_auth_events`]
 * drains the channel once per frame and feeds the results to the state
 * machine, which drops anything stale.
 */

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

use crate::egui_app::api::ApiError;
use crate::egui_app::auth::{self, AuthResponse, AuthState};
use crate::egui_app::config::Config;
use crate::egui_app::token_store::TokenStore;
use crate::shared::user::UserDto;

/// Result of a background auth call, tagged with its dispatch generation
#[derive(Debug)]
pub enum AuthEvent {
    Login {
        generation: u64,
        result: Result<AuthResponse, ApiError>,
    },
    Whoami {
        generation: u64,
        result: Result<UserDto, ApiError>,
    },
}

/// Central application state for the desktop client
pub struct AppState {
    pub config: Config,
    pub token_store: TokenStore,
    pub auth_state: AuthState,
    pub email_input: String,
    pub password_input: String,
    events_tx: Sender<AuthEvent>,
    events_rx: Receiver<AuthEvent>,
}

impl AppState {
    /// Initialize from the durable token cache
    ///
    /// A cached token puts the state machine in `Loading` and kicks off a
    /// whoami check; otherwise the app starts logged out.
    pub fn new() -> Self {
        let config = Config::new();
        let token_store = TokenStore::new();
        let cached_token = token_store.get();
        let (events_tx, events_rx) = channel();

        let mut state = Self {
            config,
            token_store,
            auth_state: AuthState::new(cached_token.is_some()),
            email_input: String::new(),
            password_input: String::new(),
            events_tx,
            events_rx,
        };

        if let Some(token) = cached_token {
            state.spawn_whoami(token);
        }

        state
    }

    /// Verify a cached token against the server on a worker thread
    fn spawn_whoami(&mut self, token: String) {
        let generation = self.auth_state.generation();
        let config = self.config.clone();
        let tx = self.events_tx.clone();

        thread::spawn(move || {
            let result = auth::fetch_me(&config, &token);
            // Send fails only when the app is shutting down
            let _ = tx.send(AuthEvent::Whoami { generation, result });
        });
    }

    /// Submit the login form
    pub fn handle_login(&mut self) {
        if self.auth_state.is_logging_in {
            return;
        }

        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        if email.is_empty() || password.is_empty() {
            self.auth_state.error = Some("Email et mot de passe requis".to_string());
            return;
        }

        self.auth_state.begin_login();
        let generation = self.auth_state.generation();
        let config = self.config.clone();
        let tx = self.events_tx.clone();

        thread::spawn(move || {
            let result = auth::login(&config, &email, &password);
            let _ = tx.send(AuthEvent::Login { generation, result });
        });
    }

    /// Drain worker results, called once per frame
    pub fn process_auth_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AuthEvent::Login { generation, result } => match result {
                    Ok(response) => {
                        if self
                            .auth_state
                            .apply_login_success(generation, response.user)
                        {
                            if let Err(e) = self.token_store.set(&response.token) {
                                tracing::warn!("Failed to persist token: {}", e);
                            }
                            self.password_input.clear();
                        }
                    }
                    Err(e) => {
                        self.auth_state.apply_login_failure(generation, e.to_string());
                    }
                },
                AuthEvent::Whoami { generation, result } => match result {
                    Ok(user) => {
                        self.auth_state.apply_whoami_success(generation, user);
                    }
                    Err(e) if e.is_unauthenticated() => {
                        // Stale token: drop it so the next start skips whoami
                        if self.auth_state.apply_whoami_unauthenticated(generation) {
                            if let Err(e) = self.token_store.clear() {
                                tracing::warn!("Failed to clear token: {}", e);
                            }
                        }
                    }
                    Err(e) => {
                        self.auth_state.apply_whoami_failure(generation, e.to_string());
                    }
                },
            }
        }
    }

    /// Log out
    ///
    /// Local state and the token cache clear immediately; the server-side
    /// revoke is fire-and-forget.
    pub fn logout(&mut self) {
        let token = self.token_store.get();

        self.auth_state.logout();
        if let Err(e) = self.token_store.clear() {
            tracing::warn!("Failed to clear token: {}", e);
        }

        if let Some(token) = token {
            let config = self.config.clone();
            thread::spawn(move || {
                auth::post_logout(&config, &token);
            });
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
