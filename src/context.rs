//! Authentication Context
//!
//! Signed-in user and auth error, shared via Leptos Context API.

use leptos::prelude::*;
use whisky_core::{ApiError, AuthResponse, Credentials, User};

use crate::{api, session};

/// Auth state provided to every page
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Signed-in user (restored from storage on startup) - read
    pub user: ReadSignal<Option<User>>,
    /// Signed-in user - write
    set_user: WriteSignal<Option<User>>,
    /// Message from the last failed login/register - read
    pub error: ReadSignal<Option<String>>,
    /// Message from the last failed login/register - write
    set_error: WriteSignal<Option<String>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (user, set_user) = signal(session::stored_user());
        let (error, set_error) = signal(None);
        Self { user, set_user, error, set_error }
    }

    /// Token present and a user on record
    pub fn is_logged_in(&self) -> bool {
        // read the signal first so callers always subscribe to it
        let has_user = self.user.with(Option::is_some);
        has_user && session::is_authenticated()
    }

    pub async fn login(self, email: String, password: String) -> Result<(), ApiError> {
        self.set_error.set(None);
        let result = api::login(&Credentials { email: &email, password: &password }).await;
        self.finish(result, "Login failed")
    }

    pub async fn register(self, email: String, password: String) -> Result<(), ApiError> {
        self.set_error.set(None);
        let result = api::register(&Credentials { email: &email, password: &password }).await;
        self.finish(result, "Registration failed")
    }

    pub fn logout(&self) {
        session::clear_token();
        session::clear_user();
        self.set_user.set(None);
        log::info!("[Auth] Logged out");
    }

    fn finish(&self, result: Result<AuthResponse, ApiError>, fallback: &str) -> Result<(), ApiError> {
        let stored = result.and_then(|resp| {
            session::set_token(&resp.access_token)?;
            session::store_user(&resp.user)?;
            Ok(resp.user)
        });
        match stored {
            Ok(user) => {
                log::info!("[Auth] Signed in as {}", user.email);
                self.set_user.set(Some(user));
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                self.set_error.set(Some(if message.is_empty() { fallback.to_string() } else { message }));
                Err(e)
            }
        }
    }
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
