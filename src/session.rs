//! Session Storage
//!
//! Bearer token and signed-in user, persisted in browser local storage.

use gloo_storage::{LocalStorage, Storage};
use whisky_core::{ApiError, User};

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

pub fn token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn set_token(token: &str) -> Result<(), ApiError> {
    LocalStorage::set(TOKEN_KEY, token).map_err(|e| ApiError::Storage(e.to_string()))
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

pub fn is_authenticated() -> bool {
    token().is_some()
}

pub fn stored_user() -> Option<User> {
    LocalStorage::get(USER_KEY).ok()
}

pub fn store_user(user: &User) -> Result<(), ApiError> {
    LocalStorage::set(USER_KEY, user).map_err(|e| ApiError::Storage(e.to_string()))
}

pub fn clear_user() {
    LocalStorage::delete(USER_KEY);
}
