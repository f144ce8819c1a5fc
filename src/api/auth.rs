//! Auth Endpoints

use whisky_core::{ApiError, AuthResponse, Credentials};

use super::post;

pub async fn login(credentials: &Credentials<'_>) -> Result<AuthResponse, ApiError> {
    post("/auth/login", credentials).await
}

pub async fn register(credentials: &Credentials<'_>) -> Result<AuthResponse, ApiError> {
    post("/auth/register", credentials).await
}
