//! Taste Profile Endpoint

use whisky_core::{ApiError, TasteProfile};

use super::get;

pub async fn taste_profile() -> Result<TasteProfile, ApiError> {
    get("/profile/taste").await
}
