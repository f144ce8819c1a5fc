//! Bottle Endpoints
//!
//! The user's own collection.

use whisky_core::query::encode_segment;
use whisky_core::{ApiError, Bottle, BottlePayload, BottleQuery, ItemsResponse, Paginated, SimilarWhisky};

use super::{delete, get, post, put};

pub async fn list_bottles(query: &BottleQuery) -> Result<Paginated<Bottle>, ApiError> {
    get(&format!("/bottles?{}", query.to_query_string())).await
}

pub async fn get_bottle(id: &str) -> Result<Bottle, ApiError> {
    get(&format!("/bottles/{}", encode_segment(id))).await
}

pub async fn create_bottle(payload: &BottlePayload) -> Result<Bottle, ApiError> {
    post("/bottles", payload).await
}

pub async fn update_bottle(id: &str, payload: &BottlePayload) -> Result<Bottle, ApiError> {
    put(&format!("/bottles/{}", encode_segment(id)), payload).await
}

pub async fn delete_bottle(id: &str) -> Result<(), ApiError> {
    delete(&format!("/bottles/{}", encode_segment(id))).await
}

/// Reference whiskies closest to this bottle's flavor profile, scored server-side
pub async fn similar_whiskies(id: &str, limit: u32) -> Result<Vec<SimilarWhisky>, ApiError> {
    let response: ItemsResponse<SimilarWhisky> =
        get(&format!("/bottles/{}/similar?limit={}", encode_segment(id), limit)).await?;
    Ok(response.items)
}
