//! Distillery Endpoints
//!
//! Public reference catalog.

use whisky_core::constants::LIST_LIMIT;
use whisky_core::query::encode_segment;
use whisky_core::{
    ApiError, DistilleryDetail, DistilleryQuery, DistillerySummary, Paginated, ReferenceWhisky,
};

use super::get;

pub async fn list_distilleries(query: &DistilleryQuery) -> Result<Paginated<DistillerySummary>, ApiError> {
    get(&format!("/distilleries?{}", query.to_query_string())).await
}

pub async fn get_distillery(slug: &str) -> Result<DistilleryDetail, ApiError> {
    get(&format!("/distilleries/{}", encode_segment(slug))).await
}

pub async fn distillery_whiskies(slug: &str) -> Result<Paginated<ReferenceWhisky>, ApiError> {
    get(&format!("/distilleries/{}/whiskies?limit={}", encode_segment(slug), LIST_LIMIT)).await
}
