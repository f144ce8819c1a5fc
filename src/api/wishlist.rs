//! Wishlist Endpoints

use whisky_core::constants::LIST_LIMIT;
use whisky_core::query::encode_segment;
use whisky_core::{ApiError, Paginated, WishlistAdd, WishlistItem};

use super::{delete, get, post};

pub async fn list_wishlist() -> Result<Paginated<WishlistItem>, ApiError> {
    get(&format!("/wishlist?limit={}", LIST_LIMIT)).await
}

/// Fails with 409 "Whisky already in wishlist" on duplicates
pub async fn add_to_wishlist(args: &WishlistAdd<'_>) -> Result<WishlistItem, ApiError> {
    post("/wishlist", args).await
}

pub async fn remove_from_wishlist(id: &str) -> Result<(), ApiError> {
    delete(&format!("/wishlist/{}", encode_segment(id))).await
}
