//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use whisky_core::{Bottle, WishlistItem};

/// Lists fetched by the collection and wishlist pages
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Bottles matching the collection page's current filters
    pub bottles: Vec<Bottle>,
    /// Wishlist entries
    pub wishlist: Vec<WishlistItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a bottle from the store by ID
pub fn store_remove_bottle(store: &AppStore, bottle_id: &str) {
    store.bottles().write().retain(|bottle| bottle.id != bottle_id);
}

/// Remove a wishlist entry from the store by ID
pub fn store_remove_wishlist_item(store: &AppStore, item_id: &str) {
    store.wishlist().write().retain(|item| item.id != item_id);
}
