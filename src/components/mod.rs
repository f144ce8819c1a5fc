//! UI Components
//!
//! Reusable Leptos components.

mod bottle_form;
mod delete_confirm_button;
mod error_boundary;
mod flavor_profile_input;
mod layout;
mod loading_spinner;
mod protected;
mod wishlist_button;

pub use bottle_form::BottleForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_boundary::AppErrorBoundary;
pub use flavor_profile_input::FlavorProfileInput;
pub use layout::Layout;
pub use loading_spinner::LoadingSpinner;
pub use protected::Protected;
pub use wishlist_button::AddToWishlistButton;
