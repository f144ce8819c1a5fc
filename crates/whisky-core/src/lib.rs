//! Whisky Tracker Core
//!
//! Backend JSON shapes and the pure helpers the UI builds on.
//! Nothing in here touches the browser.

pub mod config;
pub mod constants;
pub mod error;
pub mod flavor;
pub mod form;
pub mod format;
pub mod models;
pub mod query;
pub mod validation;

pub use config::ApiConfig;
pub use error::ApiError;
pub use flavor::FlavorProfile;
pub use form::{BottleFormData, BottlePayload};
pub use models::*;
pub use query::{BottleQuery, DistilleryQuery};
