//! Routed Pages

mod add_bottle;
mod bottle_detail;
mod collection;
mod distilleries;
mod distillery_detail;
mod edit_bottle;
mod login;
mod register;
mod taste_profile;
mod wishlist;

pub use add_bottle::AddBottle;
pub use bottle_detail::BottleDetail;
pub use collection::Collection;
pub use distilleries::Distilleries;
pub use distillery_detail::DistilleryDetail;
pub use edit_bottle::EditBottle;
pub use login::Login;
pub use register::Register;
pub use taste_profile::TasteProfile;
pub use wishlist::Wishlist;
