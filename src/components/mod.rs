//! UI Components
//!
//! Reusable Leptos components for the storefront.

pub mod input_field;
pub mod loading;
pub mod nav;
pub mod product_card;
pub mod toast;

pub use input_field::InputField;
pub use loading::{CardSkeleton, InlineLoading, Loading};
pub use nav::Nav;
pub use product_card::ProductCard;
pub use toast::Toast;
