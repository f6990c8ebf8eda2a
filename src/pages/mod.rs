//! Pages
//!
//! Top-level page components for each route.

pub mod cart;
pub mod checkout;
pub mod home;
pub mod login;
pub mod order_confirmation;
pub mod order_details;
pub mod order_history;
pub mod order_management;
pub mod product_details;
pub mod product_management;
pub mod products;
pub mod profile;
pub mod search_results;
pub mod signup;
pub mod staff_dashboard;
pub mod staff_login;

pub use cart::Cart;
pub use checkout::Checkout;
pub use home::Home;
pub use login::Login;
pub use order_confirmation::OrderConfirmation;
pub use order_details::OrderDetails;
pub use order_history::OrderHistory;
pub use order_management::OrderManagement;
pub use product_details::ProductDetails;
pub use product_management::ProductManagement;
pub use products::Products;
pub use profile::Profile;
pub use search_results::SearchResults;
pub use signup::Signup;
pub use staff_dashboard::StaffDashboard;
pub use staff_login::StaffLogin;
