//! HTTP API Client
//!
//! Functions for communicating with the AWEStore REST API. Every function
//! performs one request and returns parsed data or a normalized [`ApiError`].
//! Identity rides redundantly as a query parameter and a custom header
//! (`X-User-ID` / `X-Staff-ID`) to match the service's auth scheme.

use gloo_net::http::{Request, Response};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("awestore_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("awestore_api_url", url);
        }
    }
}

// ============ Error Type ============

/// Normalized error shape shared by every operation
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiError {
    pub fn message(msg: impl Into<String>) -> Self {
        Self { error: msg.into(), details: None }
    }

    fn network(e: gloo_net::Error) -> Self {
        Self::message(format!("Network error: {}", e))
    }

    fn parse(e: gloo_net::Error) -> Self {
        Self::message(format!("Parse error: {}", e))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.error, details),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Decode the service's `{error}` body, falling back to a fixed message
async fn decode_error(response: Response, fallback: &str) -> ApiError {
    response.json::<ApiError>().await
        .unwrap_or(ApiError { error: fallback.to_string(), details: None })
}

// ============ Records ============

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Product {
    #[serde(rename = "productId")]
    pub product_id: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<u32>,
}

impl Product {
    /// Discount percentage, zero when the product is not on sale
    pub fn discount(&self) -> f64 {
        self.discount_percentage.unwrap_or(0.0)
    }

    pub fn on_sale(&self) -> bool {
        self.discount() > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CartItem {
    #[serde(rename = "cartItemId")]
    pub cart_item_id: u32,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "productId")]
    pub product_id: u32,
    pub quantity: u32,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// Subtotal over a cart snapshot: sum of price x quantity
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.price * item.quantity as f64).sum()
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: u32,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    // Stored as opaque JSON server-side; never edited client-side
    #[serde(default)]
    pub shipping: Option<serde_json::Value>,
    #[serde(default)]
    pub payment: Option<serde_json::Value>,
    // Present only on staff-side reads
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Order {
    /// Human-readable order date, falling back to the raw timestamp
    pub fn placed_on(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.format("%B %e, %Y").to_string())
            .unwrap_or_else(|_| self.timestamp.clone())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct OrderItem {
    #[serde(rename = "orderItemId")]
    pub order_item_id: u32,
    #[serde(rename = "orderId")]
    pub order_id: u32,
    #[serde(rename = "productId")]
    pub product_id: u32,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct StaffMember {
    #[serde(rename = "staffId")]
    pub staff_id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub created_at: String,
}

impl StaffMember {
    pub fn joined_on(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%B %e, %Y").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserProfile {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ============ Auth ============

#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "userId")]
    pub user_id: serde_json::Value,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// The service returns numeric user ids; storage holds them as strings
    pub fn user_id_string(&self) -> String {
        match &self.user_id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct StaffAuthResponse {
    #[serde(rename = "staffId")]
    pub staff_id: serde_json::Value,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl StaffAuthResponse {
    pub fn staff_id_string(&self) -> String {
        match &self.staff_id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Register a new customer account
pub async fn signup(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct SignupRequest {
        name: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/users", api_base))
        .json(&SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Signup failed").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Log in an existing customer
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Invalid credentials").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Log in a staff member
pub async fn staff_login(email: &str, password: &str) -> Result<StaffAuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/staff/login", api_base))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Invalid credentials").await);
    }

    response.json().await.map_err(ApiError::parse)
}

// ============ Catalog ============

/// Fetch the full product catalog
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/products", api_base))
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to load products").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Fetch a single product by id
pub async fn fetch_product(product_id: u32) -> Result<Product, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/products/{}", api_base, product_id))
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Product not found").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Trimmed query, or `None` when there is nothing to search for
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Statuses the search endpoint uses for "nothing matched" rather than failure
pub fn is_empty_result_status(status: u16) -> bool {
    status == 400 || status == 404
}

/// Search the catalog. Empty or whitespace-only queries short-circuit to an
/// empty list without touching the network; a remote 400/404 is "no results".
pub async fn search_products(query: &str) -> Result<Vec<Product>, ApiError> {
    let Some(query) = normalize_query(query) else {
        return Ok(Vec::new());
    };

    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/search", api_base))
        .query([("q", query)])
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        if is_empty_result_status(response.status()) {
            return Ok(Vec::new());
        }
        return Err(decode_error(response, "Search failed").await);
    }

    response.json().await.map_err(ApiError::parse)
}

// ============ Cart ============

/// Fetch the cart for a user
pub async fn fetch_cart(user_id: &str) -> Result<Vec<CartItem>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/cart", api_base))
        .query([("userId", user_id)])
        .header("X-User-ID", user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to load cart").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Add a product to the cart
pub async fn add_to_cart(user_id: &str, product_id: u32, quantity: u32) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct AddToCartRequest {
        #[serde(rename = "userId")]
        user_id: String,
        #[serde(rename = "productId")]
        product_id: u32,
        quantity: u32,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/cart", api_base))
        .header("X-User-ID", user_id)
        .json(&AddToCartRequest {
            user_id: user_id.to_string(),
            product_id,
            quantity,
        })
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to add to cart").await);
    }

    Ok(())
}

/// Change the quantity of a cart line (must stay >= 1)
pub async fn update_cart_item(user_id: &str, product_id: u32, quantity: u32) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct UpdateCartRequest {
        #[serde(rename = "userId")]
        user_id: String,
        quantity: u32,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/api/cart-items/{}", api_base, product_id))
        .header("X-User-ID", user_id)
        .json(&UpdateCartRequest {
            user_id: user_id.to_string(),
            quantity,
        })
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to update cart").await);
    }

    Ok(())
}

/// Remove a single product from the cart
pub async fn remove_cart_item(user_id: &str, product_id: u32) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/api/cart-items/{}", api_base, product_id))
        .query([("userId", user_id)])
        .header("X-User-ID", user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to remove item").await);
    }

    Ok(())
}

/// Empty the cart entirely
pub async fn clear_cart(user_id: &str) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/api/cart", api_base))
        .query([("userId", user_id)])
        .header("X-User-ID", user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to clear cart").await);
    }

    Ok(())
}

// ============ Profile ============

/// Fetch a user's profile
pub async fn fetch_user_profile(user_id: &str) -> Result<UserProfile, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/users/{}", api_base, user_id))
        .header("X-User-ID", user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to load profile").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Update a user's profile
pub async fn update_user_profile(user_id: &str, profile: &UserProfile) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/api/users/{}", api_base, user_id))
        .header("X-User-ID", user_id)
        .json(profile)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to update profile").await);
    }

    Ok(())
}

// ============ Orders ============

#[derive(Clone, Debug, serde::Serialize)]
pub struct ShippingInfo {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Payment summary: only the cardholder name and last four digits leave the client
#[derive(Clone, Debug, serde::Serialize)]
pub struct PaymentSummary {
    #[serde(rename = "cardName")]
    pub card_name: String,
    pub last4: String,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct OrderRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub items: Vec<CartItem>,
    pub total: String,
    pub shipping: ShippingInfo,
    pub payment: PaymentSummary,
    pub timestamp: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct OrderPlacedResponse {
    #[serde(rename = "orderId")]
    pub order_id: u32,
    #[serde(default)]
    pub message: Option<String>,
}

/// Place an order from the current cart contents
pub async fn place_order(order: &OrderRequest) -> Result<OrderPlacedResponse, ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/checkout", api_base))
        .header("X-User-ID", &order.user_id)
        .json(order)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to place order").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Fetch a customer's order history
pub async fn fetch_order_history(user_id: &str) -> Result<Vec<Order>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/orders", api_base))
        .query([("userId", user_id)])
        .header("X-User-ID", user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to load orders").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Fetch one of the customer's own orders
pub async fn fetch_order_details(user_id: &str, order_id: u32) -> Result<Order, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/orders/{}", api_base, order_id))
        .query([("userId", user_id)])
        .header("X-User-ID", user_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Order not found").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Staff-wide order list
pub async fn fetch_all_orders(staff_id: &str) -> Result<Vec<Order>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/orders/all", api_base))
        .query([("staffId", staff_id)])
        .header("X-Staff-ID", staff_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to load orders").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Staff view of a single order, including customer details
pub async fn fetch_order_details_staff(staff_id: &str, order_id: u32) -> Result<Order, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/orders/{}", api_base, order_id))
        .query([("staffId", staff_id)])
        .header("X-Staff-ID", staff_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Order not found").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Move an order to a new fulfillment status
pub async fn update_order_status(staff_id: &str, order_id: u32, status: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct StatusRequest {
        status: String,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/api/orders/{}", api_base, order_id))
        .query([("staffId", staff_id)])
        .header("X-Staff-ID", staff_id)
        .json(&StatusRequest { status: status.to_string() })
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to update order").await);
    }

    Ok(())
}

// ============ Staff Admin ============

/// Staff create/update payload; password is omitted when left blank on edit
#[derive(Clone, Debug, serde::Serialize)]
pub struct StaffPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: String,
}

/// List all staff members
pub async fn fetch_staff_list(staff_id: &str) -> Result<Vec<StaffMember>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/staff", api_base))
        .header("X-Staff-ID", staff_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to load staff list").await);
    }

    response.json().await.map_err(ApiError::parse)
}

/// Create a staff member
pub async fn create_staff(staff_id: &str, payload: &StaffPayload) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/staff", api_base))
        .header("X-Staff-ID", staff_id)
        .json(payload)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to create staff").await);
    }

    Ok(())
}

/// Update a staff member (acting staff id distinct from the target id)
pub async fn update_staff(staff_id: &str, target_id: u32, payload: &StaffPayload) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/api/staff/{}", api_base, target_id))
        .header("X-Staff-ID", staff_id)
        .json(payload)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to update staff").await);
    }

    Ok(())
}

/// Delete a staff member
pub async fn delete_staff(staff_id: &str, target_id: u32) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/api/staff/{}", api_base, target_id))
        .header("X-Staff-ID", staff_id)
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to delete staff").await);
    }

    Ok(())
}

// ============ Product Admin ============

/// New product payload; numeric fields already defaulted at the form boundary
#[derive(Clone, Debug, serde::Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub discount_percentage: f64,
    pub original_price: f64,
    #[serde(rename = "categoryId")]
    pub category_id: Option<u32>,
}

/// Create a product (staff only)
pub async fn create_product(staff_id: &str, product: &NewProduct) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/products", api_base))
        .header("X-Staff-ID", staff_id)
        .json(product)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(decode_error(response, "Failed to create product").await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query_trims() {
        assert_eq!(normalize_query("  laptop  "), Some("laptop"));
    }

    #[test]
    fn test_normalize_query_rejects_whitespace() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn test_empty_result_statuses() {
        assert!(is_empty_result_status(400));
        assert!(is_empty_result_status(404));
        assert!(!is_empty_result_status(401));
        assert!(!is_empty_result_status(500));
    }

    #[test]
    fn test_cart_total_sums_price_times_quantity() {
        let items = vec![
            CartItem {
                cart_item_id: 1,
                user_id: "7".to_string(),
                product_id: 10,
                quantity: 2,
                title: "Headphones".to_string(),
                price: 50.0,
                image: String::new(),
            },
            CartItem {
                cart_item_id: 2,
                user_id: "7".to_string(),
                product_id: 11,
                quantity: 1,
                title: "Mouse".to_string(),
                price: 19.99,
                image: String::new(),
            },
        ];
        assert!((cart_total(&items) - 119.99).abs() < 1e-9);
    }

    #[test]
    fn test_cart_total_empty() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_product_deserializes_wire_shape() {
        let json = r#"{
            "productId": 42,
            "title": "Wireless Keyboard",
            "price": 89.5,
            "original_price": 99.0,
            "discount_percentage": 10.0,
            "rating": 4.6,
            "image": "http://127.0.0.1:5000/assets/images/kb.png",
            "description": "Low-profile wireless keyboard",
            "categoryId": 3
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_id, 42);
        assert_eq!(product.category_id, Some(3));
        assert!(product.on_sale());
    }

    #[test]
    fn test_product_optional_fields_default() {
        let json = r#"{"productId": 1, "title": "Cable", "price": 5.0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.discount(), 0.0);
        assert!(!product.on_sale());
        assert_eq!(product.rating, None);
        assert_eq!(product.category_id, None);
    }

    #[test]
    fn test_order_deserializes_staff_shape() {
        let json = r#"{
            "orderId": 9,
            "userId": "7",
            "total": 150.0,
            "status": "pending",
            "timestamp": "2025-06-01T12:00:00+00:00",
            "items": [],
            "name": "Ada",
            "email": "ada@example.com"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, 9);
        assert_eq!(order.name.as_deref(), Some("Ada"));
        assert_eq!(order.placed_on(), "June  1, 2025");
    }

    #[test]
    fn test_auth_response_numeric_id() {
        let json = r#"{"userId": 17, "token": "dummy-token"}"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.user_id_string(), "17");
    }

    #[test]
    fn test_staff_payload_omits_blank_password() {
        let payload = StaffPayload {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            password: None,
            role: "staff".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("password"));
    }
}
