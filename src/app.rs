//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{
    Cart, Checkout, Home, Login, OrderConfirmation, OrderDetails, OrderHistory,
    OrderManagement, ProductDetails, ProductManagement, Products, Profile,
    SearchResults, Signup, StaffDashboard, StaffLogin,
};
use crate::state::{provide_notices, provide_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide session and notice state to all components
    provide_session();
    provide_notices();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/products" view=Products />
                        <Route path="/product-details/:id" view=ProductDetails />
                        <Route path="/search-results" view=SearchResults />
                        <Route path="/cart" view=Cart />
                        <Route path="/checkout" view=Checkout />
                        <Route path="/order-confirmation" view=OrderConfirmation />
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/profile" view=Profile />
                        <Route path="/order-history" view=OrderHistory />
                        <Route path="/order-details/:orderId" view=OrderDetails />
                        <Route path="/staff/login" view=StaffLogin />
                        <Route path="/staff/dashboard" view=StaffDashboard />
                        <Route path="/order-management" view=OrderManagement />
                        <Route path="/product-management" view=ProductManagement />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6 px-4 mt-auto">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"AWEStore - electronics for everyone"</span>
                <div class="flex items-center space-x-4">
                    <A href="/products" class="hover:text-white">"Products"</A>
                    <A href="/order-history" class="hover:text-white">"Orders"</A>
                    <A href="/staff/login" class="hover:text-white">"Staff"</A>
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Back to the Store"
            </A>
        </div>
    }
}
