//! Order Confirmation Page
//!
//! Success screen after checkout; the order id and total arrive as query
//! parameters.

use leptos::*;
use leptos_router::*;

/// Order confirmation page component
#[component]
pub fn OrderConfirmation() -> impl IntoView {
    let query = use_query_map();
    let order_id = create_memo(move |_| query.with(|q| q.get("orderId").cloned()));
    let total = create_memo(move |_| query.with(|q| q.get("total").cloned()));

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-4">
            <div class="text-6xl">"🎉"</div>
            <h1 class="text-3xl font-bold">"Thank you for your order!"</h1>

            {move || order_id.get().map(|id| view! {
                <p class="text-gray-300">
                    "Order number: "
                    <span class="font-mono font-semibold">{format!("#{}", id)}</span>
                </p>
            })}

            {move || total.get().map(|t| view! {
                <p class="text-gray-300">{format!("Total charged: ${}", t)}</p>
            })}

            <p class="text-gray-400">"A confirmation has been recorded against your account."</p>

            <div class="flex items-center space-x-4 pt-4">
                <A
                    href="/order-history"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium"
                >
                    "View Orders"
                </A>
                <A
                    href="/products"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium"
                >
                    "Keep Shopping"
                </A>
            </div>
        </div>
    }
}
