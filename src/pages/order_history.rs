//! Order History Page
//!
//! The customer's past orders, newest first as the service returns them.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Order};
use crate::components::Loading;
use crate::state::Session;

/// Badge styling for an order's fulfillment status
pub fn status_class(status: &str) -> &'static str {
    match status {
        "pending" => "bg-yellow-500/20 text-yellow-400",
        "processing" => "bg-blue-500/20 text-blue-400",
        "shipped" => "bg-indigo-500/20 text-indigo-400",
        "delivered" => "bg-green-500/20 text-green-400",
        "cancelled" => "bg-red-500/20 text-red-400",
        _ => "bg-gray-500/20 text-gray-400",
    }
}

/// Order history page component
#[component]
pub fn OrderHistory() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let (orders, set_orders) = create_signal(Vec::<Order>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let user_id = move || session.identity.get().user_id().map(str::to_string);

    create_effect(move |_| {
        let Some(id) = user_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_order_history(&id).await {
                Ok(list) => {
                    set_orders.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch orders: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Order History"</h1>

            {move || {
                if user_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to view your orders."</p>
                            <A href="/login" class="text-blue-400 hover:text-blue-300">"Go to Login"</A>
                        </div>
                    }.into_view();
                }

                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(msg) = error.get() {
                    return view! {
                        <div class="bg-red-900/20 border border-red-500/30 rounded-lg p-6 text-center">
                            <p class="text-red-400">{msg}</p>
                        </div>
                    }.into_view();
                }

                let list = orders.get();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"You haven't placed any orders yet."</p>
                            <A href="/products" class="text-blue-400 hover:text-blue-300">
                                "Start shopping"
                            </A>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="space-y-4">
                        {list.into_iter().map(|order| {
                            let detail_href = format!("/order-details/{}", order.order_id);
                            view! {
                                <A
                                    href=detail_href
                                    class="block bg-gray-800 rounded-lg p-4 hover:bg-gray-750 transition"
                                >
                                    <div class="flex items-center justify-between">
                                        <div>
                                            <p class="font-semibold">{format!("Order #{}", order.order_id)}</p>
                                            <p class="text-gray-400 text-sm">{order.placed_on()}</p>
                                        </div>
                                        <div class="flex items-center space-x-4">
                                            <span class=format!(
                                                "px-2 py-1 rounded text-xs font-medium capitalize {}",
                                                status_class(&order.status)
                                            )>
                                                {order.status.clone()}
                                            </span>
                                            <span class="font-bold">{format!("${:.2}", order.total)}</span>
                                        </div>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class_covers_known_statuses() {
        for status in ["pending", "processing", "shipped", "delivered", "cancelled"] {
            assert!(!status_class(status).starts_with("bg-gray"), "{} fell through", status);
        }
        assert!(status_class("unknown").starts_with("bg-gray"));
    }
}
