//! Order Details Page
//!
//! One of the customer's own orders, with per-line subtotals.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Order};
use crate::components::Loading;
use crate::pages::order_history::status_class;
use crate::state::Session;

/// Order detail page component
#[component]
pub fn OrderDetails() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let params = use_params_map();

    let (order, set_order) = create_signal(None::<Order>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let user_id = move || session.identity.get().user_id().map(str::to_string);

    create_effect(move |_| {
        let id_param = params.with(|p| p.get("orderId").cloned()).unwrap_or_default();
        let Some(user) = user_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            set_loading.set(true);
            match id_param.parse::<u32>() {
                Ok(order_id) => match api::fetch_order_details(&user, order_id).await {
                    Ok(o) => {
                        set_order.set(Some(o));
                        set_error.set(None);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch order: {}", e).into());
                        set_error.set(Some(e.to_string()));
                    }
                },
                Err(_) => set_error.set(Some("Order not found".to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || {
                if user_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to view this order."</p>
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
                            <A href="/order-history" class="text-blue-400 hover:text-blue-300 mt-4 inline-block">
                                "Back to Orders"
                            </A>
                        </div>
                    }.into_view();
                }

                order.get().map(|o| view! {
                    <div class="space-y-6">
                        <div class="flex items-center justify-between">
                            <div>
                                <h1 class="text-3xl font-bold">{format!("Order #{}", o.order_id)}</h1>
                                <p class="text-gray-400 mt-1">{o.placed_on()}</p>
                            </div>
                            <span class=format!(
                                "px-3 py-1 rounded text-sm font-medium capitalize {}",
                                status_class(&o.status)
                            )>
                                {o.status.clone()}
                            </span>
                        </div>

                        <div class="bg-gray-800 rounded-xl p-6 space-y-4">
                            {o.items.iter().map(|item| view! {
                                <div class="flex items-center justify-between border-b border-gray-700 last:border-0 pb-4 last:pb-0">
                                    <div class="flex items-center space-x-4">
                                        <img
                                            src=item.image.clone()
                                            alt=item.title.clone()
                                            class="w-14 h-14 object-contain bg-white rounded"
                                        />
                                        <div>
                                            <p class="font-medium">{item.title.clone()}</p>
                                            <p class="text-gray-400 text-sm">
                                                {format!("${:.2} x {}", item.price, item.quantity)}
                                            </p>
                                        </div>
                                    </div>
                                    <span class="font-semibold">
                                        {format!("${:.2}", item.price * item.quantity as f64)}
                                    </span>
                                </div>
                            }).collect_view()}

                            <div class="flex justify-between pt-2 font-bold text-lg">
                                <span>"Total"</span>
                                <span>{format!("${:.2}", o.total)}</span>
                            </div>
                        </div>
                    </div>
                }).into_view()
            }}
        </div>
    }
}
