//! Order Management Page
//!
//! Staff view of every order with inline status changes and a details
//! modal. The list is re-fetched after each status update.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Order};
use crate::components::Loading;
use crate::pages::order_history::status_class;
use crate::state::{Notices, Session};

/// Fulfillment statuses a staff member can set
pub const ORDER_STATUSES: [&str; 5] = ["pending", "processing", "shipped", "delivered", "cancelled"];

/// Order management page component
#[component]
pub fn OrderManagement() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (orders, set_orders) = create_signal(Vec::<Order>::new());
    let (loading, set_loading) = create_signal(true);
    let (detail, set_detail) = create_signal(None::<Order>);

    let staff_id = move || session.identity.get().staff_id().map(str::to_string);

    let reload = move || {
        let Some(id) = staff_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match api::fetch_all_orders(&id).await {
                Ok(list) => set_orders.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch orders: {}", e).into());
                    notices.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| reload());

    let change_status = move |order_id: u32, status: String| {
        let Some(id) = staff_id() else { return };
        spawn_local(async move {
            match api::update_order_status(&id, order_id, &status).await {
                Ok(()) => notices.show_success("Order status updated"),
                Err(e) => notices.show_error(&e.to_string()),
            }
            reload();
        });
    };

    let open_detail = move |order_id: u32| {
        let Some(id) = staff_id() else { return };
        spawn_local(async move {
            match api::fetch_order_details_staff(&id, order_id).await {
                Ok(order) => set_detail.set(Some(order)),
                Err(e) => notices.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Order Management"</h1>
                <p class="text-gray-400 mt-1">"Track and update customer orders"</p>
            </div>

            {move || {
                if staff_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to manage orders."</p>
                            <A href="/staff/login" class="text-yellow-400 hover:text-yellow-300">
                                "Go to Staff Login"
                            </A>
                        </div>
                    }.into_view();
                }

                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let list = orders.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-center py-12">"No orders yet."</p>
                    }.into_view();
                }

                view! {
                    <div class="overflow-x-auto bg-gray-800 rounded-xl">
                        <table class="w-full text-left text-sm">
                            <thead class="border-b border-gray-700 text-gray-400">
                                <tr>
                                    <th class="px-4 py-3">"Order"</th>
                                    <th class="px-4 py-3">"Customer"</th>
                                    <th class="px-4 py-3">"Placed"</th>
                                    <th class="px-4 py-3">"Total"</th>
                                    <th class="px-4 py-3">"Status"</th>
                                    <th class="px-4 py-3"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|order| {
                                    let order_id = order.order_id;
                                    let current_status = order.status.clone();
                                    view! {
                                        <tr class="border-b border-gray-700/50 last:border-0">
                                            <td class="px-4 py-3 font-medium">{format!("#{}", order_id)}</td>
                                            <td class="px-4 py-3">
                                                <p>{order.name.clone().unwrap_or_else(|| "Unknown".to_string())}</p>
                                                <p class="text-gray-400 text-xs">
                                                    {order.email.clone().unwrap_or_default()}
                                                </p>
                                            </td>
                                            <td class="px-4 py-3 text-gray-400">{order.placed_on()}</td>
                                            <td class="px-4 py-3 font-semibold">{format!("${:.2}", order.total)}</td>
                                            <td class="px-4 py-3">
                                                <select
                                                    class="bg-gray-700 border border-gray-600 rounded px-2 py-1"
                                                    on:change=move |ev| {
                                                        change_status(order_id, event_target_value(&ev))
                                                    }
                                                >
                                                    {ORDER_STATUSES.iter().map(|status| {
                                                        let selected = *status == current_status;
                                                        view! {
                                                            <option value=*status selected=selected>
                                                                {status.to_string()}
                                                            </option>
                                                        }
                                                    }).collect_view()}
                                                </select>
                                            </td>
                                            <td class="px-4 py-3">
                                                <button
                                                    class="text-blue-400 hover:text-blue-300"
                                                    on:click=move |_| open_detail(order_id)
                                                >
                                                    "Details"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            }}

            // Order details modal
            {move || {
                detail.get().map(|order| view! {
                    <div class="fixed inset-0 bg-black/60 flex items-center justify-center z-50">
                        <div class="bg-gray-800 rounded-xl p-8 max-w-lg w-full mx-4 space-y-4 max-h-[80vh] overflow-y-auto">
                            <div class="flex items-center justify-between">
                                <h2 class="text-xl font-semibold">{format!("Order #{}", order.order_id)}</h2>
                                <span class=format!(
                                    "px-2 py-1 rounded text-xs font-medium capitalize {}",
                                    status_class(&order.status)
                                )>
                                    {order.status.clone()}
                                </span>
                            </div>

                            <div class="text-sm text-gray-300">
                                <p>{format!("Customer: {}", order.name.clone().unwrap_or_else(|| "Unknown".to_string()))}</p>
                                <p class="text-gray-400">{order.email.clone().unwrap_or_default()}</p>
                                <p class="text-gray-400">{order.placed_on()}</p>
                            </div>

                            <div class="space-y-2">
                                {order.items.iter().map(|item| view! {
                                    <div class="flex justify-between text-sm border-b border-gray-700/50 last:border-0 py-2">
                                        <span>{format!("{} x{}", item.title, item.quantity)}</span>
                                        <span>{format!("${:.2}", item.price * item.quantity as f64)}</span>
                                    </div>
                                }).collect_view()}
                            </div>

                            <div class="flex justify-between font-bold">
                                <span>"Total"</span>
                                <span>{format!("${:.2}", order.total)}</span>
                            </div>

                            <button
                                class="w-full py-2 bg-gray-700 hover:bg-gray-600 rounded-lg"
                                on:click=move |_| set_detail.set(None)
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                })
            }}
        </div>
    }
}
