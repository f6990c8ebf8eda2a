//! Cart Page
//!
//! Cart contents with quantity controls. Every mutation re-fetches the cart
//! so the display always reflects the server-side result, and the nav badge
//! is refreshed alongside.

use leptos::*;
use leptos_router::*;

use crate::api::{self, cart_total, CartItem};
use crate::components::Loading;
use crate::state::{Notices, Session};

/// Cart page component
#[component]
pub fn Cart() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (items, set_items) = create_signal(Vec::<CartItem>::new());
    let (loading, set_loading) = create_signal(true);

    let user_id = move || session.identity.get().user_id().map(str::to_string);

    let reload = move |show_spinner: bool| {
        let Some(id) = user_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            if show_spinner {
                set_loading.set(true);
            }
            match api::fetch_cart(&id).await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch cart: {}", e).into());
                    notices.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| reload(true));

    let change_quantity = move |product_id: u32, quantity: u32| {
        let Some(id) = user_id() else { return };
        spawn_local(async move {
            let result = if quantity == 0 {
                api::remove_cart_item(&id, product_id).await
            } else {
                api::update_cart_item(&id, product_id, quantity).await
            };
            if let Err(e) = result {
                notices.show_error(&e.to_string());
            }
            reload(false);
            session.refresh_cart_count();
        });
    };

    let remove_item = move |product_id: u32| {
        let Some(id) = user_id() else { return };
        spawn_local(async move {
            if let Err(e) = api::remove_cart_item(&id, product_id).await {
                notices.show_error(&e.to_string());
            } else {
                notices.show_success("Item removed");
            }
            reload(false);
            session.refresh_cart_count();
        });
    };

    let clear_all = move |_| {
        let Some(id) = user_id() else { return };
        spawn_local(async move {
            if let Err(e) = api::clear_cart(&id).await {
                notices.show_error(&e.to_string());
            } else {
                notices.show_success("Cart cleared");
            }
            reload(false);
            session.refresh_cart_count();
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Your Cart"</h1>

            {move || {
                if user_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to view your cart."</p>
                            <A href="/login" class="text-blue-400 hover:text-blue-300">"Go to Login"</A>
                        </div>
                    }.into_view();
                }

                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let cart = items.get();
                if cart.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Your cart is empty."</p>
                            <A href="/products" class="text-blue-400 hover:text-blue-300">
                                "Continue shopping"
                            </A>
                        </div>
                    }.into_view();
                }

                let subtotal = cart_total(&cart);
                view! {
                    <div class="space-y-4">
                        {cart.into_iter().map(|item| {
                            let product_id = item.product_id;
                            let quantity = item.quantity;
                            view! {
                                <div class="flex items-center justify-between bg-gray-800 rounded-lg p-4">
                                    <div class="flex items-center space-x-4">
                                        <img
                                            src=item.image.clone()
                                            alt=item.title.clone()
                                            class="w-16 h-16 object-contain bg-white rounded"
                                        />
                                        <div>
                                            <p class="font-medium">{item.title.clone()}</p>
                                            <p class="text-gray-400 text-sm">{format!("${:.2} each", item.price)}</p>
                                        </div>
                                    </div>

                                    <div class="flex items-center space-x-4">
                                        <div class="flex items-center space-x-2">
                                            <button
                                                class="w-8 h-8 bg-gray-700 rounded"
                                                on:click=move |_| change_quantity(product_id, quantity.saturating_sub(1))
                                            >
                                                "-"
                                            </button>
                                            <span class="w-8 text-center">{quantity}</span>
                                            <button
                                                class="w-8 h-8 bg-gray-700 rounded"
                                                on:click=move |_| change_quantity(product_id, quantity + 1)
                                            >
                                                "+"
                                            </button>
                                        </div>

                                        <span class="w-24 text-right font-semibold">
                                            {format!("${:.2}", item.price * item.quantity as f64)}
                                        </span>

                                        <button
                                            class="text-red-400 hover:text-red-300"
                                            on:click=move |_| remove_item(product_id)
                                        >
                                            "Remove"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()}

                        <div class="flex items-center justify-between border-t border-gray-700 pt-4">
                            <button
                                class="text-gray-400 hover:text-red-400"
                                on:click=clear_all
                            >
                                "Clear cart"
                            </button>

                            <div class="flex items-center space-x-6">
                                <span class="text-xl font-bold">
                                    {format!("Total: ${:.2}", subtotal)}
                                </span>
                                <A
                                    href="/checkout"
                                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold"
                                >
                                    "Checkout"
                                </A>
                            </div>
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}
