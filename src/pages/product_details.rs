//! Product Details Page
//!
//! Single product view with a quantity stepper and add-to-cart.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Product};
use crate::components::Loading;
use crate::state::{Notices, Session};

/// Product detail page component
#[component]
pub fn ProductDetails() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");
    let params = use_params_map();

    let (product, set_product) = create_signal(None::<Product>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (quantity, set_quantity) = create_signal(1u32);
    let (submitting, set_submitting) = create_signal(false);

    // Fetch whenever the route param changes
    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned()).unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            match id.parse::<u32>() {
                Ok(product_id) => match api::fetch_product(product_id).await {
                    Ok(p) => {
                        set_product.set(Some(p));
                        set_error.set(None);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch product: {}", e).into());
                        set_error.set(Some(e.to_string()));
                    }
                },
                Err(_) => set_error.set(Some("Product not found".to_string())),
            }
            set_loading.set(false);
        });
    });

    let navigate = use_navigate();
    let on_add_to_cart = move |_| {
        let Some(p) = product.get_untracked() else {
            return;
        };

        let Some(user_id) = session.identity.get_untracked().user_id().map(str::to_string) else {
            notices.show_error("Please log in to add items to your cart");
            let navigate = navigate.clone();
            gloo_timers::callback::Timeout::new(2000, move || {
                navigate("/login", Default::default());
            }).forget();
            return;
        };

        let qty = quantity.get_untracked();
        spawn_local(async move {
            set_submitting.set(true);
            match api::add_to_cart(&user_id, p.product_id, qty).await {
                Ok(()) => {
                    notices.show_success("Added to cart");
                    session.refresh_cart_count();
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div>
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                if let Some(msg) = error.get() {
                    return view! {
                        <div class="bg-red-900/20 border border-red-500/30 rounded-lg p-6 text-center">
                            <p class="text-red-400">{msg}</p>
                            <A href="/products" class="text-blue-400 hover:text-blue-300 mt-4 inline-block">
                                "Back to Products"
                            </A>
                        </div>
                    }.into_view();
                }

                product.get().map(|p| {
                    let total = move || p.price * quantity.get() as f64;
                    view! {
                        <div class="grid md:grid-cols-2 gap-10">
                            <div class="bg-white rounded-xl p-6 flex items-center justify-center">
                                <img
                                    src=p.image.clone()
                                    alt=p.title.clone()
                                    class="max-h-80 object-contain"
                                />
                            </div>

                            <div class="space-y-4">
                                <h1 class="text-3xl font-bold">{p.title.clone()}</h1>

                                {p.rating.map(|r| view! {
                                    <p class="text-yellow-400">{format!("{:.1} / 5.0", r)}</p>
                                })}

                                <div class="flex items-center space-x-3">
                                    <span class="text-2xl font-bold">{format!("${:.2}", p.price)}</span>
                                    {p.original_price.filter(|_| p.on_sale()).map(|orig| view! {
                                        <span class="text-gray-400 line-through">{format!("${:.2}", orig)}</span>
                                    })}
                                    {p.on_sale().then(|| view! {
                                        <span class="bg-red-600 text-white text-xs font-bold px-2 py-1 rounded">
                                            {format!("-{:.0}%", p.discount())}
                                        </span>
                                    })}
                                </div>

                                <p class="text-gray-300">{p.description.clone()}</p>

                                // Quantity stepper, never below 1
                                <div class="flex items-center space-x-3">
                                    <span class="text-gray-400">"Quantity:"</span>
                                    <button
                                        class="w-8 h-8 bg-gray-800 border border-gray-700 rounded"
                                        on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                                    >
                                        "-"
                                    </button>
                                    <span class="w-8 text-center">{move || quantity.get()}</span>
                                    <button
                                        class="w-8 h-8 bg-gray-800 border border-gray-700 rounded"
                                        on:click=move |_| set_quantity.update(|q| *q += 1)
                                    >
                                        "+"
                                    </button>
                                </div>

                                <button
                                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold disabled:opacity-50"
                                    disabled=move || submitting.get()
                                    on:click=on_add_to_cart.clone()
                                >
                                    {move || format!("Add to Cart - ${:.2}", total())}
                                </button>
                            </div>
                        </div>
                    }
                }).into_view()
            }}
        </div>
    }
}
