//! Home Page
//!
//! Landing screen with a hero banner and a small rotating window of
//! featured products.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Product};
use crate::components::{CardSkeleton, ProductCard};
use crate::pages::products::{page_slice, total_pages};

/// Featured products shown per page on the home grid
pub const FEATURED_PER_PAGE: usize = 3;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (page, set_page) = create_signal(1usize);

    create_effect(move |_| {
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_products().await {
                Ok(list) => {
                    set_products.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch products: {}", e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let page_count = create_memo(move |_| total_pages(products.get().len(), FEATURED_PER_PAGE));
    let visible = create_memo(move |_| page_slice(&products.get(), page.get(), FEATURED_PER_PAGE));

    view! {
        <div class="space-y-10">
            // Hero banner
            <section class="bg-gradient-to-r from-blue-700 to-indigo-800 rounded-2xl p-10 text-center">
                <h1 class="text-4xl font-bold mb-3">"Welcome to AWEStore"</h1>
                <p class="text-blue-100 mb-6">"Electronics, accessories, and more at honest prices."</p>
                <A
                    href="/products"
                    class="inline-block px-6 py-3 bg-white text-blue-700 font-semibold rounded-lg hover:bg-blue-50 transition-colors"
                >
                    "Shop All Products"
                </A>
            </section>

            // Featured grid
            <section>
                <h2 class="text-2xl font-semibold mb-4">"Featured Products"</h2>

                {move || {
                    if loading.get() {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                {(0..FEATURED_PER_PAGE).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view()
                    } else if let Some(msg) = error.get() {
                        view! {
                            <div class="bg-red-900/20 border border-red-500/30 rounded-lg p-6 text-center">
                                <p class="text-red-400">{msg}</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                {visible.get().into_iter().map(|product| view! {
                                    <ProductCard product=product />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }}

                {move || {
                    let pages = page_count.get();
                    (pages > 1).then(|| view! {
                        <div class="flex items-center justify-center space-x-2 mt-6">
                            <button
                                class="px-3 py-1 rounded bg-gray-800 border border-gray-700 disabled:opacity-50"
                                disabled=move || page.get() <= 1
                                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                            >
                                "Prev"
                            </button>
                            <span class="text-gray-400">
                                {move || format!("Page {} of {}", page.get(), page_count.get())}
                            </span>
                            <button
                                class="px-3 py-1 rounded bg-gray-800 border border-gray-700 disabled:opacity-50"
                                disabled=move || page.get() >= page_count.get()
                                on:click=move |_| set_page.update(|p| *p += 1)
                            >
                                "Next"
                            </button>
                        </div>
                    })
                }}
            </section>
        </div>
    }
}
