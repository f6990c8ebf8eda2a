//! Search Results Page
//!
//! Shows catalog matches for the `q` query parameter. Empty queries never
//! reach the network; a remote "no match" status renders the same empty
//! state as a genuinely empty result.

use leptos::*;
use leptos_router::*;

use crate::api::{self, Product};
use crate::components::{Loading, ProductCard};

/// Search results page component
#[component]
pub fn SearchResults() -> impl IntoView {
    let query_map = use_query_map();
    let query = create_memo(move |_| {
        query_map.with(|q| q.get("q").cloned().unwrap_or_default())
    });

    let (results, set_results) = create_signal(Vec::<Product>::new());
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Re-run the search whenever the query parameter changes
    create_effect(move |_| {
        let q = query.get();
        spawn_local(async move {
            set_loading.set(true);
            match api::search_products(&q).await {
                Ok(list) => {
                    set_results.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Search failed: {}", e).into());
                    set_results.set(Vec::new());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Search Results"</h1>
                <p class="text-gray-400 mt-1">
                    {move || {
                        let q = query.get();
                        if q.trim().is_empty() {
                            "Enter a search term to find products".to_string()
                        } else {
                            format!("Found {} result(s) for \"{}\"", results.get().len(), q.trim())
                        }
                    }}
                </p>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-red-900/20 border border-red-500/30 rounded-lg p-6 text-center">
                            <p class="text-red-400">{msg}</p>
                        </div>
                    }.into_view()
                } else if results.get().is_empty() {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"No products found."</p>
                            <A href="/products" class="text-blue-400 hover:text-blue-300">
                                "Browse all products"
                            </A>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            {results.get().into_iter().map(|product| view! {
                                <ProductCard product=product />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
