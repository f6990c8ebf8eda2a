//! Products Page
//!
//! Full catalog with client-side filter, sort, and pagination. The whole
//! result set is fetched once on mount; everything after that is array work
//! over the snapshot.

use leptos::*;

use crate::api::{self, Product};
use crate::components::{CardSkeleton, ProductCard};

/// Products per page on the catalog grid
pub const PRODUCTS_PER_PAGE: usize = 6;

/// Catalog filter applied before sorting
pub fn apply_filter(products: &[Product], filter: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|p| match filter {
            "on-sale" => p.on_sale(),
            "high-rated" => p.rating.unwrap_or(0.0) >= 4.5,
            _ => true,
        })
        .cloned()
        .collect()
}

/// In-place catalog sort
pub fn apply_sort(products: &mut [Product], sort: &str) {
    match sort {
        "price-low" => {
            products.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal))
        }
        "price-high" => {
            products.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(std::cmp::Ordering::Equal))
        }
        "rating" => products.sort_by(|a, b| {
            b.rating
                .unwrap_or(0.0)
                .partial_cmp(&a.rating.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        _ => products.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}

/// Number of pages needed for `len` items (at least 1)
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if len == 0 {
        1
    } else {
        (len + per_page - 1) / per_page
    }
}

/// The slice of items shown on a 1-based page
pub fn page_slice(products: &[Product], page: usize, per_page: usize) -> Vec<Product> {
    let start = (page.max(1) - 1) * per_page;
    products.iter().skip(start).take(per_page).cloned().collect()
}

/// Filter, sort, and page the catalog snapshot in display order
pub fn visible_products(
    products: &[Product],
    filter: &str,
    sort: &str,
    page: usize,
    per_page: usize,
) -> Vec<Product> {
    let mut filtered = apply_filter(products, filter);
    apply_sort(&mut filtered, sort);
    page_slice(&filtered, page, per_page)
}

/// Catalog page component
#[component]
pub fn Products() -> impl IntoView {
    let (products, set_products) = create_signal(Vec::<Product>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (filter, set_filter) = create_signal("all".to_string());
    let (sort, set_sort) = create_signal("name".to_string());
    let (page, set_page) = create_signal(1usize);

    // Fetch the full catalog on mount
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

    let filtered_count = create_memo(move |_| {
        apply_filter(&products.get(), &filter.get()).len()
    });
    let page_count = create_memo(move |_| total_pages(filtered_count.get(), PRODUCTS_PER_PAGE));

    let visible = create_memo(move |_| {
        visible_products(
            &products.get(),
            &filter.get(),
            &sort.get(),
            page.get(),
            PRODUCTS_PER_PAGE,
        )
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between flex-wrap gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Products"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} product(s)", filtered_count.get())}
                    </p>
                </div>

                // Filter and sort controls; changing either restarts at page 1
                <div class="flex items-center space-x-3">
                    <select
                        class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            set_filter.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    >
                        <option value="all">"All products"</option>
                        <option value="on-sale">"On sale"</option>
                        <option value="high-rated">"Highly rated"</option>
                    </select>

                    <select
                        class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            set_sort.set(event_target_value(&ev));
                            set_page.set(1);
                        }
                    >
                        <option value="name">"Name"</option>
                        <option value="price-low">"Price: low to high"</option>
                        <option value="price-high">"Price: high to low"</option>
                        <option value="rating">"Rating"</option>
                    </select>
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                            {(0..PRODUCTS_PER_PAGE).map(|_| view! { <CardSkeleton /> }).collect_view()}
                        </div>
                    }.into_view()
                } else if let Some(msg) = error.get() {
                    view! {
                        <div class="bg-red-900/20 border border-red-500/30 rounded-lg p-6 text-center">
                            <p class="text-red-400">{msg}</p>
                        </div>
                    }.into_view()
                } else if visible.get().is_empty() {
                    view! {
                        <p class="text-gray-400 text-center py-12">"No products match this filter."</p>
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

            // Pagination
            {move || {
                let pages = page_count.get();
                (pages > 1).then(|| view! {
                    <div class="flex items-center justify-center space-x-2">
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
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, title: &str, price: f64, discount: f64, rating: f64) -> Product {
        Product {
            product_id: id,
            title: title.to_string(),
            price,
            original_price: None,
            discount_percentage: (discount > 0.0).then_some(discount),
            rating: Some(rating),
            image: String::new(),
            description: String::new(),
            category_id: None,
        }
    }

    #[test]
    fn test_price_low_sort() {
        let mut items = vec![
            product(1, "A", 300.0, 0.0, 4.0),
            product(2, "B", 100.0, 0.0, 4.0),
            product(3, "C", 200.0, 0.0, 4.0),
        ];
        apply_sort(&mut items, "price-low");
        let prices: Vec<f64> = items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_on_sale_filter_keeps_active_sort() {
        let items = vec![
            product(1, "A", 300.0, 10.0, 4.0),
            product(2, "B", 100.0, 0.0, 4.0),
            product(3, "C", 200.0, 25.0, 4.0),
        ];
        // Page 1 after a filter change; sort still applies to the subset
        let visible = visible_products(&items, "on-sale", "price-low", 1, PRODUCTS_PER_PAGE);
        let prices: Vec<f64> = visible.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![200.0, 300.0]);
    }

    #[test]
    fn test_high_rated_filter() {
        let items = vec![
            product(1, "A", 10.0, 0.0, 4.5),
            product(2, "B", 20.0, 0.0, 4.4),
        ];
        let filtered = apply_filter(&items, "high-rated");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].product_id, 1);
    }

    #[test]
    fn test_name_sort_is_default() {
        let mut items = vec![
            product(1, "Webcam", 10.0, 0.0, 4.0),
            product(2, "Adapter", 20.0, 0.0, 4.0),
        ];
        apply_sort(&mut items, "name");
        assert_eq!(items[0].title, "Adapter");
    }

    #[test]
    fn test_rating_sort_descends() {
        let mut items = vec![
            product(1, "A", 10.0, 0.0, 3.0),
            product(2, "B", 20.0, 0.0, 4.8),
        ];
        apply_sort(&mut items, "rating");
        assert_eq!(items[0].product_id, 2);
    }

    #[test]
    fn test_pagination_slices() {
        let items: Vec<Product> = (0..8)
            .map(|i| product(i, &format!("P{}", i), i as f64, 0.0, 4.0))
            .collect();
        assert_eq!(total_pages(items.len(), PRODUCTS_PER_PAGE), 2);
        assert_eq!(page_slice(&items, 1, PRODUCTS_PER_PAGE).len(), 6);
        assert_eq!(page_slice(&items, 2, PRODUCTS_PER_PAGE).len(), 2);
        assert!(page_slice(&items, 3, PRODUCTS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_total_pages_never_zero() {
        assert_eq!(total_pages(0, PRODUCTS_PER_PAGE), 1);
    }
}
