//! Product Card Component
//!
//! Grid tile for a single product: image, sale badge, rating, pricing.

use leptos::*;
use leptos_router::*;

use crate::api::Product;

/// Product tile linking to the detail page
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let detail_href = format!("/product-details/{}", product.product_id);
    let on_sale = product.on_sale();
    let discount = product.discount();
    let rating = product.rating;
    let original_price = product.original_price;

    view! {
        <A href=detail_href class="block bg-white rounded-lg shadow hover:shadow-lg transition-shadow overflow-hidden">
            <div class="relative">
                <img
                    src=product.image.clone()
                    alt=product.title.clone()
                    class="w-full h-40 object-contain bg-gray-50"
                />
                {on_sale.then(|| view! {
                    <span class="absolute top-2 left-2 bg-red-600 text-white text-xs font-bold px-2 py-1 rounded">
                        "SALE"
                    </span>
                })}
            </div>

            <div class="p-4">
                <h3 class="text-gray-800 font-medium truncate">{product.title.clone()}</h3>

                // Star rating
                {rating.map(|r| view! {
                    <div class="flex items-center mt-1 text-sm">
                        <span class="text-yellow-400">{stars(r)}</span>
                        <span class="text-gray-500 ml-2">{format!("{:.1}", r)}</span>
                    </div>
                })}

                <div class="flex items-center space-x-2 mt-2">
                    <span class="text-lg font-bold text-gray-900">
                        {format!("${:.2}", product.price)}
                    </span>
                    {original_price.filter(|_| on_sale).map(|orig| view! {
                        <span class="text-sm text-gray-400 line-through">
                            {format!("${:.2}", orig)}
                        </span>
                    })}
                </div>

                {on_sale.then(|| view! {
                    <span class="inline-block mt-2 bg-green-100 text-green-700 text-xs font-medium px-2 py-1 rounded">
                        {format!("Save {:.0}%", discount)}
                    </span>
                })}
            </div>
        </A>
    }
}

/// Five-character star strip for a 0-5 rating
fn stars(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_rounds_rating() {
        assert_eq!(stars(4.6), "★★★★★");
        assert_eq!(stars(4.4), "★★★★☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_stars_clamps_out_of_range() {
        assert_eq!(stars(9.0), "★★★★★");
        assert_eq!(stars(-1.0), "☆☆☆☆☆");
    }
}
