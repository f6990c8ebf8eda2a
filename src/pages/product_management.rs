//! Product Management Page
//!
//! Staff product creation. Numeric fields are coerced at the form boundary
//! before transmission: blank or unparseable input becomes 0 (or no
//! category), never an error on the wire.

use leptos::*;
use leptos_router::*;

use crate::api::{self, NewProduct};
use crate::components::{InlineLoading, InputField};
use crate::state::{Notices, Session};

/// Blank or unparseable numeric input defaults to zero
pub fn coerce_number(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Category input: a parseable id or no category at all
pub fn coerce_category(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Product management page component
#[component]
pub fn ProductManagement() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let title = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let image = create_rw_signal(String::new());
    let rating = create_rw_signal(String::new());
    let discount = create_rw_signal(String::new());
    let original_price = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let staff_id = move || session.identity.get().staff_id().map(str::to_string);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = staff_id() else { return };

        if title.get_untracked().trim().is_empty() {
            notices.show_error("Product title is required");
            return;
        }

        let product = NewProduct {
            title: title.get_untracked(),
            price: coerce_number(&price.get_untracked()),
            description: description.get_untracked(),
            image: image.get_untracked(),
            rating: coerce_number(&rating.get_untracked()),
            discount_percentage: coerce_number(&discount.get_untracked()),
            original_price: coerce_number(&original_price.get_untracked()),
            category_id: coerce_category(&category.get_untracked()),
        };

        spawn_local(async move {
            set_submitting.set(true);
            match api::create_product(&id, &product).await {
                Ok(()) => {
                    notices.show_success("Product created successfully");
                    title.set(String::new());
                    price.set(String::new());
                    description.set(String::new());
                    image.set(String::new());
                    rating.set(String::new());
                    discount.set(String::new());
                    original_price.set(String::new());
                    category.set(String::new());
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Product Management"</h1>
                <p class="text-gray-400 mt-1">"Add new products to the catalog"</p>
            </div>

            {move || {
                if staff_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to manage products."</p>
                            <A href="/staff/login" class="text-yellow-400 hover:text-yellow-300">
                                "Go to Staff Login"
                            </A>
                        </div>
                    }.into_view();
                }

                let on_submit = on_submit.clone();
                view! {
                    <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                        <InputField label="Title" value=title placeholder="Product name" />
                        <div class="grid grid-cols-2 gap-4">
                            <InputField label="Price" value=price placeholder="0.00" />
                            <InputField label="Original Price" value=original_price placeholder="0.00" />
                            <InputField label="Discount %" value=discount placeholder="0" />
                            <InputField label="Rating (0-5)" value=rating placeholder="0.0" />
                        </div>
                        <InputField label="Image URL" value=image placeholder="https://..." />
                        <InputField label="Category ID" value=category placeholder="Optional" />

                        <div>
                            <label class="block text-sm font-medium text-gray-700">"Description"</label>
                            <textarea
                                class="mt-1 block w-full border border-gray-300 rounded-lg p-2 h-24"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            />
                        </div>

                        <button
                            type="submit"
                            class="w-full py-3 bg-yellow-500 hover:bg-yellow-400 text-gray-900 rounded-lg font-semibold disabled:opacity-50"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() {
                                view! { <InlineLoading /> }.into_view()
                            } else {
                                view! { "Add Product" }.into_view()
                            }}
                        </button>
                    </form>
                }.into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number_defaults_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  "), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
    }

    #[test]
    fn test_coerce_number_parses() {
        assert_eq!(coerce_number("19.99"), 19.99);
        assert_eq!(coerce_number(" 42 "), 42.0);
    }

    #[test]
    fn test_coerce_category() {
        assert_eq!(coerce_category(""), None);
        assert_eq!(coerce_category("junk"), None);
        assert_eq!(coerce_category("7"), Some(7));
    }
}
