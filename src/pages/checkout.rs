//! Checkout Page
//!
//! Shipping and payment forms over the current cart. Validation runs
//! locally first; only the cardholder name and last four card digits are
//! ever transmitted.

use leptos::*;
use leptos_router::*;

use crate::api::{self, cart_total, CartItem, OrderRequest, PaymentSummary, ShippingInfo};
use crate::components::{InlineLoading, InputField, Loading};
use crate::state::{Notices, Session};
use crate::validate::{validate_checkout, FieldErrors, PaymentForm, ShippingForm};

/// Checkout page component
#[component]
pub fn Checkout() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (items, set_items) = create_signal(Vec::<CartItem>::new());
    let (loading, set_loading) = create_signal(true);
    let (submitting, set_submitting) = create_signal(false);
    let errors = create_rw_signal(FieldErrors::new());

    // Shipping fields
    let full_name = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let city = create_rw_signal(String::new());
    let state = create_rw_signal(String::new());
    let zip = create_rw_signal(String::new());
    let country = create_rw_signal(String::new());

    // Payment fields
    let card_name = create_rw_signal(String::new());
    let card_number = create_rw_signal(String::new());
    let expiry = create_rw_signal(String::new());
    let cvv = create_rw_signal(String::new());

    let user_id = move || session.identity.get().user_id().map(str::to_string);

    create_effect(move |_| {
        let Some(id) = user_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_cart(&id).await {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch cart: {}", e).into());
                    notices.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let field_error = move |name: &'static str| {
        Signal::derive(move || errors.get().get(name).cloned())
    };

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(id) = user_id() else { return };

        let shipping = ShippingForm {
            full_name: full_name.get_untracked(),
            address: address.get_untracked(),
            city: city.get_untracked(),
            state: state.get_untracked(),
            zip: zip.get_untracked(),
            country: country.get_untracked(),
        };
        let payment = PaymentForm {
            card_name: card_name.get_untracked(),
            card_number: card_number.get_untracked(),
            expiry: expiry.get_untracked(),
            cvv: cvv.get_untracked(),
        };

        // Local validation blocks the request entirely
        let found = validate_checkout(&shipping, &payment);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());

        let cart = items.get_untracked();
        let total = cart_total(&cart);
        let order = OrderRequest {
            user_id: id,
            items: cart,
            total: format!("{:.2}", total),
            shipping: ShippingInfo {
                full_name: shipping.full_name,
                address: shipping.address,
                city: shipping.city,
                state: shipping.state,
                zip: shipping.zip,
                country: shipping.country,
            },
            payment: PaymentSummary {
                card_name: payment.card_name.clone(),
                last4: payment.last4(),
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            set_submitting.set(true);
            match api::place_order(&order).await {
                Ok(placed) => {
                    session.refresh_cart_count();
                    navigate(
                        &format!("/order-confirmation?orderId={}&total={:.2}", placed.order_id, total),
                        Default::default(),
                    );
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Checkout"</h1>

            {move || {
                if user_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to proceed to checkout."</p>
                            <A href="/login" class="text-blue-400 hover:text-blue-300">"Go to Login"</A>
                        </div>
                    }.into_view();
                }

                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if items.get().is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Your cart is empty. Add items to proceed with checkout."</p>
                            <A href="/products" class="text-blue-400 hover:text-blue-300">
                                "Continue shopping"
                            </A>
                        </div>
                    }.into_view();
                }

                ().into_view()
            }}

            {move || {
                (user_id().is_some() && !loading.get() && !items.get().is_empty()).then(|| {
                    let on_submit = on_submit.clone();
                    view! {
                        <form on:submit=on_submit class="grid md:grid-cols-3 gap-8">
                            <div class="md:col-span-2 space-y-8">
                                // Shipping form
                                <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                                    <h2 class="text-xl font-semibold">"Shipping Details"</h2>
                                    <InputField label="Full Name" value=full_name placeholder="John Doe"
                                        error=field_error("full_name") />
                                    <InputField label="Address" value=address placeholder="123 Main St"
                                        error=field_error("address") />
                                    <div class="grid grid-cols-2 gap-4">
                                        <InputField label="City" value=city error=field_error("city") />
                                        <InputField label="State" value=state error=field_error("state") />
                                        <InputField label="ZIP Code" value=zip placeholder="12345"
                                            error=field_error("zip") />
                                        <InputField label="Country" value=country error=field_error("country") />
                                    </div>
                                </section>

                                // Payment form
                                <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                                    <h2 class="text-xl font-semibold">"Payment Details"</h2>
                                    <InputField label="Name on Card" value=card_name
                                        error=field_error("card_name") />
                                    <InputField label="Card Number" value=card_number
                                        placeholder="1234 5678 9012 3456" error=field_error("card_number") />
                                    <div class="grid grid-cols-2 gap-4">
                                        <InputField label="Expiry (MM/YY)" value=expiry placeholder="12/30"
                                            error=field_error("expiry") />
                                        <InputField label="CVV" value=cvv input_type="password"
                                            error=field_error("cvv") />
                                    </div>
                                </section>
                            </div>

                            // Order summary
                            <aside class="bg-gray-800 rounded-xl p-6 space-y-4 h-fit">
                                <h2 class="text-xl font-semibold">"Order Summary"</h2>
                                {move || items.get().into_iter().map(|item| view! {
                                    <div class="flex justify-between text-sm">
                                        <span class="text-gray-300">
                                            {format!("{} x{}", item.title, item.quantity)}
                                        </span>
                                        <span>{format!("${:.2}", item.price * item.quantity as f64)}</span>
                                    </div>
                                }).collect_view()}

                                <div class="border-t border-gray-700 pt-4 flex justify-between font-bold">
                                    <span>"Total"</span>
                                    <span>{move || format!("${:.2}", cart_total(&items.get()))}</span>
                                </div>

                                <button
                                    type="submit"
                                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold disabled:opacity-50"
                                    disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() {
                                        view! { <InlineLoading /> }.into_view()
                                    } else {
                                        view! { "Place Order" }.into_view()
                                    }}
                                </button>
                            </aside>
                        </form>
                    }
                })
            }}
        </div>
    }
}
