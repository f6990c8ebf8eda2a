//! Profile Page
//!
//! View and edit the customer's account details.

use leptos::*;
use leptos_router::*;

use crate::api::{self, UserProfile};
use crate::components::{InlineLoading, InputField, Loading};
use crate::state::{Identity, Notices, Session};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());

    // Guests have no stored profile, only customers
    let customer_id = move || match session.identity.get() {
        Identity::Customer(id) => Some(id),
        _ => None,
    };

    create_effect(move |_| {
        let Some(id) = customer_id() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            set_loading.set(true);
            match api::fetch_user_profile(&id).await {
                Ok(profile) => {
                    name.set(profile.name);
                    email.set(profile.email);
                    address.set(profile.address.unwrap_or_default());
                    phone.set(profile.phone.unwrap_or_default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch profile: {}", e).into());
                    notices.show_error(&e.to_string());
                }
            }
            set_loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = customer_id() else { return };

        let address_value = address.get_untracked();
        let phone_value = phone.get_untracked();
        let profile = UserProfile {
            user_id: id.clone(),
            name: name.get_untracked(),
            email: email.get_untracked(),
            address: (!address_value.is_empty()).then_some(address_value),
            phone: (!phone_value.is_empty()).then_some(phone_value),
        };

        spawn_local(async move {
            set_saving.set(true);
            match api::update_user_profile(&id, &profile).await {
                Ok(()) => notices.show_success("Profile updated"),
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-lg mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Your Profile"</h1>

            {move || {
                if customer_id().is_none() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">"Please log in to view your profile."</p>
                            <A href="/login" class="text-blue-400 hover:text-blue-300">"Go to Login"</A>
                        </div>
                    }.into_view();
                }

                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let on_submit = on_submit.clone();
                view! {
                    <form on:submit=on_submit class="bg-gray-800 rounded-xl p-8 space-y-4">
                        <InputField label="Name" value=name />
                        <InputField label="Email" input_type="email" value=email />
                        <InputField label="Address" value=address placeholder="Street, city, country" />
                        <InputField label="Phone" input_type="tel" value=phone />

                        <button
                            type="submit"
                            class="w-full py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold disabled:opacity-50"
                            disabled=move || saving.get()
                        >
                            {move || if saving.get() {
                                view! { <InlineLoading /> }.into_view()
                            } else {
                                view! { "Save Changes" }.into_view()
                            }}
                        </button>
                    </form>
                }.into_view()
            }}
        </div>
    }
}
