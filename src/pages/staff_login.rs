//! Staff Login Page
//!
//! Sign-in for the staff console. Admins land on the staff dashboard,
//! other staff on order management.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::{InlineLoading, InputField};
use crate::state::{Notices, Session};
use crate::validate::{validate_login, FieldErrors};

/// Staff login page component
#[component]
pub fn StaffLogin() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::new());
    let (submitting, set_submitting) = create_signal(false);

    let field_error = move |name: &'static str| {
        Signal::derive(move || errors.get().get(name).cloned())
    };

    let navigate = use_navigate();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let found = validate_login(&email.get_untracked(), &password.get_untracked());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());

        let email = email.get_untracked();
        let password = password.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            set_submitting.set(true);
            match api::staff_login(&email, &password).await {
                Ok(auth) => {
                    let role = auth.role.clone().unwrap_or_else(|| "staff".to_string());
                    session.login_staff(&auth.staff_id_string(), &role, auth.token.as_deref());
                    notices.show_success(&format!("Welcome, {}!", auth.name));

                    let destination = if role == "admin" { "/staff/dashboard" } else { "/order-management" };
                    gloo_timers::callback::Timeout::new(1000, move || {
                        navigate(destination, Default::default());
                    }).forget();
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 space-y-6">
            <h1 class="text-2xl font-bold text-center">"Staff Login"</h1>
            <p class="text-center text-gray-400 text-sm">"Staff console access only."</p>

            <form on:submit=on_submit class="space-y-4">
                <InputField label="Email" input_type="email" value=email
                    placeholder="staff@awestore.com" error=field_error("email") />
                <InputField label="Password" input_type="password" value=password
                    error=field_error("password") />

                <button
                    type="submit"
                    class="w-full py-3 bg-yellow-500 hover:bg-yellow-400 text-gray-900 rounded-lg font-semibold disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        view! { "Sign In" }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}
