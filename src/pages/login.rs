//! Login Page
//!
//! Customer sign-in plus the "continue as guest" path for cart-only
//! sessions.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{InlineLoading, InputField};
use crate::state::{Notices, Session};
use crate::validate::{validate_login, FieldErrors};

/// Customer login page component
#[component]
pub fn Login() -> impl IntoView {
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
            match api::login(&email, &password).await {
                Ok(auth) => {
                    session.login_customer(&auth.user_id_string(), auth.token.as_deref());
                    notices.show_success("Welcome back!");
                    gloo_timers::callback::Timeout::new(1000, move || {
                        navigate("/", Default::default());
                    }).forget();
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    let navigate_guest = use_navigate();
    let on_guest = move |_| {
        session.start_guest();
        notices.show_success("Continuing as guest");
        navigate_guest("/products", Default::default());
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 space-y-6">
            <h1 class="text-2xl font-bold text-center">"Log In"</h1>

            <form on:submit=on_submit class="space-y-4">
                <InputField label="Email" input_type="email" value=email
                    placeholder="you@example.com" error=field_error("email") />
                <InputField label="Password" input_type="password" value=password
                    error=field_error("password") />

                <button
                    type="submit"
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        view! { "Log In" }.into_view()
                    }}
                </button>
            </form>

            <button
                class="w-full py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium"
                on:click=on_guest
            >
                "Continue as Guest"
            </button>

            <p class="text-center text-gray-400 text-sm">
                "New here? "
                <A href="/signup" class="text-blue-400 hover:text-blue-300">"Create an account"</A>
            </p>
        </div>
    }
}
