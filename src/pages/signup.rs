//! Signup Page
//!
//! New customer registration; a successful signup logs the session in
//! immediately.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{InlineLoading, InputField};
use crate::state::{Notices, Session};
use crate::validate::{validate_signup, FieldErrors};

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");

    let name = create_rw_signal(String::new());
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

        let found = validate_signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());

        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            set_submitting.set(true);
            match api::signup(&name, &email, &password).await {
                Ok(auth) => {
                    session.login_customer(&auth.user_id_string(), auth.token.as_deref());
                    notices.show_success("Account created!");
                    gloo_timers::callback::Timeout::new(1000, move || {
                        navigate("/", Default::default());
                    }).forget();
                }
                Err(e) => notices.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8 space-y-6">
            <h1 class="text-2xl font-bold text-center">"Create Account"</h1>

            <form on:submit=on_submit class="space-y-4">
                <InputField label="Name" value=name placeholder="Your name"
                    error=field_error("name") />
                <InputField label="Email" input_type="email" value=email
                    placeholder="you@example.com" error=field_error("email") />
                <InputField label="Password" input_type="password" value=password
                    placeholder="At least 6 characters" error=field_error("password") />

                <button
                    type="submit"
                    class="w-full py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-semibold disabled:opacity-50"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        view! { "Sign Up" }.into_view()
                    }}
                </button>
            </form>

            <p class="text-center text-gray-400 text-sm">
                "Already have an account? "
                <A href="/login" class="text-blue-400 hover:text-blue-300">"Log in"</A>
            </p>
        </div>
    }
}
