//! Input Field Component
//!
//! Labeled text input with an inline validation message.

use leptos::*;

/// Text input bound to a signal, with an optional field error below it
#[component]
pub fn InputField(
    /// Visible label above the input
    #[prop(into)]
    label: String,
    /// HTML input type
    #[prop(default = "text")]
    input_type: &'static str,
    /// Backing signal for the value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Validation message for this field, if any
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let border_class = move || {
        let has_error = error.map(|e| e.get().is_some()).unwrap_or(false);
        if has_error {
            "mt-1 block w-full border border-red-500 rounded-lg p-2 focus:ring-blue-500 focus:border-blue-500"
        } else {
            "mt-1 block w-full border border-gray-300 rounded-lg p-2 focus:ring-blue-500 focus:border-blue-500"
        }
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700">{label}</label>
            <input
                type=input_type
                class=border_class
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                error.and_then(|e| e.get()).map(|msg| view! {
                    <p class="text-red-500 text-sm mt-1">{msg}</p>
                })
            }}
        </div>
    }
}
