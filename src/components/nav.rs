//! Navigation Component
//!
//! Header bar with brand, search box, cart badge, and identity-dependent
//! links. Everything here derives from the session signals; the bar updates
//! by itself when identity or cart count changes.

use leptos::*;
use leptos_router::*;

use crate::state::{Identity, Notices, Session};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notices = use_context::<Notices>().expect("Notices not found");
    let (query, set_query) = create_signal(String::new());

    // Re-read stored identity on mount
    create_effect(move |_| {
        session.refresh();
        session.refresh_cart_count();
    });

    let navigate_search = use_navigate();
    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if q.trim().is_empty() {
            notices.show_error("Please enter a search term");
            return;
        }
        let encoded = js_sys::encode_uri_component(q.trim());
        navigate_search(&format!("/search-results?q={}", encoded), Default::default());
    };

    let navigate_logout = use_navigate();
    let on_logout = move |_| {
        session.logout();
        navigate_logout("/", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🛒"</span>
                        <span class="text-xl font-bold text-white">"AWEStore"</span>
                    </A>

                    // Search box
                    <form class="flex items-center flex-1 max-w-md mx-6" on:submit=on_search>
                        <input
                            type="text"
                            class="w-full bg-gray-700 text-white placeholder-gray-400 rounded-l-lg px-3 py-2 focus:outline-none"
                            placeholder="Search products..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-r-lg"
                        >
                            "Search"
                        </button>
                    </form>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/products" label="Products" />

                        // Cart badge for shopping sessions
                        {move || {
                            session.identity.get().user_id().map(|_| view! {
                                <A
                                    href="/cart"
                                    class="relative px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Cart"
                                    {move || {
                                        let count = session.cart_count.get();
                                        (count > 0).then(|| view! {
                                            <span class="absolute -top-1 -right-1 bg-red-600 text-white text-xs rounded-full px-1.5 py-0.5">
                                                {count}
                                            </span>
                                        })
                                    }}
                                </A>
                            })
                        }}

                        // Identity-dependent menu
                        {
                            move || match session.identity.get() {
                                Identity::Anonymous => view! {
                                    <NavLink href="/login" label="Login" />
                                    <NavLink href="/signup" label="Sign Up" />
                                    <NavLink href="/staff/login" label="Staff" />
                                }.into_view(),
                                Identity::Customer(_) => view! {
                                    <NavLink href="/profile" label="Profile" />
                                    <NavLink href="/order-history" label="Orders" />
                                    <LogoutButton on_logout=on_logout.clone() />
                                }.into_view(),
                                Identity::Guest(_) => view! {
                                    <span class="px-3 py-1 bg-gray-700 text-gray-300 text-sm rounded-full">
                                        "Guest"
                                    </span>
                                    <NavLink href="/login" label="Login" />
                                    <NavLink href="/signup" label="Sign Up" />
                                    <LogoutButton on_logout=on_logout.clone() />
                                }.into_view(),
                                Identity::Staff { ref role, .. } => {
                                    let admin = role.as_deref() == Some("admin");
                                    view! {
                                        {admin.then(|| view! {
                                            <NavLink href="/staff/dashboard" label="Staff" />
                                        })}
                                        <NavLink href="/order-management" label="Orders" />
                                        <NavLink href="/product-management" label="Products" />
                                        <LogoutButton on_logout=on_logout.clone() />
                                    }.into_view()
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Sign-out button shown for any logged-in identity
#[component]
fn LogoutButton(on_logout: impl Fn(web_sys::MouseEvent) + 'static) -> impl IntoView {
    view! {
        <button
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            on:click=on_logout
        >
            "Logout"
        </button>
    }
}
