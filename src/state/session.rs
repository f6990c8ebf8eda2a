//! Session State
//!
//! Identity and cart-count state shared across the component tree. Instead of
//! components reading browser storage directly and signaling each other with
//! ad hoc DOM events, a single [`Session`] is provided through context; any
//! component reading its signals re-renders when they change. Storage remains
//! the persistence layer underneath.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;

/// User ids beginning with this marker denote an anonymous cart-only session
pub const GUEST_PREFIX: &str = "guest";

const USER_ID_KEY: &str = "awestore_user_id";
const STAFF_ID_KEY: &str = "awestore_staff_id";
const STAFF_ROLE_KEY: &str = "awestore_staff_role";
const TOKEN_KEY: &str = "awestore_token";

/// Who the browser session currently is
#[derive(Clone, Debug, PartialEq)]
pub enum Identity {
    Anonymous,
    Customer(String),
    Guest(String),
    Staff { staff_id: String, role: Option<String> },
}

impl Identity {
    /// Classify stored identifiers. A staff identity always wins over a user
    /// identity; a session is never both at once from this read's perspective.
    pub fn classify(
        staff_id: Option<String>,
        staff_role: Option<String>,
        user_id: Option<String>,
    ) -> Self {
        if let Some(staff_id) = staff_id {
            return Identity::Staff { staff_id, role: staff_role };
        }
        match user_id {
            Some(id) if id.starts_with(GUEST_PREFIX) => Identity::Guest(id),
            Some(id) => Identity::Customer(id),
            None => Identity::Anonymous,
        }
    }

    /// The id used for cart and order calls, if any
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Identity::Customer(id) | Identity::Guest(id) => Some(id),
            _ => None,
        }
    }

    pub fn staff_id(&self) -> Option<&str> {
        match self {
            Identity::Staff { staff_id, .. } => Some(staff_id),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Staff { role: Some(role), .. } if role == "admin")
    }
}

/// Session store provided to all components
#[derive(Clone, Copy)]
pub struct Session {
    /// Current classified identity
    pub identity: RwSignal<Identity>,
    /// Number of lines in the user's cart, shown as the nav badge
    pub cart_count: RwSignal<u32>,
}

/// Provide the session store and hydrate it from storage
pub fn provide_session() {
    let session = Session {
        identity: create_rw_signal(Identity::Anonymous),
        cart_count: create_rw_signal(0),
    };
    session.refresh();
    session.refresh_cart_count();

    provide_context(session);
}

impl Session {
    /// Re-read the stored identifiers and update the identity signal
    pub fn refresh(&self) {
        let identity = Identity::classify(
            read_key(STAFF_ID_KEY),
            read_key(STAFF_ROLE_KEY),
            read_key(USER_ID_KEY),
        );
        self.identity.set(identity);
    }

    /// Record a customer login
    pub fn login_customer(&self, user_id: &str, token: Option<&str>) {
        write_key(USER_ID_KEY, user_id);
        if let Some(token) = token {
            write_key(TOKEN_KEY, token);
        }
        self.refresh();
        self.refresh_cart_count();
    }

    /// Record a staff login
    pub fn login_staff(&self, staff_id: &str, role: &str, token: Option<&str>) {
        write_key(STAFF_ID_KEY, staff_id);
        write_key(STAFF_ROLE_KEY, role);
        if let Some(token) = token {
            write_key(TOKEN_KEY, token);
        }
        self.refresh();
    }

    /// Mint a guest id and record it as the session user
    pub fn start_guest(&self) -> String {
        let guest_id = mint_guest_id(js_sys::Date::now());
        write_key(USER_ID_KEY, &guest_id);
        self.refresh();
        self.refresh_cart_count();
        guest_id
    }

    /// Clear all four identity keys and reset derived state
    pub fn logout(&self) {
        remove_key(USER_ID_KEY);
        remove_key(STAFF_ID_KEY);
        remove_key(STAFF_ROLE_KEY);
        remove_key(TOKEN_KEY);
        self.identity.set(Identity::Anonymous);
        self.cart_count.set(0);
    }

    /// Re-count the cart for the current user. Defaults to 0 on any failure;
    /// callers never see an error from this path.
    pub fn refresh_cart_count(&self) {
        let user_id = match self.identity.get_untracked().user_id() {
            Some(id) => id.to_string(),
            None => {
                self.cart_count.set(0);
                return;
            }
        };

        let cart_count = self.cart_count;
        spawn_local(async move {
            let count = match api::fetch_cart(&user_id).await {
                Ok(items) => items.len() as u32,
                Err(_) => 0,
            };
            cart_count.set(count);
        });
    }
}

/// Guest ids are the guest marker plus the mint time in milliseconds
pub fn mint_guest_id(now_millis: f64) -> String {
    format!("{}-{}", GUEST_PREFIX, now_millis as u64)
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read_key(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

fn write_key(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove_key(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_anonymous() {
        assert_eq!(Identity::classify(None, None, None), Identity::Anonymous);
    }

    #[test]
    fn test_classify_customer() {
        let identity = Identity::classify(None, None, Some("17".to_string()));
        assert_eq!(identity, Identity::Customer("17".to_string()));
        assert_eq!(identity.user_id(), Some("17"));
    }

    #[test]
    fn test_classify_guest_prefix() {
        let identity = Identity::classify(None, None, Some("guest-1717200000000".to_string()));
        assert!(matches!(identity, Identity::Guest(_)));
    }

    #[test]
    fn test_staff_wins_over_user() {
        let identity = Identity::classify(
            Some("3".to_string()),
            Some("admin".to_string()),
            Some("17".to_string()),
        );
        assert_eq!(
            identity,
            Identity::Staff { staff_id: "3".to_string(), role: Some("admin".to_string()) }
        );
        assert_eq!(identity.user_id(), None);
        assert!(identity.is_admin());
    }

    #[test]
    fn test_plain_staff_is_not_admin() {
        let identity = Identity::classify(Some("4".to_string()), Some("staff".to_string()), None);
        assert!(!identity.is_admin());
        assert_eq!(identity.staff_id(), Some("4"));
    }

    #[test]
    fn test_minted_guest_id_classifies_as_guest() {
        let guest_id = mint_guest_id(1717200000000.0);
        assert_eq!(guest_id, "guest-1717200000000");
        let identity = Identity::classify(None, None, Some(guest_id));
        assert!(matches!(identity, Identity::Guest(_)));
    }
}

// Storage-backed behavior needs a browser; run with wasm-pack test.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn logout_clears_stored_keys_and_resets_state() {
        let runtime = create_runtime();

        write_key(USER_ID_KEY, "17");
        write_key(STAFF_ID_KEY, "3");
        write_key(STAFF_ROLE_KEY, "admin");
        write_key(TOKEN_KEY, "dummy-token");

        let session = Session {
            identity: create_rw_signal(Identity::Anonymous),
            cart_count: create_rw_signal(2),
        };
        session.refresh();
        assert!(matches!(session.identity.get_untracked(), Identity::Staff { .. }));

        session.logout();

        for key in [USER_ID_KEY, STAFF_ID_KEY, STAFF_ROLE_KEY, TOKEN_KEY] {
            assert_eq!(read_key(key), None, "{} survived logout", key);
        }
        assert_eq!(session.identity.get_untracked(), Identity::Anonymous);
        assert_eq!(session.cart_count.get_untracked(), 0);

        runtime.dispose();
    }
}
