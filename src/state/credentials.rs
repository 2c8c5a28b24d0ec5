//! Durable storage slots for tokens and the cached profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live in expiring cookies, the profile lives in `localStorage`.
//! Both sit behind [`CredentialStore`] so the session store never touches
//! browser APIs directly and can be exercised with [`MemoryStore`].
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: write failures are ignored and reads degrade to
//! `None`, the same way the rest of the client treats browser storage.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const PROFILE_KEY: &str = "user_info";

/// The cached profile could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stored profile is corrupt: {0}")]
pub struct StorageParseError(pub String);

/// A key/value storage area.
///
/// `expires_in_days` is honored by stores that support expiry and ignored
/// by those that do not.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str, expires_in_days: Option<u32>);
    fn remove(&self, key: &str);
}

/// Expiring storage backed by `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

/// Persistent storage backed by `localStorage`; entries never expire.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Build a `document.cookie` assignment for `key`.
///
/// `expires` is an HTTP date; `None` produces a session cookie.
pub fn cookie_assignment(key: &str, encoded_value: &str, expires: Option<&str>) -> String {
    let mut out = format!("{key}={encoded_value}; path=/; SameSite=Lax");
    if let Some(expires) = expires {
        out.push_str("; expires=");
        out.push_str(expires);
    }
    out
}

/// Assignment that deletes `key`.
pub fn cookie_removal(key: &str) -> String {
    cookie_assignment(key, "", Some("Thu, 01 Jan 1970 00:00:00 GMT"))
}

/// Find the raw (still encoded) value of `key` in a `document.cookie` string.
pub fn find_cookie<'a>(cookies: &'a str, key: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == key).then_some(value)
    })
}

impl CredentialStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let cookies = html_document()?.cookie().ok()?;
            let raw = find_cookie(&cookies, key)?;
            if raw.is_empty() {
                return None;
            }
            js_sys::decode_uri_component(raw).ok().map(String::from)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str, expires_in_days: Option<u32>) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            let encoded = String::from(js_sys::encode_uri_component(value));
            let expires = expires_in_days.map(|days| {
                let at = js_sys::Date::now() + f64::from(days) * 86_400_000.0;
                String::from(js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(at)).to_utc_string())
            });
            let _ = doc.set_cookie(&cookie_assignment(key, &encoded, expires.as_deref()));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value, expires_in_days);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&cookie_removal(key));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

impl CredentialStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str, _expires_in_days: Option<u32>) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct MemoryEntry {
    value: String,
    expires_in_days: Option<u32>,
}

/// In-process store. Clones share the same slots, so a handle kept outside
/// the session store observes every write.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, MemoryEntry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiry recorded by the last `set` for `key`.
    pub fn expiry(&self, key: &str) -> Option<u32> {
        self.lock().get(key).and_then(|e| e.expires_in_days)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, MemoryEntry>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).map(|e| e.value.clone())
    }

    fn set(&self, key: &str, value: &str, expires_in_days: Option<u32>) {
        self.lock()
            .insert(key.to_owned(), MemoryEntry { value: value.to_owned(), expires_in_days });
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
