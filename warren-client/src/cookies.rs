use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Opaque key-value session storage, e.g. the browser cookie jar
pub trait CookieStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
}

impl<C: CookieStore + ?Sized> CookieStore for Arc<C> {
    fn get(&self, name: &str) -> Option<String> { self.as_ref().get(name) }

    fn set(&self, name: &str, value: &str) { self.as_ref().set(name, value) }
}

#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    cookies: RwLock<HashMap<String, String>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self { Default::default() }

    pub fn with_cookies<K: ToString, V: ToString>(cookies: impl IntoIterator<Item = (K, V)>) -> Self {
        let cookies = cookies.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { cookies: RwLock::new(cookies) }
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        let cookies = self.cookies.read().unwrap_or_else(PoisonError::into_inner);
        cookies.get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        let mut cookies = self.cookies.write().unwrap_or_else(PoisonError::into_inner);
        cookies.insert(name.into(), value.into());
    }
}
