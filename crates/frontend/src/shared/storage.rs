//! Key-value stores for client-side persisted state

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value store (the shape of `window.localStorage`)
///
/// Writes are best-effort: a failing write (quota, storage disabled) is
/// logged and dropped.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) {
        (**self).delete(key)
    }
}

/// `window.localStorage`; every operation is a no-op without a window
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Logs a failed storage call at warn; returns whether it succeeded
fn check_storage<E: std::fmt::Debug>(action: &str, key: &str, result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("localStorage {} failed for {}: {:?}", action, key, e);
            false
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = get_local_storage() else {
            return;
        };
        check_storage("write", key, storage.set_item(key, value));
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            check_storage("delete", key, storage.remove_item(key));
        }
    }
}

/// In-process store (tests, browsers without storage)
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a", "1");
        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.delete("a");
        assert!(!store.contains("a"));
        store.delete("missing");
    }

    #[test]
    fn test_shared_handle() {
        let store = Rc::new(MemoryStore::new());
        let handle: Rc<MemoryStore> = Rc::clone(&store);
        handle.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_failed_storage_calls_are_reported() {
        assert!(check_storage::<&str>("delete", "paged_cache:postes", Ok(())));
        assert!(!check_storage("delete", "paged_cache:postes", Err("SecurityError")));
        assert!(!check_storage("write", "paged_cache:postes", Err("QuotaExceededError")));
    }
}
