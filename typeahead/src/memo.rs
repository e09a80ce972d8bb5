//! Cached derived value with an explicit dependency key.
//!
//! Derived outputs (dropdown content, the shared-context snapshot) are
//! recomputed only when their tracked inputs change by value. The key is
//! compared with `PartialEq`; a differing key discards the cached value.

/// A value computed on demand and kept until its dependency key changes.
#[derive(Debug)]
pub struct Memo<K, V> {
    cached: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { cached: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the cached value is still valid for `key`.
    pub fn is_fresh(&self, key: &K) -> bool {
        self.cached.as_ref().is_some_and(|(k, _)| k == key)
    }

    /// Return the cached value for `key`, computing it if the key changed
    /// or nothing has been computed yet.
    pub fn get_or_insert_with<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        if !self.is_fresh(&key) {
            let value = compute();
            self.cached = Some((key, value));
        }
        let (_, value) = self.cached.as_ref().expect("memo populated above");
        value
    }

    /// Drop the cached value, forcing recomputation on next access.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
