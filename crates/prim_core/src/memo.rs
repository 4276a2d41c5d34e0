//! Single-entry memo cache keyed by dependency values

/// Remembers the last computed value together with the key it was computed
/// from. Asking again with an equal key returns the stored value without
/// running the computation; any other key recomputes and replaces it.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it on a miss
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some(value) = self.lookup(&key) {
            return value;
        }
        let value = compute(&key);
        self.store(key, value.clone());
        value
    }

    /// Cached value for `key`, if the stored entry was computed from it.
    ///
    /// Counts a hit when found. Pair with [`store`](Self::store) to compute
    /// the value in between without borrowing the memo.
    pub fn lookup(&mut self, key: &K) -> Option<V> {
        match &self.entry {
            Some((cached_key, value)) if cached_key == key => {
                self.hits += 1;
                Some(value.clone())
            }
            _ => None,
        }
    }

    /// Record a freshly computed value, replacing the previous entry
    pub fn store(&mut self, key: K, value: V) {
        self.misses += 1;
        self.entry = Some((key, value));
    }

    /// Last computed value, if any
    pub fn peek(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, value)| value)
    }

    /// Drop the cached entry so the next lookup recomputes
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
