/// A single-entry cache for a derived value.
///
/// The value is recomputed only when the key differs from the cached one. Keys are compared
/// with `PartialEq`, so a cheap composite key (a generation counter plus a normalized query,
/// for example) is enough to skip redundant flatten/filter passes.
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K, V> Memo<K, V> {
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// The cached value, whatever key it was computed for.
    pub fn value(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, v)| v)
    }

    pub fn key(&self) -> Option<&K> {
        self.entry.as_ref().map(|(k, _)| k)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entry {
            Some((k, v)) if k == key => Some(v),
            _ => None,
        }
    }

    pub fn is_cached(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value for `key`, calling `f` only on a miss.
    pub fn get_or_insert_with(&mut self, key: K, f: impl FnOnce() -> V) -> &V {
        let entry = match self.entry.take() {
            Some((k, v)) if k == key => (k, v),
            _ => {
                mtrace!("Memo miss");
                (key, f())
            }
        };
        &self.entry.insert(entry).1
    }
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
