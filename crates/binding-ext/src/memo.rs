//! Per-key memoization of pure initializers.
//!
//! Both caches own their mapping and grow monotonically: an entry, once
//! computed, is never evicted. Lookups take `&mut self`; share a cache across
//! threads by wrapping it in a lock.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

/// Computes a value once per distinct key and serves the stored value afterwards.
///
/// ```
/// use binding_ext::KeyedLazy;
///
/// let mut lengths = KeyedLazy::new(|name: &&str| name.len());
/// assert_eq!(*lengths.get("layout"), 6);
/// assert!(lengths.contains(&"layout"));
/// ```
pub struct KeyedLazy<K, T, F> {
    initializer: F,
    mapping: HashMap<K, T>,
}

impl<K, T, F> KeyedLazy<K, T, F>
where
    K: Eq + Hash,
    F: FnMut(&K) -> T,
{
    pub fn new(initializer: F) -> Self {
        Self {
            initializer,
            mapping: HashMap::new(),
        }
    }

    /// Returns the value for `key`, running the initializer on first lookup only.
    ///
    /// If the initializer panics nothing is stored for `key`.
    pub fn get(&mut self, key: K) -> &T {
        match self.mapping.entry(key) {
            Entry::Occupied(entry) => {
                log::trace!("keyed lazy hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                log::trace!("keyed lazy miss, running initializer");
                let value = (self.initializer)(entry.key());
                entry.insert(value)
            }
        }
    }
}

impl<K, T, F> KeyedLazy<K, T, F>
where
    K: Eq + Hash,
{
    pub fn contains(&self, key: &K) -> bool {
        self.mapping.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl<K, T, F> fmt::Debug for KeyedLazy<K, T, F>
where
    K: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedLazy")
            .field("mapping", &self.mapping)
            .finish_non_exhaustive()
    }
}

/// [`KeyedLazy`] for initializers that can fail.
///
/// A failed computation is handed back to the caller and leaves no entry, so the
/// next lookup of the same key runs the initializer again.
pub struct TryKeyedLazy<K, T, F> {
    initializer: F,
    mapping: HashMap<K, T>,
}

impl<K, T, F> TryKeyedLazy<K, T, F>
where
    K: Eq + Hash,
{
    pub fn new(initializer: F) -> Self {
        Self {
            initializer,
            mapping: HashMap::new(),
        }
    }

    /// Returns the stored value for `key`, or computes and stores it.
    pub fn try_get<E>(&mut self, key: K) -> Result<&T, E>
    where
        F: FnMut(&K) -> Result<T, E>,
    {
        match self.mapping.entry(key) {
            Entry::Occupied(entry) => {
                log::trace!("keyed lazy hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                log::trace!("keyed lazy miss, running fallible initializer");
                let value = (self.initializer)(entry.key())?;
                Ok(entry.insert(value))
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.mapping.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

impl<K, T, F> fmt::Debug for TryKeyedLazy<K, T, F>
where
    K: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryKeyedLazy")
            .field("mapping", &self.mapping)
            .finish_non_exhaustive()
    }
}
