//! Single-entry memo cache for derived views.

use std::rc::Rc;

/// Remembers the last computed value and the key it was computed for.
///
/// A lookup with an equal key returns the cached value; anything else
/// recomputes and replaces it. Keys compare with `PartialEq`, so a
/// [`Dataset`](crate::Dataset) key compares by identity and a
/// [`FilterSpec`](crate::FilterSpec) key by value.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, Rc<V>)>,
    computations: usize,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }

    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> Rc<V> {
        if let Some((cached_key, value)) = &self.entry {
            if *cached_key == key {
                return Rc::clone(value);
            }
        }
        let value = Rc::new(compute(&key));
        self.computations += 1;
        self.entry = Some((key, Rc::clone(&value)));
        value
    }

    /// How many times a value was (re)computed.
    pub fn computations(&self) -> usize {
        self.computations
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
