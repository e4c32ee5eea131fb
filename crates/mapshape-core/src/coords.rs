//! Geographic coordinates and memoized conversions.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Caches a derived value and recomputes it only when its key changes.
///
/// Native point objects are recreated on every conversion, so a binding
/// keeps one `Memo` per coordinate prop and hands the same object back until
/// latitude or longitude actually move.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Return the cached value for `key`, computing it if the key changed.
    pub fn get_or_compute(&mut self, key: &K, compute: impl FnOnce(&K) -> V) -> &V {
        if !matches!(&self.entry, Some((cached, _)) if cached == key) {
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| (key.clone(), compute(key)));
        value
    }

    /// The currently cached value, if any.
    pub fn value(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, value)| value)
    }
}

impl<K: PartialEq + Clone, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
