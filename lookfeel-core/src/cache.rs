// SPDX-License-Identifier: LGPL-3.0-only

//! Caches owned by a style object.
//!
//! Both caches are performance aids only. A miss always recomputes, and a
//! poisoned lock is recovered instead of failing the paint.

use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use lru::LruCache;

use crate::asset::AssetImage;

/// Default number of entries kept by a [PixmapCache].
pub const DEFAULT_PIXMAP_CACHE_CAPACITY: usize = 256;

/// LRU cache of generated images keyed by rendering parameters.
#[derive(Debug)]
pub struct PixmapCache {
    inner: Mutex<LruCache<String, AssetImage>>,
}

impl PixmapCache {
    /// Create a cache holding at most `capacity` images (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up an image.
    pub fn get(&self, key: &str) -> Option<AssetImage> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let hit = inner.get(key).cloned();
        log::trace!("pixmap cache {} for {}", if hit.is_some() { "hit" } else { "miss" }, key);
        hit
    }

    /// Store an image, evicting the least recently used one when full.
    pub fn insert(&self, key: impl Into<String>, image: AssetImage) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.put(key.into(), image);
    }

    /// Return the cached image or build and store it.
    pub fn get_or_insert_with(&self, key: &str, build: impl FnOnce() -> AssetImage) -> AssetImage {
        if let Some(hit) = self.get(key) {
            return hit;
        }
        let image = build();
        self.insert(key, image.clone());
        image
    }

    /// Number of cached images.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).cap().get()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for PixmapCache {
    fn default() -> Self {
        Self::new(DEFAULT_PIXMAP_CACHE_CAPACITY)
    }
}

/// A single-entry cache that remembers the most recent computation.
///
/// The entry is replaced whenever the key differs from the cached one.
#[derive(Debug)]
pub struct LastLayoutCache<K, V> {
    slot: Mutex<Option<(K, V)>>,
}

impl<K: PartialEq, V: Clone> LastLayoutCache<K, V> {
    /// An empty cache.
    pub fn new() -> Self {
        Self { slot: Mutex::new(None) }
    }

    /// Return the value for `key`, computing it if the slot holds another key.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_key, value)) = slot.as_ref() {
            if *cached_key == key {
                log::trace!("layout cache hit");
                return value.clone();
            }
        }
        log::trace!("layout cache miss");
        let value = compute();
        *slot = Some((key, value.clone()));
        value
    }

    /// Forget the cached entry.
    pub fn invalidate(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<K: PartialEq, V: Clone> Default for LastLayoutCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_pixmap_cache_evicts_lru() {
        let cache = PixmapCache::new(2);
        cache.insert("a", AssetImage::Resource("a".into()));
        cache.insert("b", AssetImage::Resource("b".into()));
        assert!(cache.get("a").is_some());
        cache.insert("c", AssetImage::Resource("c".into()));
        assert!(cache.get("b").is_none());
        assert!(cache.get("a").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(PixmapCache::new(0).capacity(), 1);
    }

    #[test]
    fn test_get_or_insert_with_builds_once() {
        let cache = PixmapCache::default();
        let calls = Cell::new(0);
        for _ in 0..3 {
            cache.get_or_insert_with("k", || {
                calls.set(calls.get() + 1);
                AssetImage::Resource("k".into())
            });
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_last_layout_cache_invalidates_on_key_change() {
        let cache: LastLayoutCache<u32, u32> = LastLayoutCache::new();
        let calls = Cell::new(0);
        let compute = |v: u32| {
            calls.set(calls.get() + 1);
            v * 2
        };
        assert_eq!(cache.get_or_compute(1, || compute(1)), 2);
        assert_eq!(cache.get_or_compute(1, || compute(1)), 2);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.get_or_compute(2, || compute(2)), 4);
        assert_eq!(calls.get(), 2);
        cache.invalidate();
        cache.get_or_compute(2, || compute(2));
        assert_eq!(calls.get(), 3);
    }
}
