// SPDX-License-Identifier: LGPL-3.0-only

//! Memo of resolved icon paths.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use lru::LruCache;

/// Default number of remembered lookups.
pub const DEFAULT_CAPACITY: usize = 512;

type Key = (String, String, u32);

/// Bounded cache from (theme, icon name, size) to the lookup result.
///
/// Misses are remembered too, so a failing lookup walks the disk once.
pub struct IconPathCache {
    entries: Mutex<LruCache<Key, Option<PathBuf>>>,
}

impl IconPathCache {
    /// A cache remembering at most `capacity` lookups.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The remembered result, or `None` if this lookup never ran.
    pub fn get(&self, theme: &str, icon_name: &str, size: u32) -> Option<Option<PathBuf>> {
        let key = (theme.to_string(), icon_name.to_string(), size);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let hit = entries.get(&key).cloned();
        log::trace!(
            "IconPathCache: {} for {}/{}@{}",
            if hit.is_some() { "hit" } else { "miss" },
            theme,
            icon_name,
            size
        );
        hit
    }

    /// Remember a lookup result.
    pub fn put(&self, theme: &str, icon_name: &str, size: u32, path: Option<PathBuf>) {
        let key = (theme.to_string(), icon_name.to_string(), size);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, path);
    }

    /// Number of remembered lookups.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything.
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for IconPathCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remembers_misses_and_evicts() {
        let cache = IconPathCache::new(2);
        cache.put("t", "a", 16, None);
        cache.put("t", "b", 16, Some(PathBuf::from("/b.png")));
        assert_eq!(cache.get("t", "a", 16), Some(None));
        cache.put("t", "c", 16, None);
        // "b" was least recently used.
        assert_eq!(cache.get("t", "b", 16), None);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }
}
