//! Memoization of resolved colors.

use std::collections::HashMap;

/// Exact-key memo table from source sRGB to resolved sRGB.
///
/// Keys are byte-exact; two colors that look identical but differ by one
/// channel step are separate entries. Nothing is ever evicted, so the
/// table grows to the number of distinct colors seen. Alpha is not part
/// of the key.
///
/// A cache is only valid for the palette, metric and policy it was filled
/// with. Create a fresh one per image and hand it to the pixel driver;
/// it has a single writer and no interior mutability.
///
/// ```
/// use perceptual_match::ResolutionCache;
///
/// let mut cache = ResolutionCache::new();
/// assert_eq!(cache.lookup([1, 2, 3]), None);
///
/// cache.store([1, 2, 3], [0, 0, 0]);
/// assert_eq!(cache.lookup([1, 2, 3]), Some([0, 0, 0]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: HashMap<[u8; 3], [u8; 3]>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn lookup(&self, source: [u8; 3]) -> Option<[u8; 3]> {
        self.entries.get(&source).copied()
    }

    /// Record a resolution. Storing the same key again overwrites it.
    #[inline]
    pub fn store(&mut self, source: [u8; 3], resolved: [u8; 3]) {
        self.entries.insert(source, resolved);
    }

    /// Number of distinct source colors stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
