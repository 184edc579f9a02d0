use core::borrow::Borrow;

use crate::key::{KeyIndexMap, SectionKey};

/// Maps a section key to the index of the navigation item that points at it.
///
/// Built once from the navigation items (in document order) and read-only afterwards. Items
/// without a key are skipped; if two items share a key, the later one wins.
#[derive(Clone, Debug)]
pub struct SectionMap<K> {
    items: KeyIndexMap<K>,
    nav_count: usize,
}

impl<K: SectionKey> SectionMap<K> {
    pub fn new<I>(nav_keys: I) -> Self
    where
        I: IntoIterator<Item = Option<K>>,
    {
        let mut items = KeyIndexMap::<K>::new();
        let mut nav_count = 0usize;
        for (index, key) in nav_keys.into_iter().enumerate() {
            nav_count = index + 1;
            let Some(key) = key else {
                continue;
            };
            if items.insert(key, index).is_some() {
                swarn!(index, "SectionMap: duplicate section key, later nav item wins");
            }
        }
        sdebug!(nav_count, mapped = items.len(), "SectionMap::new");
        Self { items, nav_count }
    }

    /// The nav item index for a section key.
    pub fn nav_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: SectionKey + ?Sized,
    {
        self.items.get(key).copied()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: SectionKey + ?Sized,
    {
        self.items.contains_key(key)
    }

    /// Number of navigation items seen at build time, keyed or not.
    pub fn nav_count(&self) -> usize {
        self.nav_count
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
