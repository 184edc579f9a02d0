#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyIndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap<K> = BTreeMap<K, usize>;

/// Bound for section identifiers (`data-section` values / element ids).
#[cfg(feature = "std")]
pub trait SectionKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + ?Sized> SectionKey for K {}

#[cfg(not(feature = "std"))]
pub trait SectionKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord + ?Sized> SectionKey for K {}
