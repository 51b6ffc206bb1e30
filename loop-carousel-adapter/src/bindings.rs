use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::ItemId;

#[cfg(feature = "std")]
type IndexMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
type IndexMap<K> = BTreeMap<K, usize>;

/// Maps item ids to nominal carousel indexes.
///
/// Build it once, at setup, from the active items in layout order. Click handlers then resolve
/// the clicked item with [`ItemBindings::index_of`] instead of capturing an index per item.
#[derive(Clone)]
pub struct ItemBindings<K> {
    keys: Vec<K>,
    index: IndexMap<K>,
}

impl<K: ItemId + Clone> ItemBindings<K> {
    /// Registers `keys` in order: the first key gets index 0.
    ///
    /// A repeated key keeps its first index.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let mut out = Self {
            keys: Vec::new(),
            index: IndexMap::new(),
        };
        for key in keys {
            let i = out.keys.len();
            out.index.entry(key.clone()).or_insert(i);
            out.keys.push(key);
        }
        out
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn key_for(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<K: fmt::Debug> fmt::Debug for ItemBindings<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemBindings")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}
