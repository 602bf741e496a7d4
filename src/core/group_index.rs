use std::collections::BTreeSet;

use crate::core::record::RecordGroup;

/// Sorted, deduplicated group keys of one refresh.
///
/// Keys are ordered by code point, so the index of a key is stable for the
/// lifetime of the refresh. It is not stable across refreshes whose key set
/// differs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupKeySet {
    keys: Vec<String>,
}

impl GroupKeySet {
    /// Builds the set from any sequence of optional keys; `None` is ignored.
    pub fn from_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let unique: BTreeSet<&str> = keys.into_iter().flatten().collect();
        Self {
            keys: unique.into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn from_groups<R>(groups: &[RecordGroup<R>]) -> Self {
        Self::from_keys(groups.iter().map(|group| group.key.as_deref()))
    }

    /// Position of `key` in the sorted set.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys
            .binary_search_by(|probe| probe.as_str().cmp(key))
            .ok()
    }

    /// Index used for points of a record group. Key-less (and unknown)
    /// groups map to `0`.
    #[must_use]
    pub fn index_for(&self, key: Option<&str>) -> usize {
        key.and_then(|key| self.index_of(key)).unwrap_or(0)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
