//! Grouping engine: stable partition of a sequence into labelled buckets

use indexmap::IndexMap;
use serde::Serialize;

/// Identity of a group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum GroupKey {
    /// The single implicit group used when no grouping is requested
    All,
    /// Items sharing this key value
    Key(String),
    /// Items whose key was absent
    Unassigned,
}

impl GroupKey {
    /// The key value, if this is a keyed group
    pub fn as_key(&self) -> Option<&str> {
        match self {
            GroupKey::Key(k) => Some(k),
            _ => None,
        }
    }
}

/// One bucket of a view result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<R> {
    pub key: GroupKey,
    pub label: String,
    pub items: Vec<R>,

    /// Matched items in this group before pagination
    pub total: usize,

    /// Pages this group spans on its own (per-group pagination)
    pub total_pages: usize,
}

impl<R> Group<R> {
    pub fn new(key: GroupKey, label: impl Into<String>, items: Vec<R>) -> Self {
        let total = items.len();
        Self {
            key,
            label: label.into(),
            items,
            total,
            total_pages: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply `f` to every item, keeping group metadata
    pub fn map<U>(self, f: impl FnMut(R) -> U) -> Group<U> {
        Group {
            key: self.key,
            label: self.label,
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Label of the implicit single group
pub const ALL_GROUP_LABEL: &str = "All";

/// Default label of the bucket for items without a key
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// Wrap a whole sequence in the implicit `All` group
pub fn single_group<R>(items: Vec<R>) -> Group<R> {
    Group::new(GroupKey::All, ALL_GROUP_LABEL, items)
}

/// Partition `items` by key, preserving first-seen group order and the
/// relative order of items inside each group.
///
/// Items whose key is `None` or blank go to the `Unassigned` group, which
/// takes its place in the order like any other group.
pub fn group_by<R, K, L>(items: Vec<R>, key_of: K, label_for: L, unassigned_label: &str) -> Vec<Group<R>>
where
    K: Fn(&R) -> Option<String>,
    L: Fn(&str) -> String,
{
    let mut buckets: IndexMap<GroupKey, Vec<R>> = IndexMap::new();
    for item in items {
        let key = match key_of(&item) {
            Some(k) if !k.trim().is_empty() => GroupKey::Key(k),
            _ => GroupKey::Unassigned,
        };
        buckets.entry(key).or_default().push(item);
    }

    buckets
        .into_iter()
        .map(|(key, items)| {
            let label = match &key {
                GroupKey::Key(k) => label_for(k),
                GroupKey::Unassigned => unassigned_label.to_string(),
                GroupKey::All => ALL_GROUP_LABEL.to_string(),
            };
            Group::new(key, label, items)
        })
        .collect()
}
