//! Reference link targets.
//!
//! Reference definitions are not collected from the document itself; the
//! inline parser asks a [`ReferenceResolver`] for labels it could not match
//! as inline links. [`ReferenceMap`] is the stock in-memory resolver.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkReference {
    pub destination: String,
    pub title: String,
}

impl LinkReference {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

pub trait ReferenceResolver {
    /// Looks up the raw label text, as written between the brackets.
    fn resolve(&self, label: &str) -> Option<LinkReference>;
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReferences;

impl ReferenceResolver for NoReferences {
    fn resolve(&self, _label: &str) -> Option<LinkReference> {
        None
    }
}

/// Case-folds and collapses internal whitespace so that `[Foo  Bar]` and
/// `[foo bar]` name the same target.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceMap {
    entries: HashMap<String, LinkReference>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target. The first definition of a label wins.
    pub fn insert(&mut self, label: &str, reference: LinkReference) {
        let key = normalize_label(label);
        if key.is_empty() {
            log::debug!("Ignoring reference with blank label");
            return;
        }
        self.entries.entry(key).or_insert(reference);
    }

    pub fn get(&self, label: &str) -> Option<&LinkReference> {
        self.entries.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReferenceResolver for ReferenceMap {
    fn resolve(&self, label: &str) -> Option<LinkReference> {
        self.get(label).cloned()
    }
}

impl<L: AsRef<str>> FromIterator<(L, LinkReference)> for ReferenceMap {
    fn from_iter<I: IntoIterator<Item = (L, LinkReference)>>(iter: I) -> Self {
        let mut map = ReferenceMap::new();
        for (label, reference) in iter {
            map.insert(label.as_ref(), reference);
        }
        map
    }
}
