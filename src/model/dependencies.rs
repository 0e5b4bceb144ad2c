// src/model/dependencies.rs

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::TaskTitle;

/// The set of task titles a task depends on.
///
/// Titles are trimmed and empty entries are dropped on the way in, so the set
/// never contains `""` or whitespace-padded duplicates. Whether each title
/// actually refers to a task is checked later, when the dependency graph is
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dependencies(BTreeSet<TaskTitle>);

impl Dependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a free-text list such as `"Design, Review,,Ship "`.
    pub fn parse_list(text: &str) -> Self {
        text.split(',').collect()
    }

    /// Add a title. Returns `false` if it was already present or blank.
    pub fn insert(&mut self, title: impl AsRef<str>) -> bool {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return false;
        }
        self.0.insert(title.to_string())
    }

    pub fn remove(&mut self, title: &str) -> bool {
        self.0.remove(title.trim())
    }

    /// Set membership of `title` to `checked`.
    pub fn toggle(&mut self, title: &str, checked: bool) {
        if checked {
            self.insert(title);
        } else {
            self.remove(title);
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.0.contains(title)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Titles in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dependencies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut deps = Dependencies::new();
        for title in iter {
            deps.insert(title);
        }
        deps
    }
}

impl<'a> IntoIterator for &'a Dependencies {
    type Item = &'a TaskTitle;
    type IntoIter = std::collections::btree_set::Iter<'a, TaskTitle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
