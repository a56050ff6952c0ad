//! Word lists backing the data-driven generators.
//!
//! A word list maps a category name (`name.first`, `domain.tld`, ...) to an
//! ordered list of entries. Each category becomes a generator that picks one
//! entry uniformly at random. The builtin corpus is embedded at compile time
//! and can be extended or overridden from a YAML file:
//!
//! ```yaml
//! name.first: [Ada, Grace]
//! color: [red, green, blue]
//! ```

use crate::error::WordListError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_CORPUS: &str = include_str!("../data/wordlist.yaml");

/// Category name to ordered entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    categories: BTreeMap<String, Vec<String>>,
}

impl WordList {
    /// An empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The corpus shipped with phony.
    pub fn builtin() -> Self {
        Self::from_yaml(BUILTIN_CORPUS).expect("embedded word list is valid YAML")
    }

    /// Load a word list from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a word list from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, WordListError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Insert or replace a category.
    pub fn insert(&mut self, category: impl Into<String>, entries: Vec<String>) {
        self.categories.insert(category.into(), entries);
    }

    /// Overlay `other` on top of this list. Categories present in `other`
    /// replace ours wholesale.
    pub fn merge(mut self, other: WordList) -> Self {
        self.categories.extend(other.categories);
        self
    }

    /// Entries for `category`, if it exists.
    pub fn lookup(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Category names, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Categories with their entries, sorted by category.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, entries)| (category.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
