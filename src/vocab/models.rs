//! Data models for word lists

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named mapping from word to meaning; the unit of persistence.
///
/// The on-disk shape is `{ "name": string, "list": { word: meaning } }`.
/// An empty name is the "no active list" sentinel and is never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordList {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub list: HashMap<String, String>,
}

impl WordList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            list: HashMap::new(),
        }
    }

    /// Empty list with an empty name, acting as "no active list".
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }

    /// Insert a pair; the last write wins on duplicate words.
    pub fn insert(&mut self, word: impl Into<String>, meaning: impl Into<String>) {
        self.list.insert(word.into(), meaning.into());
    }

    /// Remove a word. Missing keys are ignored.
    pub fn remove(&mut self, word: &str) {
        self.list.remove(word);
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.list.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.list.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Key-wise union: `other`'s values win on conflicting words.
    pub fn absorb(&mut self, other: &WordList) {
        for (word, meaning) in &other.list {
            self.list.insert(word.clone(), meaning.clone());
        }
    }

    /// Snapshot of the words currently in the list.
    pub fn words(&self) -> Vec<String> {
        self.list.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_other_values_win() {
        let mut a = WordList::new("a");
        a.insert("cat", "stale meaning");
        a.insert("dog", "a canine");

        let mut b = WordList::new("b");
        b.insert("cat", "a small feline");

        a.absorb(&b);
        assert_eq!(a.get("cat"), Some("a small feline"));
        assert_eq!(a.get("dog"), Some("a canine"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = WordList::new("a");
        list.insert("cat", "a small feline");
        list.remove("dog");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_serde_shape() {
        let mut list = WordList::new("animals");
        list.insert("cat", "a small feline");

        let json = serde_json::to_string(&list).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "animals");
        assert_eq!(value["list"]["cat"], "a small feline");
    }
}
