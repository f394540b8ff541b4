//! Dependency label vocabulary.
//!
//! Maps label strings to dense `DeprelId`s in insertion order. The ids are
//! shared with the scoring model's output layer, so a vocabulary is built
//! once and then treated as read-only.

use indexmap::IndexSet;

use crate::DeprelId;

/// Insertion-ordered label set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprelVocab {
    labels: IndexSet<String>,
}

impl DeprelVocab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a label, returning its id.
    /// If the label is already present, returns the existing id.
    pub fn intern(&mut self, label: &str) -> DeprelId {
        if let Some(id) = self.get(label) {
            return id;
        }
        let (index, _) = self.labels.insert_full(label.to_owned());
        index as DeprelId
    }

    /// Look up a label without inserting it.
    #[inline]
    pub fn get(&self, label: &str) -> Option<DeprelId> {
        self.labels.get_index_of(label).map(|i| i as DeprelId)
    }

    /// Resolve an id back to its label.
    ///
    /// # Panics
    /// Panics if the id was not issued by this vocabulary.
    #[inline]
    pub fn resolve(&self, id: DeprelId) -> &str {
        self.try_resolve(id).unwrap_or_else(|| {
            panic!(
                "DeprelVocab: label id {id} out of range (vocabulary has {} labels)",
                self.labels.len()
            )
        })
    }

    #[inline]
    pub fn try_resolve(&self, id: DeprelId) -> Option<&str> {
        self.labels.get_index(id as usize).map(|s| s.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over labels with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (DeprelId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, s)| (i as DeprelId, s.as_str()))
    }
}

impl<S: AsRef<str>> FromIterator<S> for DeprelVocab {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vocab = Self::new();
        for label in iter {
            vocab.intern(label.as_ref());
        }
        vocab
    }
}
