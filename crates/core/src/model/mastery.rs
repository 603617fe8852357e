use serde::{Deserialize, Serialize};

/// Topics the user has passed a final quiz for.
///
/// Semantically a set, stored as an ordered list: insertion is
/// append-if-absent so the display order is first-mastered-first. Topic
/// strings are compared exactly; no case or whitespace normalization is
/// applied, so textually different strings are distinct topics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasteryRecord {
    topics: Vec<String>,
}

impl MasteryRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a persisted list, dropping duplicates while keeping the
    /// first occurrence of each topic.
    #[must_use]
    pub fn from_topics(topics: Vec<String>) -> Self {
        let mut record = Self::new();
        for topic in topics {
            record.insert(&topic);
        }
        record
    }

    #[must_use]
    pub fn contains(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Append the topic if absent. Returns true when the record changed.
    pub fn insert(&mut self, topic: &str) -> bool {
        if self.contains(topic) {
            return false;
        }
        self.topics.push(topic.to_string());
        true
    }

    /// Merge a remote list into this one.
    ///
    /// Deterministic tie-break: local entries keep their order, remote-only
    /// entries are appended in the remote document's order. Returns true when
    /// anything was added.
    pub fn union(&mut self, remote: &[String]) -> bool {
        let mut changed = false;
        for topic in remote {
            changed |= self.insert(topic);
        }
        changed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    #[must_use]
    pub fn into_topics(self) -> Vec<String> {
        self.topics
    }
}
