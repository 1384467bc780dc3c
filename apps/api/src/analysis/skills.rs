//! Insertion-ordered skill → score mapping shared by every pipeline stage.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A skill → score mapping that remembers the order skills were first seen.
///
/// Used for raw counts (non-negative, unbounded) and for normalized scores (0 – 10).
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillScores {
    entries: Vec<(String, f64)>,
}

impl SkillScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the skill's running total, inserting it at the end if unseen.
    pub fn add(&mut self, skill: &str, amount: f64) {
        match self.entries.iter_mut().find(|(name, _)| name == skill) {
            Some((_, score)) => *score += amount,
            None => self.entries.push((skill.to_string(), amount)),
        }
    }

    /// Returns the score for `skill`, or `None` if it was never recorded.
    pub fn get(&self, skill: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, score)| *score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for SkillScores {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut scores = SkillScores::new();
        for (skill, amount) in iter {
            scores.add(skill.as_ref(), amount);
        }
        scores
    }
}

impl Serialize for SkillScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (skill, score) in &self.entries {
            map.serialize_entry(skill, score)?;
        }
        map.end()
    }
}
