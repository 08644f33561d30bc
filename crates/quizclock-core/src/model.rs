//! Core data model types for quizclock.
//!
//! A quiz is an ordered [`ProblemSet`] of [`Problem`]s. Both are immutable
//! once loaded; the runner only ever reads them.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Trim surrounding whitespace and lowercase.
///
/// Applied to stored answers at load time and to every line the user
/// submits, so comparison is plain string equality.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A single prompt and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// The question shown to the user (trimmed).
    pub prompt: String,
    /// The expected answer (trimmed, lowercased). May be empty.
    pub answer: String,
}

impl Problem {
    /// Create a problem, normalizing both fields.
    pub fn new(prompt: &str, answer: &str) -> Self {
        Self {
            prompt: prompt.trim().to_string(),
            answer: normalize(answer),
        }
    }

    /// Whether `input` matches the expected answer after normalization.
    pub fn check(&self, input: &str) -> bool {
        self.answer == normalize(input)
    }
}

/// An ordered sequence of problems, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }
}

impl FromIterator<Problem> for ProblemSet {
    fn from_iter<I: IntoIterator<Item = Problem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for ProblemSet {
    type Output = Problem;

    fn index(&self, idx: usize) -> &Problem {
        &self.problems[idx]
    }
}
