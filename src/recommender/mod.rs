//! Content-based module recommender
//!
//! Turns a member's skill list and a catalog of learning modules into a ranked,
//! explainable list of suggested next modules. Every call fits a fresh TF-IDF
//! model over the member document plus the candidate documents, so scores are
//! only comparable within a single invocation.
//!
//! The recommender performs no I/O and holds no state between calls.

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod engine;
mod stop_words;
pub mod tfidf;

pub use catalog::assemble;
pub use engine::recommend;

/// Number of recommendations returned when the caller does not ask for more
pub const DEFAULT_TOP_K: usize = 3;

/// Scores at or below this value are treated as noise
pub const RELEVANCE_THRESHOLD: f64 = 0.05;

/// Reason attached to non-personalized suggestions
pub const FALLBACK_REASON: &str = "Popular for beginners";

/// Errors raised while scoring candidates
///
/// These never escape [`recommend`]; they are recovered into an empty result.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("empty vocabulary; documents contain only stop words or nothing at all")]
    EmptyVocabulary,
}

/// Ordered skill names belonging to one member
///
/// Duplicates are allowed and simply weigh heavier in the member document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillProfile(Vec<String>);

impl SkillProfile {
    pub fn new(skills: Vec<String>) -> Self {
        Self(skills)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn skills(&self) -> &[String] {
        &self.0
    }

    /// Space-joined skills, the member's document in the similarity space
    pub fn document(&self) -> String {
        self.0.join(" ")
    }
}

impl<S: Into<String>> FromIterator<S> for SkillProfile {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A learning module eligible for recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCandidate {
    pub title: String,
    pub tags: Vec<String>,
}

impl ModuleCandidate {
    pub fn new(title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            tags,
        }
    }

    /// Tags followed by the title, space-joined
    pub fn document(&self) -> String {
        format!("{} {}", self.tags.join(" "), self.title)
    }
}

/// A single ranked suggestion returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Module title
    pub module: String,
    /// Cosine similarity in [0.0, 1.0]; exactly 0.0 for fallback entries
    pub score: f64,
    pub reason: String,
}

impl Recommendation {
    pub(crate) fn matched(module: &str, score: f64) -> Self {
        // Truncated, not rounded: 0.429 reads as 42%.
        let percent = (score * 100.0) as u32;
        Self {
            module: module.to_string(),
            score,
            reason: format!("Matches your skills ({}% match)", percent),
        }
    }

    pub(crate) fn fallback(module: &str) -> Self {
        Self {
            module: module.to_string(),
            score: 0.0,
            reason: FALLBACK_REASON.to_string(),
        }
    }
}
