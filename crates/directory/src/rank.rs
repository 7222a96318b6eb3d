//! Threshold-filtered, stable ranking over a record collection.

use serde::{Deserialize, Serialize};

use crate::score::{rank_score, ScoreMode, ScoreWeights};
use crate::{normalize, DirectoryRecord, ScoredMatch};

/// Default score threshold: records must score strictly below this to be
/// returned. Calibrated so near-miss typos surface while unrelated records
/// stay out.
pub const DEFAULT_MAX_SCORE: f64 = 6.5;

/// Default result cap applied after sorting.
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// Per-call ranking configuration.
///
/// Threshold and cap are caller-supplied; the observed registries use
/// `(6.5, 30)` for houses and `(6.5, 25)` for sellers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankOptions {
    /// Secondary-field scoring behavior
    pub mode: ScoreMode,
    /// Records must score strictly below this value to be returned
    pub max_score: f64,
    /// Maximum number of records returned
    pub max_results: usize,
    /// When set, only records carrying this category tag are scored
    pub category: Option<String>,
    /// Scoring constants
    pub weights: ScoreWeights,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            mode: ScoreMode::default(),
            max_score: DEFAULT_MAX_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
            category: None,
            weights: ScoreWeights::default(),
        }
    }
}

/// Rank a directory against a query.
///
/// Returns references to the matching records, best first. An empty or
/// whitespace-only query returns no matches, never the full directory.
/// Equal scores keep their directory order, so repeated calls on unchanged
/// data yield identical output.
pub fn rank<'a>(
    query: &str,
    records: &'a [DirectoryRecord],
    options: &RankOptions,
) -> Vec<&'a DirectoryRecord> {
    rank_scored(query, records, options)
        .into_iter()
        .map(|m| m.record)
        .collect()
}

/// Like [`rank`], but keeps each record's score attached.
pub fn rank_scored<'a>(
    query: &str,
    records: &'a [DirectoryRecord],
    options: &RankOptions,
) -> Vec<ScoredMatch<'a>> {
    if normalize(query).is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ScoredMatch<'a>> = records
        .iter()
        .filter(|record| match &options.category {
            Some(category) => record.category.as_deref() == Some(category.as_str()),
            None => true,
        })
        .map(|record| ScoredMatch {
            record,
            score: rank_score(query, record, options.mode, &options.weights),
        })
        .filter(|m| m.score < options.max_score)
        .collect();

    // Stable sort: equal scores keep their directory order. Scores are
    // finite here (the 9999 sentinel never passes the threshold).
    matches.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(options.max_results);
    matches
}
