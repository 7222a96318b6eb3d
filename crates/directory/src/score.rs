//! Match scoring: substring containment, token overlap, edit distance.
//!
//! The score combines three signals, in priority order: containment of the
//! whole query in a record field (instant top match), whole tokens missing
//! from both fields (0.75 each), and the edit distance between the query
//! and the closest field (weighted down by a third). Lower is better.

use serde::{Deserialize, Serialize};

use crate::{levenshtein, normalize, DirectoryRecord};

/// Sentinel score for queries that can never match (empty after
/// normalization). Effectively positive infinity for threshold purposes.
pub const NO_MATCH_SCORE: f64 = 9999.0;

/// How the secondary field participates in scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreMode {
    /// The secondary field is a weak signal (the person behind the label):
    /// its edit distance is discounted by two points before competing with
    /// the primary field.
    #[default]
    PrimaryWeighted,
    /// The secondary field is a short structured code meant to be looked up
    /// exactly: full edit distance, and containment of the query in the
    /// code is an instant top match.
    ExactSecondary,
}

/// Tunable scoring constants.
///
/// `Default` reproduces the calibration that the result thresholds were
/// chosen against; change these together with the threshold or match
/// quality will drift.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Penalty per query token absent from both fields
    pub missing_token_penalty: f64,
    /// Flat penalty when the query yields no tokens at all
    pub bare_query_penalty: f64,
    /// Edit-distance discount for the secondary field in
    /// [`ScoreMode::PrimaryWeighted`]
    pub secondary_discount: usize,
    /// Divisor weighting the edit-distance term against the token term
    pub edit_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            missing_token_penalty: 0.75,
            bare_query_penalty: 2.0,
            secondary_discount: 2,
            edit_weight: 3.0,
        }
    }
}

/// Count how many query tokens appear as a substring of any haystack.
///
/// # Arguments
/// * `tokens` - Normalized query tokens
/// * `haystacks` - Normalized record fields to search in
///
/// # Returns
/// Total hit count, 0..=tokens.len()
pub fn token_hits(tokens: &[&str], haystacks: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| haystacks.iter().any(|haystack| haystack.contains(*token)))
        .count()
}

/// Score a query against a single record. Lower is better; 0.0 is a top
/// match and [`NO_MATCH_SCORE`] means the query cannot match anything.
///
/// Pure and deterministic for identical inputs. See [`ScoreMode`] for how
/// the secondary field is treated.
pub fn rank_score(
    query: &str,
    record: &DirectoryRecord,
    mode: ScoreMode,
    weights: &ScoreWeights,
) -> f64 {
    let q = normalize(query);
    if q.is_empty() {
        return NO_MATCH_SCORE;
    }

    let primary = normalize(&record.primary);
    let secondary = normalize(record.secondary_label());

    if primary.contains(&q) {
        return 0.0;
    }
    if mode == ScoreMode::ExactSecondary && secondary.contains(&q) {
        return 0.0;
    }

    let tokens: Vec<&str> = q.split_whitespace().collect();
    let hits = token_hits(&tokens, &[primary.as_str(), secondary.as_str()]);
    let token_score = if tokens.is_empty() {
        weights.bare_query_penalty
    } else {
        (tokens.len() - hits) as f64 * weights.missing_token_penalty
    };

    // Only the prefix of query length competes for the primary; the raw
    // slice may end mid-word or in a space, levenshtein re-normalizes it.
    let query_len = q.chars().count();
    let prefix: String = primary.chars().take(query_len).collect();

    let secondary_penalty = match mode {
        ScoreMode::PrimaryWeighted => {
            levenshtein(&q, &secondary).saturating_sub(weights.secondary_discount)
        }
        ScoreMode::ExactSecondary => levenshtein(&q, &secondary),
    };
    let edit_score = levenshtein(&q, &prefix).min(secondary_penalty);

    token_score + edit_score as f64 / weights.edit_weight
}
