//! WASM bindings for directory search.

use wasm_bindgen::prelude::*;

use crate::{DirectoryRecord, RankOptions, ScoreMode, ScoreWeights};

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein(a, b)
}

/// Score a query against a single record (lower is better, 0 is a top
/// match).
///
/// # Arguments
/// * `query` - Search query
/// * `primary` - Record's main label
/// * `secondary` - Record's auxiliary field (empty string if absent)
/// * `exact_secondary` - Treat the secondary field as a code to be matched
///   exactly instead of a discounted name
#[wasm_bindgen]
pub fn match_score(query: &str, primary: &str, secondary: &str, exact_secondary: bool) -> f64 {
    let record = DirectoryRecord {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        category: None,
    };
    crate::rank_score(query, &record, mode_for(exact_secondary), &ScoreWeights::default())
}

/// Rank directory records against a query and return the ordered matches
/// as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `records_json` - JSON array of records with `primary`, `secondary`,
///   and optional `category` fields
/// * `exact_secondary` - Secondary-field scoring behavior (see
///   [`match_score`])
/// * `max_score` - Records must score strictly below this to be returned
/// * `max_results` - Maximum number of records returned
///
/// # Returns
/// JSON array of records in best-first order; `"[]"` on malformed input.
#[wasm_bindgen]
pub fn rank_directory(
    query: &str,
    records_json: &str,
    exact_secondary: bool,
    max_score: f64,
    max_results: usize,
) -> String {
    let records = match crate::records_from_json(records_json) {
        Ok(records) => records,
        Err(_) => return "[]".to_string(),
    };

    let options = RankOptions {
        mode: mode_for(exact_secondary),
        max_score,
        max_results,
        ..RankOptions::default()
    };

    let ranked = crate::rank(query, &records, &options);
    serde_json::to_string(&ranked).unwrap_or_else(|_| "[]".to_string())
}

fn mode_for(exact_secondary: bool) -> ScoreMode {
    if exact_secondary {
        ScoreMode::ExactSecondary
    } else {
        ScoreMode::PrimaryWeighted
    }
}
