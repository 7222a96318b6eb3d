//! Approximate directory lookup and ranking for PFC registries.
//!
//! This crate provides:
//! - Text normalization (case folding, diacritic stripping, whitespace collapsing)
//! - Levenshtein edit distance
//! - Substring and token based match scoring
//! - Threshold-filtered, stable ranking of directory records
//!
//! # Example
//!
//! ```
//! use pfc_directory::{rank, DirectoryRecord, RankOptions};
//!
//! let records = vec![
//!     DirectoryRecord::new("Scent N Stories", "Saad Afridi").unwrap(),
//!     DirectoryRecord::new("Scentefy", "Saad Ahmed Tamimi").unwrap(),
//! ];
//!
//! let results = rank("scent", &records, &RankOptions::default());
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].primary, "Scent N Stories");
//! ```

mod distance;
mod error;
mod normalize;
mod rank;
mod score;

#[cfg(feature = "wasm")]
mod wasm;

pub use distance::levenshtein;
pub use error::{DirectoryError, Result};
pub use normalize::normalize;
pub use rank::{rank, rank_scored, RankOptions, DEFAULT_MAX_RESULTS, DEFAULT_MAX_SCORE};
pub use score::{rank_score, token_hits, ScoreMode, ScoreWeights, NO_MATCH_SCORE};

/// Placeholder substituted for records without a secondary field, both for
/// display and for comparison (it never matches a real query).
pub const EMPTY_SECONDARY: &str = "—";

/// A single searchable registry entry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DirectoryRecord {
    /// Main searchable label (a house name or a seller's display name)
    pub primary: String,
    /// Auxiliary searchable field (a creative director's name or a
    /// verification code); may be empty
    #[serde(default)]
    pub secondary: String,
    /// Optional classification tag used for pre-filtering the candidate
    /// pool, never for scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl DirectoryRecord {
    /// Creates a new record.
    ///
    /// # Errors
    /// Returns [`DirectoryError::EmptyPrimary`] if the primary label is
    /// empty or whitespace-only.
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Result<Self> {
        let primary = primary.into();
        if primary.trim().is_empty() {
            return Err(DirectoryError::EmptyPrimary);
        }
        Ok(Self {
            primary,
            secondary: secondary.into(),
            category: None,
        })
    }

    /// Attaches a classification tag to the record.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The secondary field as used for display and comparison:
    /// [`EMPTY_SECONDARY`] when the field is empty or whitespace-only.
    pub fn secondary_label(&self) -> &str {
        if self.secondary.trim().is_empty() {
            EMPTY_SECONDARY
        } else {
            &self.secondary
        }
    }
}

/// A matched record with its rank score (lower is better).
///
/// Scores are only meaningful for ordering and threshold comparison within
/// a single ranking call.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScoredMatch<'a> {
    /// The matched record
    pub record: &'a DirectoryRecord,
    /// Rank score (0.0 is a top match)
    pub score: f64,
}

/// Checks the registry invariant: every record has a non-empty primary label.
///
/// # Errors
/// Returns [`DirectoryError::InvalidDirectory`] naming the first offending
/// index.
pub fn validate_records(records: &[DirectoryRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if record.primary.trim().is_empty() {
            return Err(DirectoryError::InvalidDirectory(format!(
                "record {index} has an empty primary label"
            )));
        }
    }
    Ok(())
}

/// Parse a directory from a JSON array of records, checking the registry
/// invariant.
///
/// # Errors
/// Returns [`DirectoryError::Json`] for malformed JSON and
/// [`DirectoryError::InvalidDirectory`] when a record has an empty primary
/// label.
pub fn records_from_json(raw: &str) -> Result<Vec<DirectoryRecord>> {
    let records: Vec<DirectoryRecord> = serde_json::from_str(raw)?;
    validate_records(&records)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = DirectoryRecord::new("Scent N Stories", "Saad Afridi").unwrap();
        assert_eq!(record.primary, "Scent N Stories");
        assert_eq!(record.secondary, "Saad Afridi");
        assert!(record.category.is_none());
    }

    #[test]
    fn test_empty_primary_rejected() {
        assert!(DirectoryRecord::new("", "x").is_err());
        assert!(DirectoryRecord::new("   ", "x").is_err());
    }

    #[test]
    fn test_secondary_label_placeholder() {
        let record = DirectoryRecord::new("Cover Outfit", "").unwrap();
        assert_eq!(record.secondary_label(), EMPTY_SECONDARY);

        let record = DirectoryRecord::new("Dua Fragrances", "  ").unwrap();
        assert_eq!(record.secondary_label(), EMPTY_SECONDARY);
    }

    #[test]
    fn test_with_category() {
        let record = DirectoryRecord::new("Abdul Basit", "AB-TU44")
            .unwrap()
            .with_category("DECANT");
        assert_eq!(record.category.as_deref(), Some("DECANT"));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let record: DirectoryRecord =
            serde_json::from_str(r#"{"primary": "Cover Outfit"}"#).unwrap();
        assert_eq!(record.secondary, "");
        assert!(record.category.is_none());
    }

    #[test]
    fn test_records_from_json() {
        let raw = r#"[
            {"primary": "Abdur Rehman", "secondary": "AR-K1DE", "category": "BNIB"},
            {"primary": "Abdul Basit", "secondary": "AB-TU44", "category": "DECANT"}
        ]"#;
        let records = records_from_json(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category.as_deref(), Some("BNIB"));
    }

    #[test]
    fn test_records_from_json_rejects_malformed_input() {
        assert!(matches!(
            records_from_json("not json"),
            Err(DirectoryError::Json(_))
        ));
        assert!(matches!(
            records_from_json(r#"[{"primary": ""}]"#),
            Err(DirectoryError::InvalidDirectory(_))
        ));
    }

    #[test]
    fn test_validate_records() {
        let records = vec![
            DirectoryRecord::new("Adonis", "Atiq Rajput").unwrap(),
            DirectoryRecord {
                primary: " ".to_string(),
                secondary: String::new(),
                category: None,
            },
        ];
        let err = validate_records(&records).unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }
}
