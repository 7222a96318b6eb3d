//! Registry file loading and hygiene checks.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pfc_directory::{normalize, records_from_json, DirectoryRecord};

/// Load a registry file: a JSON array of records with `primary`,
/// `secondary`, and optional `category` fields. Rejects registries that
/// violate the non-empty-primary invariant.
pub fn load(path: &Path) -> Result<Vec<DirectoryRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read registry file {}", path.display()))?;
    let records = records_from_json(&raw)
        .with_context(|| format!("invalid registry in {}", path.display()))?;

    tracing::debug!(count = records.len(), path = %path.display(), "loaded registry");
    Ok(records)
}

/// Load a registry file without invariant checks, so that [`audit`] can
/// report on malformed entries instead of refusing them.
pub fn load_lenient(path: &Path) -> Result<Vec<DirectoryRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read registry file {}", path.display()))?;
    let records: Vec<DirectoryRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid registry JSON in {}", path.display()))?;
    Ok(records)
}

/// Hygiene findings for a registry.
pub struct AuditReport {
    /// Indices of records with an empty primary label (fatal)
    pub empty_primary: Vec<usize>,
    /// Secondary values shared by more than one record, with their indices.
    /// Suspicious for code registries, harmless for director names.
    pub duplicate_secondary: Vec<(String, Vec<usize>)>,
}

impl AuditReport {
    /// True when the registry satisfies the hard invariants.
    pub fn is_clean(&self) -> bool {
        self.empty_primary.is_empty()
    }
}

/// Audit a registry for malformed entries.
pub fn audit(records: &[DirectoryRecord]) -> AuditReport {
    let empty_primary = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.primary.trim().is_empty())
        .map(|(i, _)| i)
        .collect();

    let mut by_secondary: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        let key = normalize(&record.secondary);
        if !key.is_empty() {
            by_secondary.entry(key).or_default().push(index);
        }
    }
    let duplicate_secondary = by_secondary
        .into_iter()
        .filter(|(_, indices)| indices.len() > 1)
        .collect();

    AuditReport {
        empty_primary,
        duplicate_secondary,
    }
}
