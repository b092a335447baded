use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::domain::PostPair;

pub const EXPORT_FILENAME: &str = "postData.json";

#[derive(Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The collection was empty; no file was produced.
    Empty,
    Written(PathBuf),
}

/// Writes the full pair collection as pretty-printed JSON into the export
/// directory. A previous export is overwritten.
pub fn export_pairs(pairs: &[PostPair], export_dir: &Path) -> Result<ExportOutcome> {
    if pairs.is_empty() {
        return Ok(ExportOutcome::Empty);
    }

    let path = export_dir.join(EXPORT_FILENAME);
    let blob = serde_json::to_string_pretty(pairs).context("failed to encode post pairs")?;
    fs::write(&path, blob).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(target: "store", path = %path.display(), count = pairs.len(), "post pairs exported");
    Ok(ExportOutcome::Written(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_collection_produces_no_file() {
        let dir = TempDir::new().unwrap();
        let outcome = export_pairs(&[], dir.path()).unwrap();
        assert_eq!(outcome, ExportOutcome::Empty);
        assert!(!dir.path().join(EXPORT_FILENAME).exists());
    }

    #[test]
    fn export_round_trips_through_json() {
        let dir = TempDir::new().unwrap();
        let pairs = vec![
            PostPair {
                id: "id-1-1".to_string(),
                original: "first draft".to_string(),
                revised: "second draft".to_string(),
            },
            PostPair {
                id: "id-2-2".to_string(),
                original: "a".to_string(),
                revised: "b".to_string(),
            },
        ];

        let outcome = export_pairs(&pairs, dir.path()).unwrap();
        let ExportOutcome::Written(path) = outcome else {
            panic!("expected a written export");
        };

        let decoded: Vec<PostPair> =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(decoded, pairs);
    }
}
