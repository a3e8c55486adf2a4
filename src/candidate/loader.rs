use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::types::Candidate;

/// Candidate file schema: a list of candidates under a `candidates` key.
#[derive(Debug, Deserialize)]
struct CandidateFile {
    candidates: Vec<Candidate>,
}

/// Load candidates from a single YAML or JSON file.
///
/// Format is chosen by extension: `.json` parses as JSON, everything else
/// as YAML.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    if !path.exists() {
        anyhow::bail!("Candidate file not found at {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidate file at {}", path.display()))?;

    let file: CandidateFile = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?
    };

    Ok(file.candidates)
}

/// Expand file paths and glob patterns into a concrete file list.
///
/// Literal paths are kept as-is (missing files surface as load errors with
/// the file name); glob patterns must match at least one file.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains(['*', '?', '[']) {
            let matches: Vec<PathBuf> = glob::glob(pattern)
                .with_context(|| format!("Invalid glob pattern '{}'", pattern))?
                .filter_map(|entry| entry.ok())
                .collect();
            if matches.is_empty() {
                anyhow::bail!("No files matched pattern '{}'", pattern);
            }
            paths.extend(matches);
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

/// Load candidates from every file named by `patterns`, in order.
pub fn load_all_candidates(patterns: &[String]) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    for path in expand_inputs(patterns)? {
        candidates.extend(load_candidates(&path)?);
    }
    Ok(candidates)
}
