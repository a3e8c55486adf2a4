use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write a result as pretty-printed JSON, atomically.
///
/// The file appears complete or not at all, so a report consumer polling
/// the path never sees a partial document.
pub fn write_json_report<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    file.write_all(b"\n")?;
    file.commit()
        .with_context(|| format!("Failed to commit report to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_write_json_report_roundtrip() {
        let path = std::env::temp_dir().join("siterank_test_report.json");
        let payload = serde_json::json!({"final_score": 69.71, "grade": "B"});

        write_json_report(&path, &payload).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["grade"], "B");
        assert!(content.ends_with('\n'));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_json_report_bad_path() {
        let payload = serde_json::json!({});
        let result = write_json_report(Path::new("/nonexistent/dir/report.json"), &payload);
        assert!(result.is_err());
    }
}
