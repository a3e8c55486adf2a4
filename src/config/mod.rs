mod init;
mod schema;

pub use init::write_default_config;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/siterank/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("siterank")
}

/// Get the default config file path (~/.config/siterank/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// A missing file is not an error when no explicit path was given: the
/// built-in defaults apply. An explicit `--config` path must exist.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let config = load_config(Some(PathBuf::from("/nonexistent/config.yaml")));
        assert!(config.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join("siterank_test_config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"weights:\n  land_price: 50\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.weights.unwrap()["land_price"], 50.0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let path = std::env::temp_dir().join("siterank_test_bad_config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"weights: [not a map").unwrap();

        let result = load_config(Some(path.clone()));
        assert!(result.is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_config_dir_under_home() {
        let dir = get_config_dir();
        assert!(dir.ends_with(".config/siterank"));
    }
}
