//! Configuration file loading for the binary

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use wordle_assist::session::SessionConfig;

/// Read a JSON [`SessionConfig`]; keys left out take their defaults
///
/// The result is not validated here: flags may still override it.
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    log::debug!("loaded config {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_partial_file() {
        let path = std::env::temp_dir()
            .join(format!("wordle_assist_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"strategy": "minimax", "suggestions_count": 3}"#).unwrap();
        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.strategy, "minimax");
        assert_eq!(config.suggestions, 3);
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("/nonexistent/wordle.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wordle.json"));
    }
}
