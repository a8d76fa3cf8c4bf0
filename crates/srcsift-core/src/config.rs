//! Configuration for tools built on srcsift.

use serde::{Deserialize, Serialize};

use crate::classify::{SourceFileClassifier, GO_SUFFIX};
use crate::exclude::ExclusionSet;

/// Scan-support configuration: which entries count as source files, and which
/// directories a tree walk should skip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory names (or relative segments) to exclude from scans.
    pub exclude_dirs: Vec<String>,

    /// Suffix identifying source files.
    pub source_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_dirs: vec![
                "vendor".to_string(),
                "testdata".to_string(),
                ".git".to_string(),
            ],
            source_suffix: GO_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &std::path::Path) -> crate::Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Compile the configured exclusion list into a rule set.
    pub fn compile_exclusions(&self) -> crate::Result<ExclusionSet> {
        ExclusionSet::compile(&self.exclude_dirs)
    }

    /// Build a classifier for the configured source suffix.
    pub fn classifier(&self) -> SourceFileClassifier {
        SourceFileClassifier::new(self.source_suffix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_suffix, ".go");
        assert!(config.exclude_dirs.contains(&"vendor".to_string()));
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.exclude_dirs = vec!["generated".to_string()];
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.exclude_dirs, vec!["generated".to_string()]);
        assert_eq!(loaded.source_suffix, ".go");
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "exclude_dirs = not-a-list").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_bridges_to_components() {
        let config = Config::default();

        let exclusions = config.compile_exclusions().unwrap();
        assert_eq!(exclusions.len(), config.exclude_dirs.len());
        assert!(exclusions.is_excluded("/project/vendor/dep"));

        let classifier = config.classifier();
        assert_eq!(classifier.suffix(), ".go");
    }
}
