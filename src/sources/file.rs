//! File-based configuration source.

use super::{ConfigSource, Sections};
use crate::core::Priority;
use crate::error::{ConfigError, Result};
use config::File;
use std::collections::HashMap;
use std::path::PathBuf;

/// File-based configuration source.
///
/// Loads a YAML, TOML, or JSON file (format detected from the extension) and
/// flattens it into the two-level section/key layout: every top-level entry
/// must be a table whose keys become the section's keys. Deeper nesting is
/// carried opaquely inside the values.
///
/// # Examples
///
/// ```rust,no_run
/// use stratum_config::sources::FileSource;
///
/// let source = FileSource::new("config/app.yaml");
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: Priority,
}

impl FileSource {
    /// Create a new file source with automatic format detection.
    ///
    /// The format is detected from the file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: Priority::File,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Validate that the file extension is supported.
    fn validate_extension(&self) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" | "toml" | "json" => Ok(()),
            _ => Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            ))),
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<Sections> {
        self.validate_extension()?;

        if !self.path.is_file() {
            return Err(ConfigError::FileNotFound(self.path.clone()));
        }

        // The config crate auto-detects the format from the extension.
        let parsed = config::Config::builder()
            .add_source(File::from(self.path.clone()).required(true))
            .build()
            .map_err(|e| ConfigError::LoadError(format!("Failed to load file: {}", e)))?;

        let top = parsed
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse file: {}", e)))?;

        let mut sections = Sections::new();
        for (section, value) in top {
            let table = value.into_table().map_err(|_| {
                ConfigError::ParseError(format!(
                    "Top-level entry '{}' in {} is not a section table",
                    section,
                    self.path.display()
                ))
            })?;
            sections.insert(section, table.into_iter().collect());
        }

        Ok(sections)
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> Priority {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_extension_yaml() {
        let source = FileSource::new("config.yaml");
        assert!(source.validate_extension().is_ok());

        let source = FileSource::new("config.yml");
        assert!(source.validate_extension().is_ok());
    }

    #[test]
    fn test_validate_extension_toml() {
        let source = FileSource::new("config.toml");
        assert!(source.validate_extension().is_ok());
    }

    #[test]
    fn test_validate_extension_json() {
        let source = FileSource::new("config.json");
        assert!(source.validate_extension().is_ok());
    }

    #[test]
    fn test_validate_extension_unknown() {
        let source = FileSource::new("config.txt");
        assert!(source.validate_extension().is_err());
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(
            &config_path,
            r#"
server:
  port: 8080
  host: localhost
"#,
        )
        .unwrap();

        let source = FileSource::new(&config_path);
        let sections = source.load().unwrap();
        assert_eq!(
            sections["server"]["port"].clone().into_int().unwrap(),
            8080
        );
        assert_eq!(
            sections["server"]["host"].clone().into_string().unwrap(),
            "localhost"
        );
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
[db]
host = "localhost"
port = 5432
"#,
        )
        .unwrap();

        let source = FileSource::new(&config_path);
        let sections = source.load().unwrap();
        assert_eq!(sections["db"]["port"].clone().into_int().unwrap(), 5432);
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        fs::write(&config_path, r#"{"cache": {"ttl": 60}}"#).unwrap();

        let source = FileSource::new(&config_path);
        let sections = source.load().unwrap();
        assert_eq!(sections["cache"]["ttl"].clone().into_int().unwrap(), 60);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let source = FileSource::new("/nonexistent/config.yaml");
        let result = source.load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_rejects_top_level_scalar() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(&config_path, "loose_key: 1\n").unwrap();

        let source = FileSource::new(&config_path);
        assert!(matches!(source.load(), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_with_priority() {
        let source = FileSource::new("config.yaml").with_priority(Priority::EnvVar);
        assert_eq!(source.priority(), Priority::EnvVar);
    }

    #[test]
    fn test_name() {
        let source = FileSource::new("config.yaml");
        assert!(source.name().contains("config.yaml"));
    }
}
