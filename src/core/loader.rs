//! Configuration loader that merges multiple sources.

use crate::core::Priority;
use crate::error::{ConfigError, Result};
use crate::sources::{ConfigSource, Sections};

/// Loads and merges section/key data from multiple sources.
///
/// Sources are merged in ascending canonical priority order
/// (`Defaults < File < EnvVar`), except that the authoritative kind is merged
/// last. Later merges overwrite per (section, key), so for any entry produced
/// by more than one source the authoritative source wins and the canonical
/// order decides among the rest.
pub struct ConfigLoader {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a configuration source.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    fn merge_order(&self, authoritative: Priority) -> Vec<&dyn ConfigSource> {
        let mut ordered: Vec<&dyn ConfigSource> =
            self.sources.iter().map(|s| s.as_ref()).collect();
        ordered.sort_by_key(|s| (s.priority() == authoritative, s.priority()));
        ordered
    }

    /// Load all sources and merge their sections.
    ///
    /// A loader with no sources yields an empty map; unconfigured sources
    /// simply contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to load; nothing is merged in
    /// that case.
    pub fn load(&self, authoritative: Priority) -> Result<Sections> {
        let mut merged = Sections::new();

        for source in self.merge_order(authoritative) {
            let sections = source.load().map_err(|e| {
                ConfigError::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;

            for (section, keys) in sections {
                merged.entry(section).or_default().extend(keys);
            }
        }

        Ok(merged)
    }

    /// Get the list of source names in merge order.
    pub fn source_names(&self, authoritative: Priority) -> Vec<String> {
        self.merge_order(authoritative)
            .iter()
            .map(|s| s.name())
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ConfigSource;

    struct MockSource {
        name: String,
        priority: Priority,
        values: Sections,
    }

    impl MockSource {
        fn new(name: &str, priority: Priority) -> Self {
            Self {
                name: name.to_string(),
                priority,
                values: Sections::new(),
            }
        }

        fn with_value(mut self, section: &str, key: &str, value: impl Into<config::Value>) -> Self {
            self.values
                .entry(section.to_string())
                .or_default()
                .insert(key.to_string(), value.into());
            self
        }
    }

    impl ConfigSource for MockSource {
        fn load(&self) -> Result<Sections> {
            Ok(self.values.clone())
        }

        fn name(&self) -> String {
            self.name.clone()
        }

        fn priority(&self) -> Priority {
            self.priority
        }
    }

    struct FailingSource;

    impl ConfigSource for FailingSource {
        fn load(&self) -> Result<Sections> {
            Err(ConfigError::LoadError("boom".to_string()))
        }

        fn name(&self) -> String {
            "failing".to_string()
        }

        fn priority(&self) -> Priority {
            Priority::File
        }
    }

    #[test]
    fn test_empty_loader_yields_empty_store() {
        let loader = ConfigLoader::new();
        let merged = loader.load(Priority::default()).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_single_source() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("defaults", Priority::Defaults)
                .with_value("server", "port", 8080i64)
                .with_value("server", "host", "localhost"),
        ));

        let merged = loader.load(Priority::default()).unwrap();
        assert_eq!(
            merged["server"]["port"].clone().into_int().unwrap(),
            8080
        );
        assert_eq!(
            merged["server"]["host"].clone().into_string().unwrap(),
            "localhost"
        );
    }

    #[test]
    fn test_canonical_precedence() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("env", Priority::EnvVar).with_value("db", "host", "envval"),
        ));
        loader.add_source(Box::new(
            MockSource::new("file", Priority::File)
                .with_value("db", "host", "fileval")
                .with_value("db", "port", 5432i64),
        ));
        loader.add_source(Box::new(
            MockSource::new("defaults", Priority::Defaults).with_value("db", "host", "defval"),
        ));

        let merged = loader.load(Priority::EnvVar).unwrap();
        assert_eq!(
            merged["db"]["host"].clone().into_string().unwrap(),
            "envval"
        );
        // Non-conflicting keys survive from lower-priority sources.
        assert_eq!(merged["db"]["port"].clone().into_int().unwrap(), 5432);
    }

    #[test]
    fn test_authoritative_kind_merges_last() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("env", Priority::EnvVar).with_value("db", "host", "envval"),
        ));
        loader.add_source(Box::new(
            MockSource::new("file", Priority::File).with_value("db", "host", "fileval"),
        ));

        let merged = loader.load(Priority::File).unwrap();
        assert_eq!(
            merged["db"]["host"].clone().into_string().unwrap(),
            "fileval"
        );
    }

    #[test]
    fn test_sections_merge_across_sources() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("defaults", Priority::Defaults).with_value("db", "host", "localhost"),
        ));
        loader.add_source(Box::new(
            MockSource::new("env", Priority::EnvVar).with_value("db", "port", 5432i64),
        ));

        let merged = loader.load(Priority::default()).unwrap();
        assert_eq!(merged["db"].len(), 2);
    }

    #[test]
    fn test_failing_source_aborts_merge() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(
            MockSource::new("defaults", Priority::Defaults).with_value("db", "host", "localhost"),
        ));
        loader.add_source(Box::new(FailingSource));

        let result = loader.load(Priority::default());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("failing"));
    }

    #[test]
    fn test_source_names_in_merge_order() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::new("env", Priority::EnvVar)));
        loader.add_source(Box::new(MockSource::new("defaults", Priority::Defaults)));
        loader.add_source(Box::new(MockSource::new("file", Priority::File)));

        let names = loader.source_names(Priority::EnvVar);
        assert_eq!(names, vec!["defaults", "file", "env"]);

        let names = loader.source_names(Priority::File);
        assert_eq!(names, vec!["defaults", "env", "file"]);
    }
}
