//! Builder for constructing ConfigRegistry instances.

use crate::core::{ConfigRegistry, Metadata, Priority};
use crate::error::{ConfigError, Result};
use crate::sources::Sections;
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Bootstrap environment variable supplying the default profile name.
pub const STRATUM_NAME_VAR: &str = "STRATUM_NAME";

/// Bootstrap environment variable supplying the default backing-file path.
pub const STRATUM_FILEPATH_VAR: &str = "STRATUM_FILEPATH";

/// Fixed fallback profile name when nothing else is configured.
pub(crate) const DEFAULT_NAME: &str = "STRATUM";

/// Builder for constructing a [`ConfigRegistry`].
///
/// This is the application-wiring entry point: it resolves the profile
/// identity (explicit setting, then bootstrap environment variable, then
/// fixed default), validates the backing-file path, seeds programmatic
/// defaults, and performs the initial [`ConfigRegistry::reload`].
///
/// # Examples
///
/// ```rust,no_run
/// use stratum_config::prelude::*;
///
/// # fn example() -> Result<()> {
/// let registry = ConfigRegistry::builder()
///     .with_name("app")
///     .with_priority(Priority::EnvVar)
///     .with_file("config/app.yaml")
///     .with_default_value("server", "port", 8080i64)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct RegistryBuilder {
    name: Option<String>,
    priority: Option<Priority>,
    filepath: Option<PathBuf>,
    defaults: Sections,
}

impl RegistryBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            name: None,
            priority: None,
            filepath: None,
            defaults: Sections::new(),
        }
    }

    /// Set the profile name explicitly instead of resolving it from
    /// [`STRATUM_NAME_VAR`]. Stored upper-cased.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the authoritative source kind for reload merging.
    ///
    /// Defaults to [`Priority::EnvVar`].
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the backing-file path explicitly instead of resolving it from
    /// [`STRATUM_FILEPATH_VAR`].
    ///
    /// Existence is validated in [`RegistryBuilder::build`].
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.filepath = Some(path.into());
        self
    }

    /// Seed a programmatic default at (section, key).
    ///
    /// Defaults sit at the bottom of the precedence order; any other source
    /// producing the same entry overrides them on reload.
    pub fn with_default_value(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<config::Value>,
    ) -> Self {
        self.defaults
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Build the registry.
    ///
    /// Resolves identity (explicit settings, then the bootstrap environment
    /// variables, then fixed defaults), validates the backing-file path if
    /// one ended up configured, and performs the initial reload.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if a non-empty filepath does
    /// not refer to an existing regular file, or any error from the initial
    /// [`ConfigRegistry::reload`].
    pub fn build(self) -> Result<ConfigRegistry> {
        let name = self
            .name
            .or_else(|| env::var(STRATUM_NAME_VAR).ok())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let filepath = self
            .filepath
            .or_else(|| env::var(STRATUM_FILEPATH_VAR).ok().map(PathBuf::from))
            .filter(|p| !p.as_os_str().is_empty());

        if let Some(path) = &filepath {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
        }

        let mut metadata = Metadata::new(name);
        metadata.priority = self.priority.unwrap_or_default();
        metadata.filepath = filepath;

        debug!(
            profile = %metadata.name,
            priority = %metadata.priority,
            filepath = ?metadata.filepath,
            "registry initialized"
        );

        let registry = ConfigRegistry::with_parts(metadata, self.defaults);
        registry.reload()?;
        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
