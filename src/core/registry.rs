//! The configuration registry: identity metadata plus the resolved store.

use crate::core::builder::DEFAULT_NAME;
use crate::core::{ConfigLoader, Metadata, Priority, RegistryBuilder};
use crate::error::{ConfigError, Result};
use crate::sources::{DefaultsSource, EnvSource, FileSource, Sections};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Process-wide configuration registry.
///
/// Owns the profile [`Metadata`] and the resolved section/key/value store
/// behind a single reader/writer lock, so concurrent callers always observe
/// a consistent snapshot and never a partially merged store mid-reload.
///
/// One instance per process is the intended usage: construct it in your
/// startup routine via [`ConfigRegistry::builder`] and hand out references,
/// rather than reaching for a global.
///
/// # Examples
///
/// ```rust,no_run
/// use stratum_config::prelude::*;
///
/// # fn example() -> Result<()> {
/// let registry = ConfigRegistry::builder()
///     .with_name("app")
///     .with_file("config/app.yaml")
///     .build()?;
///
/// registry.set_value("db", "host", "localhost");
/// if let Some(host) = registry.get("db", "host") {
///     println!("db host: {}", host.into_string().unwrap_or_default());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConfigRegistry {
    inner: RwLock<Inner>,
}

struct Inner {
    metadata: Metadata,
    defaults: Sections,
    store: Sections,
}

impl ConfigRegistry {
    /// Create an empty registry with default identity.
    ///
    /// The name falls back to the fixed default, the priority to
    /// [`Priority::default`], and no backing file or store contents are set.
    /// No reload is performed; prefer [`ConfigRegistry::builder`] for normal
    /// application wiring.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                metadata: Metadata::new(DEFAULT_NAME),
                defaults: Sections::new(),
                store: Sections::new(),
            }),
        }
    }

    /// Create a new builder for constructing a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn with_parts(metadata: Metadata, defaults: Sections) -> Self {
        Self {
            inner: RwLock::new(Inner {
                metadata,
                defaults,
                store: Sections::new(),
            }),
        }
    }

    /// Re-derive the store's contents from the configured sources.
    ///
    /// Asks each configured source for its section/key data (programmatic
    /// defaults if seeded, the backing file if a filepath is set, environment
    /// variables for the profile name) and merges the results: for any
    /// (section, key) produced by more than one source, the value from the
    /// source whose priority is highest wins, with the authoritative kind
    /// from [`Metadata::priority`] merged last.
    ///
    /// Safe to call at any time, e.g. after the file on disk has changed.
    /// Idempotent given unchanged external sources.
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to load or parse; the previous
    /// store contents are preserved in that case.
    pub fn reload(&self) -> Result<()> {
        let mut inner = self.inner.write();

        let mut loader = ConfigLoader::new();
        if !inner.defaults.is_empty() {
            loader.add_source(Box::new(DefaultsSource::new(inner.defaults.clone())));
        }
        if let Some(path) = &inner.metadata.filepath {
            loader.add_source(Box::new(FileSource::new(path)));
        }
        loader.add_source(Box::new(EnvSource::new(&inner.metadata.name)));

        let authoritative = inner.metadata.priority;
        debug!(
            profile = %inner.metadata.name,
            sources = ?loader.source_names(authoritative),
            %authoritative,
            "reloading configuration"
        );

        let merged = loader.load(authoritative)?;
        info!(
            profile = %inner.metadata.name,
            sections = merged.len(),
            "configuration reloaded"
        );
        inner.store = merged;
        Ok(())
    }

    /// Return an independent snapshot of the registry's metadata.
    pub fn describe(&self) -> Metadata {
        self.inner.read().metadata.clone()
    }

    /// Set the backing-file path.
    ///
    /// An empty path clears the filepath. Does not reload; call
    /// [`ConfigRegistry::reload`] to apply the new source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if a non-empty path does not
    /// refer to an existing regular file; the previous filepath is kept.
    pub fn set_filepath(&self, filepath: impl Into<PathBuf>) -> Result<()> {
        let filepath = filepath.into();
        if filepath.as_os_str().is_empty() {
            self.clear_filepath();
            return Ok(());
        }
        if !filepath.is_file() {
            return Err(ConfigError::FileNotFound(filepath));
        }
        debug!(filepath = %filepath.display(), "backing file configured");
        self.inner.write().metadata.filepath = Some(filepath);
        Ok(())
    }

    /// Clear the backing-file path. Does not reload.
    pub fn clear_filepath(&self) {
        self.inner.write().metadata.filepath = None;
    }

    /// Get the current backing-file path, if any.
    pub fn get_filepath(&self) -> Option<PathBuf> {
        self.inner.read().metadata.filepath.clone()
    }

    /// Set the profile name. Stored upper-cased; no further validation.
    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.write().metadata.name = name.into().to_uppercase();
    }

    /// Get the current profile name.
    pub fn get_name(&self) -> String {
        self.inner.read().metadata.name.clone()
    }

    /// Set the authoritative source kind. Does not itself reload.
    pub fn set_priority(&self, priority: Priority) {
        self.inner.write().metadata.priority = priority;
    }

    /// Get the current authoritative source kind.
    pub fn get_priority(&self) -> Priority {
        self.inner.read().metadata.priority
    }

    /// Insert or overwrite a value at (section, key).
    ///
    /// The section is created lazily on first use. Overwrites silently; the
    /// last writer wins regardless of priority, which governs only the
    /// [`ConfigRegistry::reload`] merge.
    pub fn set_value(
        &self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<config::Value>,
    ) {
        self.inner
            .write()
            .store
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Remove a key from a section.
    ///
    /// Removing the last key of a section removes the section itself. A
    /// missing section or key is a silent no-op.
    pub fn unset_value(&self, section: &str, key: &str) {
        let mut inner = self.inner.write();
        if let Some(keys) = inner.store.get_mut(section) {
            keys.remove(key);
            if keys.is_empty() {
                inner.store.remove(section);
            }
        }
    }

    /// Look up the value at (section, key).
    ///
    /// Returns an independent clone of the value, or `None` if either the
    /// section or the key is absent. Absence is never an error.
    pub fn get(&self, section: &str, key: &str) -> Option<config::Value> {
        self.inner
            .read()
            .store
            .get(section)
            .and_then(|keys| keys.get(key))
            .cloned()
    }

    /// Return an independent copy of a section's key/value mapping.
    ///
    /// A missing section yields an empty map, never an error. Mutating the
    /// returned map has no effect on the registry.
    pub fn get_section(&self, section: &str) -> HashMap<String, config::Value> {
        self.inner
            .read()
            .store
            .get(section)
            .cloned()
            .unwrap_or_default()
    }

    /// Return an independent copy of the entire store.
    ///
    /// Mutating the returned map has no effect on the registry.
    pub fn get_all(&self) -> Sections {
        self.inner.read().store.clone()
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
