//! Configuration source trait.

use crate::core::Priority;
use crate::error::Result;
use std::collections::HashMap;

/// Two-level section -> key -> value mapping.
///
/// This is both the registry's store type and the unit of exchange with
/// configuration sources. Values are [`config::Value`], an opaque payload
/// from the registry's perspective; cloning a `Sections` map is a deep copy.
pub type Sections = HashMap<String, HashMap<String, config::Value>>;

/// Trait for configuration sources.
///
/// Implement this trait to feed custom section/key data into a registry's
/// reload merge (e.g. a database, a key-value store).
pub trait ConfigSource: Send + Sync {
    /// Load configuration as a section/key/value mapping.
    ///
    /// The returned map will be merged with other sources according to
    /// priority; a source with nothing to contribute returns an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or parsed.
    fn load(&self) -> Result<Sections>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// Get the source kind used for conflict resolution during merging.
    fn priority(&self) -> Priority;
}
