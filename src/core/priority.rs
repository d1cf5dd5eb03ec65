//! Source priority ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of source a configuration value came from, ordered by precedence.
///
/// The derived `Ord` gives the canonical ascending precedence
/// `Defaults < File < EnvVar`: when two sources produce the same
/// (section, key) during a reload, the value from the higher-ordered source
/// wins. A registry may additionally designate one kind as authoritative via
/// [`Metadata::priority`](crate::core::Metadata); that kind is merged last
/// regardless of its canonical position.
///
/// # Examples
///
/// ```rust
/// use stratum_config::core::Priority;
///
/// assert!(Priority::Defaults < Priority::File);
/// assert!(Priority::File < Priority::EnvVar);
/// assert_eq!(Priority::default(), Priority::EnvVar);
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Programmatic defaults seeded at construction. Lowest precedence.
    Defaults,
    /// The optional backing file.
    File,
    /// Process environment variables. Highest precedence, and the default
    /// authoritative kind.
    #[default]
    EnvVar,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Defaults => "defaults",
            Self::File => "file",
            Self::EnvVar => "envvar",
        };
        f.write_str(label)
    }
}
