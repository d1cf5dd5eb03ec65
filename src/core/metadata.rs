//! Registry identity metadata.

use crate::core::Priority;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity of a configuration registry: which profile it serves, which
/// source kind is authoritative, and where its backing file lives.
///
/// The name doubles as the environment-variable prefix for the registry's
/// [`EnvSource`](crate::sources::EnvSource) and is always stored upper-cased.
/// [`ConfigRegistry::describe`](crate::core::ConfigRegistry::describe) returns
/// an independent clone of this struct, so callers can inspect or serialize
/// it without holding any lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Upper-cased profile name.
    pub name: String,
    /// Authoritative source kind for reload merging.
    pub priority: Priority,
    /// Location of the backing file, when one is configured.
    pub filepath: Option<PathBuf>,
}

impl Metadata {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_uppercase(),
            priority: Priority::default(),
            filepath: None,
        }
    }
}
