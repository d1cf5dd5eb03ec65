//! Environment variable configuration source.

use super::{ConfigSource, Sections};
use crate::core::Priority;
use crate::error::Result;
use std::env;

/// Environment variable configuration source.
///
/// Enumerates process environment variables matching the
/// `<PREFIX>_<SECTION>_<KEY>` convention: the first `_`-delimited token after
/// the prefix is the section and the remainder is the key, both lowercased.
/// So with prefix `DEMO`, `DEMO_DB_HOST=envval` yields `db.host` and
/// `DEMO_DB_MAX_CONNECTIONS=50` yields `db.max_connections`. Variables with
/// no key part (e.g. `DEMO_VERBOSE`) are ignored, which also keeps the
/// bootstrap variables out of the store.
///
/// Values are try-parsed as booleans, integers, and floats, falling back to
/// plain strings.
///
/// # Examples
///
/// ```rust
/// use stratum_config::sources::EnvSource;
///
/// // DEMO_SERVER_PORT=8080 -> server.port = 8080
/// let source = EnvSource::new("DEMO");
/// ```
pub struct EnvSource {
    prefix: String,
    priority: Priority,
}

impl EnvSource {
    /// Create a new environment variable source for a profile prefix.
    ///
    /// The prefix is upper-cased to match the profile-name convention.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().to_uppercase(),
            priority: Priority::EnvVar,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Parse an environment value the way typed consumers expect: booleans and
/// numbers become typed values, everything else stays a string.
fn parse_scalar(raw: &str) -> config::Value {
    if let Ok(parsed) = raw.parse::<bool>() {
        return parsed.into();
    }
    if let Ok(parsed) = raw.parse::<i64>() {
        return parsed.into();
    }
    if let Ok(parsed) = raw.parse::<f64>() {
        return parsed.into();
    }
    raw.to_string().into()
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<Sections> {
        let marker = format!("{}_", self.prefix);
        let mut sections = Sections::new();

        for (name, value) in env::vars() {
            let Some(rest) = name.strip_prefix(&marker) else {
                continue;
            };
            let Some((section, key)) = rest.split_once('_') else {
                continue;
            };
            if section.is_empty() || key.is_empty() {
                continue;
            }
            sections
                .entry(section.to_lowercase())
                .or_default()
                .insert(key.to_lowercase(), parse_scalar(&value));
        }

        Ok(sections)
    }

    fn name(&self) -> String {
        format!("env:{}_*", self.prefix)
    }

    fn priority(&self) -> Priority {
        self.priority
    }
}
