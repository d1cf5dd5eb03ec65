//! Programmatic defaults source.

use super::{ConfigSource, Sections};
use crate::core::Priority;
use crate::error::Result;

/// In-memory defaults seeded at registry construction.
///
/// Sits at the bottom of the precedence order: any other source that produces
/// the same (section, key) overrides it during a reload.
///
/// # Examples
///
/// ```rust
/// use stratum_config::sources::{DefaultsSource, Sections};
///
/// let mut values = Sections::new();
/// values
///     .entry("server".to_string())
///     .or_default()
///     .insert("port".to_string(), 8080i64.into());
///
/// let source = DefaultsSource::new(values);
/// ```
pub struct DefaultsSource {
    values: Sections,
    priority: Priority,
}

impl DefaultsSource {
    /// Create a defaults source from a section/key/value mapping.
    pub fn new(values: Sections) -> Self {
        Self {
            values,
            priority: Priority::Defaults,
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

impl ConfigSource for DefaultsSource {
    fn load(&self) -> Result<Sections> {
        Ok(self.values.clone())
    }

    fn name(&self) -> String {
        "defaults".to_string()
    }

    fn priority(&self) -> Priority {
        self.priority
    }
}
