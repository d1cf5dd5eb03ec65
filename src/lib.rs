//! # stratum-config
//!
//! Layered configuration registry with priority-ordered sources and isolated
//! snapshot reads.
//!
//! ## Overview
//!
//! `stratum-config` provides a process-wide configuration registry that
//! combines:
//! - A namespaced section/key/value store with lazy section creation
//! - Priority-based merging of programmatic defaults, an optional backing
//!   file, and environment variables on reload
//! - Independent deep copies on every composite read, so callers can never
//!   alias internal state
//! - A single reader/writer lock serializing all operations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stratum_config::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Resolve identity (explicit settings win over the STRATUM_NAME /
//!     // STRATUM_FILEPATH bootstrap variables) and perform the initial load.
//!     let registry = ConfigRegistry::builder()
//!         .with_name("app")
//!         .with_file("config/app.yaml")
//!         .with_default_value("server", "port", 8080i64)
//!         .build()?;
//!
//!     // Namespaced lookups degrade to absence, never errors.
//!     if let Some(port) = registry.get("server", "port") {
//!         println!("port: {}", port.into_int().unwrap_or_default());
//!     }
//!
//!     // Pick up external changes at any time.
//!     registry.reload()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Precedence
//!
//! Sources merge in ascending `Defaults < File < EnvVar` order, with the
//! authoritative kind from the registry's metadata merged last. Environment
//! variables follow the `<NAME>_<SECTION>_<KEY>` convention, e.g.
//! `APP_DB_HOST=remote` feeds `db.host` for the `APP` profile.
//!
//! Direct [`set_value`](core::ConfigRegistry::set_value) writes are not
//! subject to precedence; the last writer wins until the next reload.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ConfigRegistry, Metadata, Priority, RegistryBuilder};
    pub use crate::error::{ConfigError, Result};
    pub use crate::sources::Sections;
}
