//! Core registry types.

mod builder;
mod loader;
mod metadata;
mod priority;
mod registry;

pub use builder::{RegistryBuilder, STRATUM_FILEPATH_VAR, STRATUM_NAME_VAR};
pub use loader::ConfigLoader;
pub use metadata::Metadata;
pub use priority::Priority;
pub use registry::ConfigRegistry;
