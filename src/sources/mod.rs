//! Configuration source implementations.

mod config_source;
mod defaults;
mod env;
mod file;

pub use config_source::{ConfigSource, Sections};
pub use defaults::DefaultsSource;
pub use env::EnvSource;
pub use file::FileSource;
