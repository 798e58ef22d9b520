//! Configuration loading and merging for the CLI.
//!
//! Settings come from two places: an optional TOML file and the command-line
//! overrides, with the command line taking precedence. The merged result is a
//! core [`ComputeConfig`](acebridge::engine::config::ComputeConfig).

mod builder;
mod file;
mod models;

pub use builder::{DEFAULT_BUFFER_DIR, resolve};
pub use file::load;
pub use models::FileConfig;
