use serde::Deserialize;
use std::path::PathBuf;

/// The on-disk configuration file. Every field is optional; anything absent
/// falls back to the CLI arguments or the documented defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub basis: BasisSection,
    #[serde(default)]
    pub buffer: BufferSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EngineSection {
    /// Interpreter program for the engine script.
    pub program: Option<PathBuf>,
    /// Path to the engine script.
    pub script: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BasisSection {
    pub rcut: Option<f64>,
    pub order: Option<u32>,
    pub total_degree: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BufferSection {
    /// Staging directory shared with the engine process.
    pub dir: Option<PathBuf>,
    /// Artifact file name inside the buffer directory.
    pub output_name: Option<String>,
    /// Reload a previously computed artifact instead of recomputing.
    pub reuse: Option<bool>,
}
