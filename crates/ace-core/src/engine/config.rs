use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ENGINE_PROGRAM: &str = "julia";
pub const DEFAULT_OUTPUT_NAME: &str = "ace.npz";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Parameters of the ACE basis handed to the engine script.
///
/// These are forwarded verbatim, in textual form, as the trailing positional
/// arguments of the engine command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisParams {
    /// Cutoff radius of the atomic environment in Angstroms.
    pub rcut: f64,
    /// Correlation order of the expansion.
    pub order: u32,
    /// Total polynomial degree of the basis.
    pub total_degree: u32,
}

impl Default for BasisParams {
    fn default() -> Self {
        Self {
            rcut: 5.5,
            order: 3,
            total_degree: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// The program that interprets the engine script.
    pub program: PathBuf,
    /// Path to the engine script itself.
    pub script: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BufferConfig {
    /// The staging directory shared with the engine process.
    pub dir: PathBuf,
    /// File name of the descriptor archive inside the buffer directory.
    pub output_name: String,
    /// Reload a previously produced archive instead of recomputing.
    pub reuse: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputeConfig {
    pub engine: EngineConfig,
    pub basis: BasisParams,
    pub buffer: BufferConfig,
}

impl ComputeConfig {
    pub fn builder() -> ComputeConfigBuilder {
        ComputeConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ComputeConfigBuilder {
    program: Option<PathBuf>,
    script: Option<PathBuf>,
    rcut: Option<f64>,
    order: Option<u32>,
    total_degree: Option<u32>,
    buffer_dir: Option<PathBuf>,
    output_name: Option<String>,
    reuse: Option<bool>,
}

impl ComputeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn program(mut self, program: PathBuf) -> Self {
        self.program = Some(program);
        self
    }
    pub fn script(mut self, script: PathBuf) -> Self {
        self.script = Some(script);
        self
    }
    pub fn rcut(mut self, rcut: f64) -> Self {
        self.rcut = Some(rcut);
        self
    }
    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }
    pub fn total_degree(mut self, total_degree: u32) -> Self {
        self.total_degree = Some(total_degree);
        self
    }
    pub fn buffer_dir(mut self, dir: PathBuf) -> Self {
        self.buffer_dir = Some(dir);
        self
    }
    pub fn output_name(mut self, name: String) -> Self {
        self.output_name = Some(name);
        self
    }
    pub fn reuse(mut self, reuse: bool) -> Self {
        self.reuse = Some(reuse);
        self
    }

    /// Builds the final configuration, filling documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingParameter`] if the engine script or the
    /// buffer directory was not provided; everything else has a default.
    pub fn build(self) -> Result<ComputeConfig, ConfigError> {
        let defaults = BasisParams::default();
        let engine = EngineConfig {
            program: self
                .program
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ENGINE_PROGRAM)),
            script: self.script.ok_or(ConfigError::MissingParameter("script"))?,
        };
        let basis = BasisParams {
            rcut: self.rcut.unwrap_or(defaults.rcut),
            order: self.order.unwrap_or(defaults.order),
            total_degree: self.total_degree.unwrap_or(defaults.total_degree),
        };
        let buffer = BufferConfig {
            dir: self
                .buffer_dir
                .ok_or(ConfigError::MissingParameter("buffer_dir"))?,
            output_name: self
                .output_name
                .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string()),
            reuse: self.reuse.unwrap_or(false),
        };
        Ok(ComputeConfig {
            engine,
            basis,
            buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fills_documented_defaults() {
        let config = ComputeConfig::builder()
            .script(PathBuf::from("ace_io_script.jl"))
            .buffer_dir(PathBuf::from("buffer"))
            .build()
            .unwrap();

        assert_eq!(config.engine.program, PathBuf::from("julia"));
        assert_eq!(config.basis.rcut, 5.5);
        assert_eq!(config.basis.order, 3);
        assert_eq!(config.basis.total_degree, 8);
        assert_eq!(config.buffer.output_name, "ace.npz");
        assert!(!config.buffer.reuse);
    }

    #[test]
    fn build_requires_the_engine_script() {
        let result = ComputeConfig::builder()
            .buffer_dir(PathBuf::from("buffer"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("script")
        );
    }

    #[test]
    fn build_requires_the_buffer_directory() {
        let result = ComputeConfig::builder()
            .script(PathBuf::from("ace_io_script.jl"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingParameter("buffer_dir")
        );
    }

    #[test]
    fn build_applies_every_override() {
        let config = ComputeConfig::builder()
            .program(PathBuf::from("/opt/julia/bin/julia"))
            .script(PathBuf::from("compute.jl"))
            .rcut(6.0)
            .order(4)
            .total_degree(10)
            .buffer_dir(PathBuf::from("/tmp/staging"))
            .output_name("run.npz".to_string())
            .reuse(true)
            .build()
            .unwrap();

        assert_eq!(config.engine.program, PathBuf::from("/opt/julia/bin/julia"));
        assert_eq!(config.basis.rcut, 6.0);
        assert_eq!(config.basis.order, 4);
        assert_eq!(config.basis.total_degree, 10);
        assert_eq!(config.buffer.dir, PathBuf::from("/tmp/staging"));
        assert_eq!(config.buffer.output_name, "run.npz");
        assert!(config.buffer.reuse);
    }
}
