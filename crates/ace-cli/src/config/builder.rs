use crate::cli::ComputeArgs;
use crate::config::models::FileConfig;
use crate::error::{CliError, Result};
use acebridge::engine::config::ComputeConfig;
use std::path::PathBuf;

/// Buffer directory used when neither the CLI nor the config file names one.
pub const DEFAULT_BUFFER_DIR: &str = "buffer";

/// Merges the configuration file with CLI overrides into a final
/// [`ComputeConfig`]. CLI arguments win over file values.
pub fn resolve(args: &ComputeArgs, file: FileConfig) -> Result<ComputeConfig> {
    let script = args
        .script
        .clone()
        .or(file.engine.script)
        .ok_or_else(|| {
            CliError::Config(
                "an engine script must be given via --script or the [engine] section".to_string(),
            )
        })?;

    let mut builder = ComputeConfig::builder().script(script).buffer_dir(
        args.buffer_dir
            .clone()
            .or(file.buffer.dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUFFER_DIR)),
    );

    if let Some(program) = args.program.clone().or(file.engine.program) {
        builder = builder.program(program);
    }
    if let Some(rcut) = args.rcut.or(file.basis.rcut) {
        builder = builder.rcut(rcut);
    }
    if let Some(order) = args.order.or(file.basis.order) {
        builder = builder.order(order);
    }
    if let Some(total_degree) = args.total_degree.or(file.basis.total_degree) {
        builder = builder.total_degree(total_degree);
    }
    if let Some(output_name) = args.output_name.clone().or(file.buffer.output_name) {
        builder = builder.output_name(output_name);
    }
    let reuse = args.reuse_buffer || file.buffer.reuse.unwrap_or(false);

    builder
        .reuse(reuse)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
