use crate::cli::ComputeArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use acebridge::core::io::{traits::StructureFile, xyz::XyzFile};
use acebridge::core::models::structure::StructureSet;
use acebridge::engine::progress::ProgressReporter;
use acebridge::workflows;
use tracing::{info, warn};

pub fn run(args: ComputeArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => config::load(path)?,
        None => Default::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = config::resolve(&args, file_config)?;

    info!("Loading input structures from {:?}", &args.input);
    let structures =
        XyzFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;
    println!(
        "Computing ACE descriptors for {} structure(s)...",
        structures.len()
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the descriptor workflow...");
    let result =
        workflows::descriptors::run(&StructureSet::from(structures), &final_config, &reporter)?;

    match result {
        Some(descriptors) => {
            let artifact = final_config
                .buffer
                .dir
                .join(&final_config.buffer.output_name);
            println!(
                "Loaded {} descriptor array(s) from '{}':",
                descriptors.len(),
                artifact.display()
            );
            for (name, array) in descriptors.iter() {
                println!("  {:<24} shape {:?}", name, array.shape());
            }
        }
        None => {
            warn!("Reload requested but the buffer holds no cached archive.");
            println!(
                "No cached descriptor archive named '{}' in '{}'; \
                 run again without --reuse-buffer to compute one.",
                final_config.buffer.output_name,
                final_config.buffer.dir.display()
            );
        }
    }

    Ok(())
}
