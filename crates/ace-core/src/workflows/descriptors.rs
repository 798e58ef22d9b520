use crate::core::models::descriptors::Descriptors;
use crate::core::models::structure::StructureSet;
use crate::engine::buffer::BufferDir;
use crate::engine::config::ComputeConfig;
use crate::engine::error::EngineError;
use crate::engine::invoker::ExternalEngine;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

/// Computes ACE descriptors for the given structures via the external engine.
///
/// The pipeline stages the structures into the buffer directory, runs the
/// engine script over the staged file, and loads the resulting archive from
/// the deterministic output path. With `reuse` set in the configuration, a
/// previously produced archive is reloaded instead and no subprocess is
/// launched; a reload miss yields `Ok(None)` rather than an error or an
/// automatic recomputation, so callers must branch on the result.
/// (The sentinel is a deliberate carry-over of the original call surface and
/// may become an automatic recompute in a later revision.)
///
/// # Errors
///
/// Fails with [`EngineError::EmptyInput`] for an empty collection (before any
/// file I/O), [`EngineError::ScriptNotFound`] for a misconfigured engine
/// (before any subprocess launch), and staging, launch, engine-failure, or
/// artifact errors from the pipeline itself.
#[instrument(skip_all, name = "descriptor_workflow")]
pub fn run(
    structures: &StructureSet,
    config: &ComputeConfig,
    reporter: &ProgressReporter,
) -> Result<Option<Descriptors>, EngineError> {
    if structures.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let buffer = BufferDir::new(&config.buffer.dir);

    if config.buffer.reuse {
        reporter.report(Progress::PhaseStart { name: "Reload" });
        let cached = buffer.try_reload(&config.buffer.output_name)?;
        reporter.report(Progress::PhaseFinish);
        match &cached {
            Some(descriptors) => info!(
                "Reloaded {} cached descriptor array(s) from the buffer.",
                descriptors.len()
            ),
            None => info!("No cached archive to reload; returning the not-found sentinel."),
        }
        return Ok(cached);
    }

    let engine = ExternalEngine::from_config(&config.engine);
    engine.validate()?;

    reporter.report(Progress::PhaseStart { name: "Staging" });
    let input_path = buffer.prepare(structures, false)?;
    reporter.report(Progress::PhaseFinish);

    let output_path = buffer.artifact_path(&config.buffer.output_name);

    reporter.report(Progress::PhaseStart { name: "Engine" });
    info!(
        "Running the descriptor engine over {} structure(s).",
        structures.len()
    );
    engine.run(&input_path, &output_path, &config.basis)?;
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Load" });
    let descriptors = Descriptors::load(&output_path).map_err(|source| EngineError::Artifact {
        path: output_path.clone(),
        source,
    })?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Workflow complete. Returning {} descriptor array(s).",
        descriptors.len()
    );
    Ok(Some(descriptors))
}
