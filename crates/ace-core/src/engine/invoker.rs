use crate::engine::config::{BasisParams, EngineConfig};
use crate::engine::error::EngineError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, instrument};

/// The external process that performs the actual descriptor computation.
///
/// The engine is a script run by an interpreter program (`julia` by default).
/// Invocation is synchronous and blocking: one subprocess per call, waited on
/// unconditionally, with no timeout and no cancellation point. The call is
/// all-or-nothing: either the artifact was written at the requested output
/// path, or the error carries the full failure diagnostics.
#[derive(Debug, Clone)]
pub struct ExternalEngine {
    program: PathBuf,
    script: PathBuf,
}

impl ExternalEngine {
    pub fn new(program: PathBuf, script: PathBuf) -> Self {
        Self { program, script }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.program.clone(), config.script.clone())
    }

    /// Checks that the engine script exists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ScriptNotFound`] when it does not. This runs
    /// before any staging or subprocess launch so a misconfigured setup fails
    /// without side effects.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.script.is_file() {
            Ok(())
        } else {
            Err(EngineError::ScriptNotFound {
                path: self.script.clone(),
            })
        }
    }

    /// Runs the engine over a staged input file.
    ///
    /// Blocks until the subprocess exits and returns its captured output
    /// (stdout followed by stderr) on success. The artifact is expected to
    /// exist at `output` afterwards, written entirely by the engine.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Launch`] when the process cannot be spawned, and
    /// [`EngineError::Failure`] with the exact command line, exit code, and
    /// full captured output on a non-zero exit.
    #[instrument(skip_all, fields(script = %self.script.display()))]
    pub fn run(
        &self,
        input: &Path,
        output: &Path,
        basis: &BasisParams,
    ) -> Result<String, EngineError> {
        self.validate()?;

        let command = self.command_line(input, output, basis);
        debug!("Executing engine command: {:?}", command);

        let result = Command::new(&command[0])
            .args(&command[1..])
            .output()
            .map_err(|source| EngineError::Launch {
                program: command[0].clone(),
                source,
            })?;

        let mut captured = String::from_utf8_lossy(&result.stdout).into_owned();
        if !result.stderr.is_empty() {
            captured.push_str(&String::from_utf8_lossy(&result.stderr));
        }

        if !result.status.success() {
            // A signal termination has no code; keep one message shape.
            return Err(EngineError::Failure {
                command,
                code: result.status.code().unwrap_or(-1),
                output: captured,
            });
        }

        if !captured.trim().is_empty() {
            debug!("Engine output:\n{}", captured.trim_end());
        }
        Ok(captured)
    }

    /// The positional argument protocol of the engine script:
    /// `<script> <input> <output> <rcut> <order> <totaldegree>`.
    fn command_line(&self, input: &Path, output: &Path, basis: &BasisParams) -> Vec<String> {
        vec![
            self.program.to_string_lossy().into_owned(),
            self.script.to_string_lossy().into_owned(),
            input.to_string_lossy().into_owned(),
            output.to_string_lossy().into_owned(),
            basis.rcut.to_string(),
            basis.order.to_string(),
            basis.total_degree.to_string(),
        ]
    }
}
