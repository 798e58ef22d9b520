use crate::core::io::xyz::XyzError;
use crate::core::models::descriptors::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine script not found at '{path}'", path = path.display())]
    ScriptNotFound { path: PathBuf },

    #[error("No structures were provided")]
    EmptyInput,

    #[error("Failed to stage structures into '{path}': {source}", path = path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: XyzError,
    },

    #[error("Buffer directory operation failed at '{path}': {source}", path = path.display())]
    Buffer {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch engine process '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine command {command:?} exited with code {code}\noutput:\n{output}")]
    Failure {
        command: Vec<String>,
        code: i32,
        output: String,
    },

    #[error("Failed to load descriptor archive '{path}': {source}", path = path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },
}
