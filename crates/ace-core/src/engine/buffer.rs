use crate::core::io::traits::StructureFile;
use crate::core::io::xyz::XyzFile;
use crate::core::models::descriptors::Descriptors;
use crate::core::models::structure::StructureSet;
use crate::engine::error::EngineError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name under which structures are staged for the engine.
pub const INPUT_FILE_NAME: &str = "atoms_buffer.xyz";

/// The staging directory shared between this process and the engine.
///
/// The directory is created lazily on first use. Each non-reuse invocation
/// deletes every regular file inside it, so callers must not store unrelated
/// files there. The input path and artifact paths are deterministic functions
/// of the directory root; there is no collision handling beyond the clearing
/// semantics, and no locking, so correctness is only guaranteed for a single
/// in-flight invocation per directory.
#[derive(Debug, Clone)]
pub struct BufferDir {
    root: PathBuf,
}

impl BufferDir {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The deterministic path structures are staged to.
    pub fn input_path(&self) -> PathBuf {
        self.root.join(INPUT_FILE_NAME)
    }

    /// The deterministic path of the artifact named `name`.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Stages the given structures into the buffer directory.
    ///
    /// Ensures the directory exists, clears prior contents unless `reuse` is
    /// set, and writes the structures as sequential frames of one input file.
    /// The write ends with an explicit flush and sync so the engine process is
    /// guaranteed to observe a complete file.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::EmptyInput`] before any file I/O when there is
    /// nothing to stage, and with staging or buffer errors otherwise.
    pub fn prepare(
        &self,
        structures: &StructureSet,
        reuse: bool,
    ) -> Result<PathBuf, EngineError> {
        if structures.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        fs::create_dir_all(&self.root).map_err(|source| EngineError::Buffer {
            path: self.root.clone(),
            source,
        })?;
        if !reuse {
            self.clear()?;
        }

        let path = self.input_path();
        debug!(
            "Staging {} structure(s) into '{}'.",
            structures.len(),
            path.display()
        );

        let file = File::create(&path).map_err(|source| EngineError::Buffer {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(&file);
        XyzFile::write_to(structures.as_slice(), &mut writer).map_err(|source| {
            EngineError::Staging {
                path: path.clone(),
                source,
            }
        })?;
        writer
            .flush()
            .and_then(|_| file.sync_all())
            .map_err(|source| EngineError::Buffer {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Attempts to load a previously produced artifact by name.
    ///
    /// Returns `Ok(None)` when no artifact of that name exists; the miss is
    /// logged rather than propagated. An artifact that exists but cannot be
    /// read is an error.
    pub fn try_reload(&self, name: &str) -> Result<Option<Descriptors>, EngineError> {
        let path = self.artifact_path(name);
        if !path.is_file() {
            warn!(
                "No cached descriptor archive at '{}'; nothing to reload.",
                path.display()
            );
            return Ok(None);
        }
        Descriptors::load(&path)
            .map(Some)
            .map_err(|source| EngineError::Artifact { path, source })
    }

    /// Removes every regular file in the buffer directory.
    fn clear(&self) -> Result<(), EngineError> {
        let into_buffer_error = |source| EngineError::Buffer {
            path: self.root.clone(),
            source,
        };

        for entry in fs::read_dir(&self.root).map_err(into_buffer_error)? {
            let entry = entry.map_err(into_buffer_error)?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).map_err(|source| EngineError::Buffer { path, source })?;
            }
        }
        Ok(())
    }
}
