use ndarray::ArrayD;
use ndarray_npy::{NpzReader, ReadNpzError};
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid descriptor archive: {0}")]
    Archive(#[from] ReadNpzError),
}

/// A set of descriptor arrays produced by the engine.
///
/// The engine writes its result as an NPZ archive (a zip of named NumPy arrays).
/// This type loads the archive wholesale into memory and hands the arrays back
/// by name; it does not interpret shapes or naming conventions, which belong
/// to the engine script and its consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Descriptors {
    arrays: BTreeMap<String, ArrayD<f64>>,
}

impl Descriptors {
    /// Loads every array from the NPZ archive at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a readable
    /// archive of `f64` arrays.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DescriptorError> {
        let file = File::open(path)?;
        let mut npz = NpzReader::new(file)?;

        let mut arrays = BTreeMap::new();
        for entry in npz.names()? {
            let array: ArrayD<f64> = npz.by_name(&entry)?;
            let name = entry
                .strip_suffix(".npy")
                .unwrap_or(entry.as_str())
                .to_string();
            arrays.insert(name, array);
        }
        Ok(Self { arrays })
    }

    pub fn get(&self, name: &str) -> Option<&ArrayD<f64>> {
        self.arrays.get(name)
    }

    /// Iterates over the arrays in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArrayD<f64>)> {
        self.arrays.iter().map(|(name, array)| (name.as_str(), array))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    /// The number of named arrays in the set.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};
    use ndarray_npy::NpzWriter;

    fn write_archive(path: &Path) {
        let mut npz = NpzWriter::new(File::create(path).unwrap());
        npz.add_array("energies", &Array1::from(vec![1.0, 2.0, 3.0]))
            .unwrap();
        npz.add_array(
            "descriptors",
            &Array2::from_shape_vec((2, 2), vec![0.1, 0.2, 0.3, 0.4]).unwrap(),
        )
        .unwrap();
        npz.finish().unwrap();
    }

    #[test]
    fn load_reads_all_named_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ace.npz");
        write_archive(&path);

        let descriptors = Descriptors::load(&path).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(
            descriptors.names().collect::<Vec<_>>(),
            vec!["descriptors", "energies"]
        );

        let energies = descriptors.get("energies").unwrap();
        assert_eq!(energies.shape(), &[3]);
        assert_eq!(energies[[1]], 2.0);

        let values = descriptors.get("descriptors").unwrap();
        assert_eq!(values.shape(), &[2, 2]);
        assert_eq!(values[[1, 0]], 0.3);
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Descriptors::load(dir.path().join("absent.npz"));
        assert!(matches!(result, Err(DescriptorError::Io(_))));
    }

    #[test]
    fn load_fails_for_non_archive_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.npz");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let result = Descriptors::load(&path);
        assert!(matches!(result, Err(DescriptorError::Archive(_))));
    }
}
