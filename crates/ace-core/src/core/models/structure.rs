use nalgebra::{Matrix3, Point3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StructureError {
    #[error("Species count ({species}) does not match position count ({positions})")]
    LengthMismatch { species: usize, positions: usize },
}

/// Represents a single atomic configuration.
///
/// A structure pairs per-atom species labels with 3D positions in Angstroms and
/// optionally carries a periodic cell. Structures are owned by the caller for the
/// duration of a computation; the orchestration layer only serializes them and
/// never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    species: Vec<String>,
    positions: Vec<Point3<f64>>,
    cell: Option<Matrix3<f64>>,
    pbc: [bool; 3],
}

impl Structure {
    /// Creates a new non-periodic structure from species labels and positions.
    ///
    /// # Arguments
    ///
    /// * `species` - One chemical symbol per atom (e.g., "Si", "O").
    /// * `positions` - One 3D coordinate per atom, in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::LengthMismatch`] if the two vectors disagree
    /// in length.
    pub fn new(
        species: Vec<String>,
        positions: Vec<Point3<f64>>,
    ) -> Result<Self, StructureError> {
        if species.len() != positions.len() {
            return Err(StructureError::LengthMismatch {
                species: species.len(),
                positions: positions.len(),
            });
        }
        Ok(Self {
            species,
            positions,
            cell: None,
            pbc: [false; 3],
        })
    }

    /// Attaches a periodic cell. Rows of the matrix are the lattice vectors.
    pub fn with_cell(mut self, cell: Matrix3<f64>, pbc: [bool; 3]) -> Self {
        self.cell = Some(cell);
        self.pbc = pbc;
        self
    }

    /// The number of atoms in the structure.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    pub fn cell(&self) -> Option<&Matrix3<f64>> {
        self.cell.as_ref()
    }

    pub fn pbc(&self) -> [bool; 3] {
        self.pbc
    }
}

/// The input accepted by the descriptor workflow: one structure or a collection.
///
/// This models the original call surface, where a caller may hand over either a
/// single configuration or a trajectory-like list that is staged sequentially
/// into one input file. Anything else is rejected by the type system; an empty
/// collection is rejected at run time before any file I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureSet {
    One(Structure),
    Many(Vec<Structure>),
}

impl StructureSet {
    /// A view of the contained structures in staging order.
    pub fn as_slice(&self) -> &[Structure] {
        match self {
            StructureSet::One(structure) => std::slice::from_ref(structure),
            StructureSet::Many(structures) => structures,
        }
    }

    /// The number of structures that would be staged.
    pub fn len(&self) -> usize {
        match self {
            StructureSet::One(_) => 1,
            StructureSet::Many(structures) => structures.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Structure> for StructureSet {
    fn from(structure: Structure) -> Self {
        StructureSet::One(structure)
    }
}

impl From<Vec<Structure>> for StructureSet {
    fn from(structures: Vec<Structure>) -> Self {
        StructureSet::Many(structures)
    }
}
