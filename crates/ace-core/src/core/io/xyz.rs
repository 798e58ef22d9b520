use crate::core::io::traits::StructureFile;
use crate::core::models::structure::Structure;
use nalgebra::{Matrix3, Point3};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: XyzParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Invalid float in field '{field}' (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Atom line must have a species label and three coordinates")]
    IncompleteAtomLine,
    #[error("Lattice entry must contain nine floats")]
    InvalidLattice,
    #[error("File ended in the middle of a frame")]
    UnexpectedEof,
}

/// The extended-XYZ structure file format.
///
/// Each frame is an atom count line, a comment line carrying optional
/// `Lattice="..."` and `pbc="..."` fields, and one `<species> <x> <y> <z>` line
/// per atom. Multiple frames are concatenated, which is how a collection of
/// structures is staged into a single engine input file.
pub struct XyzFile;

fn parse_error(line: usize, kind: XyzParseErrorKind) -> XyzError {
    XyzError::Parse { line, kind }
}

/// Extracts the double-quoted value following `key` in a comment line.
fn quoted_field<'a>(comment: &'a str, key: &str) -> Option<&'a str> {
    let start = comment.find(key)?;
    let rest = &comment[start + key.len()..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_lattice(value: &str, line: usize) -> Result<Matrix3<f64>, XyzError> {
    let mut entries = [0.0f64; 9];
    let mut count = 0;
    for token in value.split_whitespace() {
        if count == 9 {
            return Err(parse_error(line, XyzParseErrorKind::InvalidLattice));
        }
        entries[count] = token
            .parse()
            .map_err(|_| parse_error(line, XyzParseErrorKind::InvalidLattice))?;
        count += 1;
    }
    if count != 9 {
        return Err(parse_error(line, XyzParseErrorKind::InvalidLattice));
    }
    // Rows of the matrix are the lattice vectors, matching the write order.
    Ok(Matrix3::new(
        entries[0], entries[1], entries[2], entries[3], entries[4], entries[5], entries[6],
        entries[7], entries[8],
    ))
}

fn parse_pbc(value: &str) -> [bool; 3] {
    let mut pbc = [true; 3];
    for (axis, token) in value.split_whitespace().take(3).enumerate() {
        pbc[axis] = matches!(token, "T" | "t" | "true" | "True" | "1");
    }
    pbc
}

fn parse_coordinate(
    token: &str,
    field: &'static str,
    line: usize,
) -> Result<f64, XyzError> {
    token.parse().map_err(|_| {
        parse_error(
            line,
            XyzParseErrorKind::InvalidFloat {
                field,
                value: token.to_string(),
            },
        )
    })
}

impl StructureFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Structure>, Self::Error> {
        let mut lines = reader.lines().enumerate();
        let mut structures = Vec::new();

        loop {
            // Skip blank lines between frames; a clean EOF ends the file.
            let (count_line_num, count_line) = loop {
                match lines.next() {
                    Some((index, line)) => {
                        let line = line?;
                        if !line.trim().is_empty() {
                            break (index + 1, line);
                        }
                    }
                    None => return Ok(structures),
                }
            };

            let natoms: usize = count_line.trim().parse().map_err(|_| {
                parse_error(
                    count_line_num,
                    XyzParseErrorKind::InvalidAtomCount {
                        value: count_line.trim().to_string(),
                    },
                )
            })?;

            let comment = match lines.next() {
                Some((_, line)) => line?,
                None => {
                    return Err(parse_error(
                        count_line_num,
                        XyzParseErrorKind::UnexpectedEof,
                    ));
                }
            };

            let cell = match quoted_field(&comment, "Lattice=\"") {
                Some(value) => Some(parse_lattice(value, count_line_num + 1)?),
                None => None,
            };
            let pbc = match (&cell, quoted_field(&comment, "pbc=\"")) {
                (Some(_), Some(value)) => parse_pbc(value),
                (Some(_), None) => [true; 3],
                (None, _) => [false; 3],
            };

            let mut species = Vec::with_capacity(natoms);
            let mut positions = Vec::with_capacity(natoms);
            for _ in 0..natoms {
                let (index, line) = match lines.next() {
                    Some((index, line)) => (index + 1, line?),
                    None => {
                        return Err(parse_error(
                            count_line_num,
                            XyzParseErrorKind::UnexpectedEof,
                        ));
                    }
                };

                let mut fields = line.split_whitespace();
                let (Some(label), Some(x), Some(y), Some(z)) = (
                    fields.next(),
                    fields.next(),
                    fields.next(),
                    fields.next(),
                ) else {
                    return Err(parse_error(index, XyzParseErrorKind::IncompleteAtomLine));
                };

                species.push(label.to_string());
                positions.push(Point3::new(
                    parse_coordinate(x, "x", index)?,
                    parse_coordinate(y, "y", index)?,
                    parse_coordinate(z, "z", index)?,
                ));
            }

            let structure = Structure::new(species, positions)
                .expect("species and positions are collected in lockstep");
            structures.push(match cell {
                Some(cell) => structure.with_cell(cell, pbc),
                None => structure,
            });
        }
    }

    fn write_to(structures: &[Structure], writer: &mut impl Write) -> Result<(), Self::Error> {
        for structure in structures {
            writeln!(writer, "{}", structure.len())?;

            if let Some(cell) = structure.cell() {
                write!(writer, "Lattice=\"")?;
                for row in 0..3 {
                    for col in 0..3 {
                        if row + col > 0 {
                            write!(writer, " ")?;
                        }
                        write!(writer, "{}", cell[(row, col)])?;
                    }
                }
                write!(writer, "\" ")?;
            }
            write!(writer, "Properties=species:S:1:pos:R:3")?;
            if structure.cell().is_some() {
                let pbc = structure.pbc();
                let flag = |on: bool| if on { "T" } else { "F" };
                write!(
                    writer,
                    " pbc=\"{} {} {}\"",
                    flag(pbc[0]),
                    flag(pbc[1]),
                    flag(pbc[2])
                )?;
            }
            writeln!(writer)?;

            for (label, position) in structure.species().iter().zip(structure.positions()) {
                writeln!(
                    writer,
                    "{:<2} {:16.8} {:16.8} {:16.8}",
                    label, position.x, position.y, position.z
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn dimer() -> Structure {
        Structure::new(
            vec!["Si".into(), "Si".into()],
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.35, 0.0, 0.0)],
        )
        .unwrap()
    }

    fn roundtrip(structures: &[Structure]) -> Vec<Structure> {
        let mut buffer = Vec::new();
        XyzFile::write_to(structures, &mut buffer).unwrap();
        XyzFile::read_from(&mut BufReader::new(buffer.as_slice())).unwrap()
    }

    #[test]
    fn single_structure_roundtrips() {
        let frames = roundtrip(&[dimer()]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].species(), &["Si".to_string(), "Si".to_string()]);
        assert_eq!(frames[0].positions()[1], Point3::new(2.35, 0.0, 0.0));
        assert!(frames[0].cell().is_none());
    }

    #[test]
    fn multiple_frames_keep_input_order() {
        let first = dimer();
        let second = Structure::new(vec!["C".into()], vec![Point3::new(1.0, 2.0, 3.0)]).unwrap();

        let frames = roundtrip(&[first.clone(), second.clone()]);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], first);
        assert_eq!(frames[1], second);
    }

    #[test]
    fn lattice_and_pbc_roundtrip() {
        let cell = Matrix3::new(10.0, 0.0, 0.0, 0.0, 12.0, 0.0, 0.0, 0.0, 14.0);
        let structure = dimer().with_cell(cell, [true, true, false]);

        let frames = roundtrip(&[structure]);
        assert_eq!(frames[0].cell(), Some(&cell));
        assert_eq!(frames[0].pbc(), [true, true, false]);
    }

    #[test]
    fn lattice_without_pbc_defaults_to_fully_periodic() {
        let text = "1\nLattice=\"5 0 0 0 5 0 0 0 5\" Properties=species:S:1:pos:R:3\nAr 0.0 0.0 0.0\n";
        let frames = XyzFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap();
        assert_eq!(frames[0].pbc(), [true; 3]);
    }

    #[test]
    fn invalid_atom_count_reports_line() {
        let text = "two\ncomment\n";
        let err = XyzFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidAtomCount { .. }
            }
        ));
    }

    #[test]
    fn truncated_frame_is_an_error() {
        let text = "2\ncomment\nSi 0.0 0.0 0.0\n";
        let err = XyzFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                kind: XyzParseErrorKind::UnexpectedEof,
                ..
            }
        ));
    }

    #[test]
    fn short_atom_line_is_an_error() {
        let text = "1\ncomment\nSi 0.0 0.0\n";
        let err = XyzFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                line: 3,
                kind: XyzParseErrorKind::IncompleteAtomLine
            }
        ));
    }

    #[test]
    fn malformed_lattice_is_an_error() {
        let text = "1\nLattice=\"1 2 3\" Properties=species:S:1:pos:R:3\nAr 0.0 0.0 0.0\n";
        let err = XyzFile::read_from(&mut BufReader::new(text.as_bytes())).unwrap_err();
        assert!(matches!(
            err,
            XyzError::Parse {
                kind: XyzParseErrorKind::InvalidLattice,
                ..
            }
        ));
    }
}
