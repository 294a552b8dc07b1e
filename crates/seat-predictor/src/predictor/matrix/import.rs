use super::{CutoffTable, CutoffTableError, SeatMatrix};
use crate::predictor::domain::{Category, Programme};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum MatrixImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownProgramme { line: u64, value: String },
    UnknownCategory { line: u64, value: String },
    InvalidCutoff { line: u64, value: String },
    Table(CutoffTableError),
}

impl std::fmt::Display for MatrixImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixImportError::Io(err) => write!(f, "failed to read seat matrix: {}", err),
            MatrixImportError::Csv(err) => write!(f, "invalid seat matrix CSV data: {}", err),
            MatrixImportError::UnknownProgramme { line, value } => {
                write!(f, "line {line}: unknown programme '{value}'")
            }
            MatrixImportError::UnknownCategory { line, value } => {
                write!(f, "line {line}: unknown category '{value}'")
            }
            MatrixImportError::InvalidCutoff { line, value } => write!(
                f,
                "line {line}: last admitted rank '{value}' is not a positive whole number"
            ),
            MatrixImportError::Table(err) => write!(f, "inconsistent seat matrix: {}", err),
        }
    }
}

impl std::error::Error for MatrixImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatrixImportError::Io(err) => Some(err),
            MatrixImportError::Csv(err) => Some(err),
            MatrixImportError::Table(err) => Some(err),
            MatrixImportError::UnknownProgramme { .. }
            | MatrixImportError::UnknownCategory { .. }
            | MatrixImportError::InvalidCutoff { .. } => None,
        }
    }
}

impl From<std::io::Error> for MatrixImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for MatrixImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<CutoffTableError> for MatrixImportError {
    fn from(err: CutoffTableError) -> Self {
        Self::Table(err)
    }
}

/// Loads a published seat matrix sheet (`programme,category,last_admitted_rank`).
pub struct SeatMatrixImporter;

impl SeatMatrixImporter {
    /// The file stem becomes the cycle label, e.g. `cap-2026.csv` -> `cap-2026`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SeatMatrix, MatrixImportError> {
        let path = path.as_ref();
        let cycle = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imported".to_string());
        let file = std::fs::File::open(path)?;
        let matrix = Self::from_reader(file, cycle)?;
        info!(path = %path.display(), cycle = matrix.cycle(), "loaded seat matrix");
        Ok(matrix)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        cycle: impl Into<String>,
    ) -> Result<SeatMatrix, MatrixImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut grouped: BTreeMap<Programme, Vec<(Category, u32)>> = BTreeMap::new();

        for record in csv_reader.records() {
            let record = record?;
            // file line where the record starts
            let line = record.position().map_or(0, |position| position.line());
            let row = record.deserialize::<SeatRow>(Some(&headers))?;
            let programme = row
                .programme
                .parse::<Programme>()
                .map_err(|_| MatrixImportError::UnknownProgramme {
                    line,
                    value: row.programme.clone(),
                })?;
            let category = row
                .category
                .parse::<Category>()
                .map_err(|_| MatrixImportError::UnknownCategory {
                    line,
                    value: row.category.clone(),
                })?;
            let cutoff = parse_cutoff(&row.last_admitted_rank).ok_or_else(|| {
                MatrixImportError::InvalidCutoff {
                    line,
                    value: row.last_admitted_rank.clone(),
                }
            })?;

            grouped.entry(programme).or_default().push((category, cutoff));
        }

        let tables = grouped
            .into_iter()
            .map(|(programme, entries)| CutoffTable::new(programme, entries))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeatMatrix::new(cycle, tables)?)
    }
}

#[derive(Debug, Deserialize)]
struct SeatRow {
    programme: String,
    category: String,
    last_admitted_rank: String,
}

fn parse_cutoff(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|cutoff| *cutoff > 0)
}
