//! Last-admitted-rank cutoffs per programme and reservation category.
//!
//! A [`SeatMatrix`] is built once at startup and shared read-only for the lifetime of the
//! process. Every [`CutoffTable`] is guaranteed to carry a general-merit entry.

mod import;

pub use import::{MatrixImportError, SeatMatrixImporter};

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use super::domain::{Category, Programme};
use super::evaluation::rules::GENERAL_MERIT;

/// Category to last-admitted-rank mapping for a single programme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoffTable {
    programme: Programme,
    general_merit: u32,
    entries: BTreeMap<Category, u32>,
}

impl CutoffTable {
    pub fn new<I>(programme: Programme, entries: I) -> Result<Self, CutoffTableError>
    where
        I: IntoIterator<Item = (Category, u32)>,
    {
        let mut table = BTreeMap::new();
        for (category, cutoff) in entries {
            if cutoff == 0 {
                return Err(CutoffTableError::NonPositiveCutoff {
                    programme,
                    category,
                });
            }
            if table.insert(category, cutoff).is_some() {
                return Err(CutoffTableError::DuplicateEntry {
                    programme,
                    category,
                });
            }
        }

        let general_merit = *table
            .get(&GENERAL_MERIT)
            .ok_or(CutoffTableError::MissingGeneralMerit { programme })?;

        Ok(Self {
            programme,
            general_merit,
            entries: table,
        })
    }

    pub fn programme(&self) -> Programme {
        self.programme
    }

    /// Universal admission threshold, applied whatever category was chosen.
    pub fn general_merit_cutoff(&self) -> u32 {
        self.general_merit
    }

    pub fn cutoff(&self, category: Category) -> Option<u32> {
        self.entries.get(&category).copied()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.entries.iter().map(|(category, cutoff)| (*category, *cutoff))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every programme's cutoff table for one admission cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatMatrix {
    cycle: String,
    tables: BTreeMap<Programme, CutoffTable>,
}

static BUILTIN: OnceLock<Arc<SeatMatrix>> = OnceLock::new();

const CAP_2025_THREE_YEAR: [(Category, u32); 14] = [
    (Category::StateMerit, 251),
    (Category::Sc, 38),
    (Category::St, 8),
    (Category::Ezhava, 76),
    (Category::Muslim, 60),
    (Category::Obh, 20),
    (Category::LcAi, 19),
    (Category::Dheevara, 11),
    (Category::Viswakarma, 11),
    (Category::Kusavan, 4),
    (Category::Obx, 4),
    (Category::Kudumbi, 4),
    (Category::Pd, 23),
    (Category::Ews, 46),
];

const CAP_2025_FIVE_YEAR: [(Category, u32); 14] = [
    (Category::StateMerit, 194),
    (Category::Sc, 29),
    (Category::St, 6),
    (Category::Ezhava, 54),
    (Category::Muslim, 68),
    (Category::Obh, 18),
    (Category::LcAi, 17),
    (Category::Dheevara, 8),
    (Category::Viswakarma, 10),
    (Category::Kusavan, 3),
    (Category::Obx, 3),
    (Category::Kudumbi, 3),
    (Category::Pd, 18),
    (Category::Ews, 36),
];

impl SeatMatrix {
    pub fn new<I>(cycle: impl Into<String>, tables: I) -> Result<Self, CutoffTableError>
    where
        I: IntoIterator<Item = CutoffTable>,
    {
        let mut by_programme = BTreeMap::new();
        for table in tables {
            let programme = table.programme();
            if by_programme.insert(programme, table).is_some() {
                return Err(CutoffTableError::DuplicateProgramme { programme });
            }
        }

        if by_programme.is_empty() {
            return Err(CutoffTableError::NoProgrammes);
        }

        Ok(Self {
            cycle: cycle.into(),
            tables: by_programme,
        })
    }

    /// The CAP 2025 government-quota matrix, constructed on first use.
    pub fn builtin() -> Arc<SeatMatrix> {
        BUILTIN
            .get_or_init(|| {
                Arc::new(Self::cap_2025().expect("built-in seat matrix is well formed"))
            })
            .clone()
    }

    pub fn cap_2025() -> Result<Self, CutoffTableError> {
        Self::new(
            "CAP 2025",
            [
                CutoffTable::new(Programme::ThreeYear, CAP_2025_THREE_YEAR)?,
                CutoffTable::new(Programme::FiveYear, CAP_2025_FIVE_YEAR)?,
            ],
        )
    }

    pub fn cycle(&self) -> &str {
        &self.cycle
    }

    pub fn table(&self, programme: Programme) -> Option<&CutoffTable> {
        self.tables.get(&programme)
    }

    pub fn programmes(&self) -> impl Iterator<Item = Programme> + '_ {
        self.tables.keys().copied()
    }

    pub fn tables(&self) -> impl Iterator<Item = &CutoffTable> + '_ {
        self.tables.values()
    }

    pub fn cutoff(&self, programme: Programme, category: Category) -> Option<u32> {
        self.table(programme)?.cutoff(category)
    }

    /// Serializable listing used by selection widgets and the programmes endpoint.
    pub fn listing(&self) -> Vec<ProgrammeListing> {
        self.tables
            .values()
            .map(|table| ProgrammeListing {
                programme: table.programme(),
                label: table.programme().label(),
                general_merit_cutoff: table.general_merit_cutoff(),
                categories: table
                    .entries()
                    .map(|(category, cutoff)| CategoryListing {
                        category,
                        label: category.label(),
                        last_admitted_rank: cutoff,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Write the matrix in the same sheet layout the importer reads.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["programme", "category", "last_admitted_rank"])?;
        for table in self.tables.values() {
            for (category, cutoff) in table.entries() {
                let cutoff = cutoff.to_string();
                csv_writer.write_record([
                    table.programme().code(),
                    category.label(),
                    cutoff.as_str(),
                ])?;
            }
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgrammeListing {
    pub programme: Programme,
    pub label: &'static str,
    pub general_merit_cutoff: u32,
    pub categories: Vec<CategoryListing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub label: &'static str,
    pub last_admitted_rank: u32,
}

/// Structural problems that make a cutoff table unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CutoffTableError {
    #[error("cutoff table for {programme} has no {} entry", GENERAL_MERIT.label())]
    MissingGeneralMerit { programme: Programme },
    #[error("cutoff for {category} in {programme} must be a positive rank")]
    NonPositiveCutoff {
        programme: Programme,
        category: Category,
    },
    #[error("{category} is listed more than once for {programme}")]
    DuplicateEntry {
        programme: Programme,
        category: Category,
    },
    #[error("programme {programme} has more than one cutoff table")]
    DuplicateProgramme { programme: Programme },
    #[error("seat matrix lists no programmes")]
    NoProgrammes,
}
