use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Degree programme offered under the government quota. Each owns its own cutoff table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Programme {
    #[serde(rename = "3yr")]
    ThreeYear,
    #[serde(rename = "5yr")]
    FiveYear,
}

impl Programme {
    pub const ALL: [Programme; 2] = [Programme::ThreeYear, Programme::FiveYear];

    pub const fn code(self) -> &'static str {
        match self {
            Programme::ThreeYear => "3yr",
            Programme::FiveYear => "5yr",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Programme::ThreeYear => "Three-Year LL.B",
            Programme::FiveYear => "Five-Year Integrated LL.B",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Programme::ThreeYear => "three_year",
            Programme::FiveYear => "five_year",
        }
    }
}

impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Programme {
    type Err = EligibilityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(raw);
        Programme::ALL
            .into_iter()
            .find(|programme| {
                [programme.code(), programme.label(), programme.slug()]
                    .iter()
                    .any(|candidate| normalize_key(candidate) == wanted)
            })
            .ok_or_else(|| EligibilityError::invalid(InputField::Programme, unrecognized(raw)))
    }
}

/// Reservation category. Variant order is the order categories are offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StateMerit,
    Sc,
    St,
    Ezhava,
    Muslim,
    Obh,
    LcAi,
    Dheevara,
    Viswakarma,
    Kusavan,
    Obx,
    Kudumbi,
    Pd,
    Ews,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::StateMerit,
        Category::Sc,
        Category::St,
        Category::Ezhava,
        Category::Muslim,
        Category::Obh,
        Category::LcAi,
        Category::Dheevara,
        Category::Viswakarma,
        Category::Kusavan,
        Category::Obx,
        Category::Kudumbi,
        Category::Pd,
        Category::Ews,
    ];

    /// Label as printed on the published seat matrix.
    pub const fn label(self) -> &'static str {
        match self {
            Category::StateMerit => "State Merit",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Ezhava => "Ezhava (EZ)",
            Category::Muslim => "Muslim (MU)",
            Category::Obh => "OBH",
            Category::LcAi => "LC/AI",
            Category::Dheevara => "Dheevara",
            Category::Viswakarma => "Viswakarma",
            Category::Kusavan => "Kusavan",
            Category::Obx => "OBX",
            Category::Kudumbi => "Kudumbi",
            Category::Pd => "PD",
            Category::Ews => "EWS",
        }
    }

    /// Abbreviations printed in the published label, e.g. "EZ" for Ezhava.
    pub const fn abbreviation(self) -> Option<&'static str> {
        match self {
            Category::Ezhava => Some("EZ"),
            Category::Muslim => Some("MU"),
            _ => None,
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Category::StateMerit => "state_merit",
            Category::Sc => "sc",
            Category::St => "st",
            Category::Ezhava => "ezhava",
            Category::Muslim => "muslim",
            Category::Obh => "obh",
            Category::LcAi => "lc_ai",
            Category::Dheevara => "dheevara",
            Category::Viswakarma => "viswakarma",
            Category::Kusavan => "kusavan",
            Category::Obx => "obx",
            Category::Kudumbi => "kudumbi",
            Category::Pd => "pd",
            Category::Ews => "ews",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = EligibilityError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(raw);
        Category::ALL
            .into_iter()
            .find(|category| {
                [category.label(), category.slug()]
                    .into_iter()
                    .chain(category.abbreviation())
                    .any(|candidate| normalize_key(candidate) == wanted)
            })
            .ok_or_else(|| EligibilityError::invalid(InputField::Category, unrecognized(raw)))
    }
}

/// One submission from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityQuery {
    pub programme: Programme,
    pub category: Category,
    #[serde(default)]
    pub overall_rank: Option<i64>,
    #[serde(default)]
    pub category_rank: Option<i64>,
}

/// Form fields that can be rejected as invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Programme,
    Category,
    OverallRank,
    CategoryRank,
}

impl InputField {
    pub const fn label(self) -> &'static str {
        match self {
            InputField::Programme => "programme",
            InputField::Category => "category",
            InputField::OverallRank => "overall rank",
            InputField::CategoryRank => "category rank",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons an evaluation withholds a decision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: InputField, reason: String },
    #[error("no cutoff published for category {category} in programme {programme}")]
    UnknownCategory {
        programme: Programme,
        category: Category,
    },
}

impl EligibilityError {
    pub(crate) fn invalid(field: InputField, reason: impl Into<String>) -> Self {
        EligibilityError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EligibilityError::InvalidInput { .. })
    }
}

/// Parse a rank typed into a form. Blank means the field was left empty.
pub fn parse_rank_field(field: InputField, raw: &str) -> Result<Option<i64>, EligibilityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| EligibilityError::invalid(field, format!("'{trimmed}' is not a whole number")))
}

fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn unrecognized(raw: &str) -> String {
    format!("'{}' is not recognized", raw.trim())
}
