use super::super::domain::{Category, EligibilityError, Programme};
use super::super::matrix::CutoffTable;
use super::rules::{rank_to_test, within_cutoff};
use serde::{Deserialize, Serialize};

pub const ELIGIBLE_MESSAGE: &str = "You have a chance to get a Government law-college seat.";
pub const NOT_ELIGIBLE_MESSAGE: &str = "No Government seat based on current ranks.";

/// Which rank list a category test used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankSource {
    Overall,
    Category,
}

impl RankSource {
    pub const fn label(self) -> &'static str {
        match self {
            RankSource::Overall => "overall rank",
            RankSource::Category => "category rank",
        }
    }
}

/// The comparison that settled a decision, kept so results can be explained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DecisionBasis {
    GeneralMerit {
        overall_rank: i64,
        cutoff: u32,
    },
    CategoryCutoff {
        category: Category,
        source: RankSource,
        tested_rank: i64,
        cutoff: u32,
    },
}

impl DecisionBasis {
    pub fn summary(&self) -> String {
        match self {
            DecisionBasis::GeneralMerit {
                overall_rank,
                cutoff,
            } => format!("overall rank {overall_rank} within State Merit cutoff {cutoff}"),
            DecisionBasis::CategoryCutoff {
                category,
                source,
                tested_rank,
                cutoff,
            } => format!(
                "{} {} tested against {} cutoff {}",
                source.label(),
                tested_rank,
                category,
                cutoff
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub programme: Programme,
    pub eligible: bool,
    pub basis: DecisionBasis,
}

impl EligibilityDecision {
    pub fn message(&self) -> &'static str {
        if self.eligible {
            ELIGIBLE_MESSAGE
        } else {
            NOT_ELIGIBLE_MESSAGE
        }
    }

    pub fn summary(&self) -> String {
        format!("{} ({})", self.message(), self.basis.summary())
    }
}

/// Applies the short-circuit then the category test. `overall_rank` is already validated.
pub(crate) fn decide(
    table: &CutoffTable,
    category: Category,
    overall_rank: i64,
    category_rank: Option<i64>,
) -> Result<EligibilityDecision, EligibilityError> {
    let programme = table.programme();
    let general_cutoff = table.general_merit_cutoff();

    if within_cutoff(overall_rank, general_cutoff) {
        return Ok(EligibilityDecision {
            programme,
            eligible: true,
            basis: DecisionBasis::GeneralMerit {
                overall_rank,
                cutoff: general_cutoff,
            },
        });
    }

    let (source, tested_rank) = rank_to_test(category, overall_rank, category_rank);
    let cutoff = table
        .cutoff(category)
        .ok_or(EligibilityError::UnknownCategory {
            programme,
            category,
        })?;

    Ok(EligibilityDecision {
        programme,
        eligible: within_cutoff(tested_rank, cutoff),
        basis: DecisionBasis::CategoryCutoff {
            category,
            source,
            tested_rank,
            cutoff,
        },
    })
}
