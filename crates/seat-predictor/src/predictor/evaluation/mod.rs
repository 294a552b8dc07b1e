mod policy;
pub mod rules;

pub use policy::{
    DecisionBasis, EligibilityDecision, RankSource, ELIGIBLE_MESSAGE, NOT_ELIGIBLE_MESSAGE,
};

use super::domain::{Category, EligibilityError, EligibilityQuery, InputField, Programme};
use super::matrix::SeatMatrix;
use policy::decide;
use std::sync::Arc;
use tracing::{debug, warn};

/// Stateless evaluator over a shared, read-only seat matrix.
#[derive(Debug, Clone)]
pub struct EligibilityEvaluator {
    matrix: Arc<SeatMatrix>,
}

impl EligibilityEvaluator {
    pub fn new(matrix: Arc<SeatMatrix>) -> Self {
        Self { matrix }
    }

    /// Evaluator over the built-in CAP 2025 matrix.
    pub fn builtin() -> Self {
        Self::new(SeatMatrix::builtin())
    }

    pub fn matrix(&self) -> &SeatMatrix {
        &self.matrix
    }

    /// Decide whether the ranks could secure a government seat.
    ///
    /// Rejects a missing or non-positive overall rank and a programme without a cutoff
    /// table with [`EligibilityError::InvalidInput`] before any lookup. A category absent
    /// from the programme's table is [`EligibilityError::UnknownCategory`], unless the
    /// overall rank already clears the general-merit cutoff.
    pub fn evaluate(
        &self,
        programme: Programme,
        category: Category,
        overall_rank: Option<i64>,
        category_rank: Option<i64>,
    ) -> Result<EligibilityDecision, EligibilityError> {
        let overall_rank = validate_overall_rank(overall_rank)?;
        let table = self.matrix.table(programme).ok_or_else(|| {
            EligibilityError::invalid(
                InputField::Programme,
                format!("{programme} is not offered in {}", self.matrix.cycle()),
            )
        })?;

        let decision = decide(table, category, overall_rank, category_rank).inspect_err(|err| {
            warn!(%programme, %category, error = %err, "seat matrix has no cutoff for selection");
        })?;

        debug!(
            %programme,
            %category,
            overall_rank,
            ?category_rank,
            eligible = decision.eligible,
            basis = %decision.basis.summary(),
            "evaluated eligibility"
        );

        Ok(decision)
    }

    pub fn evaluate_query(
        &self,
        query: &EligibilityQuery,
    ) -> Result<EligibilityDecision, EligibilityError> {
        self.evaluate(
            query.programme,
            query.category,
            query.overall_rank,
            query.category_rank,
        )
    }
}

fn validate_overall_rank(overall_rank: Option<i64>) -> Result<i64, EligibilityError> {
    match overall_rank {
        None => Err(EligibilityError::invalid(
            InputField::OverallRank,
            "overall rank is required",
        )),
        Some(rank) if rank < 1 => Err(EligibilityError::invalid(
            InputField::OverallRank,
            format!("{rank} is not a positive rank"),
        )),
        Some(rank) => Ok(rank),
    }
}
