use super::domain::{parse_rank_field, Category, EligibilityError, InputField, Programme};
use super::evaluation::rules::GENERAL_MERIT;
use super::evaluation::{EligibilityDecision, EligibilityEvaluator};

/// Liability notice the user must accept before the first check.
pub const DISCLAIMER: &str = "This tool estimates your chances from last year's \
last-admitted ranks for the government quota. It is not an official allotment, cutoffs \
change every year, and the authors accept no liability for admission decisions made on \
the basis of its output. Always confirm with the official CAP allotment lists.";

/// Transient form state owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorSession {
    programme: Programme,
    category: Category,
    disclaimer_acknowledged: bool,
    last_decision: Option<EligibilityDecision>,
}

impl Default for PredictorSession {
    fn default() -> Self {
        Self {
            programme: Programme::ThreeYear,
            category: GENERAL_MERIT,
            disclaimer_acknowledged: false,
            last_decision: None,
        }
    }
}

impl PredictorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn programme(&self) -> Programme {
        self.programme
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn disclaimer_acknowledged(&self) -> bool {
        self.disclaimer_acknowledged
    }

    pub fn last_decision(&self) -> Option<&EligibilityDecision> {
        self.last_decision.as_ref()
    }

    pub fn acknowledge_disclaimer(&mut self) {
        self.disclaimer_acknowledged = true;
    }

    pub fn available_programmes(evaluator: &EligibilityEvaluator) -> Vec<Programme> {
        evaluator.matrix().programmes().collect()
    }

    /// Categories offered for the selected programme, read from the evaluator's own table.
    pub fn available_categories(&self, evaluator: &EligibilityEvaluator) -> Vec<Category> {
        evaluator
            .matrix()
            .table(self.programme)
            .map(|table| table.categories().collect())
            .unwrap_or_default()
    }

    /// Switch programme, falling back to general merit when the chosen category is not
    /// listed for the new programme.
    pub fn select_programme(
        &mut self,
        evaluator: &EligibilityEvaluator,
        programme: Programme,
    ) -> Result<(), SessionError> {
        let matrix = evaluator.matrix();
        let table = matrix.table(programme).ok_or_else(|| {
            SessionError::Eligibility(EligibilityError::invalid(
                InputField::Programme,
                format!("{programme} is not offered in {}", matrix.cycle()),
            ))
        })?;

        self.programme = programme;
        if !table.contains(self.category) {
            self.category = GENERAL_MERIT;
        }
        Ok(())
    }

    pub fn select_category(
        &mut self,
        evaluator: &EligibilityEvaluator,
        category: Category,
    ) -> Result<(), SessionError> {
        let offered = evaluator
            .matrix()
            .table(self.programme)
            .is_some_and(|table| table.contains(category));
        if !offered {
            return Err(SessionError::Eligibility(EligibilityError::UnknownCategory {
                programme: self.programme,
                category,
            }));
        }

        self.category = category;
        Ok(())
    }

    /// Evaluate the typed ranks. Any failure withholds the previous result.
    pub fn submit(
        &mut self,
        evaluator: &EligibilityEvaluator,
        overall_rank: &str,
        category_rank: &str,
    ) -> Result<&EligibilityDecision, SessionError> {
        self.last_decision = None;

        if !self.disclaimer_acknowledged {
            return Err(SessionError::DisclaimerNotAcknowledged);
        }

        let overall_rank = parse_rank_field(InputField::OverallRank, overall_rank)?;
        let category_rank = parse_rank_field(InputField::CategoryRank, category_rank)?;
        let decision =
            evaluator.evaluate(self.programme, self.category, overall_rank, category_rank)?;

        Ok(&*self.last_decision.insert(decision))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the disclaimer must be acknowledged before checking eligibility")]
    DisclaimerNotAcknowledged,
    #[error(transparent)]
    Eligibility(#[from] EligibilityError),
}
