//! Government-quota seat eligibility: the seat matrix, the evaluator that applies it, and
//! the small state object a form needs around it.
//!
//! The evaluator is a pure function of the query and the read-only matrix. Everything the
//! presentation layer offers for selection is derived from that same matrix.

pub mod domain;
pub mod evaluation;
pub mod matrix;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    parse_rank_field, Category, EligibilityError, EligibilityQuery, InputField, Programme,
};
pub use evaluation::rules::{
    ranks_by_overall_only, rank_to_test, within_cutoff, GENERAL_MERIT, OVERALL_RANK_ONLY,
};
pub use evaluation::{
    DecisionBasis, EligibilityDecision, EligibilityEvaluator, RankSource, ELIGIBLE_MESSAGE,
    NOT_ELIGIBLE_MESSAGE,
};
pub use matrix::{
    CategoryListing, CutoffTable, CutoffTableError, MatrixImportError, ProgrammeListing,
    SeatMatrix, SeatMatrixImporter,
};
pub use router::{
    eligibility_router, EligibilityRequest, EligibilityResponse, ProgrammesResponse,
};
pub use session::{PredictorSession, SessionError, DISCLAIMER};
