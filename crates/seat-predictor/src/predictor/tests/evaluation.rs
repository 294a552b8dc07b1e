use super::common::*;
use crate::predictor::domain::{
    Category, EligibilityError, EligibilityQuery, InputField, Programme,
};
use crate::predictor::evaluation::{DecisionBasis, RankSource};

#[test]
fn rank_within_state_merit_qualifies_whatever_the_category() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Sc, Some(100), None)
        .expect("evaluates");

    assert!(decision.eligible);
    assert_eq!(
        decision.basis,
        DecisionBasis::GeneralMerit {
            overall_rank: 100,
            cutoff: 251
        }
    );
}

#[test]
fn category_rank_within_reserved_cutoff_qualifies() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Sc, Some(300), Some(35))
        .expect("evaluates");

    assert!(decision.eligible);
    assert_eq!(
        decision.basis,
        DecisionBasis::CategoryCutoff {
            category: Category::Sc,
            source: RankSource::Category,
            tested_rank: 35,
            cutoff: 38,
        }
    );
}

#[test]
fn category_rank_beyond_reserved_cutoff_does_not_qualify() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Sc, Some(300), Some(50))
        .expect("evaluates");

    assert!(!decision.eligible);
    assert_eq!(decision.message(), "No Government seat based on current ranks.");
}

#[test]
fn pd_is_tested_on_overall_rank_even_with_category_rank() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Pd, Some(300), Some(10))
        .expect("evaluates");

    assert!(!decision.eligible);
    assert_eq!(
        decision.basis,
        DecisionBasis::CategoryCutoff {
            category: Category::Pd,
            source: RankSource::Overall,
            tested_rank: 300,
            cutoff: 23,
        }
    );
}

#[test]
fn missing_category_rank_falls_back_to_overall_rank() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Ews, Some(300), None)
        .expect("evaluates");

    assert!(!decision.eligible);
    assert_eq!(
        decision.basis,
        DecisionBasis::CategoryCutoff {
            category: Category::Ews,
            source: RankSource::Overall,
            tested_rank: 300,
            cutoff: 46,
        }
    );

    let trial = trial_evaluator()
        .evaluate(Programme::ThreeYear, Category::Sc, Some(11), None)
        .expect("evaluates");
    assert!(!trial.eligible);
}

#[test]
fn state_merit_boundary_is_inclusive() {
    let engine = evaluator();
    let at_cutoff = engine
        .evaluate(Programme::ThreeYear, Category::StateMerit, Some(251), None)
        .expect("evaluates");
    let past_cutoff = engine
        .evaluate(Programme::ThreeYear, Category::StateMerit, Some(252), None)
        .expect("evaluates");

    assert!(at_cutoff.eligible);
    assert!(!past_cutoff.eligible);

    let five = engine
        .evaluate(Programme::FiveYear, Category::StateMerit, Some(195), Some(1))
        .expect("evaluates");
    assert!(!five.eligible, "state merit ignores the category rank");
}

#[test]
fn top_overall_rank_short_circuits_a_hopeless_category_rank() {
    let decision = evaluator()
        .evaluate(Programme::FiveYear, Category::St, Some(1), Some(999_999))
        .expect("evaluates");

    assert!(decision.eligible);
    assert!(matches!(decision.basis, DecisionBasis::GeneralMerit { .. }));
}

#[test]
fn zero_negative_or_missing_overall_rank_is_invalid_input() {
    let engine = evaluator();
    for overall in [Some(0), Some(-12), None] {
        let err = engine
            .evaluate(Programme::ThreeYear, Category::Sc, overall, None)
            .expect_err("overall rank rejected");
        match err {
            EligibilityError::InvalidInput { field, .. } => {
                assert_eq!(field, InputField::OverallRank)
            }
            other => panic!("expected invalid input, got {other:?}"),
        }
    }
}

#[test]
fn non_positive_category_rank_is_tested_as_given() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Sc, Some(300), Some(0))
        .expect("evaluates");

    assert!(!decision.eligible);
    assert!(matches!(
        decision.basis,
        DecisionBasis::CategoryCutoff {
            source: RankSource::Category,
            tested_rank: 0,
            ..
        }
    ));
}

#[test]
fn category_missing_from_programme_table_is_unknown_category() {
    let err = trial_evaluator()
        .evaluate(Programme::FiveYear, Category::Sc, Some(30), Some(1))
        .expect_err("SC not listed for 5yr");

    assert_eq!(
        err,
        EligibilityError::UnknownCategory {
            programme: Programme::FiveYear,
            category: Category::Sc,
        }
    );
}

#[test]
fn general_merit_short_circuit_precedes_category_lookup() {
    let decision = trial_evaluator()
        .evaluate(Programme::FiveYear, Category::Sc, Some(8), None)
        .expect("short-circuit needs no SC cutoff");

    assert!(decision.eligible);
}

#[test]
fn programme_without_table_is_invalid_input() {
    let engine = crate::predictor::EligibilityEvaluator::new(three_year_only_matrix());
    let err = engine
        .evaluate(Programme::FiveYear, Category::StateMerit, Some(1), None)
        .expect_err("5yr not offered");

    assert_eq!(
        err,
        EligibilityError::InvalidInput {
            field: InputField::Programme,
            reason: "5yr is not offered in three-year only".to_string(),
        }
    );
}

#[test]
fn repeated_queries_yield_identical_decisions() {
    let engine = evaluator();
    let query = EligibilityQuery {
        programme: Programme::FiveYear,
        category: Category::Muslim,
        overall_rank: Some(400),
        category_rank: Some(68),
    };

    let first = engine.evaluate_query(&query).expect("evaluates");
    let second = engine.evaluate_query(&query).expect("evaluates");

    assert_eq!(first, second);
    assert!(first.eligible);
}

#[test]
fn summary_explains_the_deciding_rule() {
    let decision = evaluator()
        .evaluate(Programme::ThreeYear, Category::Sc, Some(300), Some(35))
        .expect("evaluates");

    assert_eq!(
        decision.summary(),
        "You have a chance to get a Government law-college seat. \
         (category rank 35 tested against SC cutoff 38)"
    );
}
