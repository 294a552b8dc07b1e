//! Properties of the eligibility rule over the built-in CAP 2025 matrix.

use proptest::prelude::*;
use seat_predictor::predictor::{
    ranks_by_overall_only, Category, EligibilityEvaluator, Programme, SeatMatrix,
};

fn arb_programme() -> impl Strategy<Value = Programme> {
    prop_oneof![Just(Programme::ThreeYear), Just(Programme::FiveYear)]
}

fn arb_category() -> impl Strategy<Value = Category> {
    (0..Category::ALL.len()).prop_map(|index| Category::ALL[index])
}

fn cutoff(programme: Programme, category: Category) -> u32 {
    SeatMatrix::builtin()
        .cutoff(programme, category)
        .expect("built-in matrix lists every category")
}

fn general_cutoff(programme: Programme) -> u32 {
    cutoff(programme, Category::StateMerit)
}

// ── Overall-rank-only categories follow their cutoff exactly ────────────

proptest! {
    #[test]
    fn overall_rank_only_categories_match_their_cutoff(
        programme in arb_programme(),
        pd in any::<bool>(),
        overall in 1i64..2_000,
        category_rank in proptest::option::of(-50i64..2_000),
    ) {
        let category = if pd { Category::Pd } else { Category::StateMerit };
        prop_assert!(ranks_by_overall_only(category));

        let engine = EligibilityEvaluator::builtin();
        let decision = engine
            .evaluate(programme, category, Some(overall), category_rank)
            .expect("valid query");

        // PD can still qualify through the state merit short-circuit.
        let limit = cutoff(programme, category).max(general_cutoff(programme));
        prop_assert_eq!(decision.eligible, overall <= i64::from(limit));
    }
}

// ── Short-circuit on general merit ──────────────────────────────────────

proptest! {
    #[test]
    fn general_merit_rank_always_qualifies(
        programme in arb_programme(),
        category in arb_category(),
        category_rank in proptest::option::of(any::<i64>()),
        offset in 0u32..194,
    ) {
        let overall = i64::from(general_cutoff(programme).saturating_sub(offset).max(1));
        let decision = EligibilityEvaluator::builtin()
            .evaluate(programme, category, Some(overall), category_rank)
            .expect("valid query");
        prop_assert!(decision.eligible);
    }
}

// ── Monotonic in overall rank past the short-circuit ────────────────────

proptest! {
    #[test]
    fn eligibility_never_returns_at_a_worse_overall_rank(
        programme in arb_programme(),
        category in arb_category(),
        category_rank in proptest::option::of(1i64..200),
        better in 1i64..1_000,
        gap in 0i64..1_000,
    ) {
        let engine = EligibilityEvaluator::builtin();
        let worse = better + gap;
        let at_better = engine
            .evaluate(programme, category, Some(better), category_rank)
            .expect("valid query");
        let at_worse = engine
            .evaluate(programme, category, Some(worse), category_rank)
            .expect("valid query");

        prop_assert!(at_better.eligible || !at_worse.eligible);
    }
}

// ── Category rank decides reserved categories past general merit ────────

proptest! {
    #[test]
    fn category_rank_decides_reserved_categories(
        programme in arb_programme(),
        category in arb_category(),
        excess in 1i64..5_000,
        category_rank in 1i64..200,
    ) {
        prop_assume!(!ranks_by_overall_only(category));
        let category_cutoff = i64::from(cutoff(programme, category));
        let overall = i64::from(general_cutoff(programme)).max(category_cutoff) + excess;

        let engine = EligibilityEvaluator::builtin();
        let with_rank = engine
            .evaluate(programme, category, Some(overall), Some(category_rank))
            .expect("valid query");
        prop_assert_eq!(with_rank.eligible, category_rank <= category_cutoff);

        let without_rank = engine
            .evaluate(programme, category, Some(overall), None)
            .expect("valid query");
        prop_assert!(!without_rank.eligible);
    }
}

// ── Non-positive overall ranks never produce a decision ─────────────────

proptest! {
    #[test]
    fn non_positive_overall_rank_is_rejected(
        programme in arb_programme(),
        category in arb_category(),
        overall in i64::MIN..=0,
    ) {
        let err = EligibilityEvaluator::builtin()
            .evaluate(programme, category, Some(overall), None)
            .expect_err("rank must be positive");
        prop_assert!(err.is_invalid_input());
    }
}

#[test]
fn published_scenarios_for_three_year_programme() {
    let engine = EligibilityEvaluator::builtin();
    let check = |category: Category, overall: i64, category_rank: Option<i64>| {
        engine
            .evaluate(Programme::ThreeYear, category, Some(overall), category_rank)
            .expect("valid query")
            .eligible
    };

    assert!(check(Category::Sc, 100, None));
    assert!(check(Category::Sc, 300, Some(35)));
    assert!(!check(Category::Sc, 300, Some(50)));
    assert!(!check(Category::Pd, 300, Some(10)));
    assert!(!check(Category::Ews, 300, None));

    let err = engine
        .evaluate(Programme::ThreeYear, Category::Sc, Some(0), None)
        .expect_err("zero is not a rank");
    assert!(err.is_invalid_input());
}
