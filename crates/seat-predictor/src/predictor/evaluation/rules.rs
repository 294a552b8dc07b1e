use super::super::domain::Category;
use super::policy::RankSource;

/// Category whose cutoff is the universal admission threshold for a programme.
pub const GENERAL_MERIT: Category = Category::StateMerit;

/// Categories allotted straight from the overall rank list; a category rank is ignored.
pub const OVERALL_RANK_ONLY: [Category; 2] = [Category::StateMerit, Category::Pd];

pub fn ranks_by_overall_only(category: Category) -> bool {
    OVERALL_RANK_ONLY.contains(&category)
}

/// A rank qualifies when it is a real rank (1 or more) no worse than the last admitted one.
pub fn within_cutoff(rank: i64, cutoff: u32) -> bool {
    rank >= 1 && rank <= i64::from(cutoff)
}

/// Picks the rank tested against the category cutoff.
pub fn rank_to_test(
    category: Category,
    overall_rank: i64,
    category_rank: Option<i64>,
) -> (RankSource, i64) {
    if ranks_by_overall_only(category) {
        return (RankSource::Overall, overall_rank);
    }

    match category_rank {
        Some(rank) => (RankSource::Category, rank),
        None => (RankSource::Overall, overall_rank),
    }
}
