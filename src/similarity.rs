use itertools::Itertools;

use crate::input::ColumnPair;

/// Sums `value * left count * right count` over the values present in both
/// columns. Values present only on one side contribute nothing. Sort order of
/// the columns is irrelevant.
#[tracing::instrument]
pub fn process(columns: &ColumnPair) -> i64 {
    // occurrence counts within each column
    let left_counts = columns.left.iter().copied().counts();
    let right_counts = columns.right.iter().copied().counts();

    left_counts
        .iter()
        .filter_map(|(&value, &left_count)| {
            right_counts
                .get(&value)
                .map(|&right_count| value * left_count as i64 * right_count as i64)
        })
        .sum()
}
