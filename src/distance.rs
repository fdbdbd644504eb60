use crate::input::ColumnPair;

/// Sums the absolute difference between same-index values of the two columns.
///
/// Callers sort both columns first; only positional alignment after that sort
/// is meaningful here.
#[tracing::instrument]
pub fn process(columns: &ColumnPair) -> i64 {
    columns
        .left
        .iter()
        .zip(columns.right.iter())
        .map(|(left, right)| (left - right).abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_columns;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "3   4
4   3
2   5
1   3
3   9
3   3";
        let mut columns = parse_columns(input)?;
        columns.sort();
        assert_eq!(11, process(&columns));
        Ok(())
    }

    #[test]
    fn test_process_is_symmetric() -> miette::Result<()> {
        let mut columns = parse_columns("3   4\n4   3\n2   5\n1   3\n3   9\n3   3")?;
        columns.sort();

        let swapped = ColumnPair {
            left: columns.right.clone(),
            right: columns.left.clone(),
        };
        assert_eq!(process(&columns), process(&swapped));
        Ok(())
    }

    #[test]
    fn test_process_empty_columns() {
        assert_eq!(0, process(&ColumnPair::default()));
    }

    #[test]
    fn test_process_negative_values() {
        let columns = ColumnPair {
            left: vec![-5, 1],
            right: vec![-2, 3],
        };
        assert_eq!(5, process(&columns));
    }
}
