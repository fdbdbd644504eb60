use std::fs;
use std::path::Path;

use miette::Diagnostic;
use nom::{character::complete::i64 as decimal, combinator::all_consuming, Finish};
use thiserror::Error;

/// Column separator used by the input format: three literal spaces.
pub const COLUMN_SEPARATOR: &str = "   ";

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(input::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("wrong number of columns on line: '{line}'")]
    #[diagnostic(code(input::column_count))]
    ColumnCount { line: String },

    #[error("failed to convert number: '{field}'")]
    #[diagnostic(code(input::number_parse))]
    NumberParse { field: String },

    #[error("unbalanced list lengths")]
    #[diagnostic(code(input::unbalanced))]
    Unbalanced,
}

/// The two input columns. Index i of `left` lines up with index i of `right`
/// only until [`ColumnPair::sort`] runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    pub left: Vec<i64>,
    pub right: Vec<i64>,
}

impl ColumnPair {
    /// Sorts each column ascending, independently of the other.
    pub fn sort(&mut self) {
        self.left.sort_unstable();
        self.right.sort_unstable();
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Reads the input file into a pair of columns.
#[tracing::instrument]
pub fn read_input(path: &Path) -> Result<ColumnPair, InputError> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_columns(&contents)
}

/// Parses lines of two integer fields separated by [`COLUMN_SEPARATOR`].
///
/// Empty input is valid and yields two empty columns. A line that does not
/// split into exactly two fields, or a field that is not a base-10 signed
/// integer, aborts the parse.
pub fn parse_columns(input: &str) -> Result<ColumnPair, InputError> {
    let mut columns = ColumnPair::default();

    for line in input.lines() {
        let mut fields = line.split(COLUMN_SEPARATOR);
        let (Some(left), Some(right), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(InputError::ColumnCount {
                line: line.to_string(),
            });
        };

        columns.left.push(field_value(left)?);
        columns.right.push(field_value(right)?);
    }

    if columns.left.len() != columns.right.len() {
        return Err(InputError::Unbalanced);
    }

    tracing::debug!(records = columns.len(), "parsed input");
    Ok(columns)
}

/// A field must be a base-10 `i64` with nothing left over.
fn field_value(field: &str) -> Result<i64, InputError> {
    all_consuming(decimal::<&str, nom::error::Error<&str>>)(field)
        .finish()
        .map(|(_, value)| value)
        .map_err(|_| InputError::NumberParse {
            field: field.to_string(),
        })
}
