use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LightsOutError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown cell symbol {symbol:?} at row {row}, column {column}")]
    UnknownCell {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("Board dimensions must be positive")]
    ZeroDimension,

    #[error("Chance a light starts on must be within [0, 1], got {0}")]
    ChanceOutOfRange(f64),
}
