#[cfg(doc)]
use crate::Matrix;

/// Error for [`Matrix::new`] and [`Matrix::add_row`]
///
/// Both variants signal a mistake in how the matrix was built, not a
/// condition that can arise during a valid search. An unsolvable problem
/// is not an error; searching it just returns no solutions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two columns were registered under the same name
    #[error("duplicate column name {0:?}")]
    DuplicateColumn(String),
    /// A row referenced a column that was never registered
    #[error("unknown column name {0:?}")]
    UnknownColumn(String),
}
