use std::fmt;

use crate::dlx::Matrix;
use crate::order::{organ_pipe_order, ColumnOrder};

// The exact cover formulation of n-queens:
//
// Every cell (i, j) of the board is one candidate row. Placing a queen
// there satisfies four constraints:
// 1. board row i holds exactly one queen    (n columns "R{i}", primary)
// 2. board column j holds exactly one queen (n columns "C{j}", primary)
// 3. diagonal i - j holds at most one queen (2n-1 columns "D{d}", secondary)
// 4. diagonal i + j holds at most one queen (2n-1 columns "A{s}", secondary)
//
// The diagonals are secondary because most of them stay empty in any
// valid placement; they only rule out conflicts. The search then visits
// every subset of cells that covers all rows and columns exactly once
// without a diagonal clash, which is exactly the set of n-queens
// solutions.

/// A queen standing on the board cell `(row, col)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Board row, in `[0, n)`
    pub row: usize,
    /// Board column, in `[0, n)`
    pub col: usize,
}

/// One complete placement of n non-attacking queens, listed in the
/// order the search chose them.
pub type Solution = Vec<Placement>;

/// The main structure exposing all the functionality of the library
///
/// ## Example
///
/// ```
/// use queens::Queens;
///
/// let queens = Queens::new(8);
/// assert_eq!(queens.solve_all().len(), 92);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Queens {
    n: usize,
    order: ColumnOrder,
}

impl Queens {
    /// Creates an n-queens problem on an `n` by `n` board.
    pub fn new(n: usize) -> Queens {
        Queens {
            n,
            order: ColumnOrder::Natural,
        }
    }

    /// Creates an n-queens problem with an explicit column creation
    /// order. [`ColumnOrder::OrganPipe`] yields the same solutions as
    /// the natural order, generally faster and in a different order.
    pub fn with_order(n: usize, order: ColumnOrder) -> Queens {
        Queens { n, order }
    }

    /// The board side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Finds all solutions. The 0-queens problem has exactly one, the
    /// empty placement; the 2- and 3-queens problems have none.
    pub fn solve_all(&self) -> Vec<Solution> {
        self.matrix().search()
    }

    /// Finds the first `limit` solutions. If fewer exist, returns only those.
    pub fn solve_at_most(&self, limit: usize) -> Vec<Solution> {
        self.matrix().search_at_most(limit)
    }

    /// Finds one solution, or `None` if none exists.
    pub fn solve_one(&self) -> Option<Solution> {
        self.solve_at_most(1).pop()
    }

    /// Builds the exact cover matrix for this board.
    fn matrix(&self) -> Matrix<Placement> {
        let n = self.n;
        let label_order = match self.order {
            ColumnOrder::Natural => (0..n).collect(),
            ColumnOrder::OrganPipe => organ_pipe_order(n),
        };

        let mut columns = Vec::with_capacity(6 * n);
        for &i in &label_order {
            columns.push((format!("R{}", i), true));
        }
        for &j in &label_order {
            columns.push((format!("C{}", j), true));
        }
        // Diagonal labels only affect lookup, so they always go in
        // natural order.
        for d in (1 - n as isize)..(n as isize) {
            columns.push((format!("D{}", d), false));
        }
        for s in 0..(2 * n as isize - 1) {
            columns.push((format!("A{}", s), false));
        }

        // All labels are distinct by construction, so this cannot fail.
        let mut matrix = Matrix::new(columns).expect("column labels are distinct");
        for i in 0..n {
            for j in 0..n {
                let names = [
                    format!("R{}", i),
                    format!("C{}", j),
                    format!("D{}", i as isize - j as isize),
                    format!("A{}", i + j),
                ];
                matrix
                    .add_row(&names, Placement { row: i, col: j })
                    .expect("all four labels are registered");
            }
        }
        matrix
    }

    /// Returns a board view of a solution that implements
    /// [`Display`](fmt::Display): one line per board row, `Q` for a
    /// queen and `.` for an empty cell.
    pub fn display<'a>(&self, solution: &'a [Placement]) -> BoardDisplay<'a> {
        BoardDisplay {
            n: self.n,
            placements: solution,
        }
    }
}

/// Text rendering of a solved board, created by [`Queens::display`].
pub struct BoardDisplay<'a> {
    n: usize,
    placements: &'a [Placement],
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                if col != 0 {
                    write!(f, " ")?;
                }
                let queen = self
                    .placements
                    .iter()
                    .any(|placement| placement.row == row && placement.col == col);
                write!(f, "{}", if queen { 'Q' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_has_all_constraint_columns() {
        let matrix = Queens::new(5).matrix();
        // Every row and column label sees one candidate per board line,
        // the corner diagonals exactly one cell.
        assert_eq!(matrix.column_size("R0"), Some(5));
        assert_eq!(matrix.column_size("C4"), Some(5));
        assert_eq!(matrix.column_size("D-4"), Some(1));
        assert_eq!(matrix.column_size("D0"), Some(5));
        assert_eq!(matrix.column_size("A8"), Some(1));
        assert_eq!(matrix.column_size("A4"), Some(5));
        assert_eq!(matrix.column_size("R5"), None);
    }

    #[test]
    fn one_queen_board() {
        let solutions = Queens::new(1).solve_all();
        assert_eq!(solutions, vec![vec![Placement { row: 0, col: 0 }]]);
    }

    #[test]
    fn board_rendering() {
        let queens = Queens::new(4);
        let solution = vec![
            Placement { row: 0, col: 1 },
            Placement { row: 1, col: 3 },
            Placement { row: 2, col: 0 },
            Placement { row: 3, col: 2 },
        ];
        let board = queens.display(&solution).to_string();
        assert_eq!(board, ". Q . .\n. . . Q\nQ . . .\n. . Q .\n");
    }
}
