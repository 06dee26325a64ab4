#[cfg(doc)]
use crate::Queens;

/// Creation order of the row and column label columns in a [`Queens`]
/// matrix.
///
/// The order changes neither the set of columns nor the set of
/// solutions, only which column wins ties in the minimum-size selection
/// during search. That shifts how fast solutions are found and in what
/// order they are reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnOrder {
    /// Labels in ascending index order
    Natural,
    /// Labels from the board center outwards, see [`organ_pipe_order`]
    OrganPipe,
}

impl Default for ColumnOrder {
    fn default() -> ColumnOrder {
        ColumnOrder::Natural
    }
}

/// Permutes `0..n` into a center-out "organ-pipe" sequence, alternating
/// left and right of the center.
///
/// ```
/// use queens::organ_pipe_order;
///
/// assert_eq!(organ_pipe_order(5), vec![2, 1, 3, 0, 4]);
/// assert_eq!(organ_pipe_order(4), vec![1, 2, 0, 3]);
/// ```
pub fn organ_pipe_order(n: usize) -> Vec<usize> {
    let center = n / 2;
    let mut order = if n % 2 == 1 { vec![center] } else { Vec::new() };
    let mut left = center as isize - 1;
    let mut right = center + n % 2;
    while left >= 0 || right < n {
        if left >= 0 {
            order.push(left as usize);
            left -= 1;
        }
        if right < n {
            order.push(right);
            right += 1;
        }
    }
    order
}
