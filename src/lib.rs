#![warn(missing_docs)]
//! The queens library
//!
//! ## Overview
//!
//! queens is a library that enumerates all solutions to the n-queens
//! placement problem. The board is encoded as an exact cover problem and
//! solved with Knuth's Algorithm X, implemented with the dancing links
//! technique.
//!
//! ## Example
//!
//! ```
//! use queens::Queens;
//!
//! let queens = Queens::new(4);
//! let solutions = queens.solve_all();
//! assert_eq!(solutions.len(), 2);
//!
//! for solution in &solutions {
//!     println!("{}", queens.display(solution));
//! }
//! ```
//!
//! The exact cover engine itself is exposed as [`Matrix`] and can be
//! used for other covering problems.

mod dlx;
mod errors;
mod order;
mod queens;

pub use crate::dlx::Matrix;
pub use crate::errors::Error;
pub use crate::order::{organ_pipe_order, ColumnOrder};
pub use crate::queens::{BoardDisplay, Placement, Queens, Solution};
