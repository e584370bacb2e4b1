//! Local search operators for improving a visiting order.
//!
//! - [`two_opt`] — 2-opt edge-exchange refinement

mod two_opt;

pub use two_opt::{two_opt_improve, two_opt_improve_with, Strategy, TwoOptOptions};
