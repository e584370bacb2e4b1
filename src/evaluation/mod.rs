//! Tour cost accumulation and route validation.

mod cost;

pub use cost::{tour_cost, validate_route};
