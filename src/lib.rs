//! # tour-opt
//!
//! Stop-order optimization library: given an n×n matrix of pairwise travel
//! costs between stops, computes a near-optimal visiting order with a
//! nearest-neighbor construction heuristic refined by 2-opt local search,
//! optionally anchored to a depot at index 0.
//!
//! The cost matrix is the only required input. How it was produced — a road
//! routing service, straight-line distance — is the caller's concern;
//! [`distance::CostMatrix::from_stops`] provides an offline haversine
//! fallback.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Stop, TourPlan)
//! - [`distance`] — Travel cost matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt tour improvement
//! - [`evaluation`] — Tour cost accumulation and route validation
//! - [`solver`] — End-to-end solve orchestration with depot anchoring
//! - [`error`] — Error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
