//! Distance matrices.
//!
//! Provides the dense, precomputed travel-cost matrix consumed by the solver.

mod matrix;

pub use matrix::DistanceMatrix;
