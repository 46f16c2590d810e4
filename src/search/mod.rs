//! Solve orchestration: configuration, cancellation, guided local search
//! and the [`Solver`] entry point.
//!
//! A solve moves through [`SearchPhase`]s: pre-checks, construction of a
//! feasible assignment, improvement within the time budget, and extraction.
//! Either a [`SolveOutcome::Solved`] or a [`SolveOutcome::Infeasible`] comes
//! out the other end.

mod cancel;
mod config;
mod guided;
mod solver;

pub use cancel::CancellationToken;
pub use config::SearchConfig;
pub use guided::{GuidedLocalSearch, SearchResult, SearchStats};
pub use solver::{precheck, InfeasibleReason, SearchPhase, SolveOutcome, Solver};
