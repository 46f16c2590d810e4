//! Constructive heuristics for building a first feasible assignment.
//!
//! - [`path_cheapest_arc`]: grow routes from the depot along the cheapest feasible arc, O(n³V)
//! - [`insert_unassigned`]: cheapest insertion of leftovers into existing routes, O(n²V)
//! - [`first_fit_decreasing`]: capacity-only packing fallback, O(n log n + nV)
//! - [`exact_packing`]: depth-first packing that finds a feasible assignment or proves there is none

mod insertion;
mod packing;
mod path_cheapest_arc;

pub use insertion::insert_unassigned;
pub use packing::{exact_packing, first_fit_decreasing, Packing};
pub use path_cheapest_arc::{path_cheapest_arc, Construction};
