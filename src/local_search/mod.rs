//! Local search neighbourhoods for improving CVRP routes.
//!
//! - [`best_relocate_from`]: move a destination to another position or route
//! - [`best_exchange_from`]: swap two destinations between routes
//! - [`best_two_opt_from`]: intra-route segment reversal
//!
//! Operators evaluate moves against an [`ArcCost`], so the same code serves
//! plain distance descent and the penalised costs of guided local search.
//! Only capacity-feasible moves are ever proposed.

mod exchange;
mod moves;
mod relocate;
mod two_opt;

use rayon::prelude::*;

use crate::routing::{CapacityDimension, RoutingModel};

pub use exchange::best_exchange_from;
pub use moves::{Move, MoveKind};
pub use relocate::best_relocate_from;
pub use two_opt::best_two_opt_from;

/// Moves must improve by more than this to be proposed.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Symmetric cost of travelling an arc between two nodes.
pub trait ArcCost: Sync {
    /// Cost of the arc `from → to`.
    fn arc(&self, from: usize, to: usize) -> f64;
}

impl ArcCost for RoutingModel<'_> {
    fn arc(&self, from: usize, to: usize) -> f64 {
        self.distance(from, to) as f64
    }
}

/// A read-only snapshot of the working routes that move evaluators share.
pub struct MoveContext<'a, C: ArcCost> {
    /// One node sequence per vehicle, depot excluded.
    pub routes: &'a [Vec<usize>],
    /// Current load of each route.
    pub loads: &'a [i64],
    /// Depot node.
    pub depot: usize,
    /// Capacity bounds and demands.
    pub capacity: CapacityDimension<'a>,
    /// Arc cost moves are evaluated with.
    pub cost: &'a C,
}

impl<C: ArcCost> MoveContext<'_, C> {
    /// Node before `pos` on `route` (the depot before the first stop).
    pub fn prev(&self, route: usize, pos: usize) -> usize {
        if pos == 0 {
            self.depot
        } else {
            self.routes[route][pos - 1]
        }
    }

    /// Node after `pos` on `route` (the depot after the last stop).
    pub fn next(&self, route: usize, pos: usize) -> usize {
        self.routes[route].get(pos + 1).copied().unwrap_or(self.depot)
    }

    /// Every `(route, position)` holding a destination.
    pub fn sources(&self) -> Vec<(usize, usize)> {
        self.routes
            .iter()
            .enumerate()
            .flat_map(|(r, route)| (0..route.len()).map(move |p| (r, p)))
            .collect()
    }
}

/// Best improving move starting from one source position, over all
/// neighbourhoods.
pub fn best_move_from<C: ArcCost>(ctx: &MoveContext<'_, C>, route: usize, pos: usize) -> Option<Move> {
    let mut best = None;
    for candidate in [
        best_relocate_from(ctx, route, pos),
        best_exchange_from(ctx, route, pos),
        best_two_opt_from(ctx, route, pos),
    ]
    .into_iter()
    .flatten()
    {
        Move::keep_better(&mut best, candidate);
    }
    best
}

/// Best improving move over the whole neighbourhood, or `None` at a local
/// optimum.
///
/// With `parallel` set, source positions are evaluated on the rayon pool.
/// The result is identical either way because [`Move::priority`] is a total
/// order.
pub fn best_move<C: ArcCost>(ctx: &MoveContext<'_, C>, parallel: bool) -> Option<Move> {
    let sources = ctx.sources();
    let evaluate = |&(route, pos): &(usize, usize)| best_move_from(ctx, route, pos);
    if parallel {
        sources.par_iter().filter_map(evaluate).min_by(Move::priority)
    } else {
        sources.iter().filter_map(evaluate).min_by(Move::priority)
    }
}
