//! Cheapest feasible insertion of leftover destinations.
//!
//! Used after [`path_cheapest_arc`](super::path_cheapest_arc) when tail
//! extension stranded some destinations: each leftover may still fit in the
//! middle of a route whose tail was a poor match.

use super::Construction;
use crate::routing::RoutingModel;

/// Distance added by inserting `node` before position `pos` of `route`.
pub(crate) fn insertion_delta(
    model: &RoutingModel<'_>,
    route: &[usize],
    pos: usize,
    node: usize,
) -> i64 {
    let depot = model.depot();
    let prev = if pos == 0 { depot } else { route[pos - 1] };
    let next = if pos == route.len() { depot } else { route[pos] };

    // Old: prev → next
    // New: prev → node → next
    model.distance(prev, node) + model.distance(node, next) - model.distance(prev, next)
}

/// Inserts unassigned destinations at their cheapest capacity-feasible
/// position until none fits anywhere.
///
/// Each step commits the globally cheapest insertion; ties go to the lowest
/// node, then vehicle, then position.
pub fn insert_unassigned(model: &RoutingModel<'_>, construction: &mut Construction) {
    let capacity = model.capacity();
    let mut loads: Vec<i64> = construction
        .routes
        .iter()
        .map(|r| capacity.load(r))
        .collect();

    loop {
        let mut best: Option<(i64, usize, usize, usize)> = None;
        for &node in &construction.unassigned {
            for (vehicle, route) in construction.routes.iter().enumerate() {
                if !capacity.fits(vehicle, loads[vehicle], node) {
                    continue;
                }
                for pos in 0..=route.len() {
                    let candidate = (insertion_delta(model, route, pos, node), node, vehicle, pos);
                    if best.is_none_or(|b| candidate < b) {
                        best = Some(candidate);
                    }
                }
            }
        }

        let Some((_, node, vehicle, pos)) = best else {
            break;
        };
        construction.routes[vehicle].insert(pos, node);
        loads[vehicle] += capacity.transit(node);
        construction.unassigned.retain(|&n| n != node);
    }
}
