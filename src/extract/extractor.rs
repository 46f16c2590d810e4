//! Assignment → solution conversion.

use crate::models::{Route, Solution, Termination, Visit};
use crate::routing::{Assignment, RoutingModel};

/// Walks each vehicle's chain in `assignment` and builds the reported
/// [`Solution`].
///
/// Loads and distances are recomputed from the chain itself: distance is the
/// sum of arc costs between consecutive routing indices (depot legs
/// included) and every visit's cumulative load is re-accumulated from the
/// node demands.
pub fn extract_solution(
    model: &RoutingModel<'_>,
    assignment: &Assignment,
    termination: Termination,
) -> Solution {
    let manager = model.manager();
    let routes = (0..manager.vehicle_count())
        .map(|vehicle| {
            let indices = assignment.route_indices(manager, vehicle);
            let mut route = Route::new(vehicle);
            let mut load = 0;
            for &index in &indices[1..indices.len() - 1] {
                let demand = model.demand(index);
                load += demand;
                route.push_visit(Visit {
                    node_id: manager.index_to_node(index),
                    demand,
                    load_after: load,
                });
            }
            let distance = indices
                .windows(2)
                .map(|w| model.arc_cost(w[0], w[1]))
                .sum();
            route.set_total_distance(distance);
            route
        })
        .collect();
    Solution::new(routes, termination)
}
