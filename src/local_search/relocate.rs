//! Relocate operator.
//!
//! # Algorithm
//!
//! Tries moving one destination from its current position to every other
//! position, on its own route or on any other route whose vehicle still has
//! room for its demand:
//!
//! ```text
//! delta = [c(p,n) - c(p,x) - c(x,n)] + [c(u,x) + c(x,w) - c(u,w)]
//! ```
//!
//! where `p → x → n` is the removal site and `u → w` the insertion site.
//!
//! # Complexity
//!
//! O(n) per source position, O(n²) per full pass.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{ArcCost, Move, MoveContext, MoveKind, IMPROVEMENT_EPSILON};

/// Best improving relocation of the destination at `routes[route][pos]`.
pub fn best_relocate_from<C: ArcCost>(
    ctx: &MoveContext<'_, C>,
    route: usize,
    pos: usize,
) -> Option<Move> {
    let cost = ctx.cost;
    let node = ctx.routes[route][pos];
    let prev = ctx.prev(route, pos);
    let next = ctx.next(route, pos);

    // Old: prev → node → next
    // New: prev → next
    let removal = cost.arc(prev, next) - cost.arc(prev, node) - cost.arc(node, next);

    let mut best = None;
    for (to_route, target) in ctx.routes.iter().enumerate() {
        if to_route == route {
            let rest: Vec<usize> = target
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != pos)
                .map(|(_, &n)| n)
                .collect();
            for to_pos in (0..=rest.len()).filter(|&p| p != pos) {
                let delta = removal + insertion(ctx, &rest, to_pos, node);
                consider(&mut best, delta, node, route, pos, to_route, to_pos);
            }
        } else {
            if !ctx.capacity.fits(to_route, ctx.loads[to_route], node) {
                continue;
            }
            for to_pos in 0..=target.len() {
                let delta = removal + insertion(ctx, target, to_pos, node);
                consider(&mut best, delta, node, route, pos, to_route, to_pos);
            }
        }
    }
    best
}

/// Cost of inserting `node` before position `pos` of `route`.
fn insertion<C: ArcCost>(ctx: &MoveContext<'_, C>, route: &[usize], pos: usize, node: usize) -> f64 {
    let cost = ctx.cost;
    let prev = if pos == 0 { ctx.depot } else { route[pos - 1] };
    let next = route.get(pos).copied().unwrap_or(ctx.depot);
    cost.arc(prev, node) + cost.arc(node, next) - cost.arc(prev, next)
}

fn consider(
    best: &mut Option<Move>,
    delta: f64,
    node: usize,
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
) {
    if delta < -IMPROVEMENT_EPSILON {
        Move::keep_better(
            best,
            Move {
                kind: MoveKind::Relocate,
                delta,
                node,
                vehicle: to_route,
                from_route,
                from_pos,
                to_route,
                to_pos,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RoutingModel;
    use crate::test_support::{line_problem, problem};

    fn loads(model: &RoutingModel<'_>, routes: &[Vec<usize>]) -> Vec<i64> {
        routes.iter().map(|r| model.capacity().load(r)).collect()
    }

    #[test]
    fn test_relocate_joins_neighbors() {
        // 1 and 2 sit together far from 3; 2 is on the wrong route
        let p = problem(
            &[1, 1, 1],
            &[10, 10],
            vec![
                vec![0, 10, 10, 10],
                vec![10, 0, 1, 15],
                vec![10, 1, 0, 15],
                vec![10, 15, 15, 0],
            ],
        );
        let model = RoutingModel::new(&p);
        let routes = vec![vec![1], vec![3, 2]];
        let l = loads(&model, &routes);
        let ctx = MoveContext {
            routes: &routes,
            loads: &l,
            depot: 0,
            capacity: *model.capacity(),
            cost: &model,
        };
        let mv = best_relocate_from(&ctx, 1, 1).expect("improving");
        assert_eq!(mv.node, 2);
        assert_eq!(mv.to_route, 0);
        // removal: 10 - 15 - 10 = -15; insertion next to 1: 1 + 10 - 10 = 1
        assert_eq!(mv.delta, -14.0);

        let mut applied = routes.clone();
        mv.apply(&mut applied);
        assert_eq!(model.total_cost(&applied) - model.total_cost(&routes), -14);
    }

    #[test]
    fn test_relocate_respects_capacity() {
        let p = line_problem(&[10, 10, 10], &[15, 15, 15]);
        let model = RoutingModel::new(&p);
        let routes = vec![vec![1], vec![3], vec![2]];
        let l = loads(&model, &routes);
        let ctx = MoveContext {
            routes: &routes,
            loads: &l,
            depot: 0,
            capacity: *model.capacity(),
            cost: &model,
        };
        for r in 0..3 {
            assert!(best_relocate_from(&ctx, r, 0).is_none());
        }
    }

    #[test]
    fn test_relocate_within_route() {
        let p = line_problem(&[1, 1, 1], &[10]);
        let model = RoutingModel::new(&p);
        // 0 → 3 → 1 → 2 → 0 costs 3 + 2 + 1 + 2 = 8; moving 3 behind 1 gives 6
        let routes = vec![vec![3, 1, 2]];
        let l = loads(&model, &routes);
        let ctx = MoveContext {
            routes: &routes,
            loads: &l,
            depot: 0,
            capacity: *model.capacity(),
            cost: &model,
        };
        let mv = best_relocate_from(&ctx, 0, 0).expect("improving");
        assert_eq!(mv.delta, -2.0);
        let mut applied = routes.clone();
        mv.apply(&mut applied);
        // both later slots save 2; the earlier position wins the tie
        assert_eq!(applied, vec![vec![1, 3, 2]]);
        assert_eq!(model.total_cost(&applied), 6);
    }
}
