//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For positions `i < j` in a route, reversing `route[i..=j]` replaces the
//! arcs `(p, r[i])` and `(r[j], n)` with `(p, r[j])` and `(r[i], n)`:
//!
//! ```text
//! delta = c(p, r[j]) + c(r[i], n) - c(p, r[i]) - c(r[j], n)
//! ```
//!
//! Interior arcs are traversed backwards, which costs the same because arc
//! costs are symmetric. Loads never change.
//!
//! # Complexity
//!
//! O(n) per source position, O(n²) per route pass.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::{ArcCost, Move, MoveContext, MoveKind, IMPROVEMENT_EPSILON};

/// Best improving reversal starting at `routes[route][pos]`.
pub fn best_two_opt_from<C: ArcCost>(
    ctx: &MoveContext<'_, C>,
    route: usize,
    pos: usize,
) -> Option<Move> {
    let cost = ctx.cost;
    let r = &ctx.routes[route];
    let p = ctx.prev(route, pos);

    let mut best = None;
    for j in (pos + 1)..r.len() {
        let n = ctx.next(route, j);
        let delta = cost.arc(p, r[j]) + cost.arc(r[pos], n) - cost.arc(p, r[pos]) - cost.arc(r[j], n);
        if delta < -IMPROVEMENT_EPSILON {
            Move::keep_better(
                &mut best,
                Move {
                    kind: MoveKind::TwoOpt,
                    delta,
                    node: r[pos],
                    vehicle: route,
                    from_route: route,
                    from_pos: pos,
                    to_route: route,
                    to_pos: j,
                },
            );
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RoutingModel;
    use crate::test_support::{line_problem, problem};

    #[test]
    fn test_2opt_already_optimal() {
        let p = line_problem(&[1, 1, 1], &[10]);
        let model = RoutingModel::new(&p);
        let routes = vec![vec![1, 2, 3]];
        let loads = vec![3];
        let ctx = MoveContext {
            routes: &routes,
            loads: &loads,
            depot: 0,
            capacity: *model.capacity(),
            cost: &model,
        };
        for pos in 0..3 {
            assert!(best_two_opt_from(&ctx, 0, pos).is_none());
        }
    }

    #[test]
    fn test_2opt_reverses_crossing() {
        // square: depot (0,0), 1 (0,1), 2 (1,1), 3 (1,0); Manhattan distances
        let p = problem(
            &[1, 1, 1],
            &[10],
            vec![
                vec![0, 1, 2, 1],
                vec![1, 0, 1, 2],
                vec![2, 1, 0, 1],
                vec![1, 2, 1, 0],
            ],
        );
        let model = RoutingModel::new(&p);
        // 0 → 1 → 3 → 2 → 0 = 1 + 2 + 1 + 2 = 6, optimum is 4
        let routes = vec![vec![1, 3, 2]];
        let loads = vec![3];
        let ctx = MoveContext {
            routes: &routes,
            loads: &loads,
            depot: 0,
            capacity: *model.capacity(),
            cost: &model,
        };
        let mv = best_two_opt_from(&ctx, 0, 1).expect("improving");
        assert_eq!(mv.delta, -2.0);
        let mut applied = routes.clone();
        mv.apply(&mut applied);
        assert_eq!(applied, vec![vec![1, 2, 3]]);
        assert_eq!(model.total_cost(&applied), 4);
    }

    #[test]
    fn test_2opt_single_stop() {
        let p = line_problem(&[1], &[10]);
        let model = RoutingModel::new(&p);
        let routes = vec![vec![1]];
        let loads = vec![1];
        let ctx = MoveContext {
            routes: &routes,
            loads: &loads,
            depot: 0,
            capacity: *model.capacity(),
            cost: &model,
        };
        assert!(best_two_opt_from(&ctx, 0, 0).is_none());
    }
}
