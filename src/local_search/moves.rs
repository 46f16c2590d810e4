//! Neighbourhood move proposals.

use std::cmp::Ordering;

/// Kind of neighbourhood move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveKind {
    /// Move one destination to another position, possibly on another route.
    Relocate,
    /// Swap two destinations on different routes.
    Exchange,
    /// Reverse a segment of one route.
    TwoOpt,
}

/// A proposed change to the working routes.
///
/// Positions are interpreted per kind:
///
/// - `Relocate`: remove `from_route[from_pos]`, then insert it at `to_pos`
///   of `to_route` (for the same route, `to_pos` indexes the route after
///   removal).
/// - `Exchange`: swap `from_route[from_pos]` with `to_route[to_pos]`.
/// - `TwoOpt`: reverse `from_route[from_pos..=to_pos]`; `to_route == from_route`.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    /// Move kind.
    pub kind: MoveKind,
    /// Change in (possibly penalised) cost; negative improves.
    pub delta: f64,
    /// Destination driving the move, used for tie-breaking.
    pub node: usize,
    /// Receiving vehicle, used for tie-breaking.
    pub vehicle: usize,
    /// Source route.
    pub from_route: usize,
    /// Position in the source route.
    pub from_pos: usize,
    /// Target route.
    pub to_route: usize,
    /// Position in the target route.
    pub to_pos: usize,
}

impl Move {
    /// Total order used to pick one move among many: lowest delta, then
    /// lowest node, then lowest vehicle, then kind and positions.
    ///
    /// Distinct moves never compare equal, so a parallel reduction picks the
    /// same move as a sequential scan.
    pub fn priority(a: &Move, b: &Move) -> Ordering {
        a.delta
            .total_cmp(&b.delta)
            .then_with(|| a.node.cmp(&b.node))
            .then_with(|| a.vehicle.cmp(&b.vehicle))
            .then_with(|| a.kind.cmp(&b.kind))
            .then_with(|| {
                (a.from_route, a.from_pos, a.to_route, a.to_pos).cmp(&(
                    b.from_route,
                    b.from_pos,
                    b.to_route,
                    b.to_pos,
                ))
            })
    }

    /// Keeps whichever of `best` and `candidate` has priority.
    pub(crate) fn keep_better(best: &mut Option<Move>, candidate: Move) {
        let better = best
            .as_ref()
            .is_none_or(|b| Move::priority(&candidate, b) == Ordering::Less);
        if better {
            *best = Some(candidate);
        }
    }

    /// Applies the move to a set of routes.
    pub fn apply(&self, routes: &mut [Vec<usize>]) {
        match self.kind {
            MoveKind::Relocate => {
                let node = routes[self.from_route].remove(self.from_pos);
                routes[self.to_route].insert(self.to_pos, node);
            }
            MoveKind::Exchange => {
                let x = routes[self.from_route][self.from_pos];
                let y = routes[self.to_route][self.to_pos];
                routes[self.from_route][self.from_pos] = y;
                routes[self.to_route][self.to_pos] = x;
            }
            MoveKind::TwoOpt => {
                routes[self.from_route][self.from_pos..=self.to_pos].reverse();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(kind: MoveKind, delta: f64, node: usize, vehicle: usize) -> Move {
        Move {
            kind,
            delta,
            node,
            vehicle,
            from_route: 0,
            from_pos: 0,
            to_route: 1,
            to_pos: 0,
        }
    }

    #[test]
    fn test_priority_prefers_delta_then_node_then_vehicle() {
        let a = mv(MoveKind::Relocate, -3.0, 5, 1);
        let b = mv(MoveKind::Relocate, -2.0, 1, 0);
        assert_eq!(Move::priority(&a, &b), Ordering::Less);

        let c = mv(MoveKind::Exchange, -3.0, 4, 1);
        assert_eq!(Move::priority(&c, &a), Ordering::Less);

        let d = mv(MoveKind::TwoOpt, -3.0, 5, 0);
        assert_eq!(Move::priority(&d, &a), Ordering::Less);
    }

    #[test]
    fn test_keep_better() {
        let mut best = None;
        Move::keep_better(&mut best, mv(MoveKind::Relocate, -1.0, 2, 0));
        Move::keep_better(&mut best, mv(MoveKind::Relocate, -1.0, 3, 0));
        assert_eq!(best.as_ref().map(|m| m.node), Some(2));
        Move::keep_better(&mut best, mv(MoveKind::Relocate, -4.0, 9, 0));
        assert_eq!(best.map(|m| m.node), Some(9));
    }

    #[test]
    fn test_apply_relocate_between_routes() {
        let mut routes = vec![vec![1, 2, 3], vec![4]];
        let m = Move {
            kind: MoveKind::Relocate,
            delta: -1.0,
            node: 2,
            vehicle: 1,
            from_route: 0,
            from_pos: 1,
            to_route: 1,
            to_pos: 1,
        };
        m.apply(&mut routes);
        assert_eq!(routes, vec![vec![1, 3], vec![4, 2]]);
    }

    #[test]
    fn test_apply_relocate_within_route() {
        let mut routes = vec![vec![1, 2, 3, 4]];
        let m = Move {
            kind: MoveKind::Relocate,
            delta: -1.0,
            node: 1,
            vehicle: 0,
            from_route: 0,
            from_pos: 0,
            to_route: 0,
            to_pos: 3,
        };
        m.apply(&mut routes);
        assert_eq!(routes, vec![vec![2, 3, 4, 1]]);
    }

    #[test]
    fn test_apply_exchange_and_two_opt() {
        let mut routes = vec![vec![1, 2, 3, 4], vec![5, 6]];
        Move {
            kind: MoveKind::Exchange,
            delta: -1.0,
            node: 2,
            vehicle: 1,
            from_route: 0,
            from_pos: 1,
            to_route: 1,
            to_pos: 0,
        }
        .apply(&mut routes);
        assert_eq!(routes, vec![vec![1, 5, 3, 4], vec![2, 6]]);

        Move {
            kind: MoveKind::TwoOpt,
            delta: -1.0,
            node: 1,
            vehicle: 0,
            from_route: 0,
            from_pos: 0,
            to_route: 0,
            to_pos: 2,
        }
        .apply(&mut routes);
        assert_eq!(routes, vec![vec![3, 5, 1, 4], vec![2, 6]]);
    }
}
