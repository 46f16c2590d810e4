//! Inter-route exchange (swap) operator.
//!
//! # Algorithm
//!
//! Swaps a destination `x` on route A with a destination `y` on a later
//! route B when both vehicles stay within capacity afterwards:
//!
//! ```text
//! delta = c(pa,y) + c(y,na) - c(pa,x) - c(x,na)
//!       + c(pb,x) + c(x,nb) - c(pb,y) - c(y,nb)
//! ```
//!
//! Only pairs with B after A are generated from A, so each swap is
//! evaluated once per pass.
//!
//! # Complexity
//!
//! O(n) per source position, O(n²) per full pass.

use super::{ArcCost, Move, MoveContext, MoveKind, IMPROVEMENT_EPSILON};

/// Best improving swap of the destination at `routes[route][pos]` with a
/// destination on a later route.
pub fn best_exchange_from<C: ArcCost>(
    ctx: &MoveContext<'_, C>,
    route: usize,
    pos: usize,
) -> Option<Move> {
    let cost = ctx.cost;
    let capacity = &ctx.capacity;
    let x = ctx.routes[route][pos];
    let pa = ctx.prev(route, pos);
    let na = ctx.next(route, pos);
    let dx = capacity.transit(x);

    let mut best = None;
    for to_route in (route + 1)..ctx.routes.len() {
        for (to_pos, &y) in ctx.routes[to_route].iter().enumerate() {
            let dy = capacity.transit(y);
            if ctx.loads[route] - dx + dy > capacity.capacity(route)
                || ctx.loads[to_route] - dy + dx > capacity.capacity(to_route)
            {
                continue;
            }
            let pb = ctx.prev(to_route, to_pos);
            let nb = ctx.next(to_route, to_pos);
            let delta = cost.arc(pa, y) + cost.arc(y, na) - cost.arc(pa, x) - cost.arc(x, na)
                + cost.arc(pb, x)
                + cost.arc(x, nb)
                - cost.arc(pb, y)
                - cost.arc(y, nb);
            if delta < -IMPROVEMENT_EPSILON {
                Move::keep_better(
                    &mut best,
                    Move {
                        kind: MoveKind::Exchange,
                        delta,
                        node: x,
                        vehicle: to_route,
                        from_route: route,
                        from_pos: pos,
                        to_route,
                        to_pos,
                    },
                );
            }
        }
    }
    best
}
