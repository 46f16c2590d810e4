//! Guided local search.
//!
//! # Algorithm
//!
//! 1. Steepest descent on plain distance until no relocate, exchange or
//!    2-opt move improves the current routes.
//! 2. Set `lambda = penalty_factor × cost / arcs` from that local optimum.
//! 3. Repeat until a stopping rule fires:
//!    - penalise every arc of the current routes with maximal utility
//!      `d(i,j) / (1 + p(i,j))`;
//!    - steepest descent on the augmented cost `d(i,j) + lambda × p(i,j)`.
//!
//! Every committed move keeps each route within capacity. The best routes
//! by true distance are recorded whenever a strictly cheaper assignment is
//! reached, so the reported best cost never increases.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its
//! application to the traveling salesman problem", *European Journal of
//! Operational Research* 113(2), 469-499.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use log::{debug, trace};

use super::{CancellationToken, SearchConfig};
use crate::local_search::{best_move, ArcCost, Move, MoveContext};
use crate::models::Termination;
use crate::routing::RoutingModel;

/// Counters describing one improvement run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Guided iterations completed (penalise + descend).
    pub iterations: usize,
    /// Moves committed, including plain-descent moves.
    pub moves_applied: usize,
    /// Times a strictly cheaper best solution was recorded.
    pub improvements: usize,
    /// Bumped once per committed move; evaluators of one round all saw the
    /// same version.
    pub version: u64,
    /// Cost of the constructed routes.
    pub initial_cost: i64,
    /// Cost of the best routes.
    pub best_cost: i64,
    /// Best cost after the initial descent and after each iteration.
    pub best_cost_trace: Vec<i64>,
    /// Time spent improving.
    pub elapsed: Duration,
}

/// Result of an improvement run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best routes found, one per vehicle.
    pub routes: Vec<Vec<usize>>,
    /// Why the search stopped.
    pub termination: Termination,
    /// Run counters.
    pub stats: SearchStats,
}

/// Symmetric arc penalty counts.
#[derive(Debug, Clone)]
struct Penalties {
    size: usize,
    counts: Vec<u32>,
}

impl Penalties {
    fn new(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; size * size],
        }
    }

    fn get(&self, from: usize, to: usize) -> u32 {
        self.counts[from * self.size + to]
    }

    fn bump(&mut self, a: usize, b: usize) {
        self.counts[a * self.size + b] += 1;
        if a != b {
            self.counts[b * self.size + a] += 1;
        }
    }
}

/// Distance plus weighted penalty.
struct PenalizedCost<'a> {
    model: RoutingModel<'a>,
    penalties: &'a Penalties,
    lambda: f64,
}

impl ArcCost for PenalizedCost<'_> {
    fn arc(&self, from: usize, to: usize) -> f64 {
        self.model.distance(from, to) as f64 + self.lambda * f64::from(self.penalties.get(from, to))
    }
}

/// Guided local search over a feasible starting assignment.
///
/// The search exclusively owns its working routes. Each round, move
/// evaluators share a read-only snapshot; the best proposal is then
/// committed by the search loop alone, and only that loop ever writes the
/// best-so-far routes.
pub struct GuidedLocalSearch<'a> {
    model: RoutingModel<'a>,
    config: &'a SearchConfig,
    routes: Vec<Vec<usize>>,
    loads: Vec<i64>,
    cost: i64,
    best_routes: Vec<Vec<usize>>,
    best_cost: i64,
    penalties: Penalties,
    lambda: f64,
    stats: SearchStats,
}

impl<'a> GuidedLocalSearch<'a> {
    /// Prepares a search starting from capacity-feasible routes.
    pub fn new(model: RoutingModel<'a>, routes: Vec<Vec<usize>>, config: &'a SearchConfig) -> Self {
        debug_assert!(model.is_feasible(&routes));
        let loads = routes.iter().map(|r| model.capacity().load(r)).collect();
        let cost = model.total_cost(&routes);
        Self {
            model,
            config,
            best_routes: routes.clone(),
            routes,
            loads,
            cost,
            best_cost: cost,
            penalties: Penalties::new(model.problem().node_count()),
            lambda: 0.0,
            stats: SearchStats {
                initial_cost: cost,
                best_cost: cost,
                ..SearchStats::default()
            },
        }
    }

    /// Runs until the deadline, cancellation, the iteration cap, or
    /// convergence, and returns the best routes seen.
    pub fn run(self, cancel: &CancellationToken) -> SearchResult {
        let deadline = self.config.time_limit.map(|limit| Instant::now() + limit);
        self.run_until(deadline, cancel)
    }

    /// Like [`run`](Self::run) with an explicit deadline.
    pub fn run_until(mut self, deadline: Option<Instant>, cancel: &CancellationToken) -> SearchResult {
        let started = Instant::now();

        if let Some(termination) = self.descend(deadline, cancel) {
            return self.finish(termination, started);
        }
        self.stats.best_cost_trace.push(self.best_cost);

        let arcs = self.arcs().len();
        if arcs == 0 || self.cost == 0 || self.config.penalty_factor <= 0.0 {
            return self.finish(Termination::Converged, started);
        }
        self.lambda = self.config.penalty_factor * self.cost as f64 / arcs as f64;
        debug!("local optimum {} over {arcs} arcs, lambda {:.3}", self.cost, self.lambda);

        let mut no_improve = 0;
        loop {
            if let Some(termination) = interrupted(deadline, cancel) {
                return self.finish(termination, started);
            }
            if self.stats.iterations >= self.config.max_iterations {
                return self.finish(Termination::IterationLimit, started);
            }
            if no_improve >= self.config.max_no_improve {
                return self.finish(Termination::Converged, started);
            }

            self.stats.iterations += 1;
            let best_before = self.best_cost;
            self.penalize();
            let stopped = self.descend(deadline, cancel);

            if self.best_cost < best_before {
                no_improve = 0;
            } else {
                no_improve += 1;
            }
            self.stats.best_cost_trace.push(self.best_cost);

            if let Some(termination) = stopped {
                return self.finish(termination, started);
            }
        }
    }

    /// Commits best improving moves on the augmented cost until none is left.
    fn descend(&mut self, deadline: Option<Instant>, cancel: &CancellationToken) -> Option<Termination> {
        loop {
            if let Some(termination) = interrupted(deadline, cancel) {
                return Some(termination);
            }
            let proposal = {
                let cost = PenalizedCost {
                    model: self.model,
                    penalties: &self.penalties,
                    lambda: self.lambda,
                };
                let snapshot = MoveContext {
                    routes: &self.routes,
                    loads: &self.loads,
                    depot: self.model.depot(),
                    capacity: *self.model.capacity(),
                    cost: &cost,
                };
                best_move(&snapshot, self.config.parallel)
            };
            match proposal {
                Some(mv) => self.commit(&mv),
                None => return None,
            }
        }
    }

    fn commit(&mut self, mv: &Move) {
        mv.apply(&mut self.routes);
        let capacity = self.model.capacity();
        self.loads[mv.from_route] = capacity.load(&self.routes[mv.from_route]);
        self.loads[mv.to_route] = capacity.load(&self.routes[mv.to_route]);
        self.cost = self.model.total_cost(&self.routes);
        self.stats.moves_applied += 1;
        self.stats.version += 1;
        debug_assert!(self.model.is_feasible(&self.routes));
        trace!(
            "v{} {:?} node {} delta {:.3} cost {}",
            self.stats.version,
            mv.kind,
            mv.node,
            mv.delta,
            self.cost
        );

        if self.cost < self.best_cost {
            self.best_cost = self.cost;
            self.best_routes.clone_from(&self.routes);
            self.stats.improvements += 1;
        }
    }

    /// Undirected arcs of the current routes, depot legs included.
    fn arcs(&self) -> BTreeSet<(usize, usize)> {
        let depot = self.model.depot();
        let mut arcs = BTreeSet::new();
        for route in self.routes.iter().filter(|r| !r.is_empty()) {
            let path = std::iter::once(depot)
                .chain(route.iter().copied())
                .chain(std::iter::once(depot));
            let nodes: Vec<usize> = path.collect();
            for w in nodes.windows(2) {
                arcs.insert((w[0].min(w[1]), w[0].max(w[1])));
            }
        }
        arcs
    }

    /// Penalises the current arcs of maximal utility.
    fn penalize(&mut self) {
        let utilities: Vec<((usize, usize), f64)> = self
            .arcs()
            .into_iter()
            .map(|(a, b)| {
                let utility = self.model.distance(a, b) as f64
                    / (1.0 + f64::from(self.penalties.get(a, b)));
                ((a, b), utility)
            })
            .collect();
        let max = utilities
            .iter()
            .map(|&(_, u)| u)
            .fold(f64::NEG_INFINITY, f64::max);
        for &((a, b), utility) in &utilities {
            if utility >= max {
                self.penalties.bump(a, b);
            }
        }
    }

    fn finish(mut self, termination: Termination, started: Instant) -> SearchResult {
        self.stats.best_cost = self.best_cost;
        self.stats.elapsed = started.elapsed();
        debug!(
            "search stopped ({termination:?}) after {} iterations, {} moves: cost {} -> {}",
            self.stats.iterations, self.stats.moves_applied, self.stats.initial_cost, self.best_cost
        );
        SearchResult {
            routes: self.best_routes,
            termination,
            stats: self.stats,
        }
    }
}

fn interrupted(deadline: Option<Instant>, cancel: &CancellationToken) -> Option<Termination> {
    if cancel.is_cancelled() {
        Some(Termination::Cancelled)
    } else if deadline.is_some_and(|d| Instant::now() >= d) {
        Some(Termination::TimeLimit)
    } else {
        None
    }
}
