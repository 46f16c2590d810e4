//! Solve driver: feasibility pre-checks, construction, improvement and
//! extraction.

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use super::{CancellationToken, GuidedLocalSearch, SearchConfig, SearchStats};
use crate::constructive::{
    exact_packing, first_fit_decreasing, insert_unassigned, path_cheapest_arc, Packing,
};
use crate::extract::extract_solution;
use crate::models::{Problem, Solution};
use crate::routing::{Assignment, RoutingModel};

/// Stage of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing done yet.
    Initial,
    /// Building a first feasible assignment.
    Constructing,
    /// Guided local search over a feasible assignment.
    Improving,
    /// A solution was produced.
    Solved,
    /// No feasible assignment exists, or none was found in time.
    Infeasible,
}

/// Why a well-formed problem has no solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// The fleet cannot carry everything that was ordered.
    AggregateDemandExceedsCapacity {
        /// Sum of demands.
        demand: i64,
        /// Sum of capacities.
        capacity: i64,
    },
    /// A single destination is larger than every vehicle.
    NodeExceedsEveryCapacity {
        /// Offending destination.
        node: usize,
        /// Its demand.
        demand: i64,
        /// Largest vehicle capacity.
        capacity: i64,
    },
    /// Exhaustive packing proved that no assignment respects every
    /// capacity.
    NoFeasibleAssignment {
        /// Destinations the heuristics left over.
        unassigned: Vec<usize>,
    },
    /// The budget ran out (or the solve was cancelled) before a feasible
    /// assignment was found or ruled out.
    Undecided {
        /// Destinations the heuristics left over.
        unassigned: Vec<usize>,
    },
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AggregateDemandExceedsCapacity { demand, capacity } => {
                write!(f, "total demand {demand} exceeds total capacity {capacity}")
            }
            Self::NodeExceedsEveryCapacity {
                node,
                demand,
                capacity,
            } => write!(
                f,
                "node {node} demands {demand}, more than the largest vehicle ({capacity})"
            ),
            Self::NoFeasibleAssignment { unassigned } => {
                write!(f, "nodes {unassigned:?} cannot be placed within capacity")
            }
            Self::Undecided { unassigned } => {
                write!(f, "ran out of time placing nodes {unassigned:?}")
            }
        }
    }
}

/// Terminal state of a solve.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    /// A feasible solution, possibly cut short by the time budget.
    Solved {
        /// The extracted solution.
        solution: Solution,
        /// Improvement counters.
        stats: SearchStats,
    },
    /// No solution; nothing should be dispatched.
    Infeasible {
        /// Why there is no solution.
        reason: InfeasibleReason,
        /// Last phase entered before giving up: [`SearchPhase::Initial`]
        /// for the pre-checks, [`SearchPhase::Constructing`] otherwise.
        detected_in: SearchPhase,
    },
}

impl SolveOutcome {
    /// The solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved { solution, .. } => Some(solution),
            Self::Infeasible { .. } => None,
        }
    }

    /// The improvement counters, if the search got that far.
    pub fn stats(&self) -> Option<&SearchStats> {
        match self {
            Self::Solved { stats, .. } => Some(stats),
            Self::Infeasible { .. } => None,
        }
    }

    /// Why there is no solution, if there is none.
    pub fn reason(&self) -> Option<&InfeasibleReason> {
        match self {
            Self::Solved { .. } => None,
            Self::Infeasible { reason, .. } => Some(reason),
        }
    }

    /// Terminal phase: [`SearchPhase::Solved`] or [`SearchPhase::Infeasible`].
    pub fn phase(&self) -> SearchPhase {
        match self {
            Self::Solved { .. } => SearchPhase::Solved,
            Self::Infeasible { .. } => SearchPhase::Infeasible,
        }
    }

    /// Returns `true` for the "no solution" outcome.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, Self::Infeasible { .. })
    }
}

/// Capacitated routing solver: cheapest-arc construction followed by
/// guided local search.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Node, Problem, Vehicle};
/// use u_cvrp::search::{SearchConfig, Solver};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 2, 2, 9],
///     vec![2, 0, 1, 9],
///     vec![2, 1, 0, 9],
///     vec![9, 9, 9, 0],
/// ]).unwrap();
/// let problem = Problem::new(
///     0,
///     vec![Node::depot(0), Node::new(1, 5), Node::new(2, 5), Node::new(3, 8)],
///     vec![Vehicle::new(0, 10), Vehicle::new(1, 10)],
///     dm,
/// ).unwrap();
///
/// let solver = Solver::new(SearchConfig::default().without_time_limit().with_max_iterations(50));
/// let outcome = solver.solve(&problem);
/// let solution = outcome.solution().unwrap();
/// assert_eq!(solution.num_served(), 3);
/// assert_eq!(solution.total_distance(), 5 + 18);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Solves a problem within the configured budget.
    pub fn solve(&self, problem: &Problem) -> SolveOutcome {
        self.solve_with_cancel(problem, &CancellationToken::new())
    }

    /// Solves a problem, stopping early if `cancel` is raised.
    pub fn solve_with_cancel(&self, problem: &Problem, cancel: &CancellationToken) -> SolveOutcome {
        let deadline = self.config.time_limit.map(|limit| Instant::now() + limit);
        let model = RoutingModel::new(problem);
        enter(SearchPhase::Initial);
        debug!(
            "{} destinations, {} vehicles",
            problem.num_destinations(),
            problem.vehicle_count()
        );

        if let Some(reason) = precheck(problem) {
            return infeasible(reason, SearchPhase::Initial);
        }

        enter(SearchPhase::Constructing);
        let interrupted =
            || cancel.is_cancelled() || deadline.is_some_and(|d| Instant::now() >= d);
        let routes = match construct(&model, interrupted) {
            Ok(routes) => routes,
            Err(reason) => return infeasible(reason, SearchPhase::Constructing),
        };

        enter(SearchPhase::Improving);
        let result = GuidedLocalSearch::new(model, routes, &self.config).run_until(deadline, cancel);

        enter(SearchPhase::Solved);
        let assignment = Assignment::from_routes(problem.manager(), &result.routes);
        let solution = extract_solution(&model, &assignment, result.termination);
        info!(
            "solved: distance {} over {} vehicles ({:?}, {} iterations)",
            solution.total_distance(),
            solution.num_used_vehicles(),
            result.termination,
            result.stats.iterations
        );
        SolveOutcome::Solved {
            solution,
            stats: result.stats,
        }
    }
}

/// Necessary feasibility conditions, checked before any search.
pub fn precheck(problem: &Problem) -> Option<InfeasibleReason> {
    let demand = problem.total_demand();
    let capacity = problem.total_capacity();
    if demand > capacity {
        return Some(InfeasibleReason::AggregateDemandExceedsCapacity { demand, capacity });
    }
    let largest = problem.max_capacity();
    problem
        .destinations()
        .find(|&n| problem.demand(n) > largest)
        .map(|node| InfeasibleReason::NodeExceedsEveryCapacity {
            node,
            demand: problem.demand(node),
            capacity: largest,
        })
}

/// Builds a feasible starting assignment: cheapest-arc extension, then
/// cheapest insertion of leftovers, then first-fit-decreasing packing, then
/// exact packing until `interrupted` fires.
fn construct<F>(model: &RoutingModel<'_>, interrupted: F) -> Result<Vec<Vec<usize>>, InfeasibleReason>
where
    F: Fn() -> bool,
{
    let mut construction = path_cheapest_arc(model);
    if construction.is_complete() {
        return Ok(construction.routes);
    }
    debug!(
        "cheapest arc left {} nodes, trying insertion",
        construction.unassigned.len()
    );
    insert_unassigned(model, &mut construction);
    if construction.is_complete() {
        return Ok(construction.routes);
    }
    debug!(
        "insertion left {} nodes, falling back to packing",
        construction.unassigned.len()
    );
    if let Some(routes) = first_fit_decreasing(model) {
        return Ok(routes);
    }
    debug!("first fit failed, searching packings exhaustively");
    let unassigned = construction.unassigned;
    match exact_packing(model, interrupted) {
        Packing::Packed(routes) => Ok(routes),
        Packing::Impossible => Err(InfeasibleReason::NoFeasibleAssignment { unassigned }),
        Packing::Interrupted => Err(InfeasibleReason::Undecided { unassigned }),
    }
}

fn enter(phase: SearchPhase) {
    debug!("phase: {phase:?}");
}

fn infeasible(reason: InfeasibleReason, detected_in: SearchPhase) -> SolveOutcome {
    enter(SearchPhase::Infeasible);
    info!("no solution: {reason}");
    SolveOutcome::Infeasible {
        reason,
        detected_in,
    }
}
