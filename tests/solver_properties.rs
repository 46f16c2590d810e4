use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_cvrp::constructive::{exact_packing, Packing};
use u_cvrp::distance::DistanceMatrix;
use u_cvrp::extract::{itineraries, Summary};
use u_cvrp::models::{Node, Problem, Solution, Vehicle};
use u_cvrp::routing::RoutingModel;
use u_cvrp::search::{InfeasibleReason, SearchConfig, SearchPhase, SolveOutcome, Solver};

fn build(points: &[(i64, i64)], demands: &[i64], capacities: &[i64]) -> Problem {
    let rows = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| (a.0 - b.0).abs() + (a.1 - b.1).abs())
                .collect()
        })
        .collect();
    let nodes = std::iter::once(Node::depot(0))
        .chain(
            demands
                .iter()
                .enumerate()
                .map(|(i, &d)| Node::new(i + 1, d)),
        )
        .collect();
    let vehicles = capacities
        .iter()
        .enumerate()
        .map(|(i, &c)| Vehicle::new(i, c))
        .collect();
    let dm = DistanceMatrix::from_rows(rows).expect("valid matrix");
    Problem::new(0, nodes, vehicles, dm).expect("valid problem")
}

fn bounded(iterations: usize) -> SearchConfig {
    SearchConfig::default()
        .without_time_limit()
        .with_max_iterations(iterations)
}

fn assert_valid(problem: &Problem, solution: &Solution) {
    assert_eq!(solution.num_routes(), problem.vehicle_count());

    let mut seen = vec![0_usize; problem.node_count()];
    for (v, route) in solution.routes().iter().enumerate() {
        assert_eq!(route.vehicle_id(), v);
        assert!(route.total_load() <= problem.vehicle(v).capacity());

        let mut load = 0;
        for visit in route.visits() {
            assert_ne!(visit.node_id, problem.depot());
            seen[visit.node_id] += 1;
            load += problem.demand(visit.node_id);
            assert_eq!(visit.load_after, load);
        }
        assert_eq!(route.total_load(), load);

        let expected: i64 = route
            .node_sequence(problem.depot())
            .windows(2)
            .map(|w| problem.distances().get(w[0], w[1]))
            .sum();
        assert_eq!(route.total_distance(), expected);
    }
    for node in problem.destinations() {
        assert_eq!(seen[node], 1, "node {node} served {} times", seen[node]);
    }
    assert_eq!(solution.num_served(), problem.num_destinations());
    assert_eq!(solution.total_load(), problem.total_demand());
}

fn instance() -> impl Strategy<Value = (Vec<(i64, i64)>, Vec<i64>, Vec<i64>)> {
    (1_usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec((0_i64..50, 0_i64..50), n + 1),
            prop::collection::vec(0_i64..10, n),
            prop::collection::vec(5_i64..30, 1..4),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn solved_outcomes_are_feasible_and_consistent((points, demands, caps) in instance()) {
        let problem = build(&points, &demands, &caps);
        match Solver::new(bounded(20)).solve(&problem) {
            SolveOutcome::Solved { solution, stats } => {
                assert_valid(&problem, &solution);
                prop_assert_eq!(solution.total_distance(), stats.best_cost);
                prop_assert!(stats.best_cost <= stats.initial_cost);
                prop_assert!(stats.best_cost_trace.windows(2).all(|w| w[1] <= w[0]));
                let summary = Summary::new(&problem, &solution);
                prop_assert_eq!(summary.total_load, summary.total_demand);
            }
            SolveOutcome::Infeasible { reason, detected_in } => match reason {
                InfeasibleReason::AggregateDemandExceedsCapacity { demand, capacity } => {
                    prop_assert_eq!(detected_in, SearchPhase::Initial);
                    prop_assert!(demand > capacity);
                }
                InfeasibleReason::NodeExceedsEveryCapacity { node, demand, capacity } => {
                    prop_assert_eq!(detected_in, SearchPhase::Initial);
                    prop_assert_eq!(problem.demand(node), demand);
                    prop_assert!(caps.iter().all(|&c| c < demand));
                    prop_assert_eq!(capacity, problem.max_capacity());
                }
                InfeasibleReason::NoFeasibleAssignment { unassigned } => {
                    prop_assert_eq!(detected_in, SearchPhase::Constructing);
                    prop_assert!(!unassigned.is_empty());
                    prop_assert_eq!(
                        exact_packing(&RoutingModel::new(&problem), || false),
                        Packing::Impossible
                    );
                }
                InfeasibleReason::Undecided { .. } => {
                    prop_assert!(false, "no deadline, so packing always decides");
                }
            },
        }
    }

    #[test]
    fn bounded_search_is_deterministic((points, demands, caps) in instance()) {
        let problem = build(&points, &demands, &caps);
        let parallel = Solver::new(bounded(15)).solve(&problem);
        let again = Solver::new(bounded(15)).solve(&problem);
        let sequential = Solver::new(bounded(15).with_parallel(false)).solve(&problem);
        prop_assert_eq!(parallel.solution(), again.solution());
        prop_assert_eq!(parallel.solution(), sequential.solution());
    }

    #[test]
    fn generous_fleet_always_solves((points, demands) in (1_usize..10).prop_flat_map(|n| (
        prop::collection::vec((0_i64..30, 0_i64..30), n + 1),
        prop::collection::vec(0_i64..10, n),
    ))) {
        let capacity = demands.iter().sum::<i64>().max(1);
        let problem = build(&points, &demands, &[capacity]);
        let outcome = Solver::new(bounded(10)).solve(&problem);
        let solution = outcome.solution().expect("one vehicle can carry everything");
        assert_valid(&problem, solution);
    }
}

#[test]
fn demand_of_eight_travels_alone() {
    let dm = DistanceMatrix::from_rows(vec![
        vec![0, 3, 4, 5],
        vec![3, 0, 2, 4],
        vec![4, 2, 0, 3],
        vec![5, 4, 3, 0],
    ])
    .expect("valid matrix");
    let problem = Problem::new(
        0,
        vec![
            Node::depot(0),
            Node::new(1, 5),
            Node::new(2, 5),
            Node::new(3, 8),
        ],
        vec![Vehicle::new(0, 10), Vehicle::new(1, 10)],
        dm,
    )
    .expect("valid problem");
    let outcome = Solver::new(bounded(50)).solve(&problem);
    let solution = outcome.solution().expect("feasible");
    assert_valid(&problem, solution);
    let alone = solution
        .routes()
        .iter()
        .find(|r| r.node_ids().contains(&3))
        .expect("node 3 served");
    assert_eq!(alone.node_ids(), vec![3]);
    assert_eq!(solution.total_distance(), 19);
}

#[test]
fn oversized_destination_is_reported() {
    let problem = build(&[(0, 0), (1, 0), (2, 0)], &[3, 12], &[10, 10, 10]);
    let outcome = Solver::new(SearchConfig::default()).solve(&problem);
    match outcome {
        SolveOutcome::Infeasible {
            reason: InfeasibleReason::NodeExceedsEveryCapacity { node, .. },
            detected_in: SearchPhase::Initial,
        } => assert_eq!(node, 2),
        other => panic!("expected infeasible, got {other:?}"),
    }
}

#[test]
fn tight_split_is_found_whatever_the_order() {
    for demands in [[4, 4, 3, 3, 2, 2], [2, 2, 3, 3, 4, 4], [4, 3, 2, 4, 3, 2]] {
        let points: Vec<(i64, i64)> = (0..=6).map(|x| (x, 0)).collect();
        let problem = build(&points, &demands, &[9, 9]);
        let outcome = Solver::new(bounded(20)).solve(&problem);
        let solution = outcome.solution().expect("{4, 3, 2} fits each vehicle");
        assert_valid(&problem, solution);
    }
}

#[test]
fn no_destinations_gives_empty_routes() {
    let problem = build(&[(0, 0)], &[], &[10, 10]);
    let outcome = Solver::new(SearchConfig::default()).solve(&problem);
    let solution = outcome.solution().expect("trivially feasible");
    assert!(solution.routes().iter().all(|r| r.is_empty()));
    assert_eq!(solution.total_distance(), 0);
    assert_eq!(itineraries(&problem, solution).len(), 2);
}

#[test]
fn random_instances_under_time_budget() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let n = rng.random_range(20..40);
        let points: Vec<(i64, i64)> = (0..=n)
            .map(|_| (rng.random_range(0..100), rng.random_range(0..100)))
            .collect();
        let demands: Vec<i64> = (0..n).map(|_| rng.random_range(1..10)).collect();
        let total: i64 = demands.iter().sum();
        let caps = vec![total / 3 + 10; 4];
        let problem = build(&points, &demands, &caps);

        let config = SearchConfig::default().with_time_limit(std::time::Duration::from_millis(100));
        let outcome = Solver::new(config).solve(&problem);
        let solution = outcome.solution().expect("fleet has slack");
        assert_valid(&problem, solution);
    }
}
