//! Problem fixtures shared by unit tests.

use crate::distance::DistanceMatrix;
use crate::models::{Node, Problem, Vehicle};

/// Builds a problem with the depot at node 0.
///
/// `demands` lists destinations only; node `i + 1` gets `demands[i]`.
pub(crate) fn problem(demands: &[i64], capacities: &[i64], rows: Vec<Vec<i64>>) -> Problem {
    let nodes = std::iter::once(Node::depot(0))
        .chain(
            demands
                .iter()
                .enumerate()
                .map(|(i, &d)| Node::new(i + 1, d).with_address(format!("addr-{}", i + 1))),
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

/// Depot at x = 0 and destinations at x = 1, 2, ..., distance = |xi - xj|.
pub(crate) fn line_problem(demands: &[i64], capacities: &[i64]) -> Problem {
    let n = demands.len() + 1;
    let rows = (0..n)
        .map(|i| (0..n).map(|j| (i as i64 - j as i64).abs()).collect())
        .collect();
    problem(demands, capacities, rows)
}

/// Destinations on a grid around a central depot, Manhattan distances.
pub(crate) fn grid_problem(side: i64, demand: i64, capacities: &[i64]) -> Problem {
    let mut points = vec![(side / 2, side / 2)];
    for x in 0..side {
        for y in 0..side {
            if (x, y) != (side / 2, side / 2) {
                points.push((x, y));
            }
        }
    }
    let rows = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| (a.0 - b.0).abs() + (a.1 - b.1).abs())
                .collect()
        })
        .collect();
    let demands = vec![demand; points.len() - 1];
    problem(&demands, capacities, rows)
}
