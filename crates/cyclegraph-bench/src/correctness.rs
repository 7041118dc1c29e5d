//! Post-operation invariant checkers for correctness validation.
//!
//! Each checker returns `Err` with a human-readable reason on the first
//! violation it finds.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use cyclegraph_core::{CycleDetected, Detector, Graph};
use petgraph::algo::is_cyclic_directed;

fn has_edge<N: Eq + Hash>(graph: &Graph<N>, from: &N, to: &N) -> bool {
    graph.successors(from).any(|s| s == to)
}

fn positions<N: Eq + Hash>(nodes: &[N]) -> HashMap<&N, usize> {
    nodes.iter().enumerate().map(|(i, n)| (n, i)).collect()
}

/// Runs every detector plus petgraph's `is_cyclic_directed` and verifies
/// they agree. Returns the shared verdict.
pub fn check_detectors_agree<N: Eq + Hash + Clone>(graph: &Graph<N>) -> Result<bool, String> {
    let oracle = is_cyclic_directed(&graph.to_digraph());
    for detector in Detector::ALL {
        let verdict = detector.has_cycle(graph);
        if verdict != oracle {
            return Err(format!(
                "{detector} detector says cyclic={verdict}, petgraph says cyclic={oracle}"
            ));
        }
    }
    Ok(oracle)
}

/// Verifies a topological order:
/// - every universe node appears exactly once
/// - every edge points from an earlier to a later position
pub fn check_topological_order<N: Eq + Hash + Debug>(
    graph: &Graph<N>,
    order: &[N],
) -> Result<(), String> {
    if order.len() != graph.node_count() {
        return Err(format!(
            "order has {} nodes, graph has {}",
            order.len(),
            graph.node_count()
        ));
    }
    let position = positions(order);
    if position.len() != order.len() {
        return Err("order repeats a node".to_owned());
    }
    for node in graph.nodes() {
        if !position.contains_key(node) {
            return Err(format!("node {node:?} missing from order"));
        }
    }
    for (from, to) in graph.edges() {
        if position[from] >= position[to] {
            return Err(format!("edge {from:?} -> {to:?} points backwards"));
        }
    }
    Ok(())
}

/// Verifies the partial result of a failed ordering:
/// - emitted and remaining partition the universe
/// - emitted nodes respect every edge between them
/// - every remaining node has a predecessor that also remains
pub fn check_cycle_detected<N: Eq + Hash + Debug>(
    graph: &Graph<N>,
    detected: &CycleDetected<N>,
) -> Result<(), String> {
    if detected.remaining.is_empty() {
        return Err("cycle reported with nothing remaining".to_owned());
    }
    if detected.node_count() != graph.node_count() {
        return Err(format!(
            "emitted + remaining = {}, graph has {}",
            detected.node_count(),
            graph.node_count()
        ));
    }
    let emitted = positions(&detected.emitted);
    let remaining: HashSet<&N> = detected.remaining.iter().collect();
    if emitted.len() + remaining.len() != graph.node_count() {
        return Err("emitted and remaining overlap or repeat".to_owned());
    }
    let mut has_remaining_predecessor: HashSet<&N> = HashSet::new();
    for (from, to) in graph.edges() {
        match (emitted.get(from), emitted.get(to)) {
            (Some(f), Some(t)) if f >= t => {
                return Err(format!("emitted edge {from:?} -> {to:?} points backwards"));
            }
            (None, Some(_)) => {
                return Err(format!("{to:?} emitted before its predecessor {from:?}"));
            }
            (None, None) => {
                has_remaining_predecessor.insert(to);
            }
            (Some(_), Some(_) | None) => {}
        }
    }
    for node in &detected.remaining {
        if !has_remaining_predecessor.contains(node) {
            return Err(format!("remaining node {node:?} has no remaining predecessor"));
        }
    }
    Ok(())
}

/// Verifies a reported cycle is a closed walk `[v, ..., v]`:
/// - at least two entries, first equals last
/// - consecutive entries are joined by an edge
/// - no node repeats before the closing entry
pub fn check_closed_walk<N: Eq + Hash + Debug>(
    graph: &Graph<N>,
    walk: &[N],
) -> Result<(), String> {
    let (Some(first), Some(last)) = (walk.first(), walk.last()) else {
        return Err("walk is empty".to_owned());
    };
    if walk.len() < 2 || first != last {
        return Err(format!("walk {walk:?} is not closed"));
    }
    for pair in walk.windows(2) {
        if !has_edge(graph, &pair[0], &pair[1]) {
            return Err(format!("no edge {:?} -> {:?}", pair[0], pair[1]));
        }
    }
    let interior = &walk[..walk.len() - 1];
    if positions(interior).len() != interior.len() {
        return Err(format!("walk {walk:?} repeats a node"));
    }
    Ok(())
}

/// Verifies an elementary cycle listing:
/// - each cycle has at least two distinct nodes and every edge, closing
///   edge included, exists
/// - each cycle starts at its earliest member in universe order
/// - no cycle is listed twice
pub fn check_elementary_cycles<N: Eq + Hash + Clone + Debug>(
    graph: &Graph<N>,
    cycles: &[Vec<N>],
) -> Result<(), String> {
    let universe = positions(graph.nodes());
    let mut seen: HashSet<&[N]> = HashSet::new();
    for cycle in cycles {
        if cycle.len() < 2 {
            return Err(format!("cycle {cycle:?} is shorter than two nodes"));
        }
        if positions(cycle).len() != cycle.len() {
            return Err(format!("cycle {cycle:?} repeats a node"));
        }
        let closed: Vec<N> = cycle.iter().chain(cycle.first()).cloned().collect();
        for pair in closed.windows(2) {
            if !has_edge(graph, &pair[0], &pair[1]) {
                return Err(format!("cycle {cycle:?} uses missing edge {:?} -> {:?}", pair[0], pair[1]));
            }
        }
        let rank = |n: &N| universe.get(n).copied().unwrap_or(usize::MAX);
        if cycle.iter().any(|n| rank(n) < rank(&cycle[0])) {
            return Err(format!("cycle {cycle:?} is not rooted at its earliest node"));
        }
        if !seen.insert(cycle.as_slice()) {
            return Err(format!("cycle {cycle:?} listed twice"));
        }
    }
    Ok(())
}

/// Verifies a weakly connected component split:
/// - components partition the universe
/// - no edge joins two different components
pub fn check_components<N: Eq + Hash + Debug>(
    graph: &Graph<N>,
    components: &[Vec<N>],
) -> Result<(), String> {
    let mut owner: HashMap<&N, usize> = HashMap::new();
    for (i, component) in components.iter().enumerate() {
        if component.is_empty() {
            return Err(format!("component {i} is empty"));
        }
        for node in component {
            if owner.insert(node, i).is_some() {
                return Err(format!("node {node:?} appears in two components"));
            }
        }
    }
    if owner.len() != graph.node_count() {
        return Err(format!(
            "components cover {} nodes, graph has {}",
            owner.len(),
            graph.node_count()
        ));
    }
    for (from, to) in graph.edges() {
        if owner.get(from) != owner.get(to) {
            return Err(format!("edge {from:?} -> {to:?} crosses components"));
        }
    }
    Ok(())
}
