//! Cycle reconstruction and elementary-cycle enumeration.
//!
//! # Reconstruction
//!
//! [`find_cycle`] runs the three-color DFS while recording, for every node,
//! the node it was first discovered from (the parent map). When the walk meets
//! a back edge `u → v`, it sets `parent[v] = u` and stops with `v` as the
//! cycle-start marker. Following parents from `v` climbs the DFS tree through
//! `u` and back up to `v`; reversing that walk and closing it with `v` gives
//! the cycle `[v, ..., u, v]` in edge order.
//!
//! # Enumeration
//!
//! [`enumerate_cycles`] lists every elementary cycle with a path-based search
//! rooted at each node in turn. The search from a root only enters nodes that
//! come later in universe order, so each cycle is reported exactly once,
//! starting at its earliest node.
//!
//! Before searching, the graph is split into strongly connected components.
//! A root alone in its component is skipped outright, and the search from any
//! other root only enters nodes of the same component that can still reach
//! the root through later nodes. Branches that could never close a cycle are
//! never walked, so acyclic regions cost linear time no matter the cap.
//!
//! Enumeration is **exponential in the worst case**: a graph with many
//! overlapping cycles can have more elementary cycles than any caller wants to
//! hold in memory. It is a diagnostic tool. Use [`enumerate_cycles_capped`]
//! on graphs whose shape is not under your control.
use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::Graph;
use super::dfs::Color;
use super::iterative::Frame;

// ---------------------------------------------------------------------------
// Reconstruction
// ---------------------------------------------------------------------------

/// Finds one cycle in `graph`, if any exists.
///
/// The returned sequence is a closed walk: consecutive elements are joined by
/// edges of the graph and the first element equals the last. A self-loop on
/// `n` yields `[n, n]`.
///
/// Returns `None` when the graph is acyclic. The traversal order matches
/// [`super::has_cycle`], and the walk uses an explicit stack, so arbitrarily
/// deep graphs are safe.
pub fn find_cycle<N: Clone>(graph: &Graph<N>) -> Option<Vec<N>> {
    let mut search = CycleSearch::new(graph.node_count());

    for start in 0..graph.node_count() {
        if search.colors[start] != Color::Unvisited {
            continue;
        }
        if let Some(marker) = search.walk(graph, start) {
            let cycle: Vec<N> = search
                .reconstruct(marker)
                .into_iter()
                .map(|position| graph.node_at(position).clone())
                .collect();
            tracing::debug!(
                nodes = graph.node_count(),
                length = cycle.len() - 1,
                "cycle found"
            );
            return Some(cycle);
        }
    }

    tracing::debug!(nodes = graph.node_count(), "no cycle found");
    None
}

/// Per-query state for [`find_cycle`]: colors, parent map and the DFS path.
struct CycleSearch {
    colors: Vec<Color>,
    parent: Vec<Option<usize>>,
    stack: Vec<Frame>,
}

impl CycleSearch {
    fn new(node_count: usize) -> Self {
        Self {
            colors: vec![Color::Unvisited; node_count],
            parent: vec![None; node_count],
            stack: Vec::new(),
        }
    }

    /// Walks everything reachable from `start`.
    ///
    /// Returns the target of the first back edge, with its parent entry
    /// pointing at the back edge's source.
    fn walk<N>(&mut self, graph: &Graph<N>, start: usize) -> Option<usize> {
        self.colors[start] = Color::InProgress;
        self.stack.push(Frame::new(start));

        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            let Some(&successor) = graph.successor_positions(node).get(frame.next) else {
                self.colors[node] = Color::Done;
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            match self.colors[successor] {
                Color::InProgress => {
                    self.parent[successor] = Some(node);
                    return Some(successor);
                }
                Color::Unvisited => {
                    self.parent[successor] = Some(node);
                    self.colors[successor] = Color::InProgress;
                    self.stack.push(Frame::new(successor));
                }
                Color::Done => {}
            }
        }
        None
    }

    /// Materializes the cycle through `marker` as `[marker, ..., marker]`.
    fn reconstruct(&self, marker: usize) -> Vec<usize> {
        let mut cycle = vec![marker];
        let mut current = self.parent[marker];
        while let Some(node) = current {
            if node == marker {
                break;
            }
            cycle.push(node);
            current = self.parent[node];
        }
        cycle.push(marker);
        cycle.reverse();
        cycle
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Result of a capped cycle enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEnumeration<N> {
    /// Elementary cycles found, in discovery order.
    ///
    /// Each cycle is listed open: `[a, b, c]` stands for `a → b → c → a`.
    pub cycles: Vec<Vec<N>>,
    /// `true` if the cap was reached while more cycles remained.
    pub truncated: bool,
}

/// Lists every elementary cycle of length two or more in `graph`.
///
/// Each cycle is reported once, open, starting at whichever of its nodes
/// comes first in universe order: `[a, b, c]` means `a → b → c → a`.
/// Self-loops are not reported here; [`find_cycle`] and the detectors do
/// see them.
///
/// **Cost**: exponential in the worst case. Do not call this on large or
/// densely cyclic graphs; prefer [`enumerate_cycles_capped`].
pub fn enumerate_cycles<N: Clone>(graph: &Graph<N>) -> Vec<Vec<N>> {
    enumerate(graph, None).cycles
}

/// Like [`enumerate_cycles`], but stops after `max_cycles` cycles.
///
/// When the cap cuts the search short, `truncated` is set and `cycles` holds
/// the first `max_cycles` cycles in discovery order.
pub fn enumerate_cycles_capped<N: Clone>(
    graph: &Graph<N>,
    max_cycles: usize,
) -> CycleEnumeration<N> {
    enumerate(graph, Some(max_cycles))
}

fn enumerate<N: Clone>(graph: &Graph<N>, cap: Option<usize>) -> CycleEnumeration<N> {
    let node_count = graph.node_count();
    let mut found: Vec<Vec<usize>> = Vec::new();
    // Duplicate edges would otherwise report the same node sequence twice.
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    let mut truncated = false;

    let mut scope = RootScope::new(graph);
    let mut path: Vec<usize> = Vec::new();
    let mut on_path = vec![false; node_count];
    let mut stack: Vec<Frame> = Vec::new();

    'roots: for root in 0..node_count {
        if !scope.enter_root(root) {
            continue;
        }
        path.push(root);
        on_path[root] = true;
        stack.push(Frame::new(root));

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(&successor) = graph.successor_positions(node).get(frame.next) else {
                stack.pop();
                path.pop();
                on_path[node] = false;
                continue;
            };
            frame.next += 1;

            if successor == root {
                if path.len() > 1 && !seen.contains(&path) {
                    if cap.is_some_and(|max| found.len() >= max) {
                        truncated = true;
                        break 'roots;
                    }
                    seen.insert(path.clone());
                    found.push(path.clone());
                }
            } else if successor > root && scope.allows(successor) && !on_path[successor] {
                path.push(successor);
                on_path[successor] = true;
                stack.push(Frame::new(successor));
            }
        }
    }

    tracing::debug!(
        nodes = node_count,
        roots_searched = scope.roots_searched,
        cycles = found.len(),
        truncated,
        "cycle enumeration finished"
    );

    CycleEnumeration {
        cycles: found
            .into_iter()
            .map(|cycle| {
                cycle
                    .into_iter()
                    .map(|position| graph.node_at(position).clone())
                    .collect()
            })
            .collect(),
        truncated,
    }
}

/// Search bounds for one enumeration root.
///
/// `allowed` marks the nodes that come after the current root, share its
/// strongly connected component, and reach the root without passing through
/// an earlier node. Every elementary cycle rooted there uses only such nodes.
struct RootScope {
    component: Vec<usize>,
    component_size: Vec<usize>,
    predecessors: Vec<Vec<usize>>,
    allowed: Vec<bool>,
    marked: Vec<usize>,
    roots_searched: usize,
}

impl RootScope {
    fn new<N>(graph: &Graph<N>) -> Self {
        let node_count = graph.node_count();
        let mut digraph: DiGraph<(), ()> = DiGraph::with_capacity(node_count, graph.edge_count());
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for _ in 0..node_count {
            digraph.add_node(());
        }
        for source in 0..node_count {
            for &target in graph.successor_positions(source) {
                digraph.add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
                predecessors[target].push(source);
            }
        }

        let mut component = vec![0; node_count];
        let mut component_size = Vec::new();
        for (id, members) in tarjan_scc(&digraph).into_iter().enumerate() {
            for member in &members {
                component[member.index()] = id;
            }
            component_size.push(members.len());
        }

        Self {
            component,
            component_size,
            predecessors,
            allowed: vec![false; node_count],
            marked: Vec::new(),
            roots_searched: 0,
        }
    }

    /// Recomputes `allowed` for `root`. Returns `false` when no cycle of two
    /// or more nodes can pass through `root`.
    fn enter_root(&mut self, root: usize) -> bool {
        for node in self.marked.drain(..) {
            self.allowed[node] = false;
        }
        let component = self.component[root];
        if self.component_size[component] < 2 {
            return false;
        }

        let mut worklist = vec![root];
        while let Some(node) = worklist.pop() {
            for &predecessor in &self.predecessors[node] {
                if predecessor > root
                    && self.component[predecessor] == component
                    && !self.allowed[predecessor]
                {
                    self.allowed[predecessor] = true;
                    self.marked.push(predecessor);
                    worklist.push(predecessor);
                }
            }
        }
        self.roots_searched += 1;
        true
    }

    fn allows(&self, node: usize) -> bool {
        self.allowed[node]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
