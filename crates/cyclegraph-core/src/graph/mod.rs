//! Directed graph model shared by every cycle detector and ordering algorithm.
//!
//! A [`Graph`] is built from an adjacency mapping: each node identifier is
//! paired with an ordered list of successor identifiers. Edges carry no weight
//! or payload. Node identifiers are generic; any `Eq + Hash + Clone` type works.
//!
//! # Node Universe
//!
//! The universe is the union of every key **and** every successor appearing in
//! the adjacency input. A node that only ever appears as a successor is still a
//! member of the universe, with an empty successor list. The universe is
//! derived once, at construction, so every query sees the complete set.
//!
//! # Deterministic Ordering
//!
//! Nodes are stored in first-seen insertion order: each key in input order,
//! immediately followed by each of its successors in list order, skipping nodes
//! that were already seen. This "universe order" is the tie-break used by every
//! algorithm: DFS start-node selection, Kahn worklist seeding, and cycle
//! enumeration start selection. Successors are always visited in listed order.
//!
//! # Algorithms
//!
//! - [`dfs`]: recursive three-color DFS ([`has_cycle`]).
//! - [`iterative`]: explicit-stack three-color DFS ([`has_cycle_iterative`]).
//! - [`topo`]: Kahn's reduction ([`topological_order_or_cycle`]).
//! - [`cycles`]: cycle reconstruction ([`find_cycle`]) and elementary-cycle
//!   enumeration ([`enumerate_cycles`]).
//!
//! Every algorithm takes `&Graph<N>` and allocates its own traversal state, so
//! distinct queries can run concurrently over a shared graph.
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

pub mod components;
pub mod cycles;
pub mod dfs;
pub mod interop;
pub mod iterative;
mod serde_map;
pub mod topo;

pub use cycles::{CycleEnumeration, enumerate_cycles, enumerate_cycles_capped, find_cycle};
pub use dfs::has_cycle;
pub use iterative::has_cycle_iterative;
pub use topo::{CycleDetected, has_cycle_kahn, topological_order_or_cycle};

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed graph over node identifiers of type `N`.
///
/// Nodes are interned into dense positions `0..node_count()` in universe
/// order; successor lists are stored as positions so that traversal state
/// (colors, parents, in-degrees) can live in plain vectors.
///
/// Construct with [`Graph::from_adjacency`], [`FromIterator`], the builder
/// methods [`Graph::add_node`] / [`Graph::add_edge`], or by deserializing a
/// map with serde.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    successors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            successors: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N> Graph<N> {
    /// Returns the full node universe in universe order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns the number of nodes in the universe.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, counting duplicates and self-loops.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every edge as a `(source, target)` pair.
    ///
    /// Sources are yielded in universe order and, for each source, targets in
    /// listed order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(move |(source, targets)| {
                targets
                    .iter()
                    .map(move |&target| (&self.nodes[source], &self.nodes[target]))
            })
    }

    /// Returns the node stored at `position`.
    pub(crate) fn node_at(&self, position: usize) -> &N {
        &self.nodes[position]
    }

    /// Returns the successor positions of the node at `position`.
    pub(crate) fn successor_positions(&self, position: usize) -> &[usize] {
        &self.successors[position]
    }
}

impl<N: Eq + Hash> Graph<N> {
    /// Returns `true` if `node` is a member of the universe.
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Iterates over the successors of `node` in listed order.
    ///
    /// Nodes with no out-edges, and nodes that are not in the universe at all,
    /// yield an empty iterator rather than an error.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + use<'a, N> {
        let targets: &'a [usize] = match self.index.get(node) {
            Some(&position) => &self.successors[position],
            None => &[],
        };
        targets.iter().map(move |&target| &self.nodes[target])
    }

    /// Returns the universe position of `node`, if present.
    pub(crate) fn position(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an adjacency mapping.
    ///
    /// Each item pairs a node with its ordered successors. Nodes that appear
    /// only as successors are folded into the universe with no out-edges. A
    /// key that appears more than once has its successor lists concatenated.
    ///
    /// Pass an ordered collection (a `Vec` of pairs, a `BTreeMap`) to get a
    /// reproducible universe order; a `HashMap` works but its iteration order,
    /// and therefore every tie-break, is unspecified.
    pub fn from_adjacency<I, S>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        S: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (node, successors) in adjacency {
            graph.extend_node(node, successors);
        }
        graph
    }

    /// Adds `node` to the universe if it is not already present.
    ///
    /// Returns `true` if the node was newly inserted.
    pub fn add_node(&mut self, node: N) -> bool {
        let before = self.nodes.len();
        self.intern(node);
        self.nodes.len() > before
    }

    /// Adds the edge `from → to`, interning either endpoint if unseen.
    ///
    /// Duplicate edges and self-loops are accepted as-is.
    pub fn add_edge(&mut self, from: N, to: N) {
        let source = self.intern(from);
        let target = self.intern(to);
        self.successors[source].push(target);
        self.edge_count += 1;
    }

    /// Returns the subgraph induced by `keep`.
    ///
    /// The result contains the kept nodes (in this graph's universe order) and
    /// every edge whose endpoints are both kept. Nodes in `keep` that are not
    /// in the universe are ignored.
    pub fn induced_subgraph<'k, K>(&self, keep: K) -> Graph<N>
    where
        K: IntoIterator<Item = &'k N>,
        N: 'k,
    {
        let kept: HashSet<usize> = keep
            .into_iter()
            .filter_map(|node| self.position(node))
            .collect();

        let mut subgraph = Graph::new();
        for (position, node) in self.nodes.iter().enumerate() {
            if kept.contains(&position) {
                subgraph.add_node(node.clone());
            }
        }
        for (source, targets) in self.successors.iter().enumerate() {
            if !kept.contains(&source) {
                continue;
            }
            for &target in targets {
                if kept.contains(&target) {
                    subgraph.add_edge(self.nodes[source].clone(), self.nodes[target].clone());
                }
            }
        }
        subgraph
    }

    /// Relabels every node with `f`, preserving universe and edge order.
    ///
    /// Nodes that map to the same label are merged.
    pub fn map_nodes<M, F>(&self, mut f: F) -> Graph<M>
    where
        M: Eq + Hash + Clone,
        F: FnMut(&N) -> M,
    {
        let labels: Vec<M> = self.nodes.iter().map(&mut f).collect();
        let mut mapped = Graph::new();
        for label in &labels {
            mapped.add_node(label.clone());
        }
        for (source, targets) in self.successors.iter().enumerate() {
            for &target in targets {
                mapped.add_edge(labels[source].clone(), labels[target].clone());
            }
        }
        mapped
    }

    /// Interns `node` followed by each of `successors`, appending the edges.
    pub(crate) fn extend_node<S>(&mut self, node: N, successors: S)
    where
        S: IntoIterator<Item = N>,
    {
        let source = self.intern(node);
        for successor in successors {
            let target = self.intern(successor);
            self.successors[source].push(target);
            self.edge_count += 1;
        }
    }

    /// Returns the position of `node`, appending it to the universe if unseen.
    fn intern(&mut self, node: N) -> usize {
        if let Some(&position) = self.index.get(&node) {
            return position;
        }
        let position = self.nodes.len();
        self.index.insert(node.clone(), position);
        self.nodes.push(node);
        self.successors.push(Vec::new());
        position
    }
}

impl<N, S> FromIterator<(N, S)> for Graph<N>
where
    N: Eq + Hash + Clone,
    S: IntoIterator<Item = N>,
{
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

impl<N: PartialEq> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.successors == other.successors
    }
}

impl<N: Eq> Eq for Graph<N> {}

// ---------------------------------------------------------------------------
// Detector
// ---------------------------------------------------------------------------

/// Selects which algorithm answers a cycle-presence query.
///
/// All three detectors return the same answer for every graph; they differ in
/// resource profile. [`Detector::Recursive`] uses the call stack and is
/// limited by thread stack size on very deep graphs; the other two are bounded
/// only by heap memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    /// Recursive three-color DFS ([`has_cycle`]).
    Recursive,
    /// Explicit-stack three-color DFS ([`has_cycle_iterative`]).
    Iterative,
    /// Kahn's in-degree reduction ([`has_cycle_kahn`]).
    Kahn,
}

impl Detector {
    /// Every detector, in declaration order.
    pub const ALL: [Detector; 3] = [Detector::Recursive, Detector::Iterative, Detector::Kahn];

    /// Returns `true` if `graph` contains a cycle, using this detector.
    pub fn has_cycle<N>(self, graph: &Graph<N>) -> bool {
        match self {
            Detector::Recursive => dfs::has_cycle(graph),
            Detector::Iterative => iterative::has_cycle_iterative(graph),
            Detector::Kahn => topo::has_cycle_kahn(graph),
        }
    }

    /// Returns the lowercase name used in CLI flags and JSON output.
    pub fn name(self) -> &'static str {
        match self {
            Detector::Recursive => "recursive",
            Detector::Iterative => "iterative",
            Detector::Kahn => "kahn",
        }
    }
}

impl fmt::Display for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
