//! Recursive three-color depth-first cycle detection.
//!
//! Every node starts [`Color::Unvisited`]. Entering a node marks it
//! [`Color::InProgress`]; once all of its successors are exhausted it becomes
//! [`Color::Done`]. An edge into an `InProgress` node is a back edge and proves
//! a cycle. An edge into a `Done` node can never close a cycle: everything
//! reachable from it was already explored without finding a way back.
//!
//! This variant recurses once per path node, so its depth is bounded by the
//! thread's stack. Use [`super::has_cycle_iterative`] for graphs with very long
//! chains; both return the same answer for every input.
use super::Graph;

/// Traversal state of a node during a three-color DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Not yet reached.
    Unvisited,
    /// On the current traversal path.
    InProgress,
    /// Fully explored.
    Done,
}

/// Returns `true` if `graph` contains at least one cycle.
///
/// Start nodes are taken in universe order and successors in listed order.
/// The search stops at the first back edge. Runs in `O(V + E)`: `Done` nodes
/// are never expanded again.
pub fn has_cycle<N>(graph: &Graph<N>) -> bool {
    let mut colors = vec![Color::Unvisited; graph.node_count()];

    let cyclic = (0..graph.node_count())
        .any(|start| colors[start] == Color::Unvisited && visit(graph, start, &mut colors));

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        cyclic,
        "recursive DFS finished"
    );
    cyclic
}

/// Explores `node` and everything reachable from it; `true` on a back edge.
fn visit<N>(graph: &Graph<N>, node: usize, colors: &mut [Color]) -> bool {
    colors[node] = Color::InProgress;

    for &successor in graph.successor_positions(node) {
        match colors[successor] {
            Color::InProgress => return true,
            Color::Unvisited => {
                if visit(graph, successor, colors) {
                    return true;
                }
            }
            Color::Done => {}
        }
    }

    colors[node] = Color::Done;
    false
}
