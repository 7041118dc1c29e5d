//! Explicit-stack three-color DFS.
//!
//! Same color discipline and visiting order as [`super::dfs`], but the path is
//! held in a heap-allocated stack of [`Frame`]s instead of on the call stack.
//! Traversal depth is therefore bounded only by available memory, which makes
//! this the variant to use on long dependency chains.
use super::Graph;
use super::dfs::Color;

/// One level of an explicit DFS path: a node and the index of the next
/// successor to examine.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) node: usize,
    pub(crate) next: usize,
}

impl Frame {
    pub(crate) fn new(node: usize) -> Self {
        Self { node, next: 0 }
    }
}

/// Returns `true` if `graph` contains at least one cycle.
///
/// Returns the same answer as [`super::has_cycle`] for every graph, without
/// recursion.
pub fn has_cycle_iterative<N>(graph: &Graph<N>) -> bool {
    let node_count = graph.node_count();
    let mut colors = vec![Color::Unvisited; node_count];
    let mut stack: Vec<Frame> = Vec::new();
    let mut cyclic = false;

    'starts: for start in 0..node_count {
        if colors[start] != Color::Unvisited {
            continue;
        }
        colors[start] = Color::InProgress;
        stack.push(Frame::new(start));

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let Some(&successor) = graph.successor_positions(node).get(frame.next) else {
                // All successors explored: the node is finished.
                colors[node] = Color::Done;
                stack.pop();
                continue;
            };
            frame.next += 1;

            match colors[successor] {
                Color::InProgress => {
                    cyclic = true;
                    break 'starts;
                }
                Color::Unvisited => {
                    colors[successor] = Color::InProgress;
                    stack.push(Frame::new(successor));
                }
                Color::Done => {}
            }
        }
    }

    tracing::debug!(
        nodes = node_count,
        edges = graph.edge_count(),
        cyclic,
        "iterative DFS finished"
    );
    cyclic
}
