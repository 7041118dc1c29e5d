//! Union-Find (disjoint set) over dense node positions.
//!
//! Backs [`crate::Graph::weakly_connected_components`]: every edge merges the
//! sets of its two endpoints, ignoring direction.
//!
//! `find` uses iterative path-halving, so no recursion is involved even on
//! long chains. Union-by-rank keeps trees shallow; on equal ranks the **lower
//! position** becomes the root, so the representative of a set never depends
//! on the order in which edges were merged.

/// A union-find structure with path-halving and union-by-rank.
///
/// Elements are positions in `[0, n)`, where `n` is fixed at construction.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0u8; n],
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Each node visited on the way up is re-linked to its grandparent.
    /// `x` must be below the size given to [`UnionFind::new`].
    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] = self.rank[root].saturating_add(1);
            }
        }
    }

}
