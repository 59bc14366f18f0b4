//! Arena-indexed disjoint set over sample indices.

/// Disjoint set over the indices `0..n` with path compression.
///
/// Merging is asymmetric: [`UnionFind::merge`] always attaches the root of
/// the first argument below the root of the second. The sweep uses this to
/// keep the older peak's birth index as the representative of a merged
/// component, so `find(i)` is always the birth index of the peak owning `i`.
#[derive(Debug, Clone)]
pub(crate) struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Returns the representative of the set containing `u`.
    pub(crate) fn find(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = u;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the set containing `u` into the set containing `v`.
    ///
    /// The representative of `v` survives.
    pub(crate) fn merge(&mut self, u: usize, v: usize) {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru != rv {
            self.parent[ru] = rv;
        }
    }
}
