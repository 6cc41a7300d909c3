//! Static directed multigraph storage.
//!
//! The graph is an immutable value type:
//! - `successors` holds the edges as given (self-loops dropped, parallel
//!   edges kept as duplicate entries).
//! - `predecessors` is derived once at construction, with each list sized
//!   exactly via a degree-count pass, and never mutated afterwards.
//!
//! Nodes are dense indices in `[0, n)`; labels are external identifiers only
//! and play no role in traversal.

use crate::{IntermediacyError, Result};

/// A static directed multigraph.
///
/// Derived graphs (sampled subgraphs, induced subgraphs) are always fresh
/// `Graph` values; nothing aliases or mutates an existing one except
/// [`Graph::set_name`].
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    labels: Vec<i64>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    m: usize,
}

impl Graph {
    /// Builds a graph from per-node labels and successor lists.
    ///
    /// `labels` and `successors` must have the same length, and every
    /// successor index must lie in `[0, len)`. Self-loop entries are dropped
    /// (not counted, not stored). Predecessor lists and the edge count are
    /// derived here in O(n + m).
    ///
    /// Panics if the arrays disagree in length or an index is out of range.
    pub fn new(name: impl Into<String>, labels: Vec<i64>, mut successors: Vec<Vec<usize>>) -> Self {
        assert_eq!(
            labels.len(),
            successors.len(),
            "labels and successors must have the same length"
        );
        let n = labels.len();
        for succs in &successors {
            for &next in succs {
                assert!(next < n, "successor index {next} out of range for {n} nodes");
            }
        }
        for (node, succs) in successors.iter_mut().enumerate() {
            succs.retain(|&next| next != node);
        }

        let mut in_degrees = vec![0usize; n];
        let mut m = 0usize;
        for succs in &successors {
            m += succs.len();
            for &next in succs {
                in_degrees[next] += 1;
            }
        }
        let mut predecessors: Vec<Vec<usize>> =
            in_degrees.iter().map(|&d| Vec::with_capacity(d)).collect();
        for (node, succs) in successors.iter().enumerate() {
            for &next in succs {
                predecessors[next].push(node);
            }
        }

        Self { name: name.into(), labels, successors, predecessors, m }
    }

    /// Number of nodes.
    pub fn n(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, the sum of all successor list lengths.
    pub fn m(&self) -> usize {
        self.m
    }

    /// External label of `node`. Labels need not be unique.
    pub fn label(&self, node: usize) -> i64 {
        self.labels[node]
    }

    /// Successor indices of `node`; duplicates are parallel edges.
    pub fn successors(&self, node: usize) -> &[usize] {
        &self.successors[node]
    }

    /// Predecessor indices of `node`, derived from the successor lists: one
    /// entry per incoming edge occurrence.
    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.predecessors[node]
    }

    pub fn out_degree(&self, node: usize) -> usize {
        self.successors[node].len()
    }

    pub fn in_degree(&self, node: usize) -> usize {
        self.predecessors[node].len()
    }

    /// Display name (the file stem, for loaded graphs).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The one permitted mutation: renames the graph for reporting.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The lowest node index carrying `label`.
    ///
    /// O(n) scan, meant for translating user-supplied identifiers at the
    /// boundary, never for the sampling loop.
    pub fn find_node_by_label(&self, label: i64) -> Result<usize> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .ok_or(IntermediacyError::LabelNotFound(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_predecessors_and_edge_count() {
        let g = Graph::new("g", vec![10, 20, 30], vec![vec![1, 2], vec![2], vec![]]);
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert_eq!(g.successors(0), &[1, 2]);
        assert_eq!(g.predecessors(2), &[0, 1]);
        assert_eq!(g.predecessors(0), &[] as &[usize]);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.in_degree(2), 2);
    }

    #[test]
    fn drops_self_loops_keeps_parallel_edges() {
        let g = Graph::new("g", vec![1, 2], vec![vec![0, 1, 1], vec![1]]);
        assert_eq!(g.successors(0), &[1, 1]);
        assert_eq!(g.successors(1), &[] as &[usize]);
        assert_eq!(g.m(), 2);
        assert_eq!(g.predecessors(1), &[0, 0]);
    }

    #[test]
    fn label_lookup_returns_lowest_matching_index() {
        let g = Graph::new("g", vec![7, 5, 7], vec![vec![], vec![], vec![]]);
        assert_eq!(g.find_node_by_label(7).unwrap(), 0);
        assert_eq!(g.find_node_by_label(5).unwrap(), 1);
        assert!(g.find_node_by_label(9).is_err());
    }

    #[test]
    fn renaming_is_the_only_mutation() {
        let mut g = Graph::new("before", vec![1], vec![vec![]]);
        g.set_name("after");
        assert_eq!(g.name(), "after");
    }

    #[test]
    #[should_panic]
    fn rejects_out_of_range_successor() {
        Graph::new("g", vec![1, 2], vec![vec![2], vec![]]);
    }

    #[test]
    #[should_panic]
    fn rejects_mismatched_lengths() {
        Graph::new("g", vec![1, 2], vec![vec![]]);
    }
}
