//! Induced subgraphs.

use crate::graph::Graph;

/// Subgraph induced by the nodes flagged in `nodes`.
///
/// Kept nodes are renumbered densely in their original order and keep their
/// labels; an edge survives when both endpoints do. The result keeps the
/// input's display name.
pub fn induced(graph: &Graph, nodes: &[bool]) -> Graph {
    assert_eq!(nodes.len(), graph.n(), "membership length must match node count");

    let mut remap = vec![usize::MAX; graph.n()];
    let mut labels = Vec::new();
    for node in 0..graph.n() {
        if nodes[node] {
            remap[node] = labels.len();
            labels.push(graph.label(node));
        }
    }

    let mut successors = Vec::with_capacity(labels.len());
    for node in 0..graph.n() {
        if !nodes[node] {
            continue;
        }
        successors.push(
            graph
                .successors(node)
                .iter()
                .filter_map(|&next| (remap[next] != usize::MAX).then_some(remap[next]))
                .collect(),
        );
    }

    Graph::new(graph.name(), labels, successors)
}
