//! Deterministic reachability over the static graph.
//!
//! Traversals use an explicit stack rather than recursion, so deep path
//! graphs cannot overflow the thread stack.

use crate::graph::Graph;

/// Nodes reachable from `root`, as a membership vector.
///
/// `restrict` limits which nodes may be visited at all; `None` allows every
/// node. With `reverse = false` the traversal follows successor edges, with
/// `reverse = true` predecessor edges (reachability *to* `root`).
///
/// A root excluded by `restrict` yields the all-false vector, `root`
/// included: the restriction is checked before the root is ever marked or
/// pushed.
pub fn component(
    graph: &Graph,
    restrict: Option<&[bool]>,
    root: usize,
    reverse: bool,
) -> Vec<bool> {
    let mut member = vec![false; graph.n()];
    if restrict.is_some_and(|allowed| !allowed[root]) {
        return member;
    }
    member[root] = true;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let next_nodes = if reverse { graph.predecessors(node) } else { graph.successors(node) };
        for &next in next_nodes {
            if restrict.is_none_or(|allowed| allowed[next]) && !member[next] {
                member[next] = true;
                stack.push(next);
            }
        }
    }
    member
}

/// Nodes lying on at least one directed `source` → `target` path.
///
/// Forward reachability from `source`, then backward reachability from
/// `target` restricted to the forward set. When `source` cannot reach
/// `target`, the backward pass starts from an excluded root and the result
/// is empty; not even `source` or `target` qualify.
pub fn intermediate_nodes(graph: &Graph, source: usize, target: usize) -> Vec<bool> {
    let forward = component(graph, None, source, false);
    component(graph, Some(&forward), target, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        // 0 -> 1 -> 3, 0 -> 2 -> 3, and 4 off to the side.
        Graph::new(
            "diamond",
            vec![1, 2, 3, 4, 5],
            vec![vec![1, 2], vec![3], vec![3], vec![], vec![0]],
        )
    }

    #[test]
    fn forward_component_follows_successors() {
        let g = diamond();
        assert_eq!(component(&g, None, 0, false), vec![true, true, true, true, false]);
        assert_eq!(component(&g, None, 1, false), vec![false, true, false, true, false]);
    }

    #[test]
    fn reverse_component_follows_predecessors() {
        let g = diamond();
        assert_eq!(component(&g, None, 3, true), vec![true, true, true, true, true]);
        assert_eq!(component(&g, None, 0, true), vec![true, false, false, false, true]);
    }

    #[test]
    fn restriction_prunes_paths() {
        let g = diamond();
        // Node 1 is off limits, so 3 is only reachable through 2.
        let allowed = vec![true, false, true, true, true];
        assert_eq!(
            component(&g, Some(&allowed), 0, false),
            vec![true, false, true, true, false]
        );
    }

    #[test]
    fn excluded_root_yields_all_false_even_for_itself() {
        let g = diamond();
        let allowed = vec![false, true, true, true, true];
        assert_eq!(component(&g, Some(&allowed), 0, false), vec![false; 5]);
        assert_eq!(component(&g, Some(&allowed), 0, true), vec![false; 5]);
    }

    #[test]
    fn intermediate_nodes_are_the_union_of_paths() {
        let g = diamond();
        assert_eq!(intermediate_nodes(&g, 0, 3), vec![true, true, true, true, false]);
        assert_eq!(intermediate_nodes(&g, 0, 1), vec![true, true, false, false, false]);
    }

    #[test]
    fn unreachable_target_means_no_intermediate_nodes() {
        let g = diamond();
        // Nothing reaches 4 except itself.
        assert_eq!(intermediate_nodes(&g, 0, 4), vec![false; 5]);
    }

    #[test]
    fn source_equals_target_without_a_cycle_is_just_that_node() {
        let g = diamond();
        assert_eq!(intermediate_nodes(&g, 1, 1), vec![false, true, false, false, false]);
    }

    #[test]
    fn source_on_a_cycle_picks_up_the_cycle() {
        // 0 -> 1 -> 2 -> 0
        let g = Graph::new("cycle", vec![1, 2, 3], vec![vec![1], vec![2], vec![0]]);
        assert_eq!(intermediate_nodes(&g, 0, 0), vec![true, true, true]);
    }
}
