//! Single Monte Carlo trials: randomized edge retention plus two-sided
//! reachability.
//!
//! The per-trial state lives in a [`TrialScratch`] so a worker can run many
//! trials without re-allocating:
//! - Visit marks are generation stamps (`Vec<u32>`), so clearing them costs
//!   nothing.
//! - Retained-edge lists are cleared only for the nodes the previous trial
//!   actually touched.

use crate::graph::Graph;
use rand::Rng;

/// Reusable per-worker state for sampled trials.
///
/// A trial records the retained edges it discovers as predecessor entries,
/// which is exactly the structure its backward pass reads; the rest of the
/// graph's edges are never materialized.
#[derive(Debug, Clone)]
pub struct TrialScratch {
    /// Visit marks. After a run, `stamp - 1` means forward-reachable and
    /// `stamp` means on a retained source → target path.
    mark: Vec<u32>,
    /// Retained predecessor lists, filled lazily by the forward pass.
    retained: Vec<Vec<usize>>,
    /// Nodes the forward pass visited, in visit order.
    touched: Vec<usize>,
    stack: Vec<usize>,
    stamp: u32,
}

impl TrialScratch {
    /// Scratch sized for graphs with `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            mark: vec![0; n],
            retained: vec![Vec::new(); n],
            touched: Vec::new(),
            stack: Vec::new(),
            stamp: 0,
        }
    }

    /// Clears what the previous trial touched and returns fresh
    /// `(forward, hit)` stamp values.
    fn begin_trial(&mut self) -> (u32, u32) {
        for &node in &self.touched {
            self.retained[node].clear();
        }
        self.touched.clear();
        self.stack.clear();
        if self.stamp > u32::MAX - 2 {
            self.mark.fill(0);
            self.stamp = 0;
        }
        self.stamp += 2;
        (self.stamp - 1, self.stamp)
    }

    /// Runs one trial: retains each outgoing edge of every forward-visited
    /// node with probability `probability` (one uniform draw per edge), then
    /// marks the nodes that still connect `source` to `target` through
    /// retained edges.
    ///
    /// Read the outcome with [`TrialScratch::is_hit`] or
    /// [`TrialScratch::hit_nodes`]; the next `run` resets it.
    ///
    /// Panics if the scratch was sized for a different graph.
    pub fn run<R: Rng>(
        &mut self,
        graph: &Graph,
        source: usize,
        target: usize,
        probability: f64,
        rng: &mut R,
    ) {
        assert_eq!(self.mark.len(), graph.n(), "scratch sized for a different graph");
        let (forward, hit) = self.begin_trial();
        let Self { mark, retained, touched, stack, .. } = self;

        mark[source] = forward;
        touched.push(source);
        stack.push(source);
        while let Some(node) = stack.pop() {
            for &next in graph.successors(node) {
                // Every retained edge is recorded, even when `next` was
                // already reached another way; parallel edges draw
                // independently.
                if rng.random::<f64>() < probability {
                    retained[next].push(node);
                    if mark[next] != forward {
                        mark[next] = forward;
                        touched.push(next);
                        stack.push(next);
                    }
                }
            }
        }

        // Backward over retained edges, restricted to the forward set. A
        // target no retained path reached leaves every mark below `hit`, so
        // the trial scores nothing, source and target included.
        if mark[target] == forward {
            mark[target] = hit;
            stack.push(target);
            while let Some(node) = stack.pop() {
                for &prev in &retained[node] {
                    if mark[prev] == forward {
                        mark[prev] = hit;
                        stack.push(prev);
                    }
                }
            }
        }
    }

    /// Whether the last run marked `node` as lying on a retained
    /// source → target path.
    pub fn is_hit(&self, node: usize) -> bool {
        self.stamp != 0 && self.mark[node] == self.stamp
    }

    /// Nodes the last run marked, in forward-visit order.
    pub fn hit_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.touched.iter().copied().filter(|&node| self.mark[node] == self.stamp)
    }
}

/// One Monte Carlo trial as a standalone membership vector.
///
/// Estimation loops should hold a [`TrialScratch`] and call
/// [`TrialScratch::run`] instead; this allocates fresh state per call.
pub fn sampled_intermediate<R: Rng>(
    graph: &Graph,
    source: usize,
    target: usize,
    probability: f64,
    rng: &mut R,
) -> Vec<bool> {
    let mut scratch = TrialScratch::new(graph.n());
    scratch.run(graph, source, target, probability, rng);
    (0..graph.n()).map(|node| scratch.is_hit(node)).collect()
}
