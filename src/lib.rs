//! Monte Carlo estimation of intermediacy in directed graphs.
//!
//! Intermediacy scores each node by the probability that it lies on a
//! surviving directed path from a source node to a target node when every
//! edge is kept independently with probability `p`. This crate provides:
//!
//! - **Graph**: immutable directed multigraph storage with derived
//!   predecessor lists
//! - **Reachability**: restricted forward/backward components and the
//!   intermediate node set
//! - **Sampler**: single randomized edge-retention trials over reusable
//!   scratch state
//! - **Estimator**: repeated trials aggregated into per-node estimates,
//!   parallelized behind the `parallel` feature
//! - **Induction**: label-preserving induced subgraphs
//! - **I/O**: Pajek and TSV loaders plus the estimate table writer
//!
//! # Example
//!
//! ```
//! use intermediacy::{intermediacy, Graph, IntermediacyConfig};
//!
//! // 1 -> 2 -> 3 plus the shortcut 1 -> 3.
//! let graph = Graph::new("triangle", vec![1, 2, 3], vec![vec![1, 2], vec![2], vec![]]);
//! let config = IntermediacyConfig { probability: 1.0, samples: 10, seed: 7 };
//! let phi = intermediacy(&graph, 0, 2, config).unwrap();
//! assert_eq!(phi, vec![1.0, 1.0, 1.0]);
//! ```

pub mod estimate;
pub mod graph;
pub mod io;
pub mod rank;
pub mod reachability;
pub mod sample;
pub mod subgraph;

// Re-export the main types and operations
pub use estimate::{intermediacy, standard_error, IntermediacyConfig};
pub use graph::Graph;
pub use rank::top_k;
pub use reachability::{component, intermediate_nodes};
pub use sample::{sampled_intermediate, TrialScratch};
pub use subgraph::induced;

/// Errors surfaced by loading, label lookup, and configuration.
#[derive(Debug, thiserror::Error)]
pub enum IntermediacyError {
    /// No node carries the requested label.
    #[error("label {0} not found")]
    LabelNotFound(i64),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A structurally broken input file.
    #[error("parse error: {0}")]
    Parse(String),

    /// Estimation parameters outside their valid range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for intermediacy operations.
pub type Result<T> = std::result::Result<T, IntermediacyError>;
