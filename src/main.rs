//! Command line estimator for intermediacy.

use clap::Parser;
use intermediacy::io::{read_graph, write_phi};
use intermediacy::{
    Graph, IntermediacyConfig, Result, induced, intermediacy, intermediate_nodes, standard_error,
    top_k,
};
use rand::Rng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Computes intermediacy of nodes for selected source and target nodes
#[derive(Parser, Debug)]
#[command(name = "intermediacy", version, about, long_about = None)]
struct Args {
    /// Pajek (.net) or tab-separated edge list file
    #[arg(short, long)]
    input: PathBuf,

    /// Source node label
    #[arg(short, long)]
    source: i64,

    /// Target node label
    #[arg(short, long)]
    target: i64,

    /// Edge retention probabilities
    #[arg(short, long, value_delimiter = ',', default_value = "0.3,0.5,0.7")]
    probability: Vec<f64>,

    /// Monte Carlo samples per probability
    #[arg(short = 'z', long, default_value_t = 100_000)]
    samples: usize,

    /// RNG seed; drawn at random when absent
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("seed {seed}");

    print_title("INTERMEDIACY");

    let started = Instant::now();
    let graph = read_graph(&args.input)?;
    info!("loaded {} in {:.2?}", args.input.display(), started.elapsed());

    let source = graph.find_node_by_label(args.source)?;
    let target = graph.find_node_by_label(args.target)?;

    let started = Instant::now();
    let reduced = induced(&graph, &intermediate_nodes(&graph, source, target));
    info!("reduced to {} of {} nodes in {:.2?}", reduced.n(), graph.n(), started.elapsed());

    print_title("NETWORK");
    print_network(&graph, &reduced, args);

    // Fewer than three nodes means nobody sits between source and target.
    if reduced.n() <= 2 {
        info!("nothing lies between the source and target, skipping estimation");
        return Ok(());
    }

    let source = reduced.find_node_by_label(args.source)?;
    let target = reduced.find_node_by_label(args.target)?;

    let mut estimates = Vec::with_capacity(args.probability.len());
    for &probability in &args.probability {
        let config = IntermediacyConfig { probability, samples: args.samples, seed };

        print_title("MONTE CARLO");
        println!("{:>15} | {:.3}", "Probability", config.probability);
        println!("{:>15} | {}", "Samples", config.samples);

        let started = Instant::now();
        let phi = intermediacy(&reduced, source, target, config)?;
        info!(
            "estimated {} samples at p = {} in {:.2?}",
            config.samples,
            probability,
            started.elapsed()
        );

        print_estimate(&reduced, source, target, &phi, config);
        estimates.push(phi);
    }

    let output = args.input.with_file_name(format!("{}_phi.tsv", reduced.name()));
    write_phi(&output, &reduced, &args.probability, &estimates)?;
    info!("wrote {}", output.display());

    Ok(())
}

fn print_title(title: &str) {
    println!("\n{:>15} | {}\n", "...", title);
}

fn print_network(graph: &Graph, reduced: &Graph, args: &Args) {
    println!("{:>15} | '{}'", "Network", graph.name());
    println!("{:>15} | '{}'", "Source", args.source);
    println!("{:>15} | '{}'\n", "Target", args.target);

    println!("{:>15} | {} ({})", "Nodes", reduced.n(), graph.n());
    println!("{:>15} | {} ({})", "Edges", reduced.m(), graph.m());
    println!("{:>15} | {:.3} ({:.3})", "Degree", mean_degree(reduced), mean_degree(graph));
}

fn print_estimate(
    graph: &Graph,
    source: usize,
    target: usize,
    phi: &[f64],
    config: IntermediacyConfig,
) {
    println!("\n{:>15} | {}", "Intermediacy", "...");
    for (row, node) in [("Source", source), ("Target", target)] {
        println!(
            "{:>15} | {:.5} ± {:.5}",
            row,
            phi[node],
            standard_error(phi[node], config.samples)
        );
    }

    // Rank the remaining nodes with source and target masked out.
    let mut candidates = phi.to_vec();
    candidates[source] = f64::NAN;
    candidates[target] = f64::NAN;
    for (node, score) in top_k(&candidates, 10) {
        println!(
            "{:>15} | {:.5} ± {:.5}",
            format!("'{}'", graph.label(node)),
            score,
            1.96 * standard_error(score, config.samples)
        );
    }
}

fn mean_degree(graph: &Graph) -> f64 {
    2.0 * graph.m() as f64 / graph.n() as f64
}
