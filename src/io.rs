//! Graph loading and result writing.

use crate::graph::Graph;
use crate::{IntermediacyError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Loads a graph, dispatching on the file extension: `.net` is read as
/// Pajek, anything else as tab-separated edge pairs.
pub fn read_graph(path: &Path) -> Result<Graph> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("net") => read_pajek(path),
        _ => read_tsv(path),
    }
}

/// Reads a Pajek `.net` file. The graph is named after the file stem.
pub fn read_pajek(path: &Path) -> Result<Graph> {
    parse_pajek(BufReader::new(File::open(path)?), &stem_name(path))
}

/// Reads a tab-separated edge list. The graph is named after the file stem.
pub fn read_tsv(path: &Path) -> Result<Graph> {
    parse_tsv(BufReader::new(File::open(path)?), &stem_name(path))
}

/// Parses Pajek: a `*vertices n` header, then arc lines after `*arcs` as
/// whitespace-separated 1-based `source target` pairs.
///
/// Node labels equal the 1-based node index. Self-pairs are dropped and
/// lines that do not parse as two integers are ignored; an arc endpoint
/// outside `[1, n]` is an error. A file without an `*arcs` section yields
/// an edgeless graph.
pub fn parse_pajek<R: BufRead>(reader: R, name: &str) -> Result<Graph> {
    let mut lines = reader.lines();

    // Scan for the header, skipping vertex definitions and anything else
    // before the arcs section.
    let mut vertex_count = None;
    for line in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        let lower = trimmed.to_ascii_lowercase();
        if let Some(count) = lower.strip_prefix("*vertices") {
            vertex_count = Some(count.trim().parse::<usize>().map_err(|_| {
                IntermediacyError::Parse(format!("bad vertex count in `{trimmed}`"))
            })?);
        } else if lower.starts_with("*arcs") {
            break;
        }
    }
    let Some(n) = vertex_count else {
        return Err(IntermediacyError::Parse("missing *vertices header".into()));
    };

    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        let mut fields = trimmed.split_whitespace();
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (Ok(from), Ok(to)) = (first.parse::<usize>(), second.parse::<usize>()) else {
            continue;
        };
        if from == 0 || to == 0 || from > n || to > n {
            return Err(IntermediacyError::Parse(format!(
                "arc endpoint out of range in `{trimmed}` ({n} vertices)"
            )));
        }
        if from != to {
            successors[from - 1].push(to - 1);
        }
    }
    Ok(Graph::new(name, labels_1_to(n), successors))
}

/// Parses a tab-separated edge list: `source<TAB>target` per line, 1-based,
/// extra columns ignored.
///
/// Lines not starting with an ASCII digit are ignored, as are self-pairs
/// and pairs with a zero or non-numeric field. The node count is the
/// largest index seen and labels equal the 1-based node index.
pub fn parse_tsv<R: BufRead>(reader: R, name: &str) -> Result<Graph> {
    let mut successors: Vec<Vec<usize>> = Vec::new();
    let mut n = 0usize;
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        let mut fields = trimmed.split('\t');
        let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
            continue;
        };
        let (Ok(from), Ok(to)) = (first.parse::<usize>(), second.parse::<usize>()) else {
            continue;
        };
        if from == 0 || to == 0 || from == to {
            continue;
        }
        if from.max(to) > n {
            n = from.max(to);
            successors.resize_with(n, Vec::new);
        }
        successors[from - 1].push(to - 1);
    }
    Ok(Graph::new(name, labels_1_to(n), successors))
}

/// Writes the estimate table: a header row
/// `id\tin_degree\tout_degree\tphi_<p>...`, then one row per node with its
/// label, degrees, and each probability's estimate.
pub fn write_phi(
    path: &Path,
    graph: &Graph,
    probabilities: &[f64],
    phi: &[Vec<f64>],
) -> Result<()> {
    assert_eq!(probabilities.len(), phi.len(), "one estimate column per probability");

    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "id\tin_degree\tout_degree")?;
    for p in probabilities {
        write!(out, "\tphi_{p}")?;
    }
    writeln!(out)?;
    for node in 0..graph.n() {
        write!(
            out,
            "{}\t{}\t{}",
            graph.label(node),
            graph.in_degree(node),
            graph.out_degree(node)
        )?;
        for column in phi {
            write!(out, "\t{}", column[node])?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn labels_1_to(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

fn stem_name(path: &Path) -> String {
    path.file_stem().map_or_else(|| "graph".into(), |stem| stem.to_string_lossy().into_owned())
}
