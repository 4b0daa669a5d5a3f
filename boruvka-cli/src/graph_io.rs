//! Plain-text adjacency-list persistence for graphs.
//!
//! The format is a header line `<vertex_count> <edge_count>` followed by one
//! line per vertex: the vertex identifier, the number of incident edges, and
//! then `<neighbour> <weight>` pairs. Every undirected edge is listed under
//! both of its endpoints; the loader inserts it once via `has_edge`.
//!
//! Malformed input is a loader-level error. The engine never validates its
//! input graph, so everything must be caught here.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use boruvka_core::{Edge, Graph, Vertex};
use thiserror::Error;
use tracing::{info, instrument};

/// Errors raised while reading or writing graph files.
#[derive(Debug, Error)]
pub enum GraphIoError {
    /// The file could not be opened, read, or written.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line did not match the adjacency-list layout.
    #[error("malformed graph data in `{path}` at line {line}: {reason}")]
    Malformed {
        /// Path of the offending file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// Description of what failed to parse.
        reason: String,
    },
}

/// Loads a graph from the adjacency-list text format at `path`.
///
/// # Errors
/// Returns [`GraphIoError`] when the file cannot be read or a line does not
/// match the expected layout.
#[instrument(level = "debug", skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<Graph, GraphIoError> {
    let file = File::open(path).map_err(|source| GraphIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let (header_line, header) = next_line(&mut lines, path)?;
    let mut header_tokens = header.split_whitespace();
    let vertex_count: u64 = parse_token(header_tokens.next(), path, header_line, "vertex count")?;
    let edge_count: usize = parse_token(header_tokens.next(), path, header_line, "edge count")?;

    let mut graph = Graph::new();
    for vertex in 0..vertex_count {
        graph.add_vertex(vertex);
    }

    for _ in 0..vertex_count {
        let (line, row) = next_line(&mut lines, path)?;
        let mut tokens = row.split_whitespace();
        let vertex: Vertex = parse_token(tokens.next(), path, line, "vertex identifier")?;
        let incident_count: usize = parse_token(tokens.next(), path, line, "incident edge count")?;

        for _ in 0..incident_count {
            let neighbour: Vertex = parse_token(tokens.next(), path, line, "neighbour vertex")?;
            let weight: u64 = parse_token(tokens.next(), path, line, "edge weight")?;
            let edge = Edge::new(vertex, neighbour, weight);
            if !graph.has_edge(&edge) {
                graph.add_edge(edge);
            }
        }
    }

    info!(
        vertices = graph.vertices().len(),
        edges = graph.edges().len(),
        declared_edges = edge_count,
        "graph loaded"
    );
    Ok(graph)
}

/// Saves `graph` to the adjacency-list text format at `path`, truncating any
/// existing file.
///
/// # Errors
/// Returns [`GraphIoError::Io`] when the file cannot be created or written.
#[instrument(level = "debug", skip(graph, path), fields(path = %path.display()))]
pub fn save_graph(graph: &Graph, path: &Path) -> Result<(), GraphIoError> {
    let file = File::create(path).map_err(|source| GraphIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let io_error = |source| GraphIoError::Io {
        path: path.to_path_buf(),
        source,
    };

    writeln!(
        writer,
        "{} {}",
        graph.vertices().len(),
        graph.edges().len()
    )
    .map_err(io_error)?;

    for (vertex, incident) in graph.adjacency_map() {
        write!(writer, "{vertex} {}", incident.len()).map_err(io_error)?;
        for edge in incident {
            let neighbour = if edge.start() == vertex {
                edge.end()
            } else {
                edge.start()
            };
            write!(writer, " {neighbour} {}", edge.weight()).map_err(io_error)?;
        }
        writeln!(writer).map_err(io_error)?;
    }

    writer.flush().map_err(io_error)?;
    info!(
        vertices = graph.vertices().len(),
        edges = graph.edges().len(),
        "graph saved"
    );
    Ok(())
}

fn next_line(
    lines: &mut impl Iterator<Item = (usize, io::Result<String>)>,
    path: &Path,
) -> Result<(usize, String), GraphIoError> {
    let Some((index, result)) = lines.next() else {
        return Err(GraphIoError::Malformed {
            path: path.to_path_buf(),
            line: 0,
            reason: "unexpected end of file".to_owned(),
        });
    };
    let row = result.map_err(|source| GraphIoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((index + 1, row))
}

fn parse_token<T>(
    token: Option<&str>,
    path: &Path,
    line: usize,
    what: &str,
) -> Result<T, GraphIoError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = token else {
        return Err(GraphIoError::Malformed {
            path: path.to_path_buf(),
            line,
            reason: format!("missing {what}"),
        });
    };
    raw.parse().map_err(|error| GraphIoError::Malformed {
        path: path.to_path_buf(),
        line,
        reason: format!("invalid {what} `{raw}`: {error}"),
    })
}
