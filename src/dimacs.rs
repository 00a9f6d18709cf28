//! Reading and writing graphs in the DIMACS clique/coloring format.
//!
//! A file is a sequence of lines: `c ...` comments, one `p edge n m`
//! problem line, and `e u v` edge lines with vertices numbered `1..=n`.
//! An optional trailing number on an edge line is read as its weight.

use crate::graph::keyed::KeyedGraph;
use crate::graph::undirected;
use std::io::{BufRead, Write};
use std::str::{FromStr, SplitWhitespace};

/// The graph shape DIMACS files decode to.
pub type DimacsGraph = KeyedGraph<usize, undirected::TreeBackedGraph>;

#[derive(Debug, thiserror::Error)]
pub enum DimacsError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

fn parse_error(line: usize, reason: impl Into<String>) -> DimacsError {
    DimacsError::Parse {
        line,
        reason: reason.into(),
    }
}

fn field<T: FromStr>(
    fields: &mut SplitWhitespace,
    line: usize,
    what: &str,
) -> Result<T, DimacsError> {
    fields
        .next()
        .ok_or_else(|| parse_error(line, format!("missing {}", what)))?
        .parse()
        .map_err(|_| parse_error(line, format!("unreadable {}", what)))
}

/// Decodes a DIMACS graph. The problem line fixes the vertex set to
/// `1..=n` even when some of those vertices sit on no edge.
pub fn read_graph<R: BufRead>(reader: R) -> Result<DimacsGraph, DimacsError> {
    let mut graph = DimacsGraph::new();
    let mut declared = None;
    let mut edge_lines = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let mut fields = line.split_whitespace();
        let Some(tag) = fields.next() else {
            continue;
        };
        match tag {
            "c" => {}
            "p" => {
                if declared.is_some() {
                    return Err(parse_error(lineno, "second problem line"));
                }
                let format: String = field(&mut fields, lineno, "format name")?;
                if format != "edge" && format != "col" {
                    return Err(parse_error(lineno, format!("unknown format {:?}", format)));
                }
                let n: usize = field(&mut fields, lineno, "vertex count")?;
                let m: usize = field(&mut fields, lineno, "edge count")?;
                for key in 1..=n {
                    graph.add_vertex(&key);
                }
                declared = Some((n, m, lineno));
            }
            "e" => {
                let Some((n, _, _)) = declared else {
                    return Err(parse_error(lineno, "edge before the problem line"));
                };
                let u: usize = field(&mut fields, lineno, "edge source")?;
                let v: usize = field(&mut fields, lineno, "edge sink")?;
                let weight = match fields.next() {
                    None => 1.0,
                    Some(w) => w
                        .parse()
                        .map_err(|_| parse_error(lineno, "unreadable edge weight"))?,
                };
                if u < 1 || u > n || v < 1 || v > n {
                    return Err(parse_error(
                        lineno,
                        format!("vertex outside 1..={} on edge {} {}", n, u, v),
                    ));
                }
                graph
                    .add_weighted_edge(&u, &v, weight)
                    .map_err(|e| parse_error(lineno, e.to_string()))?;
                edge_lines += 1;
            }
            _ => return Err(parse_error(lineno, format!("unknown line tag {:?}", tag))),
        }
    }
    if let Some((_, m, lineno)) = declared {
        if edge_lines != m {
            return Err(parse_error(
                lineno,
                format!("declared {} edges but read {}", m, edge_lines),
            ));
        }
    }
    Ok(graph)
}

/// Encodes a graph whose keys are `1..=n`, edges canonicalized to
/// ascending endpoint order.
pub fn write_graph<W: Write>(
    writer: &mut W,
    graph: &DimacsGraph,
    comment: Option<&str>,
) -> Result<(), DimacsError> {
    if let Some(comment) = comment {
        for text in comment.lines() {
            writeln!(writer, "c {}", text)?;
        }
    }
    let n = graph.iter_vertices().copied().max().unwrap_or(0);
    let mut rows: Vec<(usize, usize)> = graph
        .iter_edges()
        .map(|(u, v, _)| if u <= v { (*u, *v) } else { (*v, *u) })
        .collect();
    rows.sort_unstable();
    rows.dedup();
    writeln!(writer, "p edge {} {}", n, rows.len())?;
    for (u, v) in rows {
        writeln!(writer, "e {} {}", u, v)?;
    }
    Ok(())
}
