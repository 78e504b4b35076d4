// =============================================================================
// Graph Loader
// =============================================================================
//
// Parses an edge-list description of a feature-relationship graph.
//
// FORMAT:
// -------
// One edge per line, whitespace-delimited:
//
//     nodeA  nodeB  [weight]
//
// The weight is optional and defaults to 1.0. Blank lines and lines starting
// with '#' are skipped. Anything else that is not "two tokens plus an
// optional numeric weight" is a MalformedEdgeRecord.
//
// NODE INDEXING:
// --------------
// Node identifiers are strings; each one is assigned a dense integer index
// in order of first appearance. This ordering is deterministic for identical
// input and defines the column order the design matrix must follow.
//
// Duplicate edges are kept as separate records here; their weights accumulate
// when the adjacency matrix is assembled (see the laplacian module).
//
// =============================================================================

use std::collections::HashMap;

use crate::error::{NetGlmError, Result};

/// A single undirected, weighted edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// A feature-relationship graph: node names mapped bijectively to dense
/// indices `0..p`, plus a list of undirected weighted edges.
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Parse a whitespace-delimited edge list.
    ///
    /// # Errors
    /// * `MalformedEdgeRecord` - a record has fewer than two tokens, or more
    ///   than two tokens plus a weight
    /// * `InvalidWeight` - a weight token is not a number
    pub fn parse_edge_list(text: &str) -> Result<Self> {
        let mut graph = Graph {
            names: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        };

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.len() {
                0 | 1 => {
                    return Err(NetGlmError::MalformedEdgeRecord(format!(
                        "line {}: expected two node tokens, got {:?}",
                        line_no + 1,
                        tokens
                    )));
                }
                2 | 3 => {}
                n => {
                    return Err(NetGlmError::MalformedEdgeRecord(format!(
                        "line {}: expected at most three tokens, got {}",
                        line_no + 1,
                        n
                    )));
                }
            }

            let weight = match tokens.get(2) {
                Some(tok) => tok.parse::<f64>().map_err(|_| {
                    NetGlmError::InvalidWeight(format!(
                        "line {}: weight token '{}' is not numeric",
                        line_no + 1,
                        tok
                    ))
                })?,
                None => 1.0,
            };

            let source = graph.intern(tokens[0]);
            let target = graph.intern(tokens[1]);
            graph.edges.push(Edge {
                source,
                target,
                weight,
            });
        }

        Ok(graph)
    }

    /// Look up a node name, assigning the next index on first appearance.
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Number of distinct nodes (the feature dimension p).
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Node names in index order.
    pub fn node_names(&self) -> &[String] {
        &self.names
    }

    /// Index of a node name, if present.
    pub fn node_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// All edge records, in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

// =============================================================================
// Tests
// =============================================================================
