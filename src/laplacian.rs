// =============================================================================
// Adjacency / Laplacian Builder
// =============================================================================
//
// Converts a Graph into the dense penalty operator used by the fitting
// engine:
//
//     A[i][j] = accumulated edge weight between features i and j
//     D[i][i] = Σ_j A[i][j]              (weighted degree)
//     L       = D − A                    (combinatorial graph Laplacian)
//
// L is symmetric positive-semidefinite by construction, and the quadratic
// form β'Lβ = Σ_{(i,j) ∈ E} w_ij (β_i − β_j)² penalizes coefficient
// differences across graph-adjacent features.
//
// Self-edges are ignored: they would contribute nothing to the difference
// penalty and would only inflate the diagonal.
//
// Memory is O(p²); p is expected to be at most a few thousand features, so
// a dense representation keeps the downstream matrix products simple.
//
// =============================================================================

use ndarray::Array2;

use crate::graph::Graph;

/// Build the dense symmetric adjacency matrix for a graph.
///
/// Duplicate edge records accumulate by summation; self-edges are dropped.
pub fn build_adjacency(graph: &Graph) -> Array2<f64> {
    let p = graph.node_count();
    let mut adjacency = Array2::zeros((p, p));

    for edge in graph.edges() {
        if edge.source == edge.target {
            continue;
        }
        adjacency[[edge.source, edge.target]] += edge.weight;
        adjacency[[edge.target, edge.source]] += edge.weight;
    }

    adjacency
}

/// Build the adjacency matrix and combinatorial Laplacian `L = D − A`.
///
/// Returns `(A, L)`, both p×p where p is the graph's node count. The fit
/// entry point checks p against the design matrix's column count.
pub fn build_laplacian(graph: &Graph) -> (Array2<f64>, Array2<f64>) {
    let adjacency = build_adjacency(graph);
    let p = adjacency.nrows();

    let mut laplacian = -&adjacency;
    for i in 0..p {
        let degree: f64 = adjacency.row(i).sum();
        laplacian[[i, i]] = degree;
    }

    (adjacency, laplacian)
}

// =============================================================================
// Tests
// =============================================================================
