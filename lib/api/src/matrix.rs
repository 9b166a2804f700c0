// Dense table encodings of the engine's matrices for JSON responses
use graphx_core::{AdjacencyMatrix, Edge, IncidenceMatrix, Node};
use serde::Serialize;

/// One row per arc, one column per vertex; both axes sorted.
#[derive(Debug, Serialize)]
pub struct IncidenceTable {
    pub vertexes: Vec<Node>,
    pub arcs: Vec<Edge>,
    pub rows: Vec<Vec<i8>>,
}

impl From<&IncidenceMatrix> for IncidenceTable {
    fn from(matrix: &IncidenceMatrix) -> Self {
        let mut arcs: Vec<Edge> = matrix.keys().cloned().collect();
        arcs.sort();
        let mut vertexes: Vec<Node> = matrix
            .values()
            .next()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        vertexes.sort();

        let rows = arcs
            .iter()
            .map(|arc| {
                let row = &matrix[arc];
                vertexes
                    .iter()
                    .map(|v| row.get(v).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Self { vertexes, arcs, rows }
    }
}

/// Square table over the sorted vertex set.
#[derive(Debug, Serialize)]
pub struct AdjacencyTable {
    pub vertexes: Vec<Node>,
    pub rows: Vec<Vec<u8>>,
}

impl From<&AdjacencyMatrix> for AdjacencyTable {
    fn from(matrix: &AdjacencyMatrix) -> Self {
        let mut vertexes: Vec<Node> = matrix.keys().cloned().collect();
        vertexes.sort();

        let rows = vertexes
            .iter()
            .map(|from| {
                let row = &matrix[from];
                vertexes
                    .iter()
                    .map(|to| row.get(to).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Self { vertexes, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphx_core::{adjacency_matrix, incidence_matrix, Graph};

    fn n(id: u64) -> Node {
        Node::new(id)
    }

    #[test]
    fn test_incidence_table_rows_follow_sorted_axes() {
        let graph = Graph::from_edges(vec![
            Edge::directed(2, n(3), n(1)),
            Edge::new(1, n(1), n(2)),
        ]);
        let table = IncidenceTable::from(&incidence_matrix(&graph));

        assert_eq!(table.vertexes, vec![n(1), n(2), n(3)]);
        assert_eq!(table.arcs.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(table.rows, vec![vec![1, 1, 0], vec![-1, 0, 1]]);
    }

    #[test]
    fn test_adjacency_table_directed() {
        let graph = Graph::from_edges(vec![Edge::directed(1, n(2), n(1))]);
        let table = AdjacencyTable::from(&adjacency_matrix(&graph));

        assert_eq!(table.vertexes, vec![n(1), n(2)]);
        assert_eq!(table.rows, vec![vec![0, 0], vec![1, 0]]);
    }

    #[test]
    fn test_empty_tables() {
        let graph = Graph::default();
        let incidence = IncidenceTable::from(&incidence_matrix(&graph));
        let adjacency = AdjacencyTable::from(&adjacency_matrix(&graph));

        assert!(incidence.vertexes.is_empty() && incidence.rows.is_empty());
        assert!(adjacency.vertexes.is_empty() && adjacency.rows.is_empty());
    }
}
