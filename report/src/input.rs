//! Relation documents: `{"nodes": [...], "relations": [[x, y], ...]}`.

use relkit::graph::{add_pairs, Relation};
use relkit::{Pair, RelationError};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A relation as read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationInput {
    /// The underlying set.
    pub nodes: Vec<i64>,
    /// Related pairs; both endpoints must appear in `nodes`.
    #[serde(default)]
    pub relations: Vec<Pair<i64>>,
}

impl RelationInput {
    /// Parses a relation document.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Json`] if `text` is not a relation document.
    pub fn from_json(text: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the relation graph, reversing every pair when `inverse` is set.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if a pair references a node
    /// missing from `nodes`.
    pub fn into_relation(self, inverse: bool) -> Result<Relation<i64>, ReportError> {
        let mut graph = Relation::new();
        for &node in &self.nodes {
            graph.add_node(node);
        }
        for &(x, y) in &self.relations {
            for end in [x, y] {
                if !graph.contains_node(end) {
                    return Err(RelationError::UnknownNode(end.to_string()).into());
                }
            }
        }
        add_pairs(&mut graph, self.relations, inverse);
        Ok(graph)
    }
}
