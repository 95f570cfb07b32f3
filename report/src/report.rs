//! Report types: classification flags, rendered witnesses, lattice summary.

use std::collections::BTreeMap;
use std::fmt::Display;

use relkit::extract::{SymmetricPair, TransitiveTriple};
use relkit::Pair;
use serde::Serialize;

use crate::config::AnalysisConfig;

/// Full analysis of one relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationReport {
    /// The analysed nodes (the scope, or every node).
    pub nodes: Vec<String>,
    /// Options the report was built with.
    pub config: AnalysisConfig,
    /// The twelve classification flags, keyed by property name.
    pub relations_type: BTreeMap<String, bool>,
    /// Witnesses and listings rendered as `(x, y)` strings.
    pub related_nodes: RelatedNodes,
    /// Lattice predicates, computed on the Hasse diagram.
    pub lattice: LatticeSummary,
    /// Distinct diagnostics raised while computing the lattice section.
    pub diagnostics: Vec<String>,
}

/// Rendered witness sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelatedNodes {
    /// Self-loops.
    pub reflexive: Vec<String>,
    /// Reciprocal edge pairs, when symmetric.
    pub symmetric: Vec<String>,
    /// Reciprocal edge pairs, when neither symmetric nor anti-symmetric.
    pub not_symmetric: Vec<String>,
    /// Closed two-step chains.
    pub transitive: Vec<String>,
    /// Open two-step chains.
    pub not_transitive: Vec<String>,
    /// Every pair reversed, in `format_pairs` form.
    pub inverse: String,
    /// Every pair, in `format_pairs` form.
    pub relations: String,
}

/// Lattice-level view of the relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LatticeSummary {
    /// Every pair of nodes has a join and a meet.
    pub is_lattice: bool,
    /// A minimal and a maximal node exist.
    pub bounded: bool,
    /// Every node has a complement.
    pub complemented: bool,
    /// Meet distributes over join.
    pub distributed: bool,
    /// Complemented and distributive.
    pub boolean_algebra: bool,
    /// Provisional global minimum.
    pub minimum: Option<String>,
    /// Provisional global maximum.
    pub maximum: Option<String>,
    /// Complement of each node, in node order.
    pub complements: Vec<Complement>,
}

/// One entry of [`LatticeSummary::complements`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Complement {
    /// The node.
    pub node: String,
    /// Its complement, if any.
    pub complement: Option<String>,
}

impl RelationReport {
    /// Flags that hold, in name order.
    pub fn holding(&self) -> Vec<&str> {
        self.relations_type
            .iter()
            .filter(|(_, holds)| **holds)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Lattice predicates as `(name, holds)` pairs, in display order.
    pub fn lattice_flags(&self) -> [(&'static str, bool); 5] {
        [
            ("lattice", self.lattice.is_lattice),
            ("bounded", self.lattice.bounded),
            ("complemented", self.lattice.complemented),
            ("distributed", self.lattice.distributed),
            ("boolean_algebra", self.lattice.boolean_algebra),
        ]
    }
}

/// `(x, y)`.
pub fn format_pair<N: Display>((x, y): &Pair<N>) -> String {
    format!("({x}, {y})")
}

/// `(x, y), (y, x)`.
pub fn format_symmetric<N: Display>((a, b): &SymmetricPair<N>) -> String {
    format!("{}, {}", format_pair(a), format_pair(b))
}

/// `(x, y), (y, z), (x, z)`.
pub fn format_triple<N: Display>((a, b, c): &TransitiveTriple<N>) -> String {
    format!("{}, {}, {}", format_pair(a), format_pair(b), format_pair(c))
}

/// Every pair as `(x, y), `, concatenated; empty input gives `""`.
pub fn format_pairs<'a, N: Display + 'a>(pairs: impl IntoIterator<Item = &'a Pair<N>>) -> String {
    pairs
        .into_iter()
        .map(|p| format!("{}, ", format_pair(p)))
        .collect()
}
