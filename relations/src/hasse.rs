//! Hasse reduction: the covering relation of a partial order.

use std::fmt::{Debug, Display};

use petgraph::graphmap::NodeTrait;

use crate::extract::{reflexive_witnesses, transitive_witnesses};
use crate::graph::Relation;
use crate::scope::Domain;

/// Returns a copy of `graph` without edges implied by transitivity and
/// without self-loops. The input is left untouched.
///
/// Every chain `((x, y), (y, z), (x, z))` found in the input loses its
/// shortcut `(x, z)`; then every self-loop is removed. Meaningful for a
/// partial order, but any graph is reduced without complaint.
///
/// # Examples
///
/// ```
/// use relkit::graph::{divisibility, RelationGraph};
/// use relkit::hasse::to_hasse;
///
/// let hasse = to_hasse(&divisibility(4).unwrap());
/// assert_eq!(RelationGraph::edges(&hasse), vec![(1, 2), (2, 4)]);
/// ```
pub fn to_hasse<N>(graph: &Relation<N>) -> Relation<N>
where
    N: NodeTrait + Debug + Display,
{
    let mut reduced = graph.clone();
    let domain = Domain::full(graph);

    let mut shortcuts = 0usize;
    for (_, _, (x, z)) in transitive_witnesses(&domain, false) {
        if reduced.remove_edge(x, z).is_some() {
            shortcuts += 1;
        }
    }
    let mut loops = 0usize;
    for (n, _) in reflexive_witnesses(&domain, false) {
        if reduced.remove_edge(n, n).is_some() {
            loops += 1;
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        shortcuts,
        loops,
        "reduced relation to covering edges"
    );
    reduced
}
