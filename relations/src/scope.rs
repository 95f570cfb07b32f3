//! Node scopes: the subset of the relation a query is evaluated over.
//!
//! A [`Domain`] pairs a graph with a validated scope. Properties are
//! evaluated on the relation *induced* by the scope: an edge counts only
//! when both of its endpoints are in scope.

use std::collections::{BTreeSet, VecDeque};

use crate::combinatorics::square;
use crate::error::RelationError;
use crate::graph::{Pair, RelationGraph};

/// A relation graph restricted to a node scope.
///
/// Construction validates the scope once; every check and extraction that
/// takes a `Domain` is then total.
#[derive(Debug)]
pub struct Domain<'g, G: RelationGraph> {
    graph: &'g G,
    nodes: Vec<G::Node>,
    members: BTreeSet<G::Node>,
}

impl<G: RelationGraph> Clone for Domain<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            nodes: self.nodes.clone(),
            members: self.members.clone(),
        }
    }
}

impl<'g, G: RelationGraph> Domain<'g, G> {
    /// The whole graph.
    pub fn full(graph: &'g G) -> Self {
        let nodes = graph.nodes();
        let members = nodes.iter().copied().collect();
        Self {
            graph,
            nodes,
            members,
        }
    }

    /// The graph restricted to `scope`. Duplicates in `scope` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] for the first scope node that
    /// is not part of the graph.
    pub fn restricted(
        graph: &'g G,
        scope: impl IntoIterator<Item = G::Node>,
    ) -> Result<Self, RelationError> {
        let members: BTreeSet<G::Node> = scope.into_iter().collect();
        if let Some(missing) = members.iter().find(|n| !graph.contains_node(**n)) {
            return Err(RelationError::unknown_node(missing));
        }
        Ok(Self {
            graph,
            nodes: members.iter().copied().collect(),
            members,
        })
    }

    /// `restricted` when a scope is given, `full` otherwise.
    ///
    /// # Errors
    ///
    /// See [`Domain::restricted`].
    pub fn new(graph: &'g G, scope: Option<&[G::Node]>) -> Result<Self, RelationError> {
        match scope {
            Some(nodes) => Self::restricted(graph, nodes.iter().copied()),
            None => Ok(Self::full(graph)),
        }
    }

    /// The underlying graph (unrestricted).
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Scope nodes, ascending.
    pub fn nodes(&self) -> &[G::Node] {
        &self.nodes
    }

    /// Number of scope nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scope is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` is in scope.
    pub fn contains(&self, node: G::Node) -> bool {
        self.members.contains(&node)
    }

    /// Edge test on the induced relation.
    pub fn has_edge(&self, from: G::Node, to: G::Node) -> bool {
        self.contains(from) && self.contains(to) && self.graph.has_edge(from, to)
    }

    /// In-scope successors of `node`.
    pub fn successors(&self, node: G::Node) -> Vec<G::Node> {
        self.graph
            .successors(node)
            .into_iter()
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// In-scope predecessors of `node`.
    pub fn predecessors(&self, node: G::Node) -> Vec<G::Node> {
        self.graph
            .predecessors(node)
            .into_iter()
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// Edges of the induced relation, ordered by source then target.
    pub fn edges(&self) -> Vec<Pair<G::Node>> {
        self.nodes
            .iter()
            .flat_map(|&x| self.successors(x).into_iter().map(move |y| (x, y)))
            .collect()
    }

    /// Every ordered pair of scope nodes, related or not.
    pub fn pairs(&self) -> BTreeSet<Pair<G::Node>> {
        square(&self.nodes)
    }

    /// Ancestors of `node` within the induced relation (`node` excluded).
    pub fn ancestors(&self, node: G::Node) -> BTreeSet<G::Node> {
        let mut seen = BTreeSet::from([node]);
        let mut queue = VecDeque::from([node]);
        while let Some(current) = queue.pop_front() {
            for pred in self.predecessors(current) {
                if seen.insert(pred) {
                    queue.push_back(pred);
                }
            }
        }
        seen.remove(&node);
        seen
    }

    /// Scope nodes with no in-scope ancestor.
    pub fn minimal_nodes(&self) -> Vec<G::Node> {
        self.nodes
            .iter()
            .copied()
            .filter(|&n| self.ancestors(n).is_empty())
            .collect()
    }

    /// Scope nodes with no in-scope successor at all. A self-loop is a
    /// successor, so on a reflexive relation no node is maximal; query the
    /// Hasse diagram instead.
    pub fn maximal_nodes(&self) -> Vec<G::Node> {
        self.nodes
            .iter()
            .copied()
            .filter(|&n| self.successors(n).is_empty())
            .collect()
    }
}
