//! The relation graph capability and its petgraph-backed container.
//!
//! The engine never depends on a concrete container. Everything it needs is
//! expressed by [`RelationGraph`]: edge test, node enumeration, one-hop
//! adjacency in both directions, ancestor sets and all shortest paths. The
//! last two have provided implementations built on the first five.
//!
//! [`Relation`] (a petgraph [`DiGraphMap`]) is the container used by the
//! Hasse reduction, the builders in this module and the report layer.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{Debug, Display};
use std::hash::Hash;

use petgraph::graphmap::{DiGraphMap, NodeTrait};
use petgraph::Direction;

use crate::combinatorics::divisors;
use crate::error::RelationError;

/// An ordered pair `(x, y)`; as an edge it reads "x relates to y".
pub type Pair<N> = (N, N);

/// A binary relation stored as a directed graph without edge weights.
pub type Relation<N> = DiGraphMap<N, ()>;

/// Read-only view of a binary relation as a directed graph.
///
/// Self-loops are meaningful (they encode reflexivity). Parallel edges do
/// not exist. Implementations must return nodes in ascending order so that
/// every query is deterministic.
pub trait RelationGraph {
    /// Element of the underlying finite set.
    type Node: Copy + Ord + Hash + Debug + Display;

    /// All nodes, ascending.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Whether `node` is an element of the set.
    fn contains_node(&self, node: Self::Node) -> bool;

    /// Whether `from` relates to `to`.
    fn has_edge(&self, from: Self::Node, to: Self::Node) -> bool;

    /// Direct successors of `node` (including `node` itself on a self-loop), ascending.
    fn successors(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Direct predecessors of `node` (including `node` itself on a self-loop), ascending.
    fn predecessors(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Every edge, ordered by source then target.
    fn edges(&self) -> Vec<Pair<Self::Node>> {
        self.nodes()
            .into_iter()
            .flat_map(|x| self.successors(x).into_iter().map(move |y| (x, y)))
            .collect()
    }

    /// Every node from which `node` can be reached. `node` itself is never
    /// included, even when it lies on a cycle.
    fn ancestors(&self, node: Self::Node) -> BTreeSet<Self::Node> {
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

    /// All shortest paths from `from` to `to`, each listed node by node.
    ///
    /// Returns `[[from]]` when `from == to` and an empty vector when `to`
    /// is unreachable. An unreachable target is not an error.
    fn shortest_paths(&self, from: Self::Node, to: Self::Node) -> Vec<Vec<Self::Node>> {
        if from == to {
            return vec![vec![from]];
        }

        // BFS layering, remembering every parent one layer closer to `from`.
        let mut depth: BTreeMap<Self::Node, usize> = BTreeMap::from([(from, 0)]);
        let mut parents: BTreeMap<Self::Node, Vec<Self::Node>> = BTreeMap::new();
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            let d = depth.get(&current).copied().unwrap_or_default();
            if depth.get(&to).is_some_and(|&target| d >= target) {
                break;
            }
            for next in self.successors(current) {
                match depth.get(&next) {
                    None => {
                        depth.insert(next, d + 1);
                        parents.entry(next).or_default().push(current);
                        queue.push_back(next);
                    }
                    Some(&known) if known == d + 1 => {
                        parents.entry(next).or_default().push(current);
                    }
                    Some(_) => {}
                }
            }
        }

        if !parents.contains_key(&to) {
            return Vec::new();
        }

        let mut paths = Vec::new();
        let mut stack = vec![vec![to]];
        while let Some(partial) = stack.pop() {
            let Some(&head) = partial.last() else {
                continue;
            };
            if head == from {
                paths.push(partial.into_iter().rev().collect());
                continue;
            }
            for &parent in parents.get(&head).into_iter().flatten() {
                let mut extended = partial.clone();
                extended.push(parent);
                stack.push(extended);
            }
        }
        paths.sort();
        paths
    }
}

impl<N, E> RelationGraph for DiGraphMap<N, E>
where
    N: NodeTrait + Debug + Display,
{
    type Node = N;

    fn nodes(&self) -> Vec<N> {
        let mut nodes: Vec<N> = DiGraphMap::nodes(self).collect();
        nodes.sort_unstable();
        nodes
    }

    fn contains_node(&self, node: N) -> bool {
        DiGraphMap::contains_node(self, node)
    }

    fn has_edge(&self, from: N, to: N) -> bool {
        self.contains_edge(from, to)
    }

    fn successors(&self, node: N) -> Vec<N> {
        sorted_neighbors(self, node, Direction::Outgoing)
    }

    fn predecessors(&self, node: N) -> Vec<N> {
        sorted_neighbors(self, node, Direction::Incoming)
    }
}

fn sorted_neighbors<N: NodeTrait, E>(graph: &DiGraphMap<N, E>, node: N, dir: Direction) -> Vec<N> {
    if !graph.contains_node(node) {
        return Vec::new();
    }
    let mut out: Vec<N> = graph.neighbors_directed(node, dir).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Builds a relation from a node set and a set of related pairs.
///
/// Endpoints of `pairs` that are missing from `nodes` are added as nodes.
pub fn relation_from<N: NodeTrait>(
    nodes: impl IntoIterator<Item = N>,
    pairs: impl IntoIterator<Item = Pair<N>>,
) -> Relation<N> {
    let mut graph = Relation::new();
    for node in nodes {
        graph.add_node(node);
    }
    add_pairs(&mut graph, pairs, false);
    graph
}

/// Adds every pair as an edge, reversed when `inverse` is set.
pub fn add_pairs<N: NodeTrait>(
    graph: &mut Relation<N>,
    pairs: impl IntoIterator<Item = Pair<N>>,
    inverse: bool,
) {
    for (x, y) in pairs {
        if inverse {
            graph.add_edge(y, x, ());
        } else {
            graph.add_edge(x, y, ());
        }
    }
}

/// Every pair `(x, y)` of `nodes × nodes` satisfying `condition`, reversed
/// to `(y, x)` when `inverse` is set.
pub fn generate_pairs<N, F>(nodes: &[N], condition: F, inverse: bool) -> Vec<Pair<N>>
where
    N: Copy,
    F: Fn(N, N) -> bool,
{
    let mut out = Vec::new();
    for &x in nodes {
        for &y in nodes {
            if condition(x, y) {
                out.push(if inverse { (y, x) } else { (x, y) });
            }
        }
    }
    out
}

/// The divisibility order on the divisors of `n`: `x` relates to `y` iff
/// `x` divides `y`. Reflexive, anti-symmetric and transitive.
///
/// # Errors
///
/// Returns [`RelationError::InvalidArgument`] if `n <= 0`.
pub fn divisibility(n: i64) -> Result<Relation<i64>, RelationError> {
    let nodes: Vec<i64> = divisors(n)?.into_iter().collect();
    let pairs = generate_pairs(&nodes, |x, y| y % x == 0, false);
    Ok(relation_from(nodes, pairs))
}
