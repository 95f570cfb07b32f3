//! Lattice operations on a relation graph: common bounds, join, meet,
//! global bounds and complements.
//!
//! Queries are meant for a Hasse graph ([`crate::hasse::to_hasse`]).
//! Candidates are ranked by path length, and on a transitively closed
//! order every comparable pair is one hop apart, so ties would hide the
//! real bound.
//!
//! Reachability and hop counts come from one breadth-first search per
//! node and direction, and candidate sets are remembered per pair. Both
//! tables live as long as the [`Lattice`], so build one per batch of
//! queries over an unchanging graph.
//!
//! # Bound selection
//!
//! For `join(x, y)`:
//! 1. If exactly one of `x`, `y` reaches the other, the reached node is
//!    the join. (`join(x, x) == x`.)
//! 2. Otherwise every common successor is a candidate, scored by its
//!    breadth-first depth from `x` plus its depth from `y`.
//! 3. A unique minimum-score candidate is the join. No candidate, or a
//!    tie, yields `None` and a [`Diagnostic`] on the injected sink.
//!
//! `meet` is the mirror image over predecessors.
//!
//! # Examples
//!
//! ```
//! use relkit::diagnostics::Silent;
//! use relkit::graph::relation_from;
//! use relkit::lattice::Lattice;
//!
//! let g = relation_from(
//!     [1, 2, 4, 5, 10, 20],
//!     [(1, 2), (1, 5), (2, 4), (5, 10), (2, 10), (4, 20), (10, 20)],
//! );
//! let lattice = Lattice::new(&g, &Silent);
//! assert_eq!(lattice.meet(4, 10).unwrap(), Some(2));
//! assert_eq!(lattice.join(4, 10).unwrap(), Some(20));
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use crate::combinatorics::{gcd, lcm};
use crate::diagnostics::{BoundKind, Diagnostic, DiagnosticSink, Extremum};
use crate::error::RelationError;
use crate::graph::{Pair, RelationGraph};
use crate::scope::Domain;

/// Provisional global minimum and maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalBounds<N> {
    /// Smallest node without ancestors, if any.
    pub minimum: Option<N>,
    /// Smallest node without successors, if any.
    pub maximum: Option<N>,
}

/// Lattice queries over a graph, reporting undefined and ambiguous results
/// to a [`DiagnosticSink`].
pub struct Lattice<'g, 's, G: RelationGraph> {
    graph: &'g G,
    sink: &'s dyn DiagnosticSink<G::Node>,
    depths: RefCell<BTreeMap<(BoundKind, G::Node), Rc<Depths<G::Node>>>>,
    bounds: RefCell<BTreeMap<(BoundKind, G::Node, G::Node), Rc<BTreeSet<G::Node>>>>,
}

/// Hop count from a start node to everything it reaches; the start is at 0.
type Depths<N> = BTreeMap<N, usize>;

impl<'g, 's, G: RelationGraph> Lattice<'g, 's, G> {
    /// Binds the engine to a graph and a diagnostic sink.
    pub fn new(graph: &'g G, sink: &'s dyn DiagnosticSink<G::Node>) -> Self {
        Self {
            graph,
            sink,
            depths: RefCell::new(BTreeMap::new()),
            bounds: RefCell::new(BTreeMap::new()),
        }
    }

    /// The graph queries run against.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    fn require(&self, node: G::Node) -> Result<(), RelationError> {
        if self.graph.contains_node(node) {
            Ok(())
        } else {
            Err(RelationError::unknown_node(node))
        }
    }

    /// Every node reachable from `node` by one or more hops.
    ///
    /// Self-loops are not followed, so `node` itself is included only when
    /// it lies on a longer cycle.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if `node` is not in the graph.
    pub fn descendants(&self, node: G::Node) -> Result<BTreeSet<G::Node>, RelationError> {
        self.require(node)?;
        Ok(self.closure(node, BoundKind::Join))
    }

    /// Every node from which `node` is reachable by one or more hops, with
    /// the same self-loop rule as [`Lattice::descendants`].
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if `node` is not in the graph.
    pub fn ascendants(&self, node: G::Node) -> Result<BTreeSet<G::Node>, RelationError> {
        self.require(node)?;
        Ok(self.closure(node, BoundKind::Meet))
    }

    /// Worklist closure: forward for joins, backward for meets.
    fn closure(&self, start: G::Node, kind: BoundKind) -> BTreeSet<G::Node> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            let next = match kind {
                BoundKind::Join => self.graph.successors(current),
                BoundKind::Meet => self.graph.predecessors(current),
            };
            for n in next {
                if n != current && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen
    }

    /// Breadth-first depths from `start`: forward for joins, backward for
    /// meets. Computed once per node and direction.
    fn depths(&self, start: G::Node, kind: BoundKind) -> Rc<Depths<G::Node>> {
        if let Some(known) = self.depths.borrow().get(&(kind, start)) {
            return Rc::clone(known);
        }
        let mut depth = BTreeMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let d = depth.get(&current).copied().unwrap_or_default();
            let next = match kind {
                BoundKind::Join => self.graph.successors(current),
                BoundKind::Meet => self.graph.predecessors(current),
            };
            for n in next {
                if !depth.contains_key(&n) {
                    depth.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        let depth = Rc::new(depth);
        self.depths
            .borrow_mut()
            .insert((kind, start), Rc::clone(&depth));
        depth
    }

    fn reaches(&self, from: G::Node, to: G::Node) -> bool {
        self.depths(from, BoundKind::Join).contains_key(&to)
    }

    /// Upper bounds shared by `x` and `y`: the intersection of their
    /// descendants, plus `y` if `x` reaches it and `x` if `y` reaches it.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if either node is not in the graph.
    pub fn common_successors(
        &self,
        x: G::Node,
        y: G::Node,
    ) -> Result<BTreeSet<G::Node>, RelationError> {
        self.require(x)?;
        self.require(y)?;
        Ok(self.common(x, y, BoundKind::Join))
    }

    /// Lower bounds shared by `x` and `y`: the intersection of their
    /// ascendants, plus `x` if it reaches `y` and `y` if it reaches `x`.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if either node is not in the graph.
    pub fn common_predecessors(
        &self,
        x: G::Node,
        y: G::Node,
    ) -> Result<BTreeSet<G::Node>, RelationError> {
        self.require(x)?;
        self.require(y)?;
        Ok(self.common(x, y, BoundKind::Meet))
    }

    fn common(&self, x: G::Node, y: G::Node, kind: BoundKind) -> BTreeSet<G::Node> {
        let mut result: BTreeSet<G::Node> = self
            .closure(x, kind)
            .intersection(&self.closure(y, kind))
            .copied()
            .collect();
        let (x_below, y_below) = match kind {
            BoundKind::Join => (y, x),
            BoundKind::Meet => (x, y),
        };
        if self.reaches(x, y) {
            result.insert(x_below);
        }
        if self.reaches(y, x) {
            result.insert(y_below);
        }
        result
    }

    /// The nodes tied for the bound of `x` and `y` (see module docs).
    /// Symmetric in `x` and `y`, so each unordered pair is computed once.
    fn candidates(&self, x: G::Node, y: G::Node, kind: BoundKind) -> Rc<BTreeSet<G::Node>> {
        let key = (kind, x.min(y), x.max(y));
        if let Some(known) = self.bounds.borrow().get(&key) {
            return Rc::clone(known);
        }
        let found = Rc::new(self.rank(x, y, kind));
        self.bounds.borrow_mut().insert(key, Rc::clone(&found));
        found
    }

    fn rank(&self, x: G::Node, y: G::Node, kind: BoundKind) -> BTreeSet<G::Node> {
        if x == y {
            return BTreeSet::from([x]);
        }
        let from_x = self.depths(x, kind);
        let from_y = self.depths(y, kind);
        // `from_x` holds y exactly when y is on x's side of the bound.
        match (from_x.contains_key(&y), from_y.contains_key(&x)) {
            (true, false) => return BTreeSet::from([y]),
            (false, true) => return BTreeSet::from([x]),
            // Mutually reachable nodes are indistinguishable as bounds.
            (true, true) => return BTreeSet::from([x, y]),
            (false, false) => {}
        }

        let mut best: Option<usize> = None;
        let mut winners = BTreeSet::new();
        for (&candidate, &dx) in from_x.iter() {
            let Some(&dy) = from_y.get(&candidate) else {
                continue;
            };
            let score = dx + dy;
            match best {
                Some(b) if score > b => {}
                Some(b) if score == b => {
                    winners.insert(candidate);
                }
                _ => {
                    best = Some(score);
                    winners = BTreeSet::from([candidate]);
                }
            }
        }
        winners
    }

    fn select(&self, x: G::Node, y: G::Node, kind: BoundKind) -> Option<G::Node> {
        let candidates = self.candidates(x, y, kind);
        let mut iter = candidates.iter().copied();
        match (iter.next(), iter.next()) {
            (Some(only), None) => Some(only),
            (None, _) => {
                self.sink.emit(Diagnostic::NoBound {
                    kind,
                    left: x,
                    right: y,
                });
                None
            }
            (Some(_), Some(_)) => {
                self.sink.emit(Diagnostic::AmbiguousBound {
                    kind,
                    left: x,
                    right: y,
                    candidates: candidates.iter().copied().collect(),
                });
                None
            }
        }
    }

    pub(crate) fn join_of(&self, x: G::Node, y: G::Node) -> Option<G::Node> {
        self.select(x, y, BoundKind::Join)
    }

    pub(crate) fn meet_of(&self, x: G::Node, y: G::Node) -> Option<G::Node> {
        self.select(x, y, BoundKind::Meet)
    }

    /// Minimal upper bound of `x` and `y`; `None` when undefined or ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if either node is not in the graph.
    pub fn join(&self, x: G::Node, y: G::Node) -> Result<Option<G::Node>, RelationError> {
        self.require(x)?;
        self.require(y)?;
        Ok(self.join_of(x, y))
    }

    /// Maximal lower bound of `x` and `y`; `None` when undefined or ambiguous.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if either node is not in the graph.
    pub fn meet(&self, x: G::Node, y: G::Node) -> Result<Option<G::Node>, RelationError> {
        self.require(x)?;
        self.require(y)?;
        Ok(self.meet_of(x, y))
    }

    fn distinct_pairs(&self) -> Vec<Pair<G::Node>> {
        let nodes = self.graph.nodes();
        let mut out = Vec::new();
        for (i, &x) in nodes.iter().enumerate() {
            for &y in &nodes[i + 1..] {
                out.push((x, y));
            }
        }
        out
    }

    /// [`Lattice::common_successors`] for every unordered pair of distinct nodes.
    pub fn all_common_successors(&self) -> Vec<(Pair<G::Node>, BTreeSet<G::Node>)> {
        self.distinct_pairs()
            .into_iter()
            .map(|(x, y)| ((x, y), self.common(x, y, BoundKind::Join)))
            .collect()
    }

    /// [`Lattice::common_predecessors`] for every unordered pair of distinct nodes.
    pub fn all_common_predecessors(&self) -> Vec<(Pair<G::Node>, BTreeSet<G::Node>)> {
        self.distinct_pairs()
            .into_iter()
            .map(|(x, y)| ((x, y), self.common(x, y, BoundKind::Meet)))
            .collect()
    }

    /// [`Lattice::join`] for every unordered pair of distinct nodes.
    pub fn all_joins(&self) -> Vec<(Pair<G::Node>, Option<G::Node>)> {
        self.distinct_pairs()
            .into_iter()
            .map(|(x, y)| ((x, y), self.join_of(x, y)))
            .collect()
    }

    /// [`Lattice::meet`] for every unordered pair of distinct nodes.
    pub fn all_meets(&self) -> Vec<(Pair<G::Node>, Option<G::Node>)> {
        self.distinct_pairs()
            .into_iter()
            .map(|(x, y)| ((x, y), self.meet_of(x, y)))
            .collect()
    }

    /// The smallest node without ancestors and the smallest node without
    /// successors. Several qualifying nodes raise an ambiguity diagnostic;
    /// callers needing a true global bound must check the log.
    pub fn global_bounds(&self) -> GlobalBounds<G::Node> {
        self.global_bounds_in(&Domain::full(self.graph))
    }

    /// [`Lattice::global_bounds`] restricted to the nodes of `domain`.
    pub fn global_bounds_in(&self, domain: &Domain<'_, G>) -> GlobalBounds<G::Node> {
        GlobalBounds {
            minimum: self.pick(Extremum::Minimum, domain.minimal_nodes()),
            maximum: self.pick(Extremum::Maximum, domain.maximal_nodes()),
        }
    }

    fn pick(&self, extremum: Extremum, candidates: Vec<G::Node>) -> Option<G::Node> {
        let chosen = candidates.first().copied();
        match chosen {
            None => self.sink.emit(Diagnostic::MissingGlobalBound { extremum }),
            Some(chosen) if candidates.len() > 1 => {
                self.sink.emit(Diagnostic::AmbiguousGlobalBound {
                    extremum,
                    candidates,
                    chosen,
                });
            }
            Some(_) => {}
        }
        chosen
    }

    /// The first other node whose join with `node` is the global maximum
    /// and whose meet with `node` is the global minimum.
    ///
    /// # Errors
    ///
    /// Returns [`RelationError::UnknownNode`] if `node` is not in the graph.
    pub fn complement(&self, node: G::Node) -> Result<Option<G::Node>, RelationError> {
        self.require(node)?;
        let domain = Domain::full(self.graph);
        let bounds = self.global_bounds_in(&domain);
        Ok(self.complement_among(node, &domain, &bounds))
    }

    pub(crate) fn complement_among(
        &self,
        node: G::Node,
        domain: &Domain<'_, G>,
        bounds: &GlobalBounds<G::Node>,
    ) -> Option<G::Node> {
        if let (Some(minimum), Some(maximum)) = (bounds.minimum, bounds.maximum) {
            for &other in domain.nodes() {
                if other == node {
                    continue;
                }
                if self.join_of(node, other) == Some(maximum)
                    && self.meet_of(node, other) == Some(minimum)
                {
                    return Some(other);
                }
            }
        }
        self.sink.emit(Diagnostic::NoComplement { node });
        None
    }

    /// Complement of every node.
    pub fn complements(&self) -> BTreeMap<G::Node, Option<G::Node>> {
        self.complements_in(&Domain::full(self.graph))
    }

    /// Complement of every scope node, searched among the scope and
    /// measured against the scope's global bounds.
    pub fn complements_in(&self, domain: &Domain<'_, G>) -> BTreeMap<G::Node, Option<G::Node>> {
        let bounds = self.global_bounds_in(domain);
        domain
            .nodes()
            .iter()
            .map(|&n| (n, self.complement_among(n, domain, &bounds)))
            .collect()
    }
}

/// Meet of a divisibility order: `gcd(x, y)` if it is a node.
pub fn numeric_meet<G: RelationGraph<Node = i64>>(graph: &G, x: i64, y: i64) -> Option<i64> {
    let g = gcd(x, y);
    graph.contains_node(g).then_some(g)
}

/// Join of a divisibility order: `lcm(x, y)` if it is a node. An lcm
/// outside the `i64` range is never a node.
pub fn numeric_join<G: RelationGraph<Node = i64>>(graph: &G, x: i64, y: i64) -> Option<i64> {
    lcm(x, y).filter(|&l| graph.contains_node(l))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticLog, Silent};
    use crate::graph::{divisibility, relation_from, Relation};
    use crate::hasse::to_hasse;

    fn divisors_of_twenty() -> Relation<i64> {
        relation_from(
            [1, 2, 4, 5, 10, 20],
            [(1, 2), (1, 5), (2, 4), (5, 10), (2, 10), (4, 20), (10, 20)],
        )
    }

    fn diamonds() -> Relation<char> {
        relation_from(
            ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'],
            [
                ('a', 'c'),
                ('b', 'c'),
                ('c', 'e'),
                ('c', 'd'),
                ('d', 'f'),
                ('d', 'g'),
                ('e', 'f'),
                ('e', 'g'),
                ('f', 'h'),
                ('g', 'h'),
            ],
        )
    }

    #[test]
    fn common_successors_include_reachable_partner() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        let cases: [(i64, i64, &[i64]); 7] = [
            (1, 2, &[2, 4, 10, 20]),
            (1, 4, &[4, 20]),
            (1, 5, &[5, 10, 20]),
            (2, 5, &[10, 20]),
            (2, 20, &[20]),
            (5, 20, &[20]),
            (5, 10, &[10, 20]),
        ];
        for (x, y, expected) in cases {
            let got: Vec<i64> = l.common_successors(x, y).unwrap().into_iter().collect();
            assert_eq!(got, expected, "common successors of {x} and {y}");
        }
    }

    #[test]
    fn common_predecessors_include_reaching_partner() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        let cases: [(i64, i64, &[i64]); 6] = [
            (2, 4, &[1, 2]),
            (1, 2, &[1]),
            (1, 20, &[1]),
            (1, 5, &[1]),
            (5, 20, &[1, 5]),
            (5, 10, &[1, 5]),
        ];
        for (x, y, expected) in cases {
            let got: Vec<i64> = l.common_predecessors(x, y).unwrap().into_iter().collect();
            assert_eq!(got, expected, "common predecessors of {x} and {y}");
        }
    }

    #[test]
    fn joins_in_divisor_poset() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        for (x, y, j) in [(1, 2, 2), (1, 4, 4), (4, 10, 20), (2, 20, 20), (5, 10, 10)] {
            assert_eq!(l.join(x, y).unwrap(), Some(j), "join of {x} and {y}");
        }
    }

    #[test]
    fn meets_in_divisor_poset() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        for (x, y, m) in [(1, 2, 1), (1, 4, 1), (1, 10, 1), (2, 4, 2), (5, 20, 5)] {
            assert_eq!(l.meet(x, y).unwrap(), Some(m), "meet of {x} and {y}");
        }
    }

    #[test]
    fn meets_across_diamonds() {
        let g = diamonds();
        let log = DiagnosticLog::new();
        let l = Lattice::new(&g, &log);
        assert_eq!(l.meet('a', 'b').unwrap(), None);
        assert_eq!(l.meet('d', 'e').unwrap(), Some('c'));
        assert_eq!(l.meet('f', 'g').unwrap(), None);
        assert_eq!(
            log.events(),
            vec![
                Diagnostic::NoBound {
                    kind: BoundKind::Meet,
                    left: 'a',
                    right: 'b',
                },
                Diagnostic::AmbiguousBound {
                    kind: BoundKind::Meet,
                    left: 'f',
                    right: 'g',
                    candidates: vec!['d', 'e'],
                },
            ]
        );
    }

    #[test]
    fn join_across_diamonds_is_ambiguous() {
        let g = diamonds();
        let log = DiagnosticLog::new();
        let l = Lattice::new(&g, &log);
        assert_eq!(l.join('d', 'e').unwrap(), None);
        assert_eq!(
            log.into_events(),
            vec![Diagnostic::AmbiguousBound {
                kind: BoundKind::Join,
                left: 'd',
                right: 'e',
                candidates: vec!['f', 'g'],
            }]
        );
    }

    #[test]
    fn bound_of_node_with_itself() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        assert_eq!(l.join(4, 4).unwrap(), Some(4));
        assert_eq!(l.meet(4, 4).unwrap(), Some(4));
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        assert_eq!(
            l.join(4, 3),
            Err(RelationError::UnknownNode("3".to_owned()))
        );
        assert!(l.meet(7, 4).is_err());
        assert!(l.common_successors(1, 99).is_err());
        assert!(l.complement(99).is_err());
    }

    #[test]
    fn mutual_reachability_is_ambiguous() {
        let g = relation_from([1, 2], [(1, 2), (2, 1)]);
        let l = Lattice::new(&g, &Silent);
        assert_eq!(l.join(1, 2).unwrap(), None);
        assert_eq!(l.join(2, 1).unwrap(), None);
    }

    #[test]
    fn descendants_skip_self_loops_but_follow_cycles() {
        let looped = relation_from([1, 2], [(1, 1), (1, 2)]);
        let l = Lattice::new(&looped, &Silent);
        assert_eq!(l.descendants(1).unwrap(), BTreeSet::from([2]));

        let cycle = relation_from([1, 2, 3], [(1, 2), (2, 3), (3, 1)]);
        let l = Lattice::new(&cycle, &Silent);
        assert_eq!(l.descendants(1).unwrap(), BTreeSet::from([1, 2, 3]));
        assert_eq!(l.ascendants(2).unwrap(), BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn global_bounds_of_divisor_lattice() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        assert_eq!(
            l.global_bounds(),
            GlobalBounds {
                minimum: Some(1),
                maximum: Some(20),
            }
        );
    }

    #[test]
    fn global_bounds_pick_smallest_and_report_ties() {
        let g = diamonds();
        let log = DiagnosticLog::new();
        let l = Lattice::new(&g, &log);
        let bounds = l.global_bounds();
        assert_eq!(bounds.minimum, Some('a'));
        assert_eq!(bounds.maximum, Some('h'));
        assert_eq!(
            log.events(),
            vec![Diagnostic::AmbiguousGlobalBound {
                extremum: Extremum::Minimum,
                candidates: vec!['a', 'b'],
                chosen: 'a',
            }]
        );
    }

    #[test]
    fn complements_in_boolean_lattice() {
        let g = to_hasse(&divisibility(30).unwrap());
        let l = Lattice::new(&g, &Silent);
        let complements = l.complements();
        assert_eq!(complements[&1], Some(30));
        assert_eq!(complements[&2], Some(15));
        assert_eq!(complements[&3], Some(10));
        assert_eq!(complements[&5], Some(6));
        assert_eq!(complements[&30], Some(1));
    }

    #[test]
    fn complements_within_a_sublattice() {
        let g = to_hasse(&divisibility(30).unwrap());
        let l = Lattice::new(&g, &Silent);
        let square = Domain::restricted(&g, [1, 2, 3, 6]).unwrap();
        assert_eq!(
            l.global_bounds_in(&square),
            GlobalBounds {
                minimum: Some(1),
                maximum: Some(6),
            }
        );
        let complements = l.complements_in(&square);
        assert_eq!(complements.len(), 4);
        assert_eq!(complements[&1], Some(6));
        assert_eq!(complements[&2], Some(3));
        assert_eq!(complements[&3], Some(2));
    }

    #[test]
    fn complement_missing_is_logged() {
        let g = divisors_of_twenty();
        let log = DiagnosticLog::new();
        let l = Lattice::new(&g, &log);
        assert_eq!(l.complement(4).unwrap(), Some(5));
        log.clear();
        assert_eq!(l.complement(2).unwrap(), None);
        assert!(log
            .events()
            .contains(&Diagnostic::NoComplement { node: 2 }));
    }

    #[test]
    fn pairwise_enumerations_cover_distinct_pairs() {
        let g = divisors_of_twenty();
        let l = Lattice::new(&g, &Silent);
        assert_eq!(l.all_joins().len(), 15);
        assert_eq!(l.all_meets().len(), 15);
        assert_eq!(l.all_common_successors().len(), 15);
        let (pair, preds) = &l.all_common_predecessors()[0];
        assert_eq!(*pair, (1, 2));
        assert_eq!(preds, &BTreeSet::from([1]));
    }

    #[test]
    fn numeric_shortcuts() {
        let g = divisibility(20).unwrap();
        assert_eq!(numeric_meet(&g, 4, 10), Some(2));
        assert_eq!(numeric_join(&g, 4, 10), Some(20));
        assert_eq!(numeric_join(&g, 4, 5), Some(20));
        let partial = relation_from([2, 3, 4], []);
        assert_eq!(numeric_join(&partial, 2, 3), None);
        assert_eq!(numeric_meet(&partial, 2, 3), None);
    }

    #[test]
    fn numeric_join_out_of_range_is_none() {
        let g = relation_from([2, i64::MAX], []);
        assert_eq!(numeric_join(&g, i64::MAX, 2), None);
        assert_eq!(numeric_join(&g, i64::MAX, i64::MAX), Some(i64::MAX));
    }

    #[test]
    fn bounds_agree_with_gcd_and_lcm_on_six_primes() {
        let g = to_hasse(&divisibility(30030).unwrap());
        let l = Lattice::new(&g, &Silent);
        for (x, y) in [(2, 3), (6, 35), (143, 21), (30, 1001), (2310, 13), (15015, 2)] {
            assert_eq!(l.join(x, y).unwrap(), numeric_join(&g, x, y), "join of {x} and {y}");
            assert_eq!(l.meet(x, y).unwrap(), numeric_meet(&g, x, y), "meet of {x} and {y}");
        }
        assert_eq!(l.join(1, 30030).unwrap(), Some(30030));
    }

    #[test]
    fn repeated_queries_report_every_time() {
        let g = diamonds();
        let log = DiagnosticLog::new();
        let l = Lattice::new(&g, &log);
        assert_eq!(l.join('d', 'e').unwrap(), None);
        assert_eq!(l.join('e', 'd').unwrap(), None);
        assert_eq!(log.len(), 2);
        assert_eq!(log.distinct().len(), 2);
    }
}
