//! Boolean predicates classifying a relation.
//!
//! Every predicate takes a [`Domain`] (graph plus validated scope) and is
//! total. Over an empty scope, universally quantified predicates hold
//! vacuously and existential ones (`is_not_*`) do not.
//!
//! The primitive families are reflexivity, symmetry and transitivity; the
//! order-theoretic predicates are conjunctions of them. Lattice-level
//! predicates ([`is_lattice`], [`is_complemented`], [`is_distributed`],
//! [`is_boolean_algebra`]) delegate meet/join to [`Lattice`] and should be
//! asked of a Hasse graph (see [`crate::hasse::to_hasse`]). Bounds are
//! found in the whole graph, and one that falls outside the scope counts
//! as missing: a restricted scope passes only if it is closed under the
//! graph's join and meet.

use crate::diagnostics::DiagnosticSink;
use crate::graph::RelationGraph;
use crate::lattice::Lattice;
use crate::scope::Domain;

/// How [`is_total_order_with`] tests that every pair of elements is related.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TotalOrderMode {
    /// Every ordered pair must be related in *both* directions. Combined
    /// with anti-symmetry this only holds for scopes of at most one node;
    /// kept because reports produced with it must stay reproducible.
    #[default]
    Mutual,
    /// Every ordered pair must be related in at least one direction
    /// (comparability), the textbook definition.
    Comparable,
}

/// Every scope node has a self-loop.
pub fn is_reflexive<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    domain.nodes().iter().all(|&n| domain.has_edge(n, n))
}

/// No scope node has a self-loop.
pub fn is_anti_reflexive<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    domain.nodes().iter().all(|&n| !domain.has_edge(n, n))
}

/// Some, but not all, scope nodes have a self-loop.
///
/// This is a third category next to reflexive and anti-reflexive, not the
/// negation of [`is_reflexive`].
pub fn is_not_reflexive<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    !is_reflexive(domain) && domain.nodes().iter().any(|&n| domain.has_edge(n, n))
}

/// Every edge `(x, y)` with `x != y` has its reverse.
pub fn is_symmetric<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    domain
        .edges()
        .into_iter()
        .filter(|(x, y)| x != y)
        .all(|(x, y)| domain.has_edge(y, x))
}

/// No edge `(x, y)` with `x != y` has its reverse.
pub fn is_anti_symmetric<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    domain
        .edges()
        .into_iter()
        .filter(|(x, y)| x != y)
        .all(|(x, y)| !domain.has_edge(y, x))
}

/// Neither symmetric nor anti-symmetric: some, but not all, edges between
/// distinct nodes are reciprocated.
pub fn is_not_symmetric<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    !is_symmetric(domain) && !is_anti_symmetric(domain)
}

/// Every chain `x -> y -> z` (with `x != y`, `y != z`) has the shortcut `x -> z`.
///
/// `(x, y)` ranges over the scope's cross product; `z` over the actual
/// in-scope successors of `y`.
pub fn is_transitive<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    closure_chains(domain).into_iter().all(|(x, _, z)| domain.has_edge(x, z))
}

/// At least one chain `x -> y -> z` lacks the shortcut `x -> z`.
pub fn is_not_transitive<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    closure_chains(domain).into_iter().any(|(x, _, z)| !domain.has_edge(x, z))
}

/// Every two-hop chain `(x, y, z)` the transitivity rule constrains.
pub(crate) fn closure_chains<G: RelationGraph>(
    domain: &Domain<'_, G>,
) -> Vec<(G::Node, G::Node, G::Node)> {
    let mut chains = Vec::new();
    for (x, y) in domain.pairs() {
        if x == y || !domain.has_edge(x, y) {
            continue;
        }
        for z in domain.successors(y) {
            if z != y {
                chains.push((x, y, z));
            }
        }
    }
    chains
}

/// Reflexive, symmetric and transitive.
pub fn is_equivalent<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    is_reflexive(domain) && is_symmetric(domain) && is_transitive(domain)
}

/// Anti-symmetric and transitive.
pub fn is_strict_order<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    is_anti_symmetric(domain) && is_transitive(domain)
}

/// Reflexive, anti-symmetric and transitive.
pub fn is_partial_order<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    is_reflexive(domain) && is_anti_symmetric(domain) && is_transitive(domain)
}

/// A partial order in which every ordered pair is related in both
/// directions ([`TotalOrderMode::Mutual`]).
pub fn is_total_order<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    is_total_order_with(domain, TotalOrderMode::Mutual)
}

/// A partial order whose pairs are all related according to `mode`.
pub fn is_total_order_with<G: RelationGraph>(domain: &Domain<'_, G>, mode: TotalOrderMode) -> bool {
    let related = |(x, y): (G::Node, G::Node)| match mode {
        TotalOrderMode::Mutual => domain.has_edge(x, y) && domain.has_edge(y, x),
        TotalOrderMode::Comparable => domain.has_edge(x, y) || domain.has_edge(y, x),
    };
    is_partial_order(domain) && domain.pairs().into_iter().all(related)
}

/// Some node has no ancestors and some node has no successors. Existence
/// only; uniqueness is not required. A self-loop counts as a successor.
pub fn is_bounded<G: RelationGraph>(domain: &Domain<'_, G>) -> bool {
    !domain.minimal_nodes().is_empty() && !domain.maximal_nodes().is_empty()
}

/// Every pair of scope nodes has a join and a meet.
pub fn is_lattice<G: RelationGraph>(
    domain: &Domain<'_, G>,
    sink: &dyn DiagnosticSink<G::Node>,
) -> bool {
    let lattice = Lattice::new(domain.graph(), sink);
    domain.pairs().into_iter().all(|(x, y)| {
        in_scope(domain, lattice.join_of(x, y)).is_some()
            && in_scope(domain, lattice.meet_of(x, y)).is_some()
    })
}

fn in_scope<G: RelationGraph>(domain: &Domain<'_, G>, bound: Option<G::Node>) -> Option<G::Node> {
    bound.filter(|&n| domain.contains(n))
}

/// Every scope node has a complement among the scope nodes.
pub fn is_complemented<G: RelationGraph>(
    domain: &Domain<'_, G>,
    sink: &dyn DiagnosticSink<G::Node>,
) -> bool {
    let lattice = Lattice::new(domain.graph(), sink);
    let bounds = lattice.global_bounds_in(domain);
    domain
        .nodes()
        .iter()
        .all(|&n| lattice.complement_among(n, domain, &bounds).is_some())
}

/// `meet(a, join(b, c)) == join(meet(a, b), meet(a, c))` for every ordered
/// triple of distinct scope nodes. A side that is undefined makes the
/// triple fail.
pub fn is_distributed<G: RelationGraph>(
    domain: &Domain<'_, G>,
    sink: &dyn DiagnosticSink<G::Node>,
) -> bool {
    let lattice = Lattice::new(domain.graph(), sink);
    let join = |x, y| in_scope(domain, lattice.join_of(x, y));
    let meet = |x, y| in_scope(domain, lattice.meet_of(x, y));
    let nodes = domain.nodes();
    for &a in nodes {
        for &b in nodes {
            for &c in nodes {
                if a == b || b == c || a == c {
                    continue;
                }
                let lhs = join(b, c).and_then(|bc| meet(a, bc));
                let rhs = match (meet(a, b), meet(a, c)) {
                    (Some(ab), Some(ac)) => join(ab, ac),
                    _ => None,
                };
                if lhs.is_none() || lhs != rhs {
                    return false;
                }
            }
        }
    }
    true
}

/// Complemented and distributive.
pub fn is_boolean_algebra<G: RelationGraph>(
    domain: &Domain<'_, G>,
    sink: &dyn DiagnosticSink<G::Node>,
) -> bool {
    is_complemented(domain, sink) && is_distributed(domain, sink)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diagnostics::Silent;
    use crate::graph::{divisibility, relation_from, Relation};
    use crate::hasse::to_hasse;

    const DOMAIN: [i32; 5] = [2, 4, 5, 6, 7];

    fn rel(pairs: &[(i32, i32)]) -> Relation<i32> {
        relation_from(DOMAIN, pairs.iter().copied())
    }

    fn holds(pairs: &[(i32, i32)], predicate: fn(&Domain<'_, Relation<i32>>) -> bool) -> bool {
        let g = rel(pairs);
        predicate(&Domain::full(&g))
    }

    #[test]
    fn reflexive() {
        assert!(holds(&[(2, 2), (4, 4), (5, 5), (6, 6), (7, 7)], is_reflexive));
        assert!(!holds(&[(2, 2), (4, 2), (5, 5), (6, 6), (7, 6)], is_reflexive));
    }

    #[test]
    fn anti_reflexive() {
        assert!(holds(&[(4, 5), (2, 4), (5, 2), (6, 7), (7, 6)], is_anti_reflexive));
        assert!(!holds(&[(4, 5), (2, 2), (5, 2), (6, 6), (7, 6)], is_anti_reflexive));
    }

    #[test]
    fn not_reflexive() {
        assert!(holds(&[(2, 2), (4, 4), (5, 6), (6, 5), (7, 7)], is_not_reflexive));
        assert!(!holds(&[(4, 4), (2, 2), (5, 5), (6, 6), (7, 7)], is_not_reflexive));
        assert!(!holds(&[(4, 5)], is_not_reflexive));
    }

    #[test]
    fn symmetric() {
        assert!(holds(&[(2, 2), (6, 4), (5, 6), (6, 5), (4, 6)], is_symmetric));
        assert!(!holds(
            &[(2, 2), (2, 6), (6, 4), (5, 6), (5, 4), (6, 5), (4, 6)],
            is_symmetric
        ));
    }

    #[test]
    fn anti_symmetric() {
        assert!(holds(
            &[(2, 2), (6, 4), (5, 6), (6, 2), (4, 5), (7, 7)],
            is_anti_symmetric
        ));
        assert!(!holds(
            &[(2, 2), (6, 4), (5, 6), (6, 2), (2, 6), (4, 5), (7, 7)],
            is_anti_symmetric
        ));
    }

    #[test]
    fn not_symmetric_is_mixed() {
        assert!(holds(&[(5, 4), (5, 6), (6, 5)], is_not_symmetric));
        assert!(!holds(&[(5, 6), (6, 5)], is_not_symmetric));
        assert!(!holds(&[(5, 6)], is_not_symmetric));
    }

    #[test]
    fn transitivity() {
        assert!(holds(&[(2, 4), (4, 6), (2, 6)], is_transitive));
        assert!(!holds(&[(2, 4), (4, 6)], is_transitive));
        assert!(holds(&[(2, 4), (4, 6)], is_not_transitive));
        assert!(!holds(&[(2, 4), (4, 6), (2, 6)], is_not_transitive));
    }

    #[test]
    fn cycle_without_loops_is_not_transitive() {
        assert!(!holds(&[(2, 4), (4, 2)], is_transitive));
        assert!(holds(&[(2, 4), (4, 2), (2, 2), (4, 4)], is_transitive));
    }

    #[test]
    fn equivalence_classes() {
        let pairs = [
            (2, 2),
            (4, 4),
            (5, 5),
            (6, 6),
            (7, 7),
            (2, 4),
            (4, 2),
            (5, 6),
            (6, 5),
        ];
        assert!(holds(&pairs, is_equivalent));
        assert!(!holds(&pairs, is_partial_order));
    }

    #[test]
    fn divisibility_is_partial_not_total() {
        let g = divisibility(20).unwrap();
        let d = Domain::full(&g);
        assert!(is_partial_order(&d));
        assert!(!is_strict_order(&d));
        assert!(!is_total_order_with(&d, TotalOrderMode::Comparable));
        assert!(!is_total_order(&d));
    }

    #[test]
    fn strict_order_from_less_than() {
        assert!(holds(&[(2, 4), (4, 5), (2, 5)], is_strict_order));
    }

    #[test]
    fn total_order_modes_differ_on_chains() {
        let g = relation_from([1, 2, 3], [(1, 1), (2, 2), (3, 3), (1, 2), (2, 3), (1, 3)]);
        let d = Domain::full(&g);
        assert!(is_total_order_with(&d, TotalOrderMode::Comparable));
        assert!(!is_total_order_with(&d, TotalOrderMode::Mutual));

        let single = relation_from([1], [(1, 1)]);
        assert!(is_total_order(&Domain::full(&single)));
    }

    #[test]
    fn scope_restricts_evaluation() {
        let g = rel(&[(2, 2), (4, 4), (5, 6)]);
        let d = Domain::restricted(&g, [2, 4]).unwrap();
        assert!(is_reflexive(&d));
        assert!(!is_reflexive(&Domain::full(&g)));
    }

    #[test]
    fn bounded_needs_source_and_sink() {
        assert!(holds(&[(2, 4), (4, 5)], is_bounded));
        let cycle = relation_from([1, 2], [(1, 2), (2, 1)]);
        assert!(!is_bounded(&Domain::full(&cycle)));
    }

    #[test]
    fn reflexive_top_is_not_a_maximum() {
        let g = relation_from([1, 2], [(1, 1), (2, 2), (1, 2)]);
        let d = Domain::full(&g);
        assert!(!is_bounded(&d));
        let bounds = Lattice::new(&g, &Silent).global_bounds_in(&d);
        assert_eq!(bounds.minimum, Some(1));
        assert_eq!(bounds.maximum, None);
        assert!(is_bounded(&Domain::full(&to_hasse(&g))));
    }

    #[test]
    fn divisors_of_thirty_form_a_boolean_algebra() {
        let g = to_hasse(&divisibility(30).unwrap());
        let d = Domain::full(&g);
        assert!(is_lattice(&d, &Silent));
        assert!(is_complemented(&d, &Silent));
        assert!(is_distributed(&d, &Silent));
        assert!(is_boolean_algebra(&d, &Silent));
    }

    #[test]
    fn divisors_of_twenty_are_distributive_but_not_complemented() {
        let g = to_hasse(&divisibility(20).unwrap());
        let d = Domain::full(&g);
        assert!(is_lattice(&d, &Silent));
        assert!(is_distributed(&d, &Silent));
        assert!(!is_complemented(&d, &Silent));
        assert!(!is_boolean_algebra(&d, &Silent));
    }

    #[test]
    fn scope_must_hold_its_own_bounds() {
        let g = to_hasse(&divisibility(30).unwrap());
        let pair = Domain::restricted(&g, [2, 3]).unwrap();
        assert!(!is_lattice(&pair, &Silent));
        let square = Domain::restricted(&g, [1, 2, 3, 6]).unwrap();
        assert!(is_lattice(&square, &Silent));
        assert!(is_distributed(&square, &Silent));

        // join(2, 3) = 6 lies outside the scope.
        let spread = Domain::restricted(&g, [1, 2, 3, 5, 30]).unwrap();
        assert!(!is_lattice(&spread, &Silent));
        assert!(!is_distributed(&spread, &Silent));
    }

    #[test]
    fn six_atom_boolean_algebra() {
        let g = to_hasse(&divisibility(30030).unwrap());
        let d = Domain::full(&g);
        assert_eq!(d.len(), 64);
        assert!(is_lattice(&d, &Silent));
        assert!(is_distributed(&d, &Silent));
        assert!(is_boolean_algebra(&d, &Silent));
    }

    #[test]
    fn pentagon_is_not_distributive() {
        // 0 < a < b < 1, 0 < c < 1
        let g = relation_from(
            ['0', 'a', 'b', 'c', '1'],
            [('0', 'a'), ('a', 'b'), ('b', '1'), ('0', 'c'), ('c', '1')],
        );
        let d = Domain::full(&g);
        assert!(is_lattice(&d, &Silent));
        assert!(!is_distributed(&d, &Silent));
    }
}
