//! Property-based tests for checks, extraction, Hasse reduction and
//! lattice queries.
//!
//! Relations are drawn over at most eight nodes; DAG strategies only emit
//! edges `(i, j)` with `i < j`.

use proptest::prelude::*;
use relkit::check;
use relkit::diagnostics::Silent;
use relkit::extract;
use relkit::graph::{relation_from, Relation, RelationGraph};
use relkit::hasse::to_hasse;
use relkit::{Domain, Lattice};

const NODES: u8 = 8;

fn any_relation() -> impl Strategy<Value = Relation<u8>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..24)
        .prop_map(|pairs| relation_from(0..NODES, pairs))
}

fn any_dag() -> impl Strategy<Value = Relation<u8>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..20).prop_map(|pairs| {
        relation_from(
            0..NODES,
            pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b))),
        )
    })
}

// =============================================================================
// Classification
// =============================================================================

proptest! {
    /// A reflexive relation has one reflexive witness per node; an
    /// anti-reflexive one has none.
    #[test]
    fn prop_reflexive_witness_count(g in any_relation()) {
        let d = Domain::full(&g);
        let witnesses = extract::reflexive_witnesses(&d, true);
        if check::is_reflexive(&d) {
            prop_assert_eq!(witnesses.len(), d.len());
        }
        if check::is_anti_reflexive(&d) {
            prop_assert!(witnesses.is_empty());
        }
    }

    /// The "not" categories exclude the full ones.
    #[test]
    fn prop_not_categories_are_exclusive(g in any_relation()) {
        let d = Domain::full(&g);
        prop_assert!(!(check::is_not_reflexive(&d) && check::is_reflexive(&d)));
        prop_assert!(!(check::is_not_reflexive(&d) && check::is_anti_reflexive(&d)));
        prop_assert!(!(check::is_not_symmetric(&d) && check::is_symmetric(&d)));
        prop_assert!(!(check::is_not_symmetric(&d) && check::is_anti_symmetric(&d)));
    }

    /// Transitive and not-transitive partition every relation.
    #[test]
    fn prop_transitivity_dichotomy(g in any_relation()) {
        let d = Domain::full(&g);
        prop_assert_ne!(check::is_transitive(&d), check::is_not_transitive(&d));
    }

    /// Strict extraction never yields more than lenient extraction.
    #[test]
    fn prop_strict_subset_of_lenient(g in any_relation()) {
        let d = Domain::full(&g);
        prop_assert!(extract::reflexive_witnesses(&d, true)
            .is_subset(&extract::reflexive_witnesses(&d, false)));
        prop_assert!(extract::symmetric_witnesses(&d, true)
            .is_subset(&extract::symmetric_witnesses(&d, false)));
        prop_assert!(extract::not_symmetric_witnesses(&d, true)
            .is_subset(&extract::not_symmetric_witnesses(&d, false)));
        prop_assert!(extract::transitive_witnesses(&d, true)
            .is_subset(&extract::transitive_witnesses(&d, false)));
        prop_assert!(extract::not_transitive_witnesses(&d, true)
            .is_subset(&extract::not_transitive_witnesses(&d, false)));
    }
}

// =============================================================================
// Inverse and Hasse
// =============================================================================

proptest! {
    /// Inverting twice restores the relation.
    #[test]
    fn prop_double_inverse(g in any_relation()) {
        let d = Domain::full(&g);
        let inverse = relation_from(0..NODES, extract::inverse_relation(&d));
        let back = extract::inverse_relation(&Domain::full(&inverse));
        prop_assert_eq!(back, extract::list_relation(&d));
    }

    /// The Hasse reduction is a fixed point.
    #[test]
    fn prop_hasse_idempotent(g in any_relation()) {
        let once = to_hasse(&g);
        let twice = to_hasse(&once);
        prop_assert_eq!(RelationGraph::edges(&once), RelationGraph::edges(&twice));
        prop_assert_eq!(RelationGraph::nodes(&once), RelationGraph::nodes(&g));
    }

    /// On a DAG the reduction keeps every reachability fact.
    #[test]
    fn prop_hasse_preserves_reachability(g in any_dag()) {
        let hasse = to_hasse(&g);
        let before = Lattice::new(&g, &Silent);
        let after = Lattice::new(&hasse, &Silent);
        for n in 0..NODES {
            prop_assert_eq!(before.descendants(n).ok(), after.descendants(n).ok());
        }
    }
}

// =============================================================================
// Lattice queries
// =============================================================================

proptest! {
    /// Meet and join do not depend on argument order.
    #[test]
    fn prop_bounds_are_symmetric(g in any_dag(), x in 0..NODES, y in 0..NODES) {
        let hasse = to_hasse(&g);
        let lattice = Lattice::new(&hasse, &Silent);
        prop_assert_eq!(lattice.meet(x, y), lattice.meet(y, x));
        prop_assert_eq!(lattice.join(x, y), lattice.join(y, x));
        prop_assert_eq!(lattice.common_successors(x, y), lattice.common_successors(y, x));
    }

    /// A defined join is a common successor and a defined meet a common predecessor.
    #[test]
    fn prop_bounds_are_common(g in any_dag(), x in 0..NODES, y in 0..NODES) {
        let hasse = to_hasse(&g);
        let lattice = Lattice::new(&hasse, &Silent);
        if let Ok(Some(j)) = lattice.join(x, y) {
            prop_assert!(lattice.common_successors(x, y).unwrap_or_default().contains(&j));
        }
        if let Ok(Some(m)) = lattice.meet(x, y) {
            prop_assert!(lattice.common_predecessors(x, y).unwrap_or_default().contains(&m));
        }
    }
}
