//! Witness extraction: the concrete pairs and triples behind each property.
//!
//! With `strict` set, an extraction first re-checks its property over the
//! scope and returns an empty collection when it does not hold. Without it,
//! whatever witnesses exist are returned. Strict results are therefore
//! always a subset of lenient ones. The gating lives in [`gated`]; each
//! extraction below only enumerates.

use std::collections::BTreeSet;

use crate::check;
use crate::graph::{Pair, RelationGraph};
use crate::scope::Domain;

/// Default for the `strict` flag of every extraction.
pub const STRICT: bool = true;

/// Two reciprocal edges `((x, y), (y, x))`, stored with `x < y`.
pub type SymmetricPair<N> = (Pair<N>, Pair<N>);

/// A transitivity chain `((x, y), (y, z), (x, z))`.
pub type TransitiveTriple<N> = (Pair<N>, Pair<N>, Pair<N>);

/// Runs `extract` when `strict` is off or `holds` confirms the property;
/// otherwise returns an empty set.
pub fn gated<T: Ord>(
    strict: bool,
    holds: impl FnOnce() -> bool,
    extract: impl FnOnce() -> BTreeSet<T>,
) -> BTreeSet<T> {
    if strict && !holds() {
        return BTreeSet::new();
    }
    extract()
}

/// Self-loops `(n, n)`; gated by [`check::is_reflexive`].
pub fn reflexive_witnesses<G: RelationGraph>(
    domain: &Domain<'_, G>,
    strict: bool,
) -> BTreeSet<Pair<G::Node>> {
    gated(
        strict,
        || check::is_reflexive(domain),
        || {
            domain
                .nodes()
                .iter()
                .filter(|&&n| domain.has_edge(n, n))
                .map(|&n| (n, n))
                .collect()
        },
    )
}

/// Reciprocated edges between distinct nodes, each pair reported once;
/// gated by [`check::is_symmetric`].
pub fn symmetric_witnesses<G: RelationGraph>(
    domain: &Domain<'_, G>,
    strict: bool,
) -> BTreeSet<SymmetricPair<G::Node>> {
    gated(strict, || check::is_symmetric(domain), || reciprocal_edges(domain))
}

/// The reciprocated edges of a mixed relation; gated by
/// [`check::is_not_symmetric`].
pub fn not_symmetric_witnesses<G: RelationGraph>(
    domain: &Domain<'_, G>,
    strict: bool,
) -> BTreeSet<SymmetricPair<G::Node>> {
    gated(
        strict,
        || check::is_not_symmetric(domain),
        || symmetric_witnesses(domain, false),
    )
}

fn reciprocal_edges<G: RelationGraph>(domain: &Domain<'_, G>) -> BTreeSet<SymmetricPair<G::Node>> {
    domain
        .edges()
        .into_iter()
        .filter(|&(x, y)| x < y && domain.has_edge(y, x))
        .map(|(x, y)| ((x, y), (y, x)))
        .collect()
}

/// Chains whose shortcut exists; gated by [`check::is_transitive`].
pub fn transitive_witnesses<G: RelationGraph>(
    domain: &Domain<'_, G>,
    strict: bool,
) -> BTreeSet<TransitiveTriple<G::Node>> {
    gated(
        strict,
        || check::is_transitive(domain),
        || chains_where(domain, true),
    )
}

/// Chains whose shortcut is missing; gated by [`check::is_not_transitive`].
pub fn not_transitive_witnesses<G: RelationGraph>(
    domain: &Domain<'_, G>,
    strict: bool,
) -> BTreeSet<TransitiveTriple<G::Node>> {
    gated(
        strict,
        || check::is_not_transitive(domain),
        || chains_where(domain, false),
    )
}

fn chains_where<G: RelationGraph>(
    domain: &Domain<'_, G>,
    closed: bool,
) -> BTreeSet<TransitiveTriple<G::Node>> {
    check::closure_chains(domain)
        .into_iter()
        .filter(|&(x, _, z)| domain.has_edge(x, z) == closed)
        .map(|(x, y, z)| ((x, y), (y, z), (x, z)))
        .collect()
}

/// `{(y, x) : (x, y) in the relation}`. Never gated.
pub fn inverse_relation<G: RelationGraph>(domain: &Domain<'_, G>) -> BTreeSet<Pair<G::Node>> {
    domain.edges().into_iter().map(|(x, y)| (y, x)).collect()
}

/// The relation's own edges. Never gated.
pub fn list_relation<G: RelationGraph>(domain: &Domain<'_, G>) -> BTreeSet<Pair<G::Node>> {
    domain.edges().into_iter().collect()
}
