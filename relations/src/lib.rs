//! Binary relations on finite sets, analysed as directed graphs.
//!
//! The `relkit` crate answers algebraic questions about a relation
//! (reflexive? symmetric? a partial order? a Boolean algebra?), extracts the
//! pairs and triples proving or disproving each property, reduces partial
//! orders to their Hasse diagram and computes meets, joins, bounds and
//! complements.
//!
//! # Entry Point
//!
//! ```
//! use relkit::{check, extract, graph::relation_from, Domain};
//!
//! let g = relation_from([2, 4, 5, 6, 7], [(2, 2), (4, 4), (5, 5), (6, 6), (7, 7)]);
//! let domain = Domain::full(&g);
//! assert!(check::is_reflexive(&domain));
//! assert_eq!(extract::reflexive_witnesses(&domain, extract::STRICT).len(), 5);
//! ```
//!
//! # Lattices
//!
//! ```
//! use relkit::{check, diagnostics::Silent, graph::divisibility, hasse::to_hasse, Domain};
//!
//! let hasse = to_hasse(&divisibility(30).unwrap());
//! assert!(check::is_boolean_algebra(&Domain::full(&hasse), &Silent));
//! ```
//!
//! # Modules
//!
//! | Module | Role |
//! |--------|------|
//! | [`combinatorics`] | ordered-pair cross products, divisors |
//! | [`graph`] | [`RelationGraph`] capability, petgraph container, builders |
//! | [`scope`] | [`Domain`]: a graph with a validated node scope |
//! | [`check`] | boolean property predicates |
//! | [`extract`] | witness extraction with strict gating |
//! | [`lattice`] | common bounds, join, meet, global bounds, complements |
//! | [`hasse`] | covering-relation reduction |
//! | [`diagnostics`] | events for undefined / ambiguous lattice results |

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod check;
pub mod combinatorics;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod graph;
pub mod hasse;
pub mod lattice;
pub mod scope;

pub use check::TotalOrderMode;
pub use diagnostics::{Diagnostic, DiagnosticLog, DiagnosticSink, Silent, TracingSink};
pub use error::RelationError;
pub use graph::{Pair, Relation, RelationGraph};
pub use lattice::{GlobalBounds, Lattice};
pub use scope::Domain;
