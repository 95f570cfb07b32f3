//! relkit reporting layer.
//!
//! Runs every classification predicate and witness extraction of
//! [`relkit`] over one relation, computes the lattice section on its Hasse
//! diagram and collects the result in a serializable [`RelationReport`].
//!
//! # Report Sections
//!
//! | Section | Content |
//! |---------|---------|
//! | `relations_type` | twelve classification flags |
//! | `related_nodes` | witnesses rendered as `(x, y)` strings, inverse and relation listings |
//! | `lattice` | lattice, bounded, complemented, distributed, Boolean algebra, global bounds, complements |
//! | `diagnostics` | ambiguous or undefined bounds met along the way |
//!
//! Each distinct diagnostic is also logged once under the
//! `relkit::lattice` target: ambiguities at `warn`, the rest at `debug`.
//!
//! # Entry Point
//!
//! ```
//! use relkit::graph::divisibility;
//! use relkit_report::{analyze, AnalysisConfig};
//!
//! let g = divisibility(30).unwrap();
//! let report = analyze(&g, None, &AnalysisConfig::default()).unwrap();
//! assert!(report.relations_type["partial_order"]);
//! assert!(report.lattice.boolean_algebra);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod error;
pub mod input;
pub mod report;

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

use petgraph::graphmap::NodeTrait;
use relkit::hasse::to_hasse;
use relkit::{check, extract, DiagnosticLog, Domain, Lattice, Relation, TracingSink};

pub use config::AnalysisConfig;
pub use error::ReportError;
pub use input::RelationInput;
pub use report::{
    format_pair, format_pairs, format_symmetric, format_triple, Complement, LatticeSummary,
    RelatedNodes, RelationReport,
};

/// Analyses `graph`, restricted to `scope` when given.
///
/// Sections are computed in this order:
/// 1. Classification flags on the relation as given
/// 2. Witness extraction, gated by `config.strict`
/// 3. Lattice predicates, bounds and complements on the Hasse diagram
///
/// # Errors
///
/// Returns [`ReportError::Relation`] if a scope node is not in `graph`.
pub fn analyze<N>(
    graph: &Relation<N>,
    scope: Option<&[N]>,
    config: &AnalysisConfig,
) -> Result<RelationReport, ReportError>
where
    N: NodeTrait + Debug + Display,
{
    let domain = Domain::new(graph, scope)?;
    let strict = config.strict;

    // 1. Classification
    let relations_type: BTreeMap<String, bool> = [
        ("reflexive", check::is_reflexive(&domain)),
        ("anti_reflexive", check::is_anti_reflexive(&domain)),
        ("not_reflexive", check::is_not_reflexive(&domain)),
        ("symmetric", check::is_symmetric(&domain)),
        ("anti_symmetric", check::is_anti_symmetric(&domain)),
        ("not_symmetric", check::is_not_symmetric(&domain)),
        ("transitive", check::is_transitive(&domain)),
        ("not_transitive", check::is_not_transitive(&domain)),
        ("equivalent", check::is_equivalent(&domain)),
        ("strict_order", check::is_strict_order(&domain)),
        ("partial_order", check::is_partial_order(&domain)),
        (
            "total_order",
            check::is_total_order_with(&domain, config.total_order),
        ),
    ]
    .into_iter()
    .map(|(name, holds)| (name.to_owned(), holds))
    .collect();

    // 2. Witnesses
    let related_nodes = RelatedNodes {
        reflexive: extract::reflexive_witnesses(&domain, strict)
            .iter()
            .map(format_pair)
            .collect(),
        symmetric: extract::symmetric_witnesses(&domain, strict)
            .iter()
            .map(format_symmetric)
            .collect(),
        not_symmetric: extract::not_symmetric_witnesses(&domain, strict)
            .iter()
            .map(format_symmetric)
            .collect(),
        transitive: extract::transitive_witnesses(&domain, strict)
            .iter()
            .map(format_triple)
            .collect(),
        not_transitive: extract::not_transitive_witnesses(&domain, strict)
            .iter()
            .map(format_triple)
            .collect(),
        inverse: format_pairs(&extract::inverse_relation(&domain)),
        relations: format_pairs(&extract::list_relation(&domain)),
    };

    // 3. Lattice, on the covering relation
    let hasse = to_hasse(graph);
    let hasse_domain = Domain::new(&hasse, scope)?;
    let log = DiagnosticLog::new();
    let lattice = Lattice::new(&hasse, &log);
    let bounds = lattice.global_bounds_in(&hasse_domain);
    let complemented = check::is_complemented(&hasse_domain, &log);
    let distributed = check::is_distributed(&hasse_domain, &log);
    let summary = LatticeSummary {
        is_lattice: check::is_lattice(&hasse_domain, &log),
        bounded: check::is_bounded(&hasse_domain),
        complemented,
        distributed,
        boolean_algebra: complemented && distributed,
        minimum: bounds.minimum.map(|n| n.to_string()),
        maximum: bounds.maximum.map(|n| n.to_string()),
        complements: lattice
            .complements_in(&hasse_domain)
            .into_iter()
            .map(|(node, complement)| Complement {
                node: node.to_string(),
                complement: complement.map(|c| c.to_string()),
            })
            .collect(),
    };
    log.replay(&TracingSink);
    let diagnostics: Vec<String> = log.distinct().iter().map(ToString::to_string).collect();

    tracing::info!(
        nodes = domain.len(),
        edges = domain.edges().len(),
        lattice = summary.is_lattice,
        diagnostics = diagnostics.len(),
        "analysed relation"
    );

    Ok(RelationReport {
        nodes: domain.nodes().iter().map(ToString::to_string).collect(),
        config: *config,
        relations_type,
        related_nodes,
        lattice: summary,
        diagnostics,
    })
}

/// Pretty-printed JSON form of a report.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if serialization fails.
pub fn to_json(report: &RelationReport) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
