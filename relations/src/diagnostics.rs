//! Diagnostic events for undefined and ambiguous lattice results.
//!
//! Meet, join, complement and global-bound queries report "no result" as
//! `None` whether the bound is missing or ambiguous. The distinction is
//! carried by a [`Diagnostic`] emitted to the [`DiagnosticSink`] the caller
//! hands to the lattice engine. There is no process-wide logger.

use std::cell::RefCell;
use std::fmt;

/// Which lattice bound a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundKind {
    /// Least upper bound.
    Join,
    /// Greatest lower bound.
    Meet,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Join => f.write_str("join"),
            Self::Meet => f.write_str("meet"),
        }
    }
}

/// Which global bound a diagnostic is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extremum {
    /// Global minimum (a node with no ancestors).
    Minimum,
    /// Global maximum (a node with no successors).
    Maximum,
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimum => f.write_str("minimum"),
            Self::Maximum => f.write_str("maximum"),
        }
    }
}

/// A condition worth reporting that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Diagnostic<N> {
    /// The two nodes have no common bound at all.
    NoBound {
        /// Join or meet.
        kind: BoundKind,
        /// First queried node.
        left: N,
        /// Second queried node.
        right: N,
    },
    /// Several candidates tie for the bound.
    AmbiguousBound {
        /// Join or meet.
        kind: BoundKind,
        /// First queried node.
        left: N,
        /// Second queried node.
        right: N,
        /// The tied candidates, ascending.
        candidates: Vec<N>,
    },
    /// No node qualifies as the global bound.
    MissingGlobalBound {
        /// Minimum or maximum.
        extremum: Extremum,
    },
    /// Several nodes qualify as the global bound; the smallest was chosen.
    AmbiguousGlobalBound {
        /// Minimum or maximum.
        extremum: Extremum,
        /// Every qualifying node, ascending.
        candidates: Vec<N>,
        /// The node returned.
        chosen: N,
    },
    /// No other node complements `node`.
    NoComplement {
        /// The node searched for.
        node: N,
    },
}

impl<N: fmt::Display> fmt::Display for Diagnostic<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBound { kind, left, right } => {
                write!(f, "nodes {left} and {right} have no {kind}")
            }
            Self::AmbiguousBound {
                kind,
                left,
                right,
                candidates,
            } => write!(
                f,
                "nodes {left} and {right} have more than one {kind} candidate: {}",
                join_nodes(candidates)
            ),
            Self::MissingGlobalBound { extremum } => {
                write!(f, "relation has no global {extremum}")
            }
            Self::AmbiguousGlobalBound {
                extremum,
                candidates,
                chosen,
            } => write!(
                f,
                "relation has several global {extremum} candidates ({}); chose {chosen}",
                join_nodes(candidates)
            ),
            Self::NoComplement { node } => write!(f, "node {node} has no complement"),
        }
    }
}

fn join_nodes<N: fmt::Display>(nodes: &[N]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Receiver for diagnostics produced by the lattice engine.
pub trait DiagnosticSink<N> {
    /// Records one event.
    fn emit(&self, diagnostic: Diagnostic<N>);
}

/// Forwards every diagnostic to `tracing`: ambiguities at `warn`, missing
/// bounds and complements at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl<N: fmt::Display> DiagnosticSink<N> for TracingSink {
    fn emit(&self, diagnostic: Diagnostic<N>) {
        match diagnostic {
            Diagnostic::AmbiguousBound { .. } | Diagnostic::AmbiguousGlobalBound { .. } => {
                tracing::warn!(target: "relkit::lattice", "{diagnostic}");
            }
            _ => tracing::debug!(target: "relkit::lattice", "{diagnostic}"),
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl<N> DiagnosticSink<N> for Silent {
    fn emit(&self, _diagnostic: Diagnostic<N>) {}
}

/// Collects diagnostics in emission order.
#[derive(Debug)]
pub struct DiagnosticLog<N> {
    events: RefCell<Vec<Diagnostic<N>>>,
}

impl<N> DiagnosticLog<N> {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drops every recorded event.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Consumes the log, returning events in emission order.
    pub fn into_events(self) -> Vec<Diagnostic<N>> {
        self.events.into_inner()
    }
}

impl<N: Clone + Ord> DiagnosticLog<N> {
    /// A copy of the recorded events in emission order.
    pub fn events(&self) -> Vec<Diagnostic<N>> {
        self.events.borrow().clone()
    }

    /// Recorded events, sorted and de-duplicated.
    pub fn distinct(&self) -> Vec<Diagnostic<N>> {
        let mut events = self.events();
        events.sort();
        events.dedup();
        events
    }

    /// Emits every distinct recorded event to `sink`, in sorted order.
    pub fn replay(&self, sink: &dyn DiagnosticSink<N>) {
        for event in self.distinct() {
            sink.emit(event);
        }
    }
}

impl<N> Default for DiagnosticLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> DiagnosticSink<N> for DiagnosticLog<N> {
    fn emit(&self, diagnostic: Diagnostic<N>) {
        self.events.borrow_mut().push(diagnostic);
    }
}
