//! Analysis options consumed by the report builder.

use relkit::TotalOrderMode;
use serde::{Deserialize, Serialize};

/// Options controlling how a relation is analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Gate each witness extraction on its property holding.
    pub strict: bool,
    /// Definition used for the `total_order` flag.
    pub total_order: TotalOrderMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strict: true,
            total_order: TotalOrderMode::Mutual,
        }
    }
}
