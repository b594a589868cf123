use serde::{Deserialize, Serialize};

/// One issue reported by a linter. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    pub file_path: String,

    #[serde(default)]
    pub line: u32,

    #[serde(default)]
    pub column: u32,

    #[serde(default)]
    pub rule_id: Option<String>,

    pub message: String,
}

/// Everything one linter reported for one run.
///
/// `success` always mirrors `findings.is_empty()`; construct through
/// [`Report::from_findings`] so the two cannot drift.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Report {
    pub success: bool,
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            success: findings.is_empty(),
            findings,
        }
    }

    pub fn clean() -> Self {
        Self::from_findings(Vec::new())
    }
}
