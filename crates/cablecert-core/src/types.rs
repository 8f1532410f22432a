use serde::{Deserialize, Serialize};

use crate::model::*;

/// One flagged deviation, with advice for the installer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Finding {
    pub severity: Severity,
    pub parameter: String,
    pub issue: String,
    pub probable_cause: String,
    pub recommendation: String,
    pub impact: Option<String>,
}

/// A table parameter found in the input, compared against its limit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CableTest {
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub limit: f64,
    pub margin: f64,
    pub direction: Direction,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summary {
    pub total_issues: usize,
    pub critical: usize,
    pub fail: usize,
    pub warning: usize,
    pub pass: usize,
}

impl Summary {
    pub fn tally(findings: &[Finding]) -> Self {
        let mut summary = Summary { total_issues: findings.len(), ..Summary::default() };
        for f in findings {
            match f.severity {
                Severity::Pass => summary.pass += 1,
                Severity::Warning => summary.warning += 1,
                Severity::Fail => summary.fail += 1,
                Severity::Critical => summary.critical += 1,
            }
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Pass => self.pass,
            Severity::Warning => self.warning,
            Severity::Fail => self.fail,
            Severity::Critical => self.critical,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub overall_status: OverallStatus,
    pub summary: Summary,
    pub findings: Vec<Finding>,
    pub executive_summary: String,
}
