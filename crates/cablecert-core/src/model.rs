use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity, ordered by increasing concern.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Pass,
    Warning,
    Fail,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Pass, Severity::Warning, Severity::Fail, Severity::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARNING",
            Severity::Fail => "FAIL",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CableCategory {
    Cat6,
    Cat6A,
}

impl CableCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CableCategory::Cat6 => "Cat6",
            CableCategory::Cat6A => "Cat6A",
        }
    }
}

impl fmt::Display for CableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a measurement must move to improve.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Worst-case verdict of a whole report.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallStatus {
    #[serde(rename = "PASS")]
    Pass,
    /// Conditional pass: only warnings were raised.
    #[serde(rename = "PASS*")]
    ConditionalPass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Pass => "PASS",
            OverallStatus::ConditionalPass => "PASS*",
            OverallStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Medium {
    Copper,
    Fiber,
}
