use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use cablecert_core::{Medium, OverallStatus, Report, Severity};

use crate::{certify, load_results};

#[derive(Debug, Deserialize)]
pub struct ScenarioExpected {
    pub scenario_id: String,
    pub medium: Medium,
    pub expect_status: OverallStatus,
    #[serde(default)]
    pub findings: Vec<ExpectedFinding>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ExpectedFinding {
    pub parameter: String,
    pub severity: Severity,
}

pub fn load_expected(dir: &Path) -> Result<ScenarioExpected> {
    let p = dir.join("expected.yaml");
    let s = std::fs::read_to_string(&p).with_context(|| format!("read expected.yaml: {}", p.display()))?;
    let exp: ScenarioExpected = serde_yaml::from_str(&s).with_context(|| "parse expected.yaml")?;
    Ok(exp)
}

/// Certifies `results.yaml` of a fixture directory with the medium named in
/// its `expected.yaml`.
pub fn simulate(dir: &Path) -> Result<(ScenarioExpected, Report)> {
    let exp = load_expected(dir)?;
    let results = load_results(&dir.join("results.yaml"))?;
    let report = certify(&results, exp.medium).with_context(|| format!("scenario {}", exp.scenario_id))?;
    Ok((exp, report))
}
