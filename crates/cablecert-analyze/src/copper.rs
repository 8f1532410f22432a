use cablecert_core::{CableCategory, CableTest, Finding, ParameterMap};
use tracing::{debug, info};

use crate::evaluate::{direction, evaluate_parameter, margin, unit_for};
use crate::patterns::analyze_patterns;

/// Only Cat6A is certified at 500 MHz, so any 500 MHz reading marks a Cat6A link.
pub fn detect_category(results: &ParameterMap) -> CableCategory {
    if results.keys().any(|k| k.contains("500")) {
        CableCategory::Cat6A
    } else {
        CableCategory::Cat6
    }
}

/// Runs every limit of the detected category against the readings present,
/// then appends pattern findings. Absent or non-numeric readings are skipped.
pub fn analyze_copper(results: &ParameterMap) -> Vec<Finding> {
    let category = detect_category(results);
    let mut findings: Vec<Finding> = category
        .limits()
        .iter()
        .filter_map(|l| {
            let value = results.get(l.parameter)?.as_number()?;
            evaluate_parameter(l.parameter, value, l.value)
        })
        .collect();
    findings.extend(analyze_patterns(results));
    info!(%category, findings = findings.len(), "copper analysis");
    findings
}

/// Measurement table for every limit parameter present in the input,
/// including the ones that pass.
pub fn measure_copper(results: &ParameterMap) -> (CableCategory, Vec<CableTest>) {
    let category = detect_category(results);
    let tests = category
        .limits()
        .iter()
        .filter_map(|l| {
            let value = results.get(l.parameter)?.as_number()?;
            let dir = direction(l.parameter);
            Some(CableTest {
                parameter: l.parameter.to_string(),
                value,
                unit: unit_for(l.parameter).to_string(),
                limit: l.value,
                margin: margin(dir, value, l.value),
                direction: dir,
            })
        })
        .collect::<Vec<_>>();
    debug!(%category, measured = tests.len(), "copper measurements");
    (category, tests)
}
