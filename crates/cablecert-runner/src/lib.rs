pub mod config;
pub mod load;
pub mod render;
pub mod scenario;

pub use config::*;
pub use load::*;
pub use render::*;

use anyhow::Result;
use tracing::info;

use cablecert_analyze::{analyze_copper, analyze_fiber, detect_category, generate_report};
use cablecert_core::{readings, validate, Measurement, Medium, ParameterMap, Report};

/// Validates the readings, runs the analyzer for `medium` and builds the report.
pub fn certify(results: &ParameterMap, medium: Medium) -> Result<Report> {
    let findings = match medium {
        Medium::Copper => {
            validate::copper(results)?;
            info!(category = %detect_category(results), readings = results.len(), "certifying copper link");
            analyze_copper(results)
        }
        Medium::Fiber => {
            validate::fiber(results)?;
            info!(readings = results.len(), "certifying fiber link");
            analyze_fiber(results)
        }
    };
    Ok(generate_report(findings))
}

/// A marginal Cat6 permanent link, close to its insertion-loss and length limits.
pub fn demo_results() -> ParameterMap {
    let mut r = readings([
        ("insertion_loss_100MHz", 17.8),
        ("next_100MHz", 36.2),
        ("return_loss_100MHz", 12.5),
        ("length", 89.5),
    ]);
    r.insert("wire_map".to_string(), Measurement::Label("PASS".to_string()));
    r
}


#[cfg(test)]
mod scenario_tests {
    use super::scenario::*;
    use cablecert_core::Severity;
    use std::path::Path;

    fn run(dir: &str) -> (ScenarioExpected, cablecert_core::Report) {
        let p = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/scenarios").join(dir);
        simulate(&p).unwrap()
    }

    fn check(dir: &str) {
        let (exp, report) = run(dir);
        assert_eq!(report.overall_status, exp.expect_status, "{}", exp.scenario_id);
        for want in &exp.findings {
            assert!(
                report.findings.iter().any(|f| f.parameter == want.parameter && f.severity == want.severity),
                "{}: missing {:?}",
                exp.scenario_id,
                want
            );
        }
        assert_eq!(report.findings.len(), exp.findings.len(), "{}", exp.scenario_id);
    }

    #[test]
    fn scenario_sc01_marginal_cat6() {
        check("SC-01-marginal-cat6");
    }

    #[test]
    fn scenario_sc02_insertion_loss_fail() {
        check("SC-02-insertion-loss-fail");
    }

    #[test]
    fn scenario_sc03_fiber_over_budget() {
        check("SC-03-fiber-over-budget");
    }

    #[test]
    fn scenario_sc04_otdr_events() {
        check("SC-04-otdr-events");
    }

    #[test]
    fn scenario_sc05_split_pair() {
        let (_, report) = run("SC-05-split-pair");
        assert_eq!(report.findings.last().map(|f| f.severity), Some(Severity::Critical));
        check("SC-05-split-pair");
    }

    #[test]
    fn scenario_sc06_systemic_failure() {
        check("SC-06-systemic-failure");
    }

    #[test]
    fn scenario_sc07_cat6a_clean() {
        check("SC-07-cat6a-clean");
    }
}
