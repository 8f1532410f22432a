use cablecert_analyze::{analyze_copper, analyze_fiber, analyze_otdr_trace, generate_report};
use cablecert_core::{readings, Measurement, OtdrEvent, OverallStatus, ParameterMap, Severity};

#[test]
fn marginal_cat6_link_passes_conditionally() {
    let mut r = readings([
        ("insertion_loss_100MHz", 17.8),
        ("next_100MHz", 36.2),
        ("return_loss_100MHz", 12.5),
        ("length", 89.5),
    ]);
    r.insert("wire_map".to_string(), Measurement::Label("PASS".to_string()));

    let findings = analyze_copper(&r);
    let next: Vec<_> = findings.iter().filter(|f| f.parameter == "next_100MHz").collect();
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].severity, Severity::Warning);
    assert_eq!(next[0].issue, "Margen bajo: 1.1dB");
    // length is 0.5 m inside its limit but is not a loss figure
    assert!(findings.iter().all(|f| f.parameter != "length"));
    // insertion loss (0.7 dB) and return loss (2.5 dB) are marginal as well
    let params: Vec<_> = findings.iter().map(|f| f.parameter.as_str()).collect();
    assert_eq!(params, ["insertion_loss_100MHz", "next_100MHz", "return_loss_100MHz"]);
    assert!(findings.iter().all(|f| f.severity == Severity::Warning));

    let report = generate_report(findings);
    assert_eq!(report.overall_status, OverallStatus::ConditionalPass);
}

#[test]
fn excessive_insertion_loss_fails() {
    let findings = analyze_copper(&readings([("insertion_loss_100MHz", 19.0)]));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Fail);
    let report = generate_report(findings);
    assert_eq!(report.overall_status, OverallStatus::Fail);
    assert_eq!(report.summary.fail, 1);
}

#[test]
fn fiber_over_budget_fails() {
    let r = readings([("insertion_loss", 3.0), ("length", 200.0), ("connectors", 2.0), ("splices", 1.0)]);
    let findings = analyze_fiber(&r);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Fail);
    assert_eq!(findings[0].parameter, "Insertion Loss");
}

#[test]
fn otdr_connector_warns_and_clean_splice_does_not() {
    let findings = analyze_otdr_trace(&[OtdrEvent::connector(0.6, 50.0)]);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);

    let clean = OtdrEvent { kind: "splice".to_string(), loss: 0.05, reflectance: None, distance: None };
    assert!(analyze_otdr_trace(&[clean]).is_empty());
}

#[test]
fn wide_next_spread_is_critical_split_pair() {
    let r = readings([("next_100MHz", 30.0), ("ps_next_100MHz", 22.0), ("next_pair_b", 15.0), ("next_pair_c", 10.0)]);
    let findings = analyze_copper(&r);
    let split = findings.iter().find(|f| f.parameter == "Wire Map").unwrap();
    assert_eq!(split.severity, Severity::Critical);
    // pattern findings come after per-parameter findings
    assert_eq!(findings.last().unwrap().parameter, "Wire Map");
    assert_eq!(generate_report(findings).overall_status, OverallStatus::Fail);
}

#[test]
fn category_decides_which_table_applies() {
    // 36.2 is marginal against Cat6 NEXT but far below the Cat6A limit
    let cat6 = analyze_copper(&readings([("next_100MHz", 36.2)]));
    assert_eq!(cat6[0].severity, Severity::Warning);

    let cat6a = analyze_copper(&readings([("next_500MHz", 36.2)]));
    assert_eq!(cat6a[0].severity, Severity::Fail);
    assert_eq!(cat6a[0].issue, "Valor 36.2dB por debajo del límite 60.0");
}

#[test]
fn copper_analysis_is_repeatable() {
    let r = readings([
        ("insertion_loss_500MHz", 44.0),
        ("next_500MHz", 58.0),
        ("return_loss_500MHz", 9.0),
        ("acr_f_500MHz", 16.0),
        ("delay_skew", 55.0),
    ]);
    let first = analyze_copper(&r);
    let second = analyze_copper(&r);
    assert_eq!(first, second);
    let params: Vec<_> = first.iter().map(|f| f.parameter.as_str()).collect();
    assert_eq!(params, ["insertion_loss_500MHz", "next_500MHz", "return_loss_500MHz", "acr_f_500MHz", "delay_skew"]);
}

#[test]
fn empty_inputs_yield_no_findings() {
    assert!(analyze_copper(&ParameterMap::new()).is_empty());
    assert!(analyze_fiber(&ParameterMap::new()).is_empty());
    assert_eq!(generate_report(vec![]).overall_status, OverallStatus::Pass);
}
