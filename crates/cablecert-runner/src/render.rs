use anyhow::{Context, Result};

use cablecert_core::{CableCategory, CableTest, FiberApplication, Report, CAT6A_LIMITS, CAT6_LIMITS};

use crate::OutputFormat;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(report).with_context(|| "serialize report json"),
        OutputFormat::Json => serde_json::to_string(report).with_context(|| "serialize report json"),
        OutputFormat::Yaml => serde_yaml::to_string(report).with_context(|| "serialize report yaml"),
    }
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_text(report: &Report) -> String {
    let s = &report.summary;
    let mut lines = vec![
        "=== ANÁLISIS DE CERTIFICACIÓN ===".to_string(),
        format!("Estado: {}", report.overall_status),
        format!("Resumen: {}", report.executive_summary),
        format!("Hallazgos: {} (CRITICAL {}, FAIL {}, WARNING {})", s.total_issues, s.critical, s.fail, s.warning),
    ];
    for f in &report.findings {
        lines.push(String::new());
        lines.push(format!("[{}] {}: {}", f.severity, f.parameter, f.issue));
        lines.push(format!("   Causa probable: {}", f.probable_cause));
        lines.push(format!("   Recomendación: {}", f.recommendation));
        if let Some(impact) = &f.impact {
            lines.push(format!("   Impacto: {impact}"));
        }
    }
    join_lines(lines)
}

pub fn render_measurements(category: CableCategory, tests: &[CableTest]) -> String {
    let mut lines = vec![format!("Categoría: {category}")];
    lines.extend(tests.iter().map(|t| {
        format!(
            "  {:<24} {:>8.1}{:<2}  límite {:>7.1}  margen {:>6.1}",
            t.parameter, t.value, t.unit, t.limit, t.margin
        )
    }));
    join_lines(lines)
}

/// Plain listing of every built-in limit table.
pub fn render_limits() -> String {
    let mut lines = Vec::new();
    for (category, table) in [(CableCategory::Cat6, CAT6_LIMITS), (CableCategory::Cat6A, CAT6A_LIMITS)] {
        lines.push(category.to_string());
        lines.extend(table.iter().map(|l| format!("  {:<24} {}", l.parameter, l.value)));
    }
    lines.push("Fibra (referencia)".to_string());
    lines.extend(FiberApplication::ALL.iter().map(|app| {
        let l = app.limit();
        format!("  {:<24} {} m / {} dB", app.label(), l.max_length_m, l.max_loss_db)
    }));
    join_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cablecert_core::{Finding, OverallStatus, Severity, Summary};

    fn sample() -> Report {
        let findings = vec![Finding {
            severity: Severity::Warning,
            parameter: "next_100MHz".to_string(),
            issue: "Margen bajo: 1.1dB".to_string(),
            probable_cause: "Instalación al límite de especificación".to_string(),
            recommendation: "Revisar terminaciones, alejar de fuentes interferencia".to_string(),
            impact: None,
        }];
        Report {
            overall_status: OverallStatus::ConditionalPass,
            summary: Summary::tally(&findings),
            findings,
            executive_summary: "Certificación CONDICIONAL.".to_string(),
        }
    }

    #[test]
    fn text_lists_findings() {
        let text = render_text(&sample());
        assert!(text.starts_with("=== ANÁLISIS DE CERTIFICACIÓN ===\n"));
        assert!(text.contains("Estado: PASS*"));
        assert!(text.contains("Hallazgos: 1 (CRITICAL 0, FAIL 0, WARNING 1)"));
        assert!(text.contains("[WARNING] next_100MHz: Margen bajo: 1.1dB"));
        assert!(text.contains("   Causa probable: Instalación al límite de especificación"));
        assert!(!text.contains("Impacto"));
    }

    #[test]
    fn json_and_yaml_carry_status() {
        let report = sample();
        let json = render(&report, OutputFormat::Json, false).unwrap();
        assert!(json.contains(r#""overall_status":"PASS*""#));
        let yaml = render(&report, OutputFormat::Yaml, false).unwrap();
        let back: Report = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn limits_listing_covers_all_tables() {
        let text = render_limits();
        assert!(text.contains("Cat6A"));
        assert!(text.contains("acr_f_500MHz"));
        assert!(text.contains("OM4-100G-SR4"));
    }

    #[test]
    fn measurement_table_lists_each_parameter() {
        use cablecert_core::Direction;
        let tests = vec![CableTest {
            parameter: "next_100MHz".to_string(),
            value: 36.2,
            unit: "dB".to_string(),
            limit: 35.1,
            margin: 1.1,
            direction: Direction::HigherIsBetter,
        }];
        let text = render_measurements(CableCategory::Cat6, &tests);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Categoría: Cat6");
        assert!(lines[1].contains("next_100MHz") && lines[1].contains("36.2dB"));
        assert!(text.ends_with('\n'));
    }
}
