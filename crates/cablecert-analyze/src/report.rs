use cablecert_core::{Finding, OverallStatus, Report, Summary};
use tracing::info;

/// First match wins: any FAIL/CRITICAL fails the link, warnings alone give a
/// conditional pass.
pub fn overall_status(summary: &Summary) -> OverallStatus {
    if summary.fail > 0 || summary.critical > 0 {
        OverallStatus::Fail
    } else if summary.warning > 0 {
        OverallStatus::ConditionalPass
    } else {
        OverallStatus::Pass
    }
}

pub fn executive_summary(status: OverallStatus, summary: &Summary) -> String {
    match status {
        OverallStatus::Pass => "Certificación EXITOSA. El enlace cumple todas las especificaciones con márgenes \
                                adecuados. Apto para aplicaciones de alta velocidad."
            .to_string(),
        OverallStatus::ConditionalPass => format!(
            "Certificación CONDICIONAL. El enlace funciona pero tiene {} problemas que requieren atención para \
             garantizar operación a largo plazo.",
            summary.warning + summary.critical
        ),
        OverallStatus::Fail => format!(
            "Certificación FALLIDA. {} problemas críticos detectados. El enlace requiere corrección antes de \
             puesta en servicio.",
            summary.fail + summary.critical
        ),
    }
}

pub fn generate_report(findings: Vec<Finding>) -> Report {
    let summary = Summary::tally(&findings);
    let overall_status = overall_status(&summary);
    info!(status = %overall_status, issues = summary.total_issues, "report generated");
    Report { overall_status, executive_summary: executive_summary(overall_status, &summary), summary, findings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cablecert_core::Severity;

    fn finding(severity: Severity) -> Finding {
        Finding {
            severity,
            parameter: "p".to_string(),
            issue: String::new(),
            probable_cause: String::new(),
            recommendation: String::new(),
            impact: None,
        }
    }

    #[test]
    fn empty_report_passes() {
        let report = generate_report(vec![]);
        assert_eq!(report.overall_status, OverallStatus::Pass);
        assert_eq!(report.summary, Summary::default());
        assert_eq!(
            report.executive_summary,
            "Certificación EXITOSA. El enlace cumple todas las especificaciones con márgenes adecuados. \
             Apto para aplicaciones de alta velocidad."
        );
    }

    #[test]
    fn warnings_only_is_conditional() {
        let report = generate_report(vec![finding(Severity::Warning), finding(Severity::Warning)]);
        assert_eq!(report.overall_status, OverallStatus::ConditionalPass);
        assert_eq!(
            report.executive_summary,
            "Certificación CONDICIONAL. El enlace funciona pero tiene 2 problemas que requieren atención \
             para garantizar operación a largo plazo."
        );
    }

    #[test]
    fn fail_beats_any_number_of_warnings() {
        let mut findings = vec![finding(Severity::Warning); 5];
        findings.push(finding(Severity::Critical));
        findings.push(finding(Severity::Fail));
        let report = generate_report(findings);
        assert_eq!(report.overall_status, OverallStatus::Fail);
        assert_eq!(report.summary.total_issues, 7);
        assert_eq!(
            report.executive_summary,
            "Certificación FALLIDA. 2 problemas críticos detectados. El enlace requiere corrección antes de \
             puesta en servicio."
        );
    }

    #[test]
    fn pass_findings_are_counted_but_harmless() {
        let report = generate_report(vec![finding(Severity::Pass)]);
        assert_eq!(report.summary.pass, 1);
        assert_eq!(report.overall_status, OverallStatus::Pass);
    }
}
