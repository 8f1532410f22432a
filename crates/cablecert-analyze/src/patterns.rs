use cablecert_core::{
    Finding, ParameterMap, Severity, SPLIT_PAIR_MIN_READINGS, SPLIT_PAIR_SPREAD_DB, SYSTEMIC_FAIL_COUNT,
};
use tracing::debug;

/// Installation-wide checks over the raw readings.
pub fn analyze_patterns(results: &ParameterMap) -> Vec<Finding> {
    let mut findings = Vec::new();

    let failed = results.values().filter(|m| m.is_failed_verdict()).count();
    if failed >= SYSTEMIC_FAIL_COUNT {
        debug!(failed, "systemic failure");
        findings.push(Finding {
            severity: Severity::Critical,
            parameter: "Sistema".to_string(),
            issue: "Múltiples parámetros fallando".to_string(),
            probable_cause: "Error sistemático en instalación o cable defectuoso".to_string(),
            recommendation: "Revisar proceso de instalación completo".to_string(),
            impact: Some("Enlace completamente inadecuado para uso".to_string()),
        });
    }

    if detect_split_pairs(results) {
        findings.push(Finding {
            severity: Severity::Critical,
            parameter: "Wire Map".to_string(),
            issue: "Posible split pair detectado".to_string(),
            probable_cause: "Error en secuencia de pines durante conectorización".to_string(),
            recommendation: "Reconectorizar siguiendo T568A o T568B consistentemente".to_string(),
            impact: Some("Alto crosstalk, enlace inestable".to_string()),
        });
    }

    findings
}

/// Coarse heuristic: a wide spread across all NEXT readings suggests a split
/// pair. Readings are not matched to physical pairs.
pub fn detect_split_pairs(results: &ParameterMap) -> bool {
    let next: Vec<f64> = results
        .iter()
        .filter(|(k, _)| k.to_lowercase().contains("next"))
        .filter_map(|(_, m)| m.as_number())
        .collect();
    if next.len() < SPLIT_PAIR_MIN_READINGS {
        return false;
    }
    let max = next.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = next.iter().copied().fold(f64::INFINITY, f64::min);
    debug!(readings = next.len(), spread = max - min, "split pair check");
    max - min > SPLIT_PAIR_SPREAD_DB
}
