use cablecert_core::{
    Finding, OtdrEvent, ParameterMap, Severity, FIBER_ATTENUATION_DB_PER_KM, FIBER_BASE_MARGIN_DB,
    FIBER_CONNECTOR_LOSS_DB, FIBER_DEFAULT_CONNECTORS, FIBER_SPLICE_LOSS_DB, FIBER_WARNING_MARGIN,
    OTDR_CONNECTOR_MAX_LOSS_DB, OTDR_SPLICE_MAX_LOSS_DB,
};
use tracing::{debug, info};

/// Tier 1 loss check plus, when a trace is attached, the OTDR event scan.
pub fn analyze_fiber(results: &ParameterMap) -> Vec<Finding> {
    let mut findings = Vec::new();
    if results.get("insertion_loss").and_then(|m| m.as_number()).is_some() {
        findings.extend(analyze_fiber_loss(results));
    }
    if let Some(events) = results.get("otdr_trace").and_then(|m| m.as_events()) {
        findings.extend(analyze_otdr_trace(events));
    }
    info!(findings = findings.len(), "fiber analysis");
    findings
}

/// Loss budget in dB for a link of `length_m` meters.
pub fn expected_loss(length_m: f64, connectors: f64, splices: f64) -> f64 {
    FIBER_BASE_MARGIN_DB
        + (length_m / 1000.0) * FIBER_ATTENUATION_DB_PER_KM
        + connectors * FIBER_CONNECTOR_LOSS_DB
        + splices * FIBER_SPLICE_LOSS_DB
}

pub fn analyze_fiber_loss(results: &ParameterMap) -> Option<Finding> {
    let reading = |key: &str, default: f64| results.get(key).and_then(|m| m.as_number()).unwrap_or(default);
    let loss = reading("insertion_loss", 0.0);
    let expected = expected_loss(
        reading("length", 0.0),
        reading("connectors", FIBER_DEFAULT_CONNECTORS),
        reading("splices", 0.0),
    );
    let margin = expected - loss;
    debug!(loss, expected, margin, "fiber loss budget");

    if margin < 0.0 {
        Some(Finding {
            severity: Severity::Fail,
            parameter: "Insertion Loss".to_string(),
            issue: format!("Pérdida {loss:.2}dB excede límite calculado {expected:.2}dB"),
            probable_cause: "Conectores sucios, empalmes defectuosos o fibra dañada".to_string(),
            recommendation: "Limpiar conectores con alcohol isopropílico, verificar empalmes".to_string(),
            impact: Some("Enlace puede no funcionar en todas las condiciones".to_string()),
        })
    } else if margin < FIBER_WARNING_MARGIN {
        Some(Finding {
            severity: Severity::Warning,
            parameter: "Insertion Loss".to_string(),
            issue: format!("Margen bajo: {margin:.2}dB"),
            probable_cause: "Conectores marginales o envejecimiento".to_string(),
            recommendation: "Limpiar conectores, considerar reemplazo preventivo".to_string(),
            impact: Some("Enlace funcionará pero con poco margen".to_string()),
        })
    } else {
        None
    }
}

fn location(event: &OtdrEvent) -> String {
    match event.distance {
        Some(d) => format!("a {d}m"),
        None => "a distancia desconocida".to_string(),
    }
}

/// Flags lossy connectors and splices, one finding per offending event.
pub fn analyze_otdr_trace(events: &[OtdrEvent]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for event in events {
        match event.kind.as_str() {
            "connector" if event.loss > OTDR_CONNECTOR_MAX_LOSS_DB => findings.push(Finding {
                severity: Severity::Warning,
                parameter: "OTDR Connector".to_string(),
                issue: format!("Pérdida conector {:.2}dB {}", event.loss, location(event)),
                probable_cause: "Conector sucio o mal pulido".to_string(),
                recommendation: "Limpiar conector con procedimiento estándar".to_string(),
                impact: Some("Degradación de señal".to_string()),
            }),
            "splice" if event.loss > OTDR_SPLICE_MAX_LOSS_DB => findings.push(Finding {
                severity: Severity::Warning,
                parameter: "OTDR Splice".to_string(),
                issue: format!("Pérdida empalme {:.2}dB {}", event.loss, location(event)),
                probable_cause: "Empalme de fusión defectuoso".to_string(),
                recommendation: "Revisar parámetros de fusionadora".to_string(),
                impact: Some("Pérdida de potencia óptica".to_string()),
            }),
            _ => {}
        }
    }
    findings
}
