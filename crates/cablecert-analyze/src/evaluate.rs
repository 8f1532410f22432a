use cablecert_core::{Direction, Finding, Severity, COPPER_WARNING_MARGIN};
use tracing::debug;

use crate::advice;

/// Keywords of parameters where a larger reading is better (crosstalk and
/// reflection figures). Everything else is treated as lower-is-better.
const HIGHER_IS_BETTER: &[&str] = &["next", "return_loss", "ps_next", "acr_f"];

pub fn direction(parameter: &str) -> Direction {
    let name = parameter.to_lowercase();
    if HIGHER_IS_BETTER.iter().any(|k| name.contains(*k)) {
        Direction::HigherIsBetter
    } else {
        Direction::LowerIsBetter
    }
}

/// Positive when the reading is on the good side of the limit.
pub fn margin(direction: Direction, value: f64, limit: f64) -> f64 {
    match direction {
        Direction::HigherIsBetter => value - limit,
        Direction::LowerIsBetter => limit - value,
    }
}

pub fn unit_for(parameter: &str) -> &'static str {
    let name = parameter.to_lowercase();
    if name.contains("loss") || name.contains("next") {
        "dB"
    } else if name.contains("length") {
        "m"
    } else if name.contains("delay") {
        "ns"
    } else {
        ""
    }
}

/// Compares one reading with its limit. Returns `None` when the parameter
/// passes with enough margin (or is a non-loss parameter inside its limit).
pub fn evaluate_parameter(parameter: &str, value: f64, limit: f64) -> Option<Finding> {
    let dir = direction(parameter);
    let margin = margin(dir, value, limit);
    let unit = unit_for(parameter);
    debug!(parameter, value, limit, margin, ?dir, "evaluate");

    let finding = match dir {
        Direction::HigherIsBetter if margin < 0.0 => Finding {
            severity: Severity::Fail,
            parameter: parameter.to_string(),
            issue: format!("Valor {value:.1}{unit} por debajo del límite {limit:.1}"),
            probable_cause: advice::fail_cause(parameter).to_string(),
            recommendation: advice::recommendation(parameter, Severity::Fail).to_string(),
            impact: Some("Enlace no certificado, posibles errores de transmisión".to_string()),
        },
        Direction::HigherIsBetter if margin < COPPER_WARNING_MARGIN => Finding {
            severity: Severity::Warning,
            parameter: parameter.to_string(),
            issue: format!("Margen bajo: {margin:.1}dB"),
            probable_cause: "Instalación al límite de especificación".to_string(),
            recommendation: advice::recommendation(parameter, Severity::Warning).to_string(),
            impact: Some("Funcionará pero sin margen de seguridad".to_string()),
        },
        Direction::LowerIsBetter if margin < 0.0 => Finding {
            severity: Severity::Fail,
            parameter: parameter.to_string(),
            issue: format!("Valor {value:.1}{unit} excede límite {limit:.1}"),
            probable_cause: advice::fail_cause(parameter).to_string(),
            recommendation: advice::recommendation(parameter, Severity::Fail).to_string(),
            impact: Some("Enlace fuera de especificación".to_string()),
        },
        // only loss figures are worth a marginal warning; length and delay are not
        Direction::LowerIsBetter if margin < COPPER_WARNING_MARGIN && parameter.to_lowercase().contains("loss") => {
            Finding {
                severity: Severity::Warning,
                parameter: parameter.to_string(),
                issue: format!("Margen bajo: {margin:.1}dB"),
                probable_cause: "Conectores o cable de calidad marginal".to_string(),
                recommendation: "Limpiar conectores, verificar terminaciones".to_string(),
                impact: Some("Margen insuficiente para degradación futura".to_string()),
            }
        }
        _ => return None,
    };
    Some(finding)
}
