//! Input shape checks run before analysis.
//!
//! The analyzer itself never fails: it skips readings it cannot use. These
//! checks let callers reject malformed certifier exports up front instead.

use thiserror::Error;

use crate::{ParameterMap, CAT6A_LIMITS, CAT6_LIMITS};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("parameter {0} has no numeric reading")]
    NotNumeric(String),
    #[error("NEXT reading {0} has no numeric value")]
    NextNotNumeric(String),
    #[error("{name} must be a finite number (found: {value})")]
    NotFinite { name: String, value: f64 },
    #[error("{name} cannot be negative (found: {value})")]
    Negative { name: String, value: f64 },
    #[error("fiber results need insertion_loss or otdr_trace")]
    NothingToAnalyze,
    #[error("otdr_trace must be a list of events")]
    OtdrShape,
}

fn finite(name: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { name: name.to_string(), value })
    }
}

/// Checks that every known copper parameter and every NEXT reading is a
/// finite number.
pub fn copper(results: &ParameterMap) -> Result<(), ValidationError> {
    for (name, m) in results {
        let known = CAT6_LIMITS.iter().chain(CAT6A_LIMITS).any(|l| l.parameter == name.as_str());
        let next = name.to_lowercase().contains("next");
        if !known && !next {
            continue;
        }
        match m.as_number() {
            Some(value) => {
                finite(name, value)?;
            }
            None if known => return Err(ValidationError::NotNumeric(name.clone())),
            None => return Err(ValidationError::NextNotNumeric(name.clone())),
        }
    }
    Ok(())
}

pub fn fiber(results: &ParameterMap) -> Result<(), ValidationError> {
    let loss = results.get("insertion_loss");
    let trace = results.get("otdr_trace");
    if loss.is_none() && trace.is_none() {
        return Err(ValidationError::NothingToAnalyze);
    }
    if let Some(m) = loss {
        let value = m.as_number().ok_or_else(|| ValidationError::NotNumeric("insertion_loss".to_string()))?;
        finite("insertion_loss", value)?;
    }
    for name in ["length", "connectors", "splices"] {
        let Some(m) = results.get(name) else { continue };
        let value = m.as_number().ok_or_else(|| ValidationError::NotNumeric(name.to_string()))?;
        if finite(name, value)? < 0.0 {
            return Err(ValidationError::Negative { name: name.to_string(), value });
        }
    }
    if let Some(m) = trace {
        let events = m.as_events().ok_or(ValidationError::OtdrShape)?;
        for (i, event) in events.iter().enumerate() {
            finite(&format!("otdr_trace[{i}].loss"), event.loss)?;
        }
    }
    Ok(())
}
