use std::path::Path;

use anyhow::{Context, Result};

use cablecert_core::ParameterMap;

/// Reads a certifier export. `.yaml`/`.yml` files are parsed as YAML,
/// anything else as JSON.
pub fn load_results(path: &Path) -> Result<ParameterMap> {
    let s = std::fs::read_to_string(path).with_context(|| format!("read results: {}", path.display()))?;
    let is_yaml = matches!(path.extension().and_then(|e| e.to_str()), Some("yaml" | "yml"));
    let results: ParameterMap = if is_yaml {
        serde_yaml::from_str(&s).with_context(|| format!("parse results yaml: {}", path.display()))?
    } else {
        serde_json::from_str(&s).with_context(|| format!("parse results json: {}", path.display()))?
    };
    Ok(results)
}
