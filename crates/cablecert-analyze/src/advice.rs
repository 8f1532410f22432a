//! Probable-cause and recommendation texts, keyed by parameter keyword.
//!
//! Tables are scanned in order; the first keyword contained in the lowercase
//! parameter name wins.

use cablecert_core::Severity;

type KeywordTable = &'static [(&'static str, &'static str)];

const FAIL_CAUSES: KeywordTable = &[
    ("insertion_loss", "Cable de baja calidad, conectores defectuosos, longitud excesiva"),
    ("next", "Destrenzado excesivo, split pairs, cable aplastado"),
    ("return_loss", "Mezcla de categorías, conectores incompatibles, impedancia incorrecta"),
    ("length", "Medición incorrecta o enlace realmente largo"),
    ("delay_skew", "Pares de longitudes muy diferentes, cable defectuoso"),
];

const FAIL_RECOMMENDATIONS: KeywordTable = &[
    ("insertion_loss", "Verificar longitud real, reemplazar cable por Cat superior"),
    ("next", "Reconectorizar respetando destrenzado <13mm, verificar no hay split pairs"),
    ("return_loss", "Usar componentes de misma categoría, verificar impedancia"),
    ("length", "Acortar enlace o dividir en dos segmentos"),
];

const WARNING_RECOMMENDATIONS: KeywordTable = &[
    ("insertion_loss", "Limpiar conectores, verificar no hay aplastamientos"),
    ("next", "Revisar terminaciones, alejar de fuentes interferencia"),
    ("return_loss", "Limpiar conectores, verificar no hay empalmes"),
];

const DEFAULT_CAUSE: &str = "Instalación incorrecta o componente defectuoso";
const DEFAULT_RECOMMENDATION: &str = "Revisar instalación según mejores prácticas";

fn lookup(table: KeywordTable, parameter: &str, default: &'static str) -> &'static str {
    let name = parameter.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| name.contains(*keyword))
        .map(|(_, text)| *text)
        .unwrap_or(default)
}

pub fn fail_cause(parameter: &str) -> &'static str {
    lookup(FAIL_CAUSES, parameter, DEFAULT_CAUSE)
}

/// Recommendation for a failing parameter (`Fail` and above) or a marginal one.
pub fn recommendation(parameter: &str, severity: Severity) -> &'static str {
    let table = if severity >= Severity::Fail { FAIL_RECOMMENDATIONS } else { WARNING_RECOMMENDATIONS };
    lookup(table, parameter, DEFAULT_RECOMMENDATION)
}
