//! Published performance limits and analysis cutoffs.
//!
//! Copper limits are single-frequency permanent-link values (100 MHz for Cat6,
//! 500 MHz for Cat6A). Tables keep their published order, which is also the
//! order findings are reported in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CableCategory;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limit {
    pub parameter: &'static str,
    pub value: f64,
}

const fn limit(parameter: &'static str, value: f64) -> Limit {
    Limit { parameter, value }
}

pub const CAT6_LIMITS: &[Limit] = &[
    limit("insertion_loss_100MHz", 18.5),
    limit("next_100MHz", 35.1),
    limit("ps_next_100MHz", 32.1),
    limit("return_loss_100MHz", 10.0),
    limit("length", 90.0),
    limit("delay_skew", 50.0),
    limit("propagation_delay", 555.0),
];

pub const CAT6A_LIMITS: &[Limit] = &[
    limit("insertion_loss_500MHz", 45.3),
    limit("next_500MHz", 60.0),
    limit("ps_next_500MHz", 57.0),
    limit("return_loss_500MHz", 8.0),
    limit("acr_f_500MHz", 17.4),
    limit("length", 90.0),
    limit("delay_skew", 50.0),
];

impl CableCategory {
    pub fn limits(&self) -> &'static [Limit] {
        match self {
            CableCategory::Cat6 => CAT6_LIMITS,
            CableCategory::Cat6A => CAT6A_LIMITS,
        }
    }

    pub fn limit_for(&self, parameter: &str) -> Option<f64> {
        self.limits().iter().find(|l| l.parameter == parameter).map(|l| l.value)
    }
}

/// Copper margin (dB) under which a passing parameter is reported as marginal.
pub const COPPER_WARNING_MARGIN: f64 = 3.0;

/// Structured sub-results reporting `FAIL` needed to flag a systemic problem.
pub const SYSTEMIC_FAIL_COUNT: usize = 3;
/// NEXT readings needed before the split-pair heuristic applies.
pub const SPLIT_PAIR_MIN_READINGS: usize = 4;
/// NEXT spread (dB) above which a split pair is suspected.
pub const SPLIT_PAIR_SPREAD_DB: f64 = 10.0;

// Fiber loss budget.
pub const FIBER_BASE_MARGIN_DB: f64 = 0.75;
pub const FIBER_ATTENUATION_DB_PER_KM: f64 = 3.5;
pub const FIBER_CONNECTOR_LOSS_DB: f64 = 0.3;
pub const FIBER_SPLICE_LOSS_DB: f64 = 0.1;
pub const FIBER_DEFAULT_CONNECTORS: f64 = 2.0;
pub const FIBER_WARNING_MARGIN: f64 = 1.0;

// OTDR per-event maxima.
pub const OTDR_CONNECTOR_MAX_LOSS_DB: f64 = 0.5;
pub const OTDR_SPLICE_MAX_LOSS_DB: f64 = 0.1;

/// Reference channel limits for common multimode applications.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FiberLimit {
    pub max_length_m: f64,
    pub max_loss_db: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FiberApplication {
    Om3TenGigSr,
    Om4TenGigSr,
    Om4FortyGigSr4,
    Om4HundredGigSr4,
}

impl FiberApplication {
    pub const ALL: [FiberApplication; 4] = [
        FiberApplication::Om3TenGigSr,
        FiberApplication::Om4TenGigSr,
        FiberApplication::Om4FortyGigSr4,
        FiberApplication::Om4HundredGigSr4,
    ];

    pub fn limit(&self) -> FiberLimit {
        let (max_length_m, max_loss_db) = match self {
            FiberApplication::Om3TenGigSr => (300.0, 2.6),
            FiberApplication::Om4TenGigSr => (400.0, 2.6),
            FiberApplication::Om4FortyGigSr4 => (150.0, 1.9),
            FiberApplication::Om4HundredGigSr4 => (100.0, 1.9),
        };
        FiberLimit { max_length_m, max_loss_db }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FiberApplication::Om3TenGigSr => "om3_10g_sr",
            FiberApplication::Om4TenGigSr => "om4_10g_sr",
            FiberApplication::Om4FortyGigSr4 => "om4_40g_sr4",
            FiberApplication::Om4HundredGigSr4 => "om4_100g_sr4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FiberApplication::Om3TenGigSr => "OM3-10G-SR",
            FiberApplication::Om4TenGigSr => "OM4-10G-SR",
            FiberApplication::Om4FortyGigSr4 => "OM4-40G-SR4",
            FiberApplication::Om4HundredGigSr4 => "OM4-100G-SR4",
        }
    }
}

impl fmt::Display for FiberApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FiberApplication {
    type Err = String;

    /// Accepts both `om4_10g_sr` keys and `OM4-10G-SR` labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        FiberApplication::ALL
            .into_iter()
            .find(|app| app.key() == wanted)
            .ok_or_else(|| format!("unknown fiber application: {s}"))
    }
}
