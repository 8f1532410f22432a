//! Certification analyzer: compares certifier readings against published
//! limits and turns deviations into findings and a report.
//!
//! Every entry point is a pure function of its input; the only shared data are
//! the constant limit tables in `cablecert_core::limits`.

pub mod advice;
pub mod copper;
pub mod evaluate;
pub mod fiber;
pub mod patterns;
pub mod report;

pub use copper::*;
pub use evaluate::*;
pub use fiber::*;
pub use patterns::*;
pub use report::*;
