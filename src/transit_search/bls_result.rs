//! # Best transit candidate record
//!
//! This module defines [`TransitCandidate`], the record returned by the
//! **box least squares transit search** for the best-scoring point of the
//! period × duration grid.
//!
//! ## Fields
//!
//! - **`period`** – Orbital period of the winning grid point (days).
//! - **`epoch`** – Absolute time of an in-transit box center (days), placed
//!   within one period of the earliest sanitized timestamp.
//! - **`duration`** – Transit duration in days (winning fraction × period).
//! - **`depth`** – Out-of-box mean flux minus in-box mean flux (dimensionless).
//! - **`depth_snr`** – Depth divided by its estimated uncertainty.
//! - **`power`** – The winning goodness-of-fit score, kept for diagnostics.
//!
//! All five physical fields are guaranteed finite. A degenerate fit (constant
//! flux, zero best score) is reported as a record with `depth = 0` and
//! `depth_snr = 0` rather than as an error: the caller may surface it as
//! "no significant transit found".
//!
//! ```rust
//! use exoseeker::TransitCandidate;
//!
//! fn report(candidate: &TransitCandidate) {
//!     if candidate.is_degenerate() {
//!         println!("no significant transit found");
//!     } else {
//!         println!("{candidate}");
//!     }
//! }
//! ```
//!
//! ## See also
//!
//! - [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – Produces this record.
//! - [`phase_fold`](crate::transit_search::phase_fold::phase_fold) – Consumes `period` and `epoch`.
use std::fmt;

use crate::constants::Day;

/// The five scalar outputs of the grid search, plus the winning score.
///
/// Exactly one grid point is selected as best: the one maximizing the score,
/// ties broken by first occurrence in period-major, then duration-major
/// iteration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitCandidate {
    /// Orbital period of the best grid point (days).
    pub period: Day,
    /// Time of an in-transit box center (days, same zero-point as the input).
    pub epoch: Day,
    /// Transit duration (days).
    pub duration: Day,
    /// Fractional flux drop: out-of-box mean minus in-box mean.
    pub depth: f64,
    /// Depth divided by its estimated uncertainty.
    pub depth_snr: f64,
    /// Winning goodness-of-fit score.
    pub power: f64,
}

impl TransitCandidate {
    /// True when the search found no scoring window at all.
    ///
    /// This is the explicit "no signal found" outcome: zero best score with
    /// depth and signal-to-noise reported as zero.
    pub fn is_degenerate(&self) -> bool {
        self.power == 0.0
    }
}

impl fmt::Display for TransitCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transit Candidate")?;
        writeln!(f, "  P     (orbital period)    = {:.6} d", self.period)?;
        writeln!(f, "  t0    (transit epoch)     = {:.6} d", self.epoch)?;
        writeln!(f, "  dur   (transit duration)  = {:.6} d", self.duration)?;
        writeln!(f, "  depth (flux drop)         = {:.6}", self.depth)?;
        writeln!(f, "  snr   (depth S/N)         = {:.3}", self.depth_snr)?;
        write!(f, "  power (fit score)         = {:.6e}", self.power)
    }
}
