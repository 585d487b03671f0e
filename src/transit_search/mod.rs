//! # Box least squares (BLS) transit-search parameters
//!
//! This module defines the [`BlsParams`] configuration struct and its builder,
//! which control the candidate grid explored by the **box least squares**
//! transit search: the trial-period range and density, and the set of trial
//! transit durations.
//!
//! ## Purpose
//!
//! The [`BlsParams`] object centralizes all tunable parameters used by
//! [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit).
//! It lets you:
//!
//! - Bound the trial-period range (`min_period`, `max_period`),
//! - Choose the period-grid density (`n_periods` linearly spaced values),
//! - Choose the trial transit durations, each a fraction of the trial period.
//!
//! The grid is pure configuration: it is rebuilt on every search call and no
//! state survives between calls.
//!
//! ## Pipeline overview
//!
//! 1. **Sanitization** – non-finite `(time, flux)` pairs are dropped at
//!    [`LightCurve`](crate::lightcurve::LightCurve) construction.
//! 2. **Grid search** – every `(period, duration)` pair of the grid is scored
//!    by sliding a box across phase space; the best-scoring box wins.
//! 3. **Phase folding** – the winning period/epoch produce a phase-folded view
//!    via [`phase_fold`](crate::transit_search::phase_fold::phase_fold).
//!
//! ## Example
//!
//! ```rust
//! use exoseeker::BlsParams;
//!
//! let params = BlsParams::builder()
//!     .min_period(1.0)
//!     .max_period(10.0)
//!     .n_periods(2000)
//!     .duration_fractions(&[0.02, 0.05, 0.1])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.period_grid().len(), 2000);
//! ```
//!
//! ## See also
//!
//! * [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – main search entry point
//! * [`bls_search`](crate::transit_search::bls::bls_search) – search + phase fold in one call
//! * [`TransitCandidate`](crate::transit_search::bls_result::TransitCandidate) – best-candidate record
use std::fmt;

use smallvec::SmallVec;

use crate::constants::{
    Day, DEFAULT_MAX_DURATION_FRAC, DEFAULT_MAX_PERIOD, DEFAULT_MIN_DURATION_FRAC,
    DEFAULT_MIN_PERIOD, DEFAULT_N_DURATIONS, DEFAULT_N_PERIODS,
};
use crate::exoseeker_errors::ExoSeekerError;

pub mod bls;
pub mod bls_result;
pub mod phase_fold;

/// Trial durations are a handful of fractions; keep them inline on the stack.
pub type DurationFractions = SmallVec<[f64; 16]>;

/// `n` linearly spaced values over `[start, stop]`; `n == 1` collapses to `start`.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Configuration of the BLS candidate grid.
///
/// The search evaluates every combination of a trial period (linearly spaced
/// over `[min_period, max_period]`) and a trial duration fraction. Durations
/// are interpreted as a fraction of the trial period, so the same fraction
/// set adapts to every trial period.
///
/// Fields
/// -----------------
/// * `min_period` – Shortest trial period (days), must be > 0.
/// * `max_period` – Longest trial period (days); with `n_periods > 1` it must
///   exceed `min_period`.
/// * `n_periods` – Number of trial periods (≥ 1). A single-period grid
///   collapses to `min_period`.
/// * `duration_fractions` – Trial transit durations as fractions of the trial
///   period; non-empty, every value in (0, 1). Stored in ascending order so
///   the grid's tie-break (first maximum wins) is well defined.
///
/// Defaults
/// -----------------
/// * `min_period`: 0.5 d
/// * `max_period`: 30.0 d
/// * `n_periods`: 5000
/// * `duration_fractions`: 10 linearly spaced values in [0.05, 0.3]
///
/// See also
/// -----------------
/// * [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – Consumes these parameters.
/// * [`BlsParamsBuilder`] – Fluent construction with validation.
#[derive(Debug, Clone, PartialEq)]
pub struct BlsParams {
    pub min_period: Day,
    pub max_period: Day,
    pub n_periods: usize,
    pub duration_fractions: DurationFractions,
}

impl BlsParams {
    /// Construct a new [`BlsParams`] with the default grid.
    ///
    /// This is equivalent to calling [`BlsParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`BlsParamsBuilder`] to configure a custom grid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use exoseeker::BlsParams;
    ///
    /// let params = BlsParams::builder()
    ///     .min_period(0.8)
    ///     .max_period(12.0)
    ///     .n_periods(1000)
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> BlsParamsBuilder {
        BlsParamsBuilder::new()
    }

    /// Materialize the trial-period grid, ascending.
    pub fn period_grid(&self) -> Vec<Day> {
        linspace(self.min_period, self.max_period, self.n_periods)
    }

    /// Check the grid invariants without consuming the struct.
    ///
    /// [`BlsParamsBuilder::build`] applies the same rules; the search re-runs
    /// them so that a hand-built parameter struct fails fast before any
    /// computation.
    ///
    /// Return
    /// ----------
    /// * `Ok(())` when the grid is usable, or
    ///   [`InvalidBlsParameter`](crate::exoseeker_errors::ExoSeekerError::InvalidBlsParameter)
    ///   naming the violated rule.
    pub fn validate(&self) -> Result<(), ExoSeekerError> {
        if !(self.min_period.is_finite() && self.min_period > 0.0) {
            return Err(ExoSeekerError::InvalidBlsParameter(
                "min_period must be finite and > 0".into(),
            ));
        }
        if !self.max_period.is_finite() || self.max_period < self.min_period {
            return Err(ExoSeekerError::InvalidBlsParameter(
                "max_period must be finite and >= min_period".into(),
            ));
        }
        if self.n_periods == 0 {
            return Err(ExoSeekerError::InvalidBlsParameter(
                "n_periods must be >= 1".into(),
            ));
        }
        if self.n_periods > 1 && self.max_period == self.min_period {
            return Err(ExoSeekerError::InvalidBlsParameter(
                "max_period must be > min_period when n_periods > 1".into(),
            ));
        }
        if self.duration_fractions.is_empty() {
            return Err(ExoSeekerError::InvalidBlsParameter(
                "duration_fractions must not be empty".into(),
            ));
        }
        if self
            .duration_fractions
            .iter()
            .any(|&d| !d.is_finite() || d <= 0.0 || d >= 1.0)
        {
            return Err(ExoSeekerError::InvalidBlsParameter(
                "every duration fraction must lie in (0, 1)".into(),
            ));
        }
        Ok(())
    }
}

impl Default for BlsParams {
    fn default() -> Self {
        BlsParams {
            min_period: DEFAULT_MIN_PERIOD,
            max_period: DEFAULT_MAX_PERIOD,
            n_periods: DEFAULT_N_PERIODS,
            duration_fractions: linspace(
                DEFAULT_MIN_DURATION_FRAC,
                DEFAULT_MAX_DURATION_FRAC,
                DEFAULT_N_DURATIONS,
            )
            .into_iter()
            .collect(),
        }
    }
}

/// Builder for [`BlsParams`], with validation.
#[derive(Debug, Clone)]
pub struct BlsParamsBuilder {
    params: BlsParams,
}

impl Default for BlsParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BlsParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: BlsParams::default(),
        }
    }

    pub fn min_period(mut self, v: Day) -> Self {
        self.params.min_period = v;
        self
    }
    pub fn max_period(mut self, v: Day) -> Self {
        self.params.max_period = v;
        self
    }
    pub fn n_periods(mut self, v: usize) -> Self {
        self.params.n_periods = v;
        self
    }
    pub fn duration_fractions(mut self, v: &[f64]) -> Self {
        self.params.duration_fractions = v.iter().copied().collect();
        self
    }

    /// Finalize the builder and produce a validated [`BlsParams`].
    ///
    /// Validation rules
    /// -----------------
    /// * `min_period > 0` and finite.
    /// * `max_period ≥ min_period`; strict `>` required when `n_periods > 1`
    ///   (a flat range with several trial periods would duplicate grid points).
    /// * `n_periods ≥ 1`.
    /// * `duration_fractions` non-empty, every value finite and in (0, 1).
    ///
    /// On success the duration fractions are sorted ascending, so the search
    /// iterates periods then durations in a deterministic order.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(BlsParams)` when all values are valid.
    /// * `Err(ExoSeekerError::InvalidBlsParameter)` otherwise.
    pub fn build(mut self) -> Result<BlsParams, ExoSeekerError> {
        self.params.validate()?;

        self.params
            .duration_fractions
            .sort_unstable_by(f64::total_cmp);
        Ok(self.params)
    }
}

impl fmt::Display for BlsParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 40;
            writeln!(f, "BLS Search Parameters")?;
            writeln!(f, "---------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "min_period  = {:.3} d",
                self.min_period,
                "Shortest trial period"
            )?;
            line!(
                "max_period  = {:.3} d",
                self.max_period,
                "Longest trial period"
            )?;
            line!("n_periods   = {}", self.n_periods, "Trial-period count")?;
            line!(
                "durations   = {:?}",
                self.duration_fractions.as_slice(),
                "Fractions of the trial period"
            )?;
            Ok(())
        } else {
            write!(
                f,
                "BlsParams(period∈[{:.2},{:.2}]d, n_periods={}, {} durations in [{:.3},{:.3}])",
                self.min_period,
                self.max_period,
                self.n_periods,
                self.duration_fractions.len(),
                self.duration_fractions.first().copied().unwrap_or(f64::NAN),
                self.duration_fractions.last().copied().unwrap_or(f64::NAN),
            )
        }
    }
}
