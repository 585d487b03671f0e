//! # Light curves: ingestion, sanitization, and synthesis
//!
//! High-level facilities to **build** and **hold** a brightness-vs-time series
//! ready for a transit search. The central type is [`LightCurve`], a pair of
//! parallel owned buffers (`time`, `flux`) that is sanitized once at
//! construction and immutable afterwards.
//!
//! Modules
//! -----------------
//! * [`csv_reader`](crate::lightcurve::csv_reader) – Two-column `time,flux` CSV ingestion
//!   (file path or any reader).
//! * [`synthetic`](crate::lightcurve::synthetic) – Box-transit light-curve generator with
//!   optional Gaussian noise, for signal-injection studies, tests, and benches.
//!
//! Data model
//! -----------------
//! * **Time**: days, arbitrary zero-point. Samples may be **unsorted** and
//!   irregularly spaced; no ordering is enforced or assumed here.
//! * **Flux**: relative brightness, nominally centered near 1.0.
//!
//! Sanitization
//! -----------------
//! [`LightCurve::from_raw`] drops every pair in which either member is
//! non-finite (NaN or infinite) and keeps the relative order of survivors.
//! Downstream consumers can therefore assume every stored pair is finite.
//! The sanitizer never fails on content; the only construction error is a
//! length mismatch between the two input buffers.
//!
//! Example
//! -----------------
//! ```rust
//! use exoseeker::LightCurve;
//!
//! let time = vec![0.0, 0.5, f64::NAN, 1.5];
//! let flux = vec![1.0, 0.99, 1.0, 1.01];
//!
//! let lc = LightCurve::from_raw(&time, &flux).unwrap();
//! assert_eq!(lc.len(), 3); // the NaN pair is gone, order preserved
//! ```
//!
//! See also
//! ------------
//! * [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – Consumes a sanitized curve.
//! * [`phase_fold`](crate::transit_search::phase_fold::phase_fold) – Folds a curve at a given period/epoch.
use itertools::Itertools;

use crate::constants::{Day, RelativeFlux};
use crate::exoseeker_errors::ExoSeekerError;

pub mod csv_reader;
pub mod synthetic;

/// A sanitized brightness-vs-time series.
///
/// Both buffers have equal length and contain only finite values. The series
/// is immutable once constructed; a transit search reads it without copying.
///
/// Fields
/// -----------------
/// * `time` – Timestamps in days (arbitrary zero-point, possibly unsorted).
/// * `flux` – Relative brightness per timestamp.
///
/// See also
/// -------------
/// * [`LightCurve::from_raw`] – Constructor with non-finite filtering.
/// * [`LightCurve::from_csv_path`](crate::lightcurve::csv_reader) – File ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct LightCurve {
    time: Vec<Day>,
    flux: Vec<RelativeFlux>,
}

impl LightCurve {
    /// Build a sanitized light curve from raw parallel buffers.
    ///
    /// Every pair in which either the timestamp or the flux is non-finite is
    /// dropped; the relative order of the surviving pairs matches the input.
    ///
    /// Arguments
    /// -----------------
    /// * `time`: timestamps in days, arbitrary zero-point, unsorted allowed.
    /// * `flux`: relative brightness values, one per timestamp.
    ///
    /// Return
    /// ----------
    /// * A sanitized [`LightCurve`], or
    ///   [`LightCurveLengthMismatch`](crate::exoseeker_errors::ExoSeekerError::LightCurveLengthMismatch)
    ///   when the buffers differ in length.
    pub fn from_raw(time: &[Day], flux: &[RelativeFlux]) -> Result<Self, ExoSeekerError> {
        if time.len() != flux.len() {
            return Err(ExoSeekerError::LightCurveLengthMismatch {
                n_time: time.len(),
                n_flux: flux.len(),
            });
        }

        let (time, flux): (Vec<Day>, Vec<RelativeFlux>) = time
            .iter()
            .zip(flux.iter())
            .filter(|(t, f)| t.is_finite() && f.is_finite())
            .unzip();

        Ok(LightCurve { time, flux })
    }

    /// Number of sanitized samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when no sample survived sanitization.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Timestamps in days.
    pub fn time(&self) -> &[Day] {
        &self.time
    }

    /// Relative brightness values.
    pub fn flux(&self) -> &[RelativeFlux] {
        &self.flux
    }

    /// Iterate over `(time, flux)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, RelativeFlux)> + '_ {
        self.time.iter().copied().zip(self.flux.iter().copied())
    }

    /// Earliest and latest timestamps of the series.
    ///
    /// The samples need not be sorted, so this scans the buffer.
    ///
    /// Return
    /// ----------
    /// * `Some((t_min, t_max))`, or `None` for an empty curve.
    pub fn time_span(&self) -> Option<(Day, Day)> {
        self.time
            .iter()
            .copied()
            .minmax_by(f64::total_cmp)
            .into_option()
    }
}

#[cfg(test)]
mod lightcurve_tests {
    use super::*;

    #[test]
    fn test_sanitization_drops_non_finite_pairs() {
        let time = vec![0.0, 1.0, f64::NAN, 3.0, 4.0, 5.0];
        let flux = vec![1.0, f64::INFINITY, 0.99, 1.01, f64::NAN, 0.98];

        let lc = LightCurve::from_raw(&time, &flux).unwrap();

        // 3 pairs carry a non-finite member out of 6
        assert_eq!(lc.len(), 3);
        assert_eq!(lc.time(), &[0.0, 3.0, 5.0]);
        assert_eq!(lc.flux(), &[1.0, 1.01, 0.98]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = LightCurve::from_raw(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            ExoSeekerError::LightCurveLengthMismatch {
                n_time: 2,
                n_flux: 1
            }
        );
    }

    #[test]
    fn test_all_nan_flux_yields_empty_curve() {
        let time: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let flux = vec![f64::NAN; 10];

        let lc = LightCurve::from_raw(&time, &flux).unwrap();
        assert!(lc.is_empty());
        assert_eq!(lc.time_span(), None);
    }

    #[test]
    fn test_time_span_on_unsorted_input() {
        let lc = LightCurve::from_raw(&[3.0, -1.5, 12.0, 4.0], &[1.0; 4]).unwrap();
        assert_eq!(lc.time_span(), Some((-1.5, 12.0)));
    }
}
