//! # Synthetic box-transit light curves
//!
//! Generator for brightness-vs-time series carrying an idealized periodic
//! box-shaped dimming, with optional Gaussian noise. Used for
//! signal-injection studies (does the search recover a transit of known
//! parameters?), integration tests, and benchmarks.
//!
//! ## Model
//! -----------------
//! Flux is 1.0 everywhere except inside the transit box, where it drops by
//! `depth`. The box is centered on `epoch` modulo `period` and spans
//! `duration_frac` of each cycle. Gaussian noise with standard deviation
//! `noise_sigma` is added on top when requested.
//!
//! ## Example
//! -----------------
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use exoseeker::lightcurve::synthetic::TransitModel;
//!
//! let model = TransitModel {
//!     period: 3.5,
//!     epoch: 0.0,
//!     duration_frac: 0.05,
//!     depth: 0.01,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let lc = model.light_curve(1000, 27.0, 1e-4, &mut rng).unwrap();
//! assert_eq!(lc.len(), 1000);
//! ```
//!
//! ## See also
//! ------------
//! * [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – Recovery of the injected signal.
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::Day;
use crate::exoseeker_errors::ExoSeekerError;
use crate::lightcurve::LightCurve;

/// Parameters of an idealized periodic box-shaped transit.
///
/// Fields
/// -----------------
/// * `period` – Orbital period (days), must be positive.
/// * `epoch` – Time of a transit center (days, same zero-point as the curve).
/// * `duration_frac` – Transit duration as a fraction of the period, in (0, 1).
/// * `depth` – Fractional flux drop during transit (dimensionless).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitModel {
    pub period: Day,
    pub epoch: Day,
    pub duration_frac: f64,
    pub depth: f64,
}

impl TransitModel {
    /// True when `t` falls inside the transit box.
    ///
    /// The box spans half a duration on each side of the epoch, with
    /// wraparound across the period boundary.
    pub fn in_transit(&self, t: Day) -> bool {
        let half_width = 0.5 * self.duration_frac * self.period;
        let dp = (t - self.epoch).rem_euclid(self.period);
        dp < half_width || dp > self.period - half_width
    }

    /// Noise-free model flux at time `t`.
    pub fn flux_at(&self, t: Day) -> f64 {
        if self.in_transit(t) {
            1.0 - self.depth
        } else {
            1.0
        }
    }

    /// Generate a uniformly sampled light curve from this model.
    ///
    /// Timestamps are `n_points` evenly spaced values over `[0, time_span]`.
    /// With `noise_sigma > 0`, independent Gaussian noise is added to every
    /// flux sample; a zero sigma yields the noise-free model.
    ///
    /// Arguments
    /// -----------------
    /// * `n_points`: number of samples.
    /// * `time_span`: total baseline in days.
    /// * `noise_sigma`: Gaussian noise standard deviation (≥ 0).
    /// * `rng`: random source (seed it for reproducible curves).
    ///
    /// Return
    /// ----------
    /// * A sanitized [`LightCurve`], or
    ///   [`NoiseInjectionError`](crate::exoseeker_errors::ExoSeekerError::NoiseInjectionError)
    ///   for a negative or non-finite `noise_sigma`.
    pub fn light_curve<R: Rng>(
        &self,
        n_points: usize,
        time_span: Day,
        noise_sigma: f64,
        rng: &mut R,
    ) -> Result<LightCurve, ExoSeekerError> {
        let noise = Normal::new(0.0, noise_sigma)?;

        let step = if n_points > 1 {
            time_span / (n_points - 1) as f64
        } else {
            0.0
        };

        let time: Vec<Day> = (0..n_points).map(|i| i as f64 * step).collect();
        let flux: Vec<f64> = time
            .iter()
            .map(|&t| {
                let base = self.flux_at(t);
                if noise_sigma > 0.0 {
                    base + noise.sample(rng)
                } else {
                    base
                }
            })
            .collect();

        LightCurve::from_raw(&time, &flux)
    }
}
