//! # Phase folding
//!
//! Maps every timestamp of a light curve onto a single orbital cycle so that
//! repeated transit events overlay, with the transit epoch centered at phase
//! 0.5. Centering the epoch mid-range keeps the transit away from the
//! wraparound boundary at phase 0/1, where it would otherwise be split in two.
//!
//! The fold is a pure post-processing step: it is total and deterministic for
//! any positive finite period, and the output always has the same length as
//! the sanitized input.
//!
//! ## See also
//! ------------
//! * [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – Supplies the period and epoch.
use ordered_float::OrderedFloat;

use crate::constants::{Day, Phase, RelativeFlux};
use crate::exoseeker_errors::ExoSeekerError;
use crate::lightcurve::LightCurve;

/// A light curve mapped onto one orbital cycle, sorted by ascending phase.
///
/// Fields
/// -----------------
/// * `phase` – Fractional cycle positions in [0, 1), epoch at 0.5.
/// * `flux` – Brightness values carried along unchanged, reordered with phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseFoldedCurve {
    pub phase: Vec<Phase>,
    pub flux: Vec<RelativeFlux>,
}

impl PhaseFoldedCurve {
    /// Number of folded samples (equals the sanitized input length).
    pub fn len(&self) -> usize {
        self.phase.len()
    }

    /// True when the folded series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.phase.is_empty()
    }
}

/// Fold a light curve at a given period and transit epoch.
///
/// Every timestamp maps to
/// `phase = ((t − epoch + 0.5·period) mod period) / period`,
/// which lies in [0, 1) and puts the epoch itself at exactly 0.5. The output
/// is sorted by ascending phase with a **stable** sort, so samples sharing a
/// phase keep their input order.
///
/// Arguments
/// -----------------
/// * `curve`: the sanitized light curve to fold.
/// * `period`: orbital period in days, must be finite and > 0.
/// * `epoch`: time of a transit center (days, same zero-point as the curve).
///
/// Return
/// ----------
/// * A [`PhaseFoldedCurve`], or
///   [`InvalidBlsParameter`](crate::exoseeker_errors::ExoSeekerError::InvalidBlsParameter)
///   for a non-positive or non-finite period or epoch.
///
/// See also
/// ------------
/// * [`bls_search`](crate::transit_search::bls::bls_search) – Search and fold in one call.
pub fn phase_fold(
    curve: &LightCurve,
    period: Day,
    epoch: Day,
) -> Result<PhaseFoldedCurve, ExoSeekerError> {
    if !(period.is_finite() && period > 0.0) {
        return Err(ExoSeekerError::InvalidBlsParameter(
            "fold period must be finite and > 0".into(),
        ));
    }
    if !epoch.is_finite() {
        return Err(ExoSeekerError::InvalidBlsParameter(
            "fold epoch must be finite".into(),
        ));
    }

    let phase: Vec<Phase> = curve
        .time()
        .iter()
        .map(|&t| {
            let ph = (t - epoch + 0.5 * period).rem_euclid(period) / period;
            // The division can round up to exactly 1.0; 1.0 ≡ 0.0 on the cycle.
            if ph < 1.0 {
                ph
            } else {
                0.0
            }
        })
        .collect();

    // Stable sort on the phase key keeps input order among exact ties.
    let mut order: Vec<usize> = (0..phase.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(phase[i]));

    Ok(PhaseFoldedCurve {
        phase: order.iter().map(|&i| phase[i]).collect(),
        flux: order.iter().map(|&i| curve.flux()[i]).collect(),
    })
}

#[cfg(test)]
mod phase_fold_tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn curve(time: &[f64]) -> LightCurve {
        let flux: Vec<f64> = time.iter().map(|&t| 1.0 + 0.001 * t).collect();
        LightCurve::from_raw(time, &flux).unwrap()
    }

    #[test]
    fn test_epoch_maps_to_half() {
        let lc = curve(&[7.3, 0.0, -4.1, 7.3 + 2.0]);
        let folded = phase_fold(&lc, 2.0, 7.3).unwrap();

        // Both samples lying exactly on the epoch (mod period) fold to 0.5.
        let on_epoch = folded
            .phase
            .iter()
            .filter(|&&p| (p - 0.5).abs() < 1e-12)
            .count();
        assert_eq!(on_epoch, 2);
    }

    #[test]
    fn test_phase_range_for_extreme_times() {
        let lc = curve(&[-1.0e6, -3.7, 0.0, 12.345, 9.9e5]);
        let folded = phase_fold(&lc, 3.5, 123.456).unwrap();

        assert_eq!(folded.len(), lc.len());
        assert!(folded.phase.iter().all(|&p| (0.0..1.0).contains(&p)));
    }

    #[test]
    fn test_output_sorted_by_phase() {
        let lc = curve(&[5.0, 0.3, 9.1, 2.2, 4.4, 7.7]);
        let folded = phase_fold(&lc, 1.7, 0.0).unwrap();

        assert!(folded.phase.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_stable_order_among_phase_ties() {
        // Two samples one period apart share a phase; input order must survive.
        let time = [1.0, 3.0];
        let flux = [10.0, 20.0];
        let lc = LightCurve::from_raw(&time, &flux).unwrap();

        let folded = phase_fold(&lc, 2.0, 0.0).unwrap();
        assert_abs_diff_eq!(folded.phase[0], folded.phase[1], epsilon = 1e-12);
        assert_eq!(folded.flux, vec![10.0, 20.0]);
    }

    #[test]
    fn test_invalid_period_is_rejected() {
        let lc = curve(&[0.0, 1.0]);
        assert!(phase_fold(&lc, 0.0, 0.0).is_err());
        assert!(phase_fold(&lc, -1.0, 0.0).is_err());
        assert!(phase_fold(&lc, f64::NAN, 0.0).is_err());
        assert!(phase_fold(&lc, 1.0, f64::INFINITY).is_err());
    }
}
