//! # KOI catalog feature rows
//!
//! The candidate-vetting layer consumes eight tabular features per KOI row,
//! under the archive's column names (see
//! [`KOI_FEATURE_COLUMNS`](crate::constants::KOI_FEATURE_COLUMNS)). Archive
//! exports deliver these columns as strings that may carry uncertainty
//! notations or units; this module projects such a row onto a typed record of
//! central values via [`value_parser`](crate::value_parser).
//!
//! No classifier lives here: the record is the shared boundary between the
//! transit-exploration core and whatever vetting model consumes it.
use std::collections::HashMap;

use ahash::RandomState;

use crate::value_parser::parse_value;

/// Raw catalog row: column name → cell content.
pub type FeatureMap = HashMap<String, String, RandomState>;

/// The eight vetting features of a KOI row, as central values.
///
/// Absent or unparseable cells stay `None`; downstream consumers decide how
/// to impute them.
///
/// Fields
/// -----------------
/// * `period` – Orbital period (days), column `koi_period`.
/// * `planet_radius` – Planet radius (Earth radii), column `koi_prad`.
/// * `model_snr` – Transit model signal-to-noise, column `koi_model_snr`.
/// * `depth` – Transit depth (ppm), column `koi_depth`.
/// * `duration` – Transit duration (hours), column `koi_duration`.
/// * `stellar_teff` – Stellar effective temperature (K), column `koi_steff`.
/// * `stellar_logg` – Stellar surface gravity (log10 cm/s²), column `koi_slogg`.
/// * `stellar_radius` – Stellar radius (solar radii), column `koi_srad`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KoiFeatures {
    pub period: Option<f64>,
    pub planet_radius: Option<f64>,
    pub model_snr: Option<f64>,
    pub depth: Option<f64>,
    pub duration: Option<f64>,
    pub stellar_teff: Option<f64>,
    pub stellar_logg: Option<f64>,
    pub stellar_radius: Option<f64>,
}

impl KoiFeatures {
    /// Project a raw catalog row onto the eight named features.
    ///
    /// Each cell goes through [`parse_value`]; only the central value is
    /// kept. Missing columns and unparseable cells yield `None`.
    ///
    /// Arguments
    /// -----------------
    /// * `row`: column name → raw cell content.
    ///
    /// Return
    /// ----------
    /// * A [`KoiFeatures`] record with every parseable central value filled.
    pub fn from_row(row: &FeatureMap) -> Self {
        let get = |column: &str| {
            row.get(column)
                .and_then(|raw| parse_value(raw))
                .map(|parsed| parsed.value)
        };

        KoiFeatures {
            period: get("koi_period"),
            planet_radius: get("koi_prad"),
            model_snr: get("koi_model_snr"),
            depth: get("koi_depth"),
            duration: get("koi_duration"),
            stellar_teff: get("koi_steff"),
            stellar_logg: get("koi_slogg"),
            stellar_radius: get("koi_srad"),
        }
    }

    /// The features in training order (the order of
    /// [`KOI_FEATURE_COLUMNS`](crate::constants::KOI_FEATURE_COLUMNS)).
    pub fn as_array(&self) -> [Option<f64>; 8] {
        [
            self.period,
            self.planet_radius,
            self.model_snr,
            self.depth,
            self.duration,
            self.stellar_teff,
            self.stellar_logg,
            self.stellar_radius,
        ]
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    fn row(entries: &[(&str, &str)]) -> FeatureMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_plain_row_round_trip() {
        let row = row(&[
            ("koi_period", "10.0"),
            ("koi_prad", "1.5"),
            ("koi_model_snr", "10.0"),
            ("koi_depth", "500.0"),
            ("koi_duration", "3.0"),
            ("koi_steff", "5700.0"),
            ("koi_slogg", "4.4"),
            ("koi_srad", "1.0"),
        ]);

        let features = KoiFeatures::from_row(&row);
        assert_eq!(features.period, Some(10.0));
        assert_eq!(features.stellar_teff, Some(5700.0));
        assert!(features.as_array().iter().all(Option::is_some));
    }

    #[test]
    fn test_uncertainty_notations_keep_central_value() {
        let row = row(&[
            ("koi_depth", "615.8±19.5 ppm"),
            ("koi_prad", "0.146 +0.318-0.146"),
            ("koi_steff", "5700 K"),
        ]);

        let features = KoiFeatures::from_row(&row);
        assert_eq!(features.depth, Some(615.8));
        assert_eq!(features.planet_radius, Some(0.146));
        assert_eq!(features.stellar_teff, Some(5700.0));
    }

    #[test]
    fn test_missing_and_garbage_cells_stay_none() {
        let row = row(&[("koi_period", "not-a-number")]);

        let features = KoiFeatures::from_row(&row);
        assert_eq!(features.period, None);
        assert_eq!(features.depth, None);
        assert_eq!(features, KoiFeatures::default());
    }
}
