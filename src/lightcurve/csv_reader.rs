//! # Two-column light-curve CSV ingestion
//!
//! Reads a brightness-vs-time series from a CSV source whose header carries a
//! `time` column and a `flux` column. Extra columns are ignored; the two named
//! columns must both be present or ingestion fails before any row is read.
//!
//! ## Units & Conventions
//! -----------------
//! - **`time`**: days, arbitrary zero-point. No ordering requirement.
//! - **`flux`**: relative brightness, nominally near 1.0.
//! - Empty cells and non-numeric artifacts deserialize to missing values and
//!   are removed by the [`LightCurve::from_raw`] sanitizer together with any
//!   explicit `NaN`/`inf` entries.
//!
//! ## Error semantics
//! -----------------
//! * Missing `time` or `flux` header →
//!   [`InvalidLightCurveFile`](crate::exoseeker_errors::ExoSeekerError::InvalidLightCurveFile).
//! * I/O failures → [`IoError`](crate::exoseeker_errors::ExoSeekerError::IoError).
//! * Malformed CSV rows → [`CsvError`](crate::exoseeker_errors::ExoSeekerError::CsvError).
//!
//! ## Example
//! -----------------
//! ```rust,no_run
//! use camino::Utf8Path;
//! use exoseeker::LightCurve;
//!
//! let lc = LightCurve::from_csv_path(Utf8Path::new("data/sample_lightcurve.csv")).unwrap();
//! println!("{} usable samples", lc.len());
//! ```
//!
//! ## See also
//! ------------
//! * [`LightCurve::from_raw`] – The sanitizer all ingestion paths go through.
//! * [`estimate_best_transit`](crate::transit_search::bls::estimate_best_transit) – Next step of the pipeline.
use std::fs::File;
use std::io;

use camino::Utf8Path;
use serde::Deserialize;

use crate::exoseeker_errors::ExoSeekerError;
use crate::lightcurve::LightCurve;

/// One CSV row projected onto the two named columns.
///
/// Absent or empty cells become `None` and are mapped to NaN so that the
/// shared sanitizer drops them.
#[derive(Debug, Deserialize)]
struct LightCurveRecord {
    time: Option<f64>,
    flux: Option<f64>,
}

impl LightCurve {
    /// Read a light curve from a CSV file on disk.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: UTF-8 path to a CSV file with `time` and `flux` header columns.
    ///
    /// Return
    /// ----------
    /// * A sanitized [`LightCurve`], or an [`ExoSeekerError`] describing the
    ///   I/O, header, or parse failure.
    ///
    /// See also
    /// ------------
    /// * [`LightCurve::from_csv_reader`] – Same contract over any reader.
    pub fn from_csv_path(path: &Utf8Path) -> Result<Self, ExoSeekerError> {
        let file = File::open(path.as_std_path())?;
        Self::from_csv_reader(file)
    }

    /// Read a light curve from any CSV byte source (e.g. an in-memory upload).
    ///
    /// The header row must name both a `time` and a `flux` column; additional
    /// columns are ignored. Rows whose projected values are missing or
    /// non-finite are dropped by the sanitizer, preserving the order of the
    /// surviving rows.
    ///
    /// Arguments
    /// -----------------
    /// * `reader`: any [`io::Read`] yielding CSV text with a header row.
    ///
    /// Return
    /// ----------
    /// * A sanitized [`LightCurve`], or an [`ExoSeekerError`].
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, ExoSeekerError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for required in ["time", "flux"] {
            if !headers.iter().any(|h| h == required) {
                return Err(ExoSeekerError::InvalidLightCurveFile(format!(
                    "missing required column '{required}' (found: {})",
                    headers.iter().collect::<Vec<_>>().join(", ")
                )));
            }
        }

        let mut time = Vec::new();
        let mut flux = Vec::new();
        for record in csv_reader.deserialize::<LightCurveRecord>() {
            let record = record?;
            time.push(record.time.unwrap_or(f64::NAN));
            flux.push(record.flux.unwrap_or(f64::NAN));
        }

        LightCurve::from_raw(&time, &flux)
    }
}

#[cfg(test)]
mod csv_reader_tests {
    use super::*;

    #[test]
    fn test_reads_two_columns_in_any_position() {
        let csv = "flux,time\n0.99,0.0\n1.01,0.5\n1.0,1.0\n";
        let lc = LightCurve::from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(lc.len(), 3);
        assert_eq!(lc.time(), &[0.0, 0.5, 1.0]);
        assert_eq!(lc.flux(), &[0.99, 1.01, 1.0]);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "time,flux,quality\n0.0,1.0,ok\n1.0,0.99,bad\n";
        let lc = LightCurve::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(lc.len(), 2);
    }

    #[test]
    fn test_missing_flux_column_is_rejected() {
        let csv = "time,brightness\n0.0,1.0\n";
        let err = LightCurve::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ExoSeekerError::InvalidLightCurveFile(_)));
    }

    #[test]
    fn test_empty_and_nan_cells_are_dropped() {
        let csv = "time,flux\n0.0,1.0\n1.0,\n2.0,NaN\n3.0,0.99\n";
        let lc = LightCurve::from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(lc.len(), 2);
        assert_eq!(lc.time(), &[0.0, 3.0]);
    }
}
