pub mod catalog;
pub mod constants;
pub mod exoseeker_errors;
pub mod lightcurve;
pub mod transit_search;
pub mod value_parser;

pub use crate::constants::{Day, Phase, RelativeFlux};
pub use crate::exoseeker_errors::ExoSeekerError;
pub use crate::lightcurve::LightCurve;
pub use crate::transit_search::bls::{bls_search, estimate_best_transit};
pub use crate::transit_search::bls_result::TransitCandidate;
pub use crate::transit_search::phase_fold::{phase_fold, PhaseFoldedCurve};
pub use crate::transit_search::BlsParams;
