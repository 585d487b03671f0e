use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExoSeekerError {
    #[error("Not enough finite (time, flux) pairs for a transit search: {n_points} (need at least 2)")]
    InsufficientData { n_points: usize },

    #[error("Invalid BLS parameter: {0}")]
    InvalidBlsParameter(String),

    #[error("Light-curve buffers differ in length: {n_time} time values vs {n_flux} flux values")]
    LightCurveLengthMismatch { n_time: usize, n_flux: usize },

    #[error("Invalid light-curve file: {0}")]
    InvalidLightCurveFile(String),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Gaussian noise generation failed: {0:?}")]
    NoiseInjectionError(rand_distr::NormalError),
}

impl From<rand_distr::NormalError> for ExoSeekerError {
    fn from(err: rand_distr::NormalError) -> Self {
        ExoSeekerError::NoiseInjectionError(err)
    }
}

impl PartialEq for ExoSeekerError {
    fn eq(&self, other: &Self) -> bool {
        use ExoSeekerError::*;
        match (self, other) {
            (InsufficientData { n_points: a }, InsufficientData { n_points: b }) => a == b,
            (InvalidBlsParameter(a), InvalidBlsParameter(b)) => a == b,
            (
                LightCurveLengthMismatch {
                    n_time: a,
                    n_flux: b,
                },
                LightCurveLengthMismatch {
                    n_time: c,
                    n_flux: d,
                },
            ) => a == c && b == d,
            (InvalidLightCurveFile(a), InvalidLightCurveFile(b)) => a == b,

            // Wrapped external errors are not comparable: equality on variant only
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (NoiseInjectionError(a), NoiseInjectionError(b)) => a == b,

            _ => false,
        }
    }
}
