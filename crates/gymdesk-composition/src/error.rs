use thiserror::Error;

/// Invalid estimator input. Raised before any arithmetic runs, so a
/// degenerate measurement never produces a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    #[error("sex must be selected (male or female)")]
    MissingSex,

    #[error("body mass must be a positive number of kilograms, got {0}")]
    InvalidBodyMass(f64),

    #[error("height must be a positive number of centimeters, got {0}")]
    InvalidHeight(f64),

    #[error("skinfold '{site}' must be zero or more millimeters, got {value}")]
    InvalidSkinfold { site: &'static str, value: f64 },

    #[error("birth date {birth_date} is after the assessment date {assessed_on}")]
    BirthDateAfterAssessment {
        birth_date: jiff::civil::Date,
        assessed_on: jiff::civil::Date,
    },

    #[error("estimated body density {0} is not positive; check the measurements")]
    NonPositiveDensity(f64),
}
