//! gymdesk-composition
//!
//! Body-composition estimation. Pure arithmetic with no I/O.
//! Implements the Jackson-Pollock 7-site skinfold equation with Siri's
//! density-to-fat conversion, plus the age and rounding rules the assessment
//! form depends on.

pub mod age;
pub mod density;
pub mod error;
pub mod input;
pub mod rounding;
pub mod siri;
pub mod trend;

use gymdesk_core::models::measurements::BodyComposition;

use density::DensityCoefficients;
use error::CompositionError;
use input::CompositionInput;
use rounding::round1;

/// Estimate body composition from validated measurements.
///
/// Deterministic: the same input always yields the same output, bit for bit.
/// Fat percentage, fat mass, lean mass and BMI are rounded to one decimal;
/// density is returned unrounded.
pub fn estimate(input: &CompositionInput) -> Result<BodyComposition, CompositionError> {
    input.validate()?;

    let sum_skinfolds = input.skinfolds.sum();
    let body_density =
        DensityCoefficients::for_sex(input.sex).body_density(sum_skinfolds, input.age_years);
    if body_density <= 0.0 {
        return Err(CompositionError::NonPositiveDensity(body_density));
    }

    let fat_percent = round1(siri::fat_percent(body_density));
    let fat_mass = round1(input.body_mass_kg * fat_percent / 100.0);
    let lean_mass = round1(input.body_mass_kg - fat_mass);

    let height_m = input.height_cm / 100.0;
    let bmi = round1(input.body_mass_kg / height_m.powi(2));

    Ok(BodyComposition {
        sum_skinfolds,
        body_density,
        fat_percent,
        fat_mass,
        lean_mass,
        bmi,
    })
}
