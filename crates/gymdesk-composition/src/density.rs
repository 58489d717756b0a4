use gymdesk_core::models::measurements::Sex;

/// Quadratic regression coefficients of the Jackson-Pollock 7-site equation.
///
/// `density = intercept - linear*S + quadratic*S^2 - age*A`, with `S` the sum
/// of the seven skinfolds in mm and `A` the age in completed years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityCoefficients {
    pub intercept: f64,
    pub linear: f64,
    pub quadratic: f64,
    pub age: f64,
}

/// Jackson & Pollock (1978), men.
pub const MALE: DensityCoefficients = DensityCoefficients {
    intercept: 1.112,
    linear: 0.000_434_99,
    quadratic: 0.000_000_55,
    age: 0.000_288_26,
};

/// Jackson, Pollock & Ward (1980), women.
pub const FEMALE: DensityCoefficients = DensityCoefficients {
    intercept: 1.097,
    linear: 0.000_469_71,
    quadratic: 0.000_000_56,
    age: 0.000_128_28,
};

impl DensityCoefficients {
    pub fn for_sex(sex: Sex) -> &'static DensityCoefficients {
        match sex {
            Sex::Male => &MALE,
            Sex::Female => &FEMALE,
        }
    }

    /// Body density in g/cm³.
    pub fn body_density(&self, sum_skinfolds: f64, age_years: u32) -> f64 {
        self.intercept - self.linear * sum_skinfolds + self.quadratic * sum_skinfolds.powi(2)
            - self.age * f64::from(age_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_reference_density() {
        let density = DensityCoefficients::for_sex(Sex::Male).body_density(100.0, 30);
        assert!((density - 1.065_353_2).abs() < 1e-12, "{density}");
    }

    #[test]
    fn sexes_use_distinct_equations() {
        let male = DensityCoefficients::for_sex(Sex::Male).body_density(100.0, 30);
        let female = DensityCoefficients::for_sex(Sex::Female).body_density(100.0, 30);
        assert!((female - 1.051_780_6).abs() < 1e-12, "{female}");
        assert_ne!(male, female);
    }

    #[test]
    fn zero_sum_leaves_intercept_and_age_terms() {
        let density = DensityCoefficients::for_sex(Sex::Female).body_density(0.0, 0);
        assert_eq!(density, 1.097);
    }
}
