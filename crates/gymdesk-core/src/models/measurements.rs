use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Biological sex category. Selects the density regression coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sex {
    #[serde(alias = "masculino")]
    Male,
    #[serde(alias = "feminino")]
    Female,
}

/// The seven Jackson-Pollock skinfold sites, in millimeters.
///
/// Field names on the wire follow the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Skinfolds {
    pub triceps: f64,
    pub subscapular: f64,
    #[serde(rename = "biceps")]
    pub bicep: f64,
    #[serde(rename = "axilarMedia")]
    pub mid_axillary: f64,
    #[serde(rename = "suprailiaca")]
    pub suprailiac: f64,
    pub abdominal: f64,
    #[serde(rename = "coxa")]
    pub thigh: f64,
}

impl Skinfolds {
    /// Site names paired with readings, in protocol order.
    pub fn sites(&self) -> [(&'static str, f64); 7] {
        [
            ("triceps", self.triceps),
            ("subscapular", self.subscapular),
            ("biceps", self.bicep),
            ("axilarMedia", self.mid_axillary),
            ("suprailiaca", self.suprailiac),
            ("abdominal", self.abdominal),
            ("coxa", self.thigh),
        ]
    }

    /// Plain sum of the seven readings.
    pub fn sum(&self) -> f64 {
        self.triceps
            + self.subscapular
            + self.bicep
            + self.mid_axillary
            + self.suprailiac
            + self.abdominal
            + self.thigh
    }
}

/// Girth measurements in centimeters. Recorded for trend display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Circumferences {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub abdomen: Option<f64>,
    pub right_arm: Option<f64>,
    pub left_arm: Option<f64>,
    pub right_thigh: Option<f64>,
    pub left_thigh: Option<f64>,
    pub right_calf: Option<f64>,
    pub left_calf: Option<f64>,
}

/// Derived body-composition metrics. Stored as a snapshot on the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BodyComposition {
    /// Sum of the seven skinfolds (mm).
    pub sum_skinfolds: f64,
    /// Estimated body density (g/cm³), unrounded.
    pub body_density: f64,
    /// Body fat percentage, one decimal.
    pub fat_percent: f64,
    /// Fat mass (kg), one decimal.
    pub fat_mass: f64,
    /// Lean mass (kg), one decimal.
    pub lean_mass: f64,
    /// Body mass index (kg/m²), one decimal.
    pub bmi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skinfolds_use_form_field_names() {
        let json = r#"{
            "triceps": 10, "subscapular": 12, "biceps": 5, "axilarMedia": 9,
            "suprailiaca": 14, "abdominal": 20, "coxa": 15
        }"#;
        let folds: Skinfolds = serde_json::from_str(json).unwrap();
        assert_eq!(folds.bicep, 5.0);
        assert_eq!(folds.mid_axillary, 9.0);
        assert_eq!(folds.thigh, 15.0);
        assert_eq!(folds.sum(), 85.0);
    }

    #[test]
    fn sex_accepts_exact_form_spellings() {
        let sex: Sex = serde_json::from_str("\"feminino\"").unwrap();
        assert_eq!(sex, Sex::Female);
        assert_eq!(serde_json::to_string(&sex).unwrap(), "\"female\"");
        assert_eq!(serde_json::from_str::<Sex>("\"masculino\"").unwrap(), Sex::Male);
        assert!(serde_json::from_str::<Sex>("\"other\"").is_err());
        // Spellings are exact; the form only ever sends lowercase values.
        assert!(serde_json::from_str::<Sex>("\"Male\"").is_err());
    }

    #[test]
    fn circumferences_default_when_absent() {
        let c: Circumferences = serde_json::from_str(r#"{"waist": 82.5}"#).unwrap();
        assert_eq!(c.waist, Some(82.5));
        assert_eq!(c.hip, None);
    }
}
