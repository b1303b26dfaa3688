// ============================================================
// Layer 3 — Abalone Record Domain Type
// ============================================================
// One raw measurement row as it appears in the JSON and CSV
// input files: a categorical sex, seven physical measurements
// and the ring count that serves as the regression label.
//
// Every field is read by NAME through serde, never by column
// position, so a reordered file still lands in the right slots.
// The aliases cover the header spellings found in the wild:
//   sex / Sex
//   whole_weight / whole-weight / Whole_weight
//   rings / Rings / Class_number_of_rings

use serde::{Deserialize, Serialize};

// ─── Sex ──────────────────────────────────────────────────────────────────────
/// The categorical "sex" field of an abalone specimen.
///
/// Parsing is total: any label that is not F, M or I is kept
/// verbatim in `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Female,
    Male,
    Infant,
    Other(String),
}

impl Sex {
    /// Numeric code fed to the network.
    ///
    /// Female → 0.0, Male → 1.0, anything else → 0.5
    pub fn code(&self) -> f32 {
        encode_sex(self.label())
    }

    /// The single-letter label used in the data files
    pub fn label(&self) -> &str {
        match self {
            Sex::Female   => "F",
            Sex::Male     => "M",
            Sex::Infant   => "I",
            Sex::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for Sex {
    fn from(label: &str) -> Self {
        match label.trim() {
            "F" => Sex::Female,
            "M" => Sex::Male,
            "I" => Sex::Infant,
            other => Sex::Other(other.to_string()),
        }
    }
}

impl From<String> for Sex {
    fn from(label: String) -> Self {
        Sex::from(label.as_str())
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.label().to_string()
    }
}

/// Encode a raw sex label straight to its numeric code.
///
/// `"F"` → 0, `"M"` → 1, anything else → 0.5
pub fn encode_sex(label: &str) -> f32 {
    match label.trim() {
        "F" => 0.0,
        "M" => 1.0,
        _   => 0.5,
    }
}

// ─── AbaloneRecord ────────────────────────────────────────────────────────────
/// A single abalone measurement row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbaloneRecord {
    #[serde(alias = "Sex")]
    pub sex: Sex,

    /// Longest shell measurement (mm / 200)
    #[serde(alias = "Length")]
    pub length: f32,

    /// Perpendicular to length
    #[serde(alias = "Diameter")]
    pub diameter: f32,

    /// With meat in shell
    #[serde(alias = "Height")]
    pub height: f32,

    /// Whole abalone
    #[serde(alias = "whole-weight", alias = "Whole_weight")]
    pub whole_weight: f32,

    /// Weight of meat
    #[serde(alias = "shucked-weight", alias = "Shucked_weight")]
    pub shucked_weight: f32,

    /// Gut weight after bleeding
    #[serde(alias = "viscera-weight", alias = "Viscera_weight")]
    pub viscera_weight: f32,

    /// After being dried
    #[serde(alias = "shell-weight", alias = "Shell_weight")]
    pub shell_weight: f32,

    /// Number of rings, the age proxy we regress on
    #[serde(alias = "Rings", alias = "Class_number_of_rings")]
    pub rings: u32,
}

impl AbaloneRecord {
    /// Number of input features produced by `features()`
    pub const FEATURE_COUNT: usize = 8;

    /// The feature vector in canonical order, with sex already encoded:
    /// [sex, length, diameter, height, whole, shucked, viscera, shell]
    pub fn features(&self) -> [f32; Self::FEATURE_COUNT] {
        [
            self.sex.code(),
            self.length,
            self.diameter,
            self.height,
            self.whole_weight,
            self.shucked_weight,
            self.viscera_weight,
            self.shell_weight,
        ]
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn record(sex: &str, rings: u32) -> AbaloneRecord {
        AbaloneRecord {
            sex:            Sex::from(sex),
            length:         0.5,
            diameter:       0.4,
            height:         0.1,
            whole_weight:   0.6,
            shucked_weight: 0.25,
            viscera_weight: 0.14,
            shell_weight:   0.21,
            rings,
        }
    }

    #[test]
    fn test_encode_known_labels() {
        assert_eq!(encode_sex("F"), 0.0);
        assert_eq!(encode_sex("M"), 1.0);
        assert_eq!(encode_sex("I"), 0.5);
    }

    #[test]
    fn test_encode_unknown_label_defaults_to_half() {
        assert_eq!(encode_sex("X"), 0.5);
        assert_eq!(encode_sex(""), 0.5);
        assert_eq!(encode_sex("female"), 0.5);
    }

    #[test]
    fn test_encode_is_idempotent() {
        for label in ["F", "M", "I", "?"] {
            assert_eq!(encode_sex(label), encode_sex(label));
        }
    }

    #[test]
    fn test_unknown_label_is_kept_verbatim() {
        let sex = Sex::from("U");
        assert_eq!(sex, Sex::Other("U".to_string()));
        assert_eq!(sex.label(), "U");
    }

    #[test]
    fn test_features_put_sex_code_first() {
        let r = record("M", 10);
        let f = r.features();
        assert_eq!(f.len(), AbaloneRecord::FEATURE_COUNT);
        assert_eq!(f[0], 1.0);
        assert_eq!(f[1], 0.5);
        assert_eq!(f[7], 0.21);
    }

    #[test]
    fn test_deserialize_from_json_with_capitalised_keys() {
        let json = r#"{
            "Sex": "F", "Length": 0.53, "Diameter": 0.42, "Height": 0.135,
            "Whole_weight": 0.677, "Shucked_weight": 0.2565,
            "Viscera_weight": 0.1415, "Shell_weight": 0.21,
            "Class_number_of_rings": 9
        }"#;
        let r: AbaloneRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.sex, Sex::Female);
        assert_eq!(r.rings, 9);
        assert!((r.whole_weight - 0.677).abs() < 1e-6);
    }
}
