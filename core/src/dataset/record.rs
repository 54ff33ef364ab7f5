use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Binary launch result carried in the `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(value: u8) -> Option<Self> {
        match value {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn as_class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_class())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_class())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Outcome::from_class(value)
            .ok_or_else(|| serde::de::Error::custom(format!("class must be 0 or 1, got {value}")))
    }
}

/// One launch row as materialized by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_as_class_value() {
        let record = LaunchRecord::new("CCAFS LC-40", 525.0, Outcome::Success, "v1.0");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["outcome"], 1);

        let back: LaunchRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn outcome_rejects_values_outside_class_domain() {
        assert_eq!(Outcome::from_class(2), None);
        assert!(serde_json::from_str::<Outcome>("3").is_err());
    }
}
