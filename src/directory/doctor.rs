/// Doctor records as served by the directory endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Directory identifier of a doctor.
///
/// Serialized as a number; read from either a number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DoctorId(pub u32);

impl<'de> Deserialize<'de> for DoctorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u32),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(DoctorId(id)),
            RawId::Text(text) => text.trim().parse().map(DoctorId).map_err(|_| {
                serde::de::Error::custom(format!("doctor id is not a number: {:?}", text))
            }),
        }
    }
}

impl std::fmt::Display for DoctorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable doctor. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub title: String,
    pub experience_years: u32,
    pub fee: f64,
    pub currency: String,
    pub image: String,
}

impl Doctor {
    /// Fee with its currency code, e.g. "USD 40"
    pub fn price_label(&self) -> String {
        format!("{} {}", self.currency, format_fee(self.fee))
    }

    /// Experience line shown on the doctor card
    pub fn experience_label(&self) -> String {
        format!("{}+ years", self.experience_years)
    }
}

/// Whole fees print without decimals, anything else with two.
pub fn format_fee(fee: f64) -> String {
    if fee.is_finite() && fee.fract() == 0.0 {
        format!("{:.0}", fee)
    } else {
        format!("{:.2}", fee)
    }
}
