//! Lenient serde helpers
//!
//! The backend serialises DECIMAL columns as strings and sometimes emits
//! room numbers and branch ids as plain numbers. These helpers accept both
//! shapes so the typed models stay strict everywhere else.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::Str(s) => s,
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
        }
    }

    fn into_amount<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid amount: {s:?}"))),
            Self::Int(i) => Ok(i as f64),
            Self::Float(f) => Ok(f),
        }
    }
}

/// String field that may arrive as a JSON number
pub fn de_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

/// Optional string field that may arrive as a JSON number
pub fn de_opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(StringOrNumber::into_string))
}

/// Monetary amount as number or numeric string
pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_amount()
}

/// Optional monetary amount; `null`, absent and blank strings become `None`
pub fn de_opt_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => v.into_amount().map(Some),
    }
}
