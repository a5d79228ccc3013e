//! Numbers arriving from the backend are not consistently typed: the same
//! field may hold a JSON number, a numeric string, or null. These helpers
//! coerce them the way the front-end always has, where anything unparsable
//! becomes NaN rather than an error.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern must compile")
});

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Lenient {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Lenient {
    pub(crate) fn coerce(value: Option<Lenient>) -> f64 {
        match value {
            Some(Lenient::Number(number)) => number,
            Some(Lenient::Text(text)) => parse_float(&text),
            Some(Lenient::Other(_)) | None => f64::NAN,
        }
    }
}

/// Reads the longest numeric prefix of `text` after leading whitespace,
/// so `"33.64,"` reads as `33.64`. NaN when there is no such prefix.
pub(crate) fn parse_float(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim_start())
        .and_then(|prefix| prefix.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Deserializes a number-like field into `f64`, with NaN for missing,
/// null or unparsable values.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Lenient>::deserialize(deserializer).map(Lenient::coerce)
}

/// As [`lenient_f64`], but yields `None` in place of NaN.
pub(crate) fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_f64(deserializer).map(|value| Some(value).filter(|v| !v.is_nan()))
}

/// Deserializes a text field, stringifying numbers and leaving anything
/// else empty.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    };

    Ok(text)
}

/// Deserializes a list of records, skipping any record which cannot be
/// read instead of failing the whole list. A null list is empty.
pub(crate) fn tolerant_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    let records = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!("Skipping unreadable record: {err}");
                None
            }
        })
        .collect();

    Ok(records)
}

/// Default for absent lenient fields.
pub(crate) fn nan() -> f64 {
    f64::NAN
}
