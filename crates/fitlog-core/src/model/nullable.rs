//! Serde adapter for numeric fields that older data may hold as `null`
//!
//! Browser-era entries store an empty numeric input as `null` (JSON has no
//! NaN), so a missing value and an explicit `null` both read as the default.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`
///
/// Pair with `#[serde(default)]` so a missing field reads the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Map NaN and the infinities to 0 so the value survives a JSON round trip
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
        #[serde(default, deserialize_with = "null_as_default")]
        value: f64,
    }

    #[test]
    fn test_null_and_missing_read_as_default() {
        let sample: Sample = serde_json::from_value(json!({ "count": null })).unwrap();
        assert_eq!(sample.count, 0);
        assert_eq!(sample.value, 0.0);
    }

    #[test]
    fn test_present_values_are_kept() {
        let sample: Sample = serde_json::from_value(json!({ "count": 3, "value": 2.5 })).unwrap();
        assert_eq!(sample.count, 3);
        assert_eq!(sample.value, 2.5);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(4.5), 4.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }
}
