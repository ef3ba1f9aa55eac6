//! Album record shapes
//!
//! Two shapes of the same entity cross the HTTP boundary:
//! - [`NewAlbum`]: create-request shape (no id, the store assigns it)
//! - [`Album`]: response shape (id rendered as text)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fixed-point price with two fractional digits, held as integer cents
///
/// Persisted as an exact integer so that `19.99` never drifts to
/// `19.990000001` on its way through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Build a price from a whole number of cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Build a price from a decimal value, rounding to two fractional digits
    ///
    /// Returns `None` for NaN, infinities, and values outside the i64 cent range.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Decimal value for the wire; shortest float form has at most two decimals
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // f64 visitor accepts JSON integers and floats, rejects strings and bools
        let value = f64::deserialize(deserializer)?;
        Price::from_decimal(value)
            .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {}", value)))
    }
}

/// Create-request shape: POST /api/v1/album body
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: Price,
}

/// Response shape: one stored album
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Album {
    /// Store-assigned identifier, rendered as text
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_keeps_two_decimals() {
        let price: Price = serde_json::from_value(json!(19.99)).unwrap();
        assert_eq!(price.cents(), 1999);
        assert_eq!(serde_json::to_string(&price).unwrap(), "19.99");

        let price: Price = serde_json::from_value(json!(56.99)).unwrap();
        assert_eq!(price.cents(), 5699);
        assert_eq!(serde_json::to_string(&price).unwrap(), "56.99");
    }

    #[test]
    fn test_price_integer_input() {
        let price: Price = serde_json::from_value(json!(20)).unwrap();
        assert_eq!(price.cents(), 2000);
        assert_eq!(price.to_string(), "20.00");
    }

    #[test]
    fn test_price_rounds_extra_digits() {
        let price = Price::from_decimal(17.999).unwrap();
        assert_eq!(price.cents(), 1800);
        assert_eq!(Price::from_decimal(f64::NAN), None);
    }

    #[test]
    fn test_price_rejects_non_numeric() {
        assert!(serde_json::from_value::<Price>(json!("19.99")).is_err());
        assert!(serde_json::from_value::<Price>(json!(true)).is_err());
    }

    #[test]
    fn test_price_display_negative() {
        assert_eq!(Price::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn test_new_album_requires_price() {
        let result = serde_json::from_value::<NewAlbum>(json!({
            "title": "Blue Train",
            "artist": "John Coltrane"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_album_serializes_id_as_text() {
        let album = Album {
            id: "7".to_string(),
            title: "Jeru".to_string(),
            artist: "Gerry Mulligan".to_string(),
            price: Price::from_cents(1799),
        };
        let value = serde_json::to_value(&album).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["price"], json!(17.99));
    }
}
