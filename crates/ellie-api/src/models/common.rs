//! Shared model types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A JSON field the API documents as a string but may also send as `null`.
///
/// Timestamps such as `date` and `start` arrive as a string, as `null`, or not
/// at all. Anything else is kept verbatim instead of being dropped, so JSON
/// output can show exactly what the server sent.
///
/// # Examples
///
/// ```
/// use ellie_api_rs::models::LenientString;
///
/// let text: LenientString = serde_json::from_str(r#""2026-01-25""#).unwrap();
/// assert_eq!(text.as_str(), Some("2026-01-25"));
///
/// let null: LenientString = serde_json::from_str("null").unwrap();
/// assert!(null.is_absent());
///
/// let number: LenientString = serde_json::from_str("1737763200").unwrap();
/// assert_eq!(number.as_str(), None);
/// assert!(!number.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LenientString {
    /// Field missing or `null`.
    #[default]
    Absent,
    /// Field sent as a JSON string.
    Text(String),
    /// Field sent as some other JSON value.
    Unrecognized(Value),
}

impl LenientString {
    /// Returns the string value, if the field arrived as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LenientString::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if the field was missing or `null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, LenientString::Absent)
    }
}

impl From<String> for LenientString {
    fn from(value: String) -> Self {
        LenientString::Text(value)
    }
}

impl From<&str> for LenientString {
    fn from(value: &str) -> Self {
        LenientString::Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for LenientString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => LenientString::Absent,
            Value::String(s) => LenientString::Text(s),
            other => LenientString::Unrecognized(other),
        })
    }
}

impl Serialize for LenientString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LenientString::Absent => serializer.serialize_none(),
            LenientString::Text(s) => serializer.serialize_str(s),
            LenientString::Unrecognized(value) => value.serialize(serializer),
        }
    }
}

/// Deserializes an explicit JSON `null` as the type's default value.
///
/// Pair with `#[serde(default)]` so a missing key and a `null` read the same.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
