//! Identifiers for vehicles and orders.

use std::fmt;

/// Identifier of a vehicle or an order.
///
/// Input records use either integers (`1`) or strings (`"A"`). The variant
/// is preserved so identifiers are written back in the form they were read.
///
/// # Examples
/// ```
/// use dronefleet_core::RecordId;
///
/// assert_eq!(RecordId::from(7_u64).to_string(), "7");
/// assert_eq!(RecordId::from("A").to_string(), "A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RecordId {
    /// Numeric identifier.
    Number(u64),
    /// Free-form textual identifier.
    Text(String),
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", RecordId::Number(1))]
    #[case("\"A\"", RecordId::Text("A".to_owned()))]
    fn deserialises_numbers_and_strings(#[case] json: &str, #[case] expected: RecordId) {
        let parsed: RecordId = serde_json::from_str(json).expect("valid identifier");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn serialises_in_input_form() {
        let ids = vec![RecordId::from(3_u64), RecordId::from("B")];
        let json = serde_json::to_string(&ids).expect("serialise identifiers");
        assert_eq!(json, r#"[3,"B"]"#);
    }
}
