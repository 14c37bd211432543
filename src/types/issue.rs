//! Issue domain types

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::EnumString;

/// Wrapper type for issue numbers providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Issue numbers start at 1; zero is rejected
    pub fn new(number: u64) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for IssueNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = u64::deserialize(deserializer)?;
        Self::new(number).ok_or_else(|| serde::de::Error::custom("issue number must be positive"))
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of an issue as reported by the REST API.
///
/// Unknown literals are kept verbatim in [`IssueState::Other`] and written
/// back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    #[strum(default)]
    Other(String),
}

impl IssueState {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Other(literal) => literal,
        }
    }

    /// Parses a state literal; never fails because unknown literals pass through.
    pub fn parse(literal: &str) -> Self {
        Self::from_str(literal).unwrap_or_else(|_| Self::Other(literal.to_string()))
    }
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IssueState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IssueState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        Ok(Self::parse(&literal))
    }
}

/// Client-facing projection of one issue: `title`, `number`, `state`, `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub title: String,
    pub number: IssueNumber,
    pub state: IssueState,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_state_parse() {
        assert_eq!(IssueState::parse("open"), IssueState::Open);
        assert_eq!(IssueState::parse("closed"), IssueState::Closed);
        assert_eq!(
            IssueState::parse("locked"),
            IssueState::Other("locked".to_string())
        );
        // Matching is exact; other casings pass through untouched
        assert_eq!(
            IssueState::parse("OPEN"),
            IssueState::Other("OPEN".to_string())
        );
    }

    #[test]
    fn test_issue_state_serializes_as_literal() {
        assert_eq!(
            serde_json::to_string(&IssueState::Closed).unwrap(),
            "\"closed\""
        );
        assert_eq!(
            serde_json::to_string(&IssueState::Other("draft".to_string())).unwrap(),
            "\"draft\""
        );
    }

    #[test]
    fn test_issue_number_must_be_positive() {
        assert!(IssueNumber::new(0).is_none());
        assert_eq!(IssueNumber::new(7).map(|n| n.value()), Some(7));
    }

    #[test]
    fn test_issue_number_deserialization_rejects_zero() {
        assert!(serde_json::from_str::<IssueNumber>("0").is_err());
        assert_eq!(
            serde_json::from_str::<IssueNumber>("3").unwrap().value(),
            3
        );

        let zero_summary = serde_json::json!({
            "title": "t",
            "number": 0,
            "state": "open",
            "url": "https://github.com/a/b/issues/0"
        });
        assert!(serde_json::from_value::<IssueSummary>(zero_summary).is_err());
    }

    #[test]
    fn test_summary_wire_shape() {
        let summary = IssueSummary {
            title: "Crash on start".to_string(),
            number: IssueNumber(12),
            state: IssueState::Open,
            url: "https://github.com/a/b/issues/12".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({
                "title": "Crash on start",
                "number": 12,
                "state": "open",
                "url": "https://github.com/a/b/issues/12"
            })
        );
    }
}
