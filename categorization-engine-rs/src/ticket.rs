// categorization-engine-rs/src/ticket.rs
// Domain types for support tickets and action plans

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SeverityParseError;

/// The urgency (priority) of a support ticket.
///
/// Parsed case-insensitively from the wire: `"HIGH"` and `"high"` produce
/// the same value. Serialized back as the lower-case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// All severity levels, most urgent first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Lower-case wire form of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Critical and high tickets take the urgent handling paths.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(SeverityParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The resolution path chosen for a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    /// Bugs, system failures, logic errors - needs an engineering fix
    AiCodePatch,
    /// Known procedural issues, user errors - handled by a Vibe script
    VibeWorkflow,
}

/// A support ticket as received from an upstream channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketInput {
    /// Source of the ticket
    pub channel: String,
    /// The urgency (priority) of the ticket
    pub severity: Severity,
    /// Brief description of the problem
    pub summary: String,
}

/// The action plan produced for a single ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    /// The chosen type of action
    pub decision: ActionType,
    /// Explanation for the decided type of action
    pub reasoning: String,
    /// Lightweight checklist of next actions, in execution order
    pub next_actions_checklist: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("low".parse::<Severity>().unwrap(), Severity::Low);
    }

    #[test]
    fn test_severity_rejects_unknown_levels() {
        let err = "urgent".parse::<Severity>().unwrap_err();
        assert_eq!(err, SeverityParseError("urgent".to_string()));
        assert!(err.to_string().contains("critical, high, medium, low"));
    }

    #[test]
    fn test_ticket_deserializes_with_mixed_case_severity() {
        let ticket: TicketInput = serde_json::from_str(
            r#"{"channel": "email", "severity": "MEDIUM", "summary": "statement question"}"#,
        )
        .unwrap();
        assert_eq!(ticket.severity, Severity::Medium);
    }

    #[test]
    fn test_decision_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_value(ActionType::AiCodePatch).unwrap(),
            serde_json::json!("AI_CODE_PATCH")
        );
        assert_eq!(
            serde_json::to_value(ActionType::VibeWorkflow).unwrap(),
            serde_json::json!("VIBE_WORKFLOW")
        );
    }
}
