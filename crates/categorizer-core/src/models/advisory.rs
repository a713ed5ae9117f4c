use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a user-visible advisory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(anyhow::anyhow!("Invalid severity: {}", s)),
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Dismissible message raised when a user action cannot be honored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub severity: Severity,
    /// Machine-readable code of the violated constraint
    pub code: &'static str,
    pub message: String,
    /// What the user can do about it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<&'static str>,
}

impl Advisory {
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            suggested_action: None,
        }
    }

    pub fn with_suggested_action(mut self, action: Option<&'static str>) -> Self {
        self.suggested_action = action;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_round_trips_through_strings() {
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(Severity::Error.to_string(), "error");
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn advisory_serializes_lowercase_severity() {
        let advisory = Advisory::new(Severity::Info, "NOT_SUBMITTABLE", "Select a file");
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["severity"], "info");
        assert_eq!(json["code"], "NOT_SUBMITTABLE");
        assert!(json.get("suggested_action").is_none());

        let advisory = advisory.with_suggested_action(Some("Choose a file"));
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["suggested_action"], "Choose a file");
    }
}
