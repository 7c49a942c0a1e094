//! Which synchronizer failures are recovered locally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A synchronizer operation that talks to the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    SetAvailability,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Load => write!(f, "load"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
            Operation::SetAvailability => write!(f, "set availability"),
        }
    }
}

/// How remote failures surface to the caller.
///
/// A recovered failure is logged, leaves the collection untouched and
/// yields `Ok(None)`; an unrecovered one is returned as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Load and delete propagate; create, update and availability changes recover.
    #[default]
    Mixed,
    /// Every failure propagates.
    Propagate,
    /// Every failure is recovered.
    Recover,
}

impl ErrorPolicy {
    pub fn recovers(self, operation: Operation) -> bool {
        match self {
            ErrorPolicy::Propagate => false,
            ErrorPolicy::Recover => true,
            ErrorPolicy::Mixed => matches!(
                operation,
                Operation::Create | Operation::Update | Operation::SetAvailability
            ),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Mixed => write!(f, "mixed"),
            ErrorPolicy::Propagate => write!(f, "propagate"),
            ErrorPolicy::Recover => write!(f, "recover"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mixed" => Ok(ErrorPolicy::Mixed),
            "propagate" => Ok(ErrorPolicy::Propagate),
            "recover" => Ok(ErrorPolicy::Recover),
            other => Err(format!(
                "Invalid error policy: '{}'. Valid values: mixed, propagate, recover",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_matches_dashboard_behavior() {
        let policy = ErrorPolicy::default();
        assert_eq!(policy, ErrorPolicy::Mixed);
        assert!(!policy.recovers(Operation::Load));
        assert!(policy.recovers(Operation::Create));
        assert!(policy.recovers(Operation::Update));
        assert!(!policy.recovers(Operation::Delete));
        assert!(policy.recovers(Operation::SetAvailability));
    }

    #[test]
    fn test_uniform_policies() {
        for op in [
            Operation::Load,
            Operation::Create,
            Operation::Update,
            Operation::Delete,
            Operation::SetAvailability,
        ] {
            assert!(!ErrorPolicy::Propagate.recovers(op));
            assert!(ErrorPolicy::Recover.recovers(op));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mixed".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Mixed));
        assert_eq!(" Propagate ".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Propagate));
        assert_eq!("RECOVER".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Recover));
        assert!("ignore".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ErrorPolicy::Propagate).unwrap();
        assert_eq!(json, "\"propagate\"");
        let parsed: ErrorPolicy = serde_json::from_str("\"recover\"").unwrap();
        assert_eq!(parsed, ErrorPolicy::Recover);
    }
}
