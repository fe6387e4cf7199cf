//! Scan mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the scanner does with the duplicates it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Remove duplicates in place, keeping a backup (default).
    #[default]
    Fix,
    /// Only report duplicates; never touch a file.
    Report,
}

impl ScanMode {
    /// Whether files may be rewritten in this mode.
    pub fn mutates(self) -> bool {
        matches!(self, ScanMode::Fix)
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Fix => write!(f, "fix"),
            ScanMode::Report => write!(f, "report"),
        }
    }
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fix" => Ok(ScanMode::Fix),
            "report" => Ok(ScanMode::Report),
            _ => Err(format!("Unknown scan mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mode_parse() {
        assert_eq!("fix".parse::<ScanMode>().unwrap(), ScanMode::Fix);
        assert_eq!("REPORT".parse::<ScanMode>().unwrap(), ScanMode::Report);
        assert!("dry".parse::<ScanMode>().is_err());
    }

    #[test]
    fn test_scan_mode_mutates() {
        assert!(ScanMode::Fix.mutates());
        assert!(!ScanMode::Report.mutates());
        assert_eq!(ScanMode::default(), ScanMode::Fix);
    }
}
