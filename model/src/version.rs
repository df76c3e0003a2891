//! FILENAME: model/src/version.rs
//! PURPOSE: The two supported JSON-stat wire versions.
//! CONTEXT: 2.0 is a flat envelope (version/class/id/size at the top level);
//! 1.3 wraps the content under "dataset<N>" keys with id/size nested inside
//! `dimension`. 1.3 is kept for backward compatibility only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    V1_3,
    V2_0,
}

impl Default for Version {
    fn default() -> Self {
        Version::V2_0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V1_3 => write!(f, "1.3"),
            Version::V2_0 => write!(f, "2.0"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported JSON-stat version \"{0}\"")]
pub struct UnsupportedVersion(pub String);

impl FromStr for Version {
    type Err = UnsupportedVersion;

    /// Any numeric version >= 2.0 selects the 2.0 envelope, anything lower
    /// the 1.3 envelope; non-numeric strings are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numeric: f64 = s
            .parse()
            .map_err(|_| UnsupportedVersion(s.to_string()))?;
        if numeric >= 2.0 {
            Ok(Version::V2_0)
        } else {
            Ok(Version::V1_3)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("2.0".parse::<Version>(), Ok(Version::V2_0));
        assert_eq!("2.1".parse::<Version>(), Ok(Version::V2_0));
        assert_eq!("1.3".parse::<Version>(), Ok(Version::V1_3));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("latest".parse::<Version>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::V2_0.to_string(), "2.0");
        assert_eq!(Version::V1_3.to_string(), "1.3");
    }
}
