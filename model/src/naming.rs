//! FILENAME: model/src/naming.rs
//! PURPOSE: Dimension naming modes for table output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How categories and columns are named when a cube is written to a table:
/// by display label or by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    Label,
    Id,
}

impl Default for Naming {
    fn default() -> Self {
        Naming::Label
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("naming must be \"label\" or \"id\", got \"{0}\"")]
pub struct InvalidNamingMode(pub String);

impl FromStr for Naming {
    type Err = InvalidNamingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" => Ok(Naming::Label),
            "id" => Ok(Naming::Id),
            other => Err(InvalidNamingMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("label".parse::<Naming>(), Ok(Naming::Label));
        assert_eq!("id".parse::<Naming>(), Ok(Naming::Id));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "labels".parse::<Naming>().unwrap_err();
        assert_eq!(err, InvalidNamingMode("labels".to_string()));
    }
}
