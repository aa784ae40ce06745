//! The fixed set of departments reports are routed to

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organizational department a citizen report can be assigned to.
///
/// Declaration order is the tie-break order used by the classifier, and the
/// derived `Ord` follows it, so `BTreeMap<Department, _>` iterates in the same
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Logistics,
    Maintenance,
    Security,
    #[serde(rename = "IT Support")]
    ItSupport,
    #[serde(rename = "Human Resources")]
    HumanResources,
}

impl Department {
    /// Every department, in tie-break order
    pub const ALL: [Department; 5] = [
        Department::Logistics,
        Department::Maintenance,
        Department::Security,
        Department::ItSupport,
        Department::HumanResources,
    ];

    /// Number of departments
    pub const COUNT: usize = Self::ALL.len();

    /// Display name as stored on report records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logistics => "Logistics",
            Self::Maintenance => "Maintenance",
            Self::Security => "Security",
            Self::ItSupport => "IT Support",
            Self::HumanResources => "Human Resources",
        }
    }

    /// Position in [`Department::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = Error;

    /// Parse a display name, ignoring surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(Error::invalid_input("department must be selected"));
        }

        Self::ALL
            .into_iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::invalid_input(format!("unknown department '{}'", name)))
    }
}
