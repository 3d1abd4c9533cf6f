//! Domain entities produced by the converters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A country as listed by the TGS API.
///
/// Only the converters construct these from raw data, which guarantees that
/// `name` is trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
}

/// A sporting organization together with its current season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub season_id: i64,
    pub season_group_id: i64,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) season {} group {}",
            self.name, self.id, self.season_id, self.season_group_id
        )
    }
}
