use serde::{Deserialize, Serialize};

use crate::domain::clamp_percent;

/// Raw stakeholder record as stored on a deal. `last_contact` stays a string
/// because upstream records occasionally carry malformed dates; parsing
/// happens at classification time with a conservative fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
    pub last_contact: String,
    pub progress: u8,
}

impl Stakeholder {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        last_contact: impl Into<String>,
        progress: u8,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            last_contact: last_contact.into(),
            progress: clamp_percent(progress),
        }
    }
}
