use serde::{Deserialize, Serialize};

/// Gender a garment is cut for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Code used in bundle keys and by the REST backend
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Human readable label used in error messages and grid headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Boys",
            Gender::Female => "Girls",
        }
    }
}
