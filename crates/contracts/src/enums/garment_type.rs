use serde::{Deserialize, Serialize};

/// Garment types a uniform bundle is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentType {
    Shirt,
    Pants,
    Skirt,
}

impl GarmentType {
    pub fn code(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "shirt",
            GarmentType::Pants => "pants",
            GarmentType::Skirt => "skirt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GarmentType::Shirt => "Shirt",
            GarmentType::Pants => "Pants",
            GarmentType::Skirt => "Skirt",
        }
    }
}
