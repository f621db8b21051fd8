use serde::{Deserialize, Serialize};

/// Uniform category: everyday wear or the physical education kit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniformCategory {
    Regular,
    PhysicalEducation,
}

impl UniformCategory {
    pub fn code(&self) -> &'static str {
        match self {
            UniformCategory::Regular => "regular",
            UniformCategory::PhysicalEducation => "physical_education",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UniformCategory::Regular => "Regular",
            UniformCategory::PhysicalEducation => "Physical Education",
        }
    }
}
