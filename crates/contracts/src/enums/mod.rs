pub mod garment_type;
pub mod gender;
pub mod uniform_category;

pub use garment_type::GarmentType;
pub use gender::Gender;
pub use uniform_category::UniformCategory;
