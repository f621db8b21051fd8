pub mod aggregate;

pub use aggregate::{SizeCatalog, SizeEntry};
