//! Order creation form
//!
//! - view_model.rs: form state signals and commands
//! - quantity_grid.rs: per-bundle size grid
//! - view.rs: page component

mod quantity_grid;
mod view;
mod view_model;

pub use view::OrderCreate;
pub use view_model::{parse_quantity_input, OrderCreateVm};
