pub mod a001_design_delivery;
pub mod a002_size_catalog;
pub mod a003_school_order;
