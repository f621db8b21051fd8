//! Types and rules shared by the uniform ordering front-end and its services

pub mod domain;
pub mod enums;
pub mod shared;
