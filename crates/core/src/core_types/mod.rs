//! Core types and utilities

pub mod construction;
pub mod material;

pub use construction::Construction;
pub use material::Material;
