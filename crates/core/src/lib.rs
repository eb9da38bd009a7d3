//! Construction Checksum Core Library
//!
//! Deterministic fixed-width binary fingerprints for layered building
//! constructions. Each numeric property of a construction is scaled to a
//! fixed-point integer and all of them are summed over a fixed 64-bit
//! register with an explicit bit-plane carry-propagating adder.
//!
//! ## Components
//!
//! - Value types for material layers and construction assemblies
//! - A column-wise bit-register adder that performs the summation without
//!   native wide addition
//! - A prime-weighted checksum builder that makes the fingerprint sensitive
//!   to both field identity and layer order

// Core types and utilities
pub mod core_types;

// Checksum engine (bit adder + weighted builder)
pub mod checksum;

// Re-export core types
pub use core_types::{Construction, Material};

// Re-export checksum engine
pub use checksum::{checksum, fixed_point_round, sum_as_bits, Checksum};
pub use checksum::{
    CHECKSUM_PRECISION, CONDUCTIVITY_WEIGHT, DENSITY_WEIGHT, LAYER_WEIGHT, REGISTER_WIDTH,
    RESISTANCE_WEIGHT, SPECIFIC_HEAT_WEIGHT,
};
