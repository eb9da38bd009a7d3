//! Construction checksum engine
//!
//! Flattens a construction's numeric fields into weighted checksum inputs,
//! scales them to fixed-point integers, and sums them over a 64-bit register
//! with the bit-plane adder. The weighting makes the fingerprint depend on
//! which field a value came from and which layer it occupies, so reordering
//! value-equal layers changes the checksum.

pub mod bit_adder;

pub use bit_adder::{fixed_point_round, sum_as_bits};

use crate::core_types::{Construction, Material};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use tracing::debug;

// Prime weights per field, so that reversed or shuffled layer orders are
// unlikely to sum to the same register value
pub const CONDUCTIVITY_WEIGHT: f64 = 7.0;
pub const DENSITY_WEIGHT: f64 = 13.0;
pub const SPECIFIC_HEAT_WEIGHT: f64 = 29.0;
pub const RESISTANCE_WEIGHT: f64 = 59.0;
/// Multiplied by the 1-based layer index of each material
pub const LAYER_WEIGHT: f64 = 17.0;

/// Decimal fixed-point precision: properties keep nine fractional digits
pub const CHECKSUM_PRECISION: f64 = 1e9;

/// Register width in bits; matches the bit width of the `f64` values being
/// scaled
pub const REGISTER_WIDTH: u32 = u64::BITS;

/// A fixed-width binary fingerprint of a construction
///
/// Always exactly [`REGISTER_WIDTH`] characters of `'0'`/`'1'`, most
/// significant bit first. Derefs to `str` for direct comparison and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Checksum(String);

impl Checksum {
    /// The checksum as a bit string
    pub fn as_bits(&self) -> &str {
        &self.0
    }

    /// Consume the checksum, returning the owned bit string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Checksum {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the checksum of a construction
///
/// Every material at 1-based layer `L` contributes three inputs:
/// `conductivity * 7 * L * 17`, `density * 13 * L * 17` and
/// `specific_heat * 29 * L * 17`. The assembly's lumped resistance
/// contributes `resistance * 59` (zero for layered assemblies). Each input
/// is scaled to a fixed-point integer at [`CHECKSUM_PRECISION`] and all of
/// them are summed over a [`REGISTER_WIDTH`]-bit register.
///
/// Pure and deterministic: equal-valued constructions always produce the
/// identical bit string. A construction with no layers and zero resistance
/// yields the all-zero register.
pub fn checksum(construction: &Construction) -> Checksum {
    let materials = construction.materials();

    let mut inputs: Vec<f64> = Vec::with_capacity(
        materials.len() * Material::CHECKSUM_PROPERTY_COUNT
            + Construction::CHECKSUM_PROPERTY_COUNT,
    );
    for (index, material) in materials.iter().enumerate() {
        let layer = (index + 1) as f64;
        inputs.push(material.conductivity * CONDUCTIVITY_WEIGHT * layer * LAYER_WEIGHT);
        inputs.push(material.density * DENSITY_WEIGHT * layer * LAYER_WEIGHT);
        inputs.push(material.specific_heat * SPECIFIC_HEAT_WEIGHT * layer * LAYER_WEIGHT);
    }
    inputs.push(construction.resistance() * RESISTANCE_WEIGHT);

    debug!(
        layers = materials.len(),
        inputs = inputs.len(),
        "computing construction checksum"
    );

    let scaled: Vec<u64> = inputs
        .iter()
        .map(|&value| fixed_point_round(value, CHECKSUM_PRECISION))
        .collect();

    Checksum(sum_as_bits(&scaled, REGISTER_WIDTH))
}
