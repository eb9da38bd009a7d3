use crate::core_types::material::Material;
use serde::{Deserialize, Serialize};

/// A wall or roof assembly, described either by its stacked material layers
/// or by a single lumped thermal resistance
///
/// The two kinds are mutually exclusive: a layered construction carries no
/// resistance of its own, and a resistive construction carries no layers.
/// Layer order is significant - the checksum weights every property by its
/// 1-based layer index, so permuting layers changes the fingerprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Construction {
    /// Ordered material layers, outermost first
    Layered(Vec<Material>),
    /// No-mass assembly lumped into one thermal resistance in m²·K/W
    Resistive(f64),
}

impl Construction {
    /// Number of scalar fields of the assembly itself (beyond its layers)
    /// that contribute to the checksum.
    pub const CHECKSUM_PROPERTY_COUNT: usize = 1;

    /// Build a construction from ordered material layers
    pub fn from_materials(materials: Vec<Material>) -> Self {
        Construction::Layered(materials)
    }

    /// Build a construction from a lumped thermal resistance
    pub fn from_resistance(resistance: f64) -> Self {
        Construction::Resistive(resistance)
    }

    /// The material layers, outermost first. Empty for a resistive assembly.
    pub fn materials(&self) -> &[Material] {
        match self {
            Construction::Layered(materials) => materials,
            Construction::Resistive(_) => &[],
        }
    }

    /// The lumped thermal resistance. Zero for a layered assembly.
    pub fn resistance(&self) -> f64 {
        match self {
            Construction::Layered(_) => 0.0,
            Construction::Resistive(resistance) => *resistance,
        }
    }

    /// Number of material layers
    pub fn layer_count(&self) -> usize {
        self.materials().len()
    }
}
