use serde::{Deserialize, Serialize};

/// A homogeneous material layer with the thermal properties that feed the
/// construction checksum
///
/// All three properties are non-negative real values. A `Material` has no
/// identity beyond its field values and is never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    pub conductivity: f64,  // W/(m·K)
    pub density: f64,       // kg/m³
    pub specific_heat: f64, // J/(kg·K)
}

impl Material {
    /// Number of fields of this struct that contribute to the checksum.
    /// Must match the number of values pushed per layer by the builder.
    pub const CHECKSUM_PROPERTY_COUNT: usize = 3;

    /// Create a material from raw property values
    pub fn new(conductivity: f64, density: f64, specific_heat: f64) -> Self {
        Material {
            conductivity,
            density,
            specific_heat,
        }
    }

    /// Poured concrete - high thermal mass
    pub fn concrete() -> Self {
        Material {
            conductivity: 1.4,
            density: 2300.0,
            specific_heat: 880.0,
        }
    }

    /// Gypsum plasterboard - standard interior lining
    pub fn gypsum_board() -> Self {
        Material {
            conductivity: 0.16,
            density: 950.0,
            specific_heat: 840.0,
        }
    }

    /// Fiberglass batt insulation - low conductivity, near-zero mass
    pub fn fiberglass_batt() -> Self {
        Material {
            conductivity: 0.04,
            density: 12.0,
            specific_heat: 840.0,
        }
    }

    /// Common clay brick
    pub fn brick() -> Self {
        Material {
            conductivity: 0.89,
            density: 1920.0,
            specific_heat: 790.0,
        }
    }

    /// Volumetric heat capacity in J/(m³·K)
    pub fn volumetric_heat_capacity(&self) -> f64 {
        self.density * self.specific_heat
    }

    /// Thermal diffusivity in m²/s
    ///
    /// Returns 0.0 for a zero-mass material rather than dividing by zero.
    pub fn thermal_diffusivity(&self) -> f64 {
        let capacity = self.volumetric_heat_capacity();
        if capacity <= 0.0 {
            return 0.0;
        }
        self.conductivity / capacity
    }
}
