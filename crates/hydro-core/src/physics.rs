use crate::constants::{gauge_pressure, ATMOSPHERIC_PRESSURE};
use crate::PlateParams;

/// Hydrostatics of a vertical rectangular plate whose top edge sits at the
/// free surface.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsModel {
    /// Fluid density in kg/m³.
    pub rho: f64,
    /// Gravitational acceleration in m/s².
    pub g: f64,
    /// Plate height in metres.
    pub height: f64,
    /// Plate area in m².
    pub area: f64,
}

impl PhysicsModel {
    pub fn new(params: &PlateParams) -> Self {
        Self {
            rho: params.rho,
            g: params.g,
            height: params.height,
            area: params.area,
        }
    }

    /// Absolute pressure at `depth` metres. Only meaningful for depth ≥ 0.
    pub fn pressure_at(&self, depth: f64) -> f64 {
        ATMOSPHERIC_PRESSURE + gauge_pressure(self.rho, self.g, depth)
    }

    /// Pressure at the bottom edge of the plate.
    pub fn base_pressure(&self) -> f64 {
        self.pressure_at(self.height)
    }

    /// Centroid depth hc = h/2.
    pub fn centroid_depth(&self) -> f64 {
        self.height / 2.0
    }

    /// I_xx,c = A·h²/12 for a rectangle of height h and area A.
    pub fn second_moment(&self) -> f64 {
        self.area * self.height.powi(2) / 12.0
    }

    /// Resultant force F = ρ·g·hc·A (pressure at the centroid times area,
    /// gauge only).
    pub fn resultant_force(&self) -> f64 {
        gauge_pressure(self.rho, self.g, self.centroid_depth()) * self.area
    }

    /// Center-of-pressure depth yp = hc + I_xx,c / (hc·A).
    ///
    /// Falls back to hc for a degenerate plate (h ≤ 0 or A ≤ 0), so the
    /// result stays finite.
    pub fn center_of_pressure(&self) -> f64 {
        let hc = self.centroid_depth();
        if self.height <= 0.0 || self.area <= 0.0 || hc <= 0.0 {
            return hc;
        }
        hc + self.second_moment() / (hc * self.area)
    }
}
