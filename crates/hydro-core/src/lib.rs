pub mod constants;
pub mod format;
pub mod input;
pub mod layout;
pub mod physics;
pub mod render;
pub mod schedule;

pub use layout::{Layout, Surface, TextMeasure};
pub use render::{render, ForceScale, Frame, Readouts, Scene, Shape};

// ---------------------------------------------------------------------------
// Shared interface types — the front end and the pipeline both build on these
// ---------------------------------------------------------------------------

/// Immutable input record for one render of the plate diagram.
///
/// The front end owns the record and hands a fresh copy to [`render`] on
/// every trigger; nothing in the pipeline keeps it around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateParams {
    /// Fluid density in kg/m³.
    pub rho: f64,
    /// Gravitational acceleration in m/s².
    pub g: f64,
    /// Plate height in metres (top edge at the free surface).
    pub height: f64,
    /// Plate area in m².
    pub area: f64,
    /// Number of pressure samples along the plate.
    pub steps: u32,
}

impl Default for PlateParams {
    fn default() -> Self {
        Self {
            rho: 0.0,
            g: constants::STANDARD_GRAVITY,
            height: 0.0,
            area: 0.0,
            steps: constants::DEFAULT_STEPS,
        }
    }
}

/// Derived hydrostatic quantities — consumed by the layout, the scene and
/// the text readouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateResult {
    /// Pressure at the free surface (Pa).
    pub surface_pressure: f64,
    /// Absolute pressure at the bottom edge of the plate (Pa).
    pub base_pressure: f64,
    /// Depth of the plate centroid (m).
    pub centroid_depth: f64,
    /// Second moment of area about the centroidal horizontal axis (m⁴).
    pub second_moment: f64,
    /// Resultant hydrostatic force on one face (N).
    pub force: f64,
    /// Depth of the center of pressure (m).
    pub center_of_pressure: f64,
}

/// Run the physics for one input record.
pub fn compute(params: &PlateParams) -> PlateResult {
    let model = physics::PhysicsModel::new(params);
    let result = PlateResult {
        surface_pressure: model.pressure_at(0.0),
        base_pressure: model.base_pressure(),
        centroid_depth: model.centroid_depth(),
        second_moment: model.second_moment(),
        force: model.resultant_force(),
        center_of_pressure: model.center_of_pressure(),
    };
    tracing::debug!(
        base_pressure = result.base_pressure,
        force = result.force,
        center_of_pressure = result.center_of_pressure,
        "computed plate loads"
    );
    result
}
