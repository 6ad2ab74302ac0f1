use std::time::Duration;

/// Atmospheric pressure at the free surface (Pa).
pub const ATMOSPHERIC_PRESSURE: f64 = 101_325.0;

/// Standard gravity (m/s²), used when the gravity field is empty or invalid.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Number of pressure samples drawn along the plate when none is given.
pub const DEFAULT_STEPS: u32 = 30;

/// Upper bound on the sample count accepted from the input field.
pub const MAX_STEPS: u32 = 500;

/// Quiet period after the last edit before a debounced render fires.
pub const DEBOUNCE: Duration = Duration::from_millis(150);

/// Reference force for the fixed arrow normalization (N).
pub const FORCE_REFERENCE: f64 = 100_000.0;

/// Smallest drawing surface the layout works with (px).
pub const MIN_SURFACE_WIDTH: f32 = 600.0;
pub const MIN_SURFACE_HEIGHT: f32 = 300.0;

/// Gauge pressure ρ·g·d at `depth` metres below the free surface.
pub fn gauge_pressure(rho: f64, g: f64, depth: f64) -> f64 {
    rho * g * depth
}
