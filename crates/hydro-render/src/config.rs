//! Start-up configuration handed to the window by the binary.

use std::path::PathBuf;

use hydro_core::{ForceScale, PlateParams};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Values the input fields start with.
    pub initial: PlateParams,
    /// Force arrow normalization.
    pub force_scale: ForceScale,
    /// Pixel-density factor for the diagram's paddings, strokes and fonts.
    pub scale: f32,
    /// Directory PNG exports are written to.
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial: PlateParams {
                rho: 1000.0,
                height: 2.0,
                area: 1.0,
                ..PlateParams::default()
            },
            force_scale: ForceScale::default(),
            scale: 1.0,
            export_dir: PathBuf::from("."),
        }
    }
}
