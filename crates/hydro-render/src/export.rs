// PNG export of the canvas screenshot.

use std::path::{Path, PathBuf};

use egui::ColorImage;
use thiserror::Error;

/// File name the diagram is saved under.
pub const EXPORT_FILE: &str = "simulator_hydrostatic.png";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("screenshot is empty")]
    Empty,

    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },

    #[error("cannot create export directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Image(#[from] image::ImageError),
}

/// Write `image` as `<dir>/simulator_hydrostatic.png`, returning the path.
pub fn save_png(image: &ColorImage, dir: &Path) -> Result<PathBuf, ExportError> {
    let [width, height] = image.size;
    if width == 0 || height == 0 {
        return Err(ExportError::Empty);
    }
    let (width, height) = (width as u32, height as u32);

    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let bytes: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect();
    let buffer = image::RgbaImage::from_raw(width, height, bytes)
        .ok_or(ExportError::BufferSize { width, height })?;

    let path = dir.join(EXPORT_FILE);
    buffer.save(&path)?;
    tracing::info!(path = %path.display(), width, height, "exported diagram");
    Ok(path)
}
