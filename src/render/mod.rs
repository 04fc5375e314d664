//! Intensity profile rendering
//!
//! - [`Strip`]: false color image of the diffraction pattern, one column per sample
//! - [`Plot`]: intensity versus position chart (`plot` feature)

use std::path::PathBuf;

use image::ImageError;

mod strip;
pub use strip::{Colormap, Strip};
#[cfg(feature = "plot")]
mod plot;
#[cfg(feature = "plot")]
pub use plot::Plot;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot render an image with no pixel")]
    Empty,
    #[error("failed to save the image to {1:?}")]
    Save(#[source] ImageError, PathBuf),
    #[error("failed to draw the plot {1:?}: {0}")]
    Draw(String, PathBuf),
}
