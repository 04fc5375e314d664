use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use strum_macros::{Display, EnumIter, EnumString};

use super::RenderError;
use crate::IntensityProfile;

type Result<T> = std::result::Result<T, RenderError>;

/// Intensity to color mapping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Colormap {
    /// Linear interpolation from blue (0) to red (1), without green
    #[default]
    BlueRed,
    Cubehelix,
    Viridis,
    Inferno,
}
impl Colormap {
    /// RGB color of a normalized intensity
    pub fn rgb(&self, value: f64) -> [u8; 3] {
        let value = value.clamp(0.0, 1.0);
        let gradient = match self {
            Colormap::BlueRed => {
                return [(255.0 * value) as u8, 0, (255.0 * (1.0 - value)) as u8];
            }
            Colormap::Cubehelix => colorous::CUBEHELIX,
            Colormap::Viridis => colorous::VIRIDIS,
            Colormap::Inferno => colorous::INFERNO,
        };
        let color = gradient.eval_continuous(value);
        [color.r, color.g, color.b]
    }
}

/// False color image of an intensity profile
///
/// Each sample of the profile is a column of the image, all the rows are identical.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    height: u32,
    colormap: Colormap,
}
impl Default for Strip {
    fn default() -> Self {
        Self {
            height: 100,
            colormap: Colormap::default(),
        }
    }
}
impl Strip {
    /// Sets the image height in pixels
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
    pub fn colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }
    /// Renders the normalized `intensity` into an image of `intensity.len()` columns
    pub fn render(&self, intensity: &[f64]) -> Result<RgbImage> {
        if intensity.is_empty() || self.height == 0 {
            return Err(RenderError::Empty);
        }
        let colors: Vec<[u8; 3]> = intensity.iter().map(|&i| self.colormap.rgb(i)).collect();
        Ok(ImageBuffer::from_fn(
            colors.len() as u32,
            self.height,
            |x, _| Rgb(colors[x as usize]),
        ))
    }
    /// Saves the image of the `profile`, the format follows from the file extension
    pub fn save(&self, profile: &IntensityProfile, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.render(profile.intensity())?
            .save(path)
            .map_err(|e| RenderError::Save(e, path.to_path_buf()))?;
        log::info!("intensity strip saved to {:?}", path);
        Ok(())
    }
}
