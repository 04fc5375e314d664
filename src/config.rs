//! Run configuration
//!
//! A [`Config`] gathers the slits geometry, the light source and the screen
//! positions of a single run. Its default reproduces a double slit of 10μm
//! width and 50μm period, lit at 500nm, seen on a screen 1m away.
//!
//! ```
//! use nslit::Config;
//!
//! let config = Config::default()
//!     .slit_count(5)
//!     .quasi_monochromatic(600e-9, 20e-9, 50)
//!     .positions(-0.02, 0.02, 500);
//! assert!(config.validate().is_ok());
//! ```

use crate::{diffraction::SlitGeometry, grid::PositionGrid, illumination::Illumination};

/// Largest number of slits
pub const MAX_SLIT_COUNT: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the number of slits must be within [1,10], found {0}")]
    SlitCount(u32),
    #[error("the {name} must be positive and finite, found {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("the spectral width must be positive or zero and finite, found {0}")]
    Bandwidth(f64),
    #[error("the spectral band [{0}, {1}] includes non-positive wavelengths")]
    Band(f64, f64),
    #[error("the product of the wavelength {0} by the screen distance {1} is not a normal number")]
    Scale(f64, f64),
    #[error("the number of {0} must be at least 1")]
    Empty(&'static str),
    #[error("invalid position range [{0}, {1}]")]
    Range(f64, f64),
}
type Result<T> = std::result::Result<T, ConfigError>;

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// N-slit diffraction run parameters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    pub geometry: SlitGeometry,
    pub illumination: Illumination,
    pub grid: PositionGrid,
}
impl Config {
    pub fn new(geometry: SlitGeometry, illumination: Illumination, grid: PositionGrid) -> Self {
        Self {
            geometry,
            illumination,
            grid,
        }
    }
    /// Sets the number of slits
    pub fn slit_count(self, slit_count: u32) -> Self {
        Self {
            geometry: SlitGeometry {
                slit_count,
                ..self.geometry
            },
            ..self
        }
    }
    /// Sets the slit width [m]
    pub fn slit_width(self, slit_width: f64) -> Self {
        Self {
            geometry: SlitGeometry {
                slit_width,
                ..self.geometry
            },
            ..self
        }
    }
    /// Sets the slit period [m]
    pub fn slit_period(self, slit_period: f64) -> Self {
        Self {
            geometry: SlitGeometry {
                slit_period,
                ..self.geometry
            },
            ..self
        }
    }
    /// Sets the slits to screen distance [m]
    pub fn screen_distance(self, screen_distance: f64) -> Self {
        Self {
            geometry: SlitGeometry {
                screen_distance,
                ..self.geometry
            },
            ..self
        }
    }
    /// Monochromatic light of `wavelength` [m]
    pub fn monochromatic(self, wavelength: f64) -> Self {
        Self {
            illumination: Illumination::Monochromatic { wavelength },
            ..self
        }
    }
    /// Quasi-monochromatic light centered on `wavelength` [m] with a spectral full width `bandwidth` [m]
    pub fn quasi_monochromatic(self, wavelength: f64, bandwidth: f64, samples: usize) -> Self {
        Self {
            illumination: Illumination::QuasiMonochromatic {
                wavelength,
                bandwidth,
                samples,
            },
            ..self
        }
    }
    /// Sets the screen positions [m]
    pub fn positions(self, x_min: f64, x_max: f64, num_points: usize) -> Self {
        Self {
            grid: PositionGrid::new(x_min, x_max, num_points),
            ..self
        }
    }
    /// Checks that the parameters describe a physical setup
    pub fn validate(&self) -> Result<()> {
        let SlitGeometry {
            slit_count,
            slit_width,
            slit_period,
            screen_distance,
        } = self.geometry;
        if !(1..=MAX_SLIT_COUNT).contains(&slit_count) {
            return Err(ConfigError::SlitCount(slit_count));
        }
        positive("slit width", slit_width)?;
        positive("slit period", slit_period)?;
        positive("screen distance", screen_distance)?;
        let shortest_wavelength = match self.illumination {
            Illumination::Monochromatic { wavelength } => {
                positive("wavelength", wavelength)?;
                wavelength
            }
            Illumination::QuasiMonochromatic {
                wavelength,
                bandwidth,
                samples,
            } => {
                positive("wavelength", wavelength)?;
                if !(bandwidth >= 0.0 && bandwidth.is_finite()) {
                    return Err(ConfigError::Bandwidth(bandwidth));
                }
                let band = (wavelength - 0.5 * bandwidth, wavelength + 0.5 * bandwidth);
                if band.0 <= 0.0 {
                    return Err(ConfigError::Band(band.0, band.1));
                }
                if samples < 1 {
                    return Err(ConfigError::Empty("wavelength samples"));
                }
                band.0
            }
        };
        if !(shortest_wavelength * screen_distance).is_normal() {
            return Err(ConfigError::Scale(shortest_wavelength, screen_distance));
        }
        let PositionGrid {
            x_min,
            x_max,
            num_points,
        } = self.grid;
        if num_points < 1 {
            return Err(ConfigError::Empty("positions"));
        }
        if !(x_min.is_finite() && x_max.is_finite()) || x_min > x_max {
            return Err(ConfigError::Range(x_min, x_max));
        }
        Ok(())
    }
    /// Plot title
    pub fn title(&self) -> String {
        let n = self.geometry.slit_count;
        format!(
            "Interference from {} slit{} (λ={} nm, D={} m)",
            n,
            if n > 1 { "s" } else { "" },
            (self.illumination.wavelength() * 1e10).round() / 10.,
            self.geometry.screen_distance
        )
    }
}
