use std::fmt;

use crate::{diffraction::SlitGeometry, grid::linspace};

/// Light source spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Illumination {
    /// Single wavelength [m]
    Monochromatic { wavelength: f64 },
    /// Flat spectrum of full width `bandwidth` [m] centered on `wavelength` [m],
    /// sampled with `samples` wavelengths
    QuasiMonochromatic {
        wavelength: f64,
        bandwidth: f64,
        samples: usize,
    },
}
impl Default for Illumination {
    fn default() -> Self {
        Illumination::Monochromatic {
            wavelength: 500e-9,
        }
    }
}
impl fmt::Display for Illumination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Illumination::Monochromatic { wavelength } => {
                write!(f, "monochromatic λ={:.1}nm", wavelength * 1e9)
            }
            Illumination::QuasiMonochromatic {
                wavelength,
                bandwidth,
                samples,
            } => write!(
                f,
                "quasi-monochromatic λ={:.1}nm, Δλ={:.1}nm ({} samples)",
                wavelength * 1e9,
                bandwidth * 1e9,
                samples
            ),
        }
    }
}
impl Illumination {
    /// Central wavelength [m]
    pub fn wavelength(&self) -> f64 {
        match *self {
            Illumination::Monochromatic { wavelength } => wavelength,
            Illumination::QuasiMonochromatic { wavelength, .. } => wavelength,
        }
    }
    /// Returns the wavelengths the kernel is evaluated at
    pub fn wavelengths(&self) -> Vec<f64> {
        match *self {
            Illumination::Monochromatic { wavelength } => vec![wavelength],
            Illumination::QuasiMonochromatic {
                wavelength,
                bandwidth,
                samples,
            } => linspace(
                wavelength - 0.5 * bandwidth,
                wavelength + 0.5 * bandwidth,
                samples,
            ),
        }
    }
}

/// Intensity at `x` averaged over a set of `wavelengths`
///
/// The spectral components are added incoherently with equal weights.
pub fn spectral_average(geometry: &SlitGeometry, x: f64, wavelengths: &[f64]) -> f64 {
    wavelengths
        .iter()
        .map(|&wavelength| geometry.intensity(x, wavelength))
        .sum::<f64>()
        / wavelengths.len() as f64
}
