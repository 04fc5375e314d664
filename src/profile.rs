//! Normalized intensity profile
//!
//! [`IntensityProfile::sample`] evaluates the diffraction kernel at every screen
//! position of a [`Config`], averaging over the spectral band for a
//! quasi-monochromatic source, and normalizes the result by its maximum.

use std::{path::Path, time::Instant};

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    illumination::{spectral_average, Illumination},
    Config, Error,
};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("the intensity maximum is {0}, the profile cannot be normalized")]
    DegenerateMaximum(f64),
    #[error("the intensity sample #{0} is {1}")]
    NonFinite(usize, f64),
    #[error("found {0} positions for {1} intensity samples")]
    Length(usize, usize),
    #[error("failed to write the profile to CSV")]
    Csv(#[from] csv::Error),
    #[error("failed to flush the CSV file")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct Record {
    #[serde(rename = "x [m]")]
    x: f64,
    #[serde(rename = "intensity")]
    intensity: f64,
}

/// Divides `values` by their maximum and returns the maximum
pub fn normalize(values: &mut [f64]) -> Result<f64, ProfileError> {
    if let Some((i, &value)) = values.iter().find_position(|value| !value.is_finite()) {
        return Err(ProfileError::NonFinite(i, value));
    }
    let peak = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(peak > 0.0 && peak.is_finite()) {
        return Err(ProfileError::DegenerateMaximum(peak));
    }
    values.iter_mut().for_each(|value| *value /= peak);
    Ok(peak)
}

/// Intensity normalized to 1 versus screen position
#[derive(Debug, Clone, Default)]
pub struct IntensityProfile {
    positions: Vec<f64>,
    intensity: Vec<f64>,
    peak: f64,
}
impl IntensityProfile {
    /// Creates a profile from raw intensities, normalizing them by their maximum
    pub fn new(positions: Vec<f64>, mut intensity: Vec<f64>) -> Result<Self, ProfileError> {
        if positions.len() != intensity.len() {
            return Err(ProfileError::Length(positions.len(), intensity.len()));
        }
        let peak = normalize(&mut intensity)?;
        Ok(Self {
            positions,
            intensity,
            peak,
        })
    }
    /// Samples the diffraction pattern described by `config`
    pub fn sample(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        let Config {
            geometry,
            illumination,
            grid,
        } = *config;
        let positions = grid.positions();
        let wavelengths = illumination.wavelengths();
        log::info!(
            "Sampling {} slit{} over {} positions with {}...",
            geometry.slit_count,
            if geometry.slit_count > 1 { "s" } else { "" },
            positions.len(),
            illumination
        );
        log::debug!("wavelengths: {:?}", wavelengths);
        let now = Instant::now();

        let intensity: Vec<f64> = positions
            .par_iter()
            .map(|&x| match illumination {
                Illumination::Monochromatic { wavelength } => geometry.intensity(x, wavelength),
                Illumination::QuasiMonochromatic { .. } => {
                    spectral_average(&geometry, x, &wavelengths)
                }
            })
            .collect();
        let this = Self::new(positions, intensity)?;

        log::info!("... sampled in {}ms", now.elapsed().as_millis());
        Ok(this)
    }
    pub fn len(&self) -> usize {
        self.intensity.len()
    }
    pub fn is_empty(&self) -> bool {
        self.intensity.is_empty()
    }
    /// Screen positions [m]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }
    /// Normalized intensity
    pub fn intensity(&self) -> &[f64] {
        &self.intensity
    }
    /// Raw intensity maximum used for normalization
    pub fn peak(&self) -> f64 {
        self.peak
    }
    /// Iterator over the (position,intensity) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions
            .iter()
            .cloned()
            .zip(self.intensity.iter().cloned())
    }
    /// Index of the maximum intensity sample
    pub fn argmax(&self) -> Option<usize> {
        self.intensity.iter().position_max_by(|a, b| a.total_cmp(b))
    }
    /// Indices of the local maxima with an intensity larger than `threshold`
    pub fn local_maxima(&self, threshold: f64) -> Vec<usize> {
        self.intensity
            .iter()
            .tuple_windows()
            .enumerate()
            .filter(|&(_, (left, center, right))| {
                center > left && center >= right && *center > threshold
            })
            .map(|(i, _)| i + 1)
            .collect()
    }
    /// Writes the profile to a CSV file
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), ProfileError> {
        let mut wtr = csv::Writer::from_path(path)?;
        for (x, intensity) in self.iter() {
            wtr.serialize(Record { x, intensity })?;
        }
        wtr.flush()?;
        Ok(())
    }
    pub fn summary(&self) {
        let (x_min, x_max) = self
            .positions
            .iter()
            .cloned()
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or_default();
        println!("SUMMARY:");
        println!(" - # of samples: {}", self.len());
        println!(" - position range: [{:8.3}-{:8.3}]mm", x_min * 1e3, x_max * 1e3);
        println!(" - raw intensity maximum: {:.6}", self.peak);
        println!(
            " - # of maxima above 1%: {}",
            self.local_maxima(1e-2).len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SlitGeometry;

    #[test]
    fn double_slit() {
        let config = Config::default();
        let profile = IntensityProfile::sample(&config).unwrap();
        assert_eq!(profile.len(), 1000);

        let max = profile.intensity().iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = profile.intensity().iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(max, 1.0);
        assert!(min >= 0.0);

        // the grid has no sample at x=0, the maximum is on either side
        let i_max = profile.argmax().unwrap();
        assert!(i_max == 499 || i_max == 500, "maximum at {i_max}");
        assert!(profile.positions()[i_max].abs() < 1e-4);

        let intensity = profile.intensity();
        for i in 0..500 {
            assert!((intensity[i] - intensity[999 - i]).abs() < 1e-9);
        }

        // first grating order at λD/d = 1cm
        let order = config.geometry.order_position(1, 500e-9);
        let i_order = profile
            .positions()
            .iter()
            .position_min_by(|a, b| (*a - order).abs().total_cmp(&(*b - order).abs()))
            .unwrap();
        assert!(intensity[i_order] > 0.85, "I={}", intensity[i_order]);
        // the envelope slope pulls the fringe peak towards the center
        assert!(profile
            .local_maxima(0.5)
            .iter()
            .any(|&i| (i as isize - i_order as isize).abs() <= 3));
    }

    #[test]
    fn single_slit_envelope() {
        let config = Config::default().slit_count(1);
        let profile = IntensityProfile::sample(&config).unwrap();
        let mut envelope: Vec<f64> = profile
            .positions()
            .iter()
            .map(|&x| {
                let beta = std::f64::consts::PI * 10e-6 * x / 500e-9;
                (beta.sin() / beta).powi(2)
            })
            .collect();
        normalize(&mut envelope).unwrap();
        profile
            .intensity()
            .iter()
            .zip(&envelope)
            .for_each(|(a, b)| assert!((a - b).abs() < 1e-9));
    }

    #[test]
    fn zero_bandwidth() {
        let mono = IntensityProfile::sample(&Config::default().slit_count(4)).unwrap();
        let quasi = IntensityProfile::sample(
            &Config::default()
                .slit_count(4)
                .quasi_monochromatic(500e-9, 0.0, 100),
        )
        .unwrap();
        mono.intensity()
            .iter()
            .zip(quasi.intensity())
            .for_each(|(a, b)| assert!((a - b).abs() < 1e-9));
        assert!((mono.peak() - quasi.peak()).abs() < 1e-9);
    }

    #[test]
    fn quasi_monochromatic_blurs_high_orders() {
        let config = Config::default().slit_count(3);
        let mono = IntensityProfile::sample(&config).unwrap();
        let quasi =
            IntensityProfile::sample(&config.quasi_monochromatic(500e-9, 100e-9, 50)).unwrap();
        let min_of = |p: &IntensityProfile| {
            p.iter()
                .filter(|(x, _)| (0.03..0.045).contains(x))
                .map(|(_, i)| i)
                .fold(f64::INFINITY, f64::min)
        };
        assert!(min_of(&quasi) > min_of(&mono));
        assert_eq!(
            quasi.intensity().iter().cloned().fold(0f64, f64::max),
            1.0
        );
    }

    #[test]
    fn degenerate_maximum() {
        let mut zeros = vec![0f64; 10];
        assert!(matches!(
            normalize(&mut zeros),
            Err(ProfileError::DegenerateMaximum(_))
        ));
        // the envelope underflows far away from the slits
        let config = Config::default().positions(1e200, 1e200, 1);
        assert!(matches!(
            IntensityProfile::sample(&config),
            Err(Error::Profile(ProfileError::DegenerateMaximum(_)))
        ));
    }

    #[test]
    fn non_finite_samples() {
        let mut values = vec![1.0, f64::NAN, 0.5];
        assert!(matches!(
            normalize(&mut values),
            Err(ProfileError::NonFinite(1, _))
        ));
        let mut values = vec![f64::INFINITY, 1.0];
        assert!(matches!(
            normalize(&mut values),
            Err(ProfileError::NonFinite(0, _))
        ));
    }

    #[test]
    fn far_away_positions() {
        let profile =
            IntensityProfile::sample(&Config::default().positions(0.0, 1e303, 2)).unwrap();
        assert_eq!(profile.intensity(), &[1.0, 0.0]);
        assert_eq!(profile.peak(), 4.0);
    }

    #[test]
    fn invalid_parameters() {
        let config = Config {
            geometry: SlitGeometry {
                slit_count: 12,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            IntensityProfile::sample(&config),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn length_mismatch() {
        assert!(matches!(
            IntensityProfile::new(vec![0.0, 1.0], vec![1.0]),
            Err(ProfileError::Length(2, 1))
        ));
    }

    #[test]
    fn csv_export() {
        let profile =
            IntensityProfile::sample(&Config::default().positions(-0.01, 0.01, 21)).unwrap();
        let path =
            std::env::temp_dir().join(format!("nslit-profile-{}.csv", std::process::id()));
        profile.to_csv(&path).unwrap();
        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(|h| h.to_string()).collect();
        assert_eq!(headers, vec!["x [m]", "intensity"]);
        let records: Vec<_> = rdr.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 21);
        let x: f64 = records[10][0].parse().unwrap();
        let i: f64 = records[10][1].parse().unwrap();
        assert!(x.abs() < 1e-12);
        assert_eq!(i, 1.0);
        std::fs::remove_file(path).unwrap();
    }
}
