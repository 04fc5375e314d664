//! N-slit Fraunhofer diffraction kernel
//!
//! The far-field intensity of `N` slits of width `a` and period `d`, seen on a
//! screen at distance `D`, is the product of the single slit envelope and of the
//! grating factor:
//!
//! ```text
//! I(x) = (sin β / β)² (sin Nα / sin α)²
//! β = π a x / (λ D)
//! α = π d x / (λ D)
//! ```

use std::f64::consts::PI;

/// Phase below which `sin(u)/u` and `sin(Nu)/sin(u)` are replaced by their limits
pub const SINGULARITY_THRESHOLD: f64 = 1e-6;

/// Single slit diffraction amplitude `sin(β)/β`
///
/// An overflowed phase yields the `|β| → ∞` limit, 0.
pub fn sinc(beta: f64) -> f64 {
    if beta.abs() < SINGULARITY_THRESHOLD {
        1.0
    } else if !beta.is_finite() {
        0.0
    } else {
        beta.sin() / beta
    }
}

/// Multiple slits interference factor `(sin(Nα)/sin(α))²`
///
/// The factor peaks at `N²` wherever `sin(α)` vanishes, i.e. at every grating
/// order `α = kπ`, and not only at the central maximum.
pub fn grating_factor(alpha: f64, n_slit: u32) -> f64 {
    let n = n_slit as f64;
    if alpha.abs() < SINGULARITY_THRESHOLD {
        return n * n;
    }
    let sin_alpha = alpha.sin();
    if sin_alpha.abs() < SINGULARITY_THRESHOLD {
        return n * n;
    }
    let ratio = (n * alpha).sin() / sin_alpha;
    ratio * ratio
}

/// Intensity at position `x` on the screen
///
/// * `x` - screen position
/// * `wavelength` - light wavelength λ
/// * `slit_width` - slit width `a`
/// * `slit_period` - slit period `d`
/// * `n_slit` - number of slits `N`
/// * `screen_distance` - slits to screen distance `D`
///
/// All lengths must share the same unit. The intensity is `N²` at `x=0` and
/// vanishes where the single slit envelope vanishes.
pub fn compute_intensity(
    x: f64,
    wavelength: f64,
    slit_width: f64,
    slit_period: f64,
    n_slit: u32,
    screen_distance: f64,
) -> f64 {
    let scale = PI * (x / wavelength / screen_distance);
    let beta = slit_width * scale;
    let alpha = slit_period * scale;
    let envelope = sinc(beta);
    if envelope == 0.0 {
        return 0.0;
    }
    envelope * envelope * grating_factor(alpha, n_slit)
}

/// Slits geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlitGeometry {
    /// number of slits
    pub slit_count: u32,
    /// slit width [m]
    pub slit_width: f64,
    /// slit period [m]
    pub slit_period: f64,
    /// slits to screen distance [m]
    pub screen_distance: f64,
}
impl Default for SlitGeometry {
    fn default() -> Self {
        Self {
            slit_count: 2,
            slit_width: 10e-6,
            slit_period: 50e-6,
            screen_distance: 1.0,
        }
    }
}
impl SlitGeometry {
    /// Intensity at position `x` [m] for the `wavelength` [m]
    pub fn intensity(&self, x: f64, wavelength: f64) -> f64 {
        compute_intensity(
            x,
            wavelength,
            self.slit_width,
            self.slit_period,
            self.slit_count,
            self.screen_distance,
        )
    }
    /// Screen position [m] of the grating order `k` for the `wavelength` [m]
    pub fn order_position(&self, k: i32, wavelength: f64) -> f64 {
        k as f64 * wavelength * self.screen_distance / self.slit_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const LAMBDA: f64 = 500e-9;

    #[test]
    fn central_maximum() {
        for n in 1..=10 {
            let geometry = SlitGeometry {
                slit_count: n,
                ..Default::default()
            };
            assert_eq!(geometry.intensity(0.0, LAMBDA), (n * n) as f64);
        }
    }

    #[test]
    fn non_negative_and_even() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let geometry = SlitGeometry {
                slit_count: rng.gen_range(1..=10),
                slit_width: rng.gen_range(1e-6..50e-6),
                slit_period: rng.gen_range(50e-6..200e-6),
                screen_distance: rng.gen_range(0.1..5.0),
            };
            let lambda = rng.gen_range(350e-9..800e-9);
            let x = rng.gen_range(-0.1..0.1);
            let i_pos = geometry.intensity(x, lambda);
            let i_neg = geometry.intensity(-x, lambda);
            assert!(i_pos >= 0.0, "negative intensity {i_pos} at x={x}");
            assert!(
                (i_pos - i_neg).abs() <= 1e-9 * i_pos.max(1.0),
                "I({x})={i_pos} != I(-x)={i_neg}"
            );
        }
    }

    #[test]
    fn single_slit_is_envelope() {
        let geometry = SlitGeometry {
            slit_count: 1,
            ..Default::default()
        };
        for k in 1..100 {
            let x = k as f64 * 5e-4;
            let beta = PI * geometry.slit_width * x / (LAMBDA * geometry.screen_distance);
            let envelope = (beta.sin() / beta).powi(2);
            assert!((geometry.intensity(x, LAMBDA) - envelope).abs() < 1e-12);
        }
    }

    #[test]
    fn grating_orders() {
        let geometry = SlitGeometry::default();
        let x = geometry.order_position(1, LAMBDA);
        let beta = PI * geometry.slit_width * x / (LAMBDA * geometry.screen_distance);
        let expected = 4.0 * (beta.sin() / beta).powi(2);
        assert!((geometry.intensity(x, LAMBDA) - expected).abs() < 1e-9);
        // half way between orders the two slits cancel out
        let x = 0.5 * geometry.order_position(1, LAMBDA);
        assert!(geometry.intensity(x, LAMBDA) < 1e-12);
    }

    #[test]
    fn secondary_singularity() {
        for n in 1..=10 {
            let alpha = 3.0 * PI;
            let value = grating_factor(alpha, n);
            assert!(value.is_finite());
            assert!((value - (n * n) as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn tiny_wavelength_and_distance() {
        assert_eq!(compute_intensity(0.0, 1e-200, 10e-6, 50e-6, 2, 1e-200), 4.0);
    }

    #[test]
    fn overflowed_phase() {
        let geometry = SlitGeometry::default();
        assert_eq!(geometry.intensity(1e303, LAMBDA), 0.0);
        assert_eq!(geometry.intensity(-f64::MAX, LAMBDA), 0.0);
        assert_eq!(sinc(f64::INFINITY), 0.0);
    }

    #[test]
    fn sinc_at_origin() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(-1e-7), 1.0);
        assert!((sinc(PI)).abs() < 1e-15);
    }
}
