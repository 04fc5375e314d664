/*!
# N-slit Fraunhofer diffraction

Intensity pattern of light diffracted by `N` parallel slits, seen on a distant screen.

The intensity is the product of the single slit envelope `(sin β/β)²` and of the
grating factor `(sin Nα/sin α)²`, see [`compute_intensity`].
A quasi-monochromatic source is modeled as the incoherent, equally weighted,
sum of monochromatic sources spread over its spectral band.

## Usage

```rust,no_run
use nslit::{Config, IntensityProfile, Strip};

let config = Config::default()
    .slit_count(3)
    .quasi_monochromatic(500e-9, 10e-9, 100);
let profile = IntensityProfile::sample(&config)?;
Strip::default().save(&profile, "intensity_distribution.png")?;
# Ok::<(), nslit::Error>(())
```
*/

pub mod config;
pub mod diffraction;
mod error;
pub mod grid;
pub mod illumination;
pub mod profile;
pub mod render;

pub use config::{Config, ConfigError, MAX_SLIT_COUNT};
pub use diffraction::{compute_intensity, SlitGeometry};
pub use error::Error;
pub use grid::PositionGrid;
pub use illumination::Illumination;
pub use profile::{IntensityProfile, ProfileError};
#[cfg(feature = "plot")]
pub use render::Plot;
pub use render::{Colormap, RenderError, Strip};

pub type Result<T> = std::result::Result<T, Error>;
