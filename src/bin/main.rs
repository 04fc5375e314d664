use std::path::PathBuf;

use nslit::{Colormap, Config, IntensityProfile, Plot, Strip};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "nslit", about = "N-slit Fraunhofer diffraction pattern")]
struct Opt {
    /// Number of slits [1-10]
    #[structopt(short = "n", long, default_value = "2")]
    slits: u32,
    /// Slit width [micron]
    #[structopt(short = "a", long, default_value = "10")]
    width: f64,
    /// Slit period [micron]
    #[structopt(short = "d", long, default_value = "50")]
    period: f64,
    /// Wavelength, or central wavelength of quasi-monochromatic light [nm]
    #[structopt(short = "l", long, default_value = "500")]
    wavelength: f64,
    /// Quasi-monochromatic light
    #[structopt(short, long)]
    quasi: bool,
    /// Spectral full width of quasi-monochromatic light [nm]
    #[structopt(long, default_value = "10")]
    bandwidth: f64,
    /// Number of wavelengths averaged over the spectral band
    #[structopt(short = "m", long, default_value = "100")]
    samples: usize,
    /// Slits to screen distance [m]
    #[structopt(short = "D", long, default_value = "1")]
    distance: f64,
    /// Screen first position [m]
    #[structopt(long, default_value = "-0.05", allow_hyphen_values = true)]
    x_min: f64,
    /// Screen last position [m]
    #[structopt(long, default_value = "0.05", allow_hyphen_values = true)]
    x_max: f64,
    /// Number of screen positions
    #[structopt(short = "p", long, default_value = "1000")]
    points: usize,
    /// Intensity strip image
    #[structopt(long, default_value = "intensity_distribution.png")]
    image: PathBuf,
    /// Intensity strip image height [pixel]
    #[structopt(long, default_value = "100")]
    height: u32,
    /// Intensity strip colormap: blue-red, cubehelix, viridis or inferno
    #[structopt(long, default_value = "blue-red")]
    colormap: Colormap,
    /// Intensity plot, PNG or SVG
    #[structopt(long, default_value = "intensity_plot.png")]
    plot: PathBuf,
    /// Saves the intensity profile to a CSV file
    #[structopt(long)]
    csv: Option<PathBuf>,
}
impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        let config = Config::default()
            .slit_count(opt.slits)
            .slit_width(opt.width * 1e-6)
            .slit_period(opt.period * 1e-6)
            .screen_distance(opt.distance)
            .positions(opt.x_min, opt.x_max, opt.points);
        if opt.quasi {
            config.quasi_monochromatic(opt.wavelength * 1e-9, opt.bandwidth * 1e-9, opt.samples)
        } else {
            config.monochromatic(opt.wavelength * 1e-9)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    log::debug!("{:?}", opt);

    let config = Config::from(&opt);
    let profile = IntensityProfile::sample(&config)?;
    profile.summary();

    Strip::default()
        .height(opt.height)
        .colormap(opt.colormap)
        .save(&profile, &opt.image)?;
    Plot::new()
        .title(config.title())
        .save(&profile, &opt.plot)?;
    if let Some(path) = &opt.csv {
        profile.to_csv(path)?;
        log::info!("intensity profile saved to {:?}", path);
    }

    println!("🖼️  Intensity strip saved as {:?}", opt.image);
    println!("📈 Intensity plot saved as {:?}", opt.plot);
    Ok(())
}
