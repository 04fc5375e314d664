//! Slit count sweep
//!
//! Renders the intensity strip and the intensity plot for 1 to 10 slits

use std::{fs::create_dir_all, path::PathBuf, time::Instant};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use nslit::{Colormap, Config, IntensityProfile, Plot, Strip, MAX_SLIT_COUNT};
use rayon::prelude::*;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "slit-sweep", about = "N-slit diffraction patterns for 1 to 10 slits")]
struct Opt {
    /// Output directory
    #[structopt(short, long, default_value = "sweep")]
    output: PathBuf,
    /// Spectral full width of quasi-monochromatic light [nm], monochromatic light if absent
    #[structopt(long)]
    bandwidth: Option<f64>,
    /// Intensity strip colormap: blue-red, cubehelix, viridis or inferno
    #[structopt(long, default_value = "blue-red")]
    colormap: Colormap,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let base = match opt.bandwidth {
        Some(bandwidth) => Config::default().quasi_monochromatic(500e-9, bandwidth * 1e-9, 100),
        None => Config::default(),
    };
    create_dir_all(&opt.output)?;
    let strip = Strip::default().colormap(opt.colormap);

    let now = Instant::now();
    let pb = ProgressBar::new(MAX_SLIT_COUNT as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Rendering diffraction patterns");
    (1..=MAX_SLIT_COUNT)
        .into_par_iter()
        .progress_with(pb.clone())
        .map(|n| -> anyhow::Result<()> {
            let config = base.slit_count(n);
            let profile = IntensityProfile::sample(&config)?;
            strip.save(&profile, opt.output.join(format!("intensity_N{:02}.png", n)))?;
            Plot::new()
                .title(config.title())
                .save(&profile, opt.output.join(format!("plot_N{:02}.png", n)))?;
            Ok(())
        })
        .collect::<anyhow::Result<Vec<()>>>()?;
    pb.finish_with_message("All patterns rendered");

    println!(
        "✅ {} patterns rendered in {:.2}s into {:?}",
        MAX_SLIT_COUNT,
        now.elapsed().as_secs_f64(),
        opt.output
    );
    Ok(())
}
