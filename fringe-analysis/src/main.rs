use nslit::{Config, IntensityProfile, MAX_SLIT_COUNT};
use polars::prelude::*;

fn main() -> anyhow::Result<()> {
    // Quasi-monochromatic light with a 10nm spectral width around 500nm
    let config = Config::default().quasi_monochromatic(500e-9, 10e-9, 100);
    let profiles = (1..=MAX_SLIT_COUNT)
        .map(|n| IntensityProfile::sample(&config.slit_count(n)))
        .collect::<nslit::Result<Vec<_>>>()?;

    // The profiles for every number of slits in a polars (https://pola-rs.github.io/polars-book/user-guide/index.html) dataframe
    let x_mm: Vec<f64> = profiles[0].positions().iter().map(|x| x * 1e3).collect();
    let mut columns = vec![Column::from(Series::new("x [mm]".into(), x_mm))];
    columns.extend(
        profiles
            .iter()
            .zip(1..)
            .map(|(profile, n)| {
                Column::from(Series::new(format!("N={}", n).into(), profile.intensity()))
            }),
    );
    let fringes = DataFrame::new(columns)?;
    println!("{}", fringes.head(None));

    // More slits sharpen the principal maxima and add N-2 secondary maxima in between
    println!("{:^8} {:^12} {:^12}", "SLITS", "PEAK", "MAXIMA>1%");
    for (profile, n) in profiles.iter().zip(1..) {
        println!(
            "{:^8} {:^12.3} {:^12}",
            n,
            profile.peak(),
            profile.local_maxima(1e-2).len()
        );
    }

    Ok(())
}
