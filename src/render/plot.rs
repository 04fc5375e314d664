use std::path::Path;

use plotters::{coord::Shift, prelude::*};

use super::RenderError;
use crate::IntensityProfile;

fn draw_error<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> String {
    e.to_string()
}

/// Normalized intensity versus position [mm] line chart
#[derive(Debug, Clone)]
pub struct Plot {
    size: (u32, u32),
    title: Option<String>,
}
impl Default for Plot {
    fn default() -> Self {
        Self {
            size: (800, 600),
            title: None,
        }
    }
}
impl Plot {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }
    /// Sets the image size in pixels
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
    /// Saves the chart of the `profile` to a PNG or, with the `.svg` extension, to a SVG file
    pub fn save(
        &self,
        profile: &IntensityProfile,
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = path.as_ref();
        if profile.is_empty() {
            return Err(RenderError::Empty);
        }
        let result = match path.extension().and_then(|ext| ext.to_str()) {
            Some("svg") => self.draw(SVGBackend::new(path, self.size).into_drawing_area(), profile),
            _ => self.draw(
                BitMapBackend::new(path, self.size).into_drawing_area(),
                profile,
            ),
        };
        result.map_err(|e| RenderError::Draw(e, path.to_path_buf()))?;
        log::info!("intensity plot saved to {:?}", path);
        Ok(())
    }
    fn draw<DB: DrawingBackend>(
        &self,
        plot: DrawingArea<DB, Shift>,
        profile: &IntensityProfile,
    ) -> Result<(), String> {
        plot.fill(&WHITE).map_err(draw_error)?;

        let xy: Vec<(f64, f64)> = profile.iter().map(|(x, i)| (x * 1e3, i)).collect();
        let x_min = xy.first().map_or(0., |(x, _)| *x);
        let mut x_max = xy.last().map_or(1., |(x, _)| *x);
        if x_max <= x_min {
            x_max = x_min + 1.;
        }

        let mut builder = ChartBuilder::on(&plot);
        builder
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .margin(10);
        if let Some(title) = &self.title {
            builder.caption(title.as_str(), ("sans-serif", 20));
        }
        let mut chart = builder
            .build_cartesian_2d(x_min..x_max, 0f64..1.05)
            .map_err(draw_error)?;
        chart
            .configure_mesh()
            .x_desc("x [mm]")
            .y_desc("Normalized intensity")
            .draw()
            .map_err(draw_error)?;

        let color = colorous::TABLEAU10[0];
        let rgb = RGBColor(color.r, color.g, color.b);
        chart
            .draw_series(LineSeries::new(xy, &rgb))
            .map_err(draw_error)?
            .label("Intensity")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &rgb));
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .background_style(&WHITE.mix(0.8))
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(draw_error)?;

        plot.present().map_err(draw_error)?;
        Ok(())
    }
}
