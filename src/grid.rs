/// `n` evenly spaced samples over `[start, end]`, both ends included
///
/// A single sample is located at `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Screen positions where the intensity is sampled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionGrid {
    /// first position [m]
    pub x_min: f64,
    /// last position [m]
    pub x_max: f64,
    /// number of positions
    pub num_points: usize,
}
impl Default for PositionGrid {
    fn default() -> Self {
        Self {
            x_min: -0.05,
            x_max: 0.05,
            num_points: 1000,
        }
    }
}
impl PositionGrid {
    pub fn new(x_min: f64, x_max: f64, num_points: usize) -> Self {
        Self {
            x_min,
            x_max,
            num_points,
        }
    }
    /// Returns the grid positions
    pub fn positions(&self) -> Vec<f64> {
        linspace(self.x_min, self.x_max, self.num_points)
    }
    /// Distance between consecutive positions
    pub fn step(&self) -> Option<f64> {
        (self.num_points > 1).then(|| (self.x_max - self.x_min) / (self.num_points - 1) as f64)
    }
}
