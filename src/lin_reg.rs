use std::{
    error::Error,
    fmt::{self, Display},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegression {
    pub slope: f64,
    pub y_offset: f64,
}

impl LinearRegression {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.y_offset
    }
}

/// Ordinary least squares fit of `ys` against `xs`, computed on the centred data.
pub fn lin_reg(xs: &[f64], ys: &[f64]) -> Result<LinearRegression, RegressionError> {
    if xs.len() != ys.len() {
        return Err(RegressionError::LengthMismatch(xs.len(), ys.len()));
    }
    if xs.is_empty() {
        return Err(RegressionError::EmptySample);
    }

    let mean_x = xs.iter().sum::<f64>() / xs.len() as f64;
    let mean_y = ys.iter().sum::<f64>() / ys.len() as f64;

    let dev_xs = xs.iter().map(|x| x - mean_x);
    let dev_ys = ys.iter().map(|y| y - mean_y);

    let x_squared = dev_xs.clone().fold(0.0, |acc, x| acc + x * x);
    if x_squared == 0.0 || !x_squared.is_finite() {
        return Err(RegressionError::DegenerateX);
    }

    let slope = dev_ys.zip(dev_xs).fold(0.0, |acc, (y, x)| acc + x * y) / x_squared;
    let y_offset = mean_y - slope * mean_x;
    Ok(LinearRegression { slope, y_offset })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegressionError {
    EmptySample,
    LengthMismatch(usize, usize),
    /// All xs are equal (or overflow), the slope is undefined.
    DegenerateX,
}

impl Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::EmptySample => f.write_str("cannot fit a line to zero points"),
            RegressionError::LengthMismatch(xs, ys) => {
                write!(f, "got {} x values but {} y values", xs, ys)
            }
            RegressionError::DegenerateX => {
                f.write_str("the x values have no spread, the slope is undefined")
            }
        }
    }
}

impl Error for RegressionError {}
