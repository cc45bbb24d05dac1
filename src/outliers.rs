use std::cmp::Ordering;

use itertools::Itertools;

use crate::{generator::SampleSet, lin_reg::LinearRegression};

/// A sample flagged for its distance to the fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlier {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub residual: f64,
}

/// Absolute vertical distance of every sample to the fitted line.
pub fn residuals(samples: &SampleSet, fit: &LinearRegression) -> Vec<f64> {
    samples
        .iter()
        .map(|(x, y)| (y - fit.predict(x)).abs())
        .collect_vec()
}

/// Indices of the `k` largest residuals, largest first.
///
/// Equal residuals keep their original order and NaNs come last. Asking for more
/// indices than there are residuals returns all of them.
pub fn top_k(residuals: &[f64], k: usize) -> Vec<usize> {
    (0..residuals.len())
        .sorted_by(|&a, &b| descending(residuals[a], residuals[b]))
        .take(k)
        .collect_vec()
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Resolves the `k` largest residuals to their points.
pub fn select(samples: &SampleSet, residuals: &[f64], k: usize) -> Vec<Outlier> {
    top_k(residuals, k)
        .into_iter()
        .filter_map(|index| {
            let (x, y) = samples.point(index)?;
            Some(Outlier {
                index,
                x,
                y,
                residual: residuals[index],
            })
        })
        .collect_vec()
}
