//! Text shown next to the plot.

use crate::{lin_reg::LinearRegression, outliers::Outlier};

pub fn equation_line(fit: &LinearRegression) -> String {
    format!("Fitted Line: y = {:.3}x + {:.3}", fit.slope, fit.y_offset)
}

pub fn outlier_heading(count: usize) -> String {
    format!("Top {} Outliers (x, y):", count)
}

pub fn outlier_line(outlier: &Outlier) -> String {
    format!(
        "({:.3}, {:.3}) - Residual: {:.3}",
        outlier.x, outlier.y, outlier.residual
    )
}

/// Short label drawn next to an outlier in the plot.
pub fn point_label(outlier: &Outlier) -> String {
    format!("({:.1}, {:.1})", outlier.x, outlier.y)
}
