use std::ops::RangeInclusive;

use egui::{Response, Slider, Ui};

use crate::generator::GenerationError;

pub const COUNT_RANGE: RangeInclusive<usize> = 100..=1000;
pub const COUNT_STEP: usize = 50;
pub const SLOPE_RANGE: RangeInclusive<f64> = -10.0..=10.0;
pub const SLOPE_STEP: f64 = 0.1;
pub const INTERCEPT_RANGE: RangeInclusive<f64> = -50.0..=50.0;
pub const INTERCEPT_STEP: f64 = 1.0;
pub const VARIANCE_RANGE: RangeInclusive<f64> = 0.0..=1000.0;
pub const VARIANCE_STEP: f64 = 1.0;

/// The four inputs of one run: y = slope * x + intercept + N(0, variance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub count: usize,
    pub slope: f64,
    pub intercept: f64,
    pub variance: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            count: 300,
            slope: 2.0,
            intercept: 5.0,
            variance: 50.0,
        }
    }
}

impl Parameters {
    pub fn new(count: usize, slope: f64, intercept: f64, variance: f64) -> Self {
        Self {
            count,
            slope,
            intercept,
            variance,
        }
    }

    pub fn noise_std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Checks what generation needs. Values outside the slider bounds are fine.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.count == 0 {
            return Err(GenerationError::EmptySampleCount);
        }
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(GenerationError::InvalidVariance(self.variance));
        }
        if !self.slope.is_finite() || !self.intercept.is_finite() {
            return Err(GenerationError::NonFiniteCoefficient);
        }
        Ok(())
    }

    /// Forces every value into its slider range and onto the slider's step grid.
    pub fn clamped(&self) -> Self {
        let count = {
            let start = *COUNT_RANGE.start();
            let count = self.count.clamp(start, *COUNT_RANGE.end());
            start + (count - start + COUNT_STEP / 2) / COUNT_STEP * COUNT_STEP
        };
        Self {
            count: count.min(*COUNT_RANGE.end()),
            slope: snap(self.slope, SLOPE_RANGE, SLOPE_STEP),
            intercept: snap(self.intercept, INTERCEPT_RANGE, INTERCEPT_STEP),
            variance: snap(self.variance, VARIANCE_RANGE, VARIANCE_STEP),
        }
    }

    /// Draws the parameter controls. The returned response covers the sliders and the
    /// reset button and is marked changed if any value changed this frame.
    pub fn side_panel(&mut self, ui: &mut Ui) -> Response {
        let before = *self;

        ui.heading("Data Parameters");
        ui.separator();

        ui.label("Number of Data Points (n)");
        let mut response =
            ui.add(Slider::new(&mut self.count, COUNT_RANGE).step_by(COUNT_STEP as f64));
        ui.label("Coefficient a");
        response |= ui.add(Slider::new(&mut self.slope, SLOPE_RANGE).step_by(SLOPE_STEP));
        ui.label("Intercept b");
        response |=
            ui.add(Slider::new(&mut self.intercept, INTERCEPT_RANGE).step_by(INTERCEPT_STEP));
        ui.label("Noise Variance");
        response |=
            ui.add(Slider::new(&mut self.variance, VARIANCE_RANGE).step_by(VARIANCE_STEP));

        ui.separator();
        let reset = ui.button("Reset");
        if reset.clicked() {
            *self = Self::default();
        }
        response |= reset;

        if *self != before {
            response.mark_changed();
        }
        response
    }
}

fn snap(value: f64, range: RangeInclusive<f64>, step: f64) -> f64 {
    let (start, end) = (*range.start(), *range.end());
    if value.is_nan() {
        return start;
    }
    // the grid is anchored at zero, every range contains zero and ends on the grid
    ((value.clamp(start, end) / step).round() * step).clamp(start, end)
}
