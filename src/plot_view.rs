use egui::{
    plot::{Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text},
    Align2, Color32, Ui,
};
use itertools::Itertools;

use crate::{generator::SampleSet, lin_reg::LinearRegression, pipeline::Analysis, report};

const DATA_COLOR: Color32 = Color32::from_rgba_premultiplied(19, 71, 108, 153);
const LINE_COLOR: Color32 = Color32::RED;
const OUTLIER_COLOR: Color32 = Color32::from_rgb(255, 165, 0);
const OUTLINE_COLOR: Color32 = Color32::BLACK;
const LABEL_COLOR: Color32 = Color32::BLACK;

const DATA_RADIUS: f32 = 3.0;
const OUTLIER_RADIUS: f32 = 5.5;
const OUTLINE_WIDTH: f32 = 1.0;
const LINE_WIDTH: f32 = 2.0;

/// Scatter of all samples, the fitted line and the labelled outliers.
pub fn show(analysis: &Analysis, ui: &mut Ui) {
    let data = Points::new(to_plot_points(scatter_points(&analysis.samples)))
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(DATA_RADIUS)
        .color(DATA_COLOR)
        .name("Data Points");

    let line = line_points(&analysis.samples, &analysis.fit).map(|points| {
        Line::new(to_plot_points(points.to_vec()))
            .color(LINE_COLOR)
            .width(LINE_WIDTH)
            .name("Regression Line")
    });

    let outlier_points = analysis
        .outliers
        .iter()
        .map(|outlier| [outlier.x, outlier.y])
        .collect_vec();
    // a larger black marker underneath gives the orange one its outline
    let outline = Points::new(to_plot_points(outlier_points.clone()))
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(OUTLIER_RADIUS + OUTLINE_WIDTH)
        .color(OUTLINE_COLOR)
        .name("Outliers");
    let outliers = Points::new(to_plot_points(outlier_points))
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(OUTLIER_RADIUS)
        .color(OUTLIER_COLOR)
        .name("Outliers");

    Plot::new(crate::TITLE)
        .legend(Legend::default())
        .view_aspect(4.0 / 3.0)
        .label_formatter(hover_label)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.points(data);
            if let Some(line) = line {
                plot_ui.line(line);
            }
            plot_ui.points(outline);
            plot_ui.points(outliers);
            for outlier in &analysis.outliers {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(outlier.x, outlier.y),
                        report::point_label(outlier),
                    )
                    .color(LABEL_COLOR)
                    .anchor(Align2::LEFT_BOTTOM),
                );
            }
        });
}

/// Hover text naming both axes, egui plots carry no axis titles.
fn hover_label(name: &str, point: &PlotPoint) -> String {
    let coords = format!("x = {:.1}\ny = {:.1}", point.x, point.y);
    if name.is_empty() {
        coords
    } else {
        format!("{}\n{}", name, coords)
    }
}

fn to_plot_points(points: Vec<[f64; 2]>) -> PlotPoints {
    points.into_iter().collect()
}

fn scatter_points(samples: &SampleSet) -> Vec<[f64; 2]> {
    samples.iter().map(|(x, y)| [x, y]).collect_vec()
}

/// End points of the fitted line over the x range of the samples.
fn line_points(samples: &SampleSet, fit: &LinearRegression) -> Option<[[f64; 2]; 2]> {
    let (min, max) = samples.x_bounds()?;
    Some([[min, fit.predict(min)], [max, fit.predict(max)]])
}
