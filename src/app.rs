use egui::{Color32, Context, RichText, ScrollArea, Ui};
use log::info;

use crate::{
    params::Parameters,
    pipeline::{Analysis, PipelineError},
    plot_view, report,
};

pub struct OutlierApp {
    params: Parameters,
    analysis: Result<Analysis, PipelineError>,
    /// Pipeline runs so far, including the initial one.
    runs: usize,
}

impl Default for OutlierApp {
    fn default() -> Self {
        let params = Parameters::default();
        Self {
            params,
            analysis: Analysis::run(params),
            runs: 1,
        }
    }
}

impl OutlierApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn rerun(&mut self) {
        self.runs += 1;
        info!("parameters changed, run {}", self.runs);
        self.analysis = Analysis::run(self.params);
    }

    /// One frame of the page. The pipeline only runs again when a parameter changed.
    fn show(&mut self, ctx: &Context) {
        egui::SidePanel::left("data_parameters").show(ctx, |ui| {
            if self.params.side_panel(ui).changed() {
                self.rerun()
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| self.main_view(ui));
        });
    }
}

impl eframe::App for OutlierApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.show(ctx)
    }
}

impl OutlierApp {
    fn main_view(&self, ui: &mut Ui) {
        ui.heading(crate::TITLE);

        let analysis = match self.analysis.as_ref() {
            Ok(analysis) => analysis,
            Err(err) => {
                ui.colored_label(Color32::RED, err.to_string());
                return;
            }
        };

        plot_view::show(analysis, ui);

        ui.add_space(8.0);
        ui.label(RichText::new("Regression Results").heading());
        ui.label(report::equation_line(&analysis.fit));
        ui.label(report::outlier_heading(analysis.outliers.len()));
        for outlier in &analysis.outliers {
            ui.label(report::outlier_line(outlier));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_frames_do_not_rerun() {
        let ctx = Context::default();
        let mut app = OutlierApp::default();
        let first = app.analysis.clone();
        for _ in 0..5 {
            ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
        }
        assert_eq!(app.runs, 1);
        assert_eq!(app.analysis, first);
    }

    #[test]
    fn failed_analysis_is_shown_without_a_plot() {
        let ctx = Context::default();
        let mut app = OutlierApp {
            params: Parameters::default(),
            analysis: Analysis::run(Parameters::new(1, 1.0, 1.0, 1.0)),
            runs: 1,
        };
        assert!(app.analysis.is_err());
        ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
        assert_eq!(app.runs, 1);
    }
}
