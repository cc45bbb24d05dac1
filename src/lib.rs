mod app;
pub mod generator;
pub mod lin_reg;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod outliers;
pub mod params;
pub mod pipeline;
mod plot_view;
pub mod report;
pub use app::OutlierApp;

pub const TITLE: &str = "Linear Regression with Outlier Detection";

/// Seed for every generated sample set, so identical parameters give identical data.
pub const SEED: u64 = 42;
/// x values are drawn uniformly from `X_RANGE.0..X_RANGE.1`.
pub const X_RANGE: (f64, f64) = (-50.0, 50.0);
pub const OUTLIER_COUNT: usize = 5;

#[cfg(target_arch = "wasm32")]
use eframe::wasm_bindgen::{self, prelude::*};

/// Web entry point, mounts the app on the canvas with the given id.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), eframe::wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    // the pipeline logs through `log`, forward it to the tracing subscriber
    tracing_log::LogTracer::init().map_err(|err| JsValue::from_str(&err.to_string()))?;

    let web_options = eframe::WebOptions::default();
    eframe::start_web(
        canvas_id,
        web_options,
        Box::new(|cc| Box::new(OutlierApp::new(cc))),
    )?;
    Ok(())
}
