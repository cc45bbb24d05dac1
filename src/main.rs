#[cfg(not(target_arch = "wasm32"))]
fn main() {
    linreg_outliers::logging::init_native_log();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1100.0, 820.0)),
        ..Default::default()
    };
    eframe::run_native(
        linreg_outliers::TITLE,
        native_options,
        Box::new(|cc| Box::new(linreg_outliers::OutlierApp::new(cc))),
    );
}

// the web build starts through `linreg_outliers::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
