use tracing_subscriber::filter::LevelFilter;

const STDOUT_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::INFO
} else {
    LevelFilter::WARN
};

/// Targets of the windowing backend that are only shown from WARN up.
const BACKEND_TARGETS: [&str; 4] = ["winit", "wgpu", "naga", "eframe"];

pub fn init_native_log() {
    use tracing_subscriber::{filter, prelude::*};

    let stdout_log = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .pretty()
        .with_filter(STDOUT_LEVEL)
        .with_filter(filter::filter_fn(|metadata| {
            *metadata.level() <= LevelFilter::WARN
                || !is_backend_target(metadata.target())
        }));

    tracing_subscriber::registry().with(stdout_log).init();
}

fn is_backend_target(target: &str) -> bool {
    BACKEND_TARGETS
        .iter()
        .any(|backend| target.starts_with(backend))
}
