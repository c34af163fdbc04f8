use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `info`).
/// Set `REGFORM_LOG` to a file path to log there instead (ANSI disabled).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match std::env::var("REGFORM_LOG").ok() {
        Some(log_path) => {
            let Ok(file) = std::fs::File::create(&log_path) else {
                eprintln!("Warning: Failed to create log file: {}", log_path);
                return;
            };

            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
    }
}
