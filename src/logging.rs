use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV_VAR: &str = "PROMPT_REFINER_LOG";

/// Initialize tracing.
///
/// Set `PROMPT_REFINER_LOG` to a file path to log to a file; the file name
/// gets a `.{timestamp}.{pid}` suffix so concurrent runs don't collide.
/// Without it, logs go to stderr only when `stderr_fallback` is set (the
/// `serve` command); the one-shot CLI stays quiet so its output is clean.
pub fn init_tracing(stderr_fallback: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        if stderr_fallback {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .init();
        }
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
