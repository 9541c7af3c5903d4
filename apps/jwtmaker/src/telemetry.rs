use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Selects the JSON formatter when set to `json`.
pub const LOG_FORMAT_ENV: &str = "JWTMAKER_LOG_FORMAT";

/// Install the process-wide subscriber.
///
/// Logs go to stderr: stdout carries nothing but the token or the failure
/// message. The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if json_requested(std::env::var(LOG_FORMAT_ENV).ok().as_deref()) {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}

fn json_requested(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.trim().eq_ignore_ascii_case("json"))
}
