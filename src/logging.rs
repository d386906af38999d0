use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var naming the log file prefix.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Set up file logging when `FOLIO_LOG` is set; otherwise do nothing, since
/// anything written to the terminal would land on top of the TUI.
///
/// Each run writes `{FOLIO_LOG}.{unix_seconds}.{pid}`. The level filter
/// comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let Ok(prefix) = std::env::var(LOG_ENV) else {
        return;
    };

    let path = unique_log_path(&prefix);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {path}: {err}");
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(file).with_ansi(false).with_target(true))
        .init();
}

fn unique_log_path(prefix: &str) -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("{prefix}.{seconds}.{}", std::process::id())
}
