//! Optional file logging.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_PATH_ENV: &str = "USERSCOPE_LOG";

/// Initializes tracing when `USERSCOPE_LOG` names a file.
///
/// The TUI owns the terminal, so log output never goes to stdout or stderr.
/// Without the variable, no subscriber is installed and every event is
/// dropped. `RUST_LOG` narrows the filter; the default is `info`.
pub fn init_tracing() -> io::Result<()> {
    let Ok(path) = std::env::var(LOG_PATH_ENV) else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
