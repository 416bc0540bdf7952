//! Logging setup
//!
//! Console output is filtered by `RUST_LOG` (default `warn`). Useful targets:
//! - `drawer::presenter` - open/close/settle/occlusion decisions at `debug`,
//!   live drag tracking at `trace`
//! - `drawer::transition` - animation tickets as they are queued (`trace`)
//! - `drawer::update` - every dispatched `DrawerMsg` (`trace`)
//! - `drawer::scenario` - simulator steps (`debug`)
//! - `drawer::headless` - observer callbacks seen by the recording host
//!
//! e.g. `RUST_LOG=drawer::presenter=debug drawer-sim samples/stacked_sheets.json`
//!
//! The log file `<config dir>/logs/drawer.log` rotates daily and keeps the
//! crate's own events at `debug` regardless of `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console directives when `RUST_LOG` is unset
pub const DEFAULT_CONSOLE_DIRECTIVES: &str = "warn";

/// File directives: drawer at debug, dependencies only when they warn
pub const FILE_DIRECTIVES: &str = "warn,drawer=debug";

const LOG_FILE_PREFIX: &str = "drawer.log";

fn console_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_CONSOLE_DIRECTIVES))
}

/// Install the console layer and, when the logs directory is usable, the
/// rolling file layer
pub fn init() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter());

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(FILE_DIRECTIVES)),
        ),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
