use std::env;
use std::sync::Once;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Install a global `tracing` subscriber at the level named by `LOGLEVEL`.
///
/// Accepts `DEBUG`, `ERROR`, `WARN` and `TRACE` in any case, anything else
/// means `INFO`. Safe to call more than once; only the first call installs.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(env::var("LOGLEVEL").ok().as_deref());
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            debug!("Log level set to: {}", level);
        }
    });
}

fn parse_level(value: Option<&str>) -> Level {
    match value.map(str::to_uppercase).as_deref() {
        Some("DEBUG") => Level::DEBUG,
        Some("ERROR") => Level::ERROR,
        Some("WARN") => Level::WARN,
        Some("TRACE") => Level::TRACE,
        _ => Level::INFO,
    }
}
