use std::env;
use std::io;
use std::str::FromStr;
use tracing::Level;

pub const ENV_LOG: &str = "TERMSUGGEST_LOG";

/// Pick the log level: an explicit `-v` count wins, then `TERMSUGGEST_LOG`, then warn.
pub fn level_for(verbosity: u8, env_level: Option<&str>) -> Level {
    match verbosity {
        0 => env_level
            .and_then(|value| Level::from_str(value.trim()).ok())
            .unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls are ignored.
pub fn init(verbosity: u8) {
    let env_level = env::var(ENV_LOG).ok();
    let level = level_for(verbosity, env_level.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
