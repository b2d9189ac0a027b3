//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence; otherwise `default_level` (picked from
//! `-v`/`-q`) applies to every crate. Logs go to stderr so answers on
//! stdout stay clean.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
