//! Diagnostic logging through `env_logger`.
//!
//! User-facing progress goes through `ui::messages`; this logger only carries
//! the request/classification detail and is quiet unless `RUST_LOG` asks.

pub fn init_logger() {
    // a logger may already be installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
}
