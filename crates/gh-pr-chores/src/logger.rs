//! stderr logging via env_logger
//!
//! Off the user's way by default: only warnings and errors are shown unless
//! `RUST_LOG` asks for more (e.g. `RUST_LOG=gh_client=debug,gh_pr_chores=debug`).

use env_logger::Env;

/// Initialize logging; safe to call more than once
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
