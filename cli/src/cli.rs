//! Command-line arguments.

use std::time::Duration;

use clap::Parser;
use todo_core::config::{Config, DEFAULT_API_URL};

/// Terminal to-do list backed by a REST API
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Terminal to-do list backed by a REST API")]
pub struct CliArgs {
    /// Base address of the todo backend
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// How long status and error messages stay visible, in milliseconds
    #[arg(long, env = "TODO_NOTICE_TTL_MS", default_value_t = 3000)]
    pub notice_ttl_ms: u64,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "todo_core=trace")
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl CliArgs {
    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
            notice_ttl: Duration::from_millis(self.notice_ttl_ms),
        }
    }
}
