use std::env;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_bool(key: &str, default: bool) -> bool {
    match env_opt(key).as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

/// Process-level settings. Only ambient concerns live here: extraction and
/// chunking behave identically regardless of the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub log: LogConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            log: LogConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::debug!(filter = %self.log.filter, ansi = self.log.ansi, "config loaded");
    }
}

// ── Logging ───────────────────────────────────────────────────

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
    /// Colored output on stderr.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: false,
        }
    }
}

impl LogConfig {
    /// `DOCCHUNK_LOG` wins over `RUST_LOG`; both fall back to `warn`.
    fn from_env() -> Self {
        let filter = env_opt("DOCCHUNK_LOG")
            .or_else(|| env_opt("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self {
            filter,
            ansi: env_bool("DOCCHUNK_LOG_ANSI", false),
        }
    }
}
