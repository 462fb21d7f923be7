use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 5003;
const DEFAULT_RATE_LIMIT_MAX: u32 = 300;
const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 15 * 60;

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` keeps the ledger in process memory.
    pub database_url: Option<String>,
    pub port: u16,
    pub rooms_file: Option<String>,
    pub client_origin: Option<String>,
    pub log_dir: String,
    /// Requests one client may make per window; 0 turns limiting off.
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT").or_else(|_| env::var("API_PORT")) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let rate_limit_max = parsed_var("RATE_LIMIT_MAX")?.unwrap_or(DEFAULT_RATE_LIMIT_MAX);
        let rate_limit_window_secs =
            parsed_var("RATE_LIMIT_WINDOW_SECS")?.unwrap_or(DEFAULT_RATE_LIMIT_WINDOW_SECS);
        if rate_limit_window_secs == 0 {
            anyhow::bail!("RATE_LIMIT_WINDOW_SECS must be greater than zero");
        }

        Ok(Self {
            database_url: non_empty_var("DATABASE_URL"),
            port,
            rooms_file: non_empty_var("ROOMS_FILE"),
            client_origin: non_empty_var("CLIENT_ORIGIN"),
            log_dir: non_empty_var("LOG_DIR").unwrap_or_else(|| "./logs".to_string()),
            rate_limit_max,
            rate_limit_window_secs,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    non_empty_var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("{key} must be a number, got {raw:?}"))
        })
        .transpose()
}
