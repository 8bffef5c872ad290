use std::time::Duration;

use tracing::warn;

pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";
pub const DEFAULT_SPREADSHEET_ID: &str = "1V3xUg1LplbLN0NK3lsnW2p9WD6-2WePtPG_LOzp30_0";
pub const DEFAULT_SHEET_GID: &str = "2040998711";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the per-user visibility flags are published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub export_base: String,
    pub spreadsheet_id: String,
    pub sheet_gid: String,
    pub request_timeout: Duration,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            export_base: DEFAULT_EXPORT_BASE.to_string(),
            spreadsheet_id: DEFAULT_SPREADSHEET_ID.to_string(),
            sheet_gid: DEFAULT_SHEET_GID.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SheetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(base) = read("OAK_SHEET_BASE") {
            config.export_base = base.trim_end_matches('/').to_string();
        }
        if let Some(id) = read("OAK_SPREADSHEET_ID") {
            config.spreadsheet_id = id;
        }
        if let Some(gid) = read("OAK_SHEET_GID") {
            config.sheet_gid = gid;
        }
        if let Some(raw) = read("OAK_SHEET_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid OAK_SHEET_TIMEOUT_SECS"),
            }
        }
        config
    }

    pub fn export_url(&self) -> String {
        format!(
            "{}/{}/export?format=csv&gid={}",
            self.export_base, self.spreadsheet_id, self.sheet_gid
        )
    }
}

pub fn log_level_from_env() -> tracing::Level {
    parse_log_level(std::env::var("OAK_LOG").ok().as_deref())
}

fn parse_log_level(raw: Option<&str>) -> tracing::Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("trace") => tracing::Level::TRACE,
        Some("debug") => tracing::Level::DEBUG,
        Some("warn") => tracing::Level::WARN,
        Some("error") => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
