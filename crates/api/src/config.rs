//! Application configuration loaded from environment variables.

use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Server configuration with development-mode defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `5000`)
/// - `BOOKWORLD_DEBUG` — verbose diagnostics and template reloading (default: `true`)
/// - `RUST_LOG` — tracing filter directive (default: `"debug"` in debug mode, else `"info"`)
/// - `BOOKWORLD_TEMPLATE_DIR` — directory holding `index.html` (default: `"templates"`)
/// - `BOOKWORLD_STATIC_DIR` — directory served under `/static` (default: `"static"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse are ignored in favour of the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let debug = lookup("BOOKWORLD_DEBUG")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.debug);

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            debug,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| default_log_level(debug).to_string()),
            template_dir: lookup("BOOKWORLD_TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            static_dir: lookup("BOOKWORLD_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: true,
            log_level: default_log_level(true).to_string(),
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

fn default_log_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
