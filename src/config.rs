//! Server configuration loaded from environment variables.

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// SQLite file (from EMPDEPT_DB_PATH). `None` uses the platform data dir.
    pub db_path: Option<PathBuf>,
    /// Bind address (from EMPDEPT_HOST)
    pub host: String,
    /// Bind port (from EMPDEPT_PORT)
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Unparseable
    /// ports fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("EMPDEPT_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let host = lookup("EMPDEPT_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("EMPDEPT_PORT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            db_path,
            host,
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.db_path, None);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("EMPDEPT_DB_PATH", "/var/lib/empdept/data.db"),
            ("EMPDEPT_HOST", "0.0.0.0"),
            ("EMPDEPT_PORT", "8080"),
        ]));

        assert_eq!(config.db_path, Some(PathBuf::from("/var/lib/empdept/data.db")));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("EMPDEPT_PORT", "http")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
