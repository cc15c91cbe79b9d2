//! Environment-driven configuration.
//!
//! The service takes its settings from the process environment (optionally
//! seeded from a `.env` file by the binary). There is no config file
//! format; CLI flags in `main` override whatever is gathered here.

use tracing::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_NAME: &str = "roster";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB connection string. Required to start the server.
    pub url: Option<String>,
    pub name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            database: DatabaseConfig {
                url: None,
                name: DEFAULT_DATABASE_NAME.to_string(),
            },
        }
    }
}

impl Config {
    /// Gather configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(host) = env_var("SERVER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = env_var("SERVER_PORT").and_then(parse_port) {
            config.server.port = port;
        }
        config.database.url = env_var("MONGODB_URL");
        if let Some(name) = env_var("MONGODB_DATABASE") {
            config.database.name = name;
        }

        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn validate_database_url(url: &str) -> anyhow::Result<()> {
    if !(url.starts_with("mongodb://") || url.starts_with("mongodb+srv://")) {
        anyhow::bail!(
            "invalid database URL: must start with mongodb:// or mongodb+srv://"
        );
    }
    Ok(())
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_port(raw: String) -> Option<u16> {
    match raw.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!(value = %raw, "invalid SERVER_PORT, keeping default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_everything_but_the_connection_string() {
        let config = Config::default();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.database.name, DEFAULT_DATABASE_NAME);
        assert!(config.database.url.is_none());
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn port_parsing_rejects_garbage() {
        assert_eq!(parse_port("8080".to_string()), Some(8080));
        assert_eq!(parse_port("not-a-port".to_string()), None);
    }

    #[test]
    fn database_url_must_be_a_mongodb_scheme() {
        assert!(validate_database_url("mongodb://localhost:27017").is_ok());
        assert!(validate_database_url("mongodb+srv://cluster.example.net").is_ok());
        assert!(validate_database_url("postgres://localhost:5432/app").is_err());
    }
}
