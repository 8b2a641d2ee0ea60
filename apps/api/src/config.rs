use anyhow::{Context, Result};

/// Application configuration, read from the environment once at startup and
/// carried in app state. Every database knob has a fallback default so the
/// service can boot against a local MySQL without any configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

/// Connection parameters for the ATS MySQL database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            host: "localhost".to_string(),
            user: "root".to_string(),
            // Placeholder default. Override DB_PASSWORD in any real deployment.
            password: "pujitha".to_string(),
            database: "ats_system".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = DbConfig::default();
        Ok(Config {
            db: DbConfig {
                host: env_or("DB_HOST", &defaults.host),
                user: env_or("DB_USER", &defaults.user),
                password: env_or("DB_PASSWORD", &defaults.password),
                database: env_or("DB_NAME", &defaults.database),
            },
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_config_defaults() {
        let db = DbConfig::default();
        assert_eq!(db.host, "localhost");
        assert_eq!(db.user, "root");
        assert_eq!(db.database, "ats_system");
    }
}
