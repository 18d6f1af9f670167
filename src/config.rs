use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Runtime settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `sqlite::memory:` keeps everything in process memory.
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub cors_max_age: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite::memory:".to_string()),
            port: parse_or(&lookup, "PORT", 8080),
            jwt_secret,
            run_migrations: parse_flag(&lookup, "RUN_MIGRATIONS", true),
            cors_max_age: Duration::from_secs(parse_or(&lookup, "CORS_MAX_AGE_SECS", 3600)),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.run_migrations);
        assert_eq!(cfg.cors_max_age, Duration::from_secs(3600));
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn jwt_secret_is_required() {
        let err = config(&[]).unwrap_err();
        assert_eq!(err.to_string(), "JWT_SECRET must be set");
        assert!(config(&[("JWT_SECRET", "")]).is_err());
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let cfg = config(&[
            ("JWT_SECRET", "s"),
            ("PORT", "eighty"),
            ("CORS_MAX_AGE_SECS", "60"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.cors_max_age, Duration::from_secs(60));
        assert!(!cfg.run_migrations);
    }
}
