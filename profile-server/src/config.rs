#[derive(Debug, Clone)]
pub struct Config {
    /// Address the server binds to
    pub bind: String,
    /// Port the server listens on
    pub port: u16,
    /// SQLite database URL (`sqlite:./path.db` or `sqlite::memory:`)
    pub database_url: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            bind: env_str("PROFILE_SERVER_BIND", "0.0.0.0"),
            port: env_parse("PROFILE_SERVER_PORT", 3000)?,
            database_url: env_str("PROFILE_DATABASE_URL", "sqlite:./data/profiles.db"),
            cors_origins: env_csv("PROFILE_CORS_ORIGINS", &[]),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

fn env_csv(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        Err(_) => default.iter().map(|s| (*s).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared
    // between test threads.

    #[test]
    fn env_parse_falls_back_to_default() {
        let port: u16 = env_parse("PROFILE_TEST_UNSET_PORT", 3000).unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn env_parse_rejects_garbage() {
        std::env::set_var("PROFILE_TEST_BAD_PORT", "not-a-port");
        let err = env_parse::<u16>("PROFILE_TEST_BAD_PORT", 3000).unwrap_err();
        assert!(err.to_string().contains("PROFILE_TEST_BAD_PORT"));
    }

    #[test]
    fn env_csv_trims_and_drops_empty_entries() {
        std::env::set_var("PROFILE_TEST_ORIGINS", " http://a.test, ,http://b.test ");
        assert_eq!(
            env_csv("PROFILE_TEST_ORIGINS", &[]),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(env_csv("PROFILE_TEST_UNSET_ORIGINS", &[]).is_empty());
    }
}
