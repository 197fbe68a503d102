use serde::Deserialize;

use crate::services::recommendations::DEFAULT_RECOMMENDATION_COUNT;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional JSON file holding the movie catalog; the built-in sample is used when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Directory served at `/` for the browser front end
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Number of movies returned by the recommend endpoint
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_recommendation_count() -> usize {
    DEFAULT_RECOMMENDATION_COUNT
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.recommendation_count == 0 {
            anyhow::bail!("RECOMMENDATION_COUNT must be at least 1");
        }
        Ok(())
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter::<_, Config>(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.recommendation_count, 5);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("CATALOG_PATH", "/tmp/movies.json"),
            ("RECOMMENDATION_COUNT", "3"),
        ]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path.as_deref(), Some("/tmp/movies.json"));
        assert_eq!(config.recommendation_count, 3);
    }

    #[test]
    fn test_zero_recommendation_count_rejected() {
        let config = from_pairs(&[("RECOMMENDATION_COUNT", "0")]);
        assert!(config.validate().is_err());
    }
}
