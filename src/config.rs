use anyhow::Result;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub tenant_id: String,
    pub holiday_cache_ttl_secs: u64,
    pub seed_file: Option<String>,
    pub client_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        Self::from_env_only()
    }

    /// Reads the process environment without touching `.env`, so tests can
    /// control every value.
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            tenant_id: env::var("TENANT_ID").unwrap_or_else(|_| "default".to_string()),
            holiday_cache_ttl_secs: env::var("HOLIDAY_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            seed_file: env::var("SEED_FILE").ok().filter(|path| !path.trim().is_empty()),
            client_base_url: env::var("CLIENT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn holiday_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.holiday_cache_ttl_secs)
    }
}
