use std::env;

/// Fallback when BASE_URL is not set, matching the local development address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8501";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        if base_url.trim().is_empty() {
            return Err("BASE_URL must not be empty".into());
        }

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8501".to_string())
            .parse()?;

        Ok(Config {
            base_url,
            server_host,
            server_port,
        })
    }
}
