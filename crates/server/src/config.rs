use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL of the broadcast API, without trailing slash.
    pub lichess_api_url: String,
    pub tournament_id: String,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
    pub contact_email: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            lichess_api_url: "https://lichess.org/api".to_string(),
            tournament_id: "GGjvzgTh".to_string(),
            poll_interval: Duration::from_millis(5000),
            http_timeout: Duration::from_secs(30),
            contact_email: "escola@xadrezpontevedra.com".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            lichess_api_url: env::var("LICHESS_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.lichess_api_url),
            tournament_id: env::var("TOURNAMENT_ID").unwrap_or(defaults.tournament_id),
            poll_interval: env::var("POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            contact_email: env::var("CONTACT_EMAIL").unwrap_or(defaults.contact_email),
        }
    }
}
