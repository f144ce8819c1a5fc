//! API Configuration

/// Used when `WHISKY_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL baked in at compile time (`WHISKY_API_URL=... trunk build`)
    pub fn from_env() -> Self {
        Self::new(option_env!("WHISKY_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path (with or without leading slash) onto the base
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("https://api.example.com/api/v1/");
        assert_eq!(config.base_url(), "https://api.example.com/api/v1");
        assert_eq!(config.url("/bottles?limit=5"), "https://api.example.com/api/v1/bottles?limit=5");
        assert_eq!(config.url("wishlist"), "https://api.example.com/api/v1/wishlist");
    }

    #[test]
    fn test_default_base() {
        let config = ApiConfig::new(DEFAULT_API_URL);
        assert_eq!(config.url("/auth/login"), "http://localhost:8000/api/v1/auth/login");
    }
}
