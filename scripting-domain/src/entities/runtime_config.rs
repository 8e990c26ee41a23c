// Runtime configuration handed from the config loader to the engine

pub const DEFAULT_BASE_URL: &str = "https://api.saryion.com/aq3d/";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_seconds: 15,
            user_agent: None,
        }
    }
}
