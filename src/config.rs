use std::time::Duration;

use crate::api::DEFAULT_API_BASE;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct Config {
    /// Collection endpoint, e.g. `http://localhost:3000/api/heroes`.
    pub api_base: String,
    pub timeout: Duration,
    pub search_debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl Config {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
