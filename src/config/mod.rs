use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

/// 探測目標，寫死在程式內
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub root_url: String,
    pub api_base_url: String,
}

impl ProbeConfig {
    /// 由單一 base URL 推出根路徑與 `/api` 前綴
    pub fn with_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            root_url: format!("{}/", base),
            api_base_url: format!("{}/api", base),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE_URL)
    }
}

impl ConfigProvider for ProbeConfig {
    fn root_url(&self) -> &str {
        &self.root_url
    }

    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl Validate for ProbeConfig {
    fn validate(&self) -> Result<()> {
        validate_url("root_url", &self.root_url)?;
        validate_url("api_base_url", &self.api_base_url)
    }
}
