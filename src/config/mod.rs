#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::protocol::DEFAULT_ENDPOINT;
use crate::domain::model::ResolutionPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 直接在程式中使用的設定，預設值對應 aqadvisor.com。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub policy: ResolutionPolicy,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            policy: ResolutionPolicy::default(),
        }
    }
}

impl ConfigProvider for AdvisorConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn policy(&self) -> ResolutionPolicy {
        self.policy
    }
}

impl Validate for AdvisorConfig {
    fn validate(&self) -> Result<()> {
        validate_url("advisor.endpoint", &self.endpoint)?;
        validate_range("advisor.timeout_seconds", self.timeout_seconds, 1, 600)?;
        validate_range(
            "matching.min_filter_score",
            self.policy.min_filter_score,
            0,
            100,
        )?;
        Ok(())
    }
}
