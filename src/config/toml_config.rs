use crate::catalogue::Catalogue;
use crate::config::{AdvisorConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::core::protocol::DEFAULT_ENDPOINT;
use crate::domain::model::{ResolutionPolicy, Strictness};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub advisor: AdvisorSection,
    #[serde(default)]
    pub matching: MatchingSection,
    pub catalogue: Option<CatalogueSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingSection {
    pub min_filter_score: Option<u32>,
    pub strictness: Option<Strictness>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueSection {
    pub path: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AQADVISOR_ENDPOINT})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// 轉成程式使用的設定，未填的欄位採預設值
    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig {
            endpoint: self
                .advisor
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout_seconds: self
                .advisor
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            policy: ResolutionPolicy {
                min_filter_score: self
                    .matching
                    .min_filter_score
                    .unwrap_or(ResolutionPolicy::DEFAULT_MIN_FILTER_SCORE),
                strictness: self.matching.strictness.unwrap_or_default(),
            },
        }
    }

    /// 有設定資料檔就載入，否則使用內建資料表
    pub fn load_catalogue(&self) -> Result<Arc<Catalogue>> {
        match &self.catalogue {
            Some(section) => {
                tracing::info!("📁 Loading catalogue from: {}", section.path);
                Ok(Arc::new(Catalogue::from_file(&section.path)?))
            }
            None => Ok(Catalogue::shared()),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.advisor_config().validate()?;

        if let Some(section) = &self.catalogue {
            validate_path("catalogue.path", &section.path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint(&self) -> &str {
        self.advisor.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn timeout_seconds(&self) -> u64 {
        self.advisor
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn policy(&self) -> ResolutionPolicy {
        self.advisor_config().policy
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
