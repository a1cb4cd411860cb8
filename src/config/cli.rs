use crate::config::AdvisorConfig;
use crate::domain::model::Strictness;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "aqadvisor")]
#[command(about = "Ask AqAdvisor whether a tank's filtration suits its stocking")]
pub struct CliConfig {
    /// Tank size label, e.g. 10g, 29g, 55g
    #[arg(long, default_value = "10g")]
    pub size: String,

    /// Filter name, matched against the filter catalogue
    #[arg(long)]
    pub filter: Option<String>,

    /// Fish to stock as "name=quantity" (repeatable)
    #[arg(long = "fish", value_parser = parse_fish)]
    pub fish: Vec<(String, u32)>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the remote endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Reject unknown tank sizes and unmatched filters before contacting the remote service
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Resolve names and show the plan without contacting the remote service
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_fish(value: &str) -> std::result::Result<(String, u32), String> {
    let (name, quantity) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected name=quantity, got '{}'", value))?;
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
    Ok((name.trim().to_string(), quantity))
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, mut config: AdvisorConfig) -> AdvisorConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }
        if self.fail_fast {
            config.policy.strictness = Strictness::FailFast;
        }
        config
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("size", &self.size)?;
        if let Some(filter) = &self.filter {
            validate_non_empty_string("filter", filter)?;
        }
        if self.fish.is_empty() {
            return Err(AdvisorError::MissingConfigError {
                field: "fish".to_string(),
            });
        }
        if let Some(timeout) = self.timeout {
            validate_positive_number("timeout", timeout, 1)?;
        }
        for (name, _) in &self.fish {
            validate_non_empty_string("fish", name)?;
        }
        Ok(())
    }
}
