pub mod catalogue;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use catalogue::Catalogue;
pub use config::{toml_config::TomlConfig, AdvisorConfig};
pub use crate::core::{protocol::AqAdvisorClient, stocking::Stocking, tank::Tank};
pub use domain::model::{Assessment, FilterSelection, ResolutionPolicy, Strictness, TankDimensions};
pub use utils::error::{AdvisorError, Result};
