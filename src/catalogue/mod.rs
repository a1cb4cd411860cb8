//! Catalogue Store: 魚種、過濾器與水族箱尺寸的唯讀資料表。
//!
//! 內建資料在第一次使用時建立一次，之後整個行程共用；也可以從 TOML
//! 資料檔載入替代的資料表。

pub mod filters;
pub mod species;
pub mod tanks;

use crate::domain::model::TankDimensions;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub name: String,
    pub capacity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankSpec {
    pub size: String,
    pub length: String,
    pub depth: String,
    pub height: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    pub species: Vec<String>,
    #[serde(rename = "filter", default)]
    pub filters: Vec<FilterSpec>,
    #[serde(rename = "tank", default)]
    pub tanks: Vec<TankSpec>,
}

static SHARED: OnceLock<Arc<Catalogue>> = OnceLock::new();

impl Catalogue {
    pub fn builtin() -> Self {
        Self {
            species: species::SPECIES.iter().map(|s| s.to_string()).collect(),
            filters: filters::FILTERS
                .iter()
                .map(|(name, capacity)| FilterSpec {
                    name: name.to_string(),
                    capacity: capacity.to_string(),
                })
                .collect(),
            tanks: tanks::TANKS
                .iter()
                .map(|(size, [length, depth, height])| TankSpec {
                    size: size.to_string(),
                    length: length.to_string(),
                    depth: depth.to_string(),
                    height: height.to_string(),
                })
                .collect(),
        }
    }

    /// 行程共用的內建資料表。
    pub fn shared() -> Arc<Catalogue> {
        SHARED.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    /// 從 TOML 檔案載入資料表
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdvisorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析資料表
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalogue: Catalogue =
            toml::from_str(content).map_err(|e| AdvisorError::CatalogueError {
                message: format!("TOML parsing error: {}", e),
            })?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(String::as_str)
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(|f| f.name.as_str())
    }

    pub fn filter_capacity(&self, name: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.capacity.as_str())
    }

    pub fn dimensions(&self, size: &str) -> Option<TankDimensions> {
        self.tanks
            .iter()
            .find(|t| t.size == size)
            .map(|t| TankDimensions::new(&t.length, &t.depth, &t.height))
    }

    pub fn tank_sizes(&self) -> impl Iterator<Item = &str> {
        self.tanks.iter().map(|t| t.size.as_str())
    }
}

fn check_unique<'a>(table: &str, names: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(AdvisorError::CatalogueError {
                message: format!("Duplicate {} entry: {}", table, name),
            });
        }
    }
    Ok(())
}

impl Validate for Catalogue {
    fn validate(&self) -> Result<()> {
        if self.species.is_empty() {
            return Err(AdvisorError::CatalogueError {
                message: "Species list cannot be empty".to_string(),
            });
        }
        check_unique("species", self.species())?;
        check_unique("filter", self.filter_names())?;
        check_unique("tank", self.tank_sizes())?;
        Ok(())
    }
}
