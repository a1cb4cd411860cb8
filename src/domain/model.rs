use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 過濾器無法比對時使用的名稱。
pub const FILTER_NOT_FOUND: &str = "Filter Not Found";
/// 過濾器無法比對時使用的容量。
pub const FILTER_NOT_FOUND_CAPACITY: &str = "0";

/// 水族箱長、深、高 (英吋)，以字串保存，原樣送到遠端表單。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankDimensions {
    pub length: String,
    pub depth: String,
    pub height: String,
}

impl TankDimensions {
    pub fn new(
        length: impl Into<String>,
        depth: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            length: length.into(),
            depth: depth.into(),
            height: height.into(),
        }
    }

    pub fn ldh(&self) -> (&str, &str, &str) {
        (&self.length, &self.depth, &self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub name: String,
    pub capacity: String,
}

impl FilterSelection {
    pub fn new(name: impl Into<String>, capacity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capacity: capacity.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(FILTER_NOT_FOUND, FILTER_NOT_FOUND_CAPACITY)
    }

    pub fn is_not_found(&self) -> bool {
        self.name == FILTER_NOT_FOUND && self.capacity == FILTER_NOT_FOUND_CAPACITY
    }

    pub fn pair(&self) -> (&str, &str) {
        (&self.name, &self.capacity)
    }
}

/// 使用者輸入的一筆魚種與數量，名稱尚未比對。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockingEntry {
    pub name: String,
    pub quantity: u32,
}

/// 標準魚種名稱 -> 數量。
///
/// 保留第一次出現的位置；同名再插入時覆寫數量而不是相加。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStocking {
    entries: Vec<(String, u32)>,
}

impl ResolvedStocking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species: impl Into<String>, quantity: u32) {
        let species = species.into();
        match self.entries.iter_mut().find(|(name, _)| *name == species) {
            Some(entry) => entry.1 = quantity,
            None => self.entries.push((species, quantity)),
        }
    }

    pub fn get(&self, species: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == species)
            .map(|(_, quantity)| *quantity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(name, quantity)| (name.as_str(), *quantity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResolvedStocking {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, quantity) in &self.entries {
            map.serialize_entry(name, quantity)?;
        }
        map.end()
    }
}

impl fmt::Display for ResolvedStocking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, quantity)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", name, quantity)?;
        }
        write!(f, "}}")
    }
}

/// 一次表單提交所需的全部欄位。
#[derive(Debug, Clone, Copy)]
pub struct SubmissionStep<'a> {
    /// `None` 代表尺寸未知，送出空白欄位
    pub dimensions: Option<&'a TankDimensions>,
    pub filter: &'a FilterSelection,
    pub species: &'a str,
    pub quantity: u32,
    pub already_selected: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// 未知尺寸與找不到的過濾器照樣送出，由遠端判斷
    #[default]
    Lenient,
    /// 在送出任何請求前就回報錯誤
    FailFast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPolicy {
    /// 過濾器比對分數 (0-100) 低於此值即視為找不到
    pub min_filter_score: u32,
    pub strictness: Strictness,
}

impl ResolutionPolicy {
    pub const DEFAULT_MIN_FILTER_SCORE: u32 = 50;

    pub fn fail_fast() -> Self {
        Self {
            strictness: Strictness::FailFast,
            ..Self::default()
        }
    }
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            min_filter_score: Self::DEFAULT_MIN_FILTER_SCORE,
            strictness: Strictness::Lenient,
        }
    }
}

/// 一次評估的結果。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    /// 遠端回傳的過濾能力句子，原文保留
    Verdict { sentence: String },
    /// 無法取得結果，附上可執行的建議
    Unavailable { reason: String },
}

impl Assessment {
    pub fn verdict(&self) -> Option<&str> {
        match self {
            Assessment::Verdict { sentence } => Some(sentence),
            Assessment::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Assessment::Verdict { .. })
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assessment::Verdict { sentence } => write!(f, "{}", sentence),
            Assessment::Unavailable { reason } => write!(f, "{}", reason),
        }
    }
}

/// CLI `--json` 輸出用的摘要。
#[derive(Debug, Clone, Serialize)]
pub struct StockingReport {
    pub tank: String,
    pub dimensions: Option<TankDimensions>,
    pub filter: Option<FilterSelection>,
    pub raw_stock: Vec<StockingEntry>,
    pub resolved_stock: ResolvedStocking,
    pub assessment: Option<Assessment>,
}
