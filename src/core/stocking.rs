use crate::catalogue::Catalogue;
use crate::core::resolver;
use crate::domain::model::{ResolvedStocking, StockingEntry};
use crate::utils::error::{AdvisorError, Result};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// 一個水族箱的放養計畫。
///
/// 以使用者輸入的名稱為 key 累積 (名稱, 數量)；相同名稱再加入時覆寫數量。
/// 標準名稱的對照表在第一次讀取時建立並快取，任何修改都會清除快取。
///
/// ```ignore
/// let stocking = Stocking::new().add("cardinal tetra", 5).add("panda cory", 6);
/// stocking.resolved_stock();
/// ```
#[derive(Debug, Clone)]
pub struct Stocking {
    catalogue: Arc<Catalogue>,
    entries: Vec<StockingEntry>,
    resolved: OnceLock<ResolvedStocking>,
}

impl Default for Stocking {
    fn default() -> Self {
        Self::with_catalogue(Catalogue::shared())
    }
}

impl Stocking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalogue(catalogue: Arc<Catalogue>) -> Self {
        Self {
            catalogue,
            entries: Vec::new(),
            resolved: OnceLock::new(),
        }
    }

    /// 從既有的 (名稱, 數量) 清單建立。
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut stocking = Self::new();
        for (name, quantity) in entries {
            stocking.insert(name, quantity);
        }
        stocking
    }

    pub fn add(mut self, name: impl Into<String>, quantity: u32) -> Self {
        self.insert(name, quantity);
        self
    }

    /// 以學名為 key 加入；學名通常比俗名更容易比對成功。
    pub fn add_with_scientific_name(
        mut self,
        _name: impl Into<String>,
        quantity: u32,
        scientific_name: impl Into<String>,
    ) -> Self {
        self.insert(scientific_name, quantity);
        self
    }

    /// 數量照原樣保存，不檢查是否為正數。
    pub fn insert(&mut self, name: impl Into<String>, quantity: u32) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.quantity = quantity,
            None => self.entries.push(StockingEntry { name, quantity }),
        }
        self.resolved.take();
    }

    pub fn remove(&mut self, name: &str, quantity: u32) -> Result<()> {
        tracing::error!("remove({}, {}) requested on a stocking plan", name, quantity);
        Err(AdvisorError::Unsupported {
            operation: "remove stocking entry".to_string(),
        })
    }

    /// 使用者輸入的原始清單，依加入順序。
    pub fn raw_stock(&self) -> &[StockingEntry] {
        &self.entries
    }

    /// 標準魚種名稱 -> 數量。
    ///
    /// 兩個不同輸入對應到同一魚種時，後者的數量覆寫前者，不會相加。
    pub fn resolved_stock(&self) -> &ResolvedStocking {
        self.resolved.get_or_init(|| self.resolve_all())
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resolve_all(&self) -> ResolvedStocking {
        let mut resolved = ResolvedStocking::new();
        for entry in &self.entries {
            match resolver::best_match(&entry.name, self.catalogue.species()) {
                Some(m) => {
                    tracing::debug!(
                        "🐟 '{}' -> '{}' (score {:?})",
                        entry.name,
                        m.candidate,
                        m.score
                    );
                    resolved.insert(m.candidate, entry.quantity);
                }
                None => tracing::warn!("Species catalogue is empty, '{}' dropped", entry.name),
            }
        }
        resolved
    }
}

impl fmt::Display for Stocking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", entry.name, entry.quantity)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_overwrites_quantity() {
        let stocking = Stocking::new().add("neon tetra", 10).add("neon tetra", 4);
        assert_eq!(
            stocking.raw_stock(),
            &[StockingEntry {
                name: "neon tetra".to_string(),
                quantity: 4
            }]
        );
    }

    #[test]
    fn test_scientific_name_is_the_key() {
        let stocking = Stocking::new()
            .add_with_scientific_name("cardinal", 5, "Paracheirodon axelrodi")
            .add_with_scientific_name("cardinal tetra", 7, "Paracheirodon axelrodi");
        assert_eq!(stocking.raw_stock().len(), 1);
        assert_eq!(stocking.raw_stock()[0].name, "Paracheirodon axelrodi");
        assert_eq!(
            stocking
                .resolved_stock()
                .get("Cardinal Tetra (Paracheirodon axelrodi)"),
            Some(7)
        );
    }

    #[test]
    fn test_resolved_collision_keeps_later_quantity() {
        let stocking = Stocking::new()
            .add("cardinal tetra", 5)
            .add("Cardinal_Tetra", 9);
        let resolved = stocking.resolved_stock();
        assert_eq!(stocking.raw_stock().len(), 2);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.get("Cardinal Tetra (Paracheirodon axelrodi)"), Some(9));
    }

    #[test]
    fn test_insert_invalidates_cache() {
        let mut stocking = Stocking::new().add("pearl gourami", 4);
        assert_eq!(stocking.resolved_stock().len(), 1);

        stocking.insert("lemon tetra", 12);
        let resolved = stocking.resolved_stock();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved.get("Lemon Tetra (Hyphessobrycon pulchripinnis)"), Some(12));
    }

    #[test]
    fn test_zero_quantity_is_kept() {
        let stocking = Stocking::new().add("guppy", 0);
        assert_eq!(stocking.raw_stock()[0].quantity, 0);
        assert_eq!(stocking.resolved_stock().get("Guppy (Poecilia reticulata)"), Some(0));
    }

    #[test]
    fn test_remove_is_not_supported() {
        let mut stocking = Stocking::new().add("guppy", 3);
        let err = stocking.remove("guppy", 1).unwrap_err();
        assert!(matches!(err, AdvisorError::Unsupported { .. }));
        assert_eq!(stocking.raw_stock().len(), 1);
    }

    #[test]
    fn test_display_lists_user_names() {
        let stocking = Stocking::from_entries([("cardinal tetra", 5), ("panda cory", 5)]);
        assert_eq!(stocking.to_string(), "{'cardinal tetra': 5, 'panda cory': 5}");
    }

    #[test]
    fn test_custom_catalogue() {
        let catalogue = Catalogue::from_toml_str(
            r#"species = ["Guppy (Poecilia reticulata)", "Oscar (Astronotus ocellatus)"]"#,
        )
        .unwrap();
        let stocking = Stocking::with_catalogue(Arc::new(catalogue)).add("oscar", 1);
        assert_eq!(stocking.resolved_stock().get("Oscar (Astronotus ocellatus)"), Some(1));
    }
}
