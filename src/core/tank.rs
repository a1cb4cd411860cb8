use crate::catalogue::Catalogue;
use crate::config::AdvisorConfig;
use crate::core::protocol::{recover_transport, AqAdvisorClient};
use crate::core::resolver;
use crate::core::stocking::Stocking;
use crate::domain::model::{
    Assessment, FilterSelection, ResolutionPolicy, StockingReport, Strictness, TankDimensions,
};
use crate::domain::ports::StockingAdvisor;
use crate::utils::error::{AdvisorError, Result};
use std::fmt;
use std::sync::Arc;

/// 一個水族箱：尺寸、過濾器與放養計畫。
///
/// ```ignore
/// let tank = Tank::new("10g")
///     .select_filter("AquaClear 30")
///     .attach_stocking(Stocking::new().add("cardinal tetra", 5).add("panda cory", 5));
/// let assessment = tank.evaluate().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Tank {
    size: String,
    catalogue: Arc<Catalogue>,
    dimensions: Option<TankDimensions>,
    filter_query: Option<String>,
    filter: Option<FilterSelection>,
    stocking: Stocking,
    policy: ResolutionPolicy,
}

impl Tank {
    /// 未知的尺寸不會在這裡報錯，尺寸欄位保持未設定。
    pub fn new(size: impl Into<String>) -> Self {
        Self::with_catalogue(size, Catalogue::shared())
    }

    pub fn with_catalogue(size: impl Into<String>, catalogue: Arc<Catalogue>) -> Self {
        let size = size.into();
        let dimensions = catalogue.dimensions(&size);
        if dimensions.is_none() {
            tracing::warn!("Unknown tank size '{}', dimensions left unset", size);
        }

        Self {
            stocking: Stocking::with_catalogue(catalogue.clone()),
            size,
            catalogue,
            dimensions,
            filter_query: None,
            filter: None,
            policy: ResolutionPolicy::default(),
        }
    }

    pub fn from_parts(
        size: impl Into<String>,
        filter_name: Option<&str>,
        stocking: Option<Stocking>,
    ) -> Self {
        let mut tank = Self::new(size);
        if let Some(name) = filter_name {
            tank = tank.select_filter(name);
        }
        if let Some(stocking) = stocking {
            tank = tank.attach_stocking(stocking);
        }
        tank
    }

    /// 更換比對政策；已選的過濾器會依新門檻重新比對。
    pub fn with_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        match self.filter_query.take() {
            Some(query) => self.select_filter(query),
            None => self,
        }
    }

    /// 分數低於門檻時存入 ("Filter Not Found", "0")。
    pub fn select_filter(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let selection = resolver::best_match(&name, self.catalogue.filter_names())
            .filter(|m| m.score.primary >= self.policy.min_filter_score)
            .and_then(|m| {
                self.catalogue
                    .filter_capacity(m.candidate)
                    .map(|capacity| FilterSelection::new(m.candidate, capacity))
            });

        self.filter = Some(match selection {
            Some(filter) => {
                tracing::debug!("🔧 Filter '{}' -> '{}'", name, filter.name);
                filter
            }
            None => {
                tracing::warn!("No usable filter match for '{}'", name);
                FilterSelection::not_found()
            }
        });
        self.filter_query = Some(name);
        self
    }

    /// 整個換掉放養計畫。
    pub fn attach_stocking(mut self, stocking: Stocking) -> Self {
        self.stocking = stocking;
        self
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn dimensions(&self) -> Option<&TankDimensions> {
        self.dimensions.as_ref()
    }

    pub fn ldh(&self) -> Option<(&str, &str, &str)> {
        self.dimensions.as_ref().map(TankDimensions::ldh)
    }

    pub fn length(&self) -> Option<&str> {
        self.dimensions.as_ref().map(|d| d.length.as_str())
    }

    pub fn depth(&self) -> Option<&str> {
        self.dimensions.as_ref().map(|d| d.depth.as_str())
    }

    pub fn height(&self) -> Option<&str> {
        self.dimensions.as_ref().map(|d| d.height.as_str())
    }

    pub fn filter(&self) -> Option<&FilterSelection> {
        self.filter.as_ref()
    }

    pub fn stocking(&self) -> &Stocking {
        &self.stocking
    }

    pub fn stocking_mut(&mut self) -> &mut Stocking {
        &mut self.stocking
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    fn check_policy(&self) -> Result<()> {
        if self.policy.strictness == Strictness::Lenient {
            if self.dimensions.is_none() {
                tracing::warn!("Submitting '{}' with unset dimensions", self.size);
            }
            return Ok(());
        }

        if self.dimensions.is_none() {
            return Err(AdvisorError::UnknownTankSize {
                size: self.size.clone(),
            });
        }
        match &self.filter {
            Some(filter) if !filter.is_not_found() => Ok(()),
            _ => Err(AdvisorError::FilterNotFound {
                query: self.filter_query.clone().unwrap_or_default(),
            }),
        }
    }

    /// 以預設設定連到 aqadvisor.com 評估。
    pub async fn evaluate(&self) -> Result<Assessment> {
        self.check_policy()?;
        let config = AdvisorConfig {
            policy: self.policy,
            ..AdvisorConfig::default()
        };
        match AqAdvisorClient::new(&config) {
            Ok(client) => self.evaluate_with(&client).await,
            Err(e) => recover_transport(e, &config.endpoint),
        }
    }

    pub async fn evaluate_with<A>(&self, advisor: &A) -> Result<Assessment>
    where
        A: StockingAdvisor + ?Sized,
    {
        self.check_policy()?;
        let filter = self.filter.clone().unwrap_or_else(FilterSelection::not_found);
        advisor
            .assess(self.stocking.resolved_stock(), self.dimensions.as_ref(), &filter)
            .await
    }

    pub fn report(&self, assessment: Option<Assessment>) -> StockingReport {
        StockingReport {
            tank: self.to_string(),
            dimensions: self.dimensions.clone(),
            filter: self.filter.clone(),
            raw_stock: self.stocking.raw_stock().to_vec(),
            resolved_stock: self.stocking.resolved_stock().clone(),
            assessment,
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Tank: {}", self.size)?;
        if let Some(filter) = &self.filter {
            write!(f, " with {}", filter.name)?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ResolvedStocking, StockingEntry};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn test_tank_accessors() {
        let tank = Tank::new("10g").select_filter("AquaClear 30").attach_stocking(
            Stocking::new().add("cardinal tetra", 5).add("panda cory", 5),
        );

        assert_eq!(
            tank.stocking().raw_stock(),
            &[
                StockingEntry {
                    name: "cardinal tetra".to_string(),
                    quantity: 5
                },
                StockingEntry {
                    name: "panda cory".to_string(),
                    quantity: 5
                },
            ]
        );
        assert_eq!(tank.length(), Some("20"));
        assert_eq!(tank.depth(), Some("10"));
        assert_eq!(tank.height(), Some("12"));
        assert_eq!(tank.ldh(), Some(("20", "10", "12")));
        assert_eq!(tank.filter().map(FilterSelection::pair), Some(("Aquaclear 30", "30")));
        assert_eq!(tank.to_string(), "<Tank: 10g with Aquaclear 30>");
    }

    #[test]
    fn test_unknown_size_leaves_dimensions_unset() {
        let tank = Tank::new("1000 gallon pond");
        assert_eq!(tank.ldh(), None);
        assert_eq!(tank.to_string(), "<Tank: 1000 gallon pond>");
    }

    #[test]
    fn test_unmatched_filter_uses_sentinel() {
        let tank = Tank::new("10g").select_filter("xyzzy");
        assert_eq!(tank.filter().unwrap().pair(), ("Filter Not Found", "0"));
    }

    #[test]
    fn test_from_parts() {
        let tank = Tank::from_parts(
            "55g",
            Some("fluval 307"),
            Some(Stocking::new().add("guppy", 3)),
        );
        assert_eq!(tank.ldh(), Some(("48", "13", "21")));
        assert_eq!(tank.filter().unwrap().pair(), ("Fluval 307", "70"));
        assert_eq!(tank.stocking().raw_stock().len(), 1);

        let bare = Tank::from_parts("55g", None, None);
        assert!(bare.filter().is_none());
        assert!(bare.stocking().is_empty());
    }

    #[test]
    fn test_policy_change_reselects_filter() {
        let tank = Tank::new("10g").select_filter("penguin");
        assert!(!tank.filter().unwrap().is_not_found());

        let strict = tank.with_policy(ResolutionPolicy {
            min_filter_score: 100,
            strictness: Strictness::Lenient,
        });
        assert!(strict.filter().unwrap().is_not_found());
    }

    #[derive(Default)]
    struct RecordingAdvisor {
        calls: Mutex<Vec<(ResolvedStocking, Option<TankDimensions>, FilterSelection)>>,
    }

    #[async_trait]
    impl StockingAdvisor for RecordingAdvisor {
        async fn assess(
            &self,
            stocking: &ResolvedStocking,
            dimensions: Option<&TankDimensions>,
            filter: &FilterSelection,
        ) -> Result<Assessment> {
            self.calls.lock().unwrap().push((
                stocking.clone(),
                dimensions.cloned(),
                filter.clone(),
            ));
            Ok(Assessment::Verdict {
                sentence: "Your aquarium filtration capacity is fine.".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_evaluate_passes_resolved_data() {
        let advisor = RecordingAdvisor::default();
        let tank = Tank::new("10g")
            .select_filter("AquaClear 30")
            .attach_stocking(Stocking::new().add("cardinal tetra", 5));

        let assessment = tank.evaluate_with(&advisor).await.unwrap();
        assert!(assessment.is_available());

        let calls = advisor.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (stocking, dimensions, filter) = &calls[0];
        assert_eq!(
            stocking.get("Cardinal Tetra (Paracheirodon axelrodi)"),
            Some(5)
        );
        assert_eq!(dimensions.as_ref().map(TankDimensions::ldh), Some(("20", "10", "12")));
        assert_eq!(filter.pair(), ("Aquaclear 30", "30"));
    }

    #[tokio::test]
    async fn test_lenient_policy_sends_sentinels() {
        let advisor = RecordingAdvisor::default();
        let tank = Tank::new("bathtub").attach_stocking(Stocking::new().add("guppy", 3));

        tank.evaluate_with(&advisor).await.unwrap();

        let calls = advisor.calls.lock().unwrap();
        assert_eq!(calls[0].1, None);
        assert!(calls[0].2.is_not_found());
    }

    #[tokio::test]
    async fn test_fail_fast_rejects_before_any_request() {
        let advisor = RecordingAdvisor::default();

        let unknown_size = Tank::new("bathtub")
            .with_policy(ResolutionPolicy::fail_fast())
            .select_filter("AquaClear 30");
        assert!(matches!(
            unknown_size.evaluate_with(&advisor).await,
            Err(AdvisorError::UnknownTankSize { .. })
        ));

        let bad_filter = Tank::new("10g")
            .with_policy(ResolutionPolicy::fail_fast())
            .select_filter("xyzzy");
        match bad_filter.evaluate().await {
            Err(AdvisorError::FilterNotFound { query }) => assert_eq!(query, "xyzzy"),
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(advisor.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_report_contains_both_stockings() {
        let tank = Tank::new("10g")
            .select_filter("AquaClear 30")
            .attach_stocking(Stocking::new().add("lemon_tetra", 12));
        let report = tank.report(None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["tank"], "<Tank: 10g with Aquaclear 30>");
        assert_eq!(json["raw_stock"][0]["name"], "lemon_tetra");
        assert_eq!(
            json["resolved_stock"]["Lemon Tetra (Hyphessobrycon pulchripinnis)"],
            12
        );
        assert!(json["assessment"].is_null());
    }
}
