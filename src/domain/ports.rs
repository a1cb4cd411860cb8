use crate::domain::model::{
    Assessment, FilterSelection, ResolutionPolicy, ResolvedStocking, TankDimensions,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn policy(&self) -> ResolutionPolicy;
}

/// 從遠端 HTML 取出結果的窄介面，與 HTTP 傳輸分開以便替換與測試。
pub trait ResponseParser: Send + Sync {
    /// "Your aquarium filtration..." 句子；沒有則回傳 `None`
    fn extract_verdict(&self, body: &str) -> Option<String>;
    /// 隱藏欄位 `AlreadySelected` 的值
    fn extract_session_token(&self, body: &str) -> Option<String>;
}

#[async_trait]
pub trait StockingAdvisor: Send + Sync {
    async fn assess(
        &self,
        stocking: &ResolvedStocking,
        dimensions: Option<&TankDimensions>,
        filter: &FilterSelection,
    ) -> Result<Assessment>;
}
