//! Protocol Driver: 模擬 AqAdvisor 表單的逐步提交流程。
//!
//! 遠端表單一次只接受一個魚種，並用隱藏欄位 `AlreadySelected` 記住已選的魚種。
//! 每一步都要把上一步回傳的 token 原封不動帶到下一個請求，
//! 最後一步之後的過濾能力句子才是完整的結果，因此所有步驟必須依序執行。

use crate::core::scraper::HtmlResponseParser;
use crate::domain::model::{
    Assessment, FilterSelection, ResolvedStocking, SubmissionStep, TankDimensions,
};
use crate::domain::ports::{ConfigProvider, ResponseParser, StockingAdvisor};
use crate::utils::error::{AdvisorError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use urlencoding::encode;

pub const DEFAULT_ENDPOINT: &str = "http://aqadvisor.com/AqAdvisor.php";

pub const UNREACHABLE_MESSAGE: &str = "Could not contact aqadvisor.com. Please try again later.";
pub const NO_VERDICT_MESSAGE: &str =
    "Could not complete call to AqAdvisor. Please try again later.";
pub const EMPTY_STOCKING_MESSAGE: &str =
    "Stocking plan is empty. Add at least one species before evaluating.";

/// 連線層錯誤 (含逾時、client 建立失敗) 轉成 `Unavailable`，其他錯誤原樣回傳。
pub(crate) fn recover_transport(err: AdvisorError, endpoint: &str) -> Result<Assessment> {
    match err {
        AdvisorError::Transport(e) => {
            tracing::warn!("❌ Could not contact {}: {}", endpoint, e);
            Ok(Assessment::Unavailable {
                reason: UNREACHABLE_MESSAGE.to_string(),
            })
        }
        other => Err(other),
    }
}

/// 組出單一步驟的請求 URL。
///
/// 參數順序固定，所有動態值以 `%20` 形式做 percent-encoding。
pub fn build_url(endpoint: &str, step: &SubmissionStep<'_>) -> String {
    let (length, depth, height) = step.dimensions.map(TankDimensions::ldh).unwrap_or(("", "", ""));
    let (filter_name, filter_rate) = step.filter.pair();
    let quantity = step.quantity.to_string();

    format!(
        "{endpoint}?AquTankName=\
         &AquListBoxTank=Choose\
         &AquTankLength={length}\
         &AquTankDepth={depth}\
         &AquTankHeight={height}\
         &AquListBoxFilter={filter_name}\
         &AquTextFilterRate={filter_rate}\
         &AquListBoxFilter2=Choose\
         &AquTextFilterRate2=N%2FA+\
         &FormSubmit=Update\
         &AquFilterString=\
         &AquListBoxChooser={species}\
         &AquTextBoxQuantity={quantity}\
         &AquTextBoxRemoveQuantity=\
         &AlreadySelected={already_selected}\
         &FilterMode=Display+all+species\
         &AqTempUnit=F\
         &AqVolUnit=gUS\
         &AqLengthUnit=inch\
         &AqSortType=cname\
         &FilterQuantity=2\
         &AqJuvMode=\
         &AqSpeciesWindowSize=short\
         &AqSearchMode=simple",
        endpoint = endpoint,
        length = encode(length),
        depth = encode(depth),
        height = encode(height),
        filter_name = encode(filter_name),
        filter_rate = encode(filter_rate),
        species = encode(step.species),
        quantity = encode(&quantity),
        already_selected = encode(step.already_selected),
    )
}

/// 單一步驟擷取到的內容
#[derive(Debug, Default)]
struct PageResult {
    verdict: Option<String>,
    session_token: Option<String>,
}

pub struct AqAdvisorClient<P: ResponseParser = HtmlResponseParser> {
    client: Client,
    endpoint: String,
    parser: P,
}

impl AqAdvisorClient<HtmlResponseParser> {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_parser(config, HtmlResponseParser::new())
    }
}

impl<P: ResponseParser> AqAdvisorClient<P> {
    pub fn with_parser<C: ConfigProvider>(config: &C, parser: P) -> Result<Self> {
        // 逾時視同連線失敗
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            parser,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn submit(&self, url: &str) -> Result<PageResult> {
        let response = self.client.get(url).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if response.status() != StatusCode::OK {
            return Err(AdvisorError::Protocol {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(PageResult {
            verdict: self.parser.extract_verdict(&body),
            session_token: self.parser.extract_session_token(&body),
        })
    }

    /// 依序提交每個魚種並回傳最後擷取到的結果句子。
    ///
    /// 連線失敗 (含逾時) 回傳 `Assessment::Unavailable`；
    /// 非 200 的回應回傳 `AdvisorError::Protocol`，不重試。
    pub async fn get_stocking_info(
        &self,
        stocking: &ResolvedStocking,
        dimensions: Option<&TankDimensions>,
        filter: &FilterSelection,
    ) -> Result<Assessment> {
        if stocking.is_empty() {
            tracing::warn!("No species to submit");
            return Ok(Assessment::Unavailable {
                reason: EMPTY_STOCKING_MESSAGE.to_string(),
            });
        }

        let total = stocking.len();
        let mut session_token = String::new();
        let mut verdict: Option<String> = None;

        for (index, (species, quantity)) in stocking.iter().enumerate() {
            let step = SubmissionStep {
                dimensions,
                filter,
                species,
                quantity,
                already_selected: &session_token,
            };
            let url = build_url(&self.endpoint, &step);

            tracing::info!("📡 Step {}/{}: {} x{}", index + 1, total, species, quantity);
            tracing::debug!("📡 Request URL: {}", url);

            let page = match self.submit(&url).await {
                Ok(page) => page,
                Err(e @ AdvisorError::Transport(_)) => return recover_transport(e, &self.endpoint),
                Err(e) => {
                    tracing::error!("❌ Step {}/{} failed: {}", index + 1, total, e);
                    return Err(e);
                }
            };

            if let Some(sentence) = page.verdict {
                tracing::debug!("Captured verdict at step {}", index + 1);
                verdict = Some(sentence);
            }

            session_token = match page.session_token {
                Some(token) => token,
                None => {
                    tracing::warn!("No AlreadySelected field in response, session token reset");
                    String::new()
                }
            };
            tracing::debug!("Session token: {:?}", session_token);
        }

        Ok(match verdict {
            Some(sentence) => {
                tracing::info!("✅ {}", sentence);
                Assessment::Verdict { sentence }
            }
            None => {
                tracing::warn!("Remote service returned no filtration verdict");
                Assessment::Unavailable {
                    reason: NO_VERDICT_MESSAGE.to_string(),
                }
            }
        })
    }
}

#[async_trait]
impl<P: ResponseParser> StockingAdvisor for AqAdvisorClient<P> {
    async fn assess(
        &self,
        stocking: &ResolvedStocking,
        dimensions: Option<&TankDimensions>,
        filter: &FilterSelection,
    ) -> Result<Assessment> {
        self.get_stocking_info(stocking, dimensions, filter).await
    }
}
