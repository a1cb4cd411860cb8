pub mod protocol;
pub mod resolver;
pub mod scraper;
pub mod stocking;
pub mod tank;

pub use crate::domain::model::{Assessment, FilterSelection, ResolvedStocking, TankDimensions};
pub use crate::domain::ports::{ConfigProvider, ResponseParser, StockingAdvisor};
pub use crate::utils::error::Result;
