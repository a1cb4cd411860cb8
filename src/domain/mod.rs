// Domain layer: 純資料模型與對外介面 (ports)，不依賴 HTTP 或設定檔。

pub mod model;
pub mod ports;
