//! # Rebalance Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod record;
pub mod suggestion;

// Re-export 主要類型
pub use config::EngineConfig;
pub use record::{InventoryRecord, RpType, ARTICLE_ID_LEN, SALES_UPPER_BOUND};
pub use suggestion::{ReceivePriority, TransferSuggestion, TransferType, UnsatisfiedDemand};

/// 調撥引擎錯誤類型
///
/// 所有變體皆屬於上游驗證契約違反（fatal）：
/// 引擎不重新清洗資料，發現契約違反時在分配開始前整批中止。
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("銷售數值超出上限: 物料 {article_id} 門市 {site_id} 欄位 {field} 數值 {value}")]
    SalesOutOfBounds {
        article_id: String,
        site_id: String,
        field: &'static str,
        value: rust_decimal::Decimal,
    },

    #[error("物料編號格式錯誤（應為 12 碼）: {0}")]
    MalformedArticleId(String),

    #[error("數量欄位為負值: 物料 {article_id} 門市 {site_id} 欄位 {field}")]
    NegativeQuantity {
        article_id: String,
        site_id: String,
        field: &'static str,
    },

    #[error("同一調撥群組內門市重複: 物料 {article_id} 組織單位 {org_unit_id} 門市 {site_id}")]
    DuplicateSite {
        article_id: String,
        org_unit_id: String,
        site_id: String,
    },

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TransferError>;
