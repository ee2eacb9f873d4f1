//! 調撥建議模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::RpType;

/// 調撥類型（由調出來源的補貨類型繼承）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferType {
    /// ND 類型調撥
    Nd,
    /// RF 類型調撥
    Rf,
}

impl TryFrom<RpType> for TransferType {
    type Error = crate::TransferError;

    fn try_from(rp_type: RpType) -> Result<Self, Self::Error> {
        match rp_type {
            RpType::Nd => Ok(TransferType::Nd),
            RpType::Rf => Ok(TransferType::Rf),
            RpType::Other => Err(crate::TransferError::Other(
                "Other 類型不可作為調出來源".to_string(),
            )),
        }
    }
}

/// 接收優先級
///
/// 排序即匹配順序：緊急缺貨 > 潛在缺貨 > 一般補貨。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReceivePriority {
    /// 緊急缺貨（零庫存且有近期銷售）
    EmergencyStockout,
    /// 潛在缺貨（庫存低於安全門檻且有近期銷售）
    PotentialStockout,
    /// 一般補貨
    Standard,
}

/// 調撥建議
///
/// 由分配器一次性產出，之後不再變更，直接交付匯出/報表協作方。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSuggestion {
    /// 物料ID
    pub article_id: String,

    /// 組織單位ID
    pub org_unit_id: String,

    /// 調出門市
    pub from_site: String,

    /// 接收門市
    pub to_site: String,

    /// 建議調撥數量（恆為正）
    pub quantity: Decimal,

    /// 調撥類型
    pub transfer_type: TransferType,

    /// 接收優先級
    pub receive_priority: ReceivePriority,

    /// 調出門市現有庫存（報表用）
    pub from_site_stock: Decimal,

    /// 接收門市現有庫存（報表用）
    pub to_site_stock: Decimal,

    /// 接收門市需求總量（報表用）
    pub to_site_need: Decimal,
}

/// 未滿足需求
///
/// 群組內調出來源耗盡後仍有缺口的接收方，屬正常輸出而非錯誤。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsatisfiedDemand {
    /// 物料ID
    pub article_id: String,

    /// 組織單位ID
    pub org_unit_id: String,

    /// 接收門市
    pub site_id: String,

    /// 接收優先級
    pub priority: ReceivePriority,

    /// 剩餘缺口數量
    pub residual_need: Decimal,
}
