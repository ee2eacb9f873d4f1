//! 引擎配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::record::InventoryRecord;

/// 調撥引擎參數配置
///
/// 引擎入口的顯式配置值，不使用任何全域狀態。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// 安全庫存係數
    /// - Some(m): 引擎以 合計銷售 × m 推導有效安全門檻（忽略記錄的 safety_stock）
    /// - None: 直接採用記錄的 safety_stock（預設）
    pub safety_stock_multiplier: Option<Decimal>,

    /// 是否強制 ND 優先於 RF
    /// - true: ND 來源先消耗接收需求，之後才考慮 RF 剩餘（預設）
    /// - false: 來源僅按剩餘量排序，不分類型
    pub enforce_nd_before_rf: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            safety_stock_multiplier: None,
            enforce_nd_before_rf: true,
        }
    }
}

impl EngineConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置安全庫存係數
    pub fn with_safety_stock_multiplier(mut self, multiplier: Decimal) -> Self {
        self.safety_stock_multiplier = Some(multiplier);
        self
    }

    /// 建構器模式：設置是否強制 ND 優先
    pub fn with_enforce_nd_before_rf(mut self, enforce: bool) -> Self {
        self.enforce_nd_before_rf = enforce;
        self
    }

    /// 計算記錄的有效安全門檻
    pub fn effective_safety_stock(&self, record: &InventoryRecord) -> Decimal {
        match self.safety_stock_multiplier {
            Some(multiplier) => record.combined_sales() * multiplier,
            None => record.safety_stock,
        }
    }
}
