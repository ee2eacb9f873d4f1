//! # Transfer Matching Engine
//!
//! 跨門市調撥建議計算引擎

pub mod allocation;
pub mod calculator;
pub mod classify;
pub mod grouping;
pub mod ranking;
pub mod summary;

// Re-export 主要類型
pub use calculator::TransferCalculator;
pub use classify::{ClassifiedRecord, Classifier, TransferRole};
pub use summary::TransferSummary;

/// 調撥計算結果
#[derive(Debug, Clone, serde::Serialize)]
pub struct TransferResult {
    /// 調撥建議（群組順序 × 群組內匹配順序）
    pub suggestions: Vec<rebalance_core::TransferSuggestion>,

    /// 未滿足的接收方
    pub unsatisfied: Vec<rebalance_core::UnsatisfiedDemand>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl TransferResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            suggestions: Vec::new(),
            unsatisfied: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 彙總統計摘要
    pub fn summary(&self) -> TransferSummary {
        TransferSummary::aggregate(&self.suggestions, &self.unsatisfied)
    }

    /// 檢查是否沒有任何建議
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
