//! # Rebalance
//!
//! 跨門市庫存調撥建議系統：由單一庫存快照計算「哪個門市調給哪個門市、
//! 調多少、多急」的建議清單。

pub use rebalance_calc::{TransferCalculator, TransferResult, TransferSummary};
pub use rebalance_core::{
    EngineConfig, InventoryRecord, ReceivePriority, Result, RpType, TransferError,
    TransferSuggestion, TransferType, UnsatisfiedDemand,
};

/// 便捷入口：以指定配置對一批記錄執行一次完整調撥計算
pub fn suggest_transfers(
    records: Vec<InventoryRecord>,
    config: EngineConfig,
) -> Result<TransferResult> {
    TransferCalculator::new(config).calculate(records)
}
