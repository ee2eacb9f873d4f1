//! 記錄分類

use rebalance_core::{EngineConfig, InventoryRecord, TransferType};
use rust_decimal::Decimal;

/// 調撥角色
///
/// 每筆記錄恰好一個角色，分類後不再變更。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRole {
    /// 緊急缺貨接收方（零庫存且有近期銷售）
    EmergencyReceiver,
    /// 潛在缺貨接收方（庫存低於安全門檻且有近期銷售）
    PotentialReceiver,
    /// 調出來源（庫存高於安全門檻，ND/RF 類型）
    SurplusSource(TransferType),
    /// 不參與匹配，僅保留供報表使用
    Ineligible,
}

impl TransferRole {
    /// 檢查是否為接收方角色
    pub fn is_receiver(&self) -> bool {
        matches!(
            self,
            TransferRole::EmergencyReceiver | TransferRole::PotentialReceiver
        )
    }

    /// 檢查是否為調出來源角色
    pub fn is_source(&self) -> bool {
        matches!(self, TransferRole::SurplusSource(_))
    }
}

/// 已分類記錄
#[derive(Debug, Clone)]
pub struct ClassifiedRecord {
    pub record: InventoryRecord,
    pub role: TransferRole,
}

/// 記錄分類器
///
/// 單筆記錄的純函數，不依賴跨記錄狀態。
pub struct Classifier;

impl Classifier {
    /// 分類單筆記錄
    ///
    /// 規則按優先序評估，首個命中生效：
    /// 1. 緊急缺貨接收方：net_stock == 0 且有近期銷售
    /// 2. 潛在缺貨接收方：0 < net_stock <= 安全門檻 且有近期銷售
    /// 3. 調出來源：net_stock > 安全門檻 且補貨類型為 ND/RF
    /// 4. 其餘不參與匹配
    pub fn classify(record: &InventoryRecord, config: &EngineConfig) -> TransferRole {
        let safety = config.effective_safety_stock(record);

        if record.net_stock == Decimal::ZERO && record.has_recent_sales() {
            return TransferRole::EmergencyReceiver;
        }

        if record.net_stock > Decimal::ZERO
            && record.net_stock <= safety
            && record.has_recent_sales()
        {
            return TransferRole::PotentialReceiver;
        }

        if record.net_stock > safety {
            if let Ok(transfer_type) = TransferType::try_from(record.rp_type) {
                return TransferRole::SurplusSource(transfer_type);
            }
        }

        TransferRole::Ineligible
    }

    /// 分類整批記錄，保持輸入順序
    pub fn classify_all(
        records: Vec<InventoryRecord>,
        config: &EngineConfig,
    ) -> Vec<ClassifiedRecord> {
        records
            .into_iter()
            .map(|record| {
                let role = Self::classify(&record, config);
                ClassifiedRecord { record, role }
            })
            .collect()
    }
}
