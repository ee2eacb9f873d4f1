//! 優先級排序

use rebalance_core::{EngineConfig, InventoryRecord, ReceivePriority, TransferType};
use rust_decimal::Decimal;

use crate::classify::{ClassifiedRecord, TransferRole};

/// 排序後的接收方（含計算後的需求量）
#[derive(Debug, Clone)]
pub struct RankedReceiver {
    pub record: InventoryRecord,
    pub priority: ReceivePriority,
    pub need: Decimal,
}

/// 排序後的調出來源（含計算後的可調出量）
#[derive(Debug, Clone)]
pub struct RankedSource {
    pub record: InventoryRecord,
    pub transfer_type: TransferType,
    pub available: Decimal,
}

/// 優先級排序器
///
/// 群組內的匹配順序在此定案；相同輸入順序必得相同排序結果。
pub struct PriorityRanker;

impl PriorityRanker {
    /// 排序接收方
    ///
    /// 排序鍵：緊急程度 → 合計銷售降序 → 門市ID 升序。
    /// 需求量公式：
    /// - 緊急缺貨：max(上月銷售, 本月銷售) − 在途，下限 0
    /// - 潛在缺貨：有效安全門檻 − 現有庫存 − 在途，下限 0
    pub fn rank_receivers(
        receivers: &[ClassifiedRecord],
        config: &EngineConfig,
    ) -> Vec<RankedReceiver> {
        let mut ranked: Vec<RankedReceiver> = receivers
            .iter()
            .filter_map(|item| {
                let priority = match item.role {
                    TransferRole::EmergencyReceiver => ReceivePriority::EmergencyStockout,
                    TransferRole::PotentialReceiver => ReceivePriority::PotentialStockout,
                    _ => return None,
                };
                let need = Self::receiver_need(&item.record, priority, config);
                Some(RankedReceiver {
                    record: item.record.clone(),
                    priority,
                    need,
                })
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.record.combined_sales().cmp(&a.record.combined_sales()))
                .then_with(|| a.record.site_id.cmp(&b.record.site_id))
        });

        ranked
    }

    /// 排序調出來源
    ///
    /// 排序鍵：ND 先於 RF（可由配置關閉）→ 可調出量降序 → 門市ID 升序。
    /// 可調出量 = 現有庫存 − 有效安全門檻（分類保證為正）。
    pub fn rank_sources(sources: &[ClassifiedRecord], config: &EngineConfig) -> Vec<RankedSource> {
        let mut ranked: Vec<RankedSource> = sources
            .iter()
            .filter_map(|item| {
                let TransferRole::SurplusSource(transfer_type) = item.role else {
                    return None;
                };
                let available = item.record.surplus_over(config.effective_safety_stock(&item.record));
                Some(RankedSource {
                    record: item.record.clone(),
                    transfer_type,
                    available,
                })
            })
            .collect();

        let enforce_nd = config.enforce_nd_before_rf;
        ranked.sort_by(|a, b| {
            Self::type_rank(a.transfer_type, enforce_nd)
                .cmp(&Self::type_rank(b.transfer_type, enforce_nd))
                .then_with(|| b.available.cmp(&a.available))
                .then_with(|| a.record.site_id.cmp(&b.record.site_id))
        });

        ranked
    }

    fn receiver_need(
        record: &InventoryRecord,
        priority: ReceivePriority,
        config: &EngineConfig,
    ) -> Decimal {
        let gross = match priority {
            // 補足到可覆蓋觀察到的銷售量
            ReceivePriority::EmergencyStockout => {
                record.last_month_sales.max(record.mtd_sales)
            }
            // 補足到安全門檻
            ReceivePriority::PotentialStockout => {
                config.effective_safety_stock(record) - record.net_stock
            }
            ReceivePriority::Standard => Decimal::ZERO,
        };

        (gross - record.pending_received).max(Decimal::ZERO)
    }

    fn type_rank(transfer_type: TransferType, enforce_nd: bool) -> u8 {
        match (enforce_nd, transfer_type) {
            (false, _) => 0,
            (true, TransferType::Nd) => 0,
            (true, TransferType::Rf) => 1,
        }
    }
}
