//! 統計彙總

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rebalance_core::{ReceivePriority, TransferSuggestion, UnsatisfiedDemand};
use rust_decimal::Decimal;
use serde::Serialize;

/// 調撥統計摘要
///
/// 建議清單的下游唯讀視圖，供 KPI 看板與匯出報表使用。
#[derive(Debug, Clone, Serialize)]
pub struct TransferSummary {
    /// 建議總筆數
    pub total_suggestions: usize,

    /// 緊急缺貨建議筆數
    pub emergency_count: usize,

    /// 潛在缺貨建議筆數
    pub potential_count: usize,

    /// 建議調撥總量
    pub total_quantity: Decimal,

    /// 各調出門市的累計調出量
    pub outbound_by_site: BTreeMap<String, Decimal>,

    /// 未滿足接收方筆數
    pub unsatisfied_receivers: usize,

    /// 未滿足缺口總量
    pub unsatisfied_quantity: Decimal,

    /// 產出時間
    pub generated_at: NaiveDateTime,
}

impl TransferSummary {
    /// 由建議清單與未滿足清單彙總
    pub fn aggregate(
        suggestions: &[TransferSuggestion],
        unsatisfied: &[UnsatisfiedDemand],
    ) -> Self {
        let mut outbound_by_site: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut total_quantity = Decimal::ZERO;
        let mut emergency_count = 0;
        let mut potential_count = 0;

        for suggestion in suggestions {
            total_quantity += suggestion.quantity;
            *outbound_by_site
                .entry(suggestion.from_site.clone())
                .or_insert(Decimal::ZERO) += suggestion.quantity;

            match suggestion.receive_priority {
                ReceivePriority::EmergencyStockout => emergency_count += 1,
                ReceivePriority::PotentialStockout => potential_count += 1,
                ReceivePriority::Standard => {}
            }
        }

        let unsatisfied_quantity = unsatisfied
            .iter()
            .map(|u| u.residual_need)
            .sum::<Decimal>();

        Self {
            total_suggestions: suggestions.len(),
            emergency_count,
            potential_count,
            total_quantity,
            outbound_by_site,
            unsatisfied_receivers: unsatisfied.len(),
            unsatisfied_quantity,
            generated_at: chrono::Utc::now().naive_utc(),
        }
    }
}
