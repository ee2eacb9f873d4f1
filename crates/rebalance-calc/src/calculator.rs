//! 調撥主計算器

use rayon::prelude::*;
use rebalance_core::{EngineConfig, InventoryRecord};

use crate::allocation::{Allocator, GroupOutcome};
use crate::classify::Classifier;
use crate::grouping::{AllocationGroup, Grouper};
use crate::ranking::PriorityRanker;
use crate::TransferResult;

/// 調撥計算器
///
/// 引擎唯一入口：契約檢查 → 分類 → 分組 → 逐群組排序與分配。
/// 配置以顯式值傳入，無任何全域狀態。
pub struct TransferCalculator {
    config: EngineConfig,
}

impl TransferCalculator {
    /// 創建新的調撥計算器
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    ///
    /// 群組彼此獨立，逐群組平行分配；群組順序與群組內匹配順序固定，
    /// 相同輸入順序必得逐位元相同的建議清單。
    pub fn calculate(&self, records: Vec<InventoryRecord>) -> rebalance_core::Result<TransferResult> {
        tracing::info!("開始調撥計算：記錄 {} 筆", records.len());

        let start_time = std::time::Instant::now();

        // Step 1: 契約檢查（任一違反即整批中止，不產出部分結果）
        tracing::debug!("Step 1: 契約檢查");
        for record in &records {
            record.check_contract()?;
        }

        // Step 2: 分類
        tracing::debug!("Step 2: 記錄分類");
        let classified = Classifier::classify_all(records, &self.config);
        let source_count = classified.iter().filter(|c| c.role.is_source()).count();
        let receiver_count = classified.iter().filter(|c| c.role.is_receiver()).count();
        tracing::debug!(
            "調出來源 {} 筆，接收方 {} 筆，不參與 {} 筆",
            source_count,
            receiver_count,
            classified.len() - source_count - receiver_count
        );

        // Step 3: 分組（物料 × 組織單位）
        tracing::debug!("Step 3: 群組劃分");
        let groups = Grouper::partition(classified)?;
        tracing::debug!("分配群組數量: {}", groups.len());

        // Step 4: 逐群組排序與分配（平行，收集時保持群組順序）
        tracing::debug!("Step 4: 逐群組分配");
        let outcomes: Vec<GroupOutcome> = groups
            .par_iter()
            .map(|group| self.allocate_group(group))
            .collect();

        let mut result = TransferResult::empty();
        for outcome in outcomes {
            result.suggestions.extend(outcome.suggestions);
            result.unsatisfied.extend(outcome.unsatisfied);
        }
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("調撥計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "建議 {} 筆，未滿足接收方 {} 筆",
            result.suggestions.len(),
            result.unsatisfied.len()
        );

        Ok(result)
    }

    /// 單群組分配
    fn allocate_group(&self, group: &AllocationGroup) -> GroupOutcome {
        let sources = PriorityRanker::rank_sources(&group.sources, &self.config);
        let receivers = PriorityRanker::rank_receivers(&group.receivers, &self.config);

        tracing::debug!(
            "群組 ({}, {}): 來源 {} 筆，接收方 {} 筆",
            group.key.article_id,
            group.key.org_unit_id,
            sources.len(),
            receivers.len()
        );

        Allocator::allocate(&group.key, sources, receivers)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
