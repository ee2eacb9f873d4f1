//! 分配群組劃分

use std::collections::{HashMap, HashSet};

use rebalance_core::{Result, TransferError};

use crate::classify::ClassifiedRecord;

/// 分組鍵（物料 + 組織單位）
///
/// 調撥不跨組織單位，群組之間完全獨立。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub article_id: String,
    pub org_unit_id: String,
}

impl GroupKey {
    pub fn new(article_id: String, org_unit_id: String) -> Self {
        Self {
            article_id,
            org_unit_id,
        }
    }
}

/// 分配群組
///
/// 一個（物料, 組織單位）組合內的調出來源與接收方。
#[derive(Debug, Clone)]
pub struct AllocationGroup {
    pub key: GroupKey,
    pub sources: Vec<ClassifiedRecord>,
    pub receivers: Vec<ClassifiedRecord>,
}

impl AllocationGroup {
    fn new(key: GroupKey) -> Self {
        Self {
            key,
            sources: Vec::new(),
            receivers: Vec::new(),
        }
    }
}

/// 群組劃分器
pub struct Grouper;

impl Grouper {
    /// 將已分類記錄劃分為獨立分配群組
    ///
    /// 群組輸出順序為（物料, 組織單位）首次出現的順序，輸入順序固定則輸出固定。
    /// 同群組內門市重複屬上游契約違反，整批中止。
    /// 沒有任何接收方的群組不可能產生建議，直接剔除；
    /// 有接收方但沒有來源的群組保留，由分配器回報未滿足需求。
    pub fn partition(classified: Vec<ClassifiedRecord>) -> Result<Vec<AllocationGroup>> {
        let mut groups: Vec<AllocationGroup> = Vec::new();
        let mut index: HashMap<GroupKey, usize> = HashMap::new();
        let mut seen_sites: HashMap<GroupKey, HashSet<String>> = HashMap::new();

        for item in classified {
            let key = GroupKey::new(
                item.record.article_id.clone(),
                item.record.org_unit_id.clone(),
            );

            let sites = seen_sites.entry(key.clone()).or_default();
            if !sites.insert(item.record.site_id.clone()) {
                return Err(TransferError::DuplicateSite {
                    article_id: key.article_id,
                    org_unit_id: key.org_unit_id,
                    site_id: item.record.site_id,
                });
            }

            let group_idx = match index.get(&key) {
                Some(&idx) => idx,
                None => {
                    let idx = groups.len();
                    groups.push(AllocationGroup::new(key.clone()));
                    index.insert(key, idx);
                    idx
                }
            };

            if item.role.is_source() {
                groups[group_idx].sources.push(item);
            } else if item.role.is_receiver() {
                groups[group_idx].receivers.push(item);
            }
            // Ineligible 記錄只參與門市重複檢查
        }

        Ok(groups
            .into_iter()
            .filter(|group| !group.receivers.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use rebalance_core::{EngineConfig, InventoryRecord, RpType};
    use rust_decimal::Decimal;

    fn record(article: &str, om: &str, site: &str, net_stock: i64, sales: i64) -> InventoryRecord {
        InventoryRecord::new(
            article.to_string(),
            RpType::Nd,
            site.to_string(),
            om.to_string(),
            Decimal::from(net_stock),
            Decimal::from(10),
        )
        .with_last_month_sales(Decimal::from(sales))
    }

    fn partition(records: Vec<InventoryRecord>) -> Result<Vec<AllocationGroup>> {
        let config = EngineConfig::default();
        Grouper::partition(Classifier::classify_all(records, &config))
    }

    #[test]
    fn test_partition_by_article_and_org_unit() {
        let groups = partition(vec![
            record("000000000001", "OM-01", "S001", 100, 5),
            record("000000000001", "OM-01", "S002", 0, 5),
            record("000000000001", "OM-02", "S001", 0, 5),
            record("000000000002", "OM-01", "S001", 0, 5),
        ])
        .unwrap();

        // OM-02 與第二個物料各自成組（只有接收方仍保留）
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key.org_unit_id, "OM-01");
        assert_eq!(groups[0].sources.len(), 1);
        assert_eq!(groups[0].receivers.len(), 1);
        assert!(groups[1].sources.is_empty());
        assert!(groups[2].sources.is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let groups = partition(vec![
            record("000000000002", "OM-01", "S001", 0, 5),
            record("000000000001", "OM-01", "S001", 0, 5),
            record("000000000002", "OM-01", "S002", 100, 5),
        ])
        .unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key.article_id, "000000000002");
        assert_eq!(groups[1].key.article_id, "000000000001");
    }

    #[test]
    fn test_group_without_receivers_is_dropped() {
        let groups = partition(vec![
            record("000000000001", "OM-01", "S001", 100, 5),
            record("000000000001", "OM-01", "S002", 200, 5),
        ])
        .unwrap();

        assert!(groups.is_empty());
    }

    #[test]
    fn test_duplicate_site_in_group_is_contract_violation() {
        let err = partition(vec![
            record("000000000001", "OM-01", "S001", 100, 5),
            record("000000000001", "OM-01", "S001", 0, 5),
        ])
        .unwrap_err();

        assert!(matches!(err, TransferError::DuplicateSite { .. }));
    }

    #[test]
    fn test_same_site_in_different_groups_is_allowed() {
        let groups = partition(vec![
            record("000000000001", "OM-01", "S001", 0, 5),
            record("000000000001", "OM-02", "S001", 0, 5),
        ])
        .unwrap();

        assert_eq!(groups.len(), 2);
    }
}
