//! 貪婪分配

use rebalance_core::{TransferSuggestion, UnsatisfiedDemand};
use rust_decimal::Decimal;

use crate::grouping::GroupKey;
use crate::ranking::{RankedReceiver, RankedSource};

/// 單群組分配結果
#[derive(Debug, Clone, Default)]
pub struct GroupOutcome {
    /// 調撥建議（按匹配順序）
    pub suggestions: Vec<TransferSuggestion>,
    /// 來源耗盡後仍有缺口的接收方
    pub unsatisfied: Vec<UnsatisfiedDemand>,
}

/// 分配器
///
/// 單群組內的貪婪匹配：依接收方優先序外層迭代，內層依來源排序扣減。
/// 每一步嚴格減少剩餘需求或剩餘可調出量，必然終止。
pub struct Allocator;

impl Allocator {
    /// 對單一群組執行分配
    ///
    /// 接收方可由多個來源湊足（拆單），單一來源可供應多個接收方（分流），
    /// 直到來源耗盡。絕不產生數量非正或同門市對調的建議。
    pub fn allocate(
        key: &GroupKey,
        mut sources: Vec<RankedSource>,
        receivers: Vec<RankedReceiver>,
    ) -> GroupOutcome {
        let mut outcome = GroupOutcome::default();

        for receiver in receivers {
            let mut remaining_need = receiver.need;
            if remaining_need <= Decimal::ZERO {
                continue;
            }

            for source in sources.iter_mut() {
                if remaining_need <= Decimal::ZERO {
                    break;
                }
                if source.available <= Decimal::ZERO {
                    continue;
                }
                if source.record.site_id == receiver.record.site_id {
                    continue;
                }

                let quantity = remaining_need.min(source.available);

                outcome.suggestions.push(TransferSuggestion {
                    article_id: key.article_id.clone(),
                    org_unit_id: key.org_unit_id.clone(),
                    from_site: source.record.site_id.clone(),
                    to_site: receiver.record.site_id.clone(),
                    quantity,
                    transfer_type: source.transfer_type,
                    receive_priority: receiver.priority,
                    from_site_stock: source.record.net_stock,
                    to_site_stock: receiver.record.net_stock,
                    to_site_need: receiver.need,
                });

                remaining_need -= quantity;
                source.available -= quantity;
            }

            if remaining_need > Decimal::ZERO {
                outcome.unsatisfied.push(UnsatisfiedDemand {
                    article_id: key.article_id.clone(),
                    org_unit_id: key.org_unit_id.clone(),
                    site_id: receiver.record.site_id.clone(),
                    priority: receiver.priority,
                    residual_need: remaining_need,
                });
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rebalance_core::{InventoryRecord, ReceivePriority, RpType, TransferType};

    fn key() -> GroupKey {
        GroupKey::new("000000001234".to_string(), "OM-01".to_string())
    }

    fn source(site: &str, transfer_type: TransferType, available: i64) -> RankedSource {
        let record = InventoryRecord::new(
            "000000001234".to_string(),
            match transfer_type {
                TransferType::Nd => RpType::Nd,
                TransferType::Rf => RpType::Rf,
            },
            site.to_string(),
            "OM-01".to_string(),
            Decimal::from(available + 10),
            Decimal::from(10),
        );
        RankedSource {
            record,
            transfer_type,
            available: Decimal::from(available),
        }
    }

    fn receiver(site: &str, priority: ReceivePriority, need: i64) -> RankedReceiver {
        let record = InventoryRecord::new(
            "000000001234".to_string(),
            RpType::Nd,
            site.to_string(),
            "OM-01".to_string(),
            Decimal::ZERO,
            Decimal::from(10),
        );
        RankedReceiver {
            record,
            priority,
            need: Decimal::from(need),
        }
    }

    #[test]
    fn test_single_source_single_receiver() {
        // 場景：來源可調出 50，緊急接收方需求 30
        let outcome = Allocator::allocate(
            &key(),
            vec![source("S001", TransferType::Nd, 50)],
            vec![receiver("S002", ReceivePriority::EmergencyStockout, 30)],
        );

        assert_eq!(outcome.suggestions.len(), 1);
        let suggestion = &outcome.suggestions[0];
        assert_eq!(suggestion.from_site, "S001");
        assert_eq!(suggestion.to_site, "S002");
        assert_eq!(suggestion.quantity, Decimal::from(30));
        assert_eq!(suggestion.transfer_type, TransferType::Nd);
        assert_eq!(suggestion.receive_priority, ReceivePriority::EmergencyStockout);
        assert!(outcome.unsatisfied.is_empty());
    }

    #[test]
    fn test_receiver_splits_across_sources() {
        // 場景：需求 80，兩個來源各 30 / 50，兩者皆被抽乾
        let outcome = Allocator::allocate(
            &key(),
            vec![
                source("S001", TransferType::Nd, 50),
                source("S002", TransferType::Nd, 30),
            ],
            vec![receiver("S003", ReceivePriority::EmergencyStockout, 80)],
        );

        assert_eq!(outcome.suggestions.len(), 2);
        let total: Decimal = outcome.suggestions.iter().map(|s| s.quantity).sum();
        assert_eq!(total, Decimal::from(80));
        assert!(outcome.unsatisfied.is_empty());
    }

    #[test]
    fn test_unmet_need_is_reported() {
        // 場景：需求 40，單一來源僅 10
        let outcome = Allocator::allocate(
            &key(),
            vec![source("S001", TransferType::Nd, 10)],
            vec![receiver("S002", ReceivePriority::PotentialStockout, 40)],
        );

        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].quantity, Decimal::from(10));
        assert_eq!(outcome.unsatisfied.len(), 1);
        assert_eq!(outcome.unsatisfied[0].residual_need, Decimal::from(30));
        assert_eq!(outcome.unsatisfied[0].site_id, "S002");
    }

    #[test]
    fn test_nd_consumed_before_rf() {
        // 場景：ND 20 恰好滿足需求 20，RF 100 不動
        let outcome = Allocator::allocate(
            &key(),
            vec![
                source("S001", TransferType::Nd, 20),
                source("S002", TransferType::Rf, 100),
            ],
            vec![receiver("S003", ReceivePriority::EmergencyStockout, 20)],
        );

        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].from_site, "S001");
        assert_eq!(outcome.suggestions[0].transfer_type, TransferType::Nd);
    }

    #[test]
    fn test_no_sources_reports_all_receivers() {
        let outcome = Allocator::allocate(
            &key(),
            vec![],
            vec![
                receiver("S001", ReceivePriority::EmergencyStockout, 20),
                receiver("S002", ReceivePriority::PotentialStockout, 5),
            ],
        );

        assert!(outcome.suggestions.is_empty());
        assert_eq!(outcome.unsatisfied.len(), 2);
    }

    #[test]
    fn test_source_fans_out_to_multiple_receivers() {
        let outcome = Allocator::allocate(
            &key(),
            vec![source("S001", TransferType::Nd, 100)],
            vec![
                receiver("S002", ReceivePriority::EmergencyStockout, 30),
                receiver("S003", ReceivePriority::PotentialStockout, 40),
            ],
        );

        assert_eq!(outcome.suggestions.len(), 2);
        assert_eq!(outcome.suggestions[0].to_site, "S002");
        assert_eq!(outcome.suggestions[1].to_site, "S003");
        assert_eq!(outcome.suggestions[1].quantity, Decimal::from(40));
    }

    #[test]
    fn test_self_transfer_is_skipped() {
        // 接收方與唯一來源同門市
        let outcome = Allocator::allocate(
            &key(),
            vec![source("S001", TransferType::Nd, 50)],
            vec![receiver("S001", ReceivePriority::EmergencyStockout, 30)],
        );

        assert!(outcome.suggestions.is_empty());
        assert_eq!(outcome.unsatisfied.len(), 1);
    }

    #[test]
    fn test_zero_need_receiver_is_skipped_silently() {
        let outcome = Allocator::allocate(
            &key(),
            vec![source("S001", TransferType::Nd, 50)],
            vec![receiver("S002", ReceivePriority::EmergencyStockout, 0)],
        );

        assert!(outcome.suggestions.is_empty());
        assert!(outcome.unsatisfied.is_empty());
    }

    #[test]
    fn test_urgent_receiver_drains_before_potential() {
        // 來源僅 30：緊急方先拿滿 30，潛在方全數落空
        let outcome = Allocator::allocate(
            &key(),
            vec![source("S001", TransferType::Nd, 30)],
            vec![
                receiver("S002", ReceivePriority::EmergencyStockout, 30),
                receiver("S003", ReceivePriority::PotentialStockout, 10),
            ],
        );

        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].to_site, "S002");
        assert_eq!(outcome.unsatisfied.len(), 1);
        assert_eq!(outcome.unsatisfied[0].site_id, "S003");
        assert_eq!(outcome.unsatisfied[0].residual_need, Decimal::from(10));
    }
}
