//! 門市調撥建議計算示例

use anyhow::Result;
use rebalance::{suggest_transfers, EngineConfig, InventoryRecord, RpType};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== 門市調撥建議計算示例 ===\n");

    // 一個物料在同一組織單位下的三個門市快照
    let records = vec![
        // 倉庫門市：庫存充足，可作為 ND 調出來源
        InventoryRecord::new(
            "000000123456".to_string(),
            RpType::Nd,
            "WH-A".to_string(),
            "1001".to_string(),
            Decimal::from(150),
            Decimal::from(30),
        )
        .with_last_month_sales(Decimal::from(20)),
        // 緊急缺貨門市：零庫存但持續銷售
        InventoryRecord::new(
            "000000123456".to_string(),
            RpType::Nd,
            "WH-B".to_string(),
            "1001".to_string(),
            Decimal::ZERO,
            Decimal::from(30),
        )
        .with_last_month_sales(Decimal::from(60))
        .with_mtd_sales(Decimal::from(25)),
        // 潛在缺貨門市：庫存低於安全門檻
        InventoryRecord::new(
            "000000123456".to_string(),
            RpType::Rf,
            "WH-C".to_string(),
            "1001".to_string(),
            Decimal::from(12),
            Decimal::from(30),
        )
        .with_mtd_sales(Decimal::from(15)),
    ];

    println!("庫存快照:");
    for record in &records {
        println!(
            "  - 門市: {}, 庫存: {}, 安全: {}, 合計銷售: {}",
            record.site_id,
            record.net_stock,
            record.safety_stock,
            record.combined_sales()
        );
    }

    let result = suggest_transfers(records, EngineConfig::default())?;

    println!("\n調撥建議:");
    for suggestion in &result.suggestions {
        println!(
            "  - {} → {}: {} 件（{:?} / {:?}）",
            suggestion.from_site,
            suggestion.to_site,
            suggestion.quantity,
            suggestion.transfer_type,
            suggestion.receive_priority
        );
    }

    if !result.unsatisfied.is_empty() {
        println!("\n未滿足需求:");
        for unmet in &result.unsatisfied {
            println!("  - 門市 {}: 缺口 {}", unmet.site_id, unmet.residual_need);
        }
    }

    let summary = result.summary();
    println!("\n統計摘要 (JSON):");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
