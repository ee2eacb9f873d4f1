//! 庫存快照模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 物料編號標準長度（12 碼，前補零）
pub const ARTICLE_ID_LEN: usize = 12;

/// 銷售數值上限（上游驗證器保證，引擎僅做契約檢查）
pub const SALES_UPPER_BOUND: i64 = 100_000;

/// 補貨類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RpType {
    /// ND 類型（調撥優先）
    Nd,
    /// RF 類型
    Rf,
    /// 其他（不可作為調出來源）
    Other,
}

/// 庫存快照記錄
///
/// 一筆記錄對應一個（物料, 門市）組合，由上游驗證器產出後唯讀。
/// 選填欄位缺值視為零。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 物料ID（12 碼標準格式）
    pub article_id: String,

    /// 補貨類型
    pub rp_type: RpType,

    /// 門市ID（群組內唯一）
    pub site_id: String,

    /// 組織單位ID（調撥邊界）
    pub org_unit_id: String,

    /// 現有庫存
    pub net_stock: Decimal,

    /// 安全庫存
    pub safety_stock: Decimal,

    /// 上月銷售
    pub last_month_sales: Decimal,

    /// 本月累計銷售
    pub mtd_sales: Decimal,

    /// 在途數量（已調撥未上架）
    pub pending_received: Decimal,
}

impl InventoryRecord {
    /// 創建新的庫存記錄
    pub fn new(
        article_id: String,
        rp_type: RpType,
        site_id: String,
        org_unit_id: String,
        net_stock: Decimal,
        safety_stock: Decimal,
    ) -> Self {
        Self {
            article_id,
            rp_type,
            site_id,
            org_unit_id,
            net_stock,
            safety_stock,
            last_month_sales: Decimal::ZERO,
            mtd_sales: Decimal::ZERO,
            pending_received: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置上月銷售
    pub fn with_last_month_sales(mut self, sales: Decimal) -> Self {
        self.last_month_sales = sales;
        self
    }

    /// 建構器模式：設置本月累計銷售
    pub fn with_mtd_sales(mut self, sales: Decimal) -> Self {
        self.mtd_sales = sales;
        self
    }

    /// 建構器模式：設置在途數量
    pub fn with_pending_received(mut self, qty: Decimal) -> Self {
        self.pending_received = qty;
        self
    }

    /// 合計銷售信號（上月 + 本月累計）
    pub fn combined_sales(&self) -> Decimal {
        self.last_month_sales + self.mtd_sales
    }

    /// 檢查是否有近期銷售活動
    pub fn has_recent_sales(&self) -> bool {
        self.last_month_sales > Decimal::ZERO || self.mtd_sales > Decimal::ZERO
    }

    /// 超出指定安全門檻的數量（可為負）
    pub fn surplus_over(&self, safety: Decimal) -> Decimal {
        self.net_stock - safety
    }

    /// 契約檢查：上游驗證器保證的範圍與格式
    ///
    /// 違反視為 fatal 輸入錯誤，在分配開始前整批中止。
    pub fn check_contract(&self) -> crate::Result<()> {
        if self.article_id.len() != ARTICLE_ID_LEN {
            return Err(crate::TransferError::MalformedArticleId(
                self.article_id.clone(),
            ));
        }

        let bound = Decimal::from(SALES_UPPER_BOUND);
        for (field, value) in [
            ("last_month_sales", self.last_month_sales),
            ("mtd_sales", self.mtd_sales),
        ] {
            if value > bound {
                return Err(crate::TransferError::SalesOutOfBounds {
                    article_id: self.article_id.clone(),
                    site_id: self.site_id.clone(),
                    field,
                    value,
                });
            }
        }

        for (field, value) in [
            ("net_stock", self.net_stock),
            ("safety_stock", self.safety_stock),
            ("last_month_sales", self.last_month_sales),
            ("mtd_sales", self.mtd_sales),
            ("pending_received", self.pending_received),
        ] {
            if value < Decimal::ZERO {
                return Err(crate::TransferError::NegativeQuantity {
                    article_id: self.article_id.clone(),
                    site_id: self.site_id.clone(),
                    field,
                });
            }
        }

        Ok(())
    }
}
