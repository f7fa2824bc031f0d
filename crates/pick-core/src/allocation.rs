//! 分配結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 匹配來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchSource {
    /// 品名完全相符
    Exact,
    /// 子串匹配（品名包含需求首詞）
    Substring,
    /// 相似度排名
    Similarity,
}

impl MatchSource {
    /// 檢查是否為替代匹配（非完全相符）
    pub fn is_fallback(&self) -> bool {
        !matches!(self, MatchSource::Exact)
    }
}

/// 分配記錄：一筆需求行從某個庫存來源實際取得的數量
///
/// 一個需求行對應零到多筆分配記錄；記錄創建後不再修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// 所屬需求行ID
    pub demand_line_id: Uuid,

    /// 實際取得的品名（可能與需求品名不同）
    pub product: String,

    /// 取得數量
    pub quantity: Decimal,

    /// 匹配來源
    pub source: MatchSource,
}

impl AllocationRecord {
    /// 創建新的分配記錄
    pub fn new(
        demand_line_id: Uuid,
        product: impl Into<String>,
        quantity: Decimal,
        source: MatchSource,
    ) -> Self {
        Self {
            demand_line_id,
            product: product.into(),
            quantity,
            source,
        }
    }
}

/// 需求行的分配結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// 需求行ID
    pub demand_line_id: Uuid,

    /// 原始需求品名
    pub product: String,

    /// 需求數量
    pub requested: Decimal,

    /// 本行的分配記錄（按分配產生順序）
    pub records: Vec<AllocationRecord>,

    /// 未滿足的缺口 = max(0, 需求 - 取得)
    pub shortfall: Decimal,
}

impl AllocationOutcome {
    /// 各分配記錄取得數量的總和
    pub fn taken(&self) -> Decimal {
        self.records.iter().map(|r| r.quantity).sum()
    }

    /// 檢查需求是否完全滿足
    pub fn is_satisfied(&self) -> bool {
        self.shortfall <= Decimal::ZERO
    }

    /// 檢查是否用到替代匹配
    pub fn used_fallback(&self) -> bool {
        self.records.iter().any(|r| r.source.is_fallback())
    }
}
