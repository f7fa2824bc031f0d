//! 報表輸出

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use pick_core::ReportMode;

use crate::AllocationResult;

/// 明細分解的分隔符
const BREAKDOWN_SEPARATOR: &str = "; ";

/// 彙總列：一個實際取得的品項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// 實際取得的品名
    pub product: String,

    /// 取得數量合計
    pub quantity: Decimal,
}

/// 明細列：一筆需求行及其分配去向
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    /// 原始需求品名
    pub product: String,

    /// 需求數量
    pub requested: Decimal,

    /// 分配明細（「品名 × 數量」，按分配順序）
    pub breakdown: String,

    /// 取得數量合計
    pub taken: Decimal,

    /// 缺口
    pub shortfall: Decimal,
}

/// 報表（依配置輸出其一）
#[derive(Debug, Clone)]
pub enum Report {
    /// 彙總報表
    Aggregate(Vec<AggregateRow>),

    /// 明細報表
    Detail(Vec<DetailRow>),
}

/// 報表建構器
pub struct ReportBuilder;

impl ReportBuilder {
    /// 依配置形態建構報表
    pub fn build(result: &AllocationResult, mode: ReportMode) -> Report {
        match mode {
            ReportMode::Aggregate => Report::Aggregate(Self::aggregate(result)),
            ReportMode::Detail => Report::Detail(Self::detail(result)),
        }
    }

    /// 彙總模式：跨需求行按取得品名分組加總
    ///
    /// 分組順序為品名首次出現的順序。
    pub fn aggregate(result: &AllocationResult) -> Vec<AggregateRow> {
        let mut rows: Vec<AggregateRow> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in result.records() {
            match index.get(&record.product) {
                Some(&at) => rows[at].quantity += record.quantity,
                None => {
                    index.insert(record.product.clone(), rows.len());
                    rows.push(AggregateRow {
                        product: record.product.clone(),
                        quantity: record.quantity,
                    });
                }
            }
        }

        rows
    }

    /// 明細模式：一需求行一列，按原始順序
    pub fn detail(result: &AllocationResult) -> Vec<DetailRow> {
        result
            .outcomes
            .iter()
            .map(|outcome| {
                let breakdown = outcome
                    .records
                    .iter()
                    .map(|r| format!("{} × {}", r.product, r.quantity))
                    .collect::<Vec<_>>()
                    .join(BREAKDOWN_SEPARATOR);

                DetailRow {
                    product: outcome.product.clone(),
                    requested: outcome.requested,
                    breakdown,
                    taken: outcome.taken(),
                    shortfall: outcome.shortfall,
                }
            })
            .collect()
    }
}
