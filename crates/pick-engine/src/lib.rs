//! # Pick Engine
//!
//! 核心分配引擎：精確匹配、替代匹配與報表輸出

pub mod engine;
pub mod report;
pub mod similarity;

pub use engine::Allocator;
pub use report::{AggregateRow, DetailRow, Report, ReportBuilder};
pub use similarity::{SequenceRatio, SimilarityScorer};

use pick_core::AllocationOutcome;

/// 分配計算結果
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// 各需求行的分配結果（按輸入順序）
    pub outcomes: Vec<AllocationOutcome>,

    /// 警告信息
    pub warnings: Vec<AllocationWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl AllocationResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            outcomes: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: AllocationWarning) {
        self.warnings.push(warning);
    }

    /// 遍歷所有分配記錄（跨需求行，按產生順序）
    pub fn records(&self) -> impl Iterator<Item = &pick_core::AllocationRecord> {
        self.outcomes.iter().flat_map(|o| o.records.iter())
    }

    /// 所有需求行取得數量的總和
    pub fn total_taken(&self) -> rust_decimal::Decimal {
        self.records().map(|r| r.quantity).sum()
    }

    /// 所有需求行缺口的總和
    pub fn total_shortfall(&self) -> rust_decimal::Decimal {
        self.outcomes.iter().map(|o| o.shortfall).sum()
    }
}

/// 分配警告
#[derive(Debug, Clone)]
pub struct AllocationWarning {
    pub product: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl AllocationWarning {
    pub fn new(product: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            product,
            message,
            severity,
        }
    }

    pub fn info(product: String, message: String) -> Self {
        Self::new(product, message, WarningSeverity::Info)
    }

    pub fn warning(product: String, message: String) -> Self {
        Self::new(product, message, WarningSeverity::Warning)
    }

    pub fn error(product: String, message: String) -> Self {
        Self::new(product, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
