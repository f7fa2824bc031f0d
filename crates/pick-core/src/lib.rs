//! # Pick Core
//!
//! 核心資料模型與類型定義

pub mod allocation;
pub mod config;
pub mod demand;
pub mod ledger;

// Re-export 主要類型
pub use allocation::{AllocationOutcome, AllocationRecord, MatchSource};
pub use config::{AllocationConfig, ReportMode};
pub use demand::DemandLine;
pub use ledger::{Ledger, LedgerEntry};

/// 分配錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PickError {
    #[error("找不到欄位: {0}")]
    ColumnNotFound(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PickError>;
