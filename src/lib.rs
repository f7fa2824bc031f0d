//! # StockPick
//!
//! 發票需求對有限庫存的分配系統：
//! 精確匹配優先，不足時以相近品名替代，缺口如實回報。

pub use pick_core::{
    AllocationConfig, AllocationOutcome, AllocationRecord, DemandLine, Ledger, LedgerEntry,
    MatchSource, PickError, ReportMode, Result,
};
pub use pick_engine::{
    AggregateRow, AllocationResult, AllocationWarning, Allocator, DetailRow, Report,
    ReportBuilder, SequenceRatio, SimilarityScorer, WarningSeverity,
};
pub use pick_io::{clean_quantity, load_demands, load_ledger, LoadOptions, Table};

/// 處理一張發票：載入需求、執行分配、建構報表
///
/// 庫存帳由呼叫方持有並跨發票累計扣減；
/// 發票表格載入失敗時庫存帳不受影響。
pub fn process_invoice(
    ledger: &mut Ledger,
    invoice: &Table,
    options: &LoadOptions,
    config: &AllocationConfig,
) -> Result<(AllocationResult, Report)> {
    let demands = load_demands(invoice, options)?;
    let allocator = Allocator::new(config.clone());
    let result = allocator.allocate(ledger, &demands)?;
    let report = ReportBuilder::build(&result, config.report_mode);
    Ok((result, report))
}
