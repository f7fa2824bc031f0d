//! 缺口明細示例：庫存吃緊時的逐行分配報告

use stockpick::{
    load_ledger, process_invoice, AllocationConfig, LoadOptions, Report, ReportMode, Table,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== 缺口明細示例 ===\n");

    let mut stock = Table::new(vec!["Product", "Quantity"]);
    stock.push_row(vec!["Cable 3m", "2"]);
    stock.push_row(vec!["Cable 5m", "1"]);
    stock.push_row(vec!["Plug type C", "0"]);

    // 兩行需求競爭同一批線材
    let mut invoice = Table::new(vec!["Product", "Quantity"]);
    invoice.push_row(vec!["Cable 3m", "3"]);
    invoice.push_row(vec!["Cable 3m", "2"]);
    invoice.push_row(vec!["Plug type C", "1"]);

    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock, &options)?;

    let config = AllocationConfig::new().with_report_mode(ReportMode::Detail);
    let (result, report) = process_invoice(&mut ledger, &invoice, &options, &config)?;

    if let Report::Detail(rows) = report {
        println!("\n=== 分配明細 ===");
        for row in &rows {
            println!(
                "  {} | 需求 {} | 取得 {} | 缺口 {} | {}",
                row.product, row.requested, row.taken, row.shortfall, row.breakdown
            );
        }

        // 交給外部匯出器的序列化形態
        println!("\n=== JSON ===");
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }

    for warning in &result.warnings {
        println!("警告（{}）: {}", warning.product, warning.message);
    }

    Ok(())
}
