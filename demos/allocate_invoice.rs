//! 發票分配示例：載入庫存與發票，輸出彙總後的新發票

use stockpick::{
    load_ledger, process_invoice, AllocationConfig, LoadOptions, Report, Table,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== 發票分配示例 ===\n");

    // 庫存餘量（外部載入器交來的表格）
    let mut stock = Table::new(vec!["Product", "Quantity"]);
    stock.push_row(vec!["Bolt M6", "10"]);
    stock.push_row(vec!["Bolt M6 steel", "5"]);
    stock.push_row(vec!["Bolt M8", "20"]);
    stock.push_row(vec!["Nut A", "2,5"]);
    stock.push_row(vec!["Washer 8mm", "100"]);

    // 發票需求
    let mut invoice = Table::new(vec!["Product", "Quantity"]);
    invoice.push_row(vec!["Bolt M6", "12"]);
    invoice.push_row(vec!["Nut A", "4"]);
    invoice.push_row(vec!["Wascher 8mm", "6"]);

    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock, &options)?;
    println!("庫存載入：{} 筆，總量 {}\n", ledger.len(), ledger.total_quantity());

    let config = AllocationConfig::new();
    let (result, report) = process_invoice(&mut ledger, &invoice, &options, &config)?;

    println!("\n=== 新發票（彙總） ===");
    if let Report::Aggregate(rows) = report {
        for row in &rows {
            println!("  {} × {}", row.product, row.quantity);
        }
    }

    println!("\n總取得 {}，總缺口 {}", result.total_taken(), result.total_shortfall());
    println!("庫存餘量 {}", ledger.total_quantity());

    Ok(())
}
