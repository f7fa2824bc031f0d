//! 集成測試

use rust_decimal::Decimal;
use stockpick::*;

fn stock_table(rows: &[(&str, &str)]) -> Table {
    let mut table = Table::new(vec!["Product", "Quantity"]);
    for (product, quantity) in rows {
        table.push_row(vec![*product, *quantity]);
    }
    table
}

#[test]
fn test_exact_allocation_depletes_ledger() {
    // 場景：單行需求，足量精確匹配

    // 1. 載入庫存
    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock_table(&[("Bolt M6", "10")]), &options).unwrap();

    // 2. 處理發票
    let invoice = stock_table(&[("Bolt M6", "4")]);
    let config = AllocationConfig::new();
    let (result, report) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    // 3. 驗證結果與餘量
    assert_eq!(result.outcomes[0].taken(), Decimal::from(4));
    assert_eq!(result.outcomes[0].shortfall, Decimal::ZERO);
    assert_eq!(ledger.entries[0].quantity, Decimal::from(6));

    match report {
        Report::Aggregate(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].product, "Bolt M6");
            assert_eq!(rows[0].quantity, Decimal::from(4));
        }
        Report::Detail(_) => panic!("預設配置應輸出彙總報表"),
    }
}

#[test]
fn test_substring_fallback_completes_line() {
    // 場景：精確量不足，以首詞子串替代補足
    let options = LoadOptions::new();
    let mut ledger = load_ledger(
        &stock_table(&[("Bolt M6", "2"), ("Bolt M6 steel", "5")]),
        &options,
    )
    .unwrap();

    let invoice = stock_table(&[("Bolt M6", "4")]);
    let config = AllocationConfig::new();
    let (result, _) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    let outcome = &result.outcomes[0];
    assert_eq!(outcome.taken(), Decimal::from(4));
    assert_eq!(outcome.shortfall, Decimal::ZERO);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[1].product, "Bolt M6 steel");
    assert_eq!(ledger.entries[1].quantity, Decimal::from(3));
}

#[test]
fn test_exhausted_stock_reports_shortfall() {
    // 場景：同名條目已耗盡且無其他候選，缺口如實回報
    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock_table(&[("Nut A", "0")]), &options).unwrap();

    let invoice = stock_table(&[("Nut A", "3")]);
    let config = AllocationConfig::new().with_report_mode(ReportMode::Detail);
    let (result, report) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    assert_eq!(result.outcomes[0].shortfall, Decimal::from(3));
    assert!(result.outcomes[0].records.is_empty());

    match report {
        Report::Detail(rows) => {
            assert_eq!(rows[0].shortfall, Decimal::from(3));
            assert_eq!(rows[0].breakdown, "");
        }
        Report::Aggregate(_) => panic!("配置要求明細報表"),
    }
}

#[test]
fn test_sequential_lines_compete_for_scarce_stock() {
    // 場景：兩行搶同一稀缺品，後行只分到前行剩餘
    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock_table(&[("Bolt M6", "5")]), &options).unwrap();

    let invoice = stock_table(&[("Bolt M6", "4"), ("Bolt M6", "4")]);
    let config = AllocationConfig::new();
    let (result, _) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    assert_eq!(result.outcomes[0].taken(), Decimal::from(4));
    assert_eq!(result.outcomes[1].taken(), Decimal::ONE);
    assert_eq!(result.outcomes[1].shortfall, Decimal::from(3));
}

#[test]
fn test_depletion_consistency_end_to_end() {
    // 帳量一致：期初 - 期末 = 全部取得量
    let options = LoadOptions::new();
    let mut ledger = load_ledger(
        &stock_table(&[
            ("Bolt M6", "10"),
            ("Bolt M6 steel", "5,5"),
            ("Nut A", "3"),
            ("Washer 8mm", "7"),
        ]),
        &options,
    )
    .unwrap();
    let initial_total = ledger.total_quantity();

    let invoice = stock_table(&[
        ("Bolt M6", "12"),
        ("Nut A", "1,5"),
        ("Gasket 8mm", "2"),
    ]);
    let config = AllocationConfig::new();
    let (result, _) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    assert_eq!(
        initial_total - ledger.total_quantity(),
        result.total_taken()
    );
}

#[test]
fn test_ledger_persists_across_invoices() {
    // 庫存帳載入一次，跨發票持續扣減
    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock_table(&[("Bolt M6", "6")]), &options).unwrap();
    let config = AllocationConfig::new();

    let first = stock_table(&[("Bolt M6", "4")]);
    let (result, _) = process_invoice(&mut ledger, &first, &options, &config).unwrap();
    assert_eq!(result.outcomes[0].shortfall, Decimal::ZERO);

    let second = stock_table(&[("Bolt M6", "4")]);
    let (result, _) = process_invoice(&mut ledger, &second, &options, &config).unwrap();
    // 第二張發票只看得到第一張扣減後的餘量
    assert_eq!(result.outcomes[0].taken(), Decimal::from(2));
    assert_eq!(result.outcomes[0].shortfall, Decimal::from(2));
}

#[test]
fn test_shape_error_leaves_loaded_state_intact() {
    // 發票表格欄位缺失是該次載入的錯誤，不影響已載入的庫存帳
    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock_table(&[("Bolt M6", "10")]), &options).unwrap();

    let bad_invoice = Table::new(vec!["Item", "Qty"]);
    let config = AllocationConfig::new();
    let error = process_invoice(&mut ledger, &bad_invoice, &options, &config);
    assert!(matches!(error, Err(PickError::ColumnNotFound(_))));

    // 庫存帳完好，後續發票照常處理
    assert_eq!(ledger.total_quantity(), Decimal::from(10));
    let invoice = stock_table(&[("Bolt M6", "4")]);
    let (result, _) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();
    assert_eq!(result.outcomes[0].taken(), Decimal::from(4));
}

#[test]
fn test_invoice_without_quantity_column() {
    // 發票缺數量欄時每行以預設數量 1 計
    let options = LoadOptions::new();
    let mut ledger = load_ledger(&stock_table(&[("Bolt M6", "10")]), &options).unwrap();

    let mut invoice = Table::new(vec!["Product"]);
    invoice.push_row(vec!["Bolt M6"]);
    invoice.push_row(vec!["Bolt M6"]);

    let config = AllocationConfig::new();
    let (result, _) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    assert_eq!(result.total_taken(), Decimal::from(2));
    assert_eq!(ledger.entries[0].quantity, Decimal::from(8));
}

#[test]
fn test_localized_columns_and_numerals() {
    // 來源欄名與數字寫法因地區而異，邊界層負責正規化
    let mut stock = Table::new(vec!["Товар", "Количество"]);
    stock.push_row(vec!["Болт М6", "1 200,5"]);
    let mut invoice = Table::new(vec!["Товар", "Количество"]);
    invoice.push_row(vec!["Болт М6", "200"]);

    let options = LoadOptions::new()
        .with_product_column("Товар")
        .with_quantity_column("Количество");
    let mut ledger = load_ledger(&stock, &options).unwrap();

    let config = AllocationConfig::new();
    let (result, _) = process_invoice(&mut ledger, &invoice, &options, &config).unwrap();

    assert_eq!(result.outcomes[0].taken(), Decimal::from(200));
    assert_eq!(ledger.entries[0].quantity, Decimal::new(10005, 1));
}
