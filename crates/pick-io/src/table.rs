//! 表格載入

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pick_core::{DemandLine, Ledger, LedgerEntry, PickError};

use crate::numeric::clean_quantity;

/// 外部載入器交來的字串表格
///
/// 表頭行已由載入器定位（來源檔案前面的雜訊行不在此出現）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// 欄位名稱
    pub headers: Vec<String>,

    /// 資料列（儲存格皆為原始文字）
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// 創建只有表頭的空表格
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 添加資料列
    pub fn push_row<S: Into<String>>(&mut self, row: Vec<S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// 依欄位名稱找欄位索引
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 取儲存格文字；列太短時視為空儲存格
    fn cell<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}

/// 載入選項
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// 品名欄位名稱
    pub product_column: String,

    /// 數量欄位名稱
    pub quantity_column: String,

    /// 數量欄位缺失時套用的預設數量
    pub default_quantity: Decimal,
}

impl LoadOptions {
    /// 創建預設選項（欄位 Product/Quantity，預設數量 1）
    pub fn new() -> Self {
        Self {
            product_column: "Product".to_string(),
            quantity_column: "Quantity".to_string(),
            default_quantity: Decimal::ONE,
        }
    }

    /// 建構器模式：設置品名欄位名稱
    pub fn with_product_column(mut self, name: impl Into<String>) -> Self {
        self.product_column = name.into();
        self
    }

    /// 建構器模式：設置數量欄位名稱
    pub fn with_quantity_column(mut self, name: impl Into<String>) -> Self {
        self.quantity_column = name.into();
        self
    }

    /// 建構器模式：設置預設數量
    pub fn with_default_quantity(mut self, quantity: Decimal) -> Self {
        self.default_quantity = quantity;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// 從表格載入庫存帳
///
/// 品名欄位缺失是該次載入的致命錯誤；數量欄位缺失時
/// 每列套用預設數量，儲存格無法解析時正規化為 0。
pub fn load_ledger(table: &Table, options: &LoadOptions) -> pick_core::Result<Ledger> {
    let product_at = table
        .column_index(&options.product_column)
        .ok_or_else(|| PickError::ColumnNotFound(options.product_column.clone()))?;
    let quantity_at = table.column_index(&options.quantity_column);

    if quantity_at.is_none() {
        tracing::warn!(
            "表格無「{}」欄，每列數量以 {} 計",
            options.quantity_column,
            options.default_quantity
        );
    }

    let mut ledger = Ledger::new();
    for row in &table.rows {
        let product = table.cell(row, product_at);
        let quantity = match quantity_at {
            Some(at) => clean_quantity(table.cell(row, at)),
            None => options.default_quantity,
        };
        ledger.push(LedgerEntry::new(product, quantity));
    }

    tracing::info!("庫存載入完成：{} 筆", ledger.len());
    Ok(ledger)
}

/// 從表格載入需求清單
///
/// 欄位規則與 [`load_ledger`] 相同；列的順序即分配處理順序。
pub fn load_demands(table: &Table, options: &LoadOptions) -> pick_core::Result<Vec<DemandLine>> {
    let product_at = table
        .column_index(&options.product_column)
        .ok_or_else(|| PickError::ColumnNotFound(options.product_column.clone()))?;
    let quantity_at = table.column_index(&options.quantity_column);

    if quantity_at.is_none() {
        tracing::warn!(
            "表格無「{}」欄，每行需求以 {} 計",
            options.quantity_column,
            options.default_quantity
        );
    }

    let demands: Vec<DemandLine> = table
        .rows
        .iter()
        .map(|row| {
            let product = table.cell(row, product_at);
            let quantity = match quantity_at {
                Some(at) => clean_quantity(table.cell(row, at)),
                None => options.default_quantity,
            };
            DemandLine::new(product, quantity)
        })
        .collect();

    tracing::info!("需求載入完成：{} 行", demands.len());
    Ok(demands)
}
