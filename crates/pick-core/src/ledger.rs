//! 庫存帳模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存帳條目
///
/// 品名不保證唯一：同名條目在精確匹配時會被合併計算。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// 品名（區分大小寫）
    pub product: String,

    /// 剩餘數量
    pub quantity: Decimal,
}

impl LedgerEntry {
    /// 創建新的庫存條目
    pub fn new(product: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }

    /// 檢查是否還有可用數量
    pub fn has_stock(&self) -> bool {
        self.quantity > Decimal::ZERO
    }

    /// 從該條目扣取數量，返回實際扣取量
    ///
    /// 扣取量不會超過剩餘數量，剩餘數量不會變成負值。
    pub fn take(&mut self, wanted: Decimal) -> Decimal {
        let available = self.quantity.max(Decimal::ZERO);
        let taken = available.min(wanted.max(Decimal::ZERO));
        self.quantity = available - taken;
        taken
    }
}

/// 庫存帳：一次分配過程中被逐行消耗的數量池
///
/// 條目順序有意義：相似度同分時按原始順序取捨。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// 庫存條目（按載入順序）
    pub entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// 創建空的庫存帳
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 從 (品名, 數量) 序列創建庫存帳
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(product, quantity)| LedgerEntry::new(product, quantity))
                .collect(),
        }
    }

    /// 添加條目
    pub fn push(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// 條目數量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全帳剩餘數量總和（負值條目以 0 計）
    pub fn total_quantity(&self) -> Decimal {
        self.entries
            .iter()
            .map(|e| e.quantity.max(Decimal::ZERO))
            .sum()
    }

    /// 將負數量條目歸零，返回修正的條目數
    pub fn clamp_negative(&mut self) -> usize {
        let mut clamped = 0;
        for entry in &mut self.entries {
            if entry.quantity < Decimal::ZERO {
                entry.quantity = Decimal::ZERO;
                clamped += 1;
            }
        }
        clamped
    }
}
