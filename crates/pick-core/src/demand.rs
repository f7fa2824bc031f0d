//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 需求行：發票上的一筆 (品名, 需求數量)
///
/// 載入後不可變；分配過程只讀取需求行，不修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandLine {
    /// 需求行ID
    pub id: Uuid,

    /// 品名
    pub product: String,

    /// 需求數量
    pub quantity: Decimal,

    /// 來源單據（如發票號）
    pub source_ref: Option<String>,
}

impl DemandLine {
    /// 創建新的需求行
    pub fn new(product: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product: product.into(),
            quantity,
            source_ref: None,
        }
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 去除首尾空白後的品名（分配匹配時使用）
    pub fn trimmed_product(&self) -> &str {
        self.product.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_demand_line() {
        let line = DemandLine::new("Bolt M6", Decimal::from(4));

        assert_eq!(line.product, "Bolt M6");
        assert_eq!(line.quantity, Decimal::from(4));
        assert!(line.source_ref.is_none());
    }

    #[test]
    fn test_demand_line_builder() {
        let line = DemandLine::new("Nut A", Decimal::from(3))
            .with_source_ref("INV-2024-001".to_string());

        assert_eq!(line.source_ref, Some("INV-2024-001".to_string()));
    }

    #[test]
    fn test_trimmed_product() {
        let line = DemandLine::new("  Bolt M6  ", Decimal::ONE);

        assert_eq!(line.trimmed_product(), "Bolt M6");
        // 原始品名保留未修剪的形態
        assert_eq!(line.product, "  Bolt M6  ");
    }
}
