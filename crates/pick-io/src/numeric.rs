//! 數值正規化

use rust_decimal::Decimal;
use std::str::FromStr;

/// 將來源儲存格文字轉為數量
///
/// 容忍不同地區的寫法：去除內嵌空白（含不換行空格、千位分隔空白），
/// 小數點接受 `,` 與 `.` 兩種。無法解析時回傳 0，不報錯。
pub fn clean_quantity(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO)
}
