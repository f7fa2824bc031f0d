//! # Pick IO
//!
//! 載入邊界：表格欄位定位與數值正規化
//!
//! 檔案讀寫由外部載入器負責；本 crate 只把載入器交來的
//! 字串表格整理成引擎可用的庫存帳與需求清單。

pub mod numeric;
pub mod table;

pub use numeric::clean_quantity;
pub use table::{load_demands, load_ledger, LoadOptions, Table};
