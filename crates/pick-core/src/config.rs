//! 分配配置模型

use serde::{Deserialize, Serialize};

/// 報表輸出形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportMode {
    /// 彙總模式：按實際取得品名分組加總，一品一列
    Aggregate,

    /// 明細模式：按需求行輸出，含分配明細與缺口
    Detail,
}

/// 分配引擎配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// 報表輸出形態
    pub report_mode: ReportMode,

    /// 相似度排名保留的候選數上限
    pub similarity_top_k: usize,
}

impl AllocationConfig {
    /// 創建預設配置（彙總報表，相似度候選取前 5）
    pub fn new() -> Self {
        Self {
            report_mode: ReportMode::Aggregate,
            similarity_top_k: 5,
        }
    }

    /// 建構器模式：設置報表形態
    pub fn with_report_mode(mut self, mode: ReportMode) -> Self {
        self.report_mode = mode;
        self
    }

    /// 建構器模式：設置相似度候選數上限
    pub fn with_similarity_top_k(mut self, top_k: usize) -> Self {
        self.similarity_top_k = top_k;
        self
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::new()
    }
}
