//! 分配引擎

use rust_decimal::Decimal;
use std::cmp::Ordering;

use pick_core::{
    AllocationConfig, AllocationOutcome, AllocationRecord, DemandLine, Ledger, MatchSource,
};

use crate::similarity::{SequenceRatio, SimilarityScorer};
use crate::{AllocationResult, AllocationWarning};

/// 分配引擎
///
/// 一次分配過程以 `&mut Ledger` 獨占庫存帳：
/// 需求行嚴格按輸入順序處理，後面的行只看得到前面消耗後的餘量。
pub struct Allocator {
    /// 分配配置
    config: AllocationConfig,

    /// 相似度評分器（可替換）
    scorer: Box<dyn SimilarityScorer>,
}

impl Allocator {
    /// 創建新的分配引擎（預設序列匹配比率評分）
    pub fn new(config: AllocationConfig) -> Self {
        Self {
            config,
            scorer: Box::new(SequenceRatio::new()),
        }
    }

    /// 建構器模式：設置相似度評分器
    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// 分配配置
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// 主分配入口
    ///
    /// 逐行處理需求清單並就地扣減庫存帳；
    /// 缺口是正常的可報告結果，不會因無法滿足而失敗。
    pub fn allocate(
        &self,
        ledger: &mut Ledger,
        demands: &[DemandLine],
    ) -> pick_core::Result<AllocationResult> {
        tracing::info!(
            "開始分配：需求 {} 行，庫存 {} 筆",
            demands.len(),
            ledger.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = AllocationResult::empty();

        // 防禦性修正：負數量條目歸零
        let clamped = ledger.clamp_negative();
        if clamped > 0 {
            tracing::warn!("已將 {} 筆負數量庫存條目歸零", clamped);
            result.add_warning(AllocationWarning::warning(
                String::new(),
                format!("{} 筆庫存條目數量為負，已歸零", clamped),
            ));
        }

        for line in demands {
            let outcome = self.allocate_line(ledger, line, &mut result.warnings);
            result.outcomes.push(outcome);
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());
        tracing::info!(
            "分配完成，耗時 {:?}，總缺口 {}",
            start_time.elapsed(),
            result.total_shortfall()
        );

        Ok(result)
    }

    /// 處理單一需求行
    fn allocate_line(
        &self,
        ledger: &mut Ledger,
        line: &DemandLine,
        warnings: &mut Vec<AllocationWarning>,
    ) -> AllocationOutcome {
        let product = line.trimmed_product();
        let requested = line.quantity.max(Decimal::ZERO);
        let mut remaining = requested;
        let mut records = Vec::new();

        tracing::info!("{}: 需求 {}", product, requested);

        // 空品名無從匹配，整行記為缺口
        if product.is_empty() {
            if requested > Decimal::ZERO {
                tracing::warn!("  品名為空，缺口 {}", remaining);
                warnings.push(AllocationWarning::warning(
                    line.product.clone(),
                    "需求行品名為空，無法匹配".to_string(),
                ));
            }
            return AllocationOutcome {
                demand_line_id: line.id,
                product: line.product.clone(),
                requested,
                records,
                shortfall: remaining,
            };
        }

        // --- 精確匹配 ---
        let available: Decimal = ledger
            .entries
            .iter()
            .filter(|e| e.product == product)
            .map(|e| e.quantity)
            .sum();

        let take = available.min(remaining);
        if take > Decimal::ZERO {
            // 扣減由前往後分攤到各同名條目，合計恰為 take
            let mut still = take;
            for entry in ledger.entries.iter_mut().filter(|e| e.product == product) {
                if still <= Decimal::ZERO {
                    break;
                }
                still -= entry.take(still);
            }

            records.push(AllocationRecord::new(
                line.id,
                product,
                take,
                MatchSource::Exact,
            ));
            remaining -= take;
            tracing::info!("  取得 {}（完全相符）", take);
        }

        // --- 替代匹配 ---
        if remaining > Decimal::ZERO {
            let (candidates, source) = self.fallback_candidates(ledger, product);

            for index in candidates {
                if remaining <= Decimal::ZERO {
                    break;
                }
                let entry = &mut ledger.entries[index];
                let taken = entry.take(remaining);
                if taken > Decimal::ZERO {
                    tracing::info!("  自「{}」取得 {}", entry.product, taken);
                    records.push(AllocationRecord::new(
                        line.id,
                        entry.product.clone(),
                        taken,
                        source,
                    ));
                    remaining -= taken;
                }
            }
        }

        if remaining > Decimal::ZERO {
            tracing::warn!("  缺口 {} 無法滿足", remaining);
        }

        AllocationOutcome {
            demand_line_id: line.id,
            product: line.product.clone(),
            requested,
            records,
            shortfall: remaining,
        }
    }

    /// 建立替代候選清單（索引指向庫存帳條目）
    ///
    /// 先以需求首詞做子串過濾；一個都不中時退回相似度排名，
    /// 按分數由高到低取前 K 名，同分按庫存帳原始順序。
    fn fallback_candidates(&self, ledger: &Ledger, product: &str) -> (Vec<usize>, MatchSource) {
        let pool: Vec<usize> = ledger
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_stock())
            .map(|(i, _)| i)
            .collect();

        if let Some(token) = product.split_whitespace().next() {
            let token = token.to_lowercase();
            let by_substring: Vec<usize> = pool
                .iter()
                .copied()
                .filter(|&i| ledger.entries[i].product.to_lowercase().contains(&token))
                .collect();

            if !by_substring.is_empty() {
                tracing::debug!("子串「{}」命中 {} 筆候選", token, by_substring.len());
                return (by_substring, MatchSource::Substring);
            }
        }

        let mut scored: Vec<(usize, f64)> = pool
            .into_iter()
            .map(|i| (i, self.scorer.score(product, &ledger.entries[i].product)))
            .collect();

        // 穩定排序：同分保持庫存帳原始順序
        scored.sort_by(|x, y| y.1.partial_cmp(&x.1).unwrap_or(Ordering::Equal));
        scored.truncate(self.config.similarity_top_k);

        tracing::debug!("相似度排名保留 {} 筆候選", scored.len());
        (
            scored.into_iter().map(|(i, _)| i).collect(),
            MatchSource::Similarity,
        )
    }
}
