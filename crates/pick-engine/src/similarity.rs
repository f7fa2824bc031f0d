//! 字串相似度評分

use std::collections::HashMap;

/// 相似度評分器
///
/// 回傳值落在 [0, 1]，同一組輸入必須得到同一分數；
/// 引擎只依賴排名與截斷，任何滿足此契約的度量皆可替換。
pub trait SimilarityScorer {
    /// 計算兩個字串的相似度分數
    fn score(&self, a: &str, b: &str) -> f64;
}

/// 序列匹配比率評分器
///
/// 比率 = 2M / (len(a) + len(b))，M 為兩字串所有最長公共
/// 匹配塊的長度總和。以字元為單位計算，多位元組品名可正確比對。
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRatio;

impl SequenceRatio {
    /// 創建評分器
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityScorer for SequenceRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let total_len = a.len() + b.len();
        if total_len == 0 {
            // 兩個空字串視為完全相同
            return 1.0;
        }

        let matched = matched_total(&a, &b);
        2.0 * matched as f64 / total_len as f64
    }
}

/// 所有匹配塊的長度總和
///
/// 從整段範圍開始找最長匹配塊，再遞迴處理塊左右兩側的剩餘範圍。
fn matched_total(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    total
}

/// 在 a[alo..ahi] 與 b[blo..bhi] 中找最長匹配塊
///
/// 多個同長塊時取 a 中最靠前、其次 b 中最靠前者。
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // j2len[j] = 以 a[..i] 與 b[..j] 結尾的公共後綴長度
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        for j in blo..bhi {
            if b[j] == a[i] {
                let k = if j > blo {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_j2len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = new_j2len;
    }

    (best_i, best_j, best_size)
}
