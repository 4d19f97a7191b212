use crate::models::{Bid, ComparisonEntry, ComparisonRow};
use crate::service::key::build_key;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// 行内位置权重: 同一报价内保持原有顺序
const POSITION_WEIGHT: f64 = 100.0;
/// 报价列权重: 分数相同时靠前的报价略占优
const COLUMN_WEIGHT: f64 = 1000.0;

/// 累积中的行, entries 按报价列下标存放
struct RowAccumulator {
    key: String,
    category: String,
    description: String,
    order: f64,
    entries: Vec<Option<ComparisonEntry>>,
}

impl RowAccumulator {
    fn finish(self, bids: &[Bid]) -> ComparisonRow {
        let entries = self
            .entries
            .into_iter()
            .zip(bids)
            .map(|(entry, bid)| entry.unwrap_or_else(|| ComparisonEntry::absent(&bid.id)))
            .collect();

        ComparisonRow {
            key: self.key,
            category: self.category,
            description: self.description,
            order: self.order,
            entries,
        }
    }
}

/// 把多个报价的明细对齐成比价矩阵
///
/// 输入报价须已规范化并按 sort_order 排好序。每行的 `entries` 与 `bids` 顺序一致,
/// 缺少该费用的报价得到 `present = false` 的条目。
pub fn build_matrix(bids: &[Bid]) -> Vec<ComparisonRow> {
    let mut rows: IndexMap<String, RowAccumulator> = IndexMap::new();

    for (column, bid) in bids.iter().enumerate() {
        for (position, item) in bid.line_items.iter().enumerate() {
            let score = item.effective_sort_order
                + position as f64 / POSITION_WEIGHT
                + column as f64 / COLUMN_WEIGHT;
            let key = build_key(&item.category_text, &item.description_text);

            let row = rows.entry(key).or_insert_with_key(|key| RowAccumulator {
                key: key.clone(),
                category: item.category_text.clone(),
                description: item.description_text.clone(),
                order: score,
                entries: vec![None; bids.len()],
            });
            row.order = row.order.min(score);

            debug_assert!(item.amount.is_finite());
            row.entries[column] = Some(ComparisonEntry {
                bid_id: bid.id.clone(),
                present: true,
                amount: Some(item.amount),
                is_optional: item.is_optional,
                notes: item.notes.clone(),
            });
        }
    }

    let mut matrix: Vec<ComparisonRow> = rows
        .into_values()
        .map(|row| row.finish(bids))
        .collect();
    matrix.sort_by(compare_rows);

    tracing::debug!(
        "[Compare] matrix built: {} bids, {} rows",
        bids.len(),
        matrix.len()
    );
    matrix
}

fn compare_rows(a: &ComparisonRow, b: &ComparisonRow) -> Ordering {
    a.order
        .total_cmp(&b.order)
        .then_with(|| collate(&a.category, &b.category))
        .then_with(|| collate(&a.description, &b.description))
}

/// 近似 localeCompare: 先忽略大小写比较, 相同时小写在前
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
