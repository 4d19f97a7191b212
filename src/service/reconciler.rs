use crate::models::{Bid, BidComparison, DisplayRow, ReconcileOptions};
use crate::service::{aggregator, filter, grouping, matrix};

/// 对齐 → 过滤 → 分组
///
/// 每次调用只依赖传入参数, 相同输入 (包括报价顺序) 总是得到相同结果。
/// 调用方须保证同一次调用中报价 id 不重复。
pub fn reconcile(bids: &[Bid], options: &ReconcileOptions) -> Vec<DisplayRow> {
    let rows = matrix::build_matrix(bids);
    let rows = filter::apply_filters(rows, options);
    grouping::project(rows, options.group_by_category)
}

/// 比价视图所需的全部数据: 展示序列 + 各报价汇总 (按输入顺序)
pub fn compare(bids: &[Bid], options: &ReconcileOptions) -> BidComparison {
    BidComparison {
        rows: reconcile(bids, options),
        summaries: bids.iter().map(aggregator::summarize).collect(),
    }
}

/// 持有视图开关的比价服务
#[derive(Debug, Clone, Default)]
pub struct ComparisonService {
    options: ReconcileOptions,
}

impl ComparisonService {
    pub fn new(options: ReconcileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    pub fn reconcile(&self, bids: &[Bid]) -> Vec<DisplayRow> {
        reconcile(bids, &self.options)
    }

    pub fn compare(&self, bids: &[Bid]) -> BidComparison {
        let comparison = compare(bids, &self.options);
        tracing::info!(
            "[Compare] {} bids compared, {} display rows",
            bids.len(),
            comparison.rows.len()
        );
        comparison
    }
}
