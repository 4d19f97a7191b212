use crate::models::BidSummary;
use serde::{Deserialize, Serialize};

/// 视图上的三个开关
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReconcileOptions {
    #[serde(alias = "include_optional")]
    pub include_optional: bool,
    #[serde(alias = "only_differences")]
    pub only_differences: bool,
    #[serde(alias = "group_by_category")]
    pub group_by_category: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            include_optional: true,
            only_differences: false,
            group_by_category: false,
        }
    }
}

/// 某报价在一行中的取值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub bid_id: String,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub is_optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ComparisonEntry {
    pub fn absent(bid_id: &str) -> Self {
        Self {
            bid_id: bid_id.to_string(),
            present: false,
            amount: None,
            is_optional: false,
            notes: None,
        }
    }

    /// 去掉首尾空白后的备注, 缺失视为空串
    pub fn notes_text(&self) -> &str {
        self.notes.as_deref().map(str::trim).unwrap_or("")
    }
}

/// 对齐后的一行: 同一条费用在所有报价中的取值
///
/// `entries` 与输入报价列表一一对应, 顺序一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub key: String,
    pub category: String,
    pub description: String,
    pub order: f64,
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonRow {
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|e| e.present).count()
    }

    /// 出现该费用的报价中的 (最低, 最高) 金额
    pub fn amount_range(&self) -> Option<(f64, f64)> {
        self.present_amounts().fold(None, |acc, amount| match acc {
            None => Some((amount, amount)),
            Some((lo, hi)) => Some((lo.min(amount), hi.max(amount))),
        })
    }

    /// 金额最低的报价 id (并列时全部返回, 按报价顺序)
    pub fn lowest_bid_ids(&self) -> Vec<&str> {
        let Some((lowest, _)) = self.amount_range() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| e.present && e.amount == Some(lowest))
            .map(|e| e.bid_id.as_str())
            .collect()
    }

    fn present_amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries
            .iter()
            .filter(|e| e.present)
            .filter_map(|e| e.amount)
    }
}

/// 展示序列中的一项: 分类标题或费用行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DisplayRow {
    Category { key: String, category: String },
    Item { row: ComparisonRow },
}

impl DisplayRow {
    pub fn as_item(&self) -> Option<&ComparisonRow> {
        match self {
            DisplayRow::Item { row } => Some(row),
            DisplayRow::Category { .. } => None,
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, DisplayRow::Category { .. })
    }
}

/// 比价视图的完整结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidComparison {
    pub rows: Vec<DisplayRow>,
    pub summaries: Vec<BidSummary>,
}
