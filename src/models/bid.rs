use crate::models::line_item::{
    de_loose_id, de_loose_number, de_null_as_default, NormalizedLineItem, RawLineItem,
};
use serde::{Deserialize, Serialize};

/// 承运方信息 (仅用于展示)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipper {
    #[serde(default, alias = "shipper_name")]
    pub shipper_name: Option<String>,
    #[serde(default, alias = "branch_name")]
    pub branch_name: Option<String>,
}

/// 原始报价 (数据层读出)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBid {
    #[serde(deserialize_with = "de_loose_id")]
    pub id: String,
    #[serde(flatten)]
    pub shipper: Shipper,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub line_items: Vec<RawLineItem>,
}

/// 规范化后的报价
///
/// `line_items` 已过滤掉停用明细并按 `sort_order` 稳定排序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub shipper: Shipper,
    /// 报价总额
    pub price: f64,
    pub line_items: Vec<NormalizedLineItem>,
}

/// 单个报价的汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidSummary {
    pub bid_id: String,
    pub total_services: usize,
    pub optional_count: usize,
    pub derived_total: f64,
}

impl Bid {
    /// 从原始报价构建: 过滤停用明细 → 按 sort_order 稳定排序 → 逐条规范化
    pub fn from_raw(raw: RawBid) -> Self {
        let price = raw.price.filter(|p| p.is_finite()).unwrap_or(0.0);
        Self {
            id: raw.id,
            shipper: raw.shipper,
            price,
            line_items: crate::service::normalizer::normalize_line_items(raw.line_items),
        }
    }

    pub fn optional_count(&self) -> usize {
        self.line_items.iter().filter(|item| item.is_optional).count()
    }
}
