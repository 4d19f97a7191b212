use crate::models::{Bid, BidSummary};

/// 明细合计; 合计不为正数时退回报价总额
///
/// 合计为 0 的明细视为没有可用的明细, 而不是免费运输。
pub fn derived_bid_total(bid: &Bid) -> f64 {
    let sum: f64 = bid.line_items.iter().map(|item| item.amount).sum();
    if sum > 0.0 && sum.is_finite() {
        return sum;
    }
    if !bid.line_items.is_empty() {
        tracing::warn!(
            "[Compare] Bid {}: line items sum to {}, using quoted price {}",
            bid.id,
            sum,
            bid.price
        );
    }
    bid.price
}

/// 单个报价的明细计数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCounts {
    pub total_services: usize,
    pub optional_count: usize,
}

pub fn per_bid_summary(bid: &Bid) -> ServiceCounts {
    ServiceCounts {
        total_services: bid.line_items.len(),
        optional_count: bid.optional_count(),
    }
}

pub fn summarize(bid: &Bid) -> BidSummary {
    let counts = per_bid_summary(bid);
    let derived_total = derived_bid_total(bid);
    debug_assert!(derived_total.is_finite());
    BidSummary {
        bid_id: bid.id.clone(),
        total_services: counts.total_services,
        optional_count: counts.optional_count,
        derived_total,
    }
}

/// 按推算总额从低到高排序, 相同总额保持输入顺序
pub fn rank_bids(bids: &[Bid]) -> Vec<BidSummary> {
    let mut summaries: Vec<BidSummary> = bids.iter().map(summarize).collect();
    summaries.sort_by(|a, b| a.derived_total.total_cmp(&b.derived_total));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NormalizedLineItem, Shipper};

    fn item(amount: f64, is_optional: bool) -> NormalizedLineItem {
        NormalizedLineItem {
            id: "li".to_string(),
            category_text: "Packing".to_string(),
            description_text: "Crate".to_string(),
            amount,
            is_optional,
            notes: None,
            effective_sort_order: 9999.0,
        }
    }

    fn bid(id: &str, price: f64, line_items: Vec<NormalizedLineItem>) -> Bid {
        Bid {
            id: id.to_string(),
            shipper: Shipper::default(),
            price,
            line_items,
        }
    }

    #[test]
    fn summary_counts_services_and_optionals() {
        let summary = summarize(&bid("a", 0.0, vec![item(100.0, false), item(50.0, true)]));
        assert_eq!(summary.total_services, 2);
        assert_eq!(summary.optional_count, 1);
        assert_eq!(summary.derived_total, 150.0);
    }

    #[test]
    fn per_bid_summary_names_its_counts() {
        let counts = per_bid_summary(&bid(
            "a",
            0.0,
            vec![item(10.0, true), item(20.0, false), item(30.0, false)],
        ));
        assert_eq!(
            counts,
            ServiceCounts {
                total_services: 3,
                optional_count: 1,
            }
        );
    }

    #[test]
    fn zero_sum_breakdown_falls_back_to_price() {
        assert_eq!(derived_bid_total(&bid("a", 1200.0, vec![item(0.0, false)])), 1200.0);
        assert_eq!(derived_bid_total(&bid("b", 800.0, vec![])), 800.0);
        assert_eq!(derived_bid_total(&bid("c", 300.0, vec![item(-20.0, false)])), 300.0);
    }

    #[test]
    fn ranking_is_cheapest_first_and_stable() {
        let bids = vec![
            bid("a", 900.0, vec![]),
            bid("b", 0.0, vec![item(400.0, false)]),
            bid("c", 900.0, vec![]),
        ];
        let ids: Vec<String> = rank_bids(&bids).into_iter().map(|s| s.bid_id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
