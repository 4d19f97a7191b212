use crate::models::{DescriptionField, NormalizedLineItem, RawLineItem};

/// 未设置 sort_order 的明细排在最后
pub const DEFAULT_SORT_ORDER: f64 = 9999.0;

/// 多段描述之间的分隔符
pub const DESCRIPTION_SEPARATOR: &str = " • ";

/// 去掉首尾空白, 下划线换成空格; None 得到空串
pub fn normalize_text(token: Option<&str>) -> String {
    match token {
        Some(t) => t.trim().replace('_', " "),
        None => String::new(),
    }
}

/// 列表形式的描述先去掉空项, 再逐段规范化后用圆点连接
pub fn normalize_description(value: Option<&DescriptionField>) -> String {
    match value {
        Some(DescriptionField::Parts(parts)) => parts
            .iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .map(|p| normalize_text(Some(p)))
            .collect::<Vec<_>>()
            .join(DESCRIPTION_SEPARATOR),
        Some(DescriptionField::Text(text)) => normalize_text(Some(text)),
        None => String::new(),
    }
}

/// 计算明细金额
///
/// 显式给出且有限的 `total_amount` 优先; 否则用 数量 × 单价。
/// 数量缺失、为 0 或非有限值时按 1 计, 单价缺失或非有限值时按 0 计。
pub fn compute_amount(item: &RawLineItem) -> f64 {
    let quantity = item
        .quantity
        .filter(|q| q.is_finite() && *q != 0.0)
        .unwrap_or(1.0);
    let unit = item.unit_price.filter(|u| u.is_finite()).unwrap_or(0.0);

    let mut fallback_total = quantity * unit;
    if !fallback_total.is_finite() {
        fallback_total = 0.0;
    }

    let amount = match item.total_amount {
        Some(total) if total.is_finite() => total,
        _ => fallback_total,
    };
    debug_assert!(amount.is_finite(), "line item {} amount not finite", item.id);
    amount
}

/// 只有显式 `is_active == false` 的明细被丢弃
pub fn filter_active(items: Vec<RawLineItem>) -> Vec<RawLineItem> {
    items
        .into_iter()
        .filter(|item| item.is_active != Some(false))
        .collect()
}

pub fn effective_sort_order(item: &RawLineItem) -> f64 {
    item.sort_order
        .filter(|o| o.is_finite())
        .unwrap_or(DEFAULT_SORT_ORDER)
}

/// 按 sort_order 升序稳定排序, 相同值保持原有相对顺序
pub fn sort_by_sort_order(mut items: Vec<RawLineItem>) -> Vec<RawLineItem> {
    items.sort_by(|a, b| effective_sort_order(a).total_cmp(&effective_sort_order(b)));
    items
}

pub fn normalize_item(item: &RawLineItem) -> NormalizedLineItem {
    NormalizedLineItem {
        id: item.id.clone(),
        category_text: normalize_text(item.category.as_deref()),
        description_text: normalize_description(item.description.as_ref()),
        amount: compute_amount(item),
        is_optional: item.is_optional.unwrap_or(false),
        notes: item.notes.clone(),
        effective_sort_order: effective_sort_order(item),
    }
}

/// 过滤 → 排序 → 规范化
pub fn normalize_line_items(items: Vec<RawLineItem>) -> Vec<NormalizedLineItem> {
    sort_by_sort_order(filter_active(items))
        .iter()
        .map(normalize_item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: Option<f64>, unit_price: Option<f64>, total_amount: Option<f64>) -> RawLineItem {
        RawLineItem {
            id: "li".to_string(),
            quantity,
            unit_price,
            total_amount,
            ..Default::default()
        }
    }

    fn ordered(id: &str, sort_order: Option<f64>) -> RawLineItem {
        RawLineItem {
            id: id.to_string(),
            sort_order,
            ..Default::default()
        }
    }

    #[test]
    fn explicit_total_wins() {
        assert_eq!(compute_amount(&item(Some(2.0), Some(10.0), Some(25.0))), 25.0);
    }

    #[test]
    fn falls_back_to_quantity_times_unit() {
        assert_eq!(compute_amount(&item(Some(2.0), Some(10.0), None)), 20.0);
    }

    #[test]
    fn quantity_defaults_to_one() {
        assert_eq!(compute_amount(&item(None, Some(5.0), None)), 5.0);
        assert_eq!(compute_amount(&item(Some(0.0), Some(5.0), None)), 5.0);
        assert_eq!(compute_amount(&item(Some(f64::NAN), Some(5.0), None)), 5.0);
    }

    #[test]
    fn non_finite_total_uses_fallback() {
        assert_eq!(compute_amount(&item(Some(3.0), Some(4.0), Some(f64::NAN))), 12.0);
        assert_eq!(compute_amount(&item(Some(3.0), None, Some(f64::INFINITY))), 0.0);
    }

    #[test]
    fn explicit_zero_total_is_kept() {
        assert_eq!(compute_amount(&item(Some(3.0), Some(4.0), Some(0.0))), 0.0);
    }

    #[test]
    fn overflowing_fallback_degrades_to_zero() {
        let amount = compute_amount(&item(Some(1e200), Some(1e200), None));
        assert_eq!(amount, 0.0);
    }

    #[test]
    fn normalize_text_trims_and_replaces_underscores() {
        assert_eq!(normalize_text(Some("  museum_crate ")), "museum crate");
        assert_eq!(normalize_text(None), "");
    }

    #[test]
    fn normalize_description_joins_parts() {
        let parts = DescriptionField::Parts(vec![
            Some("Museum_crate".to_string()),
            None,
            Some(String::new()),
            Some(" climate control ".to_string()),
        ]);
        assert_eq!(
            normalize_description(Some(&parts)),
            "Museum crate • climate control"
        );
        assert_eq!(normalize_description(None), "");
    }

    #[test]
    fn filter_active_only_drops_explicit_false() {
        let mut a = ordered("a", None);
        a.is_active = Some(true);
        let mut b = ordered("b", None);
        b.is_active = Some(false);
        let c = ordered("c", None);

        let kept: Vec<String> = filter_active(vec![a, b, c]).into_iter().map(|i| i.id).collect();
        assert_eq!(kept, vec!["a", "c"]);
    }

    #[test]
    fn sort_is_stable_and_unknown_order_goes_last() {
        let items = vec![
            ordered("none-1", None),
            ordered("two", Some(2.0)),
            ordered("one-a", Some(1.0)),
            ordered("none-2", None),
            ordered("one-b", Some(1.0)),
        ];
        let ids: Vec<String> = sort_by_sort_order(items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["one-a", "one-b", "two", "none-1", "none-2"]);
    }

    #[test]
    fn normalize_item_fills_defaults() {
        let raw = RawLineItem {
            id: "x".to_string(),
            category: Some("Crating_Services".to_string()),
            description: Some("Museum Crate".into()),
            unit_price: Some(100.0),
            ..Default::default()
        };
        let n = normalize_item(&raw);
        assert_eq!(n.category_text, "Crating Services");
        assert_eq!(n.description_text, "Museum Crate");
        assert_eq!(n.amount, 100.0);
        assert!(!n.is_optional);
        assert_eq!(n.effective_sort_order, DEFAULT_SORT_ORDER);
    }
}
