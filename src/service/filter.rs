use crate::models::{ComparisonEntry, ComparisonRow, ReconcileOptions};

/// `include_optional == false` 时, 只保留至少有一个报价把它列为必选项的行
pub fn include_optional(rows: Vec<ComparisonRow>, include: bool) -> Vec<ComparisonRow> {
    if include {
        return rows;
    }
    rows.into_iter()
        .filter(|row| row.entries.iter().any(|e| e.present && !e.is_optional))
        .collect()
}

/// 只保留各报价之间存在差异的行
///
/// 以第一个报价为参照, 比较是否出现、是否可选、金额 (双方都出现时) 和备注。
/// 只有一个报价时所有行原样保留。
pub fn only_differences(rows: Vec<ComparisonRow>) -> Vec<ComparisonRow> {
    rows.into_iter().filter(row_differs).collect()
}

fn row_differs(row: &ComparisonRow) -> bool {
    let Some((reference, rest)) = row.entries.split_first() else {
        return true;
    };
    if rest.is_empty() {
        return true;
    }
    rest.iter().any(|entry| entry_differs(reference, entry))
}

fn entry_differs(reference: &ComparisonEntry, entry: &ComparisonEntry) -> bool {
    if entry.present != reference.present || entry.is_optional != reference.is_optional {
        return true;
    }
    if entry.present && reference.present && entry.amount != reference.amount {
        return true;
    }
    entry.notes_text() != reference.notes_text()
}

/// 固定顺序: 先按可选项过滤, 再按差异过滤
pub fn apply_filters(rows: Vec<ComparisonRow>, options: &ReconcileOptions) -> Vec<ComparisonRow> {
    let before = rows.len();
    let rows = include_optional(rows, options.include_optional);
    let rows = if options.only_differences {
        only_differences(rows)
    } else {
        rows
    };
    tracing::debug!("[Compare] filters kept {}/{} rows", rows.len(), before);
    rows
}
