use crate::models::{ComparisonRow, DisplayRow};

/// 把过滤后的行投影成展示序列
///
/// 分组模式下, 每当分类与上一行不同就插入一个分类标题。行本身的数量和顺序不变。
pub fn project(rows: Vec<ComparisonRow>, group_by_category: bool) -> Vec<DisplayRow> {
    if !group_by_category {
        return rows.into_iter().map(|row| DisplayRow::Item { row }).collect();
    }

    let mut display = Vec::with_capacity(rows.len());
    let mut current: Option<String> = None;
    for row in rows {
        if current.as_deref() != Some(row.category.as_str()) {
            display.push(DisplayRow::Category {
                key: format!("category:{}", row.category),
                category: row.category.clone(),
            });
            current = Some(row.category.clone());
        }
        display.push(DisplayRow::Item { row });
    }
    display
}
