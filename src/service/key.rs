/// 分类与描述之间的分隔符, 正常文本里不会出现
pub const KEY_DELIMITER: &str = "\u{1f}::\u{1f}";

/// 对账键: 已规范化的 (分类, 描述) 转小写后拼接
///
/// 只做精确匹配, 措辞稍有不同的两条费用不会合并。
pub fn build_key(category_text: &str, description_text: &str) -> String {
    format!(
        "{}{}{}",
        category_text.to_lowercase(),
        KEY_DELIMITER,
        description_text.to_lowercase()
    )
}
