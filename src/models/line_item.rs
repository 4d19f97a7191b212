use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 原始费用明细 (数据层读出的松散记录)
///
/// 字段都可能缺失或为 null, 数值字段还可能是字符串。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLineItem {
    #[serde(deserialize_with = "de_loose_id")]
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "de_description")]
    pub description: Option<DescriptionField>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub unit_price: Option<f64>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub is_optional: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "de_loose_number")]
    pub sort_order: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// 描述: 单个字符串或多段列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptionField {
    Text(String),
    Parts(Vec<Option<String>>),
}

impl From<&str> for DescriptionField {
    fn from(value: &str) -> Self {
        DescriptionField::Text(value.to_string())
    }
}

/// 规范化后的费用明细
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedLineItem {
    pub id: String,
    pub category_text: String,
    pub description_text: String,
    /// 总是有限值
    pub amount: f64,
    pub is_optional: bool,
    pub notes: Option<String>,
    pub effective_sort_order: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Num(f64),
    Flag(bool),
    Text(String),
}

impl LooseNumber {
    /// 与 JS `Number(x)` 相同的取值规则; 无法解析的字符串得到 NaN
    fn into_f64(self) -> f64 {
        match self {
            LooseNumber::Num(n) => n,
            LooseNumber::Flag(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            LooseNumber::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

pub(crate) fn de_loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<LooseNumber> = Option::deserialize(deserializer)?;
    Ok(raw.map(LooseNumber::into_f64))
}

/// null 与缺失一样取默认值
pub(crate) fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 单个标量描述转成文本; 列表中的假值 (null, "", 0, false) 丢弃, 其余标量转成文本
fn de_description<'de, D>(deserializer: D) -> Result<Option<DescriptionField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Array(parts) => Some(DescriptionField::Parts(
            parts.into_iter().map(scalar_text).collect(),
        )),
        Value::String(s) => Some(DescriptionField::Text(s)),
        Value::Number(n) => Some(DescriptionField::Text(n.to_string())),
        Value::Bool(b) => Some(DescriptionField::Text(b.to_string())),
        Value::Object(_) => None,
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Int(i64),
    Text(String),
}

/// id 既可能是 uuid 字符串也可能是整数主键
pub(crate) fn de_loose_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseId::deserialize(deserializer)? {
        LooseId::Int(n) => n.to_string(),
        LooseId::Text(s) => s,
    })
}
