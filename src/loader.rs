use crate::error::{CompareError, CompareResult};
use crate::models::{Bid, RawBid};
use indexmap::IndexSet;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// 解析报价文档: `{"bids": [...]}` 或直接是报价数组
pub fn parse_bids(input: &str) -> CompareResult<Vec<RawBid>> {
    let value: Value = serde_json::from_str(input)?;
    let list = match value {
        Value::Object(mut map) => match map.remove("bids") {
            Some(bids) => bids,
            None => Value::Object(map),
        },
        other => other,
    };
    Ok(serde_json::from_value(list)?)
}

/// 从文件读取, 未给路径时读标准输入
pub fn load_bids(path: Option<&Path>) -> CompareResult<Vec<RawBid>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let bids = parse_bids(&content)?;
    tracing::info!(
        "Loaded {} bids from {}",
        bids.len(),
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string())
    );
    Ok(bids)
}

/// 同一次比价中报价 id 必须唯一 (id 同时用作条目标识)
pub fn ensure_unique_ids(bids: &[RawBid]) -> CompareResult<()> {
    let mut seen: IndexSet<&str> = IndexSet::with_capacity(bids.len());
    for bid in bids {
        if !seen.insert(bid.id.as_str()) {
            return Err(CompareError::DuplicateBidId(bid.id.clone()));
        }
    }
    Ok(())
}

/// 校验后规范化, 保持输入顺序
pub fn prepare_bids(raw: Vec<RawBid>) -> CompareResult<Vec<Bid>> {
    ensure_unique_ids(&raw)?;
    Ok(raw.into_iter().map(Bid::from_raw).collect())
}
