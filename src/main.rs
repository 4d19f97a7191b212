use bid_compare_rust::{loader, AppConfig, BidComparison, ComparisonService, ReconcileOptions};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

/// 输出报告: 比价结果 + 生成时间
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    generated_at: DateTime<Utc>,
    options: ReconcileOptions,
    comparison: BidComparison,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::from_env()?;

    // 初始化日志 - 本地时间格式, 输出到 stderr 以免混入报告
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();
    info!("Starting with config: {:?}", config);

    // 命令行第一个参数优先于配置中的路径
    let path: Option<PathBuf> = std::env::args()
        .nth(1)
        .or_else(|| config.input.path.clone())
        .map(PathBuf::from);

    let raw = loader::load_bids(path.as_deref())?;
    let bids = loader::prepare_bids(raw)?;

    let service = ComparisonService::new(config.reconcile);
    let report = Report {
        generated_at: Utc::now(),
        options: *service.options(),
        comparison: service.compare(&bids),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
