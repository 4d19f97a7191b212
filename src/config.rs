use crate::error::CompareResult;
use crate::models::ReconcileOptions;
use serde::{Deserialize, Serialize};

/// 环境变量前缀, 例如 `BID_COMPARE_RECONCILE__ONLY_DIFFERENCES=true`
pub const ENV_PREFIX: &str = "BID_COMPARE";

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub reconcile: ReconcileOptions,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// 报价文件路径, 未设置时读标准输入
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 默认值 + 环境变量覆盖
    pub fn from_env() -> CompareResult<Self> {
        let defaults = ReconcileOptions::default();
        let settings = config::Config::builder()
            .set_default("reconcile.include_optional", defaults.include_optional)?
            .set_default("reconcile.only_differences", defaults.only_differences)?
            .set_default("reconcile.group_by_category", defaults.group_by_category)?
            .set_default("log.level", LogConfig::default().level)?
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log.level.parse().unwrap_or(tracing::Level::INFO)
    }
}
