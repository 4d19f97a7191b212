use thiserror::Error;

/// 比价流程外围的错误 (配置、读取、解码、调用约定)
///
/// 引擎本身不会失败, 只有数据进入引擎之前的环节才会返回这些错误。
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Duplicate bid id: {0}")]
    DuplicateBidId(String),
}

pub type CompareResult<T> = Result<T, CompareError>;
