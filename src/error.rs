//! 定义了整个 `ttml-lrc` 库的错误类型 `LyricsError`。

use std::io;
use thiserror::Error;

use crate::converter::types::ConvertError;

/// `ttml-lrc` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum LyricsError {
    /// 请求参数或凭据无效，在发起任何网络请求之前检出
    #[error("配置错误: {0}")]
    Configuration(String),

    /// 获取文档时的传输层失败。由 `DocumentFetcher` 的实现者返回
    #[error("网络错误: {0}")]
    Transport(String),

    /// 在数据源中找不到歌词内容
    #[error("在源中未找到歌词内容")]
    LyricNotFound,

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// 文档无法解析，或缺少必需的结构
    #[error("歌词解析失败: {0}")]
    MalformedInput(String),

    /// 时间戳不符合任何可接受的格式
    #[error("无效的时间格式: {0}")]
    MalformedTimestamp(String),

    /// 逐行模式下存在没有 `begin` 的行
    #[error("歌词没有同步时间轴")]
    NoSynchronizedLyrics,

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// `LyricsError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, LyricsError>;

impl From<ConvertError> for LyricsError {
    fn from(err: ConvertError) -> Self {
        match err {
            ConvertError::Xml(e) => Self::MalformedInput(e.to_string()),
            ConvertError::Attribute(e) => Self::MalformedInput(e.to_string()),
            ConvertError::Encoding(e) => Self::MalformedInput(format!("编码错误: {e}")),
            ConvertError::MalformedInput(s) => Self::MalformedInput(s),
            ConvertError::MalformedTimestamp(s) => Self::MalformedTimestamp(s),
            ConvertError::NoSynchronizedLyrics => Self::NoSynchronizedLyrics,
            ConvertError::Format(e) => Self::Internal(e.to_string()),
        }
    }
}
