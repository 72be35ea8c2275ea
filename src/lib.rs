#![warn(missing_docs)]

//! # TTML LRC RS
//!
//! 一个 Rust 库，用于把 Apple Music 风格的 TTML 歌词转换为 LRC。
//!
//! ## 主要功能
//!
//! - **逐行歌词**: 每个 `<p>` 输出一行 `[mm:ss.xx]文本`，并按需附加翻译与音译行。
//! - **逐字歌词**: 每个音节前带开始时间，行尾附加结束时间。
//! - **无时间轴歌词**: 输出纯文本。
//! - **繁简处理**: 繁体中文歌词若附带简体翻译，只输出简体。
//! - **歌词获取**: 定义了 `DocumentFetcher` 接口，调用方自行实现网络请求。
//!
//! ## 格式转换
//!
//! ```rust
//! use ttml_lrc_rs::{OutputFormat, convert};
//!
//! let ttml = r#"<tt xmlns="http://www.w3.org/ns/ttml"><body><div>
//!     <p begin="00:01.000" end="00:02.000">Hello</p>
//!     <p begin="00:02.500" end="00:04.000">World</p>
//! </div></body></tt>"#;
//!
//! let lrc = convert(ttml, OutputFormat::Lrc).unwrap();
//! assert_eq!(lrc, "[00:01.00]Hello\n[00:02.50]World");
//!
//! // 原样输出
//! assert_eq!(convert(ttml, OutputFormat::Raw).unwrap(), ttml);
//! ```
//!
//! ## 获取歌词
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use ttml_lrc_rs::{
//!     DocumentFetcher, LyricsConfig, LyricsHelper, LyricsRequest, Result,
//! };
//!
//! struct MyFetcher;
//!
//! #[async_trait]
//! impl DocumentFetcher for MyFetcher {
//!     fn name(&self) -> &'static str {
//!         "my_fetcher"
//!     }
//!
//!     async fn fetch_document(&self, request: &LyricsRequest) -> Result<String> {
//!         let _url = ttml_lrc_rs::providers::apple_music::endpoint_url(request);
//!         // 使用任意 HTTP 客户端请求 `_url`，再交给 parse_catalog_response
//!         unimplemented!()
//!     }
//! }
//!
//! async {
//!     let config = ttml_lrc_rs::config::load_config().unwrap();
//!     let helper = LyricsHelper::new(MyFetcher);
//!     match helper.get_lyrics_with_config("1450695739", &config).await {
//!         Ok(lyrics) => println!("{lyrics}"),
//!         Err(e) => eprintln!("获取失败: {e}"),
//!     }
//! };
//! ```
pub mod config;
pub mod converter;
pub mod error;
pub mod providers;

use tracing::{debug, info};

pub use crate::{
    config::LyricsConfig,
    converter::types::{ConvertError, OutputFormat, TimedDocument, TimingMode},
    error::{LyricsError, Result},
    providers::{DocumentFetcher, LyricsKind, LyricsRequest},
};

// ==========================================================
//  顶层 API
// ==========================================================

/// 按指定的输出格式转换一份 TTML 文档。
///
/// # 参数
/// * `raw` - 原始 TTML 文档。
/// * `format` - `OutputFormat::Raw` 时原样返回 `raw`，不做任何解析；
///   `OutputFormat::Lrc` 时执行完整的解析与转换。
///
/// # 返回
/// `Result<String>` - 成功时返回目标格式的字符串。
pub fn convert(raw: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Raw => Ok(raw.to_string()),
        OutputFormat::Lrc => Ok(converter::convert_ttml_to_lrc(raw)?),
    }
}

/// 先检查请求，再通过 `fetcher` 获取文档并转换。
///
/// 请求检查失败时不会调用 `fetcher`。
pub async fn get_lyrics(
    fetcher: &dyn DocumentFetcher,
    request: &LyricsRequest,
    format: OutputFormat,
) -> Result<String> {
    request.validate()?;

    debug!(
        "[Main] 使用 '{}' 获取歌曲 {} 的 {}",
        fetcher.name(),
        request.song_id,
        request.kind
    );
    let raw = fetcher.fetch_document(request).await?;
    info!("[Main] 已获取歌曲 {} 的歌词文档。", request.song_id);

    convert(&raw, format)
}

/// 顶层歌词助手客户端，封装一个文档获取器，为用户提供统一、简单的接口。
pub struct LyricsHelper {
    fetcher: Box<dyn DocumentFetcher>,
}

impl LyricsHelper {
    /// 使用给定的文档获取器创建实例。
    pub fn new(fetcher: impl DocumentFetcher + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
        }
    }

    /// 当前使用的获取器名称。
    pub fn fetcher_name(&self) -> &'static str {
        self.fetcher.name()
    }

    /// 获取并转换歌词。
    ///
    /// # 参数
    /// * `request` - 请求参数，发起请求前会先检查。
    /// * `format` - 输出格式。
    ///
    /// # 返回
    /// `Result<String>` - 成功时返回转换后的歌词。
    pub async fn get_lyrics(&self, request: &LyricsRequest, format: OutputFormat) -> Result<String> {
        get_lyrics(self.fetcher.as_ref(), request, format).await
    }

    /// 使用配置中的参数获取并转换指定歌曲的歌词。
    pub async fn get_lyrics_with_config(
        &self,
        song_id: &str,
        config: &LyricsConfig,
    ) -> Result<String> {
        let request = LyricsRequest::from_config(song_id, config);
        self.get_lyrics(&request, config.output_format).await
    }

    /// 转换一份已有的 TTML 文档。
    pub fn convert_lyrics(&self, raw: &str, format: OutputFormat) -> Result<String> {
        convert(raw, format)
    }
}
