//! 提供商模块
//!
//! 该模块定义了获取 TTML 歌词文档的核心抽象。本库不附带 HTTP 客户端，
//! 调用方实现 [`DocumentFetcher`] 并交给 [`crate::LyricsHelper`] 使用。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{
    config::LyricsConfig,
    error::{LyricsError, Result},
};

pub mod apple_music;

/// 用户令牌的最短长度，短于此长度的令牌一定无效。
pub const MIN_MEDIA_USER_TOKEN_LEN: usize = 50;

/// 要请求的歌词资源类型，对应目录 API 路径的最后一段。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum LyricsKind {
    /// 逐行歌词。
    #[default]
    #[strum(serialize = "lyrics")]
    #[serde(rename = "lyrics")]
    Lyrics,
    /// 逐字歌词。
    #[strum(serialize = "syllable-lyrics")]
    #[serde(rename = "syllable-lyrics")]
    SyllableLyrics,
}

/// 一次歌词获取请求的全部参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsRequest {
    /// 目录中的歌曲 ID。
    pub song_id: String,
    /// 地区代码，例如 `"us"`、`"jp"`。
    pub storefront: String,
    /// 歌词资源类型。
    pub kind: LyricsKind,
    /// 期望的本地化语言，例如 `"en-US"`。
    pub language: String,
    /// 开发者令牌，作为 `Bearer` 发送。
    pub authorization_token: String,
    /// 用户令牌，作为 `media-user-token` Cookie 发送。
    pub media_user_token: String,
}

impl LyricsRequest {
    /// 用配置中的参数为指定歌曲构造请求。
    pub fn from_config(song_id: impl Into<String>, config: &LyricsConfig) -> Self {
        Self {
            song_id: song_id.into(),
            storefront: config.storefront.clone(),
            kind: config.lyrics_kind,
            language: config.language.clone(),
            authorization_token: config.authorization_token.clone(),
            media_user_token: config.media_user_token.clone(),
        }
    }

    /// 在发起请求前检查参数。
    ///
    /// # 错误
    /// 用户令牌过短，或歌曲 ID、地区为空时返回 `LyricsError::Configuration`。
    pub fn validate(&self) -> Result<()> {
        validate_media_user_token(&self.media_user_token)?;
        if self.song_id.trim().is_empty() {
            return Err(LyricsError::Configuration("歌曲 ID 不能为空".to_string()));
        }
        if self.storefront.trim().is_empty() {
            return Err(LyricsError::Configuration("地区代码不能为空".to_string()));
        }
        Ok(())
    }
}

pub(crate) fn validate_media_user_token(token: &str) -> Result<()> {
    if token.len() < MIN_MEDIA_USER_TOKEN_LEN {
        return Err(LyricsError::Configuration(format!(
            "media-user-token 无效：长度必须至少为 {MIN_MEDIA_USER_TOKEN_LEN} 个字符"
        )));
    }
    Ok(())
}

/// 定义了获取原始 TTML 文档所需实现的接口。
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    ///
    /// 返回获取器的唯一名称。
    ///
    /// 一个全小写的静态字符串，例如 `"apple_music"`。
    ///
    fn name(&self) -> &'static str;

    ///
    /// 获取请求所指向的 TTML 文档。
    ///
    /// 实现者通常会向 [`apple_music::endpoint_url`] 发起请求，附带
    /// [`apple_music::request_headers`]，再用 [`apple_music::parse_catalog_response`]
    /// 取出 TTML 字符串。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含原始 TTML 标记；传输失败时应返回
    /// `LyricsError::Transport`，歌曲没有歌词时返回 `LyricsError::LyricNotFound`。
    ///
    async fn fetch_document(&self, request: &LyricsRequest) -> Result<String>;
}
