//! 此模块包含与 Apple Music 目录 API 交互所需的请求构造与响应解析。
//!
//! 本模块不发起网络请求，只负责拼出 URL 与请求头，以及从响应 JSON 中取出 TTML。

use tracing::debug;

use crate::{
    error::{LyricsError, Result},
    providers::LyricsRequest,
};

pub mod models;
use models::CatalogResponse;

const CATALOG_BASE_URL: &str = "https://amp-api.music.apple.com/v1/catalog";
const ORIGIN: &str = "https://music.apple.com";
const REFERER: &str = "https://music.apple.com/";

/// 构造歌词接口的完整 URL。
///
/// 形如 `{base}/{storefront}/songs/{id}/{kind}?l={language}&extend=ttmlLocalizations`。
pub fn endpoint_url(request: &LyricsRequest) -> String {
    format!(
        "{CATALOG_BASE_URL}/{}/songs/{}/{}?l={}&extend=ttmlLocalizations",
        urlencoding::encode(&request.storefront),
        urlencoding::encode(&request.song_id),
        request.kind,
        urlencoding::encode(&request.language),
    )
}

/// 请求歌词接口时必须附带的请求头。
pub fn request_headers(request: &LyricsRequest) -> Vec<(&'static str, String)> {
    vec![
        ("Origin", ORIGIN.to_string()),
        ("Referer", REFERER.to_string()),
        (
            "Authorization",
            format!("Bearer {}", request.authorization_token),
        ),
        (
            "Cookie",
            format!("media-user-token={}", request.media_user_token),
        ),
    ]
}

/// 从歌词接口的 JSON 响应中取出 TTML 文档。
///
/// 优先使用第一个资源的 `ttml`，为空时退回 `ttmlLocalizations`。
///
/// # 错误
/// * `LyricsError::JsonParse` - 响应不是合法的 JSON。
/// * `LyricsError::LyricNotFound` - `data` 数组缺失或为空，或两个字段都为空。
pub fn parse_catalog_response(json: &str) -> Result<String> {
    let response: CatalogResponse = serde_json::from_str(json)?;

    let item = response
        .data
        .into_iter()
        .next()
        .ok_or(LyricsError::LyricNotFound)?;

    debug!("[AppleMusic] 歌词资源 id={} type={}", item.id, item.kind);

    let attributes = item.attributes;
    let ttml = if attributes.ttml.is_empty() {
        attributes.ttml_localizations
    } else {
        attributes.ttml
    };

    if ttml.is_empty() {
        return Err(LyricsError::LyricNotFound);
    }
    Ok(ttml)
}
