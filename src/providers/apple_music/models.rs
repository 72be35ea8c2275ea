//! 此模块定义了用于反序列化 Apple Music 目录 API 响应的 `struct` 数据结构。

use serde::Deserialize;

// =================================================================
// 歌词接口 (`/v1/catalog/{storefront}/songs/{id}/{kind}`) 的模型
// =================================================================

/// 歌词接口的顶层响应结构。
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    /// 资源列表。正常情况下只有一个元素。
    #[serde(default)]
    pub data: Vec<CatalogItem>,
}

/// 单个歌词资源。
#[derive(Debug, Deserialize)]
pub struct CatalogItem {
    /// 资源 ID。
    #[serde(default)]
    pub id: String,
    /// 资源类型，例如 `"lyrics"`、`"syllable-lyrics"`。
    #[serde(rename = "type", default)]
    pub kind: String,
    /// 资源属性，包含 TTML 文本本身。
    #[serde(default)]
    pub attributes: LyricsAttributes,
}

/// 资源属性。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricsAttributes {
    /// TTML 文档。
    #[serde(default)]
    pub ttml: String,
    /// 带本地化内容（翻译、音译）的 TTML 文档，`ttml` 为空时使用。
    #[serde(default)]
    pub ttml_localizations: String,
    /// 播放参数。
    pub play_params: Option<PlayParams>,
}

/// 资源的播放参数。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayParams {
    /// 资源 ID。
    #[serde(default)]
    pub id: String,
    /// 资源种类。
    #[serde(default)]
    pub kind: String,
    /// 目录 ID。
    pub catalog_id: Option<String>,
    /// 显示类型。
    pub display_type: Option<i32>,
}
