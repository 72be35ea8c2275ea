//! 定义了 TTML → LRC 转换中使用的核心数据类型。

use std::fmt;

use quick_xml::{
    Error as QuickXmlErrorMain, encoding::EncodingError,
    events::attributes::AttrError as QuickXmlAttrError,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

//=============================================================================
// 1. 错误枚举
//=============================================================================

/// 定义歌词转换过程中可能发生的各种错误。
///
/// 所有错误对单次转换都是致命的，不会产生部分输出。
#[derive(Error, Debug)]
pub enum ConvertError {
    /// XML 解析错误，通常来自 `quick-xml` 库。
    #[error("解析 XML 错误: {0}")]
    Xml(#[from] QuickXmlErrorMain),
    /// XML 属性解析错误，通常来自 `quick-xml` 库。
    #[error("XML 属性错误: {0}")]
    Attribute(#[from] QuickXmlAttrError),
    /// XML 文本编码或解码错误。
    #[error("文本编码或解码错误: {0}")]
    Encoding(#[from] EncodingError),
    /// 文档缺少必需的结构（例如 `<tt>` 根元素或 `<body>`）。
    #[error("无效的 TTML 文档: {0}")]
    MalformedInput(String),
    /// 时间戳不符合任何可接受的格式。
    #[error("无效的时间格式: {0}")]
    MalformedTimestamp(String),
    /// 逐行模式下某一行缺少 `begin` 时间。
    #[error("歌词没有同步时间轴")]
    NoSynchronizedLyrics,
    /// 字符串格式化错误。
    #[error("格式错误: {0}")]
    Format(#[from] fmt::Error),
}

impl ConvertError {
    /// 该错误是否属于“输入文档无法解析或结构不完整”一类。
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::Xml(_) | Self::Attribute(_) | Self::Encoding(_) | Self::MalformedInput(_)
        )
    }
}

//=============================================================================
// 2. 输出格式与计时模式
//=============================================================================

/// 转换的目标输出格式。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    /// 原样返回 TTML 源文档。
    #[strum(serialize = "raw", to_string = "ttml")]
    #[serde(rename = "ttml", alias = "raw")]
    Raw,
    /// 带时间戳的 LRC 文本。
    #[default]
    #[strum(serialize = "lineFormat", to_string = "lrc")]
    #[serde(rename = "lrc", alias = "lineFormat")]
    Lrc,
}

/// 文档级的计时模式，由 `<tt itunes:timing="...">` 决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingMode {
    /// 逐行计时，每个 `<p>` 只有一个 `begin`。未指定时的默认值。
    #[default]
    Line,
    /// 逐字计时，每个 `<p>` 由带时间的 `<span>` 组成。
    Word,
    /// 无时间轴。
    None,
}

impl TimingMode {
    /// 从 `itunes:timing` 属性值解析计时模式。
    ///
    /// 只有 `Word` 与 `None`（不区分大小写）会被识别，其他任何值（包括缺失）都视为逐行。
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("word") => Self::Word,
            Some(v) if v.eq_ignore_ascii_case("none") => Self::None,
            _ => Self::Line,
        }
    }
}

//=============================================================================
// 3. 文档模型
//=============================================================================

/// 文本容器中的一个子节点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// 字面字符数据，原样保留（包括其中的空白）。
    Text(String),
    /// 一个 `<span>` 子元素。
    Span(TimedSpan),
}

/// 一个 `<span>` 元素。逐字歌词中代表一个音节。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimedSpan {
    /// `begin` 属性的原始值。
    pub begin: Option<String>,
    /// `end` 属性的原始值。
    pub end: Option<String>,
    /// 渲染后的文本：`text` 属性，否则为元素内全部的字符数据。
    pub text: String,
}

impl TimedSpan {
    /// 创建一个带有 `begin`/`end` 的音节。
    pub fn new(begin: impl Into<String>, end: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            begin: Some(begin.into()),
            end: Some(end.into()),
            text: text.into(),
        }
    }

    /// 该 `<span>` 是否带有 `begin` 时间。
    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.begin.is_some()
    }
}

/// 可以携带文本的元素（`<p>` 或 `<text>`）的内容。
///
/// 要么是一个扁平的 `text` 属性，要么是有序的子节点序列。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextContent {
    /// `text` 属性的值。存在时优先于子节点。
    pub text_attr: Option<String>,
    /// 按文档顺序排列的子节点。
    pub nodes: Vec<Inline>,
}

impl TextContent {
    /// 由扁平的 `text` 属性构造。
    pub fn from_attr(text: impl Into<String>) -> Self {
        Self {
            text_attr: Some(text.into()),
            nodes: Vec::new(),
        }
    }

    /// 由子节点序列构造。
    #[must_use]
    pub fn from_nodes(nodes: Vec<Inline>) -> Self {
        Self {
            text_attr: None,
            nodes,
        }
    }

    /// 是否至少包含一个带 `begin` 的 `<span>`。
    #[must_use]
    pub fn has_timed_spans(&self) -> bool {
        self.nodes
            .iter()
            .any(|node| matches!(node, Inline::Span(span) if span.is_timed()))
    }
}

/// 一行原文歌词（`<p>`）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LyricUnit {
    /// `itunes:key`，用于查找翻译和音译。
    pub key: Option<String>,
    /// `begin` 属性的原始值。
    pub begin: Option<String>,
    /// `end` 属性的原始值。
    pub end: Option<String>,
    /// 行内容。
    pub content: TextContent,
}

/// `<body>` 下的一个 `<div>`。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    /// 该段落中的歌词行。
    pub units: Vec<LyricUnit>,
}

/// 翻译或音译中的一个 `<text for="...">` 片段。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    /// `for` 属性，对应某一行的 `itunes:key`。
    pub key: String,
    /// 片段内容。
    pub content: TextContent,
}

/// 一个目标语言的翻译或音译（`<translation>` / `<transliteration>`）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variant {
    /// `xml:lang` 属性。
    pub language: Option<String>,
    /// 按文档顺序排列的片段。
    pub fragments: Vec<Fragment>,
}

/// `<head><metadata><iTunesMetadata>` 中的翻译与音译。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataBlock {
    /// `<translations>` 下的各语言翻译。
    pub translations: Vec<Variant>,
    /// `<transliterations>` 下的各语言音译。
    pub transliterations: Vec<Variant>,
}

/// 解析后的 TTML 文档，仅在单次转换调用内存在。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimedDocument {
    /// 根元素的 `xml:lang`。
    pub language: Option<String>,
    /// 文档级计时模式。
    pub timing: TimingMode,
    /// 可选的元数据块。
    pub metadata: Option<MetadataBlock>,
    /// `<body>` 下的段落。
    pub sections: Vec<Section>,
}

impl TimedDocument {
    /// 解析 TTML 字符串。参见 [`crate::converter::parsers::ttml_parser::parse_ttml`]。
    pub fn parse(content: &str) -> Result<Self, ConvertError> {
        crate::converter::parsers::ttml_parser::parse_ttml(content)
    }

    /// 按文档顺序遍历所有歌词行。
    pub fn units(&self) -> impl Iterator<Item = &LyricUnit> {
        self.sections.iter().flat_map(|section| section.units.iter())
    }

    /// 查找指定语言的翻译。
    #[must_use]
    pub fn translation_for_language(&self, language: &str) -> Option<&Variant> {
        self.metadata.as_ref().and_then(|meta| {
            meta.translations
                .iter()
                .find(|variant| variant.language.as_deref() == Some(language))
        })
    }
}

//=============================================================================
// 4. LRC 时间戳
//=============================================================================

/// LRC 输出使用的时间戳：分、秒、百分之一秒。
///
/// 没有小时字段，小时会被折算进分钟。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LrcTimestamp {
    /// 分钟，可以超过两位数。
    pub minutes: u64,
    /// 秒。
    pub seconds: u64,
    /// 百分之一秒。
    pub hundredths: u64,
}

impl LrcTimestamp {
    /// 创建一个时间戳。
    #[must_use]
    pub const fn new(minutes: u64, seconds: u64, hundredths: u64) -> Self {
        Self {
            minutes,
            seconds,
            hundredths,
        }
    }
}

impl fmt::Display for LrcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:02}:{:02}.{:02}]",
            self.minutes, self.seconds, self.hundredths
        )
    }
}
