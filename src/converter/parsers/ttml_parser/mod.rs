//! # TTML (Timed Text Markup Language) 解析器
//!
//! 该解析器只面向 Apple Music 风格的 TTML 歌词，只定位转换需要的元素，
//! 不校验文档是否符合 TTML 规范，也不尝试修复格式错误的输入。

mod body;
mod constants;
mod metadata;
mod tree;

use tracing::debug;

use self::constants::{
    ATTR_ITUNES_TIMING, ATTR_XML_LANG, TAG_BODY, TAG_HEAD, TAG_ITUNES_METADATA, TAG_METADATA,
    TAG_TT,
};
use crate::converter::types::{ConvertError, TimedDocument, TimingMode};

/// 解析 TTML 格式的歌词文件。
///
/// # 参数
///
/// * `content` - TTML 格式的歌词文件内容字符串。
///
/// # 返回
///
/// * `Ok(TimedDocument)` - 只读的文档模型。
/// * `Err(ConvertError)` - XML 无法解析、根元素不是 `<tt>` 或缺少 `<body>` 时返回错误。
pub fn parse_ttml(content: &str) -> Result<TimedDocument, ConvertError> {
    let root = tree::read_tree(content)?;

    if root.name != TAG_TT {
        return Err(ConvertError::MalformedInput(format!(
            "根元素应为 <tt>，实际为 <{}>",
            root.name
        )));
    }

    let language = root.attr(ATTR_XML_LANG).map(str::to_owned);
    let timing = TimingMode::from_attribute(root.attr(ATTR_ITUNES_TIMING));

    let metadata = root
        .child(TAG_HEAD)
        .and_then(|head| head.child(TAG_METADATA))
        .and_then(|meta| meta.child(TAG_ITUNES_METADATA))
        .map(metadata::parse_itunes_metadata);

    let body = root
        .child(TAG_BODY)
        .ok_or_else(|| ConvertError::MalformedInput("文档缺少 <body> 元素".to_string()))?;
    let sections = body::parse_sections(body);

    debug!(
        "[TTML] 语言: {:?}, 计时模式: {:?}, 段落数: {}",
        language,
        timing,
        sections.len()
    );

    Ok(TimedDocument {
        language,
        timing,
        metadata,
        sections,
    })
}
