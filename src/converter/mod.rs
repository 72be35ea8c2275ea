//! 歌词转换器核心模块

pub mod generators;
pub mod parsers;
pub mod processors;
pub mod timestamp;
pub mod types;
pub mod utils;

pub use types::{LrcTimestamp, OutputFormat, TimedDocument, TimingMode};

use crate::converter::{
    generators::{
        lrc_generator::generate_line_timed_lrc, plain_text_generator::generate_plain_text,
        syllable_lrc_generator::generate_word_timed_lrc,
    },
    processors::side_channel_resolver::SideChannels,
    types::ConvertError,
};
use tracing::debug;

// ==========================================================
//  顶级转换入口
// ==========================================================

/// 将 TTML 字符串转换为 LRC 文本。
///
/// # 参数
///
/// * `content` - 原始 TTML 文档。
///
/// # 返回
///
/// * `Result<String, ConvertError>` - 成功时返回以换行符连接的 LRC 行（末尾没有换行符）。
pub fn convert_ttml_to_lrc(content: &str) -> Result<String, ConvertError> {
    let document = TimedDocument::parse(content)?;
    render_document(&document)
}

/// 根据文档的计时模式选择对应的生成器。
pub fn render_document(document: &TimedDocument) -> Result<String, ConvertError> {
    debug!("[Converter] 计时模式: {:?}", document.timing);

    match document.timing {
        TimingMode::Word => generate_word_timed_lrc(document, &SideChannels::new(document)),
        TimingMode::None => Ok(generate_plain_text(document)),
        TimingMode::Line => generate_line_timed_lrc(document, &SideChannels::new(document)),
    }
}
