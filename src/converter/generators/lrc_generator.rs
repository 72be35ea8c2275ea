//! 逐行 TTML → LRC 生成器。

use tracing::debug;

use crate::converter::{
    processors::{side_channel_resolver::SideChannels, text_renderer::flat_text},
    timestamp::parse_timestamp,
    types::{ConvertError, LrcTimestamp, TimedDocument},
    utils::contains_cjk,
};

/// 逐行 LRC 生成的主入口函数。
///
/// 每个 `<p>` 依次输出原文、翻译（非空时）和音译（非空且原文含 CJK 字符时），
/// 三者共用该行的开始时间。仅简体策略下只输出简体翻译。
///
/// # 错误
/// 任意一行缺少 `begin` 时返回 `ConvertError::NoSynchronizedLyrics`，不会产生部分输出。
pub fn generate_line_timed_lrc(
    document: &TimedDocument,
    channels: &SideChannels<'_>,
) -> Result<String, ConvertError> {
    let simplified_only = channels.policy().is_simplified_only();
    let mut lrc_lines = Vec::new();

    for unit in document.units() {
        let begin = unit
            .begin
            .as_deref()
            .ok_or(ConvertError::NoSynchronizedLyrics)?;
        let timestamp = parse_timestamp(begin)?;
        let key = unit.key.as_deref();

        let translation = channels
            .translation(key)
            .map(|fragment| flat_text(&fragment.content))
            .unwrap_or_default();

        if simplified_only {
            push_line_if_not_empty(&mut lrc_lines, timestamp, &translation);
            continue;
        }

        let text = flat_text(&unit.content);
        let transliteration = channels
            .transliteration(key)
            .map(|fragment| flat_text(&fragment.content))
            .unwrap_or_default();

        lrc_lines.push(format!("{timestamp}{text}"));
        push_line_if_not_empty(&mut lrc_lines, timestamp, &translation);
        if contains_cjk(&text) {
            push_line_if_not_empty(&mut lrc_lines, timestamp, &transliteration);
        }
    }

    debug!("[LRC] 逐行转换完成，共 {} 行", lrc_lines.len());
    Ok(lrc_lines.join("\n"))
}

fn push_line_if_not_empty(lines: &mut Vec<String>, timestamp: LrcTimestamp, text: &str) {
    if !text.is_empty() {
        lines.push(format!("{timestamp}{text}"));
    }
}
