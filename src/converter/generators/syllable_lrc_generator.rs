//! 逐字 TTML → LRC 生成器。
//!
//! 输出形如 `[00:00.00]A[00:00.50] B[00:01.00]C[00:01.50]` 的行：
//! 每个音节前带自己的开始时间，行尾附加最后一个音节的结束时间。

use tracing::{debug, warn};

use crate::converter::{
    processors::{
        side_channel_resolver::{ScriptPolicy, SideChannels},
        text_renderer::{EndTime, TimedText, flat_text, timed_text},
    },
    types::{ConvertError, Fragment, LrcTimestamp, LyricUnit, TimedDocument},
    utils::contains_cjk,
};

/// 逐字 LRC 生成的主入口函数。
///
/// # 错误
/// 任意音节的 `begin`/`end` 无法解析时返回 `ConvertError::MalformedTimestamp`。
pub fn generate_word_timed_lrc(
    document: &TimedDocument,
    channels: &SideChannels<'_>,
) -> Result<String, ConvertError> {
    let mut lrc_lines = Vec::new();

    for unit in document.units() {
        write_unit(&mut lrc_lines, unit, channels)?;
    }

    debug!("[LRC] 逐字转换完成，共 {} 行", lrc_lines.len());
    Ok(lrc_lines.join("\n"))
}

fn write_unit(
    lrc_lines: &mut Vec<String>,
    unit: &LyricUnit,
    channels: &SideChannels<'_>,
) -> Result<(), ConvertError> {
    let Some(original) = timed_text(&unit.content, EndTime::Required)? else {
        warn!("[LRC] 行 {:?} 中没有带时间的音节，已跳过", unit.key);
        return Ok(());
    };
    // EndTime::Required 保证了至少一个音节时 last_end 存在
    let end = original
        .last_end
        .map(|ts| ts.to_string())
        .unwrap_or_default();
    let key = unit.key.as_deref();

    let transliteration_line = channels
        .transliteration(key)
        .map(|fragment| build_transliteration_line(fragment, original.first_begin))
        .transpose()?
        .flatten();

    let translation_line = channels
        .translation(key)
        .map(|fragment| build_translation_line(fragment, channels.policy(), original.first_begin))
        .transpose()?
        .flatten();

    if channels.policy().is_simplified_only() {
        if let Some(line) = translation_line {
            lrc_lines.push(format!("{line}{end}"));
        }
        return Ok(());
    }

    lrc_lines.push(format!("{}{end}", original.body));
    if let Some(line) = translation_line {
        lrc_lines.push(format!("{line}{end}"));
    }
    if let Some(line) = transliteration_line
        && contains_cjk(&original.body)
    {
        lrc_lines.push(format!("{line}{end}"));
    }

    Ok(())
}

/// 音译行：逐字渲染片段，并在最前面加上该行的开始时间。
///
/// 片段没有带时间的音节时，退回为 `行开始时间 + 扁平文本`。
fn build_transliteration_line(
    fragment: &Fragment,
    line_begin: LrcTimestamp,
) -> Result<Option<String>, ConvertError> {
    Ok(match timed_text(&fragment.content, EndTime::Ignored)? {
        Some(TimedText { body, .. }) => Some(format!("{line_begin}{body}")),
        None => flat_line(fragment, line_begin),
    })
}

/// 翻译行。
///
/// 仅简体策略下，片段若含带时间的音节则逐字渲染（不加前缀），否则退回为扁平行；
/// 常规策略下总是 `行开始时间 + 扁平文本`，不按音节重新计时。
fn build_translation_line(
    fragment: &Fragment,
    policy: ScriptPolicy<'_>,
    line_begin: LrcTimestamp,
) -> Result<Option<String>, ConvertError> {
    if let ScriptPolicy::SimplifiedOnly(_) = policy
        && let Some(TimedText { body, .. }) = timed_text(&fragment.content, EndTime::Ignored)?
    {
        return Ok(Some(body));
    }
    Ok(flat_line(fragment, line_begin))
}

fn flat_line(fragment: &Fragment, line_begin: LrcTimestamp) -> Option<String> {
    let text = flat_text(&fragment.content);
    (!text.is_empty()).then(|| format!("{line_begin}{text}"))
}
