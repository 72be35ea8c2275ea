//! 无时间轴 TTML 的纯文本输出。

use crate::converter::{processors::text_renderer::flat_text, types::TimedDocument};

/// 按文档顺序输出每一行去除首尾空白后的文本，跳过空行，不带任何时间戳。
///
/// 翻译和音译在此模式下不输出。
#[must_use]
pub fn generate_plain_text(document: &TimedDocument) -> String {
    document
        .units()
        .map(|unit| flat_text(&unit.content))
        .filter_map(|text| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
