//! 文本内容的两种渲染方式：扁平文本，以及带逐字时间戳的文本。
//!
//! 原文行、翻译片段和音译片段共用这里的逻辑。

use std::fmt::Write as FmtWrite;

use crate::converter::{
    timestamp::parse_timestamp,
    types::{ConvertError, Inline, LrcTimestamp, TextContent},
};

/// 逐字渲染时如何对待 `end` 属性。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTime {
    /// 每个带时间的音节都必须有合法的 `end`，最后一个音节的 `end` 作为行尾时间。
    Required,
    /// 不读取 `end`。
    Ignored,
}

/// 逐字渲染的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedText {
    /// 形如 `[00:00.00]A[00:00.50] B` 的正文。
    pub body: String,
    /// 第一个音节的开始时间。
    pub first_begin: LrcTimestamp,
    /// 最后一个音节的结束时间，仅在 [`EndTime::Required`] 时存在。
    pub last_end: Option<LrcTimestamp>,
}

/// 扁平文本：优先使用 `text` 属性，否则按顺序拼接字符数据和子元素文本。
#[must_use]
pub fn flat_text(content: &TextContent) -> String {
    if let Some(text) = &content.text_attr {
        return text.clone();
    }

    content
        .nodes
        .iter()
        .map(|node| match node {
            Inline::Text(text) => text.as_str(),
            Inline::Span(span) => span.text.as_str(),
        })
        .collect()
}

/// 逐字文本：每个带 `begin` 的音节渲染为 `时间戳 + 文本`。
///
/// 第一个音节之前的字符数据被丢弃，之后的原样保留作为分隔符；没有 `begin` 的子元素被跳过。
///
/// # 返回
/// * `Ok(None)` - 内容中没有任何带时间的音节。
pub fn timed_text(
    content: &TextContent,
    end_time: EndTime,
) -> Result<Option<TimedText>, ConvertError> {
    let mut body = String::new();
    let mut first_begin: Option<LrcTimestamp> = None;
    let mut last_end: Option<LrcTimestamp> = None;

    for node in &content.nodes {
        match node {
            Inline::Text(text) => {
                if first_begin.is_some() {
                    body.push_str(text);
                }
            }
            Inline::Span(span) => {
                let Some(begin) = span.begin.as_deref() else {
                    continue;
                };
                let begin = parse_timestamp(begin)?;

                if end_time == EndTime::Required {
                    let end = span.end.as_deref().ok_or_else(|| {
                        ConvertError::MalformedTimestamp(format!(
                            "音节 '{}' 缺少 end 时间",
                            span.text
                        ))
                    })?;
                    last_end = Some(parse_timestamp(end)?);
                }

                write!(body, "{begin}{}", span.text)?;
                first_begin.get_or_insert(begin);
            }
        }
    }

    Ok(first_begin.map(|first_begin| TimedText {
        body,
        first_begin,
        last_end,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::types::TimedSpan;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn span(begin: &str, end: &str, s: &str) -> Inline {
        Inline::Span(TimedSpan::new(begin, end, s))
    }

    #[test]
    fn test_flat_text_prefers_attribute() {
        let content = TextContent {
            text_attr: Some("attr".to_string()),
            nodes: vec![text("ignored")],
        };
        assert_eq!(flat_text(&content), "attr");
    }

    #[test]
    fn test_flat_text_concatenates_nodes_verbatim() {
        let content = TextContent::from_nodes(vec![
            text(" "),
            span("0.000", "0.500", "Hello"),
            text("  "),
            span("0.500", "1.000", "world"),
        ]);
        assert_eq!(flat_text(&content), " Hello  world");
    }

    #[test]
    fn test_timed_text_drops_leading_separator() {
        let content = TextContent::from_nodes(vec![
            text("\n    "),
            span("00:00.000", "00:00.500", "A"),
            text(" "),
            span("00:00.500", "00:01.000", "B"),
        ]);
        let rendered = timed_text(&content, EndTime::Required).unwrap().unwrap();

        assert_eq!(rendered.body, "[00:00.00]A [00:00.50]B");
        assert_eq!(rendered.first_begin, LrcTimestamp::new(0, 0, 0));
        assert_eq!(rendered.last_end, Some(LrcTimestamp::new(0, 1, 0)));
    }

    #[test]
    fn test_timed_text_skips_untimed_spans() {
        let content = TextContent::from_nodes(vec![
            span("1.000", "1.500", "A"),
            Inline::Span(TimedSpan {
                text: "(bg)".to_string(),
                ..Default::default()
            }),
            span("1.500", "2.000", "B"),
        ]);
        let rendered = timed_text(&content, EndTime::Required).unwrap().unwrap();
        assert_eq!(rendered.body, "[00:01.00]A[00:01.50]B");
    }

    #[test]
    fn test_timed_text_without_spans() {
        let content = TextContent::from_nodes(vec![text("plain")]);
        assert_eq!(timed_text(&content, EndTime::Required).unwrap(), None);
        assert_eq!(timed_text(&TextContent::from_attr("x"), EndTime::Ignored).unwrap(), None);
    }

    #[test]
    fn test_end_time_requirements() {
        let content = TextContent::from_nodes(vec![Inline::Span(TimedSpan {
            begin: Some("1.000".to_string()),
            end: None,
            text: "A".to_string(),
        })]);

        assert!(matches!(
            timed_text(&content, EndTime::Required),
            Err(ConvertError::MalformedTimestamp(_))
        ));

        let rendered = timed_text(&content, EndTime::Ignored).unwrap().unwrap();
        assert_eq!(rendered.body, "[00:01.00]A");
        assert_eq!(rendered.last_end, None);
    }

    #[test]
    fn test_malformed_begin_is_an_error() {
        let content = TextContent::from_nodes(vec![span("soon", "1.000", "A")]);
        assert!(matches!(
            timed_text(&content, EndTime::Ignored),
            Err(ConvertError::MalformedTimestamp(_))
        ));
    }
}
