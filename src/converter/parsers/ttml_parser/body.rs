//! # TTML 解析器 - Body 映射
//!
//! 将 `<body>` 下的 `<div>`/`<p>` 以及 `<text>` 片段映射为文档模型。

use super::{
    constants::{ATTR_BEGIN, ATTR_END, ATTR_ITUNES_KEY, ATTR_TEXT, TAG_DIV, TAG_P},
    tree::{XmlElement, XmlNode},
};
use crate::converter::types::{Inline, LyricUnit, Section, TextContent, TimedSpan};

/// 收集 `<body>` 中的段落。
///
/// 每个 `<div>` 对应一个段落，其中任意深度的 `<p>` 都属于该段落；
/// 不在任何 `<div>` 内的连续 `<p>` 归入同一个隐式段落。
pub(super) fn parse_sections(body: &XmlElement) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut loose_units = Vec::new();

    for element in body.child_elements() {
        match element.name.as_str() {
            TAG_DIV => {
                if !loose_units.is_empty() {
                    sections.push(Section {
                        units: std::mem::take(&mut loose_units),
                    });
                }
                let mut units = Vec::new();
                collect_units(element, &mut units);
                sections.push(Section { units });
            }
            TAG_P => loose_units.push(parse_unit(element)),
            _ => collect_units(element, &mut loose_units),
        }
    }

    if !loose_units.is_empty() {
        sections.push(Section { units: loose_units });
    }

    sections
}

/// 按文档顺序收集 `element` 之下任意深度的 `<p>`，不进入 `<p>` 内部。
fn collect_units(element: &XmlElement, units: &mut Vec<LyricUnit>) {
    for child in element.child_elements() {
        if child.name == TAG_P {
            units.push(parse_unit(child));
        } else {
            collect_units(child, units);
        }
    }
}

fn parse_unit(p: &XmlElement) -> LyricUnit {
    LyricUnit {
        key: p.attr(ATTR_ITUNES_KEY).map(str::to_owned),
        begin: p.attr(ATTR_BEGIN).map(str::to_owned),
        end: p.attr(ATTR_END).map(str::to_owned),
        content: parse_text_content(p),
    }
}

/// 读取 `<p>` 或 `<text>` 的内容。
///
/// 字符数据原样保留；每个子元素都视为一个 `<span>`，其文本为 `text` 属性或全部字符数据。
pub(super) fn parse_text_content(element: &XmlElement) -> TextContent {
    let nodes = element
        .children
        .iter()
        .map(|node| match node {
            XmlNode::Text(text) => Inline::Text(text.clone()),
            XmlNode::Element(child) => Inline::Span(TimedSpan {
                begin: child.attr(ATTR_BEGIN).map(str::to_owned),
                end: child.attr(ATTR_END).map(str::to_owned),
                text: child
                    .attr(ATTR_TEXT)
                    .map_or_else(|| child.text_content(), str::to_owned),
            }),
        })
        .collect();

    TextContent {
        text_attr: element.attr(ATTR_TEXT).map(str::to_owned),
        nodes,
    }
}
