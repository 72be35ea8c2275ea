//! # TTML 解析器 - 元素树
//!
//! 将 `quick-xml` 的事件流收集为一棵只读的元素树，供后续映射为文档模型。

use std::borrow::Cow;

use quick_xml::{
    Reader,
    events::{BytesRef, BytesStart, Event},
};

use crate::converter::types::ConvertError;

/// 元素树中的节点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum XmlNode {
    Text(String),
    Element(XmlElement),
}

/// 一个 XML 元素。`name` 为本地名（不含命名空间前缀）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(super) struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// 按完整属性名（例如 `xml:lang`）查找属性值。
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.child_elements().filter(move |element| element.name == name)
    }

    /// 第一个名为 `name` 的直接子元素。
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|element| element.name == name)
    }

    /// 元素内全部字符数据（递归）。
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        self.collect_text(&mut output);
        output
    }

    fn collect_text(&self, output: &mut String) {
        for node in &self.children {
            match node {
                XmlNode::Text(text) => output.push_str(text),
                XmlNode::Element(element) => element.collect_text(output),
            }
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // 实体引用会把一段文本拆成多个事件，这里把它们重新拼接起来
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_owned()));
        }
    }
}

/// 读取整个文档，返回根元素。
///
/// # 错误
/// XML 不合法、存在未闭合元素或文档没有根元素时返回错误。
pub(super) fn read_tree(content: &str) -> Result<XmlElement, ConvertError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().expand_empty_elements = true;

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(start_element(&e, &reader)?),
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    ConvertError::MalformedInput(format!(
                        "位置 {} 出现了多余的结束标签",
                        reader.buffer_position()
                    ))
                })?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(XmlNode::Element(element)),
                    None if root.is_some() => {
                        return Err(ConvertError::MalformedInput(
                            "文档包含多个根元素".to_string(),
                        ));
                    }
                    None => root = Some(element),
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&e.xml_content()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&e.decode()?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    current.push_text(&resolve_reference(&e)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(ConvertError::MalformedInput(format!(
            "元素 <{}> 未闭合",
            unclosed.name
        )));
    }

    root.ok_or_else(|| ConvertError::MalformedInput("文档中没有任何元素".to_string()))
}

fn start_element(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<XmlElement, ConvertError> {
    let name = utf8(e.local_name().into_inner())?.to_owned();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = utf8(attr.key.as_ref())?.to_owned();
        let value = attr.decode_and_unescape_value(reader.decoder())?.into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// 解析 `&amp;`、`&#x4E00;` 一类的实体引用。
fn resolve_reference(e: &BytesRef<'_>) -> Result<Cow<'static, str>, ConvertError> {
    let entity_name = utf8(e.as_ref())?;

    if let Some(num_str) = entity_name.strip_prefix('#') {
        let (radix, code_point_str) = num_str
            .strip_prefix('x')
            .map_or((10, num_str), |stripped| (16, stripped));
        return u32::from_str_radix(code_point_str, radix)
            .ok()
            .and_then(char::from_u32)
            .map(|c| Cow::Owned(c.to_string()))
            .ok_or_else(|| {
                ConvertError::MalformedInput(format!("无效的 XML 数字实体 '&{entity_name};'"))
            });
    }

    let resolved = match entity_name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        _ => {
            return Err(ConvertError::MalformedInput(format!(
                "未知的 XML 实体 '&{entity_name};'"
            )));
        }
    };
    Ok(Cow::Borrowed(resolved))
}

fn utf8(bytes: &[u8]) -> Result<&str, ConvertError> {
    std::str::from_utf8(bytes)
        .map_err(|err| ConvertError::MalformedInput(format!("无法将名称解码为 UTF-8: {err}")))
}
