//! # TTML 解析器 - 常量定义
//!
//! 元素名均为去掉命名空间前缀后的本地名，属性名保留前缀。

pub(super) const TAG_TT: &str = "tt";
pub(super) const TAG_HEAD: &str = "head";
pub(super) const TAG_METADATA: &str = "metadata";
pub(super) const TAG_ITUNES_METADATA: &str = "iTunesMetadata";
pub(super) const TAG_TRANSLATIONS: &str = "translations";
pub(super) const TAG_TRANSLATION: &str = "translation";
pub(super) const TAG_TRANSLITERATIONS: &str = "transliterations";
pub(super) const TAG_TRANSLITERATION: &str = "transliteration";
pub(super) const TAG_TEXT: &str = "text";
pub(super) const TAG_BODY: &str = "body";
pub(super) const TAG_DIV: &str = "div";
pub(super) const TAG_P: &str = "p";

pub(super) const ATTR_ITUNES_TIMING: &str = "itunes:timing";
pub(super) const ATTR_XML_LANG: &str = "xml:lang";
pub(super) const ATTR_ITUNES_KEY: &str = "itunes:key";
pub(super) const ATTR_BEGIN: &str = "begin";
pub(super) const ATTR_END: &str = "end";
pub(super) const ATTR_FOR: &str = "for";
pub(super) const ATTR_TEXT: &str = "text";
