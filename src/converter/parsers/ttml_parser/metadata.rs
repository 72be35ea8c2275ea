//! # TTML 解析器 - Metadata 映射
//!
//! 读取 `<iTunesMetadata>` 中的 `<translations>` 与 `<transliterations>`。

use tracing::warn;

use super::{
    body::parse_text_content,
    constants::{
        ATTR_FOR, ATTR_XML_LANG, TAG_TEXT, TAG_TRANSLATION, TAG_TRANSLATIONS,
        TAG_TRANSLITERATION, TAG_TRANSLITERATIONS,
    },
    tree::XmlElement,
};
use crate::converter::types::{Fragment, MetadataBlock, Variant};

pub(super) fn parse_itunes_metadata(itunes_metadata: &XmlElement) -> MetadataBlock {
    MetadataBlock {
        translations: parse_variants(itunes_metadata, TAG_TRANSLATIONS, TAG_TRANSLATION),
        transliterations: parse_variants(
            itunes_metadata,
            TAG_TRANSLITERATIONS,
            TAG_TRANSLITERATION,
        ),
    }
}

fn parse_variants(itunes_metadata: &XmlElement, container: &str, entry: &str) -> Vec<Variant> {
    itunes_metadata
        .child(container)
        .map(|container| container.children_named(entry).map(parse_variant).collect())
        .unwrap_or_default()
}

fn parse_variant(variant: &XmlElement) -> Variant {
    let fragments = variant
        .children_named(TAG_TEXT)
        .filter_map(|text| match text.attr(ATTR_FOR) {
            Some(key) => Some(Fragment {
                key: key.to_owned(),
                content: parse_text_content(text),
            }),
            None => {
                warn!("<{}> 中的 <text> 缺少 for 属性，已忽略", variant.name);
                None
            }
        })
        .collect();

    Variant {
        language: variant.attr(ATTR_XML_LANG).map(str::to_owned),
        fragments,
    }
}
