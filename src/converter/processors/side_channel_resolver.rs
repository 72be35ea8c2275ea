//! 翻译与音译（“旁路通道”）的查找，以及繁体/简体的输出策略。

use std::collections::{HashMap, hash_map::Entry};

use tracing::{debug, warn};

use crate::converter::types::{Fragment, TimedDocument, Variant};

/// 繁体中文的语言标签。
pub const LANG_TRADITIONAL_CHINESE: &str = "zh-Hant";
/// 简体中文的语言标签。
pub const LANG_SIMPLIFIED_CHINESE: &str = "zh-Hans";

/// 文档级的文字变体策略，每个文档计算一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptPolicy<'a> {
    /// 常规输出：原文、翻译、音译。
    General,
    /// 繁体原文且存在简体翻译：只输出简体翻译。
    SimplifiedOnly(&'a Variant),
}

impl<'a> ScriptPolicy<'a> {
    /// 根据文档语言和可用翻译确定策略。
    #[must_use]
    pub fn for_document(document: &'a TimedDocument) -> Self {
        if document.language.as_deref() == Some(LANG_TRADITIONAL_CHINESE)
            && let Some(simplified) = document.translation_for_language(LANG_SIMPLIFIED_CHINESE)
        {
            Self::SimplifiedOnly(simplified)
        } else {
            Self::General
        }
    }

    /// 是否为仅简体策略。
    #[must_use]
    pub fn is_simplified_only(&self) -> bool {
        matches!(self, Self::SimplifiedOnly(_))
    }
}

/// 按 `for` 键建立的翻译与音译索引。只读，不修改文档。
#[derive(Debug, Clone)]
pub struct SideChannels<'a> {
    policy: ScriptPolicy<'a>,
    translations: HashMap<&'a str, &'a Fragment>,
    transliterations: HashMap<&'a str, &'a Fragment>,
}

impl<'a> SideChannels<'a> {
    /// 为文档建立索引。
    ///
    /// 翻译在常规策略下取第一个 `<translation>`，在仅简体策略下取 `zh-Hans` 那一个；
    /// 音译总是取第一个 `<transliteration>`。
    #[must_use]
    pub fn new(document: &'a TimedDocument) -> Self {
        let policy = ScriptPolicy::for_document(document);
        let metadata = document.metadata.as_ref();

        let translation_variant = match policy {
            ScriptPolicy::SimplifiedOnly(variant) => Some(variant),
            ScriptPolicy::General => metadata.and_then(|meta| meta.translations.first()),
        };
        let transliteration_variant = metadata.and_then(|meta| meta.transliterations.first());

        debug!(
            "[SideChannels] 策略: {}, 翻译语言: {:?}, 音译语言: {:?}",
            if policy.is_simplified_only() { "仅简体" } else { "常规" },
            translation_variant.and_then(|v| v.language.as_deref()),
            transliteration_variant.and_then(|v| v.language.as_deref()),
        );

        Self {
            policy,
            translations: index_fragments(translation_variant),
            transliterations: index_fragments(transliteration_variant),
        }
    }

    /// 该文档的文字变体策略。
    #[must_use]
    pub fn policy(&self) -> ScriptPolicy<'a> {
        self.policy
    }

    /// 查找某一行的翻译片段。没有键或找不到时返回 `None`。
    #[must_use]
    pub fn translation(&self, key: Option<&str>) -> Option<&'a Fragment> {
        key.and_then(|key| self.translations.get(key).copied())
    }

    /// 查找某一行的音译片段。
    #[must_use]
    pub fn transliteration(&self, key: Option<&str>) -> Option<&'a Fragment> {
        key.and_then(|key| self.transliterations.get(key).copied())
    }
}

fn index_fragments(variant: Option<&Variant>) -> HashMap<&str, &Fragment> {
    let Some(variant) = variant else {
        return HashMap::new();
    };

    let mut index = HashMap::with_capacity(variant.fragments.len());
    for fragment in &variant.fragments {
        match index.entry(fragment.key.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(fragment);
            }
            Entry::Occupied(_) => {
                warn!(
                    "[SideChannels] 键 '{}' 在 {:?} 中重复出现，使用第一个",
                    fragment.key, variant.language
                );
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::types::{MetadataBlock, TextContent};

    fn variant(language: &str, entries: &[(&str, &str)]) -> Variant {
        Variant {
            language: Some(language.to_string()),
            fragments: entries
                .iter()
                .map(|(key, text)| Fragment {
                    key: (*key).to_string(),
                    content: TextContent::from_attr(*text),
                })
                .collect(),
        }
    }

    fn document(language: &str, translations: Vec<Variant>, transliterations: Vec<Variant>) -> TimedDocument {
        TimedDocument {
            language: Some(language.to_string()),
            metadata: Some(MetadataBlock {
                translations,
                transliterations,
            }),
            ..Default::default()
        }
    }

    fn text_of(fragment: Option<&Fragment>) -> Option<&str> {
        fragment.and_then(|f| f.content.text_attr.as_deref())
    }

    #[test]
    fn test_general_policy_uses_first_variant() {
        let doc = document(
            "ja",
            vec![variant("en", &[("L1", "first")]), variant("zh-Hans", &[("L1", "second")])],
            vec![variant("ja-Latn", &[("L1", "romaji")])],
        );
        let channels = SideChannels::new(&doc);

        assert_eq!(channels.policy(), ScriptPolicy::General);
        assert_eq!(text_of(channels.translation(Some("L1"))), Some("first"));
        assert_eq!(text_of(channels.transliteration(Some("L1"))), Some("romaji"));
        assert!(channels.translation(Some("L2")).is_none());
        assert!(channels.translation(None).is_none());
    }

    #[test]
    fn test_simplified_only_policy() {
        let doc = document(
            "zh-Hant",
            vec![variant("en", &[("L1", "english")]), variant("zh-Hans", &[("L1", "简体")])],
            vec![],
        );
        let channels = SideChannels::new(&doc);

        assert!(channels.policy().is_simplified_only());
        assert_eq!(text_of(channels.translation(Some("L1"))), Some("简体"));
    }

    #[test]
    fn test_traditional_without_simplified_is_general() {
        let doc = document("zh-Hant", vec![variant("en", &[("L1", "english")])], vec![]);
        let channels = SideChannels::new(&doc);

        assert_eq!(channels.policy(), ScriptPolicy::General);
        assert_eq!(text_of(channels.translation(Some("L1"))), Some("english"));
    }

    #[test]
    fn test_simplified_translation_without_traditional_source_is_general() {
        let doc = document("ja", vec![variant("zh-Hans", &[("L1", "简体")])], vec![]);
        assert_eq!(ScriptPolicy::for_document(&doc), ScriptPolicy::General);
    }

    #[test]
    fn test_duplicate_keys_resolve_to_first() {
        let doc = document("en", vec![variant("ja", &[("L1", "one"), ("L1", "two")])], vec![]);
        let channels = SideChannels::new(&doc);
        assert_eq!(text_of(channels.translation(Some("L1"))), Some("one"));
    }

    #[test]
    fn test_document_without_metadata() {
        let doc = TimedDocument::default();
        let channels = SideChannels::new(&doc);
        assert_eq!(channels.policy(), ScriptPolicy::General);
        assert!(channels.transliteration(Some("L1")).is_none());
    }
}
