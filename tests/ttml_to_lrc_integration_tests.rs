use ttml_lrc_rs::{
    LyricsError, OutputFormat, TimedDocument, TimingMode, convert,
    converter::{
        convert_ttml_to_lrc,
        processors::side_channel_resolver::{ScriptPolicy, SideChannels},
    },
};

use std::path::Path;

fn load_test_data(filename: &str) -> String {
    let path = Path::new("tests/test_data").join(filename);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("读取测试文件 '{:?}' 失败: {}", path, e))
}

#[test_log::test]
fn test_line_timed_with_translation_and_transliteration() {
    let content = load_test_data("line_timed_localized.ttml");
    let lrc = convert(&content, OutputFormat::Lrc).unwrap();

    let expected = [
        "[00:01.00]おはよう",
        "[00:01.00]Good morning",
        "[00:01.00]ohayou",
        "[00:04.50]おやすみ",
        "[00:04.50]Good night",
        "[00:12.25]Love song",
    ];
    assert_eq!(lrc, expected.join("\n"));
    assert!(!lrc.ends_with('\n'), "输出末尾不应有换行符");
}

#[test_log::test]
fn test_line_timed_parsed_model() {
    let content = load_test_data("line_timed_localized.ttml");
    let document = TimedDocument::parse(&content).unwrap();

    assert_eq!(document.timing, TimingMode::Line);
    assert_eq!(document.language.as_deref(), Some("ja"));
    assert_eq!(document.sections.len(), 2);
    assert_eq!(document.units().count(), 3);

    let channels = SideChannels::new(&document);
    assert_eq!(channels.policy(), ScriptPolicy::General);
    assert!(channels.translation(Some("L3")).is_none());
    assert!(channels.transliteration(Some("L3")).is_some());
    assert!(channels.translation(None).is_none());
}

#[test_log::test]
fn test_word_timed_with_translation_and_transliteration() {
    let content = load_test_data("word_timed_localized.ttml");
    let lrc = convert_ttml_to_lrc(&content).unwrap();

    let expected = [
        "[00:01.00]愛[00:01.60]してる[00:02.40]",
        "[00:01.00]I love you[00:02.40]",
        "[00:01.00][00:01.00]ai [00:01.60]shiteru[00:02.40]",
        "[00:03.00]Never [00:03.50]gonna [00:04.00]stop[00:05.75]",
    ];
    assert_eq!(lrc, expected.join("\n"));
}

#[test_log::test]
fn test_untimed_document_renders_plain_text() {
    let content = load_test_data("untimed_plain.ttml");
    let lrc = convert(&content, OutputFormat::Lrc).unwrap();
    assert_eq!(lrc, "First line\nSecond line\nThird line");
}

#[test_log::test]
fn test_traditional_chinese_prefers_simplified_translation() {
    let content = load_test_data("traditional_chinese.ttml");
    let document = TimedDocument::parse(&content).unwrap();
    assert!(SideChannels::new(&document).policy().is_simplified_only());

    let lrc = convert(&content, OutputFormat::Lrc).unwrap();
    assert_eq!(lrc, "[00:02.00]我爱你");
}

#[test_log::test]
fn test_traditional_chinese_without_simplified_translation() {
    let content = load_test_data("traditional_chinese.ttml")
        .replace(r#"xml:lang="zh-Hans""#, r#"xml:lang="ja""#);
    let lrc = convert(&content, OutputFormat::Lrc).unwrap();

    let expected = [
        "[00:02.00]我愛你",
        "[00:02.00]I love you",
        "[00:02.00]wo ai ni",
        "[00:05.00]沒有簡體翻譯的行",
        "[00:05.00]A line with a translation",
    ];
    assert_eq!(lrc, expected.join("\n"));
}

#[test_log::test]
fn test_raw_output_returns_document_unchanged() {
    let content = load_test_data("word_timed_localized.ttml");
    assert_eq!(convert(&content, OutputFormat::Raw).unwrap(), content);
}

#[test_log::test]
fn test_missing_begin_fails_whole_conversion() {
    let content = load_test_data("line_timed_localized.ttml").replace(
        r#"<p begin="00:04.500" end="00:08.000""#,
        r#"<p end="00:08.000""#,
    );
    assert!(matches!(
        convert(&content, OutputFormat::Lrc),
        Err(LyricsError::NoSynchronizedLyrics)
    ));
}

#[test_log::test]
fn test_malformed_timestamp_fails_whole_conversion() {
    let content = load_test_data("word_timed_localized.ttml")
        .replace(r#"end="00:04.000">gonna"#, r#"end="four">gonna"#);
    assert!(matches!(
        convert(&content, OutputFormat::Lrc),
        Err(LyricsError::MalformedTimestamp(_))
    ));
}

#[test_log::test]
fn test_malformed_documents() {
    let content = load_test_data("line_timed_localized.ttml");
    let truncated = content.split("<body").next().unwrap();
    assert!(matches!(
        convert(truncated, OutputFormat::Lrc),
        Err(LyricsError::MalformedInput(_))
    ));

    assert!(matches!(
        convert("<tt><head/></tt>", OutputFormat::Lrc),
        Err(LyricsError::MalformedInput(_))
    ));
    assert!(matches!(
        convert("", OutputFormat::Lrc),
        Err(LyricsError::MalformedInput(_))
    ));
}
