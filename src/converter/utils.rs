//! 包含一些工具函数的模块。

/// 汉字、假名、谚文及相关兼容区块的码位范围（闭区间，按起点升序）。
static CJK_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x11FF),   // Hangul Jamo
    (0x2E80, 0x2EFF),   // CJK Radicals Supplement
    (0x2F00, 0x2FDF),   // Kangxi Radicals
    (0x2FF0, 0x2FFF),   // Ideographic Description Characters
    (0x3000, 0x303F),   // CJK Symbols and Punctuation
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x3130, 0x318F),   // Hangul Compatibility Jamo
    (0x31C0, 0x31EF),   // CJK Strokes
    (0x31F0, 0x31FF),   // Katakana Phonetic Extensions
    (0x3200, 0x32FF),   // Enclosed CJK Letters and Months
    (0x3300, 0x33FF),   // CJK Compatibility
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0xA960, 0xA97F),   // Hangul Jamo Extended-A
    (0xAC00, 0xD7AF),   // Hangul Syllables
    (0xD7B0, 0xD7FF),   // Hangul Jamo Extended-B
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0xFE30, 0xFE4F),   // CJK Compatibility Forms
    (0xFF65, 0xFF9F),   // Halfwidth Katakana
    (0xFFA0, 0xFFDC),   // Halfwidth Jamo
    (0x1AFF0, 0x1AFFF), // Kana Extended-B
    (0x1B000, 0x1B0FF), // Kana Supplement
    (0x1B100, 0x1B12F), // Kana Extended-A
    (0x1B130, 0x1B16F), // Small Kana Extension
    (0x1F200, 0x1F2FF), // Enclosed Ideographic Supplement
    (0x20000, 0x2A6DF), // CJK Unified Ideographs Extension B
    (0x2A700, 0x2B73F), // CJK Unified Ideographs Extension C
    (0x2B740, 0x2B81F), // CJK Unified Ideographs Extension D
    (0x2B820, 0x2CEAF), // CJK Unified Ideographs Extension E
    (0x2CEB0, 0x2EBEF), // CJK Unified Ideographs Extension F
    (0x2EBF0, 0x2EE5F), // CJK Unified Ideographs Extension I
    (0x2F800, 0x2FA1F), // CJK Compatibility Ideographs Supplement
    (0x30000, 0x3134F), // CJK Unified Ideographs Extension G
    (0x31350, 0x323AF), // CJK Unified Ideographs Extension H
];

/// 单个字符是否落在 CJK 范围表内。
#[must_use]
pub fn is_cjk_char(c: char) -> bool {
    let code = u32::from(c);
    CJK_RANGES
        .binary_search_by(|&(start, end)| {
            if code < start {
                std::cmp::Ordering::Greater
            } else if code > end {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// 文本中是否含有任意 CJK 字符。
///
/// 用于决定是否输出音译：音译只对汉字、假名、谚文原文有意义。
#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_char)
}
