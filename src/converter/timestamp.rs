//! TTML 时间戳解析与 LRC 时间戳渲染。

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::converter::types::{ConvertError, LrcTimestamp};

/// `H:M:S.fraction`
static HOURS_MINUTES_SECONDS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<h>[0-9]+):(?P<m>[0-9]+):(?P<s>[0-9]+)\.(?P<f>[0-9]+)$")
        .expect("编译 HOURS_MINUTES_SECONDS_REGEX 失败")
});

/// `M:S.fraction`
static MINUTES_SECONDS_FRACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<m>[0-9]+):(?P<s>[0-9]+)\.(?P<f>[0-9]+)$")
        .expect("编译 MINUTES_SECONDS_FRACTION_REGEX 失败")
});

/// `M:S`
static MINUTES_SECONDS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<m>[0-9]+):(?P<s>[0-9]+)$").expect("编译 MINUTES_SECONDS_REGEX 失败")
});

/// `S.fraction`，允许带 `s` 单位后缀
static SECONDS_FRACTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<s>[0-9]+)\.(?P<f>[0-9]+)s?$").expect("编译 SECONDS_FRACTION_REGEX 失败")
});

/// 解析 TTML 的 `begin`/`end` 时间值。
///
/// 含冒号时依次尝试 `H:M:S.fraction`、`M:S.fraction`、`M:S`；
/// 不含冒号时只接受 `S.fraction`。小时会被折算进分钟。
///
/// 小数部分按毫秒理解（不足三位右侧补零，超过三位的部分丢弃），再整除 10 得到百分之一秒。
///
/// # 错误
/// 不匹配任何格式时返回 `ConvertError::MalformedTimestamp`。
pub fn parse_timestamp(raw: &str) -> Result<LrcTimestamp, ConvertError> {
    let value = raw.trim();

    let (hours, minutes, seconds, millis) = if value.contains(':') {
        if let Some(caps) = HOURS_MINUTES_SECONDS_REGEX.captures(value) {
            (
                number(&caps, "h", raw)?,
                number(&caps, "m", raw)?,
                number(&caps, "s", raw)?,
                fraction_to_millis(&caps["f"]),
            )
        } else if let Some(caps) = MINUTES_SECONDS_FRACTION_REGEX.captures(value) {
            (
                0,
                number(&caps, "m", raw)?,
                number(&caps, "s", raw)?,
                fraction_to_millis(&caps["f"]),
            )
        } else if let Some(caps) = MINUTES_SECONDS_REGEX.captures(value) {
            (0, number(&caps, "m", raw)?, number(&caps, "s", raw)?, 0)
        } else {
            return Err(malformed(raw));
        }
    } else if let Some(caps) = SECONDS_FRACTION_REGEX.captures(value) {
        (
            0,
            0,
            number(&caps, "s", raw)?,
            fraction_to_millis(&caps["f"]),
        )
    } else {
        return Err(malformed(raw));
    };

    let minutes = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| malformed(raw))?;

    Ok(LrcTimestamp::new(minutes, seconds, millis / 10))
}

/// 将时间戳渲染为 `[MM:SS.CC]`。
#[must_use]
pub fn render_timestamp(minutes: u64, seconds: u64, hundredths: u64) -> String {
    LrcTimestamp::new(minutes, seconds, hundredths).to_string()
}

fn number(caps: &Captures<'_>, name: &str, raw: &str) -> Result<u64, ConvertError> {
    caps[name].parse::<u64>().map_err(|e| {
        ConvertError::MalformedTimestamp(format!("时间戳 '{raw}' 中的数值 '{}' 无效: {e}", &caps[name]))
    })
}

/// 小数部分 → 毫秒。正则只接受 ASCII 数字 `[0-9]`。
fn fraction_to_millis(fraction: &str) -> u64 {
    fraction
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0'))
}

fn malformed(raw: &str) -> ConvertError {
    ConvertError::MalformedTimestamp(format!("时间戳 '{raw}' 不符合任何可接受的格式"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> (u64, u64, u64) {
        let ts = parse_timestamp(raw).unwrap();
        (ts.minutes, ts.seconds, ts.hundredths)
    }

    #[test]
    fn test_parse_accepted_grammars() {
        assert_eq!(parse("01:02:03.456"), (62, 3, 45));
        assert_eq!(parse("01:02.345"), (1, 2, 34));
        assert_eq!(parse("3:07"), (3, 7, 0));
        assert_eq!(parse("12.345"), (0, 12, 34));
        assert_eq!(parse("12.345s"), (0, 12, 34));
        assert_eq!(parse("0.000"), (0, 0, 0));
    }

    #[test]
    fn test_fraction_is_read_as_milliseconds() {
        assert_eq!(parse("00:01.5"), (0, 1, 50));
        assert_eq!(parse("00:01.05"), (0, 1, 5));
        assert_eq!(parse("00:01.999"), (0, 1, 99));
        // 超过三位的精度被丢弃
        assert_eq!(parse("00:01.123456"), (0, 1, 12));
    }

    #[test]
    fn test_hours_fold_into_minutes() {
        assert_eq!(parse("2:00:00.000"), (120, 0, 0));
        assert_eq!(parse("1:59:59.990"), (119, 59, 99));
    }

    #[test]
    fn test_seconds_are_not_normalized() {
        assert_eq!(parse("75.500"), (0, 75, 50));
    }

    #[test]
    fn test_malformed_timestamps() {
        for raw in [
            "",
            "abc",
            "12",
            "12s",
            "1:2:3",
            "1:2:3:4.5",
            ".5",
            "1.",
            "-1.000",
            "1:xx",
            // 非 ASCII 数字
            "1.\u{0663}",
            "00:01.\u{0663}\u{0663}",
            "\u{0661}.500",
            "\u{FF11}:00.000",
        ] {
            assert!(
                matches!(parse_timestamp(raw), Err(ConvertError::MalformedTimestamp(_))),
                "'{raw}' 应被拒绝"
            );
        }
    }

    #[test]
    fn test_render_timestamp() {
        assert_eq!(render_timestamp(1, 2, 34), "[01:02.34]");
        assert_eq!(render_timestamp(0, 0, 0), "[00:00.00]");
        assert_eq!(render_timestamp(150, 9, 7), "[150:09.07]");
    }

    #[test]
    fn test_render_then_parse_is_fixed_point() {
        for raw in ["01:02:03.456", "59:59.999", "4:05", "12.3", "0.010s", "100:00.00"] {
            let first = parse_timestamp(raw).unwrap();
            let rendered = first.to_string();
            let inner = rendered.trim_start_matches('[').trim_end_matches(']');
            let second = parse_timestamp(inner).unwrap();
            assert_eq!(first, second, "'{raw}' 渲染为 '{rendered}' 后重新解析结果不一致");
        }
    }
}
