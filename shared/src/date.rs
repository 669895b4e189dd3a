//! 时间解析与时长计算模块
//!
//! 任务的起止时间在线上接口中以字符串传输，常见形态有三种：
//! - RFC 3339（后端返回，如 `2024-01-01T09:00:00.000Z`）
//! - 带秒的本地时间（如 `2024-01-01T09:00:00`）
//! - `datetime-local` 输入控件产出的分钟精度形态（如 `2024-01-01T09:00`）
//!
//! 本模块统一按 UTC 解析上述形态，并在此基础上提供毫秒时间戳、
//! 小时时长和展示格式化。解析失败一律返回 `None`，由调用方决定兜底。

use chrono::{DateTime, NaiveDateTime};

/// 一小时对应的毫秒数
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// 解析时间字符串为 `NaiveDateTime`（UTC 语义）
///
/// 依次尝试 RFC 3339、带秒形态、分钟精度形态
fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// 解析时间字符串为 Unix 毫秒时间戳
///
/// 返回 None 如果字符串不属于任何已知形态
pub fn parse_timestamp_millis(s: &str) -> Option<i64> {
    parse_naive(s).map(|dt| dt.and_utc().timestamp_millis())
}

/// 计算两个时间字符串之间的小时时长
///
/// 结果保留符号：`end` 早于 `start` 时返回负值，由展示层自行处理。
/// 任一端解析失败返回 None
pub fn duration_hours(start: &str, end: &str) -> Option<f64> {
    let start_ms = parse_timestamp_millis(start)?;
    let end_ms = parse_timestamp_millis(end)?;
    Some((end_ms - start_ms) as f64 / MILLIS_PER_HOUR)
}

/// 将时间字符串格式化为展示形态（`2024-01-01 09:00`）
///
/// 解析失败时原样返回输入，保证界面不因脏数据而空白
pub fn format_display(s: &str) -> String {
    match parse_naive(s) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_datetime_local_form() {
        assert_eq!(
            parse_timestamp_millis("2024-01-01T09:00"),
            Some(1_704_099_600_000)
        );
    }

    #[test]
    fn test_parses_rfc3339_form() {
        assert_eq!(
            parse_timestamp_millis("2024-01-01T09:00:00.000Z"),
            Some(1_704_099_600_000)
        );
    }

    #[test]
    fn test_parses_seconds_form() {
        assert_eq!(
            parse_timestamp_millis("2024-01-01T09:00:30"),
            Some(1_704_099_630_000)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp_millis("yesterday"), None);
        assert_eq!(parse_timestamp_millis(""), None);
    }

    #[test]
    fn test_duration_spans_two_hours() {
        let hours = duration_hours("2024-01-01T09:00", "2024-01-01T11:00");
        assert_eq!(hours, Some(2.0));
    }

    #[test]
    fn test_duration_keeps_sign_when_reversed() {
        let hours = duration_hours("2024-01-01T11:00", "2024-01-01T09:00");
        assert_eq!(hours, Some(-2.0));
    }

    #[test]
    fn test_duration_fails_on_unparsable_end() {
        assert_eq!(duration_hours("2024-01-01T09:00", "soon"), None);
    }

    #[test]
    fn test_formats_for_display() {
        assert_eq!(
            format_display("2024-01-01T09:00:00.000Z"),
            "2024-01-01 09:00"
        );
    }

    #[test]
    fn test_format_falls_back_to_input() {
        assert_eq!(format_display("not-a-date"), "not-a-date");
    }
}
