use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};

/// 印尼语月份名，格式化截止时间用
const BULAN: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// 截止时间是否已过
///
/// 每次调用都取当前时间重新比较，不缓存，让展示随时间自然变化。
/// 无法解析的时间视为未过期。
pub fn is_past_deadline(deadline: &str) -> bool {
    match parse_datetime(deadline) {
        Some(parsed) => Utc::now() > parsed,
        None => false,
    }
}

/// 按印尼习惯格式化截止时间（UTC），例如 "10 Maret 2025 23.59"
pub fn format_deadline(deadline: &str) -> String {
    match parse_datetime(deadline) {
        Some(parsed) => format!(
            "{} {} {} {:02}.{:02}",
            parsed.day(),
            BULAN[parsed.month0() as usize],
            parsed.year(),
            parsed.hour(),
            parsed.minute()
        ),
        None => deadline.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_and_future_deadlines() {
        assert!(is_past_deadline("2001-01-01T00:00:00Z"));
        assert!(!is_past_deadline("2999-12-31T23:59:59Z"));
    }

    #[test]
    fn test_unparseable_deadline_counts_as_not_past() {
        assert!(!is_past_deadline(""));
        assert!(!is_past_deadline("besok"));
    }

    #[test]
    fn test_accepts_naive_formats() {
        assert!(is_past_deadline("2001-01-01 08:30:00"));
        assert!(is_past_deadline("2001-01-01T08:30:00"));
    }

    #[test]
    fn test_format_deadline_indonesian() {
        assert_eq!(
            format_deadline("2025-03-10T23:59:00Z"),
            "10 Maret 2025 23.59"
        );
        // 解析不了就原样返回
        assert_eq!(format_deadline("besok"), "besok");
    }
}
