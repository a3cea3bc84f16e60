//! 表示・CSV共通の書式
//!
//! 欠損・NaN・非数値は常に空文字にする。"NaN" や "undefined" は出さない。

/// 小数2桁
pub fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => String::new(),
    }
}

/// 件数（整数）
pub fn format_count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn format_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_two_decimals() {
        assert_eq!(format_number(Some(12.0)), "12.00");
        assert_eq!(format_number(Some(-14.5)), "-14.50");
        assert_eq!(format_number(Some(20.0)), "20.00");
    }

    #[test]
    fn test_format_number_nan_safe() {
        assert_eq!(format_number(None), "");
        assert_eq!(format_number(Some(f64::NAN)), "");
        assert_eq!(format_number(Some(f64::INFINITY)), "");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(13)), "13");
        assert_eq!(format_count(None), "");
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_text(Some("2025-01-18 08:00")), "2025-01-18 08:00");
        assert_eq!(format_text(None), "");
    }
}
