use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod config;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// `$1,234.50`-style currency text.
pub fn format_usd(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        crate::domain::entities::group_thousands(cents / 100),
        cents % 100
    )
}

/// Drops a trailing `.0`: `5.0` -> `5`, `1.5` -> `1.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency_with_grouping_and_cents() {
        assert_eq!(format_usd(66.5), "$66.50");
        assert_eq!(format_usd(798.0), "$798.00");
        assert_eq!(format_usd(12_345.678), "$12,345.68");
        assert_eq!(format_usd(-3.2), "-$3.20");
        assert_eq!(format_usd(f64::NAN), "$0.00");
    }

    #[test]
    fn plain_numbers_drop_trailing_zeros() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(f64::INFINITY), "0");
    }

    #[test]
    fn ids_are_prefixed_and_distinct() {
        let first = generate_id("toast");
        let second = generate_id("toast");
        assert!(first.starts_with("toast-"));
        assert_ne!(first, second);
    }
}
