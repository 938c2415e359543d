//! Text formatting utilities for UI display
//!
//! en-US renditions of the strings the view layer shows: currency, long-form
//! dates, the results counter, and the price-slider caption.

use chrono::NaiveDate;

/// Formats an amount as en-US currency: `$1,234.56`.
///
/// Negative amounts carry a leading minus: `-$5.00`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(total_cents / 100);
    let cents = total_cents % 100;
    format!("{sign}${dollars}.{cents:02}")
}

/// Caption for the price slider: `Up to $25.00`.
pub fn price_ceiling_label(max_price: f64) -> String {
    format!("Up to {}", format_currency(max_price))
}

/// Formats a date in en-US long form: `August 5, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Text for the results counter under the filter bar.
pub fn results_count_label(count: usize) -> String {
    format!("{count} items found")
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.0), "$999.00");
    }

    #[test]
    fn test_format_currency_rounds_to_cents() {
        assert_eq!(format_currency(9.999), "$10.00");
        assert_eq!(format_currency(0.005), "$0.01");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn test_price_ceiling_label() {
        assert_eq!(price_ceiling_label(25.0), "Up to $25.00");
    }

    #[test]
    fn test_format_date_long_form() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(format_date(date), "August 5, 2026");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(date), "December 31, 2025");
    }

    #[test]
    fn test_results_count_label_wording() {
        assert_eq!(results_count_label(12), "12 items found");
        // The counter keeps the same wording for a single item
        assert_eq!(results_count_label(1), "1 items found");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("email"), "Email");
        assert_eq!(capitalize_first("phone number"), "Phone number");
        assert_eq!(capitalize_first(""), "");
    }
}
