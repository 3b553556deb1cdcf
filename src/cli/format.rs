use chrono::NaiveDate;

/// Formats a peso amount with thousands separators and no decimals, matching
/// how resellers quote prices ("₱6,000").
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as i64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-₱{}", grouped)
    } else {
        format!("₱{}", grouped)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses `YYYY-MM-DD`, the only date form the CLI accepts.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "₱0");
        assert_eq!(format_currency(950.0), "₱950");
        assert_eq!(format_currency(6000.0), "₱6,000");
        assert_eq!(format_currency(1234567.0), "₱1,234,567");
    }

    #[test]
    fn currency_marks_negatives() {
        assert_eq!(format_currency(-1000.0), "-₱1,000");
    }

    #[test]
    fn currency_rounds_to_whole_pesos() {
        assert_eq!(format_currency(41.67), "₱42");
    }

    #[test]
    fn date_round_trips() {
        let date = parse_date("2024-03-05").unwrap();
        assert_eq!(format_date(date), "2024-03-05");
        assert!(parse_date("03/05/2024").is_none());
    }
}
