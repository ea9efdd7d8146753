//! Display formatting for raw record fields.
//!
//! Every function here is total: parse failures degrade to a best-effort
//! string (usually the raw value or an empty string) and never error. The
//! fallbacks are deliberately silent; a best-effort invoice beats a refused
//! one.

use crate::invoice::{Field, InvoiceRecord};
use chrono::{NaiveDate, NaiveDateTime};

/// Format a date-like field as `"Mon DD, YYYY"` (e.g. `"Dec 30, 2025"`).
/// Unparseable values come back as their raw trimmed string; absent or blank
/// input comes back empty.
pub fn format_date(value: Option<&Field>) -> String {
    let raw = match value {
        Some(field) => field.display(),
        None => return String::new(),
    };
    let raw = raw.trim();

    match parse_date(raw) {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Format the invoice's month label: an explicit text month column wins; a
/// date-valued month column (spreadsheets love timestamp-typed month cells)
/// is ignored in favour of `"Mon YYYY"` derived from the invoice date.
pub fn format_month_label(record: &InvoiceRecord) -> String {
    if let Some(Field::Text(label)) = &record.month_label {
        let label = label.trim();
        if !label.is_empty() && parse_date(label).is_none() {
            return label.to_string();
        }
    }

    record
        .invoice_date
        .as_ref()
        .and_then(|field| parse_date(field.display().trim()))
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// Format a monetary amount as `"$1,234.56"`. Absent input is empty;
/// non-numeric text passes through raw.
pub fn format_money(value: Option<&Field>) -> String {
    match value {
        None => String::new(),
        Some(Field::Number(n)) => dollars(*n),
        Some(Field::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return String::new();
            }
            match s.parse::<f64>() {
                Ok(n) => dollars(n),
                Err(_) => s.to_string(),
            }
        }
    }
}

/// Format an identifier that may have been float-encoded upstream: the
/// fractional part introduced by the encoding is dropped, so
/// `1044100301.0` renders as `"1044100301"`, never `"1044100301.0"`.
pub fn format_numeric_id(value: Option<&Field>) -> String {
    match value {
        None => String::new(),
        Some(Field::Number(n)) => (n.trunc() as i64).to_string(),
        Some(Field::Text(s)) => s.trim().to_string(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(s, "%m/%d/%Y").ok())
}

/// `9600.0` → `"$9,600.00"`: two decimals, comma thousands groups.
fn dollars(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let cents = cents % 100;

    let digits = whole.to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).expect("ascii digits"))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_with_cents_and_thousands() {
        assert_eq!(format_money(Some(&Field::number(2500.0))), "$2,500.00");
        assert_eq!(format_money(Some(&Field::number(0.0))), "$0.00");
        assert_eq!(format_money(Some(&Field::number(1234567.891))), "$1,234,567.89");
        assert_eq!(format_money(Some(&Field::text("2500"))), "$2,500.00");
    }

    #[test]
    fn money_degrades_without_panicking() {
        assert_eq!(format_money(None), "");
        assert_eq!(format_money(Some(&Field::text(""))), "");
        assert_eq!(format_money(Some(&Field::text("not a number"))), "not a number");
    }

    #[test]
    fn dates_format_canonically() {
        assert_eq!(
            format_date(Some(&Field::text("2025-12-30"))),
            "Dec 30, 2025"
        );
        assert_eq!(
            format_date(Some(&Field::text("2025-11-01 00:00:00"))),
            "Nov 01, 2025"
        );
        assert_eq!(format_date(Some(&Field::text("12/30/2025"))), "Dec 30, 2025");
    }

    #[test]
    fn unparseable_dates_fall_back_to_raw() {
        assert_eq!(format_date(Some(&Field::text("next Tuesday"))), "next Tuesday");
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some(&Field::text("  "))), "");
    }

    #[test]
    fn numeric_ids_drop_float_encoding() {
        assert_eq!(
            format_numeric_id(Some(&Field::number(1044100301.0))),
            "1044100301"
        );
        assert_eq!(
            format_numeric_id(Some(&Field::text("111903151"))),
            "111903151"
        );
        assert_eq!(format_numeric_id(Some(&Field::text(" 1322 "))), "1322");
        assert_eq!(format_numeric_id(None), "");
    }

    #[test]
    fn month_label_prefers_explicit_text() {
        let record = InvoiceRecord {
            month_label: Some(Field::text("Nov 2025")),
            invoice_date: Some(Field::text("2025-12-30")),
            ..Default::default()
        };
        assert_eq!(format_month_label(&record), "Nov 2025");
    }

    #[test]
    fn month_label_derives_from_date_when_column_is_a_timestamp() {
        let record = InvoiceRecord {
            month_label: Some(Field::text("2025-11-01 00:00:00")),
            invoice_date: Some(Field::text("2025-12-30")),
            ..Default::default()
        };
        assert_eq!(format_month_label(&record), "Dec 2025");

        let empty = InvoiceRecord::default();
        assert_eq!(format_month_label(&empty), "");
    }
}
