//! Display Formatting
//!
//! Date labels for the bill tables. Status labels live on
//! [`crate::domain::BillStatus`].

use chrono::{Datelike, NaiveDate};

/// Short French month labels, truncated to three letters as the tables
/// display them. June and July share a label; the column keeps the full
/// ISO date available through the entry's `raw_date`.
const MONTH_LABELS: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai.", "Jui.", "Jui.", "Aoû.", "Sep.", "Oct.", "Nov.",
    "Déc.",
];

/// Format a stored ISO date (`YYYY-MM-DD`) as a short localized label,
/// e.g. `2004-04-04` becomes `4 Avr. 04`.
///
/// Lenient on purpose: an unparsable date is returned unchanged so that
/// one malformed record cannot hide the whole list.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{} {} {:02}",
            parsed.day(),
            MONTH_LABELS[parsed.month0() as usize],
            parsed.year().rem_euclid(100),
        ),
        Err(err) => {
            log::warn!("unparsable bill date {:?} left as-is: {}", date, err);
            date.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2004-04-04"), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01"), "1 Jan. 01");
        assert_eq!(format_date("2022-12-31"), "31 Déc. 22");
    }

    #[test]
    fn test_single_digit_day_has_no_leading_zero() {
        assert_eq!(format_date("2021-11-02"), "2 Nov. 21");
    }

    #[test]
    fn test_malformed_date_passes_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2004-13-45"), "2004-13-45");
    }
}
