use chrono::{Datelike, NaiveDate};
use folio_domain::Language;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Duden-style month abbreviations; März, Mai, Juni and Juli are not shortened.
const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.", "Dez.",
];

/// Renders an ISO `YYYY-MM-DD` article date in the given language.
///
/// English dates read `Jan 10, 2026`, German dates `10. Jan. 2026`. A string
/// that does not parse as a date is returned unchanged so a typo in the
/// registry degrades to ugly output instead of a panic.
#[must_use]
pub fn format_article_date(raw: &str, language: Language) -> String {
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return raw.to_owned();
    };
    let month = date.month0() as usize;
    match language {
        Language::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Language::De => format!("{}. {} {}", date.day(), MONTHS_DE[month], date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_format() {
        assert_eq!(format_article_date("2026-01-10", Language::En), "Jan 10, 2026");
        assert_eq!(format_article_date("2025-12-05", Language::En), "Dec 5, 2025");
    }

    #[test]
    fn german_format() {
        assert_eq!(format_article_date("2026-01-10", Language::De), "10. Jan. 2026");
        assert_eq!(format_article_date("2025-06-12", Language::De), "12. Juni 2025");
        assert_eq!(format_article_date("2025-09-01", Language::De), "1. Sept. 2025");
    }

    #[test]
    fn unparseable_passes_through() {
        assert_eq!(format_article_date("soon", Language::En), "soon");
        assert_eq!(format_article_date("2026-13-40", Language::De), "2026-13-40");
        assert_eq!(format_article_date("", Language::En), "");
    }
}
