use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracking_core::Locale;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Timestamp as shown to the user. Empty input renders `-`; anything that does
/// not parse is shown verbatim.
pub fn format_timestamp(raw: Option<&str>, locale: Locale) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "-".to_string();
    };
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format(pattern(locale)).to_string(),
        None => raw.to_string(),
    }
}

fn pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::Id => "%d/%m/%Y %H.%M.%S",
        Locale::En => "%m/%d/%Y %H:%M:%S",
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_locale() {
        let raw = Some("2024-05-01 08:05:09");
        assert_eq!(format_timestamp(raw, Locale::Id), "01/05/2024 08.05.09");
        assert_eq!(format_timestamp(raw, Locale::En), "05/01/2024 08:05:09");
    }

    #[test]
    fn rfc3339_keeps_its_own_offset() {
        let raw = Some("2024-05-01T08:05:09+07:00");
        assert_eq!(format_timestamp(raw, Locale::Id), "01/05/2024 08.05.09");
    }

    #[test]
    fn empty_and_unparseable_values() {
        assert_eq!(format_timestamp(None, Locale::Id), "-");
        assert_eq!(format_timestamp(Some("  "), Locale::Id), "-");
        assert_eq!(format_timestamp(Some("kemarin"), Locale::En), "kemarin");
    }
}
