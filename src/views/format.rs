use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
    /// `Tue 05, 21, 2019 9:30PM`
    #[default]
    Medium,
}

#[must_use]
pub fn format_datetime(value: DateTime<Utc>, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    value.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let value = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        assert_eq!(
            format_datetime(value, DateFormat::Full),
            "Tuesday May, 21, 2019 at 9:30PM"
        );
        assert_eq!(
            format_datetime(value, DateFormat::Medium),
            "Tue 05, 21, 2019 9:30PM"
        );
    }

    #[test]
    fn test_format_datetime_morning() {
        let value = Utc.with_ymd_and_hms(2035, 4, 1, 9, 5, 0).unwrap();
        assert_eq!(
            format_datetime(value, DateFormat::Medium),
            "Sun 04, 01, 2035 9:05AM"
        );
    }
}
