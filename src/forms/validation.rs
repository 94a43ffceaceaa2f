use chrono::{DateTime, NaiveDateTime, Utc};

use super::FieldError;

pub const MAX_TEXT_LEN: usize = 120;
pub const MAX_LINK_LEN: usize = 500;
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Formats accepted for a show's start time when no offset is given. The time
/// is read as UTC.
const NAIVE_START_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

fn check_length(
    field: &'static str,
    value: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> bool {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("must be {max} characters or less"),
        ));
        return false;
    }
    true
}

pub fn required(
    field: &'static str,
    value: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "is required"));
    } else {
        check_length(field, trimmed, max, errors);
    }
    trimmed.to_string()
}

/// Blank input becomes `None`.
pub fn optional(
    field: &'static str,
    value: &str,
    max: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !check_length(field, trimmed, max, errors) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Collects genres from every submitted `genres` value, each of which may be
/// a comma separated list. Blanks and repeats (compared case-insensitively,
/// first spelling wins) are dropped.
pub fn parse_genres(
    field: &'static str,
    values: &[String],
    errors: &mut Vec<FieldError>,
) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();
    let entries = values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|g| !g.is_empty());
    for genre in entries {
        if !check_length(field, genre, MAX_TEXT_LEN, errors) {
            continue;
        }
        if !genres.iter().any(|g| g.eq_ignore_ascii_case(genre)) {
            genres.push(genre.to_string());
        }
    }
    genres
}

/// HTML checkboxes only submit a value when ticked.
#[must_use]
pub fn parse_checkbox(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "y" | "yes" | "on" | "true" | "1"
        )
    })
}

pub fn parse_id(field: &'static str, value: &str, errors: &mut Vec<FieldError>) -> i32 {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => id,
        _ => {
            errors.push(FieldError::new(field, "must be a positive integer"));
            0
        }
    }
}

pub fn parse_start_time(
    field: &'static str,
    value: &str,
    errors: &mut Vec<FieldError>,
) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    let naive = NAIVE_START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok());

    if let Some(naive) = naive {
        return Some(naive.and_utc());
    }

    errors.push(FieldError::new(
        field,
        "must look like YYYY-MM-DD HH:MM:SS",
    ));
    None
}
