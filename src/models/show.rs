use chrono::{DateTime, Utc};
use serde::Serialize;

/// A show is upcoming when it starts strictly after `now`.
#[must_use]
pub fn is_upcoming(start_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start_time > now
}

#[derive(Debug, Clone)]
pub struct ShowInput {
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: DateTime<Utc>,
}

/// A row on the shows page.
#[derive(Debug, Clone, Serialize)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show seen from one side of it: on a venue page the counterpart is the
/// artist, on an artist page it is the venue.
#[derive(Debug, Clone, Serialize)]
pub struct ShowAppearance {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Splits appearances into `(past, upcoming)`, keeping their order.
#[must_use]
pub fn split_by_time(
    appearances: Vec<ShowAppearance>,
    now: DateTime<Utc>,
) -> (Vec<ShowAppearance>, Vec<ShowAppearance>) {
    appearances
        .into_iter()
        .partition(|show| !is_upcoming(show.start_time, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_show_starting_now_is_not_upcoming() {
        assert!(!is_upcoming(at(12), at(12)));
        assert!(is_upcoming(at(12) + Duration::seconds(1), at(12)));
    }

    #[test]
    fn test_split_by_time_keeps_order() {
        let show = |id, hour| ShowAppearance {
            counterpart_id: id,
            counterpart_name: format!("Artist {id}"),
            counterpart_image_link: None,
            start_time: at(hour),
        };

        let (past, upcoming) = split_by_time(vec![show(1, 8), show(2, 15), show(3, 10)], at(12));
        assert_eq!(
            past.iter().map(|s| s.counterpart_id).collect::<Vec<_>>(),
            [1, 3]
        );
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].counterpart_id, 2);
    }
}
