//! Presentation-time ordering and formatting of service records.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};

use crate::types::Service;

/// Parse a server timestamp. Accepts RFC 3339 (normalised to UTC) and naive
/// ISO-8601 with either `T` or a space between date and time.
pub fn parse_service_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// A copy of `services`, newest first. Unparseable dates go last; ties fall
/// back to descending id. The input order is left alone.
pub fn sort_by_date_desc(services: &[Service]) -> Vec<Service> {
    let mut sorted = services.to_vec();
    sorted.sort_by(|a, b| {
        let by_date = match (parse_service_date(&a.date), parse_service_date(&b.date)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_date.then_with(|| b.id.cmp(&a.id))
    });
    sorted
}

/// `YYYY-MM-DD HH:MM`, or the raw string when it does not parse.
pub fn format_service_date(raw: &str) -> String {
    match parse_service_date(raw) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i64, date: &str) -> Service {
        Service {
            id,
            animal_id: 1,
            kind: "Checkup".to_string(),
            description: String::new(),
            date: date.to_string(),
        }
    }

    #[test]
    fn parses_naive_and_offset_timestamps() {
        assert!(parse_service_date("2024-05-01T10:30:00").is_some());
        assert!(parse_service_date("2024-05-01T10:30:00.123456").is_some());
        assert!(parse_service_date("2024-05-01 10:30:00").is_some());
        assert!(parse_service_date("2024-05-01T10:30:00+02:00").is_some());
        assert!(parse_service_date("yesterday").is_none());
    }

    #[test]
    fn sorts_newest_first() {
        let services = vec![
            service(1, "2024-01-01T08:00:00"),
            service(2, "2024-03-01T08:00:00"),
            service(3, "2024-02-01T08:00:00Z"),
        ];
        let ids: Vec<i64> = sort_by_date_desc(&services).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(services[0].id, 1);
    }

    #[test]
    fn offsets_are_compared_in_utc() {
        let services = vec![
            service(1, "2024-01-01T10:00:00+02:00"),
            service(2, "2024-01-01T09:00:00Z"),
        ];
        let ids: Vec<i64> = sort_by_date_desc(&services).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn unparseable_dates_sort_last_and_ties_by_id() {
        let services = vec![
            service(1, "garbage"),
            service(2, "2024-01-01T08:00:00"),
            service(3, "2024-01-01T08:00:00"),
        ];
        let ids: Vec<i64> = sort_by_date_desc(&services).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn formats_to_minutes() {
        assert_eq!(format_service_date("2024-05-01T10:30:59.5"), "2024-05-01 10:30");
        assert_eq!(format_service_date("soon"), "soon");
    }
}
