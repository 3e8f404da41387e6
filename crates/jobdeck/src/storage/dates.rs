use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;

/// Parse an ISO-ish timestamp string. Accepts full RFC 3339, naive
/// datetimes (assumed UTC), and bare dates (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight));
    }
    None
}

/// Normalize the named date fields of a raw record to RFC 3339 with
/// millisecond precision so typed deserialization accepts them.
///
/// Payloads written by older revisions carry bare dates or naive datetimes
/// in these slots. Paths support one level of dotted nesting
/// (`job.posted_at`); strings that do not parse as timestamps and
/// non-string values are left untouched.
pub fn rehydrate_date_fields(record: &mut Value, fields: &[&str]) {
    for path in fields {
        let slot = match path.split_once('.') {
            Some((head, tail)) => record.get_mut(head).and_then(|nested| nested.get_mut(tail)),
            None => record.get_mut(*path),
        };
        let Some(slot) = slot else { continue };
        let Some(raw) = slot.as_str() else { continue };
        if let Some(parsed) = parse_timestamp(raw) {
            *slot = Value::String(parsed.to_rfc3339_opts(SecondsFormat::Millis, true));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_bare_dates_as_midnight_utc() {
        let parsed = parse_timestamp("2024-01-15").expect("bare date parses");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_datetimes_as_utc() {
        let parsed = parse_timestamp("2024-01-16T10:30:00").expect("naive datetime parses");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 16, 10, 30, 0).unwrap());
    }

    #[test]
    fn rehydrates_top_level_and_nested_fields() {
        let mut record = json!({
            "posted_at": "2024-01-15",
            "job": { "posted_at": "2024-01-14T08:00:00" },
        });

        rehydrate_date_fields(&mut record, &["posted_at", "job.posted_at"]);

        assert_eq!(record["posted_at"], "2024-01-15T00:00:00.000Z");
        assert_eq!(record["job"]["posted_at"], "2024-01-14T08:00:00.000Z");
    }

    #[test]
    fn normalization_preserves_the_instant() {
        let mut record = json!({ "applied_at": "2024-01-16T10:30:00.123+02:00" });
        rehydrate_date_fields(&mut record, &["applied_at"]);

        let normalized = parse_timestamp(record["applied_at"].as_str().unwrap()).unwrap();
        assert_eq!(
            normalized,
            parse_timestamp("2024-01-16T10:30:00.123+02:00").unwrap()
        );
    }

    #[test]
    fn leaves_invalid_and_non_string_values_alone() {
        let mut record = json!({
            "posted_at": "not a date",
            "count": 3,
            "missing": null,
        });

        rehydrate_date_fields(&mut record, &["posted_at", "count", "missing", "absent"]);

        assert_eq!(record["posted_at"], "not a date");
        assert_eq!(record["count"], 3);
        assert_eq!(record["missing"], Value::Null);
    }
}
