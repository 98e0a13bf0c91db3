use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid date '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// A date argument that defaults to today (local time) when omitted.
pub fn date_or_today(raw: Option<&str>) -> anyhow::Result<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse an instant: RFC 3339, or `YYYY-MM-DD HH:MM` interpreted as local time.
pub fn parse_instant(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").map_err(|error| {
        anyhow::anyhow!("invalid time '{raw}' (expected RFC 3339 or YYYY-MM-DD HH:MM): {error}")
    })?;
    match Local.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            Ok(dt.with_timezone(&Utc))
        }
        chrono::LocalResult::None => anyhow::bail!("time '{raw}' does not exist locally"),
    }
}

/// Parse an `HH:MM` time-of-day argument.
pub fn parse_time(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|error| anyhow::anyhow!("invalid time '{raw}' (expected HH:MM): {error}"))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::{date_or_today, parse_date, parse_instant, parse_time};

    #[test]
    fn date_parses_iso_format() {
        let date = parse_date("2026-03-10").expect("date should parse");
        assert_eq!((date.year(), date.month(), date.day()), (2026, 3, 10));
        assert!(parse_date("03/10/2026").is_err());
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let today = chrono::Local::now().date_naive();
        assert_eq!(date_or_today(None).expect("should default"), today);
    }

    #[test]
    fn instant_accepts_rfc3339() {
        let dt = parse_instant("2026-03-10T18:30:00Z").expect("instant should parse");
        assert_eq!(dt.hour(), 18);
    }

    #[test]
    fn instant_accepts_local_shorthand() {
        assert!(parse_instant("2026-03-10 18:30").is_ok());
        assert!(parse_instant("tomorrow").is_err());
    }

    #[test]
    fn time_of_day_parses() {
        let t = parse_time("06:45").expect("time should parse");
        assert_eq!((t.hour(), t.minute()), (6, 45));
        assert!(parse_time("6:45pm").is_err());
    }
}
