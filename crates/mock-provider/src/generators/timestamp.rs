//! Timestamp value generators.
//!
//! Relative generators (`past`, `recent`, `future`) are anchored on an explicit
//! reference time instead of the wall clock, so a seeded provider produces the
//! same dates on every run that shares the reference.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Generate a random timestamp between two instants (inclusive, millisecond resolution).
pub fn generate_between<R: Rng>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();

    if start_ms >= end_ms {
        return start;
    }

    let random_ms = rng.gen_range(start_ms..=end_ms);
    DateTime::from_timestamp_millis(random_ms).unwrap_or(start)
}

/// A timestamp within `years` years before `reference`.
pub fn generate_past<R: Rng>(rng: &mut R, reference: DateTime<Utc>, years: f64) -> DateTime<Utc> {
    let span = span_millis(years * 365.0);
    generate_between(rng, reference - span, reference - Duration::milliseconds(1))
}

/// A timestamp within `days` days before `reference`.
pub fn generate_recent<R: Rng>(rng: &mut R, reference: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    let span = span_millis(days);
    generate_between(rng, reference - span, reference - Duration::milliseconds(1))
}

/// A timestamp within `years` years after `reference`.
pub fn generate_future<R: Rng>(rng: &mut R, reference: DateTime<Utc>, years: f64) -> DateTime<Utc> {
    let span = span_millis(years * 365.0);
    generate_between(rng, reference + Duration::milliseconds(1), reference + span)
}

/// Generate a random timestamp in the given range.
///
/// The start and end should be ISO 8601 formatted timestamps or dates.
/// Unparseable bounds fall back to the parseable one, then to `reference`.
pub fn generate_timestamp_range<R: Rng>(
    rng: &mut R,
    start: &str,
    end: &str,
    reference: DateTime<Utc>,
) -> DateTime<Utc> {
    match (parse_timestamp(start), parse_timestamp(end)) {
        (Some(start), Some(end)) => generate_between(rng, start, end),
        (Some(dt), None) | (None, Some(dt)) => dt,
        (None, None) => reference,
    }
}

/// Parse a timestamp string in various formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    // Try RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common date-only format
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Convert a day count into a duration of at least one millisecond.
const MAX_SPAN_DAYS: f64 = 10_000.0 * 365.0;

fn span_millis(days: f64) -> Duration {
    // NaN and non-positive spans mean one day; anything larger caps at 10,000 years
    let days = if days > 0.0 {
        days.min(MAX_SPAN_DAYS)
    } else {
        1.0
    };
    Duration::milliseconds(((days * MILLIS_PER_DAY as f64) as i64).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_generate_timestamp_range() {
        let mut rng = StdRng::seed_from_u64(42);

        let dt = generate_timestamp_range(
            &mut rng,
            "2020-01-01T00:00:00Z",
            "2024-12-31T23:59:59Z",
            reference(),
        );
        assert!(dt.year() >= 2020 && dt.year() <= 2024);
    }

    #[test]
    fn test_generate_timestamp_with_dates_only() {
        let mut rng = StdRng::seed_from_u64(42);

        let dt = generate_timestamp_range(&mut rng, "2020-01-01", "2024-12-31", reference());
        assert!(dt.year() >= 2020 && dt.year() <= 2024);
    }

    #[test]
    fn test_unparseable_range_uses_reference() {
        let mut rng = StdRng::seed_from_u64(42);

        let dt = generate_timestamp_range(&mut rng, "soon", "later", reference());
        assert_eq!(dt, reference());
    }

    #[test]
    fn test_relative_generators() {
        let mut rng = StdRng::seed_from_u64(42);
        let reference = reference();

        for _ in 0..50 {
            let past = generate_past(&mut rng, reference, 1.0);
            assert!(past < reference);
            assert!(past >= reference - Duration::days(365));

            let recent = generate_recent(&mut rng, reference, 1.0);
            assert!(recent < reference);
            assert!(recent >= reference - Duration::days(1));

            let future = generate_future(&mut rng, reference, 1.0);
            assert!(future > reference);
            assert!(future <= reference + Duration::days(365));
        }
    }

    #[test]
    fn test_span_clamps_overflowing_years() {
        let cap = span_millis(MAX_SPAN_DAYS);

        assert_eq!(span_millis(1e308 * 365.0), cap);
        assert_eq!(span_millis(f64::INFINITY), cap);
        assert_eq!(span_millis(f64::NAN), Duration::days(1));
        assert_eq!(span_millis(-3.0), Duration::days(1));

        let mut rng = StdRng::seed_from_u64(42);
        let past = generate_past(&mut rng, reference(), 1e308);
        assert!(past >= reference() - cap);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_past(&mut rng1, reference(), 2.0),
            generate_past(&mut rng2, reference(), 2.0)
        );
    }
}
