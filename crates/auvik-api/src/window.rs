// Report time window.
//
// Stat endpoints take `filter[fromTime]` / `filter[thruTime]` bounds. The
// window is computed once per report run and threaded by reference through
// every extractor call, so all sections of one report cover the same span.

use chrono::{DateTime, Duration, Utc};

/// Wire format for time bounds: ISO 8601 with fixed `.000` milliseconds.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Half-open reporting window `[start, end]` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ReportWindow {
    /// Window covering the last `days` days, ending now.
    pub fn last_days(days: i64) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// `filter[fromTime]` query value.
    pub fn from_param(&self) -> String {
        self.start.format(WIRE_FORMAT).to_string()
    }

    /// `filter[thruTime]` query value.
    pub fn thru_param(&self) -> String {
        self.end.format(WIRE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn last_days_spans_requested_range() {
        let window = ReportWindow::last_days(30);
        assert_eq!((window.end - window.start).num_days(), 30);
        assert!(window.start < window.end);
    }

    #[test]
    fn params_use_fixed_millisecond_format() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 6, 45, 10).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 14, 6, 45, 10).unwrap();
        let window = ReportWindow { start, end };

        assert_eq!(window.from_param(), "2024-01-15T06:45:10.000Z");
        assert_eq!(window.thru_param(), "2024-02-14T06:45:10.000Z");
    }

    #[test]
    fn params_truncate_subsecond_precision() {
        let window = ReportWindow::last_days(7);
        assert!(window.from_param().ends_with(".000Z"));
        assert!(window.thru_param().ends_with(".000Z"));
    }
}
