//! Inclusive date-range filter for document lists.

use chrono::NaiveDate;

const INPUT_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `[start, end]` range. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build from the raw values of two `<input type="date">` fields.
    /// Empty or unparseable values leave that side open.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_date(start),
            end: parse_date(end),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `start` after `end`: nothing can match.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }

    /// Check a document date (`yyyy-mm-dd` or an ISO datetime).
    ///
    /// Rows with an unreadable date only pass when the range is unbounded.
    pub fn contains(&self, date: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(day) = parse_date(date) else {
            return false;
        };
        if let Some(start) = self.start {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if day > end {
                return false;
            }
        }
        true
    }
}

/// Parse the leading `yyyy-mm-dd` part of a date or datetime string.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn unbounded_matches_everything() {
        let range = DateRange::from_inputs("", "");
        assert!(range.is_unbounded());
        assert!(range.contains("2024-05-01"));
        assert!(range.contains("not a date"));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange::from_inputs("2024-05-01", "2024-05-10");
        assert_eq!(range.start, Some(d(2024, 5, 1)));
        assert!(range.contains("2024-05-01"));
        assert!(range.contains("2024-05-10"));
        assert!(range.contains("2024-05-10T23:59:00"));
        assert!(!range.contains("2024-04-30"));
        assert!(!range.contains("2024-05-11"));
    }

    #[test]
    fn open_sides() {
        let from = DateRange::from_inputs("2024-05-05", "");
        assert!(from.contains("2030-01-01"));
        assert!(!from.contains("2024-05-04"));

        let until = DateRange::from_inputs("", "2024-05-05");
        assert!(until.contains("1999-12-31"));
        assert!(!until.contains("2024-05-06"));
    }

    #[test]
    fn unreadable_row_dates_are_excluded_once_bounded() {
        let range = DateRange::from_inputs("2024-05-01", "");
        assert!(!range.contains(""));
        assert!(!range.contains("05/06/2024"));
    }

    #[test]
    fn garbage_input_leaves_side_open() {
        let range = DateRange::from_inputs("garbage", "2024-01-31");
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(d(2024, 1, 31)));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let range = DateRange::from_inputs("2024-06-01", "2024-05-01");
        assert!(range.is_inverted());
        assert!(!range.contains("2024-05-15"));
        assert!(!range.contains("2024-06-01"));
    }
}
