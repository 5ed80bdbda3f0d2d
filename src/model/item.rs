// File: ./src/model/item.rs
use crate::model::parser;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// One appointment: a title plus a start date, a starting time in military
/// form (`hour*100 + minute`) and a duration in minutes.
///
/// The type is deliberately infallible: construction and every setter accept
/// arbitrary input, and an out-of-range value is silently dropped so the
/// field keeps its previous (or default) value. There is no error signal
/// distinguishable from "value unchanged by choice".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    title: String,
    year: i32,
    month: i32,
    day: i32,
    time: i32,
    duration: i32,
}

impl Default for Appointment {
    fn default() -> Self {
        Self {
            title: "N/A".to_string(),
            year: 1,
            month: 1,
            day: 1,
            time: 0,
            duration: 1,
        }
    }
}

impl Appointment {
    /// Builds an appointment from one serialized line:
    /// `title|year|month|day|standard_time|duration`.
    ///
    /// Fields are trimmed; the title is always assigned (an empty segment
    /// overrides the default with the empty string); numeric fields are only
    /// parsed when the segment carries a digit, via leading-numeral
    /// extraction; the time segment is converted from 12-hour text. Every
    /// value is routed through its setter so bounds still apply.
    pub fn parse(line: &str) -> Self {
        let fields = parser::split_fields(line);
        let mut app = Self::default();

        app.set_title(&fields[0]);
        if parser::contains_digit(&fields[1])
            && let Some(year) = parser::parse_loose_int(&fields[1])
        {
            app.set_year(year);
        }
        if parser::contains_digit(&fields[2])
            && let Some(month) = parser::parse_loose_int(&fields[2])
        {
            app.set_month(month);
        }
        if parser::contains_digit(&fields[3])
            && let Some(day) = parser::parse_loose_int(&fields[3])
        {
            app.set_day(day);
        }
        app.set_time(parser::standard_to_military(&fields[4]));
        if parser::contains_digit(&fields[5])
            && let Some(duration) = parser::parse_loose_int(&fields[5])
        {
            app.set_duration(duration);
        }

        app
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    /// Starting time in military form.
    pub fn time(&self) -> i32 {
        self.time
    }

    /// Duration in minutes.
    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// `YYYY-MM-DD`, month and day zero-padded to two digits.
    pub fn date(&self) -> String {
        format!("{}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Starting time as 12-hour text (`1:30PM`).
    pub fn standard_time(&self) -> String {
        parser::military_to_standard(self.time)
    }

    /// Serialized line form: `title|year|month|day|standard_time|duration`.
    ///
    /// A literal `|` inside the title breaks field alignment on reparse;
    /// the format does no escaping.
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.title,
            self.year,
            self.month,
            self.day,
            self.standard_time(),
            self.duration
        )
    }

    /// The calendar date when it actually exists (day 31 of a 30-day month
    /// does not; the record model allows it regardless).
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }

    /// Long human-readable form for listings, with the weekday when the
    /// stored date is a real calendar date.
    pub fn format_long(&self) -> String {
        let weekday = self
            .naive_date()
            .map(|d| format!(" {}", d.weekday()))
            .unwrap_or_default();
        format!(
            "{}{}  {:>7}  {:>4}m  {}",
            self.date(),
            weekday,
            self.standard_time(),
            self.duration,
            self.title
        )
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.trim().to_string();
    }

    pub fn set_year(&mut self, year: i32) {
        if year >= 0 {
            self.year = year;
        }
    }

    pub fn set_month(&mut self, month: i32) {
        if (1..=12).contains(&month) {
            self.month = month;
        }
    }

    pub fn set_day(&mut self, day: i32) {
        if (1..=31).contains(&day) {
            self.day = day;
        }
    }

    pub fn set_time(&mut self, time: i32) {
        // Hours within bounds, then minutes within bounds
        if (0..2400).contains(&time) && time % 100 < 60 {
            self.time = time;
        }
    }

    pub fn set_duration(&mut self, duration: i32) {
        if duration >= 0 {
            self.duration = duration;
        }
    }

    pub fn set_date(&mut self, year: i32, month: i32, day: i32) {
        self.set_year(year);
        self.set_month(month);
        self.set_day(day);
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let app = Appointment::default();
        assert_eq!(app.title(), "N/A");
        assert_eq!(app.year(), 1);
        assert_eq!(app.month(), 1);
        assert_eq!(app.day(), 1);
        assert_eq!(app.time(), 0);
        assert_eq!(app.duration(), 1);
    }

    #[test]
    fn setters_reject_out_of_range_silently() {
        let mut app = Appointment::default();
        app.set_month(5);
        app.set_month(13);
        assert_eq!(app.month(), 5);
        app.set_month(0);
        assert_eq!(app.month(), 5);

        app.set_year(-1);
        assert_eq!(app.year(), 1);
        app.set_day(32);
        assert_eq!(app.day(), 1);
        app.set_day(0);
        assert_eq!(app.day(), 1);
        app.set_duration(-10);
        assert_eq!(app.duration(), 1);
    }

    #[test]
    fn time_setter_checks_hour_and_minute_bounds() {
        let mut app = Appointment::default();
        app.set_time(2359);
        assert_eq!(app.time(), 2359);
        app.set_time(2400);
        assert_eq!(app.time(), 2359);
        app.set_time(1160); // minute out of bounds
        assert_eq!(app.time(), 2359);
        app.set_time(-1);
        assert_eq!(app.time(), 2359);
        app.set_time(0);
        assert_eq!(app.time(), 0);
    }

    #[test]
    fn title_is_stripped_and_empty_overrides_default() {
        let mut app = Appointment::default();
        app.set_title("  Dentist  ");
        assert_eq!(app.title(), "Dentist");

        // A whitespace-only title segment still replaces the default.
        let parsed = Appointment::parse("   |2024|3|15|2:30pm|60");
        assert_eq!(parsed.title(), "");
    }

    #[test]
    fn parse_full_line_scenario() {
        let app = Appointment::parse("Meeting | 2024 | 3 | 15 | 2:30pm | 60");
        assert_eq!(app.title(), "Meeting");
        assert_eq!(app.year(), 2024);
        assert_eq!(app.month(), 3);
        assert_eq!(app.day(), 15);
        assert_eq!(app.time(), 1430);
        assert_eq!(app.duration(), 60);
        assert_eq!(app.date(), "2024-03-15");
        assert_eq!(app.to_line(), "Meeting|2024|3|15|2:30PM|60");
    }

    #[test]
    fn parse_keeps_defaults_for_digitless_or_invalid_fields() {
        let app = Appointment::parse("Lunch|abc|14|ab3|noon|x");
        assert_eq!(app.title(), "Lunch");
        assert_eq!(app.year(), 1); // no digit
        assert_eq!(app.month(), 1); // 14 rejected by setter
        assert_eq!(app.day(), 1); // digit-bearing but no numeral prefix
        assert_eq!(app.time(), 0); // unconvertible time
        assert_eq!(app.duration(), 1); // no digit
    }

    #[test]
    fn parse_accepts_loose_numeric_segments() {
        let app = Appointment::parse("Gym|2024ad|3x|15th|9:05a|45min");
        assert_eq!(app.year(), 2024);
        assert_eq!(app.month(), 3);
        assert_eq!(app.day(), 15);
        assert_eq!(app.time(), 905);
        assert_eq!(app.duration(), 45);
    }

    #[test]
    fn parse_short_line_leaves_trailing_defaults() {
        let app = Appointment::parse("Standup|2025");
        assert_eq!(app.title(), "Standup");
        assert_eq!(app.year(), 2025);
        assert_eq!(app.month(), 1);
        assert_eq!(app.time(), 0);
        assert_eq!(app.duration(), 1);
    }

    #[test]
    fn serialize_parse_round_trip() {
        let mut app = Appointment::default();
        app.set_title("Review");
        app.set_date(2026, 8, 27);
        app.set_time(1745);
        app.set_duration(30);

        let reparsed = Appointment::parse(&app.to_line());
        assert_eq!(reparsed, app);
    }

    #[test]
    fn round_trip_at_time_boundaries() {
        for t in [0, 59, 1159, 1200, 1259, 1300, 2359] {
            let mut app = Appointment::default();
            app.set_time(t);
            assert_eq!(Appointment::parse(&app.to_line()).time(), t);
        }
    }

    #[test]
    fn equality_is_structural_and_case_sensitive() {
        let a = Appointment::parse("Meeting|2024|3|15|2:30PM|60");
        let b = Appointment::parse("Meeting|2024|3|15|2:30PM|60");
        let c = Appointment::parse("meeting|2024|3|15|2:30PM|60");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn naive_date_rejects_impossible_calendar_dates() {
        let app = Appointment::parse("X|2024|2|31|1:00pm|5");
        assert_eq!(app.day(), 31); // the record model is permissive
        assert!(app.naive_date().is_none()); // but it is not a real date
    }
}
