// File: ./src/agenda.rs
// An ordered collection of appointments with the query/mutation operations
// the CLI composes: sorted listing, exact-time filtering, and removal by
// title or time. Record order is file order; all mutations preserve it.
use crate::model::Appointment;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agenda {
    entries: Vec<Appointment>,
}

impl Agenda {
    pub fn new(entries: Vec<Appointment>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Appointment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All appointments ascending by starting time. The sort is stable, so
    /// appointments sharing a time keep their file order.
    pub fn sorted(&self) -> Vec<Appointment> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(Appointment::time);
        sorted
    }

    /// Appointments starting exactly at the given military time, in file
    /// order.
    pub fn at_time(&self, time: i32) -> Vec<&Appointment> {
        self.entries.iter().filter(|a| a.time() == time).collect()
    }

    /// Appends one appointment built from a raw serialized line. Parsing
    /// never fails, so this always adds a record (possibly with defaulted
    /// fields). Returns a reference to the added entry.
    pub fn add_line(&mut self, line: &str) -> &Appointment {
        self.entries.push(Appointment::parse(line));
        self.entries.last().expect("push guarantees an entry")
    }

    pub fn push(&mut self, appointment: Appointment) {
        self.entries.push(appointment);
    }

    /// Removes every appointment whose title matches exactly
    /// (case-sensitive). Returns the number removed.
    pub fn remove_title(&mut self, title: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|a| a.title() != title);
        before - self.entries.len()
    }

    /// Removes every appointment starting exactly at the given military
    /// time. Returns the number removed.
    pub fn remove_time(&mut self, time: i32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|a| a.time() != time);
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Agenda {
        let mut agenda = Agenda::default();
        agenda.add_line("Dentist|2024|5|2|9:00am|30");
        agenda.add_line("Standup|2024|5|2|9:00am|15");
        agenda.add_line("Lunch|2024|5|2|12:00pm|60");
        agenda.add_line("Review|2024|5|2|8:30am|45");
        agenda
    }

    #[test]
    fn sorted_is_ascending_and_stable_on_ties() {
        let sorted = sample().sorted();
        let titles: Vec<&str> = sorted.iter().map(|a| a.title()).collect();
        // Dentist and Standup share 9:00am and keep their input order.
        assert_eq!(titles, ["Review", "Dentist", "Standup", "Lunch"]);
    }

    #[test]
    fn at_time_matches_exactly() {
        let agenda = sample();
        let hits = agenda.at_time(900);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title(), "Dentist");
        assert_eq!(hits[1].title(), "Standup");
        assert!(agenda.at_time(901).is_empty());
    }

    #[test]
    fn add_line_always_produces_a_record() {
        let mut agenda = Agenda::default();
        let added = agenda.add_line("garbage with no delimiters");
        assert_eq!(added.title(), "garbage with no delimiters");
        assert_eq!(added.time(), 0);
        assert_eq!(agenda.len(), 1);
    }

    #[test]
    fn remove_title_is_exact_and_counts() {
        let mut agenda = sample();
        agenda.add_line("Dentist|2024|6|1|3:00pm|30");
        assert_eq!(agenda.remove_title("Dentist"), 2);
        assert_eq!(agenda.remove_title("dentist"), 0);
        assert_eq!(agenda.len(), 3);
    }

    #[test]
    fn remove_time_removes_all_matches_preserving_order() {
        let mut agenda = sample();
        assert_eq!(agenda.remove_time(900), 2);
        let titles: Vec<&str> = agenda.entries().iter().map(|a| a.title()).collect();
        assert_eq!(titles, ["Lunch", "Review"]);
        assert_eq!(agenda.remove_time(900), 0);
    }
}
