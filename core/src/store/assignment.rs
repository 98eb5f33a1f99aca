use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::model::assignment::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotColor {
    Red,
    Transparent,
}

/// Calendar highlighting for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMarker {
    pub marked: bool,
    pub dot_color: DotColor,
}

impl DateMarker {
    fn for_count(count: usize) -> Self {
        if count > 0 {
            Self { marked: true, dot_color: DotColor::Red }
        } else {
            Self { marked: false, dot_color: DotColor::Transparent }
        }
    }
}

/// Assignments keyed by due date.
///
/// A date whose list has been emptied stays as a key; it reads exactly like
/// an absent date except that `marked_dates` reports it as unmarked.
#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    by_date: BTreeMap<NaiveDate, Vec<Assignment>>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_assignment(
        &mut self,
        date: NaiveDate,
        assignment: Assignment,
    ) -> Result<(), ValidationError> {
        if let Err(e) = assignment.validate() {
            log::warn!("rejected assignment for {}: {}", date, e);
            return Err(e);
        }
        log::debug!("add assignment '{}' on {}", assignment.title, date);
        self.by_date.entry(date).or_default().push(assignment);
        Ok(())
    }

    pub fn list_assignments(&self, date: NaiveDate) -> &[Assignment] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Marks the assignment at `index` as done by discarding it.
    pub fn remove_assignment(
        &mut self,
        date: NaiveDate,
        index: usize,
    ) -> Result<Assignment, ValidationError> {
        let list = self.by_date.get_mut(&date);
        let len = list.as_ref().map_or(0, |l| l.len());
        match list {
            Some(list) if index < len => {
                let removed = list.remove(index);
                log::debug!("done '{}' on {} ({} left)", removed.title, date, list.len());
                Ok(removed)
            }
            _ => {
                log::warn!("no assignment #{} on {}", index, date);
                Err(ValidationError::AssignmentIndex { date, index, len })
            }
        }
    }

    pub fn marker_state(&self, date: NaiveDate) -> bool {
        !self.list_assignments(date).is_empty()
    }

    /// Marker for every date that has ever held an assignment, derived from
    /// the current lists on each call.
    pub fn marked_dates(&self) -> BTreeMap<NaiveDate, DateMarker> {
        self.by_date
            .iter()
            .map(|(date, list)| (*date, DateMarker::for_count(list.len())))
            .collect()
    }

    /// Dates with at least one assignment, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_date
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(date, _)| *date)
    }

    /// Total assignments across all dates.
    pub fn len(&self) -> usize {
        self.by_date.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.by_date.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, day).unwrap()
    }

    fn essay() -> Assignment {
        Assignment::new("Essay", "3:00 PM", "ENG 200")
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut store = AssignmentStore::new();
        store.add_assignment(d(1), essay()).unwrap();
        let lab = Assignment::new("Lab report", "9:00 AM", "CHEM 110");
        store.add_assignment(d(1), lab.clone()).unwrap();

        let list = store.list_assignments(d(1));
        assert_eq!(list.len(), 2);
        assert_eq!(list.last(), Some(&lab));
        assert!(store.marker_state(d(1)));
    }

    #[test]
    fn test_add_with_empty_field_changes_nothing() {
        let mut store = AssignmentStore::new();
        store.add_assignment(d(1), essay()).unwrap();

        for bad in [
            Assignment::new("", "3:00 PM", "ENG 200"),
            Assignment::new("Essay", "", "ENG 200"),
            Assignment::new("Essay", "3:00 PM", " "),
        ] {
            assert!(store.add_assignment(d(1), bad.clone()).is_err());
            assert!(store.add_assignment(d(2), bad).is_err());
        }

        assert_eq!(store.list_assignments(d(1)), &[essay()]);
        assert!(store.list_assignments(d(2)).is_empty());
        assert!(!store.marked_dates().contains_key(&d(2)));
    }

    #[test]
    fn test_list_unknown_date_is_empty() {
        let store = AssignmentStore::new();
        assert!(store.list_assignments(d(9)).is_empty());
        assert!(!store.marker_state(d(9)));
    }

    #[test]
    fn test_remove_updates_marker() {
        let mut store = AssignmentStore::new();
        store.add_assignment(d(3), essay()).unwrap();
        store
            .add_assignment(d(3), Assignment::new("Quiz", "noon", "MATH 101"))
            .unwrap();

        let removed = store.remove_assignment(d(3), 0).unwrap();
        assert_eq!(removed, essay());
        assert_eq!(store.list_assignments(d(3)).len(), 1);
        assert!(store.marker_state(d(3)));

        store.remove_assignment(d(3), 0).unwrap();
        assert!(store.list_assignments(d(3)).is_empty());
        assert!(!store.marker_state(d(3)));

        let markers = store.marked_dates();
        assert_eq!(
            markers.get(&d(3)),
            Some(&DateMarker { marked: false, dot_color: DotColor::Transparent })
        );
        assert_eq!(store.dates().count(), 0);
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut store = AssignmentStore::new();
        store.add_assignment(d(4), essay()).unwrap();

        assert_eq!(
            store.remove_assignment(d(4), 1),
            Err(ValidationError::AssignmentIndex { date: d(4), index: 1, len: 1 })
        );
        assert_eq!(
            store.remove_assignment(d(5), 0),
            Err(ValidationError::AssignmentIndex { date: d(5), index: 0, len: 0 })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_marked_dates_follow_every_mutation() {
        let mut store = AssignmentStore::new();
        store.add_assignment(d(7), essay()).unwrap();
        store.add_assignment(d(2), essay()).unwrap();

        let marked: Vec<_> = store
            .marked_dates()
            .into_iter()
            .filter(|(_, m)| m.marked)
            .map(|(date, _)| date)
            .collect();
        assert_eq!(marked, vec![d(2), d(7)]);

        store.remove_assignment(d(7), 0).unwrap();
        assert!(!store.marked_dates()[&d(7)].marked);
        assert_eq!(store.dates().collect::<Vec<_>>(), vec![d(2)]);

        store.clear();
        assert!(store.is_empty());
        assert!(store.marked_dates().is_empty());
    }
}
