use crate::error::ValidationError;
use crate::model::semester::{normalize_year, Class, Season, Semester};
use crate::service::sort::{available_years, filter_by_year, sort_semesters, YearFilter};

/// Semesters kept sorted by year and season after every insert.
#[derive(Debug, Clone, Default)]
pub struct SemesterStore {
    semesters: Vec<Semester>,
}

impl SemesterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position the new semester landed at.
    pub fn add_semester(&mut self, season: Season, year: &str) -> Result<usize, ValidationError> {
        let year = match normalize_year(year) {
            Ok(year) => year,
            Err(e) => {
                log::warn!("rejected semester {} '{}': {}", season, year, e);
                return Err(e);
            }
        };
        self.semesters.push(Semester::new(season, year));
        let inserted = self.semesters.len() - 1;
        // Stable sort: the new semester ends up after any equal ones, so its
        // position is the last one comparing equal.
        let new = self.semesters[inserted].clone();
        sort_semesters(&mut self.semesters);
        let index = self
            .semesters
            .iter()
            .rposition(|s| *s == new)
            .unwrap_or(inserted);
        log::debug!("add semester {} at {}", new, index);
        Ok(index)
    }

    pub fn add_class(&mut self, semester_index: usize, class: Class) -> Result<(), ValidationError> {
        let len = self.semesters.len();
        if semester_index >= len {
            log::warn!("no semester at {} for class '{}'", semester_index, class.name);
            return Err(ValidationError::SemesterIndex {
                index: semester_index,
                len,
            });
        }
        if let Err(e) = class.validate() {
            log::warn!("rejected class '{}': {}", class.name, e);
            return Err(e);
        }
        log::debug!("add class '{}' to {}", class.name, self.semesters[semester_index]);
        self.semesters[semester_index].classes.push(class);
        sort_semesters(&mut self.semesters);
        Ok(())
    }

    pub fn filter_by_year(&self, filter: &YearFilter) -> Vec<&Semester> {
        filter_by_year(&self.semesters, filter)
    }

    /// Filtered view whose indices address the full collection, suitable
    /// for passing back to `add_class`.
    pub fn filter_indexed<'a>(
        &'a self,
        filter: &'a YearFilter,
    ) -> impl Iterator<Item = (usize, &'a Semester)> + 'a {
        self.semesters
            .iter()
            .enumerate()
            .filter(move |(_, s)| filter.matches(s))
    }

    pub fn available_years(&self) -> Vec<String> {
        available_years(&self.semesters)
    }

    pub fn get(&self, index: usize) -> Option<&Semester> {
        self.semesters.get(index)
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    pub fn clear(&mut self) {
        self.semesters.clear();
    }
}
