use std::cmp::Ordering;
use std::fmt;

use crate::model::semester::Semester;

/// Year selection on the classes screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearFilter {
    All,
    Year(String),
}

impl Default for YearFilter {
    fn default() -> Self {
        YearFilter::All
    }
}

impl YearFilter {
    pub fn matches(&self, semester: &Semester) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => semester.year == *year,
        }
    }

    /// Selecting the active year again goes back to `All`.
    pub fn toggle(&self, year: &str) -> YearFilter {
        match self {
            YearFilter::Year(current) if current == year => YearFilter::All,
            _ => YearFilter::Year(year.to_string()),
        }
    }
}

impl From<Option<String>> for YearFilter {
    fn from(year: Option<String>) -> Self {
        match year {
            Some(y) if y != "All" => YearFilter::Year(y),
            _ => YearFilter::All,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("All"),
            YearFilter::Year(y) => f.write_str(y),
        }
    }
}

// Standalone functions for pure logic

/// Year ascending, then season rank.
pub fn compare_semesters(a: &Semester, b: &Semester) -> Ordering {
    a.year_number()
        .cmp(&b.year_number())
        .then_with(|| a.season.rank().cmp(&b.season.rank()))
}

/// Stable, so semesters with the same season and year keep insertion order.
pub fn sort_semesters(semesters: &mut [Semester]) {
    semesters.sort_by(compare_semesters);
}

pub fn filter_by_year<'a>(semesters: &'a [Semester], filter: &YearFilter) -> Vec<&'a Semester> {
    semesters.iter().filter(|s| filter.matches(s)).collect()
}

/// Distinct years in collection order.
pub fn available_years(semesters: &[Semester]) -> Vec<String> {
    let mut years: Vec<String> = Vec::new();
    for semester in semesters {
        if !years.contains(&semester.year) {
            years.push(semester.year.clone());
        }
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::semester::Season;

    fn sem(season: Season, year: &str) -> Semester {
        Semester::new(season, year)
    }

    fn labels(semesters: &[Semester]) -> Vec<String> {
        semesters.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_by_year_then_season() {
        let mut semesters = vec![
            sem(Season::Winter, "2024"),
            sem(Season::Fall, "2025"),
            sem(Season::SpringSummer, "2024"),
            sem(Season::Fall, "2024"),
            sem(Season::Spring, "2024"),
        ];
        sort_semesters(&mut semesters);
        assert_eq!(
            labels(&semesters),
            vec!["Fall 2024", "Spring 2024", "Spring/Summer 2024", "Winter 2024", "Fall 2025"]
        );
    }

    #[test]
    fn test_sort_is_numeric_not_lexical() {
        let mut semesters = vec![sem(Season::Fall, "10000"), sem(Season::Fall, "999")];
        sort_semesters(&mut semesters);
        assert_eq!(semesters[0].year, "999");
    }

    #[test]
    fn test_sort_is_idempotent_and_stable() {
        let mut first = sem(Season::Fall, "2024");
        first.classes.push(crate::model::semester::Class::new(
            "Marker",
            "a",
            "b",
            vec![],
        ));
        let mut semesters = vec![
            first.clone(),
            sem(Season::Fall, "2023"),
            sem(Season::Fall, "2024"),
        ];
        sort_semesters(&mut semesters);
        let once = semesters.clone();
        sort_semesters(&mut semesters);
        assert_eq!(semesters, once);
        // The duplicate Fall 2024 added first stays first.
        assert_eq!(semesters[1], first);
    }

    #[test]
    fn test_filter_and_years() {
        let semesters = vec![
            sem(Season::Fall, "2023"),
            sem(Season::Fall, "2024"),
            sem(Season::Spring, "2024"),
        ];

        let in_2024 = filter_by_year(&semesters, &YearFilter::Year("2024".to_string()));
        assert_eq!(in_2024.len(), 2);
        assert!(in_2024.iter().all(|s| s.year == "2024"));

        assert_eq!(filter_by_year(&semesters, &YearFilter::All).len(), 3);
        assert!(filter_by_year(&semesters, &YearFilter::Year("1999".to_string())).is_empty());

        assert_eq!(available_years(&semesters), vec!["2023", "2024"]);
    }

    #[test]
    fn test_year_filter_toggle() {
        let filter = YearFilter::All.toggle("2024");
        assert_eq!(filter, YearFilter::Year("2024".to_string()));
        assert_eq!(filter.toggle("2024"), YearFilter::All);
        assert_eq!(filter.toggle("2023"), YearFilter::Year("2023".to_string()));
        assert_eq!(YearFilter::from(Some("All".to_string())), YearFilter::All);
        assert_eq!(YearFilter::from(None), YearFilter::All);
    }
}
