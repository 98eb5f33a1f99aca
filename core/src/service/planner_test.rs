#[cfg(test)]
mod tests {
    use crate::model::assignment::Assignment;
    use crate::model::semester::{Class, MeetingDay, Season};
    use crate::model::settings::MotivationFrequency;
    use crate::service::dto::{Seed, SeedSemester};
    use crate::service::planner::Planner;
    use crate::service::sort::YearFilter;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::io::Write;

    const SEED_JSON: &str = r#"{
        "semesters": [
            { "season": "Spring", "year": "2024", "classes": [
                { "name": "Biology", "startDate": "2024-01-10", "endDate": "2024-05-01",
                  "days": [{ "day": "Tue", "time": "9:00", "location": "Lab 2" }] }
            ] },
            { "season": "Fall", "year": "2024" },
            { "season": "fall", "year": "2023" }
        ],
        "assignments": {
            "2024-10-01": [
                { "title": "Essay", "time": "3:00 PM", "class": "ENG 200" },
                { "title": "Quiz", "time": "noon", "class": "MATH 101" }
            ],
            "2024-10-03": [{ "title": "Lab", "time": "9am", "class": "BIO 110" }]
        }
    }"#;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_seed_replays_through_stores() {
        let seed: Seed = serde_json::from_str(SEED_JSON).unwrap();
        let planner = Planner::from_seed(seed).unwrap();

        let labels: Vec<String> = planner
            .semesters
            .filter_by_year(&YearFilter::All)
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(labels, vec!["Fall 2023", "Fall 2024", "Spring 2024"]);

        // The class followed its semester through the re-sort.
        let spring = planner.semesters.get(2).unwrap();
        assert_eq!(spring.classes[0].name, "Biology");

        assert_eq!(planner.assignments.list_assignments(date("2024-10-01")).len(), 2);
        assert!(planner.assignments.marker_state(date("2024-10-03")));
        assert_eq!(planner.assignments.len(), 3);
    }

    #[test]
    fn test_seed_reports_invalid_class() {
        let seed = Seed {
            semesters: vec![SeedSemester {
                season: Season::Winter,
                year: "2025".to_string(),
                classes: vec![Class::new(
                    "Art",
                    "2025-01-05",
                    "2025-03-20",
                    vec![MeetingDay::new("Fri", "14:00", "")],
                )],
            }],
            assignments: BTreeMap::new(),
        };

        let err = Planner::from_seed(seed).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("class 'Art'"), "{}", message);
        assert!(message.contains("Location is required"), "{}", message);
    }

    #[test]
    fn test_seed_reports_bad_date_key() {
        let mut assignments = BTreeMap::new();
        assignments.insert(
            "tomorrow".to_string(),
            vec![Assignment::new("Essay", "3:00 PM", "ENG 200")],
        );
        let seed = Seed { semesters: vec![], assignments };

        let err = Planner::from_seed(seed).unwrap_err();
        assert!(err.to_string().contains("tomorrow"));
    }

    #[test]
    fn test_load_seed_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED_JSON.as_bytes()).unwrap();

        let planner = Planner::load_seed(file.path()).unwrap();
        assert_eq!(planner.semesters.available_years(), vec!["2023", "2024"]);
    }

    #[test]
    fn test_load_seed_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Planner::load_seed(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse seed file"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let seed: Seed = serde_json::from_str(SEED_JSON).unwrap();
        let mut planner = Planner::from_seed(seed).unwrap();
        planner
            .settings
            .set_motivation_frequency(MotivationFrequency::OnceADay);

        planner.reset();

        assert!(planner.semesters.is_empty());
        assert!(planner.assignments.is_empty());
        assert_eq!(planner.settings.motivation_frequency, MotivationFrequency::None);
    }
}
