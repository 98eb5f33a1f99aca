use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::assignment::Assignment;
use crate::model::semester::{Class, Season};

/// JSON shape of a seed file.
///
/// ```json
/// {
///   "semesters": [
///     { "season": "Fall", "year": "2024", "classes": [
///       { "name": "Algebra", "startDate": "2024-09-02", "endDate": "2024-12-13",
///         "days": [{ "day": "Mon", "time": "10:00", "location": "Hall A" }] }
///     ] }
///   ],
///   "assignments": {
///     "2024-10-01": [{ "title": "Essay", "time": "3:00 PM", "class": "ENG 200" }]
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Seed {
    #[serde(default)]
    pub semesters: Vec<SeedSemester>,
    /// Keys are `YYYY-MM-DD`; parsed when the seed is replayed so a bad key
    /// can be reported with the rest of the validation errors.
    #[serde(default)]
    pub assignments: BTreeMap<String, Vec<Assignment>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeedSemester {
    pub season: Season,
    pub year: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sections_are_optional() {
        let seed: Seed = serde_json::from_str("{}").unwrap();
        assert_eq!(seed, Seed::default());

        let seed: Seed =
            serde_json::from_str(r#"{"semesters":[{"season":"Winter","year":"2025"}]}"#).unwrap();
        assert_eq!(seed.semesters[0].season, Season::Winter);
        assert!(seed.semesters[0].classes.is_empty());
    }

    #[test]
    fn test_unknown_season_fails_to_parse() {
        let res: Result<Seed, _> =
            serde_json::from_str(r#"{"semesters":[{"season":"Monsoon","year":"2025"}]}"#);
        assert!(res.is_err());
    }
}
