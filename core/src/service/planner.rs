use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use crate::model::settings::Settings;
use crate::service::dto::Seed;
use crate::store::{AssignmentStore, SemesterStore};
use crate::time::{parse_date, today, DATE_FORMAT};

/// One session's worth of state: both stores and the settings flags.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    pub assignments: AssignmentStore,
    pub semesters: SemesterStore,
    pub settings: Settings,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays `seed` through the store operations. The first rejected
    /// record aborts with an error naming where it sits in the seed.
    pub fn from_seed(seed: Seed) -> Result<Self> {
        let mut planner = Planner::new();

        for (i, semester) in seed.semesters.into_iter().enumerate() {
            let label = format!("semester #{} ({} {})", i + 1, semester.season, semester.year);
            let index = planner
                .semesters
                .add_semester(semester.season, &semester.year)
                .with_context(|| format!("Invalid {}", label))?;
            for class in semester.classes {
                let name = class.name.clone();
                planner
                    .semesters
                    .add_class(index, class)
                    .with_context(|| format!("Invalid class '{}' in {}", name, label))?;
            }
        }

        for (key, list) in seed.assignments {
            // Seed dates are absolute; no keywords or offsets.
            let date = NaiveDate::parse_from_str(&key, DATE_FORMAT)
                .map_err(|_| anyhow!("Invalid assignment date '{}' (expected YYYY-MM-DD)", key))?;
            for (i, assignment) in list.into_iter().enumerate() {
                planner
                    .assignments
                    .add_assignment(date, assignment)
                    .with_context(|| format!("Invalid assignment #{} on {}", i + 1, key))?;
            }
        }

        log::info!(
            "seeded {} semesters and {} assignments",
            planner.semesters.len(),
            planner.assignments.len()
        );
        Ok(planner)
    }

    pub fn load_seed(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open seed file {}", path.display()))?;
        let seed: Seed = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        Self::from_seed(seed).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Clears everything held for the session.
    pub fn reset(&mut self) {
        log::info!("clearing session data");
        *self = Planner::new();
    }

    /// Date parsing for user input, relative to the local today.
    pub fn parse_user_date(input: &str) -> Result<NaiveDate> {
        Ok(parse_date(input, today())?)
    }
}
