use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{require, ValidationError};
use crate::input::expand_key;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum Season {
    Fall,
    Spring,
    SpringSummer,
    Winter,
}

impl Default for Season {
    fn default() -> Self {
        Season::Fall
    }
}

impl Season {
    /// Seasonal order within a year.
    pub const ALL: [Season; 4] = [
        Season::Fall,
        Season::Spring,
        Season::SpringSummer,
        Season::Winter,
    ];

    pub fn rank(self) -> u8 {
        match self {
            Season::Fall => 0,
            Season::Spring => 1,
            Season::SpringSummer => 2,
            Season::Winter => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Fall => "Fall",
            Season::Spring => "Spring",
            Season::SpringSummer => "Spring/Summer",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "Summer" is what people type for the Spring/Summer term.
        let candidates = ["Fall", "Spring", "Spring/Summer", "Winter", "Summer"];
        let key = expand_key(s, &candidates).map_err(|_| ValidationError::InvalidSeason {
            input: s.to_string(),
        })?;
        Ok(match key {
            "Fall" => Season::Fall,
            "Spring" => Season::Spring,
            "Winter" => Season::Winter,
            _ => Season::SpringSummer,
        })
    }
}

impl TryFrom<String> for Season {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.as_str().to_string()
    }
}

/// A recurring weekly slot. Freeform; only emptiness is checked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MeetingDay {
    pub day: String,
    pub time: String,
    pub location: String,
}

impl MeetingDay {
    pub fn new(day: impl Into<String>, time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    /// `row` is 1-based, as shown in the form.
    pub fn validate(&self, row: usize) -> Result<(), ValidationError> {
        let missing = |field| ValidationError::EmptyMeetingDayField { row, field };
        if self.day.trim().is_empty() {
            return Err(missing("Day"));
        }
        if self.time.trim().is_empty() {
            return Err(missing("Time"));
        }
        if self.location.trim().is_empty() {
            return Err(missing("Location"));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<MeetingDay>,
}

impl Class {
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        days: Vec<MeetingDay>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            days,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Class Name", &self.name)?;
        require("Start Date", &self.start_date)?;
        require("End Date", &self.end_date)?;
        if self.days.is_empty() {
            return Err(ValidationError::NoMeetingDays);
        }
        for (i, day) in self.days.iter().enumerate() {
            day.validate(i + 1)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    pub season: Season,
    pub year: String,
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl Semester {
    pub fn new(season: Season, year: impl Into<String>) -> Self {
        Self {
            season,
            year: year.into(),
            classes: Vec::new(),
        }
    }

    /// Numeric year used for ordering. The store only admits years that
    /// parse, so the fallback is never hit for stored semesters.
    pub fn year_number(&self) -> i64 {
        self.year.trim().parse().unwrap_or(0)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

/// Canonical form of a typed year: `+2024` and `02024` both become `2024`.
/// Rejects blank or non-numeric years.
pub fn normalize_year(year: &str) -> Result<String, ValidationError> {
    require("Year", year)?;
    year.trim()
        .parse::<i64>()
        .map(|n| n.to_string())
        .map_err(|_| ValidationError::InvalidYear {
            input: year.to_string(),
        })
}
