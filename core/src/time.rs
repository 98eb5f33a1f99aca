use chrono::{Datelike, Duration, Local, Months, NaiveDate, TimeDelta};

use crate::error::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a date typed by the user, relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`/`tod`, `tomorrow`/`tom`, `yesterday`, and
/// `+Nd` / `+Nw` offsets.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidDate {
        input: input.to_string(),
    };

    // 1. Reserved keywords
    match trimmed.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, +Nw)
    if let Some(rest) = trimmed.strip_prefix('+') {
        let unit = rest.chars().last().ok_or_else(invalid)?;
        let num_str = &rest[..rest.len() - unit.len_utf8()];
        let count: i64 = num_str.parse().map_err(|_| invalid())?;
        let offset = match unit {
            'd' => TimeDelta::try_days(count),
            'w' => TimeDelta::try_weeks(count),
            _ => None,
        };
        return offset
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(invalid);
    }

    // 3. Absolute
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shifts to the first day of the month `delta` months away.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// Weeks of the month containing `date`, Sunday first. Cells outside the
/// month are `None`.
pub fn month_grid(date: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(date);
    let next = shift_month(first, 1);
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = lead;
    let mut day = first;
    while day < next {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
        day += Duration::days(1);
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date_keywords_and_offsets() {
        let today = d(2024, 10, 30);
        assert_eq!(parse_date("today", today).unwrap(), today);
        assert_eq!(parse_date("Tom", today).unwrap(), d(2024, 10, 31));
        assert_eq!(parse_date("+2d", today).unwrap(), d(2024, 11, 1));
        assert_eq!(parse_date("+1w", today).unwrap(), d(2024, 11, 6));
        assert_eq!(parse_date(" 2024-02-29 ", today).unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let today = d(2024, 10, 30);
        assert!(parse_date("2023-02-29", today).is_err());
        assert!(parse_date("+d", today).is_err());
        assert!(parse_date("+3m", today).is_err());
        assert!(matches!(
            parse_date("+100000000d", today),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(parse_date("+9000000000000000d", today).is_err());
        assert!(parse_date("+9000000000000000w", today).is_err());
        assert!(matches!(
            parse_date("next friday", today),
            Err(ValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_shift_month_crosses_years() {
        assert_eq!(shift_month(d(2024, 12, 15), 1), d(2025, 1, 1));
        assert_eq!(shift_month(d(2024, 1, 31), -1), d(2023, 12, 1));
        assert_eq!(shift_month(d(2024, 5, 5), 0), d(2024, 5, 1));
    }

    #[test]
    fn test_month_grid_layout() {
        // September 2024 starts on a Sunday and has 30 days.
        let grid = month_grid(d(2024, 9, 10));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][0], Some(d(2024, 9, 1)));
        assert_eq!(grid[4][1], Some(d(2024, 9, 30)));
        assert_eq!(grid[4][2], None);

        // February 2024 starts on a Thursday.
        let grid = month_grid(d(2024, 2, 1));
        assert_eq!(grid[0][3], None);
        assert_eq!(grid[0][4], Some(d(2024, 2, 1)));
        let days: usize = grid.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(days, 29);
    }
}
