use chrono::NaiveDate;
use studyboost_core::{Planner, YearFilter};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ClassRow {
    #[tabled(rename = "Semester")]
    semester: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Meets")]
    meets: String,
}

#[derive(Tabled)]
struct AssignmentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Due")]
    marker: String,
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Time")]
    time: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

/// Semesters in display order with one row per class. A semester without
/// classes still gets a row.
pub fn semesters_table(planner: &Planner, filter: &YearFilter) -> Option<String> {
    let semesters = planner.semesters.filter_by_year(filter);
    if semesters.is_empty() {
        return None;
    }

    let mut rows = Vec::new();
    for semester in semesters {
        let label = semester.to_string();
        if semester.classes.is_empty() {
            rows.push(ClassRow {
                semester: label,
                class: "-".to_string(),
                dates: String::new(),
                meets: String::new(),
            });
            continue;
        }
        for (i, class) in semester.classes.iter().enumerate() {
            let meets: Vec<String> = class
                .days
                .iter()
                .map(|d| format!("{} {} @ {}", d.day, d.time, d.location))
                .collect();
            rows.push(ClassRow {
                // Semester column: only on the first row of the group
                semester: if i == 0 { label.clone() } else { String::new() },
                class: class.name.clone(),
                dates: format!("{} - {}", class.start_date, class.end_date),
                meets: meets.join("\n"),
            });
        }
    }
    Some(render(rows))
}

/// Assignments for `date`, or for every date when `None`.
pub fn agenda_table(planner: &Planner, date: Option<NaiveDate>) -> Option<String> {
    let dates: Vec<NaiveDate> = match date {
        Some(d) => vec![d],
        None => planner.assignments.dates().collect(),
    };

    let mut rows = Vec::new();
    for date in dates {
        let marker = if planner.assignments.marker_state(date) { "●" } else { "" };
        for (i, assignment) in planner.assignments.list_assignments(date).iter().enumerate() {
            rows.push(AssignmentRow {
                date: if i == 0 { date.format("%Y-%m-%d (%a)").to_string() } else { String::new() },
                marker: if i == 0 { marker.to_string() } else { String::new() },
                class: assignment.class_name.clone(),
                title: assignment.title.clone(),
                time: assignment.time.clone(),
            });
        }
    }

    if rows.is_empty() {
        None
    } else {
        Some(render(rows))
    }
}
