use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
    Frame,
};
use studyboost_core::time::{month_grid, today};
use studyboost_core::{Class, Semester};

use crate::tui::app::{App, Modal, Screen, SettingsOption};
use crate::tui::dialog::Dialog;
use crate::tui::form::Form;

// --- THEME ---
struct Theme {
    primary: Color,
    bar: Color,
    muted: Color,
    marker: Color,
    done: Color,
    error: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    bar: Color::Blue,
    muted: Color::DarkGray,
    marker: Color::Red,
    done: Color::Green,
    error: Color::LightRed,
};

const QUOTE: &str = "The mind is not a vessel to be filled but a fire to be ignited.";

const CALENDAR_STEPS: [&str; 5] = [
    "1. Press a to add a new item",
    "2. Add in your details",
    "3. Press Enter to save your changes",
    "4. Press Enter on a date to see your assignments for the day",
    "5. To mark an assignment done, open a date with the red mark and press d",
];

fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status
            Constraint::Length(3), // Tab bar
        ])
        .split(size);

    match app.screen {
        Screen::Home => draw_home(f, main_chunks[0]),
        Screen::Calendar => draw_calendar(f, app, main_chunks[0]),
        Screen::Classes => draw_classes(f, app, main_chunks[0]),
        Screen::Settings => draw_settings(f, app, main_chunks[0]),
    }

    let status = Paragraph::new(app.status.clone().unwrap_or_default())
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(status, main_chunks[1]);

    draw_tab_bar(f, app, main_chunks[2]);
    draw_modal(f, app, size);
}

fn draw_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, screen) in Screen::ALL.iter().enumerate() {
        let style = if *screen == app.screen {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, screen.title()), style));
        spans.push(Span::raw("   "));
    }
    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(THEME.bar)));
    f.render_widget(bar, area);
}

fn draw_home(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "STUDY BOOST",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(QUOTE, Style::default().add_modifier(Modifier::ITALIC))),
        Line::from(Span::styled("-Plutarch", Style::default().add_modifier(Modifier::ITALIC))),
    ];
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Min(6)])
        .split(area);
    let home = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(home, vertical[1]);
}

// --- Calendar ---

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Title
            Constraint::Length(CALENDAR_STEPS.len() as u16), // Instructions
            Constraint::Min(9),                            // Grid
            Constraint::Length(1),                         // Keys
        ])
        .split(area);

    let title = Paragraph::new("Welcome to your Calendar")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(title, chunks[0]);

    let steps: Vec<Line> = CALENDAR_STEPS.iter().map(|s| Line::from(*s)).collect();
    f.render_widget(Paragraph::new(steps).wrap(Wrap { trim: true }), chunks[1]);

    draw_month(f, app, chunks[2]);

    let keys = Paragraph::new("←/→/↑/↓: Day | </>: Month | t: Today | Enter: View | a: Add")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(keys, chunks[3]);
}

fn day_cell(app: &App, date: NaiveDate, today: NaiveDate) -> Cell<'static> {
    let marked = app.planner.assignments.marker_state(date);
    let mut style = Style::default();
    if date == today {
        style = style.fg(THEME.primary).add_modifier(Modifier::BOLD);
    }
    if date == app.selected_date {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let dot = if marked { "•" } else { " " };
    Cell::from(Line::from(vec![
        Span::styled(format!("{:>2}", date.day()), style),
        Span::styled(dot, Style::default().fg(THEME.marker)),
    ]))
}

fn draw_month(f: &mut Frame, app: &App, area: Rect) {
    let today = today();
    let rows: Vec<Row> = month_grid(app.selected_date)
        .into_iter()
        .map(|week| {
            Row::new(week.into_iter().map(|cell| match cell {
                Some(date) => day_cell(app, date, today),
                None => Cell::from(""),
            }))
        })
        .collect();

    let header = Row::new(["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"])
        .style(Style::default().fg(Color::Yellow));
    let title = format!(" {} ", app.selected_date.format("%B %Y"));
    let table = Table::new(rows, [Constraint::Length(4); 7])
        .header(header)
        .column_spacing(1)
        .block(rounded(&title).title_alignment(Alignment::Center));

    // Center the fixed-width grid.
    let width = (7 * 5 + 2).min(area.width);
    let x = area.x + (area.width - width) / 2;
    f.render_widget(table, Rect { x, width, ..area });
}

// --- Classes ---

fn draw_classes(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Year filter
            Constraint::Min(1),    // Semesters
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let title = Paragraph::new("Your Classes")
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(title, chunks[0]);

    let active = app.year_filter.to_string();
    let filters: Vec<Span> = app
        .filter_options()
        .into_iter()
        .enumerate()
        .flat_map(|(i, option)| {
            let mut style = Style::default().fg(Color::Gray);
            if option == active {
                style = style.fg(Color::Black).bg(THEME.primary);
            }
            if i == app.filter_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            [Span::styled(format!(" {} ", option), style), Span::raw(" ")]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(filters)).alignment(Alignment::Center), chunks[1]);

    let items: Vec<ListItem> = app
        .planner
        .semesters
        .filter_indexed(&app.year_filter)
        .map(|(_, semester)| ListItem::new(semester_text(semester)))
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new("No semesters yet. Press n to add one.")
            .style(Style::default().fg(THEME.muted))
            .alignment(Alignment::Center)
            .block(rounded(" Semesters "));
        f.render_widget(empty, chunks[2]);
    } else {
        let list = List::new(items)
            .block(rounded(" Semesters "))
            .highlight_style(Style::default().bg(THEME.muted).add_modifier(Modifier::BOLD))
            .highlight_symbol(">> ");
        let mut state = ListState::default().with_selected(Some(app.semester_cursor));
        f.render_stateful_widget(list, chunks[2], &mut state);
    }

    let keys = Paragraph::new("j/k: Semester | h/l + f: Year filter | n: New semester | c: Add class | Enter: View")
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center);
    f.render_widget(keys, chunks[3]);
}

fn semester_text(semester: &Semester) -> Text<'static> {
    let mut lines = vec![Line::from(Span::styled(
        semester.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    for class in &semester.classes {
        lines.extend(class_lines(class));
    }
    Text::from(lines)
}

fn class_lines(class: &Class) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("  {}", class.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("    Start: {} - End: {}", class.start_date, class.end_date)),
    ];
    for day in &class.days {
        lines.push(Line::from(format!(
            "    Day: {}  Time: {}  Location: {}",
            day.day, day.time, day.location
        )));
    }
    lines
}

// --- Settings ---

fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = SettingsOption::ALL
        .iter()
        .map(|option| ListItem::new(Line::from(option.label()).alignment(Alignment::Center)))
        .collect();
    let list = List::new(items)
        .block(rounded(" Settings "))
        .highlight_style(Style::default().fg(Color::White).bg(THEME.bar).add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(app.settings_cursor));

    let height = (SettingsOption::ALL.len() as u16 + 2).min(area.height);
    let y = area.y + (area.height - height) / 2;
    f.render_stateful_widget(list, Rect { y, height, ..area }, &mut state);
}

// --- Modals ---

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_modal(f: &mut Frame, app: &App, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::AddAssignment { date, form } => {
            let footer = format!("Date: {}", date);
            draw_form(f, form, Some(&footer), area);
        }
        Modal::AddSemester(form) => draw_form(f, form, None, area),
        Modal::AddClass { form, .. } => {
            draw_form(f, form, Some("Ctrl-N: Add more days | Ctrl-D: Remove last day"), area)
        }
        Modal::DayView { date, selected } => draw_day_view(f, app, *date, *selected, area),
        Modal::ViewClasses { semester_index } => {
            if let Some(semester) = app.planner.semesters.get(*semester_index) {
                draw_view_classes(f, semester, area);
            }
        }
        Modal::Dialog(dialog) => draw_dialog(f, dialog, area),
    }
}

fn draw_form(f: &mut Frame, form: &Form, footer: Option<&str>, area: Rect) {
    let label_width = form.fields.iter().map(|fl| fl.label.len()).max().unwrap_or(0) as u16 + 2;
    let extra = 4 + u16::from(footer.is_some()) + u16::from(form.error.is_some());
    let popup = centered(area, 70, form.fields.len() as u16 + extra);
    f.render_widget(Clear, popup);

    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label_style = if i == form.focus {
                Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(format!("{:<width$}", field.label, width = label_width as usize), label_style),
                Span::raw(field.input.value.clone()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    if let Some(footer) = footer {
        lines.push(Line::from(Span::styled(footer.to_string(), Style::default().fg(THEME.muted))));
    }
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(THEME.error))));
    }

    let title = format!(" {} ", form.title);
    let paragraph = Paragraph::new(lines).block(
        rounded(&title).title_bottom(Line::from(" Enter: Save | Tab: Next | Esc: Cancel ").centered()),
    );
    f.render_widget(paragraph, popup);

    if let Some(field) = form.fields.get(form.focus) {
        let x = popup.x + 1 + label_width + field.input.cursor_column();
        let y = popup.y + 1 + form.focus as u16;
        if x < (popup.x + popup.width).saturating_sub(1) && y < (popup.y + popup.height).saturating_sub(1) {
            f.set_cursor_position((x, y));
        }
    }
}

/// Four lines per assignment plus borders and padding.
fn day_view_height(count: usize) -> u16 {
    let rows = u16::try_from(count).unwrap_or(u16::MAX);
    rows.saturating_mul(4).max(1).saturating_add(4)
}

fn draw_day_view(f: &mut Frame, app: &App, date: NaiveDate, selected: usize, area: Rect) {
    let assignments = app.planner.assignments.list_assignments(date);
    let popup = centered(area, 60, day_view_height(assignments.len()));
    f.render_widget(Clear, popup);

    let mut lines = Vec::new();
    if assignments.is_empty() {
        lines.push(Line::from("No assignments for this day."));
    }
    for (i, assignment) in assignments.iter().enumerate() {
        let style = if i == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::styled(format!("Class: {}", assignment.class_name), style));
        lines.push(Line::styled(format!("Title: {}", assignment.title), style));
        lines.push(Line::styled(format!("Time: {}", assignment.time), style));
        lines.push(Line::from(""));
    }

    let title = format!(" Assignments for {} ", date);
    let keys = if assignments.is_empty() {
        " Esc: Close "
    } else {
        " j/k: Select | d: Mark as Done | Esc: Close "
    };
    let paragraph = Paragraph::new(lines).block(
        rounded(&title)
            .border_style(Style::default().fg(THEME.done))
            .title_bottom(Line::from(keys).centered()),
    );
    f.render_widget(paragraph, popup);
}

fn draw_view_classes(f: &mut Frame, semester: &Semester, area: Rect) {
    let mut lines = Vec::new();
    if semester.classes.is_empty() {
        lines.push(Line::from("No classes yet."));
    }
    for class in &semester.classes {
        lines.extend(class_lines(class));
    }
    let popup = centered(area, 70, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);

    let title = format!(" {} ", semester);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(rounded(&title).title_bottom(Line::from(" Esc: Close ").centered()));
    f.render_widget(paragraph, popup);
}

fn draw_dialog(f: &mut Frame, dialog: &Dialog, area: Rect) {
    let mut lines: Vec<Line> = dialog.message.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    for (i, (label, _)) in dialog.actions.iter().enumerate() {
        let style = if i == dialog.selected {
            Style::default().fg(Color::White).bg(THEME.bar).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(THEME.primary)
        };
        lines.push(Line::from(Span::styled(format!("  {}  ", label), style)).centered());
    }

    let popup = centered(area, 64, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let title = format!(" {} ", dialog.title);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(rounded(&title));
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_view_height_saturates() {
        assert_eq!(day_view_height(0), 5);
        assert_eq!(day_view_height(2), 12);
        assert_eq!(day_view_height(16_384), u16::MAX);
        assert_eq!(day_view_height(usize::MAX), u16::MAX);
    }
}
