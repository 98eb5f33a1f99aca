use chrono::{Duration, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use studyboost_core::time::{shift_month, today};
use studyboost_core::{
    Assignment, Class, MeetingDay, Planner, Season, ValidationError, YearFilter,
};

use crate::tui::dialog::{Dialog, DialogAction};
use crate::tui::form::{self, Field, Form, CLASS_HEADER_FIELDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Calendar,
    Classes,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Calendar, Screen::Classes, Screen::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Calendar => "Calendar",
            Screen::Classes => "Classes",
            Screen::Settings => "Settings",
        }
    }

    fn index(self) -> usize {
        Screen::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    pub fn previous(self) -> Screen {
        Screen::ALL[(self.index() + Screen::ALL.len() - 1) % Screen::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOption {
    MotivationalMessages,
    StudyReminders,
    AppNotifications,
    ClearAccountData,
}

impl SettingsOption {
    pub const ALL: [SettingsOption; 4] = [
        SettingsOption::MotivationalMessages,
        SettingsOption::StudyReminders,
        SettingsOption::AppNotifications,
        SettingsOption::ClearAccountData,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsOption::MotivationalMessages => "Manage Motivational Messages",
            SettingsOption::StudyReminders => "Manage Study Reminders",
            SettingsOption::AppNotifications => "Manage App Notifications",
            SettingsOption::ClearAccountData => "Clear Account Data",
        }
    }
}

/// Whatever is layered over the current screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    None,
    AddAssignment { date: NaiveDate, form: Form },
    DayView { date: NaiveDate, selected: usize },
    AddSemester(Form),
    AddClass { semester_index: usize, form: Form },
    ViewClasses { semester_index: usize },
    Dialog(Dialog),
}

pub struct App {
    pub planner: Planner,
    pub screen: Screen,
    pub modal: Modal,
    pub status: Option<String>,
    pub should_quit: bool,
    pub default_season: Season,

    pub selected_date: NaiveDate,

    pub year_filter: YearFilter,
    /// Position in `[All, years...]` of the filter cursor.
    pub filter_cursor: usize,
    /// Position within the filtered semester list.
    pub semester_cursor: usize,

    pub settings_cursor: usize,
}

impl App {
    pub fn new(planner: Planner, default_season: Season) -> App {
        App::with_today(planner, default_season, today())
    }

    pub fn with_today(planner: Planner, default_season: Season, today: NaiveDate) -> App {
        App {
            planner,
            screen: Screen::Home,
            modal: Modal::None,
            status: None,
            should_quit: false,
            default_season,
            selected_date: today,
            year_filter: YearFilter::All,
            filter_cursor: 0,
            semester_cursor: 0,
            settings_cursor: 0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.modal {
            Modal::None => self.on_screen_key(key),
            Modal::AddAssignment { .. } | Modal::AddSemester(_) | Modal::AddClass { .. } => {
                self.on_form_key(key)
            }
            Modal::DayView { .. } => self.on_day_view_key(key),
            Modal::ViewClasses { .. } => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.modal = Modal::None;
                }
            }
            Modal::Dialog(_) => self.on_dialog_key(key),
        }
    }

    fn on_screen_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.switch_screen(self.screen.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_screen(self.screen.previous());
                return;
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.switch_screen(Screen::ALL[index]);
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Home => {}
            Screen::Calendar => self.on_calendar_key(key),
            Screen::Classes => self.on_classes_key(key),
            Screen::Settings => self.on_settings_key(key),
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.status = None;
    }

    // --- Calendar ---

    fn on_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_date(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_date(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_date(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_date(7),
            KeyCode::Char('<') => self.move_month(-1),
            KeyCode::Char('>') => self.move_month(1),
            KeyCode::Char('t') => self.selected_date = today(),
            KeyCode::Enter => self.open_day_view(),
            KeyCode::Char('a') => self.open_add_assignment(),
            _ => {}
        }
    }

    fn move_date(&mut self, days: i64) {
        self.selected_date += Duration::days(days);
    }

    /// Keeps the day of month where it exists, clamping otherwise.
    fn move_month(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.selected_date.checked_add_months(months)
        } else {
            self.selected_date.checked_sub_months(months)
        };
        self.selected_date = moved.unwrap_or_else(|| shift_month(self.selected_date, delta));
    }

    pub fn open_day_view(&mut self) {
        self.modal = Modal::DayView {
            date: self.selected_date,
            selected: 0,
        };
    }

    pub fn open_add_assignment(&mut self) {
        let form = Form::new(
            "Add Assignment",
            vec![
                Field::new("Class Name"),
                Field::new("Assignment Title"),
                Field::new("Due Time (e.g., 3:00 PM)"),
            ],
        );
        self.modal = Modal::AddAssignment {
            date: self.selected_date,
            form,
        };
    }

    fn on_day_view_key(&mut self, key: KeyEvent) {
        let Modal::DayView { date, selected } = &mut self.modal else {
            return;
        };
        let date = *date;
        let count = self.planner.assignments.list_assignments(date).len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.modal = Modal::None,
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                *selected = (*selected + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') if count > 0 => {
                *selected = (*selected + count - 1) % count;
            }
            KeyCode::Char('d') | KeyCode::Char(' ') if count > 0 => {
                let index = *selected;
                self.mark_done(date, index);
            }
            KeyCode::Enter => self.modal = Modal::None,
            _ => {}
        }
    }

    fn mark_done(&mut self, date: NaiveDate, index: usize) {
        match self.planner.assignments.remove_assignment(date, index) {
            Ok(done) => {
                self.status = Some(format!("Done: {}", done.title));
                let left = self.planner.assignments.list_assignments(date).len();
                if let Modal::DayView { selected, .. } = &mut self.modal {
                    *selected = (*selected).min(left.saturating_sub(1));
                }
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    // --- Classes ---

    /// Filter options shown above the semester list.
    pub fn filter_options(&self) -> Vec<String> {
        let mut options = vec!["All".to_string()];
        options.extend(self.planner.semesters.available_years());
        options
    }

    /// Store indices of the semesters currently listed.
    pub fn visible_semesters(&self) -> Vec<usize> {
        self.planner
            .semesters
            .filter_indexed(&self.year_filter)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn highlighted_semester(&self) -> Option<usize> {
        self.visible_semesters().get(self.semester_cursor).copied()
    }

    fn on_classes_key(&mut self, key: KeyEvent) {
        let visible = self.visible_semesters().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if visible > 0 => {
                self.semester_cursor = (self.semester_cursor + 1) % visible;
            }
            KeyCode::Up | KeyCode::Char('k') if visible > 0 => {
                self.semester_cursor = (self.semester_cursor + visible - 1) % visible;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let last = self.filter_options().len() - 1;
                self.filter_cursor = (self.filter_cursor + 1).min(last);
            }
            KeyCode::Char('f') | KeyCode::Char(' ') => self.apply_filter_cursor(),
            KeyCode::Char('n') => self.open_add_semester(),
            KeyCode::Char('c') => self.open_add_class(),
            KeyCode::Enter => {
                if let Some(semester_index) = self.highlighted_semester() {
                    self.modal = Modal::ViewClasses { semester_index };
                }
            }
            _ => {}
        }
    }

    /// `All` always selects everything; a year toggles between itself and
    /// `All`.
    pub fn apply_filter_cursor(&mut self) {
        let options = self.filter_options();
        let Some(option) = options.get(self.filter_cursor) else {
            return;
        };
        self.year_filter = if self.filter_cursor == 0 {
            YearFilter::All
        } else {
            self.year_filter.toggle(option)
        };
        self.semester_cursor = 0;
        log::debug!("year filter -> {}", self.year_filter);
    }

    pub fn open_add_semester(&mut self) {
        let form = Form::new(
            "Add New Semester",
            vec![
                Field::with_value("Season (e.g., Fall)", self.default_season.as_str()),
                Field::new("Year"),
            ],
        );
        self.modal = Modal::AddSemester(form);
    }

    pub fn open_add_class(&mut self) {
        match self.highlighted_semester() {
            Some(semester_index) => {
                self.modal = Modal::AddClass {
                    semester_index,
                    form: form::class_form(),
                };
            }
            None => self.status = Some("Add a semester first".to_string()),
        }
    }

    /// Keeps the cursor on `semester_index` if the filter shows it.
    fn follow_semester(&mut self, semester_index: usize) {
        if let Some(pos) = self
            .visible_semesters()
            .iter()
            .position(|i| *i == semester_index)
        {
            self.semester_cursor = pos;
        }
        let options = self.filter_options().len();
        self.filter_cursor = self.filter_cursor.min(options - 1);
    }

    // --- Settings ---

    fn on_settings_key(&mut self, key: KeyEvent) {
        let count = SettingsOption::ALL.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.settings_cursor = (self.settings_cursor + 1) % count;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.settings_cursor = (self.settings_cursor + count - 1) % count;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.open_setting(SettingsOption::ALL[self.settings_cursor])
            }
            _ => {}
        }
    }

    pub fn open_setting(&mut self, option: SettingsOption) {
        let settings = &self.planner.settings;
        let dialog = match option {
            SettingsOption::MotivationalMessages => Dialog::motivational_messages(settings),
            SettingsOption::StudyReminders => Dialog::study_reminders(settings),
            SettingsOption::AppNotifications => Dialog::app_notifications(settings),
            SettingsOption::ClearAccountData => Dialog::clear_account_data(),
        };
        self.modal = Modal::Dialog(dialog);
    }

    fn on_dialog_key(&mut self, key: KeyEvent) {
        let Modal::Dialog(dialog) = &mut self.modal else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.modal = Modal::None,
            KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => dialog.next(),
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
                dialog.previous()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let action = dialog.current();
                self.run_dialog_action(action);
            }
            _ => {}
        }
    }

    /// Each action closes the current dialog; some open a follow-up.
    pub fn run_dialog_action(&mut self, action: DialogAction) {
        self.modal = Modal::None;
        let settings = &mut self.planner.settings;
        match action {
            DialogAction::Dismiss => {}
            DialogAction::ChooseMotivationFrequency => {
                self.modal = Modal::Dialog(Dialog::motivation_frequency());
            }
            DialogAction::SetMotivationFrequency(f) => settings.set_motivation_frequency(f),
            DialogAction::ToggleVibrate => settings.toggle_vibrate(),
            DialogAction::ChooseReminderFrequency => {
                self.modal = Modal::Dialog(Dialog::reminder_frequency());
            }
            DialogAction::SetReminderFrequency(f) => settings.set_reminder_frequency(f),
            DialogAction::ToggleNotifications => settings.toggle_notifications(),
            DialogAction::ClearAccountData => {
                self.planner.reset();
                self.year_filter = YearFilter::All;
                self.filter_cursor = 0;
                self.semester_cursor = 0;
                self.status = Some("Account data cleared".to_string());
            }
        }
    }

    // --- Forms ---

    fn active_form(&mut self) -> Option<&mut Form> {
        match &mut self.modal {
            Modal::AddAssignment { form, .. } | Modal::AddSemester(form) => Some(form),
            Modal::AddClass { form, .. } => Some(form),
            _ => None,
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let is_class_form = matches!(self.modal, Modal::AddClass { .. });
        let Some(form) = self.active_form() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.modal = Modal::None,
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Char('n') if ctrl && is_class_form => form::add_day_row(form),
            KeyCode::Char('d') if ctrl && is_class_form => {
                form::drop_day_row(form);
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(input) = form.focused() {
                    input.insert(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(input) = form.focused() {
                    input.backspace();
                }
            }
            KeyCode::Left => {
                if let Some(input) = form.focused() {
                    input.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(input) = form.focused() {
                    input.move_right();
                }
            }
            _ => {}
        }
    }

    /// On success the form closes; on rejection it stays open with the
    /// message shown.
    pub fn submit_form(&mut self) {
        let result = match &self.modal {
            Modal::AddAssignment { date, form } => {
                let assignment = Assignment::new(form.value(1), form.value(2), form.value(0));
                let date = *date;
                self.planner
                    .assignments
                    .add_assignment(date, assignment)
                    .map(|_| format!("Added assignment for {}", date))
            }
            Modal::AddSemester(form) => {
                let season = form.value(0).to_string();
                let year = form.value(1).to_string();
                self.add_semester(&season, &year)
            }
            Modal::AddClass {
                semester_index,
                form,
            } => {
                let semester_index = *semester_index;
                let class = class_from_form(form);
                let name = class.name.clone();
                self.planner
                    .semesters
                    .add_class(semester_index, class)
                    .map(|_| format!("Added class {}", name))
            }
            _ => return,
        };

        match result {
            Ok(message) => {
                self.modal = Modal::None;
                self.status = Some(message);
            }
            Err(e) => self.reject(e),
        }
    }

    fn add_semester(&mut self, season: &str, year: &str) -> Result<String, ValidationError> {
        let season: Season = season.parse()?;
        let index = self.planner.semesters.add_semester(season, year)?;
        self.follow_semester(index);
        let label = self
            .planner
            .semesters
            .get(index)
            .map(|s| s.to_string())
            .unwrap_or_default();
        Ok(format!("Added {}", label))
    }

    fn reject(&mut self, e: ValidationError) {
        if let Some(form) = self.active_form() {
            form.error = Some(e.to_string());
        }
    }
}

fn class_from_form(form: &Form) -> Class {
    let days = (0..form::day_rows(form))
        .map(|row| {
            let base = CLASS_HEADER_FIELDS + row * 3;
            MeetingDay::new(form.value(base), form.value(base + 1), form.value(base + 2))
        })
        .collect();
    Class::new(form.value(0), form.value(1), form.value(2), days)
}
