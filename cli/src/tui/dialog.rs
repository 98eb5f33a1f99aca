use studyboost_core::{MotivationFrequency, ReminderFrequency, Settings};

/// What pressing a dialog button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Dismiss,
    ChooseMotivationFrequency,
    SetMotivationFrequency(MotivationFrequency),
    ToggleVibrate,
    ChooseReminderFrequency,
    SetReminderFrequency(ReminderFrequency),
    ToggleNotifications,
    ClearAccountData,
}

/// Modal message with labeled buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub actions: Vec<(String, DialogAction)>,
    pub selected: usize,
}

impl Dialog {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        actions: Vec<(String, DialogAction)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions,
            selected: 0,
        }
    }

    pub fn next(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + 1) % self.actions.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.actions.is_empty() {
            self.selected = (self.selected + self.actions.len() - 1) % self.actions.len();
        }
    }

    pub fn current(&self) -> DialogAction {
        self.actions
            .get(self.selected)
            .map(|(_, action)| *action)
            .unwrap_or(DialogAction::Dismiss)
    }

    pub fn motivational_messages(settings: &Settings) -> Self {
        Self::new(
            "Manage Motivational Messages",
            settings.motivation_summary(),
            vec![
                ("Change Frequency".to_string(), DialogAction::ChooseMotivationFrequency),
                ("Toggle Vibrate".to_string(), DialogAction::ToggleVibrate),
            ],
        )
    }

    pub fn study_reminders(settings: &Settings) -> Self {
        Self::new(
            "Manage Study Reminders",
            settings.reminder_summary(),
            vec![
                ("Change Frequency".to_string(), DialogAction::ChooseReminderFrequency),
                ("Toggle Notifications".to_string(), DialogAction::ToggleNotifications),
            ],
        )
    }

    pub fn app_notifications(settings: &Settings) -> Self {
        Self::new(
            "Manage App Notifications",
            settings.notification_summary(),
            vec![("Toggle Notifications".to_string(), DialogAction::ToggleNotifications)],
        )
    }

    pub fn clear_account_data() -> Self {
        Self::new(
            "Clear Account Data",
            "Are you sure you want to clear your account data?",
            vec![
                ("Cancel".to_string(), DialogAction::Dismiss),
                ("Yes".to_string(), DialogAction::ClearAccountData),
            ],
        )
    }

    pub fn motivation_frequency() -> Self {
        let mut actions: Vec<(String, DialogAction)> = MotivationFrequency::CHOICES
            .iter()
            .map(|f| (f.label().to_string(), DialogAction::SetMotivationFrequency(*f)))
            .collect();
        actions.push(("Cancel".to_string(), DialogAction::Dismiss));
        Self::new(
            "Select Frequency",
            "Choose the frequency for receiving motivational messages:",
            actions,
        )
    }

    pub fn reminder_frequency() -> Self {
        let mut actions: Vec<(String, DialogAction)> = ReminderFrequency::CHOICES
            .iter()
            .map(|f| (f.label().to_string(), DialogAction::SetReminderFrequency(*f)))
            .collect();
        actions.push(("Cancel".to_string(), DialogAction::Dismiss));
        Self::new(
            "Select Reminder Frequency",
            "Choose the frequency for study reminders:",
            actions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut dialog = Dialog::clear_account_data();
        assert_eq!(dialog.current(), DialogAction::Dismiss);
        dialog.next();
        assert_eq!(dialog.current(), DialogAction::ClearAccountData);
        dialog.next();
        assert_eq!(dialog.current(), DialogAction::Dismiss);
        dialog.previous();
        assert_eq!(dialog.current(), DialogAction::ClearAccountData);
    }

    #[test]
    fn test_frequency_dialogs_end_with_cancel() {
        let dialog = Dialog::motivation_frequency();
        assert_eq!(dialog.actions.len(), 5);
        assert_eq!(dialog.actions[0].0, "Every 2 Hours");
        assert_eq!(dialog.actions[4], ("Cancel".to_string(), DialogAction::Dismiss));

        let dialog = Dialog::reminder_frequency();
        assert_eq!(
            dialog.actions[2].1,
            DialogAction::SetReminderFrequency(ReminderFrequency::OnceAWeek)
        );
    }
}
