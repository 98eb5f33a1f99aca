use std::fmt;

/// How often motivational messages would be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotivationFrequency {
    EveryTwoHours,
    FiveTimesADay,
    OnceADay,
    None,
}

impl Default for MotivationFrequency {
    fn default() -> Self {
        MotivationFrequency::None
    }
}

impl MotivationFrequency {
    pub const CHOICES: [MotivationFrequency; 4] = [
        MotivationFrequency::EveryTwoHours,
        MotivationFrequency::FiveTimesADay,
        MotivationFrequency::OnceADay,
        MotivationFrequency::None,
    ];

    /// Button caption in the selection dialog.
    pub fn label(self) -> &'static str {
        match self {
            MotivationFrequency::EveryTwoHours => "Every 2 Hours",
            MotivationFrequency::FiveTimesADay => "Maximum 5 Times a Day",
            MotivationFrequency::OnceADay => "Once a Day",
            MotivationFrequency::None => "None at All",
        }
    }
}

impl fmt::Display for MotivationFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MotivationFrequency::EveryTwoHours => "2 hours",
            MotivationFrequency::FiveTimesADay => "5 times a day",
            MotivationFrequency::OnceADay => "once a day",
            MotivationFrequency::None => "none",
        })
    }
}

/// Study reminder cadence. `Unset` is the initial state and is not offered
/// as a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderFrequency {
    Unset,
    OnceADay,
    TwiceADay,
    OnceAWeek,
    Never,
}

impl Default for ReminderFrequency {
    fn default() -> Self {
        ReminderFrequency::Unset
    }
}

impl ReminderFrequency {
    pub const CHOICES: [ReminderFrequency; 4] = [
        ReminderFrequency::OnceADay,
        ReminderFrequency::TwiceADay,
        ReminderFrequency::OnceAWeek,
        ReminderFrequency::Never,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReminderFrequency::Unset => "None",
            ReminderFrequency::OnceADay => "Once a Day",
            ReminderFrequency::TwiceADay => "Twice a Day",
            ReminderFrequency::OnceAWeek => "Once a Week",
            ReminderFrequency::Never => "Never",
        }
    }
}

impl fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReminderFrequency::Unset => "none",
            ReminderFrequency::OnceADay => "once a day",
            ReminderFrequency::TwiceADay => "twice a day",
            ReminderFrequency::OnceAWeek => "once a week",
            ReminderFrequency::Never => "never",
        })
    }
}

/// Preference flags shown on the settings screen.
///
/// Nothing else reads these and they are never written anywhere; they only
/// round-trip through the settings dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub motivation_frequency: MotivationFrequency,
    pub vibrate_enabled: bool,
    pub reminder_frequency: ReminderFrequency,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            motivation_frequency: MotivationFrequency::default(),
            vibrate_enabled: true,
            reminder_frequency: ReminderFrequency::default(),
            notifications_enabled: true,
        }
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

impl Settings {
    pub fn set_motivation_frequency(&mut self, frequency: MotivationFrequency) {
        log::debug!("motivational frequency -> {}", frequency);
        self.motivation_frequency = frequency;
    }

    pub fn toggle_vibrate(&mut self) {
        self.vibrate_enabled = !self.vibrate_enabled;
        log::debug!("vibrate -> {}", self.vibrate_enabled);
    }

    pub fn set_reminder_frequency(&mut self, frequency: ReminderFrequency) {
        log::debug!("reminder frequency -> {}", frequency);
        self.reminder_frequency = frequency;
    }

    /// Shared by the study reminder and app notification dialogs.
    pub fn toggle_notifications(&mut self) {
        self.notifications_enabled = !self.notifications_enabled;
        log::debug!("notifications -> {}", self.notifications_enabled);
    }

    pub fn motivation_summary(&self) -> String {
        format!(
            "Time Frequency: {}\nVibrate: {}",
            self.motivation_frequency,
            enabled(self.vibrate_enabled)
        )
    }

    pub fn reminder_summary(&self) -> String {
        format!(
            "Reminder Frequency: {}\nNotifications: {}",
            self.reminder_frequency,
            enabled(self.notifications_enabled)
        )
    }

    pub fn notification_summary(&self) -> String {
        format!("App Notifications: {}", enabled(self.notifications_enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summaries() {
        let settings = Settings::default();
        assert_eq!(settings.motivation_summary(), "Time Frequency: none\nVibrate: Enabled");
        assert_eq!(
            settings.reminder_summary(),
            "Reminder Frequency: none\nNotifications: Enabled"
        );
        assert_eq!(settings.notification_summary(), "App Notifications: Enabled");
    }

    #[test]
    fn test_notification_flag_is_shared() {
        let mut settings = Settings::default();
        settings.toggle_notifications();
        assert!(settings.reminder_summary().ends_with("Notifications: Disabled"));
        assert_eq!(settings.notification_summary(), "App Notifications: Disabled");
    }

    #[test]
    fn test_choices_update_summaries() {
        let mut settings = Settings::default();
        settings.set_motivation_frequency(MotivationFrequency::FiveTimesADay);
        settings.toggle_vibrate();
        settings.set_reminder_frequency(ReminderFrequency::OnceAWeek);

        assert_eq!(
            settings.motivation_summary(),
            "Time Frequency: 5 times a day\nVibrate: Disabled"
        );
        assert!(settings.reminder_summary().starts_with("Reminder Frequency: once a week"));
    }
}
