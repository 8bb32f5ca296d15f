use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Health,
    Learning,
    Wellness,
    Productivity,
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

/// `streak` is a counter maintained by the toggle operation, not derived
/// from `completed_dates`; seed habits carry streaks with empty date sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub category: Category,
    pub streak: u32,
    pub completed_dates: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<String>,
}

/// Inert data plus an on/off flag; nothing is ever scheduled from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u64,
    pub text: String,
    pub time: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub name: String,
    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub name: String,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewReminder {
    pub text: String,
    #[serde(default = "default_reminder_time")]
    pub time: String,
}

fn default_reminder_time() -> String {
    "09:00".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeSetting {
    pub theme: Theme,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: String,
    pub completion_rate: u32,
    pub completed_today: usize,
    pub habit_count: usize,
    pub active_tasks: usize,
    pub task_count: usize,
    pub active_reminders: usize,
    pub reminder_count: usize,
}

/// `total` is the habit count at call time, not on the historical date.
#[derive(Debug, Serialize)]
pub struct ProgressPoint {
    pub date: String,
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StreakEntry {
    pub name: String,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub weekly: Vec<ProgressPoint>,
    pub streaks: Vec<StreakEntry>,
    pub completion_rate: u32,
    pub longest_streak: u32,
    pub total_habits: usize,
    pub tasks_completed: usize,
}
