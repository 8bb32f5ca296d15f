use crate::domain::TrackerData;
use crate::models::{Category, Habit, Priority, Reminder, Task, Theme};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeSet;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const HABITS_KEY: &str = "habits";
pub const TASKS_KEY: &str = "tasks";
pub const REMINDERS_KEY: &str = "reminders";
pub const THEME_KEY: &str = "theme";

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("TRACKER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

/// Each key falls back to its seed independently, so a corrupt tasks
/// document does not reset habits or reminders.
pub async fn load_data(dir: &Path) -> TrackerData {
    let habits = load_key(dir, HABITS_KEY, seed_habits).await;
    let tasks = load_key(dir, TASKS_KEY, seed_tasks).await;
    let reminders = load_key(dir, REMINDERS_KEY, seed_reminders).await;
    let theme = load_key(dir, THEME_KEY, Theme::default).await;
    TrackerData::new(habits, tasks, reminders, theme)
}

pub async fn persist_habits(dir: &Path, habits: &[Habit]) {
    write_key(dir, HABITS_KEY, &habits).await;
}

pub async fn persist_tasks(dir: &Path, tasks: &[Task]) {
    write_key(dir, TASKS_KEY, &tasks).await;
}

pub async fn persist_reminders(dir: &Path, reminders: &[Reminder]) {
    write_key(dir, REMINDERS_KEY, &reminders).await;
}

pub async fn persist_theme(dir: &Path, theme: Theme) {
    write_key(dir, THEME_KEY, &theme).await;
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

async fn load_key<T: DeserializeOwned>(dir: &Path, key: &str, seed: fn() -> T) -> T {
    let path = key_path(dir, key);
    match fs::read(&path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {key} store, falling back to seed data: {err}");
                seed()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => seed(),
        Err(err) => {
            error!("failed to read {key} store, falling back to seed data: {err}");
            seed()
        }
    }
}

/// Write failures are logged and swallowed; the caller keeps serving from
/// memory and the next mutation rewrites the whole document anyway.
async fn write_key<T: Serialize>(dir: &Path, key: &str, value: &T) {
    let payload = match serde_json::to_vec_pretty(value) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("failed to encode {key} store: {err}");
            return;
        }
    };
    if let Err(err) = fs::write(key_path(dir, key), payload).await {
        warn!("failed to persist {key} store: {err}");
    }
}

fn seed_habits() -> Vec<Habit> {
    vec![
        Habit {
            id: 1,
            name: "Morning Exercise".to_string(),
            category: Category::Health,
            streak: 7,
            completed_dates: BTreeSet::new(),
        },
        Habit {
            id: 2,
            name: "Read 30 minutes".to_string(),
            category: Category::Learning,
            streak: 5,
            completed_dates: BTreeSet::new(),
        },
        Habit {
            id: 3,
            name: "Meditate".to_string(),
            category: Category::Wellness,
            streak: 3,
            completed_dates: BTreeSet::new(),
        },
    ]
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            name: "Complete project proposal".to_string(),
            completed: false,
            priority: Priority::High,
            due_date: Some("2026-01-13".to_string()),
        },
        Task {
            id: 2,
            name: "Call dentist".to_string(),
            completed: false,
            priority: Priority::Medium,
            due_date: Some("2026-01-12".to_string()),
        },
    ]
}

fn seed_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: 1,
            text: "Morning Exercise".to_string(),
            time: "07:00".to_string(),
            enabled: true,
        },
        Reminder {
            id: 2,
            text: "Evening Reading".to_string(),
            time: "20:00".to_string(),
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewHabit;

    #[tokio::test]
    async fn empty_dir_loads_the_seed_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_data(dir.path()).await;

        let names: Vec<&str> = data.habits.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Morning Exercise", "Read 30 minutes", "Meditate"]);
        assert_eq!(
            data.habits.iter().map(|h| h.streak).collect::<Vec<_>>(),
            vec![7, 5, 3]
        );
        assert_eq!(data.habits[0].category, Category::Health);
        assert_eq!(data.habits[1].category, Category::Learning);
        assert_eq!(data.habits[2].category, Category::Wellness);

        assert_eq!(data.tasks.len(), 2);
        assert_eq!(data.tasks[0].name, "Complete project proposal");
        assert_eq!(data.tasks[0].priority, Priority::High);
        assert_eq!(data.tasks[0].due_date.as_deref(), Some("2026-01-13"));
        assert_eq!(data.tasks[1].name, "Call dentist");
        assert_eq!(data.tasks[1].priority, Priority::Medium);
        assert_eq!(data.tasks[1].due_date.as_deref(), Some("2026-01-12"));
        assert!(data.tasks.iter().all(|t| !t.completed));

        assert_eq!(data.reminders.len(), 2);
        assert_eq!(data.reminders[0].time, "07:00");
        assert_eq!(data.reminders[1].text, "Evening Reading");
        assert_eq!(data.reminders[1].time, "20:00");
        assert!(data.reminders.iter().all(|r| r.enabled));

        assert_eq!(data.theme, Theme::Light);
    }

    #[tokio::test]
    async fn collections_round_trip_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = load_data(dir.path()).await;
        data.add_habit(NewHabit {
            name: "Stretch".to_string(),
            category: Category::Productivity,
        })
        .unwrap();
        data.toggle_habit(1, "2026-01-12").unwrap();
        data.toggle_task(2).unwrap();
        data.toggle_reminder(1).unwrap();
        data.theme = Theme::Dark;

        persist_habits(dir.path(), &data.habits).await;
        persist_tasks(dir.path(), &data.tasks).await;
        persist_reminders(dir.path(), &data.reminders).await;
        persist_theme(dir.path(), data.theme).await;

        let reloaded = load_data(dir.path()).await;
        assert_eq!(reloaded.habits, data.habits);
        assert_eq!(reloaded.tasks, data.tasks);
        assert_eq!(reloaded.reminders, data.reminders);
        assert_eq!(reloaded.theme, Theme::Dark);
    }

    #[tokio::test]
    async fn malformed_key_falls_back_without_touching_others() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = load_data(dir.path()).await;
        data.toggle_task(1).unwrap();
        persist_tasks(dir.path(), &data.tasks).await;
        tokio::fs::write(dir.path().join("habits.json"), b"{ not json")
            .await
            .unwrap();

        let reloaded = load_data(dir.path()).await;
        assert_eq!(reloaded.habits, seed_habits());
        assert_eq!(reloaded.tasks, data.tasks);
        assert!(reloaded.tasks[0].completed);
    }

    #[tokio::test]
    async fn id_allocation_resumes_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = load_data(dir.path()).await;
        let added = data
            .add_habit(NewHabit {
                name: "Stretch".to_string(),
                category: Category::Health,
            })
            .unwrap();
        persist_habits(dir.path(), &data.habits).await;

        let mut reloaded = load_data(dir.path()).await;
        let next = reloaded
            .add_habit(NewHabit {
                name: "Journal".to_string(),
                category: Category::Health,
            })
            .unwrap();
        assert!(next.id > added.id);
    }
}
