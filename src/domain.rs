use crate::models::{Habit, NewHabit, NewReminder, NewTask, Reminder, Task, Theme};
use std::collections::BTreeSet;

/// In-memory state: the three collections plus the theme flag. Ids come
/// from a counter re-derived from the loaded data, unique across restarts.
#[derive(Debug)]
pub struct TrackerData {
    pub habits: Vec<Habit>,
    pub tasks: Vec<Task>,
    pub reminders: Vec<Reminder>,
    pub theme: Theme,
    next_id: u64,
}

impl TrackerData {
    pub fn new(
        habits: Vec<Habit>,
        tasks: Vec<Task>,
        reminders: Vec<Reminder>,
        theme: Theme,
    ) -> Self {
        let max_id = habits
            .iter()
            .map(|h| h.id)
            .chain(tasks.iter().map(|t| t.id))
            .chain(reminders.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        Self {
            habits,
            tasks,
            reminders,
            theme,
            next_id: max_id + 1,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Rejects blank names; the stored name is the raw draft string.
    pub fn add_habit(&mut self, draft: NewHabit) -> Option<Habit> {
        if draft.name.trim().is_empty() {
            return None;
        }
        let habit = Habit {
            id: self.allocate_id(),
            name: draft.name,
            category: draft.category,
            streak: 0,
            completed_dates: BTreeSet::new(),
        };
        self.habits.push(habit.clone());
        Some(habit)
    }

    pub fn add_task(&mut self, draft: NewTask) -> Option<Task> {
        if draft.name.trim().is_empty() {
            return None;
        }
        let task = Task {
            id: self.allocate_id(),
            name: draft.name,
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date.filter(|date| !date.trim().is_empty()),
        };
        self.tasks.push(task.clone());
        Some(task)
    }

    pub fn add_reminder(&mut self, draft: NewReminder) -> Option<Reminder> {
        if draft.text.trim().is_empty() {
            return None;
        }
        let reminder = Reminder {
            id: self.allocate_id(),
            text: draft.text,
            time: draft.time,
            enabled: true,
        };
        self.reminders.push(reminder.clone());
        Some(reminder)
    }

    /// Marks or unmarks `today` and moves the streak counter with it, never
    /// below zero. `today` is evaluated by the caller once per toggle.
    pub fn toggle_habit(&mut self, id: u64, today: &str) -> Option<Habit> {
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;
        if habit.completed_dates.remove(today) {
            habit.streak = habit.streak.saturating_sub(1);
        } else {
            habit.completed_dates.insert(today.to_string());
            habit.streak += 1;
        }
        Some(habit.clone())
    }

    pub fn toggle_task(&mut self, id: u64) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        Some(task.clone())
    }

    pub fn toggle_reminder(&mut self, id: u64) -> Option<Reminder> {
        let reminder = self.reminders.iter_mut().find(|r| r.id == id)?;
        reminder.enabled = !reminder.enabled;
        Some(reminder.clone())
    }

    pub fn remove_habit(&mut self, id: u64) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        self.habits.len() != before
    }

    pub fn remove_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn remove_reminder(&mut self, id: u64) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        self.reminders.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority};

    fn empty() -> TrackerData {
        TrackerData::new(Vec::new(), Vec::new(), Vec::new(), Theme::default())
    }

    fn habit_draft(name: &str) -> NewHabit {
        NewHabit {
            name: name.to_string(),
            category: Category::Health,
        }
    }

    #[test]
    fn add_habit_assigns_increasing_ids() {
        let mut data = empty();
        let first = data.add_habit(habit_draft("Stretch")).unwrap();
        let second = data.add_habit(habit_draft("Journal")).unwrap();
        assert!(second.id > first.id);
        assert_eq!(
            data.habits.iter().map(|h| h.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }

    #[test]
    fn ids_continue_past_loaded_records() {
        let habits = vec![Habit {
            id: 7,
            name: "Stretch".to_string(),
            category: Category::Health,
            streak: 0,
            completed_dates: BTreeSet::new(),
        }];
        let tasks = vec![Task {
            id: 3,
            name: "File taxes".to_string(),
            completed: false,
            priority: Priority::High,
            due_date: None,
        }];
        let mut data = TrackerData::new(habits, tasks, Vec::new(), Theme::default());
        let reminder = data
            .add_reminder(NewReminder {
                text: "Stand up".to_string(),
                time: "10:00".to_string(),
            })
            .unwrap();
        assert_eq!(reminder.id, 8);
    }

    #[test]
    fn blank_habit_name_is_rejected() {
        let mut data = empty();
        assert!(data.add_habit(habit_draft("   ")).is_none());
        assert!(data.habits.is_empty());
    }

    #[test]
    fn habit_name_is_stored_untrimmed() {
        let mut data = empty();
        let habit = data.add_habit(habit_draft("  Stretch ")).unwrap();
        assert_eq!(habit.name, "  Stretch ");
    }

    #[test]
    fn toggle_habit_marks_today_and_bumps_streak() {
        let mut data = empty();
        let id = data.add_habit(habit_draft("Stretch")).unwrap().id;
        let habit = data.toggle_habit(id, "2026-01-12").unwrap();
        assert_eq!(habit.streak, 1);
        assert!(habit.completed_dates.contains("2026-01-12"));
    }

    #[test]
    fn double_toggle_restores_habit() {
        let mut data = empty();
        let id = data.add_habit(habit_draft("Stretch")).unwrap().id;
        data.toggle_habit(id, "2026-01-11").unwrap();
        let before = data.habits[0].clone();

        data.toggle_habit(id, "2026-01-12").unwrap();
        let after = data.toggle_habit(id, "2026-01-12").unwrap();

        assert_eq!(after, before);
    }

    #[test]
    fn unmark_saturates_streak_at_zero() {
        // A streak of zero with today already marked can happen via loaded
        // data; unmarking must not underflow.
        let habits = vec![Habit {
            id: 1,
            name: "Stretch".to_string(),
            category: Category::Health,
            streak: 0,
            completed_dates: BTreeSet::from(["2026-01-12".to_string()]),
        }];
        let mut data = TrackerData::new(habits, Vec::new(), Vec::new(), Theme::default());
        let habit = data.toggle_habit(1, "2026-01-12").unwrap();
        assert_eq!(habit.streak, 0);
        assert!(habit.completed_dates.is_empty());
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut data = empty();
        assert!(data.toggle_habit(42, "2026-01-12").is_none());
        assert!(data.toggle_task(42).is_none());
        assert!(data.toggle_reminder(42).is_none());
    }

    #[test]
    fn toggle_task_flips_only_completed() {
        let mut data = empty();
        let task = data
            .add_task(NewTask {
                name: "Call dentist".to_string(),
                priority: Priority::Medium,
                due_date: Some("2026-01-12".to_string()),
            })
            .unwrap();

        let flipped = data.toggle_task(task.id).unwrap();
        assert!(flipped.completed);
        assert_eq!(flipped.name, task.name);
        assert_eq!(flipped.priority, task.priority);
        assert_eq!(flipped.due_date, task.due_date);

        let restored = data.toggle_task(task.id).unwrap();
        assert!(!restored.completed);
    }

    #[test]
    fn blank_due_date_is_dropped() {
        let mut data = empty();
        let task = data
            .add_task(NewTask {
                name: "Call dentist".to_string(),
                priority: Priority::Medium,
                due_date: Some("  ".to_string()),
            })
            .unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn toggle_reminder_flips_enabled() {
        let mut data = empty();
        let reminder = data
            .add_reminder(NewReminder {
                text: "Stand up".to_string(),
                time: "10:00".to_string(),
            })
            .unwrap();
        assert!(reminder.enabled);
        assert!(!data.toggle_reminder(reminder.id).unwrap().enabled);
        assert!(data.toggle_reminder(reminder.id).unwrap().enabled);
    }

    #[test]
    fn remove_deletes_exactly_one_and_keeps_order() {
        let mut data = empty();
        let a = data.add_habit(habit_draft("A")).unwrap().id;
        let b = data.add_habit(habit_draft("B")).unwrap().id;
        let c = data.add_habit(habit_draft("C")).unwrap().id;

        assert!(data.remove_habit(b));
        assert_eq!(
            data.habits.iter().map(|h| h.id).collect::<Vec<_>>(),
            vec![a, c]
        );
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut data = empty();
        data.add_habit(habit_draft("A")).unwrap();
        assert!(!data.remove_habit(999));
        assert_eq!(data.habits.len(), 1);
    }
}
