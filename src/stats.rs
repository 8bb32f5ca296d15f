use crate::domain::TrackerData;
use crate::models::{DashboardResponse, Habit, ProgressPoint, ProgressResponse, StreakEntry};
use chrono::{Duration, Local, NaiveDate};

pub fn build_dashboard(data: &TrackerData) -> DashboardResponse {
    build_dashboard_at(Local::now().date_naive(), data)
}

pub fn build_dashboard_at(today: NaiveDate, data: &TrackerData) -> DashboardResponse {
    let date = date_key(today);
    let completed_today = completed_on(&data.habits, &date);

    DashboardResponse {
        completion_rate: completion_rate(completed_today, data.habits.len()),
        date,
        completed_today,
        habit_count: data.habits.len(),
        active_tasks: data.tasks.iter().filter(|t| !t.completed).count(),
        task_count: data.tasks.len(),
        active_reminders: data.reminders.iter().filter(|r| r.enabled).count(),
        reminder_count: data.reminders.len(),
    }
}

pub fn build_progress(data: &TrackerData) -> ProgressResponse {
    build_progress_at(Local::now().date_naive(), data)
}

pub fn build_progress_at(today: NaiveDate, data: &TrackerData) -> ProgressResponse {
    let mut weekly = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = date_key(today - Duration::days(offset as i64));
        let completed = completed_on(&data.habits, &date);
        weekly.push(ProgressPoint {
            date,
            completed,
            total: data.habits.len(),
        });
    }

    let streaks = data
        .habits
        .iter()
        .map(|h| StreakEntry {
            name: board_name(&h.name),
            streak: h.streak,
        })
        .collect();

    let completed_today = completed_on(&data.habits, &date_key(today));

    ProgressResponse {
        weekly,
        streaks,
        completion_rate: completion_rate(completed_today, data.habits.len()),
        longest_streak: data.habits.iter().map(|h| h.streak).max().unwrap_or(0),
        total_habits: data.habits.len(),
        tasks_completed: data.tasks.iter().filter(|t| t.completed).count(),
    }
}

pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn completed_on(habits: &[Habit], date: &str) -> usize {
    habits.iter().filter(|h| h.completed_dates.contains(date)).count()
}

fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

fn board_name(name: &str) -> String {
    if name.chars().count() > 15 {
        let head: String = name.chars().take(15).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewHabit, NewTask, Priority, Theme};

    fn tracker() -> TrackerData {
        TrackerData::new(Vec::new(), Vec::new(), Vec::new(), Theme::default())
    }

    fn add_habit(data: &mut TrackerData, name: &str) -> u64 {
        data.add_habit(NewHabit {
            name: name.to_string(),
            category: Category::Health,
        })
        .unwrap()
        .id
    }

    #[test]
    fn dashboard_on_empty_state_is_all_zero() {
        let data = tracker();
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let dashboard = build_dashboard_at(today, &data);
        assert_eq!(dashboard.completion_rate, 0);
        assert_eq!(dashboard.completed_today, 0);
        assert_eq!(dashboard.habit_count, 0);
        assert_eq!(dashboard.date, "2026-01-12");
    }

    #[test]
    fn completion_rate_rounds_and_stays_in_bounds() {
        let mut data = tracker();
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let first = add_habit(&mut data, "A");
        add_habit(&mut data, "B");
        add_habit(&mut data, "C");

        data.toggle_habit(first, "2026-01-12").unwrap();
        assert_eq!(build_dashboard_at(today, &data).completion_rate, 33);

        for habit in &mut data.habits {
            habit.completed_dates.insert("2026-01-12".to_string());
        }
        let dashboard = build_dashboard_at(today, &data);
        assert_eq!(dashboard.completion_rate, 100);
        assert_eq!(dashboard.completed_today, 3);
    }

    #[test]
    fn two_of_three_rounds_up() {
        let mut data = tracker();
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let a = add_habit(&mut data, "A");
        let b = add_habit(&mut data, "B");
        add_habit(&mut data, "C");
        data.toggle_habit(a, "2026-01-12").unwrap();
        data.toggle_habit(b, "2026-01-12").unwrap();
        assert_eq!(build_dashboard_at(today, &data).completion_rate, 67);
    }

    #[test]
    fn weekly_series_is_seven_days_oldest_first() {
        let mut data = tracker();
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let id = add_habit(&mut data, "Stretch");
        data.toggle_habit(id, "2026-01-10").unwrap();

        let progress = build_progress_at(today, &data);
        assert_eq!(progress.weekly.len(), 7);
        assert_eq!(progress.weekly[0].date, "2026-01-06");
        assert_eq!(progress.weekly[6].date, "2026-01-12");

        let jan_10 = progress
            .weekly
            .iter()
            .find(|point| point.date == "2026-01-10")
            .expect("missing day");
        assert_eq!(jan_10.completed, 1);
    }

    #[test]
    fn weekly_totals_use_the_current_habit_count() {
        let mut data = tracker();
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let id = add_habit(&mut data, "Old");
        data.toggle_habit(id, "2026-01-07").unwrap();
        add_habit(&mut data, "New");

        let progress = build_progress_at(today, &data);
        assert!(progress.weekly.iter().all(|point| point.total == 2));
    }

    #[test]
    fn streak_board_truncates_long_names() {
        let mut data = tracker();
        add_habit(&mut data, "Practice classical guitar");
        add_habit(&mut data, "Meditate");
        data.habits[0].streak = 4;
        data.habits[1].streak = 9;

        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let progress = build_progress_at(today, &data);
        assert_eq!(progress.streaks[0].name, "Practice classi...");
        assert_eq!(progress.streaks[0].streak, 4);
        assert_eq!(progress.streaks[1].name, "Meditate");
        assert_eq!(progress.longest_streak, 9);
    }

    #[test]
    fn board_name_counts_characters_not_bytes() {
        let name = "Записывать мысли в дневник";
        let truncated = board_name(name);
        assert_eq!(truncated, format!("{}...", name.chars().take(15).collect::<String>()));
    }

    #[test]
    fn longest_streak_is_zero_without_habits() {
        let data = tracker();
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let progress = build_progress_at(today, &data);
        assert_eq!(progress.longest_streak, 0);
        assert!(progress.streaks.is_empty());
    }

    #[test]
    fn dashboard_counts_active_tasks_and_reminders() {
        let mut data = tracker();
        let done = data
            .add_task(NewTask {
                name: "Ship report".to_string(),
                priority: Priority::High,
                due_date: None,
            })
            .unwrap()
            .id;
        data.add_task(NewTask {
            name: "Call dentist".to_string(),
            priority: Priority::Medium,
            due_date: None,
        })
        .unwrap();
        data.toggle_task(done).unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let dashboard = build_dashboard_at(today, &data);
        assert_eq!(dashboard.active_tasks, 1);
        assert_eq!(dashboard.task_count, 2);

        let progress = build_progress_at(today, &data);
        assert_eq!(progress.tasks_completed, 1);
    }
}
