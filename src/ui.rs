use crate::models::Theme;

pub fn render_index(date: &str, theme: Theme) -> String {
    let theme_class = match theme {
        Theme::Dark => "dark",
        Theme::Light => "",
    };
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{THEME_CLASS}}", theme_class)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit &amp; Task Tracker</title>
  <style>
    :root {
      --bg-1: #eef2ff;
      --bg-2: #dbeafe;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #4f46e5;
      --accent-soft: rgba(79, 70, 229, 0.12);
      --card: #ffffff;
      --row: #f9fafb;
      --border: rgba(31, 41, 55, 0.08);
      --shadow: 0 18px 44px rgba(49, 46, 129, 0.12);
    }

    body.dark {
      --bg-1: #0f172a;
      --bg-2: #1e1b4b;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --accent: #818cf8;
      --accent-soft: rgba(129, 140, 248, 0.16);
      --card: #111827;
      --row: #1f2937;
      --border: rgba(226, 232, 240, 0.1);
      --shadow: 0 18px 44px rgba(2, 6, 23, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 200ms ease, color 200ms ease;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: flex-start;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.7rem, 4vw, 2.3rem);
    }

    h2 {
      margin: 0 0 14px;
      font-size: 1.25rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .theme-toggle {
      border: 1px solid var(--border);
      background: var(--row);
      color: var(--ink);
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.9rem;
      font-weight: 600;
      cursor: pointer;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: var(--accent-soft);
      border-radius: 999px;
      overflow-x: auto;
    }

    .tab {
      flex: 1;
      min-width: 110px;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 14px;
      font-size: 0.92rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .panel {
      display: grid;
      gap: 18px;
    }

    .panel.hidden {
      display: none;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 14px;
    }

    .stat {
      background: var(--row);
      border: 1px solid var(--border);
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 700;
      color: var(--accent);
    }

    .stat .hint {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 18px;
      padding: 20px;
    }

    .add-form {
      display: grid;
      grid-template-columns: 1fr auto auto;
      gap: 10px;
      margin-bottom: 16px;
    }

    .add-form.four {
      grid-template-columns: 1fr auto auto auto;
    }

    .add-form input,
    .add-form select {
      border: 1px solid var(--border);
      background: var(--row);
      color: var(--ink);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 0.95rem;
      min-width: 0;
    }

    .add-form button {
      border: none;
      background: var(--accent);
      color: white;
      border-radius: 10px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
    }

    .list {
      display: grid;
      gap: 10px;
    }

    .row {
      display: flex;
      align-items: center;
      gap: 12px;
      background: var(--row);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 12px 14px;
    }

    .row-muted {
      opacity: 0.7;
    }

    .row-body {
      flex: 1;
      min-width: 0;
    }

    .row-title {
      margin: 0;
      font-weight: 600;
      overflow-wrap: anywhere;
    }

    .row-title.strike {
      text-decoration: line-through;
    }

    .row-sub {
      margin: 2px 0 0;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .check {
      width: 34px;
      height: 34px;
      flex: none;
      border-radius: 50%;
      border: 2px solid var(--muted);
      background: transparent;
      color: white;
      font-size: 1rem;
      cursor: pointer;
    }

    .check.done {
      border-color: var(--accent);
      background: var(--accent);
    }

    .remove {
      flex: none;
      border: none;
      background: transparent;
      color: var(--muted);
      font-size: 1.2rem;
      cursor: pointer;
      padding: 4px 8px;
    }

    .remove:hover {
      color: #dc2626;
    }

    .pill {
      flex: none;
      border: none;
      border-radius: 999px;
      padding: 5px 12px;
      font-size: 0.75rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.05em;
    }

    button.pill {
      cursor: pointer;
    }

    .pill-high {
      background: rgba(220, 38, 38, 0.16);
      color: #dc2626;
    }

    .pill-medium {
      background: rgba(217, 119, 6, 0.16);
      color: #d97706;
    }

    .pill-low {
      background: rgba(22, 163, 74, 0.16);
      color: #16a34a;
    }

    .pill-on {
      background: rgba(22, 163, 74, 0.16);
      color: #16a34a;
    }

    .pill-off {
      background: var(--border);
      color: var(--muted);
    }

    .empty {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    svg.chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-line-muted {
      fill: none;
      stroke: var(--muted);
      stroke-width: 2;
      stroke-dasharray: 5 5;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: var(--border);
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .legend {
      display: flex;
      gap: 18px;
      margin-top: 10px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .legend .swatch {
      display: inline-block;
      width: 18px;
      height: 3px;
      margin-right: 6px;
      vertical-align: middle;
      background: var(--accent);
    }

    .legend .swatch.total {
      background: var(--muted);
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #dc2626;
    }

    .status[data-type="ok"] {
      color: #16a34a;
    }

    @media (max-width: 640px) {
      .app {
        padding: 24px 18px;
      }
      .add-form,
      .add-form.four {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body class="{{THEME_CLASS}}">
  <main class="app">
    <header>
      <div>
        <h1>Habit &amp; Task Tracker</h1>
        <p class="subtitle">Build better habits, accomplish more tasks &middot; <span id="today">{{DATE}}</span></p>
      </div>
      <button id="theme-btn" class="theme-toggle" type="button">Dark mode</button>
    </header>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="dashboard" role="tab" aria-selected="true">Dashboard</button>
      <button class="tab" type="button" data-tab="habits" role="tab" aria-selected="false">Habits</button>
      <button class="tab" type="button" data-tab="tasks" role="tab" aria-selected="false">Tasks</button>
      <button class="tab" type="button" data-tab="reminders" role="tab" aria-selected="false">Reminders</button>
      <button class="tab" type="button" data-tab="progress" role="tab" aria-selected="false">Progress</button>
    </nav>

    <section class="panel" id="panel-dashboard">
      <div class="cards">
        <div class="stat">
          <span class="label">Today's Progress</span>
          <span class="value" id="stat-rate">--</span>
          <span class="hint" id="stat-rate-hint"></span>
        </div>
        <div class="stat">
          <span class="label">Active Tasks</span>
          <span class="value" id="stat-tasks">--</span>
          <span class="hint" id="stat-tasks-hint"></span>
        </div>
        <div class="stat">
          <span class="label">Active Reminders</span>
          <span class="value" id="stat-reminders">--</span>
          <span class="hint" id="stat-reminders-hint"></span>
        </div>
      </div>
      <div class="card">
        <h2>Today's Habits</h2>
        <div class="list" id="dashboard-habits"></div>
      </div>
      <div class="card">
        <h2>Upcoming Tasks</h2>
        <div class="list" id="dashboard-tasks"></div>
      </div>
    </section>

    <section class="panel hidden" id="panel-habits">
      <div class="card">
        <h2>Daily Habits</h2>
        <form id="habit-form" class="add-form">
          <input id="habit-name" type="text" placeholder="Habit name" autocomplete="off" />
          <select id="habit-category">
            <option value="Health">Health</option>
            <option value="Learning">Learning</option>
            <option value="Wellness">Wellness</option>
            <option value="Productivity">Productivity</option>
            <option value="Social">Social</option>
          </select>
          <button type="submit">Add Habit</button>
        </form>
        <div class="list" id="habit-list"></div>
      </div>
    </section>

    <section class="panel hidden" id="panel-tasks">
      <div class="card">
        <h2>Tasks</h2>
        <form id="task-form" class="add-form four">
          <input id="task-name" type="text" placeholder="Task name" autocomplete="off" />
          <select id="task-priority">
            <option value="low">Low Priority</option>
            <option value="medium" selected>Medium Priority</option>
            <option value="high">High Priority</option>
          </select>
          <input id="task-due" type="date" />
          <button type="submit">Add Task</button>
        </form>
        <h2>Active</h2>
        <div class="list" id="task-list-active"></div>
        <div id="task-completed-section" hidden>
          <h2 style="margin-top: 18px">Completed</h2>
          <div class="list" id="task-list-completed"></div>
        </div>
      </div>
    </section>

    <section class="panel hidden" id="panel-reminders">
      <div class="card">
        <h2>Reminders</h2>
        <form id="reminder-form" class="add-form">
          <input id="reminder-text" type="text" placeholder="Reminder text" autocomplete="off" />
          <input id="reminder-time" type="time" value="09:00" />
          <button type="submit">Add Reminder</button>
        </form>
        <div class="list" id="reminder-list"></div>
      </div>
    </section>

    <section class="panel hidden" id="panel-progress">
      <div class="card">
        <h2>Weekly Progress</h2>
        <svg id="progress-chart" class="chart" viewBox="0 0 600 260" role="img" aria-label="Seven day completion chart"></svg>
        <div class="legend">
          <span><span class="swatch"></span>Completed habits</span>
          <span><span class="swatch total"></span>Total habits</span>
        </div>
      </div>
      <div class="card">
        <h2>Habit Streaks</h2>
        <svg id="streak-chart" class="chart" viewBox="0 0 600 260" role="img" aria-label="Habit streak chart"></svg>
      </div>
      <div class="card">
        <h2>Statistics</h2>
        <div class="cards">
          <div class="stat">
            <span class="label">Average Completion Rate</span>
            <span class="value" id="stat-avg">--</span>
          </div>
          <div class="stat">
            <span class="label">Longest Streak</span>
            <span class="value" id="stat-longest">--</span>
          </div>
          <div class="stat">
            <span class="label">Total Habits</span>
            <span class="value" id="stat-total">--</span>
          </div>
          <div class="stat">
            <span class="label">Tasks Completed</span>
            <span class="value" id="stat-done">--</span>
          </div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const todayEl = document.getElementById('today');
    const statusEl = document.getElementById('status');
    const themeBtn = document.getElementById('theme-btn');
    const statRate = document.getElementById('stat-rate');
    const statRateHint = document.getElementById('stat-rate-hint');
    const statTasks = document.getElementById('stat-tasks');
    const statTasksHint = document.getElementById('stat-tasks-hint');
    const statReminders = document.getElementById('stat-reminders');
    const statRemindersHint = document.getElementById('stat-reminders-hint');
    const dashboardHabits = document.getElementById('dashboard-habits');
    const dashboardTasks = document.getElementById('dashboard-tasks');
    const habitList = document.getElementById('habit-list');
    const taskListActive = document.getElementById('task-list-active');
    const taskListCompleted = document.getElementById('task-list-completed');
    const taskCompletedSection = document.getElementById('task-completed-section');
    const reminderList = document.getElementById('reminder-list');
    const progressChart = document.getElementById('progress-chart');
    const streakChart = document.getElementById('streak-chart');
    const statAvg = document.getElementById('stat-avg');
    const statLongest = document.getElementById('stat-longest');
    const statTotal = document.getElementById('stat-total');
    const statDone = document.getElementById('stat-done');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = Array.from(document.querySelectorAll('.panel'));

    const state = { habits: [], tasks: [], reminders: [], dashboard: null, progress: null };
    let theme = document.body.classList.contains('dark') ? 'dark' : 'light';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const esc = (text) => String(text).replace(/[&<>'"]/g, (ch) => '&#' + ch.charCodeAt(0) + ';');

    const getJson = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const post = async (url) => {
      const res = await fetch(url, { method: 'POST' });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const sendJson = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const del = async (url) => {
      const res = await fetch(url, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
    };

    const applyTheme = (next) => {
      theme = next;
      document.body.classList.toggle('dark', next === 'dark');
      themeBtn.textContent = next === 'dark' ? 'Light mode' : 'Dark mode';
    };

    const emptyNote = (text) => '<p class="empty">' + text + '</p>';

    const habitRow = (habit) => {
      const done = habit.completed_dates.includes(state.dashboard.date);
      return '<div class="row">'
        + '<button class="check' + (done ? ' done' : '') + '" type="button" data-action="toggle-habit" data-id="'
        + habit.id + '" aria-label="Toggle habit">' + (done ? '&#10003;' : '') + '</button>'
        + '<div class="row-body"><p class="row-title">' + esc(habit.name) + '</p>'
        + '<p class="row-sub">' + esc(habit.category) + ' &middot; ' + habit.streak + ' day streak</p></div>'
        + '<button class="remove" type="button" data-action="delete-habit" data-id="' + habit.id
        + '" aria-label="Delete habit">&times;</button>'
        + '</div>';
    };

    const taskRow = (task) => {
      const sub = task.completed
        ? 'Completed'
        : 'Due: ' + (task.due_date ? esc(task.due_date) : 'No date set');
      return '<div class="row' + (task.completed ? ' row-muted' : '') + '">'
        + '<button class="check' + (task.completed ? ' done' : '') + '" type="button" data-action="toggle-task" data-id="'
        + task.id + '" aria-label="Toggle task">' + (task.completed ? '&#10003;' : '') + '</button>'
        + '<div class="row-body"><p class="row-title' + (task.completed ? ' strike' : '') + '">' + esc(task.name) + '</p>'
        + '<p class="row-sub">' + sub + '</p></div>'
        + '<span class="pill pill-' + task.priority + '">' + task.priority + '</span>'
        + '<button class="remove" type="button" data-action="delete-task" data-id="' + task.id
        + '" aria-label="Delete task">&times;</button>'
        + '</div>';
    };

    const reminderRow = (reminder) => {
      return '<div class="row">'
        + '<div class="row-body"><p class="row-title">' + esc(reminder.text) + '</p>'
        + '<p class="row-sub">' + esc(reminder.time) + '</p></div>'
        + '<button class="pill ' + (reminder.enabled ? 'pill-on' : 'pill-off')
        + '" type="button" data-action="toggle-reminder" data-id="' + reminder.id + '">'
        + (reminder.enabled ? 'ON' : 'OFF') + '</button>'
        + '<button class="remove" type="button" data-action="delete-reminder" data-id="' + reminder.id
        + '" aria-label="Delete reminder">&times;</button>'
        + '</div>';
    };

    const renderDashboard = () => {
      const dashboard = state.dashboard;
      todayEl.textContent = dashboard.date;
      statRate.textContent = dashboard.completion_rate + '%';
      statRateHint.textContent = dashboard.completed_today + '/' + dashboard.habit_count + ' habits';
      statTasks.textContent = dashboard.active_tasks;
      statTasksHint.textContent = dashboard.task_count + ' total';
      statReminders.textContent = dashboard.active_reminders;
      statRemindersHint.textContent = dashboard.reminder_count + ' total';

      const habits = state.habits.slice(0, 5).map(habitRow).join('');
      dashboardHabits.innerHTML = habits || emptyNote('No habits yet. Add one from the Habits tab.');
      const upcoming = state.tasks.filter((task) => !task.completed).slice(0, 5).map(taskRow).join('');
      dashboardTasks.innerHTML = upcoming || emptyNote('All caught up.');
    };

    const renderHabits = () => {
      habitList.innerHTML = state.habits.map(habitRow).join('') || emptyNote('No habits yet.');
    };

    const renderTasks = () => {
      const active = state.tasks.filter((task) => !task.completed);
      const completed = state.tasks.filter((task) => task.completed);
      taskListActive.innerHTML = active.map(taskRow).join('') || emptyNote('No active tasks.');
      taskCompletedSection.hidden = completed.length === 0;
      taskListCompleted.innerHTML = completed.map(taskRow).join('');
    };

    const renderReminders = () => {
      reminderList.innerHTML = state.reminders.map(reminderRow).join('') || emptyNote('No reminders yet.');
    };

    const formatTick = (value) => {
      const rounded = Math.round(value * 10) / 10;
      return Number.isInteger(rounded) ? rounded.toString() : rounded.toFixed(1);
    };

    const renderProgressChart = () => {
      const points = state.progress.weekly;
      if (!points.length) {
        progressChart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      let max = 1;
      points.forEach((point) => {
        max = Math.max(max, point.completed, point.total);
      });

      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value * (height - top - paddingY)) / max;

      const ticks = 4;
      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value);
        grid += '<line class="chart-grid" x1="' + paddingX + '" y1="' + yPos + '" x2="' + (width - paddingX) + '" y2="' + yPos + '" />';
        grid += '<text class="chart-label" x="' + (paddingX - 10) + '" y="' + (yPos + 4) + '" text-anchor="end">' + formatTick(value) + '</text>';
      }

      const linePath = (key) => points
        .map((point, index) => (index === 0 ? 'M ' : 'L ') + x(index).toFixed(2) + ' ' + y(point[key]).toFixed(2))
        .join(' ');

      const circles = points
        .map((point, index) => '<circle class="chart-point" cx="' + x(index) + '" cy="' + y(point.completed) + '" r="4" />')
        .join('');

      const labels = points
        .map((point, index) => '<text class="chart-label" x="' + x(index) + '" y="' + (height - paddingY + 18) + '" text-anchor="middle">' + point.date.slice(5) + '</text>')
        .join('');

      progressChart.innerHTML = grid
        + '<path class="chart-line-muted" d="' + linePath('total') + '" />'
        + '<path class="chart-line" d="' + linePath('completed') + '" />'
        + circles
        + labels;
    };

    const renderStreakChart = () => {
      const entries = state.progress.streaks;
      if (!entries.length) {
        streakChart.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 30;
      const paddingY = 40;
      const top = 24;

      const max = Math.max(1, ...entries.map((entry) => entry.streak));
      const slot = (width - paddingX * 2) / entries.length;
      const barWidth = Math.min(48, slot * 0.6);
      const y = (value) => height - paddingY - (value * (height - top - paddingY)) / max;

      const bars = entries
        .map((entry, index) => {
          const center = paddingX + slot * index + slot / 2;
          const barY = y(entry.streak);
          const barHeight = Math.max(0, height - paddingY - barY);
          return '<rect class="chart-bar" x="' + (center - barWidth / 2).toFixed(2) + '" y="' + barY.toFixed(2)
            + '" width="' + barWidth.toFixed(2) + '" height="' + barHeight.toFixed(2) + '" rx="6" />'
            + '<text class="chart-label" x="' + center + '" y="' + (barY - 6) + '" text-anchor="middle">' + entry.streak + '</text>'
            + '<text class="chart-label" x="' + center + '" y="' + (height - paddingY + 18) + '" text-anchor="middle">' + esc(entry.name) + '</text>';
        })
        .join('');

      streakChart.innerHTML = bars;
    };

    const renderProgress = () => {
      renderProgressChart();
      renderStreakChart();
      statAvg.textContent = state.progress.completion_rate + '%';
      statLongest.textContent = state.progress.longest_streak + ' days';
      statTotal.textContent = state.progress.total_habits;
      statDone.textContent = state.progress.tasks_completed;
    };

    const renderAll = () => {
      if (!state.dashboard || !state.progress) {
        return;
      }
      renderDashboard();
      renderHabits();
      renderTasks();
      renderReminders();
      renderProgress();
    };

    const refresh = async () => {
      const [habits, tasks, reminders, dashboard, progress] = await Promise.all([
        getJson('/api/habits'),
        getJson('/api/tasks'),
        getJson('/api/reminders'),
        getJson('/api/dashboard'),
        getJson('/api/progress')
      ]);
      Object.assign(state, { habits, tasks, reminders, dashboard, progress });
      renderAll();
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      panels.forEach((panel) => {
        panel.classList.toggle('hidden', panel.id !== 'panel-' + tab);
      });
    };

    const run = async (action, id) => {
      setStatus('Saving...', 'info');
      if (action === 'toggle-habit') {
        await post('/api/habits/' + id + '/toggle');
      } else if (action === 'delete-habit') {
        await del('/api/habits/' + id);
      } else if (action === 'toggle-task') {
        await post('/api/tasks/' + id + '/toggle');
      } else if (action === 'delete-task') {
        await del('/api/tasks/' + id);
      } else if (action === 'toggle-reminder') {
        await post('/api/reminders/' + id + '/toggle');
      } else if (action === 'delete-reminder') {
        await del('/api/reminders/' + id);
      }
      await refresh();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    document.addEventListener('click', (event) => {
      const button = event.target.closest('[data-action]');
      if (!button) {
        return;
      }
      run(button.dataset.action, button.dataset.id).catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    themeBtn.addEventListener('click', () => {
      const next = theme === 'dark' ? 'light' : 'dark';
      sendJson('PUT', '/api/theme', { theme: next })
        .then((setting) => applyTheme(setting.theme))
        .catch((err) => setStatus(err.message, 'error'));
    });

    const submitForm = (form, send) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        setStatus('Saving...', 'info');
        send()
          .then(() => refresh())
          .then(() => {
            setStatus('Saved', 'ok');
            setTimeout(() => setStatus('', ''), 1200);
          })
          .catch((err) => setStatus(err.message, 'error'));
      });
    };

    const habitName = document.getElementById('habit-name');
    const habitCategory = document.getElementById('habit-category');
    submitForm(document.getElementById('habit-form'), async () => {
      await sendJson('POST', '/api/habits', { name: habitName.value, category: habitCategory.value });
      habitName.value = '';
    });

    const taskName = document.getElementById('task-name');
    const taskPriority = document.getElementById('task-priority');
    const taskDue = document.getElementById('task-due');
    submitForm(document.getElementById('task-form'), async () => {
      await sendJson('POST', '/api/tasks', {
        name: taskName.value,
        priority: taskPriority.value,
        due_date: taskDue.value || null
      });
      taskName.value = '';
      taskDue.value = '';
    });

    const reminderText = document.getElementById('reminder-text');
    const reminderTime = document.getElementById('reminder-time');
    submitForm(document.getElementById('reminder-form'), async () => {
      await sendJson('POST', '/api/reminders', {
        text: reminderText.value,
        time: reminderTime.value || '09:00'
      });
      reminderText.value = '';
    });

    applyTheme(theme);
    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
