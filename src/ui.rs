use crate::keys::date_key;
use crate::models::{Progress, StreakState};
use chrono::{Datelike, Duration, NaiveDate};

struct Quote {
    text: &'static str,
    author: &'static str,
    emoji: &'static str,
}

const QUOTES: &[Quote] = &[
    Quote {
        text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
        emoji: "🚀",
    },
    Quote {
        text: "Small steps every day.",
        author: "Unknown",
        emoji: "👣",
    },
    Quote {
        text: "You are capable of amazing things.",
        author: "Unknown",
        emoji: "💡",
    },
    Quote {
        text: "Progress, not perfection.",
        author: "Unknown",
        emoji: "🌱",
    },
    Quote {
        text: "Stay positive, work hard, make it happen.",
        author: "Unknown",
        emoji: "💪",
    },
    Quote {
        text: "Dream big. Start small. Act now.",
        author: "Robin Sharma",
        emoji: "✨",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
        emoji: "🏆",
    },
    Quote {
        text: "Every day is a fresh start.",
        author: "Unknown",
        emoji: "🌅",
    },
];

// Same quote all day, rotating across days.
fn quote_of_the_day(date: NaiveDate) -> &'static Quote {
    let index = date.num_days_from_ce().rem_euclid(QUOTES.len() as i32) as usize;
    &QUOTES[index]
}

fn friendly_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

fn streak_label(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}

pub fn render_landing(today: NaiveDate) -> String {
    let quote = quote_of_the_day(today);
    LANDING_HTML
        .replace("{{TODAY}}", &date_key(today))
        .replace("{{QUOTE_TEXT}}", quote.text)
        .replace("{{QUOTE_AUTHOR}}", quote.author)
        .replace("{{QUOTE_EMOJI}}", quote.emoji)
}

pub fn render_planner(
    date: NaiveDate,
    today: NaiveDate,
    progress: &Progress,
    streak: &StreakState,
) -> String {
    let quote = quote_of_the_day(date);
    PLANNER_HTML
        .replace("{{DATE}}", &date_key(date))
        .replace("{{FRIENDLY_DATE}}", &friendly_date(date, today))
        .replace("{{PREV}}", &date_key(date - Duration::days(1)))
        .replace("{{NEXT}}", &date_key(date + Duration::days(1)))
        .replace("{{TODAY}}", &date_key(today))
        .replace("{{STREAK}}", &streak_label(streak.count))
        .replace("{{PERCENT}}", &progress.percent.to_string())
        .replace("{{QUOTE_TEXT}}", quote.text)
        .replace("{{QUOTE_AUTHOR}}", quote.author)
        .replace("{{QUOTE_EMOJI}}", quote.emoji)
}

pub fn render_journal(date: NaiveDate, today: NaiveDate) -> String {
    JOURNAL_HTML
        .replace("{{DATE}}", &date_key(date))
        .replace("{{FRIENDLY_DATE}}", &friendly_date(date, today))
        .replace("{{PREV}}", &date_key(date - Duration::days(1)))
        .replace("{{NEXT}}", &date_key(date + Duration::days(1)))
        .replace("{{TODAY}}", &date_key(today))
}

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Planner</title>
  <style>
    :root {
      --bg-1: #eef4fb;
      --bg-2: #dbe9fa;
      --ink: #26303d;
      --muted: #66727f;
      --accent: #4f89d8;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(47, 72, 120, 0.16);
    }

    .dark {
      --bg-1: #141922;
      --bg-2: #1c2634;
      --ink: #e7edf5;
      --muted: #93a0ae;
      --accent: #6fa3e8;
      --card: rgba(24, 31, 42, 0.94);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(150deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .card {
      width: min(430px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 36px 32px;
      display: grid;
      gap: 22px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .quote {
      margin: 0;
      font-style: italic;
      color: var(--muted);
    }

    label {
      font-size: 0.9rem;
      color: var(--muted);
      display: block;
      margin-bottom: 6px;
    }

    input[type="date"] {
      width: 100%;
      padding: 10px;
      border-radius: 12px;
      border: 1px solid rgba(79, 137, 216, 0.4);
      background: transparent;
      color: inherit;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(79, 137, 216, 0.35);
    }

    button.secondary {
      background: transparent;
      color: var(--accent);
      border: 1px solid var(--accent);
      box-shadow: none;
    }
  </style>
</head>
<body>
  <main class="card">
    <h1>Welcome to Your Daily Planner!</h1>
    <p class="quote">{{QUOTE_EMOJI}} “{{QUOTE_TEXT}}” – {{QUOTE_AUTHOR}}</p>
    <div>
      <label for="date">Pick a day</label>
      <input type="date" id="date" value="{{TODAY}}" />
    </div>
    <button type="button" id="open-planner">Open My Planner</button>
    <button type="button" class="secondary" id="open-journal">Open Journal</button>
  </main>

  <script>
    const dateEl = document.getElementById('date');

    const go = (page) => {
      const date = dateEl.value || '{{TODAY}}';
      window.location.href = page + '?date=' + date;
    };

    const applyStoredTheme = async () => {
      try {
        const res = await fetch('/api/theme');
        if (!res.ok) return;
        const theme = (await res.json()).theme;
        const dark = theme === 'dark'
          || (theme === 'system' && window.matchMedia('(prefers-color-scheme: dark)').matches);
        document.documentElement.classList.toggle('dark', dark);
      } catch (err) {
        // theme is cosmetic, stay on the default
      }
    };

    document.getElementById('open-planner').addEventListener('click', () => go('/planner'));
    document.getElementById('open-journal').addEventListener('click', () => go('/journal'));

    applyStoredTheme();
  </script>
</body>
</html>
"#;

const PLANNER_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Planner · {{DATE}}</title>
  <style>
    :root {
      --bg-1: #eef4fb;
      --bg-2: #dbe9fa;
      --ink: #26303d;
      --muted: #66727f;
      --accent: #4f89d8;
      --accent-soft: rgba(79, 137, 216, 0.16);
      --fire: #e8743b;
      --card: rgba(255, 255, 255, 0.92);
      --line: rgba(47, 72, 120, 0.18);
      --shadow: 0 24px 60px rgba(47, 72, 120, 0.16);
    }

    .dark {
      --bg-1: #141922;
      --bg-2: #1c2634;
      --ink: #e7edf5;
      --muted: #93a0ae;
      --accent: #6fa3e8;
      --accent-soft: rgba(111, 163, 232, 0.22);
      --fire: #f0884f;
      --card: rgba(24, 31, 42, 0.94);
      --line: rgba(151, 173, 203, 0.25);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(150deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 18px 14px 48px;
    }

    header.top {
      width: min(880px, 100%);
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      padding: 8px 4px;
    }

    .dates, .meta {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .nav-btn {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      padding: 8px 14px;
      border-radius: 999px;
      border: 1px solid var(--line);
      background: var(--card);
      color: inherit;
      text-decoration: none;
      font-size: 0.9rem;
      cursor: pointer;
    }

    .date-label {
      font-weight: 700;
      font-size: 1.05rem;
    }

    .streak {
      color: var(--fire);
      font-weight: 700;
      white-space: nowrap;
    }

    #theme-btn {
      border: 1px solid var(--line);
      background: var(--card);
      border-radius: 999px;
      padding: 8px 12px;
      cursor: pointer;
      font-size: 1rem;
    }

    .progress-track {
      width: min(880px, 100%);
      height: 10px;
      border-radius: 999px;
      background: var(--accent-soft);
      overflow: hidden;
      margin-top: 8px;
    }

    .progress-fill {
      height: 100%;
      background: linear-gradient(90deg, var(--accent), #7fd6e8);
      transition: width 400ms ease;
    }

    .progress-text {
      width: min(880px, 100%);
      text-align: right;
      font-size: 0.8rem;
      color: var(--muted);
      margin: 4px 0 0;
    }

    .quote {
      width: min(880px, 100%);
      display: flex;
      align-items: center;
      gap: 12px;
      background: var(--accent-soft);
      border-radius: 14px;
      padding: 12px 16px;
      margin-top: 12px;
    }

    .quote-emoji {
      font-size: 1.6rem;
    }

    .quote-text {
      margin: 0;
      font-weight: 600;
    }

    .quote-author {
      margin: 2px 0 0;
      font-size: 0.8rem;
      color: var(--muted);
    }

    main.card {
      width: min(880px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      border: 1px solid var(--line);
      padding: 26px;
      display: grid;
      gap: 26px;
      margin-top: 16px;
    }

    section h2 {
      margin: 0 0 10px;
      font-size: 1.05rem;
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 24px;
    }

    @media (max-width: 640px) {
      .grid {
        grid-template-columns: 1fr;
      }
    }

    .rating {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .rating span {
      font-size: 0.9rem;
      font-weight: 600;
    }

    .rating button {
      width: 30px;
      height: 30px;
      border-radius: 50%;
      border: 1px solid var(--line);
      background: transparent;
      color: inherit;
      cursor: pointer;
    }

    .rating button.active {
      background: var(--accent);
      color: white;
      border-color: var(--accent);
    }

    .check-row {
      display: flex;
      align-items: center;
      gap: 8px;
      margin-bottom: 6px;
    }

    .check-row input[type="text"] {
      flex: 1;
      border: none;
      border-bottom: 1px solid var(--line);
      background: transparent;
      color: inherit;
      font: inherit;
      padding: 4px 2px;
      outline: none;
    }

    .check-row input[type="text"].done {
      text-decoration: line-through;
      color: var(--muted);
    }

    .check-row .remove {
      border: none;
      background: transparent;
      color: var(--muted);
      cursor: pointer;
      font-size: 1rem;
      padding: 0 4px;
    }

    .add-link {
      border: none;
      background: transparent;
      color: var(--accent);
      font-size: 0.85rem;
      cursor: pointer;
      padding: 2px 0;
    }

    .hour-row {
      display: flex;
      align-items: center;
      gap: 8px;
      margin-bottom: 4px;
      font-size: 0.85rem;
    }

    .hour-row .hour {
      width: 64px;
      text-align: right;
      color: var(--muted);
    }

    .hour-row input {
      flex: 1;
      border: none;
      border-bottom: 1px solid var(--line);
      background: transparent;
      color: inherit;
      font: inherit;
      padding: 3px 2px;
      outline: none;
    }

    .menu-row {
      display: flex;
      align-items: center;
      gap: 8px;
      margin-bottom: 6px;
      font-size: 0.9rem;
    }

    .menu-row span {
      width: 72px;
      color: var(--muted);
    }

    .menu-row input {
      flex: 1;
      border: none;
      border-bottom: 1px solid var(--line);
      background: transparent;
      color: inherit;
      font: inherit;
      padding: 4px 2px;
      outline: none;
    }

    .water-row {
      display: flex;
      align-items: center;
      gap: 6px;
      margin-top: 12px;
    }

    .water-row .label, .exercise-row .label {
      font-size: 0.85rem;
      color: var(--muted);
      margin-right: 4px;
    }

    .water {
      width: 32px;
      height: 32px;
      border-radius: 50%;
      border: 2px solid rgba(79, 137, 216, 0.5);
      background: transparent;
      cursor: pointer;
      font-size: 1rem;
      opacity: 0.45;
    }

    .water.filled {
      background: linear-gradient(180deg, #7fd6e8, var(--accent));
      opacity: 1;
    }

    .exercise-row {
      display: flex;
      align-items: center;
      gap: 10px;
      margin-top: 12px;
      font-size: 0.85rem;
    }

    .exercise-row input[type="range"] {
      flex: 1;
      accent-color: var(--accent);
    }

    .money-table {
      border: 1px solid var(--line);
      border-radius: 12px;
      overflow: hidden;
    }

    .money-head, .money-row {
      display: grid;
      grid-template-columns: 54px 1fr 1fr 28px;
      align-items: center;
    }

    .money-head {
      background: var(--accent-soft);
      font-size: 0.75rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.06em;
    }

    .money-head div, .money-row input {
      padding: 7px 8px;
    }

    .money-row {
      border-top: 1px solid var(--line);
    }

    .money-row input {
      border: none;
      background: transparent;
      color: inherit;
      font: inherit;
      outline: none;
      min-width: 0;
    }

    .money-row .remove {
      border: none;
      background: transparent;
      color: var(--muted);
      cursor: pointer;
    }

    .wide-input {
      width: 100%;
      border: none;
      border-bottom: 1px solid var(--line);
      background: transparent;
      color: inherit;
      font: inherit;
      padding: 5px 2px;
      outline: none;
    }

    textarea {
      width: 100%;
      min-height: 180px;
      border-radius: 12px;
      border: 1px solid var(--line);
      background: transparent;
      color: inherit;
      font: inherit;
      padding: 12px;
      resize: vertical;
      outline: none;
    }

    .status {
      width: min(880px, 100%);
      min-height: 1.2em;
      font-size: 0.85rem;
      color: var(--muted);
      margin-top: 10px;
      text-align: right;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <header class="top">
    <nav class="dates">
      <a class="nav-btn" href="/planner?date={{PREV}}" aria-label="Previous day">&#8592;</a>
      <span class="date-label">{{FRIENDLY_DATE}}</span>
      <a class="nav-btn" href="/planner?date={{NEXT}}" aria-label="Next day">&#8594;</a>
      <a class="nav-btn" href="/planner?date={{TODAY}}">Today</a>
    </nav>
    <div class="meta">
      <span class="streak" id="streak">🔥 {{STREAK}} streak</span>
      <a class="nav-btn" href="/journal?date={{DATE}}">Journal</a>
      <button type="button" id="theme-btn" aria-label="Toggle theme">💻</button>
    </div>
  </header>

  <div class="progress-track">
    <div class="progress-fill" id="progress-fill" style="width: {{PERCENT}}%"></div>
  </div>
  <p class="progress-text"><span id="progress-value">{{PERCENT}}</span>% complete</p>

  <section class="quote">
    <span class="quote-emoji">{{QUOTE_EMOJI}}</span>
    <div>
      <p class="quote-text">{{QUOTE_TEXT}}</p>
      <p class="quote-author">{{QUOTE_AUTHOR}}</p>
    </div>
  </section>

  <main class="card">
    <section class="rating" id="rating">
      <span>Rate your day:</span>
      <button type="button" data-rate="1">1</button>
      <button type="button" data-rate="2">2</button>
      <button type="button" data-rate="3">3</button>
      <button type="button" data-rate="4">4</button>
      <button type="button" data-rate="5">5</button>
    </section>

    <section>
      <h2>🏆 Today's Top 3</h2>
      <div class="check-row">
        <input type="checkbox" id="top3-check-0" />
        <input type="text" id="top3-text-0" placeholder="Top 1 task" />
      </div>
      <div class="check-row">
        <input type="checkbox" id="top3-check-1" />
        <input type="text" id="top3-text-1" placeholder="Top 2 task" />
      </div>
      <div class="check-row">
        <input type="checkbox" id="top3-check-2" />
        <input type="text" id="top3-text-2" placeholder="Top 3 task" />
      </div>
    </section>

    <div class="grid">
      <section>
        <h2>⏰ Time Tracker</h2>
        <div id="time-tracker"></div>
      </section>
      <div>
        <section>
          <h2>📝 To Do's</h2>
          <div id="todos"></div>
          <button type="button" class="add-link" id="add-todo">+ Add To-Do</button>
        </section>
        <section>
          <h2>📞 Calls / Emails</h2>
          <div id="calls"></div>
          <button type="button" class="add-link" id="add-call">+ Add Call/Email</button>
        </section>
      </div>
    </div>

    <div class="grid">
      <section>
        <h2>🍽️ Menu of the Day</h2>
        <div class="menu-row"><span>Breakfast</span><input type="text" data-meal="Breakfast" placeholder="Breakfast" /></div>
        <div class="menu-row"><span>Lunch</span><input type="text" data-meal="Lunch" placeholder="Lunch" /></div>
        <div class="menu-row"><span>Snacks</span><input type="text" data-meal="Snacks" placeholder="Snacks" /></div>
        <div class="menu-row"><span>Dinner</span><input type="text" data-meal="Dinner" placeholder="Dinner" /></div>
        <div class="water-row">
          <span class="label">Water</span>
          <span id="water"></span>
        </div>
        <div class="exercise-row">
          <span class="label">Exercise</span>
          <input type="range" id="exercise" min="0" max="24" step="1" value="0" />
          <span id="exercise-value">0 hrs</span>
        </div>
      </section>
      <div>
        <section>
          <h2>💰 Money Tracker</h2>
          <div class="money-table">
            <div class="money-head">
              <div>+/-</div>
              <div>Amount</div>
              <div>Expense / Saved</div>
              <div></div>
            </div>
            <div id="money"></div>
          </div>
          <button type="button" class="add-link" id="add-money">+ Add Row</button>
        </section>
        <section>
          <h2>🌟 Highlight of the Day</h2>
          <input type="text" class="wide-input" id="highlight" placeholder="Highlight..." />
        </section>
      </div>
    </div>

    <section>
      <h2>📓 Journal</h2>
      <textarea id="journal" placeholder="Write your notes for the day..."></textarea>
    </section>
  </main>

  <div class="status" id="status"></div>

  <script>
    const DATE = '{{DATE}}';
    const statusEl = document.getElementById('status');
    const streakEl = document.getElementById('streak');
    const progressFill = document.getElementById('progress-fill');
    const progressValue = document.getElementById('progress-value');
    const journalEl = document.getElementById('journal');

    let record = null;
    let theme = 'system';
    let saveTimer = null;
    let journalTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showError = (err) => setStatus(err.message, 'error');

    const applyDerived = (data) => {
      progressFill.style.width = data.progress.percent + '%';
      progressValue.textContent = data.progress.percent;
      const days = data.streak.count === 1 ? '1 day' : data.streak.count + ' days';
      streakEl.textContent = '🔥 ' + days + ' streak';
    };

    const blankItem = () => ({ text: '', done: false });
    const blankMoney = () => ({ sign: '', amount: '', type: '' });

    const ensureBlankRows = () => {
      if (record.todos.length === 0) record.todos.push(blankItem());
      if (record.calls.length === 0) record.calls.push(blankItem());
      if (record.money.length === 0) record.money.push(blankMoney());
    };

    const save = async () => {
      setStatus('Saving...', '');
      const res = await fetch('/api/planner/' + DATE, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(record)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Save failed');
      }
      applyDerived(await res.json());
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const saveNow = () => save().catch(showError);

    const scheduleSave = () => {
      clearTimeout(saveTimer);
      saveTimer = setTimeout(saveNow, 500);
    };

    const renderRating = () => {
      document.querySelectorAll('#rating button').forEach((button) => {
        button.classList.toggle('active', Number(button.dataset.rate) === record.rating);
      });
    };

    const renderTop3 = () => {
      for (let i = 0; i < 3; i += 1) {
        const box = document.getElementById('top3-check-' + i);
        const text = document.getElementById('top3-text-' + i);
        box.checked = record.top3Checked[i];
        text.value = record.top3[i];
        text.disabled = record.top3Checked[i];
        text.classList.toggle('done', record.top3Checked[i]);
      }
    };

    const hourLabel = (hour) => {
      const display = hour <= 12 ? hour : hour - 12;
      return display + ':00 ' + (hour < 12 ? 'AM' : 'PM');
    };

    const buildTimeTracker = () => {
      const container = document.getElementById('time-tracker');
      for (let i = 0; i < 14; i += 1) {
        const row = document.createElement('div');
        row.className = 'hour-row';
        const label = document.createElement('span');
        label.className = 'hour';
        label.textContent = hourLabel(8 + i);
        const input = document.createElement('input');
        input.type = 'text';
        input.placeholder = 'What are you doing?';
        input.addEventListener('input', () => {
          record.timeTracker[i] = input.value;
          scheduleSave();
        });
        row.append(label, input);
        container.appendChild(row);
      }
    };

    const renderTimeTracker = () => {
      document.querySelectorAll('#time-tracker input').forEach((input, i) => {
        input.value = record.timeTracker[i];
      });
    };

    const renderChecklist = (containerId, items, placeholder) => {
      const container = document.getElementById(containerId);
      container.innerHTML = '';
      items.forEach((item, index) => {
        const row = document.createElement('div');
        row.className = 'check-row';
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.checked = item.done;
        box.addEventListener('change', () => {
          item.done = box.checked;
          renderChecklist(containerId, items, placeholder);
          saveNow();
        });
        const text = document.createElement('input');
        text.type = 'text';
        text.value = item.text;
        text.placeholder = placeholder;
        text.disabled = item.done;
        if (item.done) text.classList.add('done');
        text.addEventListener('input', () => {
          item.text = text.value;
          scheduleSave();
        });
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'remove';
        remove.textContent = '×';
        remove.setAttribute('aria-label', 'Remove row');
        remove.addEventListener('click', () => {
          items.splice(index, 1);
          ensureBlankRows();
          renderChecklist(containerId, items, placeholder);
          saveNow();
        });
        row.append(box, text, remove);
        container.appendChild(row);
      });
    };

    const renderLists = () => {
      renderChecklist('todos', record.todos, 'Task...');
      renderChecklist('calls', record.calls, 'Contact...');
    };

    const renderMenu = () => {
      document.querySelectorAll('[data-meal]').forEach((input) => {
        input.value = record.menu[input.dataset.meal];
      });
    };

    const renderWater = () => {
      const container = document.getElementById('water');
      container.innerHTML = '';
      record.water.forEach((filled, index) => {
        const glass = document.createElement('button');
        glass.type = 'button';
        glass.className = filled ? 'water filled' : 'water';
        glass.textContent = '💧';
        glass.setAttribute('aria-label', 'Water glass ' + (index + 1));
        glass.addEventListener('click', () => {
          record.water[index] = !record.water[index];
          renderWater();
          saveNow();
        });
        container.appendChild(glass);
      });
    };

    const renderExercise = () => {
      const slider = document.getElementById('exercise');
      slider.value = record.exercise;
      document.getElementById('exercise-value').textContent = record.exercise + ' hrs';
    };

    const renderMoney = () => {
      const container = document.getElementById('money');
      container.innerHTML = '';
      record.money.forEach((entry, index) => {
        const row = document.createElement('div');
        row.className = 'money-row';
        const fields = [
          ['sign', '+/-'],
          ['amount', 'Amount'],
          ['type', 'Expense/Saved']
        ];
        fields.forEach(([field, placeholder]) => {
          const input = document.createElement('input');
          input.type = 'text';
          input.value = entry[field];
          input.placeholder = placeholder;
          input.addEventListener('input', () => {
            entry[field] = input.value;
            scheduleSave();
          });
          row.appendChild(input);
        });
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'remove';
        remove.textContent = '×';
        remove.setAttribute('aria-label', 'Remove row');
        remove.addEventListener('click', () => {
          record.money.splice(index, 1);
          ensureBlankRows();
          renderMoney();
          saveNow();
        });
        row.appendChild(remove);
        container.appendChild(row);
      });
    };

    const renderAll = () => {
      renderRating();
      renderTop3();
      renderTimeTracker();
      renderLists();
      renderMenu();
      renderWater();
      renderExercise();
      renderMoney();
      document.getElementById('highlight').value = record.highlight;
    };

    const applyTheme = () => {
      const dark = theme === 'dark'
        || (theme === 'system' && window.matchMedia('(prefers-color-scheme: dark)').matches);
      document.documentElement.classList.toggle('dark', dark);
      document.getElementById('theme-btn').textContent =
        theme === 'light' ? '☀️' : theme === 'dark' ? '🌙' : '💻';
    };

    const loadTheme = async () => {
      const res = await fetch('/api/theme');
      if (res.ok) {
        theme = (await res.json()).theme;
      }
      applyTheme();
    };

    const load = async () => {
      const res = await fetch('/api/planner/' + DATE);
      if (!res.ok) {
        throw new Error('Unable to load planner data');
      }
      const data = await res.json();
      record = data.record;
      ensureBlankRows();
      renderAll();
      applyDerived(data);

      const journalRes = await fetch('/api/journal/' + DATE);
      if (journalRes.ok) {
        journalEl.value = (await journalRes.json()).text;
      }
    };

    document.querySelectorAll('#rating button').forEach((button) => {
      button.addEventListener('click', () => {
        record.rating = Number(button.dataset.rate);
        renderRating();
        saveNow();
      });
    });

    for (let i = 0; i < 3; i += 1) {
      const box = document.getElementById('top3-check-' + i);
      const text = document.getElementById('top3-text-' + i);
      box.addEventListener('change', () => {
        record.top3Checked[i] = box.checked;
        renderTop3();
        saveNow();
      });
      text.addEventListener('input', () => {
        record.top3[i] = text.value;
        scheduleSave();
      });
    }

    document.querySelectorAll('[data-meal]').forEach((input) => {
      input.addEventListener('input', () => {
        record.menu[input.dataset.meal] = input.value;
        scheduleSave();
      });
    });

    document.getElementById('exercise').addEventListener('input', () => {
      record.exercise = Number(document.getElementById('exercise').value);
      document.getElementById('exercise-value').textContent = record.exercise + ' hrs';
      scheduleSave();
    });

    document.getElementById('highlight').addEventListener('input', () => {
      record.highlight = document.getElementById('highlight').value;
      scheduleSave();
    });

    document.getElementById('add-todo').addEventListener('click', () => {
      record.todos.push(blankItem());
      renderLists();
      scheduleSave();
    });

    document.getElementById('add-call').addEventListener('click', () => {
      record.calls.push(blankItem());
      renderLists();
      scheduleSave();
    });

    document.getElementById('add-money').addEventListener('click', () => {
      record.money.push(blankMoney());
      renderMoney();
      scheduleSave();
    });

    const saveJournal = async () => {
      const res = await fetch('/api/journal/' + DATE, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ text: journalEl.value })
      });
      if (!res.ok) {
        throw new Error('Journal save failed');
      }
    };

    journalEl.addEventListener('input', () => {
      clearTimeout(journalTimer);
      journalTimer = setTimeout(() => saveJournal().catch(showError), 600);
    });

    document.getElementById('theme-btn').addEventListener('click', () => {
      theme = theme === 'light' ? 'dark' : theme === 'dark' ? 'system' : 'light';
      applyTheme();
      fetch('/api/theme', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ theme })
      }).catch(() => setStatus('Theme save failed', 'error'));
    });

    buildTimeTracker();
    loadTheme().catch(() => applyTheme());
    load().catch(showError);
  </script>
</body>
</html>
"#;

const JOURNAL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Journal · {{DATE}}</title>
  <style>
    :root {
      --bg-1: #eef4fb;
      --bg-2: #dbe9fa;
      --ink: #26303d;
      --muted: #66727f;
      --accent: #4f89d8;
      --card: rgba(255, 255, 255, 0.92);
      --line: rgba(47, 72, 120, 0.18);
      --shadow: 0 24px 60px rgba(47, 72, 120, 0.16);
    }

    .dark {
      --bg-1: #141922;
      --bg-2: #1c2634;
      --ink: #e7edf5;
      --muted: #93a0ae;
      --accent: #6fa3e8;
      --card: rgba(24, 31, 42, 0.94);
      --line: rgba(151, 173, 203, 0.25);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(150deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 18px 14px 48px;
    }

    header.top {
      width: min(720px, 100%);
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      padding: 8px 4px;
    }

    .dates {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .nav-btn {
      display: inline-flex;
      align-items: center;
      justify-content: center;
      padding: 8px 14px;
      border-radius: 999px;
      border: 1px solid var(--line);
      background: var(--card);
      color: inherit;
      text-decoration: none;
      font-size: 0.9rem;
    }

    .date-label {
      font-weight: 700;
      font-size: 1.05rem;
    }

    main.card {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      border: 1px solid var(--line);
      padding: 26px;
      margin-top: 16px;
    }

    h1 {
      margin: 0 0 14px;
      font-size: 1.4rem;
    }

    textarea {
      width: 100%;
      min-height: 300px;
      border-radius: 12px;
      border: 1px solid var(--line);
      background: transparent;
      color: inherit;
      font: inherit;
      padding: 12px;
      resize: vertical;
      outline: none;
    }

    .status {
      width: min(720px, 100%);
      min-height: 1.2em;
      font-size: 0.85rem;
      color: var(--muted);
      margin-top: 10px;
      text-align: right;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }
  </style>
</head>
<body>
  <header class="top">
    <nav class="dates">
      <a class="nav-btn" href="/journal?date={{PREV}}" aria-label="Previous day">&#8592;</a>
      <span class="date-label">{{FRIENDLY_DATE}}</span>
      <a class="nav-btn" href="/journal?date={{NEXT}}" aria-label="Next day">&#8594;</a>
      <a class="nav-btn" href="/journal?date={{TODAY}}">Today</a>
    </nav>
    <a class="nav-btn" href="/planner?date={{DATE}}">Planner</a>
  </header>

  <main class="card">
    <h1>📓 Journal</h1>
    <textarea id="notes" placeholder="Write your notes for the day..."></textarea>
  </main>

  <div class="status" id="status"></div>

  <script>
    const DATE = '{{DATE}}';
    const notesEl = document.getElementById('notes');
    const statusEl = document.getElementById('status');
    let timer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const applyStoredTheme = async () => {
      try {
        const res = await fetch('/api/theme');
        if (!res.ok) return;
        const theme = (await res.json()).theme;
        const dark = theme === 'dark'
          || (theme === 'system' && window.matchMedia('(prefers-color-scheme: dark)').matches);
        document.documentElement.classList.toggle('dark', dark);
      } catch (err) {
        // theme is cosmetic, stay on the default
      }
    };

    const load = async () => {
      const res = await fetch('/api/journal/' + DATE);
      if (!res.ok) {
        throw new Error('Unable to load journal');
      }
      notesEl.value = (await res.json()).text;
    };

    const saveNotes = async () => {
      setStatus('Saving...', '');
      const res = await fetch('/api/journal/' + DATE, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ text: notesEl.value })
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Save failed');
      }
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    notesEl.addEventListener('input', () => {
      clearTimeout(timer);
      timer = setTimeout(() => {
        saveNotes().catch((err) => setStatus(err.message, 'error'));
      }, 600);
    });

    applyStoredTheme();
    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_progress() -> Progress {
        Progress {
            top3: false,
            water: false,
            exercise: true,
            todos: false,
            calls: false,
            percent: 20,
        }
    }

    #[test]
    fn rendered_pages_have_no_unfilled_placeholders() {
        let today = date(2024, 5, 6);
        let streak = StreakState {
            count: 2,
            last_date: Some("2024-05-05".into()),
        };
        for page in [
            render_landing(today),
            render_planner(date(2024, 5, 6), today, &sample_progress(), &streak),
            render_journal(date(2024, 5, 7), today),
        ] {
            assert!(!page.contains("{{"), "unfilled placeholder in page");
        }
    }

    #[test]
    fn planner_page_links_neighboring_days() {
        let page = render_planner(
            date(2024, 3, 1),
            date(2024, 3, 1),
            &sample_progress(),
            &StreakState::default(),
        );
        assert!(page.contains("/planner?date=2024-02-29"));
        assert!(page.contains("/planner?date=2024-03-02"));
        assert!(page.contains("/api/planner/"));
    }

    #[test]
    fn boundary_years_of_the_key_grammar_render_without_overflow() {
        let today = date(2024, 5, 6);
        let first = render_planner(
            date(0, 1, 1),
            today,
            &sample_progress(),
            &StreakState::default(),
        );
        assert!(first.contains("/planner?date=-0001-12-31"));
        let last = render_journal(date(9999, 12, 31), today);
        assert!(last.contains("/journal?date=+10000-01-01"));
    }

    #[test]
    fn every_page_applies_the_stored_theme() {
        let today = date(2024, 5, 6);
        for page in [
            render_landing(today),
            render_planner(today, today, &sample_progress(), &StreakState::default()),
            render_journal(today, today),
        ] {
            assert!(page.contains("/api/theme"));
            assert!(page.contains("prefers-color-scheme"));
        }
    }

    #[test]
    fn friendly_date_says_today_only_for_today() {
        let today = date(2024, 5, 6);
        assert_eq!(friendly_date(today, today), "Today");
        assert_eq!(friendly_date(date(2024, 5, 5), today), "Sunday, May 5, 2024");
    }

    #[test]
    fn streak_label_handles_singular() {
        assert_eq!(streak_label(1), "1 day");
        assert_eq!(streak_label(0), "0 days");
        assert_eq!(streak_label(3), "3 days");
    }

    #[test]
    fn quote_is_stable_within_a_day_and_rotates() {
        let day = date(2024, 5, 6);
        let first = quote_of_the_day(day).text;
        assert_eq!(quote_of_the_day(day).text, first);

        let texts: Vec<&str> = (0..QUOTES.len() as u64)
            .map(|offset| quote_of_the_day(day + Duration::days(offset as i64)).text)
            .collect();
        assert!(texts.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
