pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.2rem;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    input[type="text"],
    textarea {
      width: 100%;
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 10px;
      padding: 9px 11px;
      font: inherit;
      color: var(--ink);
      background: white;
    }

    input[type="text"]:focus,
    textarea:focus {
      outline: 2px solid rgba(255, 107, 74, 0.45);
      border-color: transparent;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 9px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-dark {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .btn-reset {
      background: #f5a623;
      color: white;
      box-shadow: 0 10px 24px rgba(245, 166, 35, 0.3);
    }

    .btn-remove {
      background: transparent;
      color: #c63b2b;
      font-size: 1.2rem;
      padding: 4px 10px;
      box-shadow: none;
    }

    .row {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .row + .row {
      margin-top: 8px;
    }

    .date-row .label,
    .filter-row .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
      white-space: nowrap;
    }

    .progress-stat {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 10px;
    }

    .progress-stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .section-block {
      display: grid;
      gap: 8px;
    }

    .section-block + .section-block {
      margin-top: 14px;
      padding-top: 14px;
      border-top: 1px solid rgba(47, 72, 88, 0.08);
    }

    .section-name {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .habit-row input[type="checkbox"] {
      width: 20px;
      height: 20px;
      accent-color: var(--accent);
      flex: none;
    }

    .habit-row input[type="text"].done {
      text-decoration: line-through;
      color: #8b857d;
    }

    #chart {
      width: 100%;
      height: 220px;
      display: block;
    }

    #chart text {
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .history-list {
      margin-top: 10px;
      display: grid;
      gap: 2px;
      font-size: 0.9rem;
      color: #5f5c57;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    textarea {
      min-height: 72px;
      resize: vertical;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 26px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">Check off your day, keep notes, watch the trend.</p>
    </header>

    <section class="card">
      <h2>History</h2>
      <div class="row filter-row">
        <span class="label">From</span>
        <input type="text" id="filter-start" placeholder="YYYY-MM-DD" />
        <span class="label">To</span>
        <input type="text" id="filter-end" placeholder="YYYY-MM-DD" />
      </div>
      <div class="row" style="margin-top: 12px">
        <svg id="chart" viewBox="0 0 600 220" aria-label="Completion chart" role="img"></svg>
      </div>
      <div class="history-list" id="history-list"></div>
    </section>

    <section class="card progress-stat">
      <span>Day progress</span>
      <span class="value" id="progress">0%</span>
    </section>

    <div class="row date-row">
      <span class="label">Date</span>
      <input type="text" id="date" value="{{DATE}}" placeholder="YYYY-MM-DD" />
    </div>

    <section id="sections"></section>

    <div class="row">
      <input type="text" id="new-section" placeholder="New section name" />
      <button class="btn-dark" id="add-section-btn" type="button">Add section</button>
    </div>

    <section>
      <h2>What to improve tomorrow?</h2>
      <textarea id="notes" placeholder="Your thoughts..."></textarea>
    </section>

    <div class="row">
      <button class="btn-reset" id="reset-btn" type="button">Reset day</button>
      <div class="status" id="status"></div>
    </div>
  </main>

  <script>
    const dateInput = document.getElementById('date');
    const progressEl = document.getElementById('progress');
    const sectionsEl = document.getElementById('sections');
    const notesEl = document.getElementById('notes');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const historyListEl = document.getElementById('history-list');
    const filterStartEl = document.getElementById('filter-start');
    const filterEndEl = document.getElementById('filter-end');
    const newSectionEl = document.getElementById('new-section');

    let day = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const flashSaved = () => {
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const currentDate = () => dateInput.value;

    const renderDay = () => {
      progressEl.textContent = day.progress + '%';
      if (document.activeElement !== notesEl) {
        notesEl.value = day.notes;
      }
      renderSections();
    };

    const renderSections = () => {
      sectionsEl.textContent = '';
      for (const [name, habits] of Object.entries(day.sections)) {
        sectionsEl.appendChild(buildSection(name, habits));
      }
    };

    const buildSection = (name, habits) => {
      const block = document.createElement('div');
      block.className = 'section-block';

      const head = document.createElement('div');
      head.className = 'row';
      const nameInput = document.createElement('input');
      nameInput.type = 'text';
      nameInput.className = 'section-name';
      nameInput.value = name;
      nameInput.addEventListener('change', () => {
        send('/api/section/rename', { old_name: name, new_name: nameInput.value });
      });
      const removeBtn = document.createElement('button');
      removeBtn.type = 'button';
      removeBtn.className = 'btn-remove';
      removeBtn.textContent = '✕';
      removeBtn.addEventListener('click', () => {
        if (confirm(`Delete section "${name}" and its habits?`)) {
          send('/api/section/delete', { section: name });
        }
      });
      head.appendChild(nameInput);
      head.appendChild(removeBtn);
      block.appendChild(head);

      for (const habit of habits) {
        block.appendChild(buildHabitRow(name, habit));
      }

      const addRow = document.createElement('div');
      addRow.className = 'row';
      const titleInput = document.createElement('input');
      titleInput.type = 'text';
      titleInput.placeholder = 'New habit';
      const addBtn = document.createElement('button');
      addBtn.type = 'button';
      addBtn.className = 'btn-primary';
      addBtn.textContent = 'Add';
      addBtn.addEventListener('click', () => {
        send('/api/habit/add', { section: name, title: titleInput.value });
        titleInput.value = '';
      });
      addRow.appendChild(titleInput);
      addRow.appendChild(addBtn);
      block.appendChild(addRow);

      return block;
    };

    const buildHabitRow = (section, habit) => {
      const row = document.createElement('div');
      row.className = 'row habit-row';

      const checkbox = document.createElement('input');
      checkbox.type = 'checkbox';
      checkbox.checked = habit.done;
      checkbox.addEventListener('change', () => {
        send('/api/toggle', { section, id: habit.id });
      });

      const titleInput = document.createElement('input');
      titleInput.type = 'text';
      titleInput.value = habit.title;
      if (habit.done) {
        titleInput.classList.add('done');
      }
      titleInput.addEventListener('change', () => {
        send('/api/habit/rename', { section, id: habit.id, title: titleInput.value });
      });

      const removeBtn = document.createElement('button');
      removeBtn.type = 'button';
      removeBtn.className = 'btn-remove';
      removeBtn.textContent = '✕';
      removeBtn.addEventListener('click', () => {
        send('/api/habit/delete', { section, id: habit.id });
      });

      row.appendChild(checkbox);
      row.appendChild(titleInput);
      row.appendChild(removeBtn);
      return row;
    };

    const renderChart = (labels, values) => {
      if (!labels.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 220;
      const paddingX = 44;
      const paddingY = 34;
      const top = 16;

      const xStep = labels.length > 1 ? (width - paddingX * 2) / (labels.length - 1) : 0;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (value / 100) * (height - top - paddingY);

      const path = values
        .map((value, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(value).toFixed(2)}`)
        .join(' ');

      let grid = '';
      for (let percent = 0; percent <= 100; percent += 25) {
        const yPos = y(percent);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${percent}%</text>`;
      }

      const labelEvery = labels.length > 8 ? Math.ceil(labels.length / 8) : 1;
      const xLabels = labels
        .map((label, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${label.slice(5)}</text>`;
        })
        .join('');

      const circles = values
        .map((value, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(value)}" r="4" />`)
        .join('');

      chartEl.innerHTML = `
        ${grid}
        <path class="chart-line" d="${path}" />
        ${circles}
        ${xLabels}
      `;
    };

    const renderHistoryList = (labels, values) => {
      historyListEl.textContent = '';
      labels.forEach((label, index) => {
        const line = document.createElement('div');
        line.textContent = `${label}: ${values[index]}% done`;
        historyListEl.appendChild(line);
      });
    };

    const loadDay = async () => {
      const res = await fetch('/api/day?date=' + encodeURIComponent(currentDate()));
      if (!res.ok) {
        throw new Error('Unable to load the day');
      }
      day = await res.json();
      renderDay();
    };

    const loadHistory = async () => {
      const params = new URLSearchParams();
      if (filterStartEl.value) {
        params.set('start', filterStartEl.value);
      }
      if (filterEndEl.value) {
        params.set('end', filterEndEl.value);
      }
      const res = await fetch('/api/history?' + params.toString());
      if (!res.ok) {
        throw new Error('Unable to load history');
      }
      const history = await res.json();
      renderChart(history.labels, history.values);
      renderHistoryList(history.labels, history.values);
    };

    const send = async (path, body) => {
      setStatus('Saving...', 'info');
      try {
        const res = await fetch(path, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ date: currentDate(), ...body })
        });
        if (!res.ok) {
          throw new Error(await res.text() || 'Request failed');
        }
        day = await res.json();
        renderDay();
        flashSaved();
        loadHistory().catch((err) => setStatus(err.message, 'error'));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    dateInput.addEventListener('change', () => {
      refresh().catch((err) => setStatus(err.message, 'error'));
    });

    filterStartEl.addEventListener('change', () => {
      loadHistory().catch((err) => setStatus(err.message, 'error'));
    });
    filterEndEl.addEventListener('change', () => {
      loadHistory().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('add-section-btn').addEventListener('click', () => {
      send('/api/section/add', { name: newSectionEl.value });
      newSectionEl.value = '';
    });

    notesEl.addEventListener('change', () => {
      send('/api/notes', { notes: notesEl.value });
    });

    document.getElementById('reset-btn').addEventListener('click', () => {
      send('/api/reset', {});
    });

    const refresh = async () => {
      await Promise.all([loadDay(), loadHistory()]);
    };

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
