pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MedTimer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f6;
      --bg-2: #cfe3e8;
      --ink: #243238;
      --accent: #2d8f6f;
      --accent-2: #2f4858;
      --danger: #c6533b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body[data-age="youth"] {
      --accent: #ff6b4a;
      --bg-2: #f5d3a7;
    }

    body[data-age="senior"] {
      --accent: #5b6ee1;
      --bg-2: #d4d9f5;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f2f7f4 60%, #eef4f6 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.25rem;
    }

    .subtitle {
      margin: 0;
      color: #5f6c70;
      font-size: 0.98rem;
    }

    .hidden {
      display: none !important;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b938f;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.accent {
      color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(45, 143, 111, 0.3);
    }

    .btn-quiet {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    form.stack {
      display: grid;
      gap: 10px;
    }

    form.stack input,
    form.stack select,
    form.stack textarea {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 10px 12px;
      font: inherit;
    }

    .form-row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 10px;
    }

    .auth {
      width: min(420px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 14px;
    }

    .auth .switch {
      text-align: center;
      font-size: 0.92rem;
      color: #5f6c70;
    }

    .auth .switch a {
      color: var(--accent);
      cursor: pointer;
      font-weight: 600;
    }

    .banner {
      border-radius: 16px;
      padding: 14px 18px;
      background: rgba(45, 143, 111, 0.14);
      border: 1px solid rgba(45, 143, 111, 0.3);
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
      font-weight: 600;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 7px 14px;
      font-size: 0.88rem;
      font-weight: 600;
      color: #6b7470;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    ul.doses,
    ul.plain {
      list-style: none;
      margin: 12px 0 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li.dose {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      padding: 12px 14px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.1);
      border-left-width: 6px;
    }

    li.dose[data-status="missed"] {
      border-left-color: var(--danger);
    }

    li.dose[data-status="upcoming"] {
      border-left-color: var(--accent);
    }

    li.dose[data-status="taken"] {
      border-left-color: #9aa6a0;
      opacity: 0.75;
    }

    li.dose .when {
      font-weight: 600;
      font-variant-numeric: tabular-nums;
    }

    .pill {
      font-size: 0.78rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      padding: 3px 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 240px;
      display: block;
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
      fill: #7a8480;
      font-size: 11px;
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7470;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .two-col {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 18px;
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
      <div>
        <h1>MedTimer</h1>
        <p class="subtitle"><span id="greeting">Welcome</span> &middot; <span id="date">{{DATE}}</span> <span id="clock"></span></p>
      </div>
      <button id="logout" class="btn-quiet hidden" type="button">Log out</button>
    </header>

    <section id="auth" class="auth">
      <form id="login-form" class="card stack">
        <h2>Sign in</h2>
        <input name="username" placeholder="Username" autocomplete="username" required />
        <input name="password" type="password" placeholder="Password" autocomplete="current-password" required />
        <button class="btn-primary" type="submit">Sign in</button>
        <p class="switch">No account? <a id="show-signup">Create one</a></p>
      </form>
      <form id="signup-form" class="card stack hidden">
        <h2>Create account</h2>
        <input name="username" placeholder="Username" required />
        <input name="name" placeholder="Full name" required />
        <input name="age" type="number" min="1" max="120" placeholder="Age" required />
        <input name="email" type="email" placeholder="Email (optional)" />
        <input name="phone" placeholder="Phone (optional)" />
        <input name="password" type="password" placeholder="Password" required />
        <button class="btn-primary" type="submit">Register</button>
        <p class="switch">Already registered? <a id="show-login">Sign in</a></p>
      </form>
    </section>

    <section id="dashboard" class="hidden" style="display: grid; gap: 22px;">
      <div id="due-banner" class="banner hidden">
        <span>&#9200;</span>
        <span id="due-text"></span>
      </div>

      <section class="panel">
        <div class="stat">
          <span class="label">Medications</span>
          <span class="value" id="stat-meds">0</span>
        </div>
        <div class="stat">
          <span class="label">Fully taken</span>
          <span class="value accent" id="stat-complete">0</span>
        </div>
        <div class="stat">
          <span class="label">Missed doses</span>
          <span class="value" id="stat-missed">0</span>
        </div>
        <div class="stat">
          <span class="label">Adherence</span>
          <span class="value accent" id="stat-adherence">0%</span>
        </div>
      </section>

      <section class="card">
        <div style="display:flex; flex-wrap:wrap; justify-content:space-between; gap:10px; align-items:center;">
          <h2>Today's doses</h2>
          <div style="display:flex; gap:10px; align-items:center;">
            <div class="tabs" role="tablist">
              <button class="tab active" type="button" data-filter="all">All</button>
              <button class="tab" type="button" data-filter="taken">Taken</button>
              <button class="tab" type="button" data-filter="upcoming">Upcoming</button>
              <button class="tab" type="button" data-filter="missed">Missed</button>
            </div>
            <button id="undo-btn" class="btn-quiet" type="button">Undo</button>
          </div>
        </div>
        <ul id="doses" class="doses"></ul>
      </section>

      <section class="card">
        <h2>7-day adherence</h2>
        <svg id="chart" viewBox="0 0 600 240" role="img" aria-label="Adherence chart"></svg>
        <p class="subtitle">Average over recorded days: <strong id="avg-adherence">0%</strong></p>
      </section>

      <section class="card">
        <h2>Add medication</h2>
        <form id="med-form" class="stack">
          <div class="form-row">
            <input name="name" placeholder="Name" required />
            <input name="dosage_amount" placeholder="Dose (e.g. 100mg)" required />
            <select name="dosage_type">
              <option value="pill">Pill</option>
              <option value="liquid">Liquid</option>
              <option value="injection">Injection</option>
              <option value="inhaler">Inhaler</option>
              <option value="topical">Topical</option>
            </select>
          </div>
          <div class="form-row">
            <select name="frequency" id="frequency">
              <option value="once-daily">Once daily</option>
              <option value="twice-daily">Twice daily</option>
              <option value="three-times-daily">Three times daily</option>
              <option value="every-4-hours">Every 4 hours</option>
              <option value="every-6-hours">Every 6 hours</option>
              <option value="every-8-hours">Every 8 hours</option>
              <option value="every-12-hours">Every 12 hours</option>
              <option value="as-needed">As needed</option>
              <option value="weekly">Weekly</option>
              <option value="monthly">Monthly</option>
            </select>
            <input name="times" id="times" placeholder="Times (e.g. 08:00, 20:00)" />
            <select name="color">
              <option value="blue">Blue</option>
              <option value="green">Green</option>
              <option value="red">Red</option>
              <option value="orange">Orange</option>
              <option value="purple">Purple</option>
            </select>
          </div>
          <input name="instructions" placeholder="Instructions (optional)" />
          <button class="btn-primary" type="submit">Add</button>
        </form>
      </section>

      <div class="two-col">
        <section class="card">
          <h2>Appointments</h2>
          <form id="appt-form" class="stack">
            <div class="form-row">
              <input name="doctor" placeholder="Doctor" required />
              <input name="specialty" placeholder="Specialty" />
            </div>
            <div class="form-row">
              <input name="date" type="date" required />
              <input name="time" type="time" required />
            </div>
            <button class="btn-quiet" type="submit">Add appointment</button>
          </form>
          <ul id="appointments" class="plain"></ul>
        </section>

        <section class="card">
          <h2>Side effects</h2>
          <form id="effect-form" class="stack">
            <div class="form-row">
              <input name="medication" placeholder="Medication" required />
              <select name="severity">
                <option value="mild">Mild</option>
                <option value="moderate">Moderate</option>
                <option value="severe">Severe</option>
              </select>
            </div>
            <input name="description" placeholder="Description" required />
            <button class="btn-quiet" type="submit">Report</button>
          </form>
          <ul id="side-effects" class="plain"></ul>
        </section>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const DEFAULT_TIMES = {
      'once-daily': ['09:00'],
      'twice-daily': ['08:00', '20:00'],
      'three-times-daily': ['08:00', '13:00', '20:00'],
      'every-4-hours': ['08:00', '12:00', '16:00', '20:00'],
      'every-6-hours': ['06:00', '12:00', '18:00', '00:00'],
      'every-8-hours': ['08:00', '16:00', '00:00'],
      'every-12-hours': ['08:00', '20:00'],
      'as-needed': ['09:00'],
      'weekly': ['09:00'],
      'monthly': ['09:00']
    };

    const statusEl = document.getElementById('status');
    const authEl = document.getElementById('auth');
    const dashEl = document.getElementById('dashboard');
    const dosesEl = document.getElementById('doses');
    const chartEl = document.getElementById('chart');
    const dueBanner = document.getElementById('due-banner');
    const dueText = document.getElementById('due-text');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let username = sessionStorage.getItem('medtimer-user');
    let checklist = null;
    let filter = 'all';
    let duePoll = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; statusEl.dataset.type = ''; }, 2500);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const userPath = (suffix) => `/api/users/${encodeURIComponent(username)}${suffix}`;

    const tickClock = () => {
      const now = new Date();
      document.getElementById('clock').textContent =
        now.toTimeString().slice(0, 5);
    };

    const renderDoses = () => {
      if (!checklist) { return; }
      const events = []
        .concat(checklist.missed.map((e) => ({ ...e, status: 'missed' })))
        .concat(checklist.upcoming.map((e) => ({ ...e, status: 'upcoming' })))
        .concat(checklist.taken.map((e) => ({ ...e, status: 'taken' })))
        .filter((e) => filter === 'all' || e.status === filter)
        .sort((a, b) => a.time.localeCompare(b.time));

      dosesEl.innerHTML = '';
      if (!events.length) {
        dosesEl.innerHTML = '<li class="subtitle">Nothing here.</li>';
        return;
      }
      for (const event of events) {
        const li = document.createElement('li');
        li.className = 'dose';
        li.dataset.status = event.status;
        const take = event.status === 'taken'
          ? ''
          : `<span><button class="btn-primary" data-take="${event.medication_id}" data-time="${event.time}">Take</button>
             <button class="btn-quiet" data-skip="${event.medication_id}" data-time="${event.time}">Skip</button></span>`;
        li.innerHTML = `
          <span class="when">${event.time}</span>
          <span>${event.name} &middot; ${event.dosage_amount}</span>
          <span class="pill">${event.status}</span>
          ${take}`;
        dosesEl.appendChild(li);
      }
    };

    const renderChart = (series) => {
      const width = 600;
      const height = 240;
      const paddingX = 44;
      const paddingY = 34;
      const top = 20;
      const points = series.last_7_days;

      const x = (i) => paddingX + i * ((width - paddingX * 2) / (points.length - 1));
      const y = (pct) => height - paddingY - (pct / 100) * (height - top - paddingY);

      let grid = '';
      for (const pct of [0, 25, 50, 75, 100]) {
        const yPos = y(pct);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${pct}</text>`;
      }

      let path = '';
      let circles = '';
      let labels = '';
      points.forEach((point, i) => {
        labels += `<text class="chart-label" x="${x(i)}" y="${height - paddingY + 18}" text-anchor="middle">${point.date.slice(5)}</text>`;
        if (point.adherence === null) { return; }
        const px = x(i).toFixed(2);
        const py = y(point.adherence).toFixed(2);
        path += `${path ? 'L' : 'M'} ${px} ${py} `;
        circles += `<circle class="chart-point" cx="${px}" cy="${py}" r="4" />`;
      });

      chartEl.innerHTML = `${grid}<path class="chart-line" d="${path}" />${circles}${labels}`;
      document.getElementById('avg-adherence').textContent =
        `${Math.round(series.average)}%`;
    };

    const loadChecklist = async () => {
      checklist = await api(userPath('/checklist'));
      const medCount = new Set(
        checklist.missed.concat(checklist.upcoming, checklist.taken)
          .map((e) => e.medication_id)
      ).size;
      document.getElementById('stat-meds').textContent = medCount;
      document.getElementById('stat-complete').textContent = checklist.fully_taken.length;
      document.getElementById('stat-missed').textContent = checklist.missed.length;
      document.getElementById('stat-adherence').textContent =
        `${Math.round(checklist.adherence)}%`;
      renderDoses();
    };

    const loadAdherence = async () => {
      renderChart(await api(userPath('/adherence')));
    };

    const loadDue = async () => {
      const data = await api(userPath('/due-now?window=5'));
      if (!data.due.length) {
        dueBanner.classList.add('hidden');
        return;
      }
      dueText.textContent = data.due
        .map((d) => `${d.name} at ${d.times.join(', ')}`)
        .join(' — ');
      dueBanner.classList.remove('hidden');
    };

    const renderAppointments = (items) => {
      const ul = document.getElementById('appointments');
      ul.innerHTML = items.length ? '' : '<li class="subtitle">No appointments.</li>';
      for (const appt of items) {
        const li = document.createElement('li');
        li.className = 'dose';
        li.innerHTML = `<span>${appt.date} ${appt.time} &middot; ${appt.doctor}${appt.specialty ? ' (' + appt.specialty + ')' : ''}</span>
          <button class="btn-danger" data-del-appt="${appt.id}">Remove</button>`;
        ul.appendChild(li);
      }
    };

    const renderSideEffects = (items) => {
      const ul = document.getElementById('side-effects');
      ul.innerHTML = items.length ? '' : '<li class="subtitle">No reports.</li>';
      for (const report of items) {
        const li = document.createElement('li');
        li.className = 'dose';
        li.innerHTML = `<span>${report.medication} &middot; ${report.severity} &middot; ${report.description}</span>
          <button class="btn-danger" data-del-effect="${report.id}">Remove</button>`;
        ul.appendChild(li);
      }
    };

    const refresh = async () => {
      await Promise.all([
        loadChecklist(),
        loadAdherence(),
        loadDue(),
        api(userPath('/appointments')).then(renderAppointments),
        api(userPath('/side-effects')).then(renderSideEffects)
      ]);
    };

    const enterDashboard = async (profile) => {
      username = profile.username;
      sessionStorage.setItem('medtimer-user', username);
      document.body.dataset.age = profile.age_category;
      document.getElementById('greeting').textContent = `Hello, ${profile.name}`;
      authEl.classList.add('hidden');
      dashEl.classList.remove('hidden');
      document.getElementById('logout').classList.remove('hidden');
      await refresh();
      duePoll = setInterval(() => loadDue().catch(() => {}), 30000);
    };

    const logout = () => {
      sessionStorage.removeItem('medtimer-user');
      username = null;
      if (duePoll) { clearInterval(duePoll); }
      location.reload();
    };

    document.getElementById('show-signup').addEventListener('click', () => {
      document.getElementById('login-form').classList.add('hidden');
      document.getElementById('signup-form').classList.remove('hidden');
    });

    document.getElementById('show-login').addEventListener('click', () => {
      document.getElementById('signup-form').classList.add('hidden');
      document.getElementById('login-form').classList.remove('hidden');
    });

    document.getElementById('login-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      post('/api/login', {
        username: form.get('username'),
        password: form.get('password')
      })
        .then(enterDashboard)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('signup-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      post('/api/register', {
        username: form.get('username'),
        name: form.get('name'),
        age: Number(form.get('age')),
        email: form.get('email') || '',
        phone: form.get('phone') || '',
        password: form.get('password')
      })
        .then(enterDashboard)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('logout').addEventListener('click', logout);

    document.getElementById('frequency').addEventListener('change', (event) => {
      const times = DEFAULT_TIMES[event.target.value] || ['09:00'];
      document.getElementById('times').value = times.join(', ');
    });

    document.getElementById('med-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const times = (form.get('times') || '')
        .split(',')
        .map((t) => t.trim())
        .filter(Boolean);
      post(userPath('/medications'), {
        name: form.get('name'),
        dosage_type: form.get('dosage_type'),
        dosage_amount: form.get('dosage_amount'),
        frequency: form.get('frequency'),
        reminder_times: times.length ? times : null,
        color: form.get('color'),
        instructions: form.get('instructions') || ''
      })
        .then(() => { event.target.reset(); setStatus('Medication added', 'ok'); return refresh(); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('appt-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      post(userPath('/appointments'), {
        doctor: form.get('doctor'),
        specialty: form.get('specialty') || '',
        date: form.get('date'),
        time: form.get('time')
      })
        .then(() => { event.target.reset(); return api(userPath('/appointments')).then(renderAppointments); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('effect-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      post(userPath('/side-effects'), {
        medication: form.get('medication'),
        severity: form.get('severity'),
        type: '',
        description: form.get('description'),
        date: new Date().toISOString().slice(0, 10)
      })
        .then(() => { event.target.reset(); return api(userPath('/side-effects')).then(renderSideEffects); })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('undo-btn').addEventListener('click', () => {
      post(userPath('/undo'), {})
        .then((result) => {
          setStatus(result.undone ? `Undid ${result.action}` : 'Nothing to undo', result.undone ? 'ok' : '');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    dosesEl.addEventListener('click', (event) => {
      const take = event.target.dataset.take;
      const skip = event.target.dataset.skip;
      const time = event.target.dataset.time;
      if (take) {
        post(userPath(`/medications/${take}/take`), { time })
          .then(() => { setStatus('Dose recorded', 'ok'); return refresh(); })
          .catch((err) => setStatus(err.message, 'error'));
      } else if (skip) {
        post(userPath(`/medications/${skip}/skip`), { time })
          .then(() => setStatus('Dose skipped', ''))
          .catch((err) => setStatus(err.message, 'error'));
      }
    });

    document.getElementById('appointments').addEventListener('click', (event) => {
      const id = event.target.dataset.delAppt;
      if (!id) { return; }
      api(userPath(`/appointments/${id}`), { method: 'DELETE' })
        .then(() => api(userPath('/appointments')).then(renderAppointments))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('side-effects').addEventListener('click', (event) => {
      const id = event.target.dataset.delEffect;
      if (!id) { return; }
      api(userPath(`/side-effects/${id}`), { method: 'DELETE' })
        .then(() => api(userPath('/side-effects')).then(renderSideEffects))
        .catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        filter = button.dataset.filter;
        tabs.forEach((b) => b.classList.toggle('active', b === button));
        renderDoses();
      });
    });

    tickClock();
    setInterval(tickClock, 30000);

    if (username) {
      api(userPath('/profile'))
        .then(enterDashboard)
        .catch(() => sessionStorage.removeItem('medtimer-user'));
    }
  </script>
</body>
</html>
"#;
