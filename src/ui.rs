pub fn render_index(name_hint: &str, location_hint: &str) -> String {
    INDEX_HTML
        .replace("{{NAME_HINT}}", name_hint)
        .replace("{{LOCATION_HINT}}", location_hint)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Business Insights</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #c9dcf2;
      --ink: #1f2a37;
      --accent: #2563eb;
      --accent-2: #16a34a;
      --star: #eab308;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(31, 42, 55, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e0e7ff 60%, #f5f7fb 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5b6472;
    }

    form {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    input {
      border: 1px solid rgba(31, 42, 55, 0.16);
      border-radius: 14px;
      padding: 14px 16px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      color: white;
      cursor: pointer;
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    .btn-analyze {
      background: var(--accent);
    }

    .btn-regenerate {
      background: var(--accent-2);
      justify-self: start;
    }

    .card {
      display: grid;
      gap: 18px;
    }

    .card[hidden] {
      display: none;
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(2, 1fr);
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      text-align: center;
    }

    .stat .value {
      display: block;
      font-size: 2rem;
      font-weight: 600;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b8494;
    }

    #rating {
      color: var(--star);
    }

    .headline {
      background: white;
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 12px;
    }

    .headline p {
      margin: 0;
      font-style: italic;
    }

    .status {
      min-height: 1.2em;
      color: #5b6472;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Business Insights</h1>
      <p class="subtitle">Rating, review count and an SEO headline for any local business.</p>
    </header>

    <form id="insight-form">
      <input id="name" name="name" placeholder="{{NAME_HINT}}" required />
      <input id="location" name="location" placeholder="{{LOCATION_HINT}}" required />
      <button class="btn-analyze" id="analyze-btn" type="submit">Analyze</button>
    </form>

    <section class="card" id="card" hidden>
      <div>
        <h2 id="card-name"></h2>
        <p class="subtitle" id="card-location"></p>
      </div>
      <div class="stats">
        <div class="stat">
          <span class="value" id="rating"></span>
          <span class="label">Google Rating</span>
        </div>
        <div class="stat">
          <span class="value" id="reviews"></span>
          <span class="label">Reviews</span>
        </div>
      </div>
      <div class="headline">
        <strong>AI-Generated SEO Headline</strong>
        <p id="headline"></p>
        <button class="btn-regenerate" id="regenerate-btn" type="button">Regenerate SEO Headline</button>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const form = document.getElementById('insight-form');
    const nameEl = document.getElementById('name');
    const locationEl = document.getElementById('location');
    const analyzeBtn = document.getElementById('analyze-btn');
    const regenerateBtn = document.getElementById('regenerate-btn');
    const cardEl = document.getElementById('card');
    const statusEl = document.getElementById('status');

    let current = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const readError = async (res) => {
      try {
        const body = await res.json();
        return body.error || 'Request failed';
      } catch (_) {
        return 'Request failed';
      }
    };

    const render = (data) => {
      document.getElementById('card-name').textContent = data.name;
      document.getElementById('card-location').textContent = data.location;
      document.getElementById('rating').textContent = `${data.rating.toFixed(1)}★`;
      document.getElementById('reviews').textContent = data.reviews;
      document.getElementById('headline').textContent = `"${data.headline}"`;
      cardEl.hidden = false;
    };

    const analyze = async () => {
      const name = nameEl.value;
      const location = locationEl.value;
      setStatus('Analyzing...', 'info');
      analyzeBtn.disabled = true;
      try {
        const res = await fetch('/business-data', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ name, location })
        });
        if (!res.ok) {
          throw new Error(await readError(res));
        }
        current = { name, location, ...(await res.json()) };
        render(current);
        setStatus('', '');
      } finally {
        analyzeBtn.disabled = false;
      }
    };

    const regenerate = async () => {
      if (!current) {
        return;
      }
      const params = new URLSearchParams({ name: current.name, location: current.location });
      regenerateBtn.disabled = true;
      try {
        const res = await fetch(`/regenerate-headline?${params}`);
        if (!res.ok) {
          throw new Error(await readError(res));
        }
        const { headline } = await res.json();
        current = { ...current, headline };
        render(current);
      } finally {
        regenerateBtn.disabled = false;
      }
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      analyze().catch((err) => setStatus(err.message, 'error'));
    });

    regenerateBtn.addEventListener('click', () => {
      regenerate().catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_form_hints() {
        let html = render_index("Café Delight", "Mumbai");
        assert!(html.contains(r#"placeholder="Café Delight""#));
        assert!(html.contains(r#"placeholder="Mumbai""#));
        assert!(!html.contains("{{"));
    }
}
