use crate::models::{ApplicationState, Summary};

pub fn render_index(data: &ApplicationState, summary: &Summary) -> String {
    INDEX_HTML
        .replace("{{COLOR}}", &escape_html(&data.selection_range.color))
        .replace("{{AMOUNT_INPUT}}", &amount_input_value(summary.amount))
        .replace("{{TOTAL}}", &summary.amount.map(format_amount).unwrap_or_default())
        .replace("{{START}}", &summary.start_date.to_string())
        .replace("{{END}}", &summary.end_date.to_string())
        .replace("{{WEEKS}}", &summary.week_count.to_string())
        .replace("{{DAYS}}", &summary.day_count.to_string())
        .replace("{{PER_WEEK}}", &format_amount(summary.per_week))
        .replace("{{PER_DAY}}", &format_amount(summary.per_day))
}

/// Zero and absent amounts both leave the field blank.
fn amount_input_value(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value != 0.0 => format_amount(value),
        _ => String::new(),
    }
}

fn format_amount(value: f64) -> String {
    value.to_string()
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Installment Splitter</title>
  <style>
    :root {
      --bg: #f4f6f3;
      --ink: #263238;
      --muted: #78909c;
      --accent: {{COLOR}};
      --card: #ffffff;
      --shadow: 0 18px 48px rgba(38, 50, 56, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(640px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    .amount-form {
      display: flex;
      gap: 12px;
    }

    input {
      font: inherit;
      font-size: 1.2rem;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid rgba(38, 50, 56, 0.2);
      width: 100%;
    }

    input:focus {
      outline: 2px solid var(--accent);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
    }

    .stat {
      border-radius: 16px;
      padding: 16px;
      border: 1px solid rgba(38, 50, 56, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
      min-height: 1.8rem;
    }

    .range-form {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 12px;
    }

    .range-form label {
      display: grid;
      gap: 6px;
      color: var(--muted);
      font-size: 0.85rem;
    }

    button {
      font: inherit;
      border: none;
      border-radius: 12px;
      padding: 12px 18px;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    .js .submit {
      display: none;
    }

    .status {
      min-height: 1.2rem;
      color: #c62828;
      font-size: 0.9rem;
    }

    @media (max-width: 560px) {
      .panel {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <form class="amount-form" method="post" action="/amount">
      <input id="amount" name="amount" type="number" min="0" step="any" value="{{AMOUNT_INPUT}}" />
      <button class="submit" type="submit">OK</button>
    </form>
    <section class="panel">
      <div class="stat">
        <span class="label">Total</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Por semana (<span id="weeks">{{WEEKS}}</span>x)</span>
        <span id="per-week" class="value">{{PER_WEEK}}</span>
      </div>
      <div class="stat">
        <span class="label">Por dia (<span id="days">{{DAYS}}</span>x)</span>
        <span id="per-day" class="value">{{PER_DAY}}</span>
      </div>
    </section>
    <form class="range-form" method="post" action="/range">
      <label>Início
        <input id="start-date" name="start_date" type="date" value="{{START}}" required />
      </label>
      <label>Fim
        <input id="end-date" name="end_date" type="date" value="{{END}}" required />
      </label>
      <button class="submit" type="submit">OK</button>
    </form>
    <div class="status" id="status"></div>
  </main>
  <script>
    document.documentElement.classList.add('js');

    const amountEl = document.getElementById('amount');
    const startEl = document.getElementById('start-date');
    const endEl = document.getElementById('end-date');
    const totalEl = document.getElementById('total');
    const weeksEl = document.getElementById('weeks');
    const daysEl = document.getElementById('days');
    const perWeekEl = document.getElementById('per-week');
    const perDayEl = document.getElementById('per-day');
    const statusEl = document.getElementById('status');

    const render = (summary) => {
      totalEl.textContent = summary.amount === null ? '' : summary.amount;
      weeksEl.textContent = summary.weekCount;
      daysEl.textContent = summary.dayCount;
      perWeekEl.textContent = summary.perWeek;
      perDayEl.textContent = summary.perDay;
      startEl.value = summary.startDate;
      endEl.value = summary.endDate;
    };

    const post = async (url, body) => {
      try {
        const res = await fetch(url, {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(body)
        });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        statusEl.textContent = '';
        render(await res.json());
      } catch (err) {
        statusEl.textContent = err.message;
      }
    };

    amountEl.addEventListener('input', () => {
      const value = amountEl.value.trim();
      post('/api/amount', { amount: value === '' ? null : Number(value) });
    });

    const onRangeChange = () => {
      if (!startEl.value || !endEl.value) {
        return;
      }
      post('/api/range', {
        selection: { startDate: startEl.value, endDate: endEl.value }
      });
    };

    startEl.addEventListener('change', onRangeChange);
    endEl.addEventListener('change', onRangeChange);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{summarize, WeekStart};
    use crate::models::SelectionRange;
    use chrono::NaiveDate;

    fn state(amount: Option<f64>) -> ApplicationState {
        ApplicationState {
            amount,
            selection_range: SelectionRange::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            ),
        }
    }

    #[test]
    fn page_shows_counts_and_shares() {
        let data = state(Some(100.0));
        let html = render_index(&data, &summarize(&data, WeekStart::Monday));
        assert!(html.contains(r#"<span id="days">4</span>"#));
        assert!(html.contains(r#"<span id="weeks">1</span>"#));
        assert!(html.contains(r#"<span id="per-day" class="value">25</span>"#));
        assert!(html.contains(r#"<span id="per-week" class="value">100</span>"#));
        assert!(html.contains(r#"value="2024-01-04""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn blank_amount_renders_empty_field() {
        let data = state(None);
        let html = render_index(&data, &summarize(&data, WeekStart::Monday));
        assert!(html.contains(r#"type="number" min="0" step="any" value="""#));
        assert!(html.contains(r#"<span id="total" class="value"></span>"#));
    }

    #[test]
    fn color_is_escaped() {
        let mut data = state(None);
        data.selection_range.color = "red;}</style><script>".to_string();
        let html = render_index(&data, &summarize(&data, WeekStart::Monday));
        assert!(!html.contains("</style><script>"));
    }
}
