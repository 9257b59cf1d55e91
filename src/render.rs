// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render the aggregated Report into the self-contained HTML dashboard or pretty JSON
// role: rendering/output
// inputs: &Report (plain data; no decisions are made here)
// outputs: Complete HTML document string (inline CSS, no script) or JSON text
// invariants:
// - Rendering adds no information: every value shown comes from the Report
// - Titles and names are HTML-escaped by the template engine
// errors: Template compile/render failures surface via anyhow
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use minijinja::{Environment, context};

use crate::model::Report;

// The .html template name switches minijinja's auto-escaping on.
static DASHBOARD_TEMPLATE: &str = include_str!("../templates/dashboard.html");

pub fn render_dashboard(report: &Report) -> Result<String> {
  let mut env = Environment::new();
  env
    .add_template("dashboard.html", DASHBOARD_TEMPLATE)
    .context("compiling dashboard template")?;

  let template = env.get_template("dashboard.html").context("loading dashboard template")?;
  let html = template
    .render(context! { report => report })
    .context("rendering dashboard")?;

  Ok(html)
}

pub fn render_json(report: &Report) -> Result<String> {
  let mut text = serde_json::to_string_pretty(report).context("serializing report JSON")?;
  text.push('\n');
  Ok(text)
}
