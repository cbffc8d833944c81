use maud::{html, Markup, DOCTYPE};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1360px; padding: 0 1rem 2rem; }
h1 { text-align: center; color: #0062ff; }
.card { margin: 1.5rem 0; }
.controls { display: flex; gap: 1rem; align-items: center; flex-wrap: wrap; }
.controls select { padding: 6px; font-size: 16px; min-width: 50%; }
.chart { width: 100%; }
.radios label { display: inline-block; margin-right: 1rem; }
footer { color: #777; font-size: 0.85rem; text-align: center; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
                script src=(PLOTLY_JS) {}
                script src=(HTMX_JS) {}
            }
            body {
                h1 { (title) }
                (content)
            }
        }
    }
}
