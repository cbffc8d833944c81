use crate::charts::Figure;
use crate::errors::ServerError;
use maud::{html, Markup, PreEscaped};

/// A chart container plus the inline script that draws `figure` into it.
/// htmx runs the script when the fragment is swapped in.
pub fn chart(id: &str, figure: &Figure) -> Result<Markup, ServerError> {
    let target = script_json(&id)?;
    let payload = script_json(figure)?;

    Ok(html! {
        div id=(id) class="chart" {}
        script {
            (PreEscaped(format!(
                "(function () {{ var f = {payload}; Plotly.react({target}, f.data, f.layout, {{responsive: true}}); }})();"
            )))
        }
    })
}

/// JSON that is safe to inline inside a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ServerError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
