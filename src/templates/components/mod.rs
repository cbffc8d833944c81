use maud::{html, Markup};

pub mod chart;
pub mod error;

pub use chart::chart;
pub use error::html_error_response;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
