use crate::templates::components::site_header;
use crate::templates::theme::stylesheet;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(stylesheet())) }
            }
            body {
                (site_header())
                main { (content) }
            }
        }
    }
}
