use maud::{html, Markup};

/// Main navigation, in display order. The first entry gets the accent colour.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("/sale", "Sale"),
    ("/new", "New\u{a0}Releases"),
    ("/men", "Men"),
    ("/women", "Women"),
    ("/kids", "Kids"),
    ("/collections", "Collections"),
];

// Two visual bars, one semantic <header>.
pub fn site_header() -> Markup {
    html! {
        header {
            div class="super-header" {
                "Free shipping on domestic orders over $75!"
            }
            div class="main-header" {
                div class="logo-wrapper" {
                    a class="logo" href="/" { "Sole&Ankle" }
                }
                nav class="main-nav" {
                    @for (href, label) in NAV_LINKS {
                        a class="nav-link" href=(href) { (label) }
                    }
                }
            }
        }
    }
}
