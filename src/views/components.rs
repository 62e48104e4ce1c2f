use maud::{html, Markup};

use crate::names;

/// Locale toggle for the header. A successful switch answers with
/// `HX-Refresh` so the whole page re-renders in the new language.
pub fn locale_switch(locale: &str) -> Markup {
    html! {
        span."locale-switch" {
            (locale_button("de", "DE", locale))
            (locale_button("en", "EN", locale))
        }
    }
}

fn locale_button(lang: &str, label: &str, active: &str) -> Markup {
    html! {
        button type="button"
            class=(if lang == active { "locale-btn active" } else { "locale-btn" })
            hx-post=(names::SET_LOCALE_URL)
            hx-vals=(format!(r#"{{"lang": "{lang}"}}"#))
            hx-swap="none" {
            (label)
        }
    }
}

/// Inline alert used for validation feedback.
pub fn alert(message: &str) -> Markup {
    html! {
        article."builder-alert" role="alert" { (message) }
    }
}

/// Muted hint paragraph for editors that have nothing to show.
pub fn hint(text: &str) -> Markup {
    html! {
        p."muted" { (text) }
    }
}
