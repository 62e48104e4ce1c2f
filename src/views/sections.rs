//! The ordered section list next to the builder, plus the finish summary.

use maud::{html, Markup};
use rust_i18n::t;

use crate::{models::Question, names, state::SummaryEntry, views::preview};

pub fn panel(sections: &[Question], locale: &str) -> Markup {
    panel_with(sections, locale, false)
}

/// Out-of-band variant appended to workspace swaps after a save.
pub fn panel_oob(sections: &[Question], locale: &str) -> Markup {
    panel_with(sections, locale, true)
}

fn panel_with(sections: &[Question], locale: &str, oob: bool) -> Markup {
    html! {
        section id="sections-panel"
            class="sections-panel"
            hx-swap-oob=[oob.then_some("true")] {
            div class="sections-header" {
                h3 {
                    (t!("sections.heading", locale = locale))
                    " "
                    span class="section-count" id="section-count" { (sections.len()) }
                }
                button type="button" class="ghost-btn"
                    hx-post=(names::FINISH_URL)
                    hx-target="#finish-region"
                    hx-swap="outerHTML" {
                    (t!("sections.finish", locale = locale))
                }
            }
            @if sections.is_empty() {
                div class="empty-state" { (t!("sections.empty", locale = locale)) }
            } @else {
                div class="sections-list" id="sections-container" {
                    @for (index, section) in sections.iter().enumerate() {
                        (section_card(section, index, locale))
                    }
                }
            }
            (finish_placeholder())
        }
    }
}

fn section_card(section: &Question, index: usize, locale: &str) -> Markup {
    html! {
        div class="section-card" data-index=(index) {
            (preview::question_card(section))
            div class="section-card-actions" {
                button class="ghost-btn"
                    hx-get=(names::edit_section_url(index))
                    hx-target="#workspace"
                    hx-swap="outerHTML" {
                    (t!("sections.edit", locale = locale))
                }
                button class="ghost-btn danger"
                    hx-delete=(names::section_url(index))
                    hx-target="#sections-panel"
                    hx-swap="outerHTML" {
                    (t!("sections.delete", locale = locale))
                }
            }
        }
    }
}

pub fn finish_placeholder() -> Markup {
    html! {
        div id="finish-region" {}
    }
}

/// Summary shown after finishing: section count and one numbered line per
/// section, or a nudge when nothing has been saved yet.
pub fn finish_summary(entries: &[SummaryEntry], locale: &str) -> Markup {
    html! {
        div id="finish-region" {
            @if entries.is_empty() {
                article class="builder-alert" role="alert" {
                    (t!("finish.none", locale = locale))
                }
            } @else {
                article class="finish-summary" {
                    h4 { (t!("finish.created", locale = locale, count = entries.len())) }
                    ol class="finish-list" {
                        @for entry in entries {
                            li { (entry.title) " (" (entry.type_label) ")" }
                        }
                    }
                    a href=(names::EXPORT_URL) class="ghost-btn" download="umfrage.json" {
                        (t!("finish.export", locale = locale))
                    }
                }
            }
        }
    }
}
