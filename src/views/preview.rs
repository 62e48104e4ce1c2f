//! Read-only preview of a question, rendered exactly as a respondent would
//! see it. Also reused for the section cards in the sidebar.

use maud::{html, Markup};

use crate::{models::Question, registry::QuestionType, utils};

/// Scale previews render at most this many cells, whatever the stored
/// settings say.
const MAX_SCALE_STEPS: usize = 50;

/// The live preview pane, swap target for every content edit.
pub fn pane(question: &Question) -> Markup {
    pane_with(question, false)
}

/// Out-of-band variant for responses whose primary target is elsewhere.
pub fn pane_oob(question: &Question) -> Markup {
    pane_with(question, true)
}

fn pane_with(question: &Question, oob: bool) -> Markup {
    html! {
        div id="question-preview" hx-swap-oob=[oob.then_some("true")] {
            (question_card(question))
        }
    }
}

/// One complete question card: header, type-specific content, info box.
pub fn question_card(question: &Question) -> Markup {
    html! {
        div class="question-card" data-type=(question.question_type.slug()) {
            div class="question-header" {
                h2 class="question-title" { (question.title) }
                p class="question-description" { (question.description) }
            }
            (content(question))
            @if !question.info.is_empty() {
                div class="info-box" { strong { "Hinweis:" } " " (question.info) }
            }
        }
    }
}

fn content(question: &Question) -> Markup {
    match question.question_type {
        QuestionType::MultipleSingle => {
            choice_list(question, "single", false, &["Option 1", "Option 2"])
        }
        QuestionType::MultipleMulti => {
            choice_list(question, "multi", true, &["Option 1", "Option 2"])
        }
        QuestionType::Likert => scale_table(
            question,
            "likert",
            &question.options_or("statements", &["Option A"]),
            &question.options_or("scale", &["Positiv", "Neutral", "Negativ"]),
        ),
        QuestionType::Matrix => scale_table(
            question,
            "matrix",
            &question.options_or("rows", &["Zeile 1"]),
            &question.options_or("columns", &["Spalte 1", "Spalte 2"]),
        ),
        QuestionType::Nps => nps(question),
        QuestionType::Stars => stars(question),
        QuestionType::Emoji => emoji(question),
        QuestionType::Slider => slider(question),
        QuestionType::TextShort => text_short(question),
        QuestionType::TextLong => text_long(question),
        QuestionType::Ranking => ranking(question),
        QuestionType::Images => images(question),
        QuestionType::YesNo => choice_list(question, "yesno", false, &["Ja", "Nein"]),
    }
}

/// Radio or checkbox list shared by both multiple-choice types and yes/no.
fn choice_list(question: &Question, suffix: &str, multi: bool, fallback: &[&str]) -> Markup {
    let options = question.options_or("options", fallback);
    let name = format!("{}-{suffix}", question.id);
    html! {
        div class="question-content" {
            @for (index, option) in options.iter().enumerate() {
                @let input_id = format!("{name}-{index}");
                div class="option" {
                    @if multi {
                        input type="checkbox" id=(input_id);
                    } @else {
                        input type="radio" name=(name) id=(input_id);
                    }
                    label for=(input_id) { (option) }
                }
            }
        }
    }
}

/// Statement-by-scale radio grid shared by likert and matrix.
fn scale_table(question: &Question, name_infix: &str, rows: &[&str], columns: &[&str]) -> Markup {
    html! {
        div class="question-content" {
            table class="matrix-table" {
                thead {
                    tr {
                        th {}
                        @for column in columns {
                            th { (column) }
                        }
                    }
                }
                tbody {
                    @for (row_index, row) in rows.iter().enumerate() {
                        tr {
                            td { (row) }
                            @for (column_index, _) in columns.iter().enumerate() {
                                td {
                                    input type="radio"
                                        name=(format!("{}-{name_infix}-{row_index}", question.id))
                                        value=(column_index);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn nps(question: &Question) -> Markup {
    let raw_min = question.setting_number("minScore").unwrap_or(0.0);
    let raw_max = question
        .setting_number("maxScore")
        .unwrap_or(raw_min + 10.0);
    let min_score = raw_min.min(raw_max);
    let max_score = raw_min.max(raw_max);
    let min_label = question.setting_text("minLabel").unwrap_or_default();
    let max_label = question.setting_text("maxLabel").unwrap_or_default();

    let span = (max_score - min_score).floor().min(MAX_SCALE_STEPS as f64 - 1.0);
    let steps = span as usize + 1;

    html! {
        div class="question-content" {
            div class="nps-scale" {
                @for step in 0..steps {
                    div class="nps-number" { (min_score + step as f64) }
                }
            }
            div style="display: flex; justify-content: space-between; margin-top: 8px; font-size: 0.75rem; color: var(--color-text-secondary);" {
                span { (min_label) }
                span { (max_label) }
            }
        }
    }
}

fn stars(question: &Question) -> Markup {
    let star_count = question.setting_number("starCount").unwrap_or(5.0);
    let count = star_count.max(1.0).floor().min(MAX_SCALE_STEPS as f64) as usize;
    let left_label = question.setting_text("leftLabel").unwrap_or_default();
    let right_label = question.setting_text("rightLabel").unwrap_or_default();
    html! {
        div class="question-content" {
            div class="star-rating" id=(format!("{}-stars", question.id)) {
                @for _ in 0..count {
                    span class="star" { "★" }
                }
            }
            div style="display: flex; justify-content: space-between; margin-top: 8px; font-size: 0.8rem; color: var(--color-text-secondary);" {
                span { (left_label) }
                span { (right_label) }
            }
        }
    }
}

fn emoji(question: &Question) -> Markup {
    let emojis = question.options_or("emojis", &["🙂", "🙃"]);
    html! {
        div class="question-content" {
            div class="emoji-rating" {
                @for emoji in emojis {
                    div class="emoji" { (emoji) }
                }
            }
        }
    }
}

fn slider(question: &Question) -> Markup {
    let min = question.setting_number("min").unwrap_or(0.0);
    let max = question
        .setting_number("max")
        .unwrap_or_else(|| (min + 1.0).max(100.0));
    let step = question
        .setting_number("step")
        .filter(|step| *step > 0.0)
        .unwrap_or(1.0);
    let raw_value = question.setting_number("value").unwrap_or(min);
    let safe_value = raw_value.max(min).min(max);
    let prefix = question.setting_text("prefix").unwrap_or_default();
    let suffix = question.setting_text("suffix").unwrap_or_default();
    html! {
        div class="question-content" {
            div class="slider-container" {
                input type="range" class="slider" min=(min) max=(max) step=(step) value=(safe_value);
                div class="slider-value" {
                    (prefix) (utils::format_de(safe_value)) (suffix)
                }
            }
        }
    }
}

fn text_short(question: &Question) -> Markup {
    let placeholder = question
        .setting_text("placeholder")
        .unwrap_or("Antwort eingeben");
    html! {
        div class="question-content" {
            input type="text"
                placeholder=(placeholder)
                style="width:100%;padding:12px;border-radius:8px;border:1px solid var(--color-border);";
        }
    }
}

fn text_long(question: &Question) -> Markup {
    let placeholder = question
        .setting_text("placeholder")
        .unwrap_or("Antwort eingeben");
    let rows = match question.setting_number("rows") {
        Some(rows) if rows != 0.0 => rows,
        _ => 4.0,
    }
    .max(3.0);
    html! {
        div class="question-content" {
            textarea rows=(rows)
                placeholder=(placeholder)
                style="width:100%;padding:12px;border-radius:8px;border:1px solid var(--color-border);" {}
        }
    }
}

fn ranking(question: &Question) -> Markup {
    let items = question.options_or("items", &["Eintrag 1", "Eintrag 2"]);
    html! {
        div class="question-content ranking-list" {
            @for (index, item) in items.iter().enumerate() {
                div class="ranking-item" {
                    div class="ranking-number" { (index + 1) }
                    div { (item) }
                }
            }
        }
    }
}

fn images(question: &Question) -> Markup {
    let items = question.options_or("items", &["Design A"]);
    html! {
        div class="question-content" {
            div class="image-options" {
                @for item in items {
                    div class="image-option" {
                        div class="image-placeholder" { "🖼️" }
                        div { (item) }
                    }
                }
            }
        }
    }
}
