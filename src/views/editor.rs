//! The builder workspace: type picker, content form, the generated option
//! and settings editors, and the preview pane. Everything here is swapped
//! as the `#workspace` region; the option editor and the preview are also
//! swap targets of their own.

use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    hooks,
    models::{Question, SettingValue},
    names,
    registry::{OptionGroupSpec, QuestionType, SettingFieldSpec},
    state::WorkspaceView,
    views::{components, preview, sections},
};

/// The whole builder page body: workspace next to the sections panel.
pub fn builder_page(view: &WorkspaceView, section_list: &[Question], locale: &str) -> Markup {
    html! {
        div class="builder" {
            (workspace(view, None, locale))
            (sections::panel(section_list, locale))
        }
    }
}

/// The editable half of the page. `error` renders as an inline alert above
/// the content form.
pub fn workspace(view: &WorkspaceView, error: Option<&str>, locale: &str) -> Markup {
    html! {
        div id="workspace" class="workspace" {
            section class="editor-pane" {
                (type_picker(view.selected_type, locale))
                @if let Some(message) = error {
                    (components::alert(message))
                }
                (content_form(&view.question, locale))
                h3 { (t!("builder.options_heading", locale = locale)) }
                (option_editor(&view.question, locale))
                h3 { (t!("builder.settings_heading", locale = locale)) }
                (settings_editor(&view.question, locale))
                (save_controls(view.editing.is_some(), locale))
            }
            section class="preview-pane" {
                h3 { (t!("builder.preview_heading", locale = locale)) }
                (preview::pane(&view.question))
            }
        }
    }
}

fn type_picker(selected: QuestionType, locale: &str) -> Markup {
    html! {
        div class="type-picker" {
            h3 { (t!("builder.types_heading", locale = locale)) }
            div class="type-grid" {
                @for kind in QuestionType::ALL {
                    button type="button"
                        class=(if kind == selected { "type-btn active" } else { "type-btn" })
                        data-type=(kind.slug())
                        hx-post=(names::select_type_url(kind.slug()))
                        hx-target="#workspace"
                        hx-swap="outerHTML" {
                        (kind.config().label)
                    }
                }
            }
        }
    }
}

fn content_form(question: &Question, locale: &str) -> Markup {
    html! {
        div class="content-form" {
            (content_input("title", &t!("builder.title_label", locale = locale), &question.title))
            (content_input("description", &t!("builder.description_label", locale = locale), &question.description))
            (content_input("info", &t!("builder.info_label", locale = locale), &question.info))
        }
    }
}

fn content_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        label {
            (label)
            input type="text" name=(name) value=(value)
                hx-patch=(names::CONTENT_URL)
                hx-trigger="input changed delay:200ms"
                hx-target="#question-preview"
                hx-swap="outerHTML";
        }
    }
}

/// Generated editor for the type's option groups. Swapped on its own when
/// entries are added or removed.
pub fn option_editor(question: &Question, locale: &str) -> Markup {
    let config = question.question_type.config();
    html! {
        div id="option-editor" {
            @if config.option_groups.is_empty() {
                (components::hint(&t!("builder.no_options", locale = locale)))
            } @else {
                @for group in config.option_groups {
                    (option_group(question, group, locale))
                }
            }
        }
    }
}

fn option_group(question: &Question, group: &'static OptionGroupSpec, locale: &str) -> Markup {
    let items = question
        .options
        .get(group.key)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let can_add = group.max.is_none_or(|max| items.len() < max);
    let can_remove = items.len() > group.min;
    html! {
        div class="option-group" data-group=(group.key) {
            div class="option-group-header" {
                span { (group.label) }
                @if can_add {
                    button type="button" class="ghost-btn"
                        hx-post=(names::add_option_url(group.key))
                        hx-target="#option-editor"
                        hx-swap="outerHTML" {
                        (group.add_label)
                    }
                }
            }
            div class="option-list" {
                @for (index, value) in items.iter().enumerate() {
                    (option_row(question, group, index, value, can_remove, locale))
                }
            }
        }
    }
}

fn option_row(
    question: &Question,
    group: &'static OptionGroupSpec,
    index: usize,
    value: &str,
    can_remove: bool,
    locale: &str,
) -> Markup {
    let extras = hooks::decorate_row(question, group.key, index, locale);
    let row_class = if extras.is_empty() {
        "option-list-item"
    } else {
        "option-list-item option-list-item--with-image"
    };
    html! {
        div class=(row_class) {
            input type="text" name="value" value=(value) placeholder=(group.placeholder)
                hx-patch=(names::option_url(group.key, index))
                hx-trigger="input changed delay:200ms"
                hx-target="#question-preview"
                hx-swap="outerHTML";
            @if can_remove {
                button type="button" class="icon-btn"
                    aria-label=(t!("builder.remove_option", locale = locale))
                    hx-delete=(names::option_url(group.key, index))
                    hx-target="#option-editor"
                    hx-swap="outerHTML" {
                    "×"
                }
            }
            @for extra in extras {
                (extra)
            }
        }
    }
}

/// Generated editor for the type's settings fields.
pub fn settings_editor(question: &Question, locale: &str) -> Markup {
    let config = question.question_type.config();
    html! {
        div id="settings-editor" {
            @if config.settings_fields.is_empty() {
                (components::hint(&t!("builder.no_settings", locale = locale)))
            } @else {
                @for field in config.settings_fields {
                    (setting_input(question, field))
                }
            }
        }
    }
}

fn setting_input(question: &Question, field: &'static SettingFieldSpec) -> Markup {
    let value = match question.settings.get(field.key) {
        Some(SettingValue::Number(number)) => number.to_string(),
        Some(SettingValue::Text(text)) => text.clone(),
        None => String::new(),
    };
    html! {
        div class="setting-field" {
            label { (field.label) }
            input type=(field.kind.input_type())
                name="value"
                value=(value)
                min=[field.min]
                max=[field.max]
                hx-patch=(names::setting_url(field.key))
                hx-trigger="input changed delay:200ms"
                hx-target="#question-preview"
                hx-swap="outerHTML";
        }
    }
}

fn save_controls(updating: bool, locale: &str) -> Markup {
    let label = if updating {
        t!("builder.update_section", locale = locale)
    } else {
        t!("builder.add_section", locale = locale)
    };
    html! {
        div class="save-controls" {
            button type="button" class="save-btn"
                hx-post=(names::SAVE_SECTION_URL)
                hx-target="#workspace"
                hx-swap="outerHTML" {
                (label)
            }
        }
    }
}
