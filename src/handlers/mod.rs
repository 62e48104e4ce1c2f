pub mod images;
pub mod sections;
pub mod workspace;

use maud::{html, Markup};

use crate::{state::Builder, views};

/// Workspace region with an optional validation alert.
pub(crate) async fn workspace_markup(
    builder: &Builder,
    error: Option<&str>,
    locale: &str,
) -> Markup {
    let view = builder.workspace().await;
    views::editor::workspace(&view, error, locale)
}

/// Option editor plus an out-of-band preview refresh, the response shape of
/// every mutation that changes option rows.
pub(crate) async fn option_editor_markup(builder: &Builder, locale: &str) -> Markup {
    let view = builder.workspace().await;
    html! {
        (views::editor::option_editor(&view.question, locale))
        (views::preview::pane_oob(&view.question))
    }
}

/// Preview pane alone, the response shape of content and settings edits.
pub(crate) async fn preview_markup(builder: &Builder) -> Markup {
    let view = builder.workspace().await;
    views::preview::pane(&view.question)
}
