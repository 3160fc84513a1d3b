use iced::{widget::text, Element};
use rollavg_core::{event::Message, state::AppState};
use rollavg_theme::Theme;

/// Status line: when the last refresh ran and how large the pool has grown.
///
/// Reads `state.last_refresh`, which every refresh stamps with the local
/// wall-clock time.  Format string comes from `theme.time_format`.
#[derive(Debug, Default)]
pub struct StatusWidget;

impl StatusWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let label = match state.last_refresh {
            Some(at) => format!(
                "last refresh {} · {} distinct values",
                at.format(&theme.time_format),
                state.pool.len()
            ),
            None => "waiting for first refresh".to_string(),
        };

        text(label).size(theme.font_size - 2.0).into()
    }
}
