use iced::{widget::text, Element};
use rollavg_core::{event::Message, state::AppState};
use rollavg_theme::Theme;

use crate::windows::format_window;

/// Displays every distinct value ingested so far.
///
/// Hidden entirely until the first batch lands — callers skip rendering on
/// `None`.
#[derive(Debug, Default)]
pub struct PoolWidget;

impl PoolWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        state: &'a AppState,
        theme: &'a Theme,
    ) -> Option<Element<'a, Message>> {
        if state.pool.is_empty() {
            return None;
        }

        let label = format!("All numbers (unique): {}", format_window(&state.pool));
        Some(text(label).size(theme.font_size).into())
    }
}
