use iced::{
    widget::{column, text},
    Element,
};
use rollavg_core::{event::Message, state::AppState};
use rollavg_theme::Theme;

/// Displays the previous and current window contents.
#[derive(Debug, Default)]
pub struct WindowsWidget;

impl WindowsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        column![
            text(format!(
                "Previous window: {}",
                format_window(&state.report.previous)
            ))
            .size(theme.font_size),
            text(format!(
                "Current window:  {}",
                format_window(&state.report.current)
            ))
            .size(theme.font_size),
        ]
        .spacing(theme.gap as f32 / 2.0)
        .into()
    }
}

/// Render a window as a JSON array (`[2,4,6]`) — the shape the upstream
/// service reports batches in.
pub(crate) fn format_window(values: &[u64]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_as_json_array() {
        assert_eq!(format_window(&[2, 4, 6]), "[2,4,6]");
    }

    #[test]
    fn format_empty_window() {
        assert_eq!(format_window(&[]), "[]");
    }
}
