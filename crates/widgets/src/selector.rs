use iced::{
    widget::{pick_list, row, text},
    Alignment, Element,
};
use rollavg_core::{event::Message, state::AppState, SequenceCategory};
use rollavg_theme::Theme;

/// Dropdown picking which number feed contributes on the next refresh.
#[derive(Debug, Default)]
pub struct SelectorWidget;

impl SelectorWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let picker = pick_list(
            SequenceCategory::ALL,
            Some(state.selected),
            Message::CategorySelected,
        )
        .text_size(theme.font_size);

        row![text("Number feed:").size(theme.font_size), picker]
            .spacing(theme.gap as f32)
            .align_y(Alignment::Center)
            .into()
    }
}
