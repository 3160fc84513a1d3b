use iced::{widget::text, Element};
use rollavg_core::{event::Message, state::AppState};
use rollavg_theme::Theme;

/// Displays the rolling mean of the current window.
///
/// Before any data has arrived the average is undefined; the widget renders
/// a placeholder instead of a number.
#[derive(Debug, Default)]
pub struct AverageWidget;

impl AverageWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let color = if state.report.average.is_some() {
            theme.accent.to_iced()
        } else {
            theme.foreground.to_iced()
        };

        text(format_average(state.report.average))
            .size(theme.font_size + 4.0)
            .color(color)
            .into()
    }
}

fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("Average: {avg:.2}"),
        None => "Average: no data yet".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimals() {
        assert_eq!(format_average(Some(9.0)), "Average: 9.00");
        assert_eq!(format_average(Some(6.22)), "Average: 6.22");
    }

    #[test]
    fn renders_placeholder_without_data() {
        assert_eq!(format_average(None), "Average: no data yet");
    }
}
