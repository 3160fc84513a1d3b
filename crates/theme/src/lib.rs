pub mod colors;

pub use colors::Color;

use rollavg_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// [`Theme::from_config`] is infallible — invalid color strings fall back to
/// safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent:     Color,
    pub font_size:  f32,
    pub padding:    u16,
    pub gap:        u16,
    pub opacity:    f32,
    /// `strftime` format string for the last-refresh timestamp.
    pub time_format: String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background:  Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
            foreground:  Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE),
            accent:      Color::from_hex(&cfg.accent).unwrap_or(Color::PURPLE),
            font_size:   cfg.font_size,
            padding:     cfg.padding,
            gap:         cfg.gap,
            opacity:     cfg.opacity.clamp(0.0, 1.0),
            time_format: cfg.time_format.clone(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
