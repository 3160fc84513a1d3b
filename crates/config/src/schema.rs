use rollavg_core::SequenceCategory;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `rollavg.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Engine capacity and refresh cadence.
    pub global: GlobalConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Engine and cadence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// How many of the most recent distinct values feed the average.
    pub window_size: usize,
    /// Periodic refresh cadence in milliseconds.
    pub interval_ms: u64,
    /// Qualifier code selected at startup (`p`, `f`, `e`, `r`).
    pub default_category: String,
    /// Render the all-distinct-values line under the windows.
    pub show_pool: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            window_size: 10,
            interval_ms: 2_000,
            default_category: "e".to_string(),
            show_pool: true,
        }
    }
}

impl GlobalConfig {
    /// The startup category.  An unknown code falls back to the default
    /// feed rather than failing.
    pub fn startup_category(&self) -> SequenceCategory {
        SequenceCategory::from_code(&self.default_category).unwrap_or_default()
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent color — the average readout and selected entries.
    pub accent: String,
    /// Font size in points.
    pub font_size: f32,
    /// Outer padding (pixels).
    pub padding: u16,
    /// Gap between display rows (pixels).
    pub gap: u16,
    /// Overall background opacity (0.0 – 1.0).
    pub opacity: f32,
    /// `strftime` format for the last-refresh timestamp.
    pub time_format: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:  "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground:  "#cdd6f4".to_string(), // Catppuccin Mocha — text
            accent:      "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            font_size:   14.0,
            padding:     12,
            gap:         8,
            opacity:     1.0,
            time_format: "%H:%M:%S".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_cadence() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.global.window_size, 10);
        assert_eq!(cfg.global.interval_ms, 2_000);
        assert_eq!(cfg.global.startup_category(), SequenceCategory::Even);
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let cfg: AppConfig = toml::from_str("[global]\ninterval_ms = 500\n").unwrap();
        assert_eq!(cfg.global.interval_ms, 500);
        assert_eq!(cfg.global.window_size, 10);
        assert_eq!(cfg.theme.accent, "#cba6f7");
    }

    #[test]
    fn unknown_default_category_falls_back_to_even() {
        let cfg: AppConfig = toml::from_str("[global]\ndefault_category = \"z\"\n").unwrap();
        assert_eq!(cfg.global.startup_category(), SequenceCategory::Even);
    }
}
