use crate::SequenceCategory;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Central application state — all widgets read from this snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Feed selected in the dropdown; read fresh on every tick.
    pub selected: SequenceCategory,
    /// Outcome of the most recent refresh.
    pub report: WindowReport,
    /// Every distinct value ingested so far, in first-insertion order.
    pub pool: Vec<u64>,
    /// Wall-clock time of the most recent refresh, `None` before the first.
    pub last_refresh: Option<DateTime<Local>>,
}

/// The window pair and rolling mean produced by a refresh.
///
/// `average` is `None` while the current window is empty — the display layer
/// renders that as "no data", never as a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowReport {
    /// Window as it stood before this refresh.
    pub previous: Vec<u64>,
    /// Window after this refresh.
    pub current: Vec<u64>,
    /// Mean of `current`, rounded to 2 decimal places.
    pub average: Option<f64>,
}
