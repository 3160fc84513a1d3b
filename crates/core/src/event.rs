use crate::SequenceCategory;

/// All messages (events) that can flow through the application update loop.
///
/// Sources:
/// - Feed dropdown         → `CategorySelected`
/// - "Fetch now" button    → `RefreshRequested`
/// - Timer subscription    → `Tick`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// A different feed was picked in the dropdown.  Triggers an immediate
    /// refresh with the new category.
    CategorySelected(SequenceCategory),
    /// Manual refresh requested by the user.
    RefreshRequested,
    /// Periodic timer fired — refresh with whatever category is selected now.
    Tick,
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}
