pub mod average;
pub mod pool;
pub mod selector;
pub mod status;
pub mod windows;

pub use average::AverageWidget;
pub use pool::PoolWidget;
pub use selector::SelectorWidget;
pub use status::StatusWidget;
pub use windows::WindowsWidget;
