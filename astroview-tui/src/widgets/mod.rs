//! Reusable widget components.

pub mod detail;
pub mod selector;
pub mod status;

pub use detail::DetailPanel;
pub use selector::{SelectorBar, SelectorOption};
pub use status::StatusIndicator;
