pub mod overlay;
pub mod state;
pub mod theme;

pub use overlay::{OverlayInfo, draw_stats_overlay};
pub use state::UiState;
pub use theme::{ThemePreference, ThemeWatcher, apply_theme};
