//! Panel app: load-sequence coordination and event dispatch for the
//! organizer panel.
mod events;
mod logging;
mod startup;

pub use events::{PanelEvent, PanelRuntime};
pub use logging::{initialize, LogDestination};
pub use startup::{
    apply_display_options, cache_bust_now, install_card_size, install_theme, LoadSequence,
    BASE_CSS, DARK_COLORS_CSS, LIGHT_COLORS_CSS,
};
