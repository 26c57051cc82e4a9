//! Panel bridge: DOM capability surface and host IO for the organizer panel.
mod description;
mod dom;
mod navigator;
mod options;
mod renderer;
mod signal;
mod token;

pub use description::{publish_description, strip_token, wrap_with_token};
pub use dom::{ElementAccess, HeadInstall, MemoryDom, MemoryElement};
pub use navigator::Navigator;
pub use options::{
    resolve_card_size, resolve_theme, HttpOptionsSource, OptionsError, OptionsSource,
    DISPLAY_OPTIONS_PATH, THEME_QUERY_PARAM,
};
pub use renderer::{apply_op, apply_record_update, apply_snapshot};
pub use signal::{
    deliver, DESCRIPTION_OUTPUT_FIELD, HOME_STATE_FIELD, INITIAL_STATE_FIELD, NAV_FIELD,
};
pub use token::fresh_token;
