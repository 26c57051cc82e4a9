//! Panel load sequence: one-shot home-state seeding and style installation.

use panel_bridge::{
    deliver, resolve_card_size, resolve_theme, ElementAccess, OptionsSource, HOME_STATE_FIELD,
    INITIAL_STATE_FIELD,
};
use panel_core::{card_size_css, CardSize};
use panel_logging::{panel_debug, panel_info};

/// Stylesheet locations served by the host.
pub const DARK_COLORS_CSS: &str = "file=extensions/sd-model-organizer/styles/colors-dark.css";
pub const LIGHT_COLORS_CSS: &str = "file=extensions/sd-model-organizer/styles/colors-light.css";
pub const BASE_CSS: &str = "file=extensions/sd-model-organizer/styles/styles.css";

/// One-shot guard for the panel load sequence.
///
/// Visibility observers fire repeatedly, but the home screen must be seeded
/// once per page load. The flag flips only on successful delivery, so a
/// firing that arrives before the host built the fields is retried on the
/// next one.
#[derive(Debug, Default)]
pub struct LoadSequence {
    home_state_seeded: bool,
}

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the host-rendered initial state into the home-state field,
    /// at most once per load. Returns whether seeding happened this call.
    pub fn seed_home_state(&mut self, dom: &mut dyn ElementAccess) -> bool {
        if self.home_state_seeded {
            return false;
        }
        let Some(initial) = dom.field_value(INITIAL_STATE_FIELD) else {
            panel_debug!("initial state field not present yet");
            return false;
        };
        if !deliver(dom, HOME_STATE_FIELD, &initial) {
            return false;
        }
        self.home_state_seeded = true;
        panel_info!("initial home state seeded");
        true
    }
}

/// Installs the color stylesheet for `theme` plus the base stylesheet.
/// `cache_bust` defeats stale cached colors after a theme change.
pub fn install_theme(dom: &mut dyn ElementAccess, theme: &str, cache_bust: i64) {
    let colors = if theme == "dark" {
        DARK_COLORS_CSS
    } else {
        LIGHT_COLORS_CSS
    };
    panel_info!("installing {theme} theme");
    dom.install_stylesheet(&format!("{colors}?v={cache_bust}"));
    dom.install_stylesheet(BASE_CSS);
}

/// Exposes card dimensions to the stylesheets as CSS custom properties.
pub fn install_card_size(dom: &mut dyn ElementAccess, size: CardSize) {
    dom.install_inline_style(&card_size_css(size));
}

/// Millisecond timestamp used as the stylesheet cache buster.
pub fn cache_bust_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Resolves display options and installs the resulting styles. Runs once at
/// panel load, independent of the navigation cycle; failures inside the
/// resolvers already degrade to the fixed defaults.
pub async fn apply_display_options(
    dom: &mut dyn ElementAccess,
    page_url: &str,
    source: &dyn OptionsSource,
) {
    let theme = resolve_theme(page_url, source).await;
    install_theme(dom, &theme, cache_bust_now());

    let size = resolve_card_size(source).await;
    install_card_size(dom, size);
}
