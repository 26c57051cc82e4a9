use serde::Deserialize;

/// Theme used whenever resolution fails.
pub const DEFAULT_THEME: &str = "light";

/// Card dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CardSize {
    pub width: u32,
    pub height: u32,
}

impl CardSize {
    /// Dimensions used whenever resolution fails.
    pub const FALLBACK: CardSize = CardSize {
        width: 250,
        height: 350,
    };
}

impl Default for CardSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Payload of the host's `/mo/display-options` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DisplayOptions {
    pub theme: String,
    pub card_width: u32,
    pub card_height: u32,
}

impl DisplayOptions {
    pub fn card_size(&self) -> CardSize {
        CardSize {
            width: self.card_width,
            height: self.card_height,
        }
    }
}

/// Inline `:root` rule exposing card dimensions as CSS custom properties.
pub fn card_size_css(size: CardSize) -> String {
    format!(
        ":root {{\n    --mo-card-width: {}px;\n    --mo-card-height: {}px;\n}}",
        size.width, size.height
    )
}
