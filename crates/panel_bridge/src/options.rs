use async_trait::async_trait;
use panel_core::{CardSize, DisplayOptions, DEFAULT_THEME};
use panel_logging::{panel_debug, panel_warn};
use thiserror::Error;
use url::Url;

/// Path of the host's display-options endpoint.
pub const DISPLAY_OPTIONS_PATH: &str = "/mo/display-options";
/// Page-URL query parameter that overrides theme resolution.
pub const THEME_QUERY_PARAM: &str = "__theme";

/// Internal failure of an options request. Never escapes the resolve
/// functions; every variant maps to the documented fallback.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait OptionsSource: Send + Sync {
    async fn fetch_options(&self) -> Result<DisplayOptions, OptionsError>;
}

/// Fetches display options from the host over HTTP.
pub struct HttpOptionsSource {
    endpoint: String,
}

impl HttpOptionsSource {
    /// `base` is the host origin, e.g. `http://127.0.0.1:7860`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            endpoint: format!("{}{DISPLAY_OPTIONS_PATH}", base.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl OptionsSource for HttpOptionsSource {
    async fn fetch_options(&self) -> Result<DisplayOptions, OptionsError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| OptionsError::Request(err.to_string()))?;
        let response = client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| OptionsError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OptionsError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| OptionsError::Request(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| OptionsError::Malformed(err.to_string()))
    }
}

/// Resolves the panel theme.
///
/// A `__theme` query parameter on the page URL wins outright without any
/// request; otherwise the display-options endpoint is asked once. Any
/// failure resolves the default theme; the caller is never left unresolved
/// and nothing is retried.
pub async fn resolve_theme(page_url: &str, source: &dyn OptionsSource) -> String {
    if let Some(theme) = theme_from_url(page_url) {
        panel_debug!("theme resolved from page url: {theme}");
        return theme;
    }
    match source.fetch_options().await {
        Ok(options) => options.theme,
        Err(err) => {
            panel_warn!("display options unavailable ({err}); using default theme");
            DEFAULT_THEME.to_string()
        }
    }
}

/// Resolves card dimensions, falling back to the fixed defaults on any
/// failure.
pub async fn resolve_card_size(source: &dyn OptionsSource) -> CardSize {
    match source.fetch_options().await {
        Ok(options) => options.card_size(),
        Err(err) => {
            panel_warn!("display options unavailable ({err}); using fallback card size");
            CardSize::FALLBACK
        }
    }
}

fn theme_from_url(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == THEME_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}
