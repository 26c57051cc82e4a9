use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Destination screens the host panel knows how to render.
///
/// The home screen has no tag of its own: an envelope without a `screen`
/// field means home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Details,
    Edit,
    ImportExport,
    Debug,
    Download,
    Remove,
}

/// One navigation intent, serialized into the hidden nav field for the host.
///
/// All fields are omitted from the wire form when absent, so the home
/// envelope serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen: Option<Screen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_state: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefilled_json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backstack: Vec<NavEnvelope>,
}

impl NavEnvelope {
    /// The empty envelope, meaning the home screen with no history.
    pub fn home() -> Self {
        Self::default()
    }

    pub fn to_screen(screen: Screen) -> Self {
        Self {
            screen: Some(screen),
            ..Self::default()
        }
    }

    pub fn with_record_id(mut self, id: impl Into<Value>) -> Self {
        self.record_id = Some(id.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_filter_state(mut self, filter_state: impl Into<Value>) -> Self {
        self.filter_state = Some(filter_state.into());
        self
    }

    pub fn with_prefilled_json(mut self, prefilled: impl Into<Value>) -> Self {
        self.prefilled_json = Some(prefilled.into());
        self
    }

    pub fn is_home(&self) -> bool {
        self.screen.is_none()
    }

    /// Parses a stored envelope. Malformed or empty input means "no
    /// navigation state", never an error.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        serde_json::from_str(raw).ok()
    }

    /// Copy of this envelope with `token` and `backstack` stripped, the only
    /// form allowed inside a backstack.
    pub fn sanitized(&self) -> Self {
        Self {
            token: None,
            backstack: Vec::new(),
            ..self.clone()
        }
    }
}

/// Computes the envelope for navigating to `next` from `current`.
///
/// The current envelope, sanitized, becomes the newest backstack entry and
/// inherits the rest of the current stack behind it. `token` must be fresh
/// per call so the host observes every delivery as a distinct change.
pub fn navigate_to(
    current: Option<NavEnvelope>,
    mut next: NavEnvelope,
    token: impl Into<String>,
) -> NavEnvelope {
    let mut backstack = Vec::new();
    if let Some(current) = current {
        backstack.push(current.sanitized());
        backstack.extend(current.backstack);
    }
    next.token = Some(token.into());
    next.backstack = backstack;
    next
}

/// Pops the newest backstack entry and promotes it to the current envelope,
/// re-attaching the remaining stack. An empty or absent stack yields home.
pub fn navigate_back(current: Option<NavEnvelope>) -> NavEnvelope {
    let Some(mut current) = current else {
        return NavEnvelope::home();
    };
    if current.backstack.is_empty() {
        return NavEnvelope::home();
    }
    let mut target = current.backstack.remove(0);
    target.backstack = current.backstack;
    target
}
