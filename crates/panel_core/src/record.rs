use serde::{Deserialize, Deserializer};

/// Enumerated download states a record card can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    Pending,
    InProgress,
    Completed,
    Exists,
    Error,
    Cancelled,
}

impl RecordState {
    /// Parses the wire label; anything outside the known set is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            "Exists" => Some(Self::Exists),
            "Error" => Some(Self::Error),
            "Cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Exists => "Exists",
            Self::Error => "Error",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Alert class suffix applied to the record card.
    pub fn card_class(self) -> &'static str {
        match self {
            Self::Pending => "mo-alert-secondary",
            Self::InProgress => "mo-alert-primary",
            Self::Completed => "mo-alert-success",
            Self::Exists => "mo-alert-info",
            Self::Error => "mo-alert-danger",
            Self::Cancelled => "mo-alert-warning",
        }
    }

    /// Which card sub-blocks are shown in this state.
    pub fn visibility(self) -> BlockVisibility {
        match self {
            Self::Pending => BlockVisibility {
                url: true,
                progress: false,
                result_box: false,
            },
            Self::InProgress => BlockVisibility {
                url: true,
                progress: true,
                result_box: false,
            },
            Self::Completed | Self::Exists | Self::Error => BlockVisibility {
                url: false,
                progress: false,
                result_box: true,
            },
            Self::Cancelled => BlockVisibility::default(),
        }
    }
}

/// Visibility of the three stateful card sub-blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockVisibility {
    pub url: bool,
    pub progress: bool,
    pub result_box: bool,
}

/// Result text arrives either as a single string or a list of lines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResultText {
    One(String),
    Many(Vec<String>),
}

/// One render instruction for a record card. Every field besides `id` is
/// optional and applied independently.
///
/// Older snapshot producers use `state` instead of `status`; both are
/// accepted as synonyms.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RecordUpdate {
    #[serde(deserialize_with = "de_record_key")]
    pub id: String,
    #[serde(alias = "state")]
    pub status: Option<String>,
    pub result_text: Option<ResultText>,
    pub result_title: Option<String>,
    pub progress: Option<u32>,
    pub progress_preview: Option<u32>,
    pub progress_info_left: Option<String>,
    pub progress_info_center: Option<String>,
    pub progress_info_right: Option<String>,
    pub progress_preview_info_left: Option<String>,
    pub progress_preview_info_center: Option<String>,
    pub progress_preview_info_right: Option<String>,
}

/// A host push: either a batch keyed by `records` or a bare record update.
/// Both historical wire shapes are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProgressSnapshot {
    Batch { records: Vec<RecordUpdate> },
    Single(RecordUpdate),
}

impl ProgressSnapshot {
    pub fn updates(self) -> Vec<RecordUpdate> {
        match self {
            Self::Batch { records } => records,
            Self::Single(update) => vec![update],
        }
    }
}

/// Record ids arrive as strings or integers depending on the producer.
fn de_record_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Text(String),
        Number(i64),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Text(text) => text,
        Key::Number(number) => number.to_string(),
    })
}
