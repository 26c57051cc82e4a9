use crate::record::{RecordState, RecordUpdate, ResultText};

/// Base class every record card keeps regardless of state.
pub const CARD_BASE_CLASS: &str = "mo-downloads-card";

/// Title used for the result box when the update does not name one.
pub const DEFAULT_RESULT_TITLE: &str = "Result";

/// Element id scheme shared with the host-rendered card markup.
pub mod elem {
    pub const TAG_URL: &str = "url";
    pub const TAG_INFO_BAR: &str = "info-bar";
    pub const TAG_PROGRESS: &str = "progress";
    pub const TAG_RESULT_BOX: &str = "result-box";
    pub const TAG_PROGRESS_BAR: &str = "progress-bar";

    pub fn card(id: &str) -> String {
        format!("download-card-{id}")
    }

    pub fn status(id: &str) -> String {
        format!("status-{id}")
    }

    pub fn block(tag: &str, id: &str) -> String {
        format!("{tag}-{id}")
    }

    pub fn preview_block(tag: &str, id: &str) -> String {
        format!("{tag}-preview-{id}")
    }
}

/// CSS display value for a toggled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Hidden,
    Block,
    Flex,
}

impl Display {
    pub fn css(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }

    fn shown(visible: bool, unit: Display) -> Display {
        if visible {
            unit
        } else {
            Display::Hidden
        }
    }
}

/// One DOM mutation to perform. Planning is pure; execution happens in the
/// binding layer, which skips operations whose target element is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomOp {
    SetText { id: String, text: String },
    SetHtml { id: String, html: String },
    SetClass { id: String, class: String },
    SetDisplay { id: String, display: Display },
    SetStyle { id: String, property: String, value: String },
}

/// Plans the DOM mutations for one record update.
///
/// The state-driven style and visibility operations come first so a block
/// hidden by a state change never shows newly written text. Hidden blocks
/// keep their stale text; only display is toggled. An unrecognized state
/// skips the style step alone, leaving the remaining field updates intact.
pub fn plan_record_update(update: &RecordUpdate) -> Vec<DomOp> {
    let id = update.id.as_str();
    let mut ops = Vec::new();

    if let Some(state) = update.status.as_deref().and_then(RecordState::parse) {
        plan_state_change(&mut ops, id, state);
    }

    if let Some(text) = &update.result_text {
        let title = update
            .result_title
            .as_deref()
            .unwrap_or(DEFAULT_RESULT_TITLE);
        ops.push(DomOp::SetHtml {
            id: elem::block(elem::TAG_RESULT_BOX, id),
            html: result_box_html(title, text),
        });
    }

    let info_fields = [
        ("left", false, &update.progress_info_left),
        ("center", false, &update.progress_info_center),
        ("right", false, &update.progress_info_right),
        ("left", true, &update.progress_preview_info_left),
        ("center", true, &update.progress_preview_info_center),
        ("right", true, &update.progress_preview_info_right),
    ];
    for (slot, preview, value) in info_fields {
        if let Some(value) = value {
            let tag = format!("progress-info-{slot}");
            ops.push(DomOp::SetText {
                id: block_id(&tag, id, preview),
                text: value.clone(),
            });
        }
    }

    if let Some(percent) = update.progress {
        plan_progress_bar(&mut ops, id, false, percent);
    }
    if let Some(percent) = update.progress_preview {
        plan_progress_bar(&mut ops, id, true, percent);
    }

    ops
}

fn plan_state_change(ops: &mut Vec<DomOp>, id: &str, state: RecordState) {
    ops.push(DomOp::SetClass {
        id: elem::card(id),
        class: format!("{CARD_BASE_CLASS} {}", state.card_class()),
    });
    ops.push(DomOp::SetText {
        id: elem::status(id),
        text: state.label().to_string(),
    });

    let visibility = state.visibility();
    plan_block_display(ops, elem::TAG_URL, id, visibility.url, Display::Block);
    plan_block_display(ops, elem::TAG_INFO_BAR, id, visibility.progress, Display::Flex);
    plan_block_display(ops, elem::TAG_PROGRESS, id, visibility.progress, Display::Flex);
    plan_block_display(
        ops,
        elem::TAG_RESULT_BOX,
        id,
        visibility.result_box,
        Display::Block,
    );
}

/// Toggles both the main block and its preview twin.
fn plan_block_display(ops: &mut Vec<DomOp>, tag: &str, id: &str, visible: bool, unit: Display) {
    let display = Display::shown(visible, unit);
    ops.push(DomOp::SetDisplay {
        id: elem::block(tag, id),
        display,
    });
    ops.push(DomOp::SetDisplay {
        id: elem::preview_block(tag, id),
        display,
    });
}

/// The bar element doubles as its own label: width and text both become
/// `"<n>%"`.
fn plan_progress_bar(ops: &mut Vec<DomOp>, id: &str, preview: bool, percent: u32) {
    let bar = block_id(elem::TAG_PROGRESS_BAR, id, preview);
    let label = format!("{}%", percent.min(100));
    ops.push(DomOp::SetStyle {
        id: bar.clone(),
        property: "width".to_string(),
        value: label.clone(),
    });
    ops.push(DomOp::SetText {
        id: bar,
        text: label,
    });
}

fn block_id(tag: &str, id: &str, preview: bool) -> String {
    if preview {
        elem::preview_block(tag, id)
    } else {
        elem::block(tag, id)
    }
}

/// Renders the result box body: a title line plus one paragraph per entry.
/// Content comes from the host and is trusted as-is.
fn result_box_html(title: &str, text: &ResultText) -> String {
    const PARAGRAPH_STYLE: &str =
        "margin-left: 1rem; padding: 0 !important; line-height: 1.4 !important;";

    let mut html = format!("<p>{title}:</p>");
    let mut push_line = |line: &str| {
        html.push_str(&format!("<p style=\"{PARAGRAPH_STYLE}\">{line}</p>"));
    };
    match text {
        ResultText::One(line) => push_line(line),
        ResultText::Many(lines) => {
            for line in lines {
                push_line(line);
            }
        }
    }
    html
}
