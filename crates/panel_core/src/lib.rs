//! Panel core: pure navigation-envelope algebra and render planning.
mod display;
mod nav;
mod plan;
mod record;

pub use display::{card_size_css, CardSize, DisplayOptions, DEFAULT_THEME};
pub use nav::{navigate_back, navigate_to, NavEnvelope, Screen};
pub use plan::{elem, plan_record_update, Display, DomOp, CARD_BASE_CLASS, DEFAULT_RESULT_TITLE};
pub use record::{BlockVisibility, ProgressSnapshot, RecordState, RecordUpdate, ResultText};
