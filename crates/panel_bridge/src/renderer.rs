use panel_core::{plan_record_update, DomOp, ProgressSnapshot, RecordUpdate};
use panel_logging::{panel_debug, panel_warn};

use crate::dom::ElementAccess;

/// Entry point the host calls with a serialized progress snapshot.
///
/// Accepts both wire shapes (a `records` batch or a bare record update).
/// Malformed input is logged and dropped; it never propagates to the host
/// page.
pub fn apply_snapshot(dom: &mut dyn ElementAccess, raw: &str) {
    let snapshot: ProgressSnapshot = match serde_json::from_str(raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            panel_warn!("dropping malformed progress snapshot: {err}");
            return;
        }
    };
    for update in snapshot.updates() {
        apply_record_update(dom, &update);
    }
}

pub fn apply_record_update(dom: &mut dyn ElementAccess, update: &RecordUpdate) {
    panel_debug!("applying update for record {}", update.id);
    for op in plan_record_update(update) {
        apply_op(dom, &op);
    }
}

/// Executes one planned mutation. A missing target element skips the
/// operation; the card markup for a record may not include every optional
/// slot.
pub fn apply_op(dom: &mut dyn ElementAccess, op: &DomOp) {
    let (id, applied) = match op {
        DomOp::SetText { id, text } => (id, dom.set_text(id, text)),
        DomOp::SetHtml { id, html } => (id, dom.set_html(id, html)),
        DomOp::SetClass { id, class } => (id, dom.set_class(id, class)),
        DomOp::SetDisplay { id, display } => (id, dom.set_style(id, "display", display.css())),
        DomOp::SetStyle {
            id,
            property,
            value,
        } => (id, dom.set_style(id, property, value)),
    };
    if !applied {
        panel_debug!("element {id} missing; skipping operation");
    }
}
