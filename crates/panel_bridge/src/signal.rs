//! Change-signal bridge: the hidden-field message channel to the host.

use panel_logging::{panel_debug, panel_trace};

use crate::dom::ElementAccess;

/// Hidden field carrying serialized navigation envelopes.
pub const NAV_FIELD: &str = "mo_json_nav_box";
/// Hidden field receiving token-prefixed description content.
pub const DESCRIPTION_OUTPUT_FIELD: &str = "mo-description-output-widget";
/// Hidden field holding the host-rendered initial home state.
pub const INITIAL_STATE_FIELD: &str = "mo-initial-state-box";
/// Hidden field the home screen watches for its state.
pub const HOME_STATE_FIELD: &str = "mo-home-state-box";

/// Writes `value` into the hidden field and fires a change notification.
///
/// Fires unconditionally, even when the value is unchanged; callers attach a
/// fresh token to otherwise-identical payloads so the host still observes a
/// mutation. A missing field drops the delivery and returns false.
pub fn deliver(dom: &mut dyn ElementAccess, field_id: &str, value: &str) -> bool {
    if !dom.set_field_value(field_id, value) {
        panel_debug!("signal field {field_id} missing; dropping delivery");
        return false;
    }
    dom.dispatch_change(field_id);
    panel_trace!("delivered {} bytes to {field_id}", value.len());
    true
}
