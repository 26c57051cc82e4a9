use panel_core::{navigate_back, navigate_to, NavEnvelope, Screen};
use panel_logging::{panel_info, panel_warn};
use serde_json::Value;

use crate::dom::ElementAccess;
use crate::signal::{self, NAV_FIELD};
use crate::token::fresh_token;

/// Builds navigation envelopes and delivers them through the change-signal
/// bridge. Every operation is fire-and-forget: the host reacts to the field
/// change, nothing is returned to the caller.
#[derive(Debug)]
pub struct Navigator {
    field_id: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_field(NAV_FIELD)
    }

    pub fn with_field(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
        }
    }

    /// Clears the screen and the whole back-stack.
    pub fn home(&self, dom: &mut dyn ElementAccess) {
        panel_info!("navigate home");
        self.deliver(dom, &NavEnvelope::home());
    }

    pub fn back(&self, dom: &mut dyn ElementAccess) {
        let target = navigate_back(self.current(dom));
        panel_info!("navigate back to {:?}", target.screen);
        self.deliver(dom, &target);
    }

    pub fn details(&self, dom: &mut dyn ElementAccess, record_id: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Details).with_record_id(record_id),
        );
    }

    /// Edit screen with no record: the add flow.
    pub fn add(&self, dom: &mut dyn ElementAccess) {
        self.go(dom, NavEnvelope::to_screen(Screen::Edit));
    }

    pub fn edit(&self, dom: &mut dyn ElementAccess, record_id: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Edit).with_record_id(record_id),
        );
    }

    pub fn edit_prefilled(&self, dom: &mut dyn ElementAccess, prefilled: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Edit).with_prefilled_json(prefilled),
        );
    }

    pub fn download_record(&self, dom: &mut dyn ElementAccess, record_id: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Download).with_record_id(record_id),
        );
    }

    pub fn download_group(&self, dom: &mut dyn ElementAccess, group: impl Into<String>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Download).with_group(group),
        );
    }

    pub fn download_filtered(&self, dom: &mut dyn ElementAccess, filter_state: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Download).with_filter_state(filter_state),
        );
    }

    pub fn import_export(&self, dom: &mut dyn ElementAccess, filter_state: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::ImportExport).with_filter_state(filter_state),
        );
    }

    pub fn remove_record(&self, dom: &mut dyn ElementAccess, record_id: impl Into<Value>) {
        self.go(
            dom,
            NavEnvelope::to_screen(Screen::Remove).with_record_id(record_id),
        );
    }

    pub fn debug(&self, dom: &mut dyn ElementAccess) {
        self.go(dom, NavEnvelope::to_screen(Screen::Debug));
    }

    fn go(&self, dom: &mut dyn ElementAccess, next: NavEnvelope) {
        // Read and write stay back to back with no await between them, so
        // the current envelope cannot change under us.
        let target = navigate_to(self.current(dom), next, fresh_token());
        panel_info!(
            "navigate to {:?} (backstack depth {})",
            target.screen,
            target.backstack.len()
        );
        self.deliver(dom, &target);
    }

    fn current(&self, dom: &dyn ElementAccess) -> Option<NavEnvelope> {
        let raw = dom.field_value(&self.field_id)?;
        let parsed = NavEnvelope::parse(&raw);
        if parsed.is_none() && !raw.trim().is_empty() {
            panel_warn!(
                "malformed navigation state in {}; treating as empty",
                self.field_id
            );
        }
        parsed
    }

    fn deliver(&self, dom: &mut dyn ElementAccess, envelope: &NavEnvelope) {
        match serde_json::to_string(envelope) {
            Ok(raw) => {
                signal::deliver(dom, &self.field_id, &raw);
            }
            Err(err) => panel_warn!("failed to serialize navigation envelope: {err}"),
        }
    }
}
