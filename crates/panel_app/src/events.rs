use panel_bridge::{apply_snapshot, publish_description, ElementAccess, Navigator};
use serde_json::Value;

use crate::startup::LoadSequence;

/// Panel interactions and host pushes the runtime reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// The panel became visible. May fire repeatedly; seeding is one-shot.
    PanelShown,
    HomeClicked,
    BackClicked,
    AddClicked,
    DetailsClicked { record_id: Value },
    EditClicked { record_id: Value },
    EditPrefilled { prefilled: Value },
    RemoveClicked { record_id: Value },
    DownloadRecordClicked { record_id: Value },
    DownloadGroupClicked { group: String },
    DownloadFilteredClicked { filter_state: Value },
    ImportExportClicked { filter_state: Value },
    DebugClicked,
    DescriptionSaved { content: String },
    /// Backend progress changed; payload is a serialized snapshot.
    ProgressPushed { snapshot: String },
}

/// Owns the per-load mutable state and routes panel events into the bridge.
#[derive(Debug, Default)]
pub struct PanelRuntime {
    navigator: Navigator,
    load: LoadSequence,
}

impl PanelRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, dom: &mut dyn ElementAccess, event: PanelEvent) {
        match event {
            PanelEvent::PanelShown => {
                self.load.seed_home_state(dom);
            }
            PanelEvent::HomeClicked => self.navigator.home(dom),
            PanelEvent::BackClicked => self.navigator.back(dom),
            PanelEvent::AddClicked => self.navigator.add(dom),
            PanelEvent::DetailsClicked { record_id } => self.navigator.details(dom, record_id),
            PanelEvent::EditClicked { record_id } => self.navigator.edit(dom, record_id),
            PanelEvent::EditPrefilled { prefilled } => {
                self.navigator.edit_prefilled(dom, prefilled);
            }
            PanelEvent::RemoveClicked { record_id } => {
                self.navigator.remove_record(dom, record_id);
            }
            PanelEvent::DownloadRecordClicked { record_id } => {
                self.navigator.download_record(dom, record_id);
            }
            PanelEvent::DownloadGroupClicked { group } => {
                self.navigator.download_group(dom, group);
            }
            PanelEvent::DownloadFilteredClicked { filter_state } => {
                self.navigator.download_filtered(dom, filter_state);
            }
            PanelEvent::ImportExportClicked { filter_state } => {
                self.navigator.import_export(dom, filter_state);
            }
            PanelEvent::DebugClicked => self.navigator.debug(dom),
            PanelEvent::DescriptionSaved { content } => {
                publish_description(dom, &content);
            }
            PanelEvent::ProgressPushed { snapshot } => apply_snapshot(dom, &snapshot),
        }
    }
}
