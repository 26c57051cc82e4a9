use std::sync::Once;

use panel_bridge::{apply_snapshot, MemoryDom};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

/// A full record card with every optional slot present.
fn card_dom(id: &str) -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.add_element(&format!("download-card-{id}"));
    dom.add_element(&format!("status-{id}"));
    for tag in ["url", "info-bar", "progress", "result-box", "progress-bar"] {
        dom.add_element(&format!("{tag}-{id}"));
        dom.add_element(&format!("{tag}-preview-{id}"));
    }
    for slot in ["left", "center", "right"] {
        dom.add_element(&format!("progress-info-{slot}-{id}"));
        dom.add_element(&format!("progress-info-{slot}-preview-{id}"));
    }
    dom
}

fn display_of(dom: &MemoryDom, id: &str) -> Option<String> {
    dom.element(id)
        .expect("element")
        .style("display")
        .map(str::to_string)
}

#[test]
fn in_progress_state_styles_card_and_toggles_blocks() {
    init_logging();
    let mut dom = card_dom("r1");

    apply_snapshot(&mut dom, r#"{"id": "r1", "status": "In Progress"}"#);

    let card = dom.element("download-card-r1").expect("card");
    assert_eq!(card.class, "mo-downloads-card mo-alert-primary");
    assert_eq!(dom.element("status-r1").expect("status").text, "In Progress");
    assert_eq!(display_of(&dom, "url-r1"), Some("block".to_string()));
    assert_eq!(display_of(&dom, "info-bar-r1"), Some("flex".to_string()));
    assert_eq!(display_of(&dom, "progress-r1"), Some("flex".to_string()));
    assert_eq!(display_of(&dom, "result-box-r1"), Some("none".to_string()));
    assert_eq!(display_of(&dom, "url-preview-r1"), Some("block".to_string()));
}

#[test]
fn batch_snapshot_updates_each_record() {
    init_logging();
    let mut dom = card_dom("a");
    dom.add_element("download-card-b");
    dom.add_element("status-b");

    apply_snapshot(
        &mut dom,
        r#"{"records": [{"id": "a", "status": "Pending"}, {"id": "b", "status": "Error"}]}"#,
    );

    assert_eq!(
        dom.element("download-card-a").expect("card a").class,
        "mo-downloads-card mo-alert-secondary"
    );
    assert_eq!(
        dom.element("download-card-b").expect("card b").class,
        "mo-downloads-card mo-alert-danger"
    );
}

#[test]
fn hidden_blocks_keep_stale_text() {
    init_logging();
    let mut dom = card_dom("r1");

    apply_snapshot(
        &mut dom,
        r#"{"id": "r1", "status": "Completed", "result_text": "saved to disk"}"#,
    );
    let html_before = dom.element("result-box-r1").expect("result box").html.clone();
    assert!(html_before.contains("saved to disk"));

    // Back to Pending: the result box is hidden but not cleared.
    apply_snapshot(&mut dom, r#"{"id": "r1", "status": "Pending"}"#);

    let result_box = dom.element("result-box-r1").expect("result box");
    assert_eq!(result_box.style("display"), Some("none"));
    assert_eq!(result_box.html, html_before);
}

#[test]
fn progress_only_update_leaves_text_fields_alone() {
    init_logging();
    let mut dom = card_dom("r1");

    apply_snapshot(
        &mut dom,
        r#"{"id": "r1", "progress_info_left": "2.1 MB/s", "progress_info_right": "00:42"}"#,
    );
    apply_snapshot(&mut dom, r#"{"id": "r1", "progress": 64}"#);

    assert_eq!(
        dom.element("progress-info-left-r1").expect("info left").text,
        "2.1 MB/s"
    );
    assert_eq!(
        dom.element("progress-info-right-r1").expect("info right").text,
        "00:42"
    );
    let bar = dom.element("progress-bar-r1").expect("bar");
    assert_eq!(bar.text, "64%");
    assert_eq!(bar.style("width"), Some("64%"));
    // The preview bar was not named in the update.
    assert_eq!(dom.element("progress-bar-preview-r1").expect("preview bar").text, "");
}

#[test]
fn applying_the_same_update_twice_is_idempotent() {
    init_logging();
    let raw = r#"{"id": "r1", "status": "Exists", "result_text": ["kept"], "progress": 100}"#;

    let mut once = card_dom("r1");
    apply_snapshot(&mut once, raw);

    let mut twice = card_dom("r1");
    apply_snapshot(&mut twice, raw);
    apply_snapshot(&mut twice, raw);

    for id in ["download-card-r1", "status-r1", "result-box-r1", "progress-bar-r1"] {
        assert_eq!(once.element(id), twice.element(id), "element {id}");
    }
}

#[test]
fn unrecognized_state_changes_nothing_but_other_fields_apply() {
    init_logging();
    let mut dom = card_dom("r1");
    apply_snapshot(&mut dom, r#"{"id": "r1", "status": "Completed"}"#);
    let card_before = dom.element("download-card-r1").expect("card").clone();

    apply_snapshot(
        &mut dom,
        r#"{"id": "r1", "status": "Bogus", "progress_info_center": "halfway"}"#,
    );

    assert_eq!(dom.element("download-card-r1").expect("card"), &card_before);
    assert_eq!(
        dom.element("progress-info-center-r1").expect("info center").text,
        "halfway"
    );
}

#[test]
fn missing_optional_slots_are_skipped() {
    init_logging();
    // Card markup without progress bars or info slots.
    let mut dom = MemoryDom::new()
        .with_element("download-card-r1")
        .with_element("status-r1");

    apply_snapshot(
        &mut dom,
        r#"{"id": "r1", "status": "Cancelled", "progress": 10, "progress_info_left": "x"}"#,
    );

    assert_eq!(
        dom.element("download-card-r1").expect("card").class,
        "mo-downloads-card mo-alert-warning"
    );
    assert_eq!(dom.element("status-r1").expect("status").text, "Cancelled");
}

#[test]
fn malformed_snapshot_is_dropped() {
    init_logging();
    let mut dom = card_dom("r1");
    apply_snapshot(&mut dom, r#"{"id": "r1", "status": "Pending"}"#);
    let before = dom.element("download-card-r1").expect("card").clone();

    apply_snapshot(&mut dom, "{not json at all");
    apply_snapshot(&mut dom, r#"{"records": "not a list"}"#);

    assert_eq!(dom.element("download-card-r1").expect("card"), &before);
}
