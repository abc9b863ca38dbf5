use super::*;
use crate::memory::MemoryDocument;

fn page_with_popup() -> (MemoryDocument, PopupController<MemoryDocument>) {
    let doc = MemoryDocument::new();
    let popup = doc.insert("popup");
    popup.add_class("hidden").unwrap();
    let controller = PopupController::new(&PageConfig::default(), doc.clone());
    (doc, controller)
}

#[test]
fn show_removes_hidden_class() {
    let (doc, popup) = page_with_popup();
    popup.show();
    assert!(!doc.element_by_id("popup").unwrap().has_class("hidden"));
    assert_eq!(popup.is_visible(), Some(true));
}

#[test]
fn show_then_hide_leaves_popup_hidden() {
    let (doc, popup) = page_with_popup();
    popup.show();
    popup.hide();
    assert!(doc.element_by_id("popup").unwrap().has_class("hidden"));
    assert_eq!(popup.is_visible(), Some(false));
}

#[test]
fn hide_twice_equals_hide_once() {
    let (doc, popup) = page_with_popup();
    popup.show();
    popup.hide();
    let once = doc.element_by_id("popup").unwrap().classes();
    popup.hide();
    assert_eq!(doc.element_by_id("popup").unwrap().classes(), once);
    assert_eq!(once, vec!["hidden".to_owned()]);
}

#[test]
fn show_twice_equals_show_once() {
    let (doc, popup) = page_with_popup();
    popup.show();
    popup.show();
    assert!(doc.element_by_id("popup").unwrap().classes().is_empty());
}

#[test]
fn other_classes_are_untouched() {
    let (doc, popup) = page_with_popup();
    doc.element_by_id("popup").unwrap().add_class("toast").unwrap();
    popup.show();
    popup.hide();
    assert_eq!(
        doc.element_by_id("popup").unwrap().classes(),
        vec!["toast".to_owned(), "hidden".to_owned()]
    );
}

#[test]
fn missing_popup_is_a_no_op() {
    let doc = MemoryDocument::new();
    let popup = PopupController::new(&PageConfig::default(), doc.clone());
    popup.show();
    popup.hide();
    assert_eq!(popup.is_visible(), None);
}

#[test]
fn popup_added_after_construction_is_found() {
    let doc = MemoryDocument::new();
    let popup = PopupController::new(&PageConfig::default(), doc.clone());
    let el = doc.insert("popup");
    popup.hide();
    assert!(el.has_class("hidden"));
}

#[test]
fn configured_id_and_class_are_used() {
    let config = PageConfig {
        popup_id: "notice".to_owned(),
        hidden_class: "is-hidden".to_owned(),
        ..PageConfig::default()
    };
    let doc = MemoryDocument::new();
    let stock = doc.insert("popup");
    let notice = doc.insert("notice");
    let popup = PopupController::new(&config, doc);
    popup.hide();
    assert!(notice.has_class("is-hidden"));
    assert!(stock.classes().is_empty());
}
