//! Gallery creation: option resolution and host lookups.

use simplery::testing::{ItemShape, TestDocument};
use simplery::{Gallery, GalleryError, Options};
use tokio::sync::oneshot;

fn document_with_items(count: usize) -> TestDocument {
    let mut doc = TestDocument::new(1280.0, 800.0);
    doc.add_container("gallery", None);
    for _ in 0..count {
        doc.add_item(ItemShape::Fixed(50.0));
    }
    doc
}

#[test]
fn missing_container_option_fails_explicitly() {
    let mut doc = document_with_items(3);
    let result = Gallery::create(&Options::new(), &mut doc);
    assert!(matches!(result, Err(GalleryError::MissingContainer)));
}

#[test]
fn unmatched_container_fails_explicitly() {
    let mut doc = document_with_items(3);
    let result = Gallery::create(&Options::new().with_container("#nope"), &mut doc);
    assert!(matches!(result, Err(GalleryError::ContainerNotFound(s)) if s == "#nope"));
}

#[test]
fn no_items_fails_explicitly() {
    let mut doc = document_with_items(0);
    let result = Gallery::create(&Options::new().with_container("#gallery"), &mut doc);
    assert!(matches!(result, Err(GalleryError::NoItemsFound(s)) if s == ".gallery-item"));
}

#[test]
fn failed_initialization_writes_no_styles() {
    let mut doc = document_with_items(0);
    let container = doc.add_container("other", None);
    let _ = Gallery::create(&Options::new().with_container("#other"), &mut doc);
    assert_eq!(doc.style_writes(container), 0);
}

#[test]
fn custom_item_selector_picks_its_items() {
    let mut doc = document_with_items(2);
    doc.add_element_with_class("tile", ItemShape::Fixed(10.0));

    let options = Options::new()
        .with_container("#gallery")
        .with_item_selector(".tile");
    let gallery = Gallery::create(&options, &mut doc).unwrap();
    assert_eq!(gallery.items().len(), 1);
}

#[test]
fn options_from_declarations_drive_creation() {
    let mut doc = document_with_items(6);
    let options =
        Options::from_declarations("container: #gallery; items-per-row: 3; space: 4px").unwrap();
    let gallery = Gallery::create(&options, &mut doc).unwrap();

    assert_eq!(gallery.grid().cols(), 3);
    assert_eq!(gallery.grid().rows(), 2);
    assert_eq!(gallery.config().space, 4.0);
}

#[test]
fn oversized_items_per_row_lays_out_a_single_row() {
    let mut doc = document_with_items(5);
    let options = Options::new()
        .with_container("#gallery")
        .with_items_per_row(usize::MAX);
    let gallery = Gallery::create(&options, &mut doc).unwrap();

    assert_eq!(gallery.grid().rows(), 1);
    let layout = gallery.last_layout();
    assert_eq!(layout.placements.len(), 5);
    assert!(layout.placements.iter().all(|p| p.row == 0 && p.top == 0.0));
    assert!(layout.item_width >= 0.0 && layout.item_width < 1.0);
}

#[test]
fn first_pass_runs_during_creation() {
    let mut doc = document_with_items(4);
    let gallery = Gallery::create(&Options::new().with_container("#gallery"), &mut doc).unwrap();

    assert_eq!(gallery.last_layout().placements.len(), 4);
    for &item in gallery.items() {
        assert!(doc.style_writes(item) >= 2);
    }
}

#[tokio::test]
async fn creation_waits_for_ready_signal() {
    let mut doc = document_with_items(4);
    let (ready_tx, ready_rx) = oneshot::channel::<()>();
    ready_tx.send(()).unwrap();

    let ready = async move {
        let _ = ready_rx.await;
    };
    let options = Options::new().with_container("#gallery");
    let gallery = Gallery::create_when_ready(ready, &options, &mut doc).await.unwrap();
    assert_eq!(gallery.items().len(), 4);
}
