use img2pdf::{ConvertError, ImageKind, ImageRecord, ImageStore};

fn record(name: &str) -> ImageRecord {
    // Store operations never decode, so placeholder bytes are fine here
    ImageRecord::new(name, ImageKind::Jpeg, vec![0xFF, 0xD8, 0xFF, 0xE0])
}

fn store_with(names: &[&str]) -> ImageStore {
    let mut store = ImageStore::new();
    store.replace_all(names.iter().map(|name| record(name)).collect());
    store
}

fn names(store: &ImageStore) -> Vec<String> {
    store
        .iter()
        .map(|record| record.display_name().to_string())
        .collect()
}

#[test]
fn test_move_item_swaps_positions() {
    let mut store = store_with(&["a", "b", "c", "d"]);

    store.move_item(2, 0).unwrap();

    // A swap, not an insert: "b" stays where it was
    assert_eq!(names(&store), ["c", "b", "a", "d"]);
}

#[test]
fn test_move_item_is_its_own_inverse() {
    let mut store = store_with(&["a", "b", "c", "d", "e"]);

    store.move_item(1, 4).unwrap();
    store.move_item(1, 4).unwrap();

    assert_eq!(names(&store), ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_move_item_same_index_is_noop() {
    let mut store = store_with(&["a", "b"]);

    store.move_item(1, 1).unwrap();

    assert_eq!(names(&store), ["a", "b"]);
}

#[test]
fn test_move_item_rejects_out_of_range() {
    let mut store = store_with(&["a", "b"]);

    assert!(matches!(
        store.move_item(2, 0),
        Err(ConvertError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        store.move_item(0, 5),
        Err(ConvertError::IndexOutOfRange { index: 5, len: 2 })
    ));
    // The failed calls must not have touched the order
    assert_eq!(names(&store), ["a", "b"]);
}

#[test]
fn test_remove_at_shifts_tail_down() {
    let mut store = store_with(&["a", "b", "c", "d"]);

    store.remove_at(1).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(names(&store), ["a", "c", "d"]);
}

#[test]
fn test_remove_at_rejects_out_of_range() {
    let mut store = store_with(&["a"]);

    assert!(matches!(
        store.remove_at(1),
        Err(ConvertError::IndexOutOfRange { index: 1, len: 1 })
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_replace_all_is_wholesale() {
    let mut store = store_with(&["a", "b", "c"]);

    store.replace_all(vec![record("x")]);

    assert_eq!(names(&store), ["x"]);
}

#[test]
fn test_clear_empties_store() {
    let mut store = store_with(&["a", "b"]);

    store.clear();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_snapshot_is_isolated_from_later_mutation() {
    let mut store = store_with(&["a", "b", "c"]);

    let snapshot = store.snapshot();
    store.remove_at(0).unwrap();
    store.move_item(0, 1).unwrap();

    let snapshot_names: Vec<_> = snapshot
        .iter()
        .map(|record| record.display_name().to_string())
        .collect();
    assert_eq!(snapshot_names, ["a", "b", "c"]);
}

#[test]
fn test_record_ids_are_unique() {
    let a = record("a");
    let b = record("b");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_preview_is_lazy_and_revocable() {
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    let image = RgbImage::from_pixel(32, 16, Rgb([5, 10, 15]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .expect("encode test PNG");

    let mut record = ImageRecord::new("pic.png", ImageKind::Png, buffer.into_inner());
    assert!(record.cached_preview().is_none());

    let preview = record.preview().expect("decode preview");
    assert_eq!(preview.rgba.len(), (preview.width * preview.height * 4) as usize);
    assert!(record.cached_preview().is_some());

    record.release_preview();
    assert!(record.cached_preview().is_none());
}

#[test]
fn test_preview_fails_on_undecodable_bytes() {
    let mut record = record("broken.jpg");
    assert!(matches!(record.preview(), Err(ConvertError::Decode(_))));
}
