use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use lopdf::{Document, Object};

use img2pdf::*;

fn jpeg_record(name: &str, width: u32, height: u32) -> ImageRecord {
    let image = RgbImage::from_pixel(width, height, Rgb([120, 80, 40]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Jpeg)
        .expect("encode test JPEG");
    ImageRecord::new(name, ImageKind::Jpeg, buffer.into_inner())
}

fn png_record(name: &str, width: u32, height: u32) -> ImageRecord {
    let image = RgbImage::from_pixel(width, height, Rgb([40, 80, 120]));
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode test PNG");
    ImageRecord::new(name, ImageKind::Png, buffer.into_inner())
}

fn gif_record(name: &str) -> ImageRecord {
    ImageRecord::new(name, ImageKind::Other, b"GIF89a-not-really".to_vec())
}

fn number(object: &Object) -> f32 {
    match object {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r,
        other => panic!("expected a number, got {:?}", other),
    }
}

/// Content stream of the first page, as text
fn first_page_content(doc: &Document) -> String {
    let (_, page_id) = doc.get_pages().into_iter().next().expect("at least one page");
    let page_dict = doc.get_dictionary(page_id).expect("page dictionary");
    let contents_id = match page_dict.get(b"Contents").expect("Contents entry") {
        Object::Reference(id) => *id,
        other => panic!("expected a reference, got {:?}", other),
    };
    let stream = doc
        .get_object(contents_id)
        .expect("content object")
        .as_stream()
        .expect("content stream");
    String::from_utf8(stream.content.clone()).expect("UTF-8 content stream")
}

/// Filters of every image XObject in the document
fn image_filters(doc: &Document) -> Vec<String> {
    doc.objects
        .values()
        .filter_map(|object| {
            let stream = object.as_stream().ok()?;
            let subtype = stream.dict.get(b"Subtype").ok()?.as_name().ok()?;
            if subtype != b"Image" {
                return None;
            }
            let filter = stream.dict.get(b"Filter").ok()?.as_name().ok()?;
            Some(String::from_utf8_lossy(filter).into_owned())
        })
        .collect()
}

#[tokio::test]
async fn test_one_page_per_supported_image() {
    let images = vec![
        jpeg_record("one.jpg", 30, 20),
        png_record("two.png", 20, 30),
        jpeg_record("three.jpg", 25, 25),
    ];

    let output = convert_images(&images, &ConvertOptions::default())
        .await
        .expect("convert");

    assert_eq!(output.page_count, 3);
    assert!(output.skipped.is_empty());

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    assert_eq!(doc.get_pages().len(), 3);
}

#[tokio::test]
async fn test_unsupported_format_is_skipped_not_fatal() {
    let images = vec![
        jpeg_record("one.jpg", 30, 20),
        gif_record("clip.gif"),
        png_record("two.png", 20, 30),
    ];

    let output = convert_images(&images, &ConvertOptions::default())
        .await
        .expect("convert");

    assert_eq!(output.page_count, 2);
    assert_eq!(output.skipped.len(), 1);
    assert_eq!(output.skipped[0].display_name, "clip.gif");

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    assert_eq!(doc.get_pages().len(), 2);
}

#[tokio::test]
async fn test_zero_images_yield_valid_empty_document() {
    let output = convert_images(&[], &ConvertOptions::default())
        .await
        .expect("convert");

    assert_eq!(output.page_count, 0);

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    assert_eq!(doc.get_pages().len(), 0);
}

#[tokio::test]
async fn test_corrupt_bytes_with_claimed_format_abort_run() {
    let images = vec![
        jpeg_record("good.jpg", 30, 20),
        ImageRecord::new("bad.jpg", ImageKind::Jpeg, vec![0x00, 0x01, 0x02, 0x03]),
    ];

    let result = convert_images(&images, &ConvertOptions::default()).await;
    assert!(matches!(result, Err(ConvertError::Embed { .. })));
}

#[tokio::test]
async fn test_pages_use_selected_page_size() {
    let options = ConvertOptions {
        page_size: PageSize::Letter,
        ..Default::default()
    };
    let output = convert_images(&[jpeg_record("one.jpg", 100, 50)], &options)
        .await
        .expect("convert");

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    let (_, page_id) = doc.get_pages().into_iter().next().expect("page");
    let page_dict = doc.get_dictionary(page_id).expect("page dictionary");
    let media_box = page_dict
        .get(b"MediaBox")
        .expect("MediaBox")
        .as_array()
        .expect("array")
        .clone();

    assert_eq!(number(&media_box[0]), 0.0);
    assert_eq!(number(&media_box[1]), 0.0);
    assert_eq!(number(&media_box[2]), 612.0);
    assert_eq!(number(&media_box[3]), 792.0);
}

#[tokio::test]
async fn test_image_is_drawn_centered_and_fitting() {
    // Aspect ratio differs from the page's on purpose
    let options = ConvertOptions {
        page_size: PageSize::A4,
        ..Default::default()
    };
    let output = convert_images(&[jpeg_record("wide.jpg", 400, 100)], &options)
        .await
        .expect("convert");

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    let content = first_page_content(&doc);

    // "q w 0 0 h x y cm /Im0 Do Q"
    let tokens: Vec<&str> = content.split_whitespace().collect();
    assert_eq!(tokens[0], "q");
    assert_eq!(tokens[7], "cm");
    assert_eq!(tokens[8], "/Im0");

    let width: f32 = tokens[1].parse().expect("width");
    let height: f32 = tokens[4].parse().expect("height");
    let x: f32 = tokens[5].parse().expect("x");
    let y: f32 = tokens[6].parse().expect("y");

    let expected = compute_placement(PageSize::A4, 400, 100).expect("placement");
    let (page_width, page_height) = PageSize::A4.dimensions_pt();

    assert!((width - expected.width).abs() < 0.01);
    assert!((height - expected.height).abs() < 0.01);
    assert!(width <= page_width + 0.01);
    assert!(height <= page_height + 0.01);
    assert!((x + width / 2.0 - page_width / 2.0).abs() < 0.01);
    assert!((y + height / 2.0 - page_height / 2.0).abs() < 0.01);
}

#[tokio::test]
async fn test_compression_reencodes_png_as_jpeg() {
    let options = ConvertOptions {
        compression: CompressionSettings {
            enabled: true,
            quality: 0.7,
        },
        ..Default::default()
    };
    let output = convert_images(&[png_record("photo.png", 40, 40)], &options)
        .await
        .expect("convert");

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    assert_eq!(image_filters(&doc), ["DCTDecode"]);
}

#[tokio::test]
async fn test_without_compression_png_stays_flate() {
    let output = convert_images(&[png_record("photo.png", 40, 40)], &ConvertOptions::default())
        .await
        .expect("convert");

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    assert_eq!(image_filters(&doc), ["FlateDecode"]);
}

#[tokio::test]
async fn test_page_order_follows_record_order() {
    // Distinguish pages by size: the placement of a tall image differs from a wide one
    let images = vec![
        jpeg_record("wide.jpg", 400, 100),
        jpeg_record("tall.jpg", 100, 400),
    ];
    let output = convert_images(&images, &ConvertOptions::default())
        .await
        .expect("convert");

    let doc = Document::load_mem(&output.bytes).expect("parse output");
    let content = first_page_content(&doc);
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let width: f32 = tokens[1].parse().expect("width");
    let height: f32 = tokens[4].parse().expect("height");

    // First page holds the wide image, so width is the limiting axis
    assert!(width > height);
}

#[tokio::test]
async fn test_save_pdf_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("output.pdf");

    save_pdf(b"first", &path).await.expect("first write");
    save_pdf(b"second version", &path).await.expect("second write");

    let written = tokio::fs::read(&path).await.expect("read back");
    assert_eq!(written, b"second version");
}

#[tokio::test]
async fn test_load_images_infers_kind_and_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let jpeg_path = dir.path().join("photo.jpg");
    let other_path = dir.path().join("notes.txt");
    tokio::fs::write(&jpeg_path, b"data").await.expect("write jpeg");
    tokio::fs::write(&other_path, b"data").await.expect("write txt");

    let records = load_images(&[jpeg_path, other_path]).await.expect("load");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].display_name(), "photo.jpg");
    assert_eq!(records[0].kind(), ImageKind::Jpeg);
    assert_eq!(records[1].display_name(), "notes.txt");
    assert_eq!(records[1].kind(), ImageKind::Other);
}
