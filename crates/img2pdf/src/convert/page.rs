//! Output page construction

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::embed::EmbeddedImage;
use crate::layout::Placement;
use crate::types::PageSize;

/// Append one page holding a single drawn image.
///
/// The page MediaBox is the full page size; the image is drawn into the
/// placement rectangle via a scaled `cm` transform.
pub(crate) fn render_image_page(
    output: &mut Document,
    image: EmbeddedImage,
    placement: &Placement,
    page_size: PageSize,
    parent_pages_id: ObjectId,
) -> ObjectId {
    let (page_width, page_height) = page_size.dimensions_pt();

    let image_id = output.add_object(image.into_stream());

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = format!(
        "q {:.2} 0 0 {:.2} {:.2} {:.2} cm /Im0 Do Q\n",
        placement.width, placement.height, placement.x, placement.y
    );
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width),
            Object::Real(page_height),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}
