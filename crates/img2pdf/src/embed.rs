//! Image embedding into PDF image XObjects
//!
//! JPEG data goes into the document unchanged behind a DCTDecode filter; PNG
//! data is decoded and re-packed as zlib-compressed raw pixels behind
//! FlateDecode, with alpha flattened onto white.

use std::io::{Cursor, Write};

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::ImageReader;
use lopdf::{Dictionary, Object, Stream};

use crate::compress::flatten_onto_white;
use crate::types::{ConvertError, ImageKind, Result};

const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];
const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// An image prepared for embedding, with its intrinsic pixel dimensions
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub color_space: &'static str,
    pub bits_per_component: u8,
    pub filter: &'static str,
    pub data: Vec<u8>,
}

impl EmbeddedImage {
    pub fn from_bytes(kind: ImageKind, data: &[u8]) -> Result<Self> {
        match kind {
            ImageKind::Jpeg => Self::from_jpeg(data),
            ImageKind::Png => Self::from_png(data),
            ImageKind::Other => Err(ConvertError::Decode(
                "only JPEG and PNG can be embedded".to_string(),
            )),
        }
    }

    /// Embed JPEG data as-is. The frame header supplies the dimensions and
    /// component count; the compressed stream is never transcoded.
    pub fn from_jpeg(data: &[u8]) -> Result<Self> {
        if data.len() < JPEG_MAGIC.len() || data[..JPEG_MAGIC.len()] != JPEG_MAGIC {
            return Err(ConvertError::Decode("not a JPEG stream".to_string()));
        }

        let frame = parse_jpeg_frame_header(data)?;
        let color_space = match frame.components {
            1 => "DeviceGray",
            3 => "DeviceRGB",
            4 => "DeviceCMYK",
            n => {
                return Err(ConvertError::Decode(format!(
                    "unsupported JPEG component count: {n}"
                )));
            }
        };

        Ok(Self {
            width: frame.width,
            height: frame.height,
            color_space,
            bits_per_component: 8,
            filter: "DCTDecode",
            data: data.to_vec(),
        })
    }

    /// Decode PNG data and re-pack it as zlib-compressed raw pixels.
    pub fn from_png(data: &[u8]) -> Result<Self> {
        if data.len() < PNG_MAGIC.len() || data[..PNG_MAGIC.len()] != PNG_MAGIC {
            return Err(ConvertError::Decode("not a PNG stream".to_string()));
        }

        let decoded = ImageReader::with_format(Cursor::new(data), image::ImageFormat::Png)
            .decode()
            .map_err(|e| ConvertError::Decode(e.to_string()))?;
        let width = decoded.width();
        let height = decoded.height();

        let flattened = flatten_onto_white(decoded);
        let (raw, color_space) = if flattened.color().has_color() {
            (flattened.into_rgb8().into_raw(), "DeviceRGB")
        } else {
            (flattened.into_luma8().into_raw(), "DeviceGray")
        };

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&raw)?;
        let data = encoder.finish()?;

        Ok(Self {
            width,
            height,
            color_space,
            bits_per_component: 8,
            filter: "FlateDecode",
            data,
        })
    }

    /// Build the lopdf image XObject stream.
    pub fn into_stream(self) -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", Object::Integer(self.width as i64));
        dict.set("Height", Object::Integer(self.height as i64));
        dict.set(
            "ColorSpace",
            Object::Name(self.color_space.as_bytes().to_vec()),
        );
        dict.set(
            "BitsPerComponent",
            Object::Integer(self.bits_per_component as i64),
        );
        dict.set("Filter", Object::Name(self.filter.as_bytes().to_vec()));
        Stream::new(dict, self.data)
    }
}

struct JpegFrameHeader {
    width: u32,
    height: u32,
    components: u8,
}

/// Scan JPEG markers for the start-of-frame segment.
///
/// SOF layout after the 2-byte marker: segment length (2), precision (1),
/// height (2), width (2), component count (1).
fn parse_jpeg_frame_header(data: &[u8]) -> Result<JpegFrameHeader> {
    let mut i = 2;
    while i + 9 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];

        // SOF0-SOF15, excluding DHT (C4), JPG (C8) and DAC (CC)
        if (0xC0..=0xCF).contains(&marker) && marker != 0xC4 && marker != 0xC8 && marker != 0xCC {
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
            let components = data[i + 9];
            return Ok(JpegFrameHeader {
                width,
                height,
                components,
            });
        }

        if i + 4 < data.len() {
            let length = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            if length < 2 {
                break;
            }
            i += 2 + length;
        } else {
            break;
        }
    }

    Err(ConvertError::Decode(
        "no JPEG frame header found".to_string(),
    ))
}
