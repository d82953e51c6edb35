//! Still image decoding via the `image` crate.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use super::DecodeError;
use crate::sequence::Frame;

/// Sniff the container format from the file content.
///
/// Returns `None` when the bytes do not match any known signature.
pub(super) fn sniff_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// Decode a still image from bytes into an RGBA frame.
///
/// Animated inputs yield their first frame.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format is not recognized.
/// Returns `DecodeError::Corrupt` if the image data is damaged.
pub fn decode_still(bytes: &[u8]) -> Result<Frame, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat);
    }

    let img = reader.decode()?;
    Ok(Frame::from_rgba_image(img.into_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_png_preserves_alpha() {
        let mut img = RgbaImage::from_pixel(5, 4, Rgba([10, 20, 30, 255]));
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));

        let frame = decode_still(&png_bytes(&img)).unwrap();
        assert_eq!((frame.width, frame.height), (5, 4));
        assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(frame.pixel(4, 3), Some([10, 20, 30, 255]));
    }

    #[test]
    fn test_decode_garbage_is_unsupported() {
        let result = decode_still(b"definitely not an image");
        assert!(matches!(result, Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_decode_empty_is_unsupported() {
        assert!(matches!(decode_still(&[]), Err(DecodeError::UnsupportedFormat)));
    }

    #[test]
    fn test_decode_truncated_png_is_corrupt() {
        let img = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 255]));
        let bytes = png_bytes(&img);
        let result = decode_still(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::Corrupt(_)) | Err(DecodeError::Io(_))));
    }

    #[test]
    fn test_sniff_format() {
        let img = RgbaImage::new(1, 1);
        assert_eq!(sniff_format(&png_bytes(&img)), Some(ImageFormat::Png));
        assert_eq!(sniff_format(b"GIF89a......"), Some(ImageFormat::Gif));
        assert_eq!(sniff_format(b"nope"), None);
    }
}
