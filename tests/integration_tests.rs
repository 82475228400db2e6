use image::{RgbImage, RgbaImage};
use pixrc::{
    CodecError, CodecParams, HEADER_LEN, ImageEncoder, ImageHeader, ModelSize, NoYield, Progress,
    RawImage, Rgb, Rgba,
};
use std::fs::File;
use std::io::BufWriter;
use tempfile::tempdir;

/// Deterministic byte noise (xorshift32).
fn noise(len: usize, mut seed: u32) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            (seed >> 24) as u8
        })
        .collect()
}

fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            img.put_pixel(x, y, image::Rgb([r, g, b]));
        }
    }
    img
}

#[test]
fn test_encode_decode_roundtrip() {
    let img = gradient_rgb(100, 100);
    let raw = RawImage::new(100, 100, 3, img.into_raw()).expect("Failed to wrap pixels");

    let encoded = pixrc::encode(&raw).expect("Failed to encode image");
    assert_eq!(&encoded[..2], &[0x77, 3]);
    assert!(
        encoded.len() < raw.as_bytes().len() / 2,
        "gradient should compress well, got {} bytes",
        encoded.len()
    );

    let decoded = pixrc::decode(&encoded).expect("Failed to decode image");
    assert_eq!(decoded, raw);
}

#[test]
fn test_rgba_roundtrip_keeps_alpha() {
    let mut img = RgbaImage::new(37, 23);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let a = if (x / 4 + y / 4) % 2 == 0 { 255 } else { (x * 7) as u8 };
        *px = image::Rgba([(x * 6) as u8, (y * 11) as u8, 200, a]);
    }
    let raw = RawImage::new(37, 23, 4, img.into_raw()).unwrap();

    for size in [ModelSize::Compact, ModelSize::Extended] {
        let params = CodecParams::new().with_model_size(size);
        let encoded = pixrc::encode_with(&raw, &params, &mut NoYield).unwrap();
        assert_eq!(encoded[1], 4);
        let decoded = pixrc::decode_with(&encoded, &params, &mut NoYield).unwrap();
        assert_eq!(decoded, raw, "{size:?}");
    }
}

#[test]
fn test_rgba_pixel_slice_roundtrip() {
    let pixels: Vec<Rgba> = (0..64u8).map(|i| Rgba::new(i, 255 - i, i / 2, i * 4)).collect();
    let raw = RawImage::from_rgba_pixels(8, 8, &pixels).unwrap();
    let decoded = pixrc::decode(&pixrc::encode(&raw).unwrap()).unwrap();
    assert_eq!(decoded.pixel(7, 7), &[63, 192, 31, 252]);
    assert_eq!(decoded, raw);
}

#[test]
fn test_strided_input_decodes_packed() {
    let packed = RawImage::from_fn(9, 5, |x, y| Rgb::new((x * 20) as u8, (y * 40) as u8, 77)).unwrap();

    let stride = 9 * 3 + 5;
    let mut data = vec![0xEEu8; stride * 5];
    for y in 0..5u32 {
        let start = y as usize * stride;
        data[start..start + 27].copy_from_slice(packed.row(y));
    }
    let strided = RawImage::with_stride(9, 5, 3, stride, data).unwrap();

    let a = pixrc::encode(&strided).unwrap();
    let b = pixrc::encode(&packed).unwrap();
    assert_eq!(a, b, "stride padding must not reach the stream");

    let decoded = pixrc::decode(&a).unwrap();
    assert_eq!(decoded.stride(), 27);
    assert_eq!(decoded, packed);
    assert_eq!(strided.to_packed(), packed);
}

#[test]
fn test_degenerate_shapes() {
    for (w, h) in [(1, 1), (1, 17), (17, 1), (2, 2), (3, 1)] {
        let raw = RawImage::new(w, h, 3, noise((w * h * 3) as usize, w * 31 + h)).unwrap();
        let decoded = pixrc::decode(&pixrc::encode(&raw).unwrap()).unwrap();
        assert_eq!(decoded, raw, "{w}x{h}");
    }
}

#[test]
fn test_extreme_colors_roundtrip() {
    // Saturated primaries push the chroma residuals to their widest range.
    let palette = [
        Rgb::new(255, 0, 255),
        Rgb::new(0, 255, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(0, 0, 0),
        Rgb::new(255, 0, 0),
        Rgb::new(0, 0, 255),
    ];
    let raw = RawImage::from_fn(13, 11, |x, y| palette[((x * 5 + y * 3) % 6) as usize]).unwrap();
    assert_eq!(pixrc::decode(&pixrc::encode(&raw).unwrap()).unwrap(), raw);
}

#[test]
fn test_small_gradient_compresses() {
    let raw = RawImage::from_fn(4, 4, |x, y| Rgb::gray(96 + 2 * (x + y) as u8)).unwrap();
    let encoded = pixrc::encode(&raw).unwrap();
    assert!(
        encoded.len() < raw.as_bytes().len(),
        "{} bytes for {} raw",
        encoded.len(),
        raw.as_bytes().len()
    );
    let expected: [u8; 23] = [
        0x77, 0x03, 0x04, 0x00, 0x04, 0x00, 0x82, 0x5b, 0xa2, 0xcc, 0xfb, 0x88, 0xa1, 0x2f, 0xd8,
        0x3b, 0x9e, 0xff, 0xb6, 0x85, 0x06, 0xf8, 0x62,
    ];
    assert_eq!(encoded, expected);
    assert_eq!(pixrc::decode(&encoded).unwrap(), raw);
}

#[test]
fn test_noise_expansion_is_bounded() {
    let raw = RawImage::new(4, 4, 3, noise(48, 0x1234_5678)).unwrap();
    let encoded = pixrc::encode(&raw).unwrap();
    assert!(
        encoded.len() <= HEADER_LEN + 3 * 48,
        "{} bytes for 48 raw",
        encoded.len()
    );
    assert_eq!(pixrc::decode(&encoded).unwrap(), raw);

    let raw = RawImage::new(64, 64, 3, noise(64 * 64 * 3, 42)).unwrap();
    let encoded = pixrc::encode(&raw).unwrap();
    assert!(encoded.len() <= 2 * raw.as_bytes().len(), "{} bytes", encoded.len());
    assert_eq!(pixrc::decode(&encoded).unwrap(), raw);
}

#[test]
fn test_header_only_stream_decodes_full_size() {
    let raw = RawImage::new(16, 8, 4, noise(16 * 8 * 4, 7)).unwrap();
    let encoded = pixrc::encode(&raw).unwrap();

    let decoded = pixrc::decode(&encoded[..HEADER_LEN]).expect("truncation is not an error");
    assert_eq!((decoded.width(), decoded.height(), decoded.channels()), (16, 8, 4));
    assert_eq!(decoded.as_bytes().len(), 16 * 8 * 4);

    let partial = pixrc::decode(&encoded[..encoded.len() / 2]).unwrap();
    assert_eq!(partial.as_bytes().len(), 16 * 8 * 4);
    // Pixels coded before the cut are intact.
    assert_eq!(partial.row(0), raw.row(0));
}

#[test]
fn test_malformed_streams() {
    assert!(matches!(
        pixrc::decode(&[0x00, 3, 1, 0, 1, 0]),
        Err(CodecError::InvalidMagic(0x00))
    ));
    assert!(matches!(
        pixrc::decode(&[0x77, 3, 1]),
        Err(CodecError::TruncatedHeader { len: 3 })
    ));
    assert!(matches!(
        pixrc::decode(&[0x77, 5, 1, 0, 1, 0]),
        Err(CodecError::UnsupportedChannelCount(5))
    ));
    assert!(matches!(
        RawImage::new(4, 4, 3, vec![0; 47]),
        Err(CodecError::DimensionMismatch { expected: 48, actual: 47 })
    ));
}

#[test]
fn test_header_peek() {
    let raw = RawImage::from_fn(300, 2, |x, _| Rgb::gray(x as u8)).unwrap();
    let encoded = pixrc::encode(&raw).unwrap();
    let header = ImageHeader::read_from(&encoded).unwrap();
    assert_eq!(header, ImageHeader::new(3, 300, 2));
}

#[test]
fn test_encode_through_file() {
    let img = gradient_rgb(48, 32);
    let raw = RawImage::new(48, 32, 3, img.into_raw()).unwrap();

    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("gradient.llc");
    {
        let file = File::create(&path).expect("Failed to create stream file");
        let encoder = ImageEncoder::default();
        let writer = encoder
            .encode_to(&raw, BufWriter::new(file), &mut NoYield)
            .expect("Failed to encode to file");
        writer.into_inner().expect("Failed to flush stream file");
    }

    let bytes = std::fs::read(&path).expect("Failed to read stream file");
    assert_eq!(bytes, pixrc::encode(&raw).unwrap());
    assert_eq!(pixrc::decode(&bytes).unwrap(), raw);
}

#[test]
fn test_decode_reports_progress() {
    let raw = RawImage::from_fn(30, 30, |x, y| Rgb::new(x as u8, y as u8, 0)).unwrap();
    let params = CodecParams::new().with_yield_period(Some(256));
    let encoded = pixrc::encode_with(&raw, &params, &mut NoYield).unwrap();

    let mut seen = Vec::new();
    let decoded = pixrc::decode_with(&encoded, &params, &mut |p: Progress| seen.push(p.fraction())).unwrap();
    assert_eq!(decoded, raw);
    assert_eq!(seen.len(), 900 / 256);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}
