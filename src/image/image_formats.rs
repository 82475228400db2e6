// src/image/image_formats.rs

//! In-memory raw pixel buffers consumed and produced by the codec.
//!
//! `RawImage` is an interleaved 8-bit buffer described by width, height,
//! channel count and row stride. The `Rgb`/`Rgba` pixel types are `Pod`, so
//! slices of them can be viewed as plain bytes without copying.

use crate::utils::error::{CodecError, Result};
use bytemuck::{Pod, Zeroable};

// --- Pixel Type Definitions ---

/// A single RGB pixel with 8-bit components.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn gray(v: u8) -> Self {
        Rgb { r: v, g: v, b: v }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Rgb {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }
}

/// A single RGBA pixel with 8-bit components. Alpha is not decorrelated.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(arr: [u8; 4]) -> Self {
        Rgba {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }
}

// --- RawImage Type ---

/// An interleaved 8-bit image buffer.
///
/// Rows start every `stride` bytes; only the first `width * channels` bytes of
/// each row are samples. The last row may be short of a full stride.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImage {
    width: u32,
    height: u32,
    channels: u8,
    stride: usize,
    data: Vec<u8>,
}

impl RawImage {
    /// Creates a tightly packed image from raw interleaved samples.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let stride = width as usize * channels as usize;
        Self::with_stride(width, height, channels, stride, data)
    }

    /// Creates an image whose rows are `stride` bytes apart.
    ///
    /// `data` must hold exactly `stride * height` bytes, or one row's padding
    /// less when the final row is unpadded.
    pub fn with_stride(
        width: u32,
        height: u32,
        channels: u8,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        if channels != 3 && channels != 4 {
            return Err(CodecError::UnsupportedChannelCount(channels));
        }
        if width == 0 || height == 0 || width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(CodecError::InvalidDimensions { width, height });
        }
        let row_bytes = width as usize * channels as usize;
        if stride < row_bytes {
            return Err(CodecError::DimensionMismatch {
                expected: row_bytes,
                actual: stride,
            });
        }
        let expected = stride * (height as usize - 1) + row_bytes;
        let padded = stride * height as usize;
        if data.len() != expected && data.len() != padded {
            return Err(CodecError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(RawImage {
            width,
            height,
            channels,
            stride,
            data,
        })
    }

    /// Creates a 3-channel image from a row-major slice of pixels.
    pub fn from_rgb_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self> {
        Self::new(width, height, 3, bytemuck::cast_slice(pixels).to_vec())
    }

    /// Creates a 4-channel image from a row-major slice of pixels.
    pub fn from_rgba_pixels(width: u32, height: u32, pixels: &[Rgba]) -> Result<Self> {
        Self::new(width, height, 4, bytemuck::cast_slice(pixels).to_vec())
    }

    /// Creates a 3-channel image by calling a function for each pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Rgb,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::from_rgb_pixels(width, height, &pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of sample bytes in one row, excluding stride padding.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// The samples of row `y`, without padding.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.row_bytes()]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let len = self.row_bytes();
        &mut self.data[start..start + len]
    }

    /// The samples of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let start = y as usize * self.stride + x as usize * c;
        &self.data[start..start + c]
    }

    /// The underlying buffer, including any stride padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns a tightly packed copy of the samples (stride == row bytes).
    pub fn to_packed(&self) -> RawImage {
        if self.stride == self.row_bytes() && self.data.len() == self.row_bytes() * self.height as usize {
            return self.clone();
        }
        let mut data = Vec::with_capacity(self.row_bytes() * self.height as usize);
        for y in 0..self.height {
            data.extend_from_slice(self.row(y));
        }
        RawImage {
            width: self.width,
            height: self.height,
            channels: self.channels,
            stride: self.row_bytes(),
            data,
        }
    }

    /// A zero-filled, tightly packed image. Geometry must already be validated.
    pub(crate) fn blank(width: u32, height: u32, channels: u8) -> Self {
        let stride = width as usize * channels as usize;
        RawImage {
            width,
            height,
            channels,
            stride,
            data: vec![0; stride * height as usize],
        }
    }
}
