// src/encode/llc/decoder.rs

use super::color::{clamp_u8, inverse_rgb};
use super::context::{fold_context, Neighborhood, ScanPos};
use super::header::{ImageHeader, HEADER_LEN};
use super::num_coder::get_symbol;
use super::rows::RowRing;
use crate::encode::params::CodecParams;
use crate::encode::rc::{ContextModel, RangeDecoder, SliceSource};
use crate::image::image_formats::RawImage;
use crate::utils::error::Result;
use crate::utils::progress::{YieldCounter, YieldHook};
use log::{debug, warn};

/// Zero bytes a complete stream still makes the decoder read: the encoder
/// never writes its final byte.
const IMPLICIT_TAIL: usize = 1;

/// Reconstructs [`RawImage`]s from streams produced by
/// [`ImageEncoder`](super::encoder::ImageEncoder).
#[derive(Debug, Clone, Default)]
pub struct ImageDecoder {
    params: CodecParams,
}

impl ImageDecoder {
    pub fn new(params: CodecParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CodecParams {
        &self.params
    }

    /// Decodes a complete stream into a tightly packed image.
    ///
    /// A payload that ends early is not an error. Missing bytes read as zero
    /// and the affected pixels come out as whatever those zeros decode to.
    ///
    /// The output buffer is sized from the header alone (up to 65535 x 65535 x 4
    /// bytes) before any payload is read.
    pub fn decode(&self, data: &[u8], hook: &mut dyn YieldHook) -> Result<RawImage> {
        let header = ImageHeader::read_from(data)?;
        let width = header.width as usize;
        let height = header.height as usize;
        let channels = header.channels as usize;

        debug!(
            "decoding {}x{} image, {} channels, {:?} model",
            width, height, channels, self.params.model_size
        );

        let mut image = RawImage::blank(header.width as u32, header.height as u32, header.channels);
        let mut coder = RangeDecoder::new(SliceSource::new(&data[HEADER_LEN..]));
        let mut model = ContextModel::with_size(self.params.model_size);
        let extended = self.params.model_size.is_extended();
        let mut rows = RowRing::new(width * channels);
        let mut yields = YieldCounter::new(self.params.yield_period, header.pixel_count());

        for y in 0..height {
            let (cur, prev, prev2) = rows.lines_mut(y);
            let dst = image.row_mut(y as u32);

            for x in 0..width {
                let base = x * channels;
                let pos = ScanPos { x, y, width, channels };

                for i in 0..channels {
                    let n = Neighborhood::gather(cur, prev, prev2, pos, i);
                    let (ctx, mirrored) = fold_context(n.context_hash(extended));
                    let mut diff = get_symbol(true, &mut |bitpos| {
                        let bit = coder.get(model.p(ctx, bitpos));
                        model.update(ctx, bitpos, bit);
                        bit
                    })?;
                    if mirrored {
                        diff = diff.wrapping_neg();
                    }
                    cur[base + i] = n.predict().wrapping_add(diff) as i16;
                }

                let rgb = inverse_rgb([cur[base], cur[base + 1], cur[base + 2]]);
                dst[base..base + 3].copy_from_slice(&rgb);
                for i in 3..channels {
                    dst[base + i] = clamp_u8(cur[base + i] as i32);
                }

                yields.tick(hook);
            }
        }

        let consumed = coder.source().position();
        let overrun = coder.overrun();
        if overrun > IMPLICIT_TAIL {
            warn!(
                "payload ended {} bytes early; trailing pixels are unreliable",
                overrun - IMPLICIT_TAIL
            );
        }
        debug!("decoded payload: {} of {} bytes consumed", consumed, data.len() - HEADER_LEN);
        Ok(image)
    }
}
