// src/encode/llc/encoder.rs

use super::color::forward_rgb;
use super::context::{fold_context, Neighborhood, ScanPos};
use super::header::{ImageHeader, HEADER_LEN};
use super::num_coder::put_symbol;
use super::rows::RowRing;
use crate::encode::params::CodecParams;
use crate::encode::rc::{ContextModel, RangeEncoder};
use crate::image::image_formats::RawImage;
use crate::utils::error::Result;
use crate::utils::progress::{YieldCounter, YieldHook};
use log::debug;
use std::io::Write;

/// Compresses [`RawImage`]s into self-describing streams.
///
/// Every call starts from a fresh context model; nothing carries over between
/// images.
#[derive(Debug, Clone, Default)]
pub struct ImageEncoder {
    params: CodecParams,
}

impl ImageEncoder {
    pub fn new(params: CodecParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CodecParams {
        &self.params
    }

    /// Encodes `image` into a new buffer.
    pub fn encode(&self, image: &RawImage, hook: &mut dyn YieldHook) -> Result<Vec<u8>> {
        // Smooth images usually land well under half the raw size.
        let capacity = HEADER_LEN + image.row_bytes() * image.height() as usize / 2;
        let out = self.encode_to(image, Vec::with_capacity(capacity), hook)?;
        Ok(out)
    }

    /// Writes the header and coded payload for `image` to `writer`, returning
    /// the writer once the stream is complete.
    pub fn encode_to<W: Write>(
        &self,
        image: &RawImage,
        mut writer: W,
        hook: &mut dyn YieldHook,
    ) -> Result<W> {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let channels = image.channels() as usize;

        // RawImage guarantees both dimensions fit in 16 bits.
        let header = ImageHeader::new(image.channels(), image.width() as u16, image.height() as u16);
        header.write_to(&mut writer)?;

        debug!(
            "encoding {}x{} image, {} channels, {:?} model",
            width, height, channels, self.params.model_size
        );

        let mut coder = RangeEncoder::new(writer);
        let mut model = ContextModel::with_size(self.params.model_size);
        let extended = self.params.model_size.is_extended();
        let mut rows = RowRing::new(width * channels);
        let mut yields = YieldCounter::new(self.params.yield_period, header.pixel_count());

        for y in 0..height {
            let src = image.row(y as u32);
            let (cur, prev, prev2) = rows.lines_mut(y);

            for x in 0..width {
                let base = x * channels;
                let px = &src[base..base + channels];

                // The whole pixel is transformed before any channel is coded.
                cur[base..base + 3].copy_from_slice(&forward_rgb(px[0], px[1], px[2]));
                for i in 3..channels {
                    cur[base + i] = px[i] as i16;
                }

                let pos = ScanPos { x, y, width, channels };
                for i in 0..channels {
                    let n = Neighborhood::gather(cur, prev, prev2, pos, i);
                    let (ctx, mirrored) = fold_context(n.context_hash(extended));
                    let mut diff = cur[base + i] as i32 - n.predict();
                    if mirrored {
                        diff = -diff;
                    }
                    put_symbol(diff, true, &mut |bitpos, bit| {
                        coder.put(bit, model.p(ctx, bitpos))?;
                        model.update(ctx, bitpos, bit);
                        Ok(())
                    })?;
                }

                yields.tick(hook);
            }
        }

        coder.close()?;
        debug!("encoded payload: {} bytes", coder.bytes_written());
        coder.finish()
    }
}
