//! Run-length encoded Radiance scanlines.
//!
//! A scanline starting with `2, 2, hi, lo` (`hi < 128`) uses the per-channel
//! encoding: each of the four channels is a sequence of runs (`count | 0x80`,
//! value) and literal spans (`count`, bytes). Anything else is the older
//! encoding, where a `1, 1, 1, n` pixel repeats the previous pixel; consecutive
//! repeat pixels form the count as successive bytes, least significant first.

use super::rgbe::Rgbe;
use alloc::vec::Vec;
use likely_stable::unlikely;
use texcodec_texture_common::{DecodeError, DecodeResult};

/// Cursor over the pixel data that follows the header.
#[derive(Debug, Clone)]
pub struct ScanlineReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ScanlineReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    fn take(&mut self, len: usize) -> DecodeResult<&'a [u8]> {
        if unlikely(self.remaining() < len) {
            return Err(DecodeError::TruncatedData {
                expected: len,
                actual: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline(always)]
    fn byte(&mut self) -> DecodeResult<u8> {
        Ok(self.take(1)?[0])
    }

    #[inline(always)]
    fn pixel(&mut self) -> DecodeResult<Rgbe> {
        let bytes = self.take(4)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

/// Decodes one scanline of `width` pixels into `row` (cleared first).
///
/// # Errors
///
/// - [`DecodeError::TruncatedData`] if the input ends inside the scanline.
/// - [`DecodeError::CorruptData`] if a run or literal span crosses the end of
///   the row, or the row cannot be allocated.
pub fn decode_scanline(
    reader: &mut ScanlineReader<'_>,
    width: usize,
    row: &mut Vec<Rgbe>,
) -> DecodeResult<()> {
    row.clear();
    row.try_reserve(width)
        .map_err(|_| DecodeError::CorruptData("HDR scanline does not fit in memory"))?;

    let first = reader.pixel()?;
    if first[0] == 2 && first[1] == 2 && first[2] < 128 {
        decode_channel_runs(reader, width, row)
    } else {
        row.push(first);
        decode_pixel_runs(reader, width, row)
    }
}

/// Per-channel encoding. The leading pixel was only a marker.
fn decode_channel_runs(
    reader: &mut ScanlineReader<'_>,
    width: usize,
    row: &mut Vec<Rgbe>,
) -> DecodeResult<()> {
    // Every channel costs at least 2 bytes per 127 pixels.
    let minimum = width.div_ceil(127).saturating_mul(8);
    if unlikely(reader.remaining() < minimum) {
        return Err(DecodeError::TruncatedData {
            expected: minimum,
            actual: reader.remaining(),
        });
    }

    row.resize(width, [0; 4]);
    for channel in 0..4 {
        let mut x = 0;
        while x < width {
            let control = reader.byte()?;
            if control > 128 {
                let count = usize::from(control & 0x7F);
                let value = reader.byte()?;
                let span = row
                    .get_mut(x..x + count)
                    .ok_or(DecodeError::CorruptData("HDR run crosses the end of the scanline"))?;
                for pixel in span {
                    pixel[channel] = value;
                }
                x += count;
            } else {
                let count = usize::from(control);
                let span = row
                    .get_mut(x..x + count)
                    .ok_or(DecodeError::CorruptData("HDR literal crosses the end of the scanline"))?;
                for (pixel, &value) in span.iter_mut().zip(reader.take(count)?) {
                    pixel[channel] = value;
                }
                x += count;
            }
        }
    }
    Ok(())
}

/// Older encoding. `row` already holds the first pixel.
fn decode_pixel_runs(
    reader: &mut ScanlineReader<'_>,
    width: usize,
    row: &mut Vec<Rgbe>,
) -> DecodeResult<()> {
    let mut shift = 0u32;
    while row.len() < width {
        let pixel = reader.pixel()?;
        if pixel[0] == 1 && pixel[1] == 1 && pixel[2] == 1 {
            let count = run_length(pixel[3], shift)?;
            if unlikely(count > width - row.len()) {
                return Err(DecodeError::CorruptData(
                    "HDR run crosses the end of the scanline",
                ));
            }
            let previous = row[row.len() - 1];
            row.resize(row.len() + count, previous);
            shift = shift.saturating_add(8);
        } else {
            row.push(pixel);
            shift = 0;
        }
    }
    Ok(())
}

/// `count << shift`, rejecting lengths that do not fit.
#[inline]
fn run_length(count: u8, shift: u32) -> DecodeResult<usize> {
    let count = usize::from(count);
    if count == 0 {
        return Ok(0);
    }
    count
        .checked_shl(shift)
        .filter(|&length| length >> shift == count)
        .ok_or(DecodeError::CorruptData("HDR run length overflows"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn decode(data: &[u8], width: usize) -> DecodeResult<Vec<Rgbe>> {
        let mut row = Vec::new();
        decode_scanline(&mut ScanlineReader::new(data), width, &mut row)?;
        Ok(row)
    }

    #[test]
    fn channel_runs_mix_runs_and_literals() {
        let data = [
            2, 2, 0, 5, // marker
            0x85, 10, // red: run of 5
            3, 1, 2, 3, 2, 4, 5, // green: literals
            0x82, 7, 0x83, 8, // blue: two runs
            0x85, 128, // exponent
        ];
        let row = decode(&data, 5).unwrap();
        assert_eq!(
            row,
            vec![
                [10, 1, 7, 128],
                [10, 2, 7, 128],
                [10, 3, 8, 128],
                [10, 4, 8, 128],
                [10, 5, 8, 128],
            ]
        );
    }

    #[test]
    fn channel_run_past_row_end_is_corrupt() {
        let data = [2, 2, 0, 2, 0x83, 1, 0x82, 1, 0x82, 1, 0x82, 1];
        assert!(matches!(decode(&data, 2), Err(DecodeError::CorruptData(_))));
    }

    #[test]
    fn channel_literal_past_row_end_is_corrupt() {
        let data = [2, 2, 0, 2, 3, 1, 2, 3, 0x82, 1, 0x82, 1, 0x82, 1];
        assert!(matches!(decode(&data, 2), Err(DecodeError::CorruptData(_))));
    }

    #[test]
    fn pixel_runs_repeat_previous_pixel() {
        let data = [
            9, 8, 7, 130, // literal
            1, 1, 1, 3, // repeat 3 times
            4, 5, 6, 131, // literal
        ];
        let row = decode(&data, 5).unwrap();
        assert_eq!(
            row,
            vec![[9, 8, 7, 130], [9, 8, 7, 130], [9, 8, 7, 130], [9, 8, 7, 130], [4, 5, 6, 131]]
        );
    }

    #[test]
    fn consecutive_pixel_runs_shift_the_count() {
        // 1 + (1 << 0) + (1 << 8)
        let data = [9, 9, 9, 128, 1, 1, 1, 1, 1, 1, 1, 1];
        let row = decode(&data, 258).unwrap();
        assert_eq!(row.len(), 258);
        assert!(row.iter().all(|&pixel| pixel == [9, 9, 9, 128]));
    }

    #[test]
    fn literal_pixel_resets_the_shift() {
        // run of 1, literal, run of 2: the second run is not shifted
        let data = [3, 3, 3, 128, 1, 1, 1, 1, 5, 5, 5, 128, 1, 1, 1, 2];
        let row = decode(&data, 5).unwrap();
        assert_eq!(row[1], [3, 3, 3, 128]);
        assert_eq!(&row[2..], &[[5, 5, 5, 128]; 3]);
    }

    #[test]
    fn pixel_run_past_row_end_is_corrupt() {
        let data = [9, 9, 9, 128, 1, 1, 1, 4];
        assert!(matches!(decode(&data, 4), Err(DecodeError::CorruptData(_))));
    }

    #[test]
    fn overflowing_run_length_is_corrupt() {
        let mut data = vec![9, 9, 9, 128];
        for _ in 0..10 {
            data.extend_from_slice(&[1, 1, 1, 0]);
        }
        data.extend_from_slice(&[1, 1, 1, 1]);
        assert!(matches!(decode(&data, 4), Err(DecodeError::CorruptData(_))));
    }

    #[rstest]
    #[case::channel_runs(&[2, 2, 0, 4, 0x84, 1, 0x84, 2, 0x84, 3, 0x84, 4])]
    #[case::pixel_runs(&[9, 9, 9, 128, 1, 1, 1, 3])]
    fn every_truncation_is_reported(#[case] data: &[u8]) {
        assert!(decode(data, 4).is_ok());
        for len in 0..data.len() {
            assert!(
                matches!(decode(&data[..len], 4), Err(DecodeError::TruncatedData { .. })),
                "len {len}"
            );
        }
    }
}
