//! Byte streams the decoders pull their input from.
//!
//! Decoders only ever need three things from their input: a bounded read, a read
//! of everything that is left, and a check whether anything is left at all.
//! [`TextureSource`] captures exactly that, so the decoders stay `no_std` while
//! still accepting any [`std::io::Read`] through [`ReadSource`].

use crate::error::{DecodeError, DecodeResult, DecodeWarning};
use alloc::vec::Vec;

/// A sequential byte stream.
pub trait TextureSource {
    /// Reads up to `len` bytes.
    ///
    /// Fewer than `len` bytes are returned only when the stream ends.
    fn read_bytes(&mut self, len: usize) -> DecodeResult<Vec<u8>>;

    /// Reads all remaining bytes.
    fn read_to_end(&mut self) -> DecodeResult<Vec<u8>>;

    /// Returns `true` when no bytes remain.
    fn at_end(&mut self) -> DecodeResult<bool>;
}

/// A [`TextureSource`] over an in-memory slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The unread part of the slice.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl TextureSource for SliceSource<'_> {
    fn read_bytes(&mut self, len: usize) -> DecodeResult<Vec<u8>> {
        let remaining = self.remaining();
        let taken = &remaining[..len.min(remaining.len())];
        self.position += taken.len();
        Ok(taken.to_vec())
    }

    fn read_to_end(&mut self) -> DecodeResult<Vec<u8>> {
        let rest = self.remaining().to_vec();
        self.position = self.data.len();
        Ok(rest)
    }

    fn at_end(&mut self) -> DecodeResult<bool> {
        Ok(self.position >= self.data.len())
    }
}

/// A [`TextureSource`] over any [`std::io::Read`].
///
/// One byte of lookahead is kept so [`TextureSource::at_end`] can be answered
/// without a seekable stream.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    peeked: Option<u8>,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            peeked: None,
        }
    }

    /// Returns the wrapped reader, dropping any lookahead byte.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> TextureSource for ReadSource<R> {
    fn read_bytes(&mut self, len: usize) -> DecodeResult<Vec<u8>> {
        use std::io::Read;

        let mut buffer = Vec::new();
        if len == 0 {
            return Ok(buffer);
        }

        if let Some(byte) = self.peeked.take() {
            buffer.push(byte);
        }

        // Grows as data arrives; `len` comes from untrusted headers and is never preallocated.
        let wanted = (len - buffer.len()) as u64;
        (&mut self.inner).take(wanted).read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    fn read_to_end(&mut self) -> DecodeResult<Vec<u8>> {
        use std::io::Read;

        let mut buffer = Vec::new();
        if let Some(byte) = self.peeked.take() {
            buffer.push(byte);
        }
        self.inner.read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    fn at_end(&mut self) -> DecodeResult<bool> {
        if self.peeked.is_some() {
            return Ok(false);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(true),
                Ok(_) => {
                    self.peeked = Some(byte[0]);
                    return Ok(false);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Reads a fixed size header, failing with [`DecodeError::MalformedHeader`] when
/// the stream ends first.
pub fn read_header<const N: usize, S>(source: &mut S, what: &'static str) -> DecodeResult<[u8; N]>
where
    S: TextureSource + ?Sized,
{
    let bytes = source.read_bytes(N)?;
    if bytes.len() != N {
        return Err(DecodeError::MalformedHeader(what));
    }

    let mut header = [0u8; N];
    header.copy_from_slice(&bytes);
    Ok(header)
}

/// Reads exactly `len` payload bytes, failing with [`DecodeError::TruncatedData`]
/// when the stream ends first.
pub fn read_exact_or_truncated<S>(source: &mut S, len: usize) -> DecodeResult<Vec<u8>>
where
    S: TextureSource + ?Sized,
{
    let data = source.read_bytes(len)?;
    if data.len() < len {
        return Err(DecodeError::TruncatedData {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(data)
}

/// Records a [`DecodeWarning::TrailingData`] when bytes remain after the payload.
pub fn warn_on_trailing_data<S>(
    source: &mut S,
    container: &'static str,
    warnings: &mut Vec<DecodeWarning>,
) -> DecodeResult<()>
where
    S: TextureSource + ?Sized,
{
    if !source.at_end()? {
        log::warn!("Unrecognized data after the {container} payload");
        warnings.push(DecodeWarning::TrailingData);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(5, 5)]
    #[case(100, 5)]
    fn slice_source_reads_at_most_remaining(#[case] requested: usize, #[case] expected: usize) {
        let mut source = SliceSource::new(&[1, 2, 3, 4, 5]);
        assert_eq!(source.read_bytes(requested).unwrap().len(), expected);
        assert_eq!(source.position(), expected);
    }

    #[test]
    fn slice_source_reports_end() {
        let mut source = SliceSource::new(&[1, 2]);
        assert!(!source.at_end().unwrap());
        assert_eq!(source.read_to_end().unwrap(), vec![1, 2]);
        assert!(source.at_end().unwrap());
        assert!(source.read_bytes(4).unwrap().is_empty());
    }

    #[test]
    fn read_header_rejects_short_streams() {
        let mut source = SliceSource::new(&[1, 2, 3]);
        let result = read_header::<4, _>(&mut source, "test header");
        assert!(matches!(result, Err(DecodeError::MalformedHeader("test header"))));
    }

    #[test]
    fn read_exact_reports_truncation() {
        let mut source = SliceSource::new(&[1, 2, 3]);
        let result = read_exact_or_truncated(&mut source, 8);
        assert!(matches!(
            result,
            Err(DecodeError::TruncatedData {
                expected: 8,
                actual: 3
            })
        ));
    }

    #[test]
    fn trailing_data_is_a_warning() {
        let mut source = SliceSource::new(&[1, 2, 3]);
        let mut warnings = Vec::new();
        source.read_bytes(2).unwrap();
        warn_on_trailing_data(&mut source, "test", &mut warnings).unwrap();
        assert_eq!(warnings, vec![DecodeWarning::TrailingData]);

        source.read_to_end().unwrap();
        warnings.clear();
        warn_on_trailing_data(&mut source, "test", &mut warnings).unwrap();
        assert!(warnings.is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_source_keeps_lookahead_byte() {
        let data = [10u8, 20, 30, 40];
        let mut source = ReadSource::new(&data[..]);
        assert_eq!(source.read_bytes(1).unwrap(), vec![10]);
        assert!(!source.at_end().unwrap());
        assert_eq!(source.read_bytes(2).unwrap(), vec![20, 30]);
        assert!(!source.at_end().unwrap());
        assert_eq!(source.read_to_end().unwrap(), vec![40]);
        assert!(source.at_end().unwrap());
    }

    #[cfg(feature = "std")]
    #[test]
    fn read_source_short_read_only_at_end() {
        let data = [1u8, 2, 3];
        let mut source = ReadSource::new(&data[..]);
        assert!(!source.at_end().unwrap());
        assert_eq!(source.read_bytes(10).unwrap(), vec![1, 2, 3]);
        assert!(source.at_end().unwrap());
    }
}
