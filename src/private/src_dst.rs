// Copyright (c) 2026 the wireshift contributors
// Licensed under the MIT License:
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The two borrowed message buffers and the typed accessors over them.

use crate::private::endian::Endian;
use crate::{Error, ErrorKind, Result};

/// Read-only source and write-only destination of one transformation.
///
/// Tracks the highest destination offset written so far; that mark becomes
/// the returned message length. A write that begins beyond the mark first
/// zero-fills the gap, so bytes skipped for alignment come out canonical.
pub struct SrcDst<'s, 'd> {
    src: &'s [u8],
    dst: &'d mut [u8],
    dst_high_water: usize,
}

impl<'s, 'd> SrcDst<'s, 'd> {
    pub fn new(src: &'s [u8], dst: &'d mut [u8]) -> Self {
        Self {
            src,
            dst,
            dst_high_water: 0,
        }
    }

    /// Highest destination offset written so far.
    pub fn dst_len(&self) -> usize {
        self.dst_high_water
    }

    /// Reads a typed wire value at `offset` in the source.
    pub fn read<T: Endian>(&self, offset: usize) -> Result<T> {
        let end = self.checked_src_end(offset, T::BYTES)?;
        Ok(T::get(&self.src[offset..end]))
    }

    /// Copies `len` source bytes at `src_offset` to `dst_offset`.
    pub fn copy(&mut self, src_offset: usize, dst_offset: usize, len: usize) -> Result<()> {
        let src_end = self.checked_src_end(src_offset, len)?;
        self.reserve(dst_offset, len)?;
        self.dst[dst_offset..dst_offset + len].copy_from_slice(&self.src[src_offset..src_end]);
        Ok(())
    }

    /// Zero-fills `len` destination bytes at `offset`.
    pub fn pad(&mut self, offset: usize, len: usize) -> Result<()> {
        self.reserve(offset, len)?;
        self.dst[offset..offset + len].fill(0);
        Ok(())
    }

    /// Writes a typed wire value at `offset` in the destination.
    pub fn write<T: Endian>(&mut self, offset: usize, value: T) -> Result<()> {
        self.reserve(offset, T::BYTES)?;
        value.set(&mut self.dst[offset..offset + T::BYTES]);
        Ok(())
    }

    fn checked_src_end(&self, offset: usize, len: usize) -> Result<usize> {
        match offset.checked_add(len) {
            Some(end) if end <= self.src.len() => Ok(end),
            _ => Err(Error::from_kind(ErrorKind::MessageEndsPrematurely)),
        }
    }

    // Bounds-checks a destination write, zero-fills any gap between the
    // high-water mark and its start, and moves the mark.
    fn reserve(&mut self, offset: usize, len: usize) -> Result<()> {
        let end = match offset.checked_add(len) {
            Some(end) if end <= self.dst.len() => end,
            _ => return Err(Error::from_kind(ErrorKind::DestinationBufferTooSmall)),
        };
        if offset > self.dst_high_water {
            self.dst[self.dst_high_water..offset].fill(0);
        }
        if end > self.dst_high_water {
            self.dst_high_water = end;
        }
        Ok(())
    }
}
