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

//! Little-endian accessors for the typed words of the wire format.
//!
//! Tags, presence markers, envelope counters and vector counts are the only
//! values the transformer reads with a type; everything else moves as bulk
//! bytes.

/// A value stored little-endian in the wire bytes. Callers bounds-check; the
/// slice handed in must hold at least `BYTES` bytes.
pub trait Endian: Sized + Copy {
    const BYTES: usize;

    /// Reads the value, swapping bytes on big-endian processors.
    fn get(bytes: &[u8]) -> Self;

    /// Writes the value, swapping bytes on big-endian processors.
    fn set(self, bytes: &mut [u8]);
}

macro_rules! endian_impl(
    ($typ:ty) => (
        impl Endian for $typ {
            const BYTES: usize = core::mem::size_of::<$typ>();

            #[inline]
            fn get(bytes: &[u8]) -> $typ {
                let mut raw = [0u8; core::mem::size_of::<$typ>()];
                raw.copy_from_slice(&bytes[..core::mem::size_of::<$typ>()]);
                <$typ>::from_le_bytes(raw)
            }

            #[inline]
            fn set(self, bytes: &mut [u8]) {
                bytes[..core::mem::size_of::<$typ>()].copy_from_slice(&self.to_le_bytes());
            }
        }
    );
);

endian_impl!(u32);
endian_impl!(u64);
