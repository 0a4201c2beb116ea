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

//! Alignment laws and wire-format constants.

/// Presence marker for an optional value whose payload follows out-of-line.
/// Anything else in a presence slot means the value is absent (canonically,
/// all zeros).
pub const ALLOC_PRESENT: u64 = u64::MAX;
/// A present handle slot in encoded inline bytes.
pub const HANDLE_PRESENT: u32 = u32::MAX;

/// Width of an encoded handle slot.
pub const HANDLE_SIZE: usize = 4;
/// Width of a presence word; also the inline size of any pointer-shaped slot.
pub const POINTER_SIZE: usize = 8;
/// Inline size of a vector or string header: count, presence.
pub const VECTOR_HEADER_SIZE: usize = 16;
/// Inline size of a v1 extensible-union slot: tag, zero pad, envelope.
pub const EXTENSIBLE_UNION_INLINE_SIZE: usize = 24;

/// How deeply the walker recurses before failing with
/// `MessageIsTooDeeplyNested`. Messages and descriptor trees arrive from
/// outside the process, and the walker is recursive; the limit bounds stack
/// use the same way a reader's nesting limit does.
pub const NESTING_LIMIT: i32 = 64;

/// Out-of-line objects begin at `ALIGNMENT`-aligned offsets, and every
/// declared size rounds up to `ALIGNMENT` when claiming out-of-line space.
pub const ALIGNMENT: usize = 8;

#[inline]
pub fn align8(n: usize) -> usize {
    (n + ALIGNMENT - 1) & !(ALIGNMENT - 1)
}

#[inline]
pub fn align4(n: usize) -> usize {
    (n + 3) & !3
}

/// Stride of out-of-line collection elements: sizes below 3 stay natural,
/// sizes up to 4 round to the next 4-byte boundary, larger sizes round to 8.
/// This is the scalar alignment law of the wire format.
#[inline]
pub fn round_up_natural(size: usize) -> usize {
    if size < 3 {
        size
    } else if size <= 4 {
        align4(size)
    } else {
        align8(size)
    }
}
