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

//! # wireshift
//!
//! Transcoding of encoded IPC messages between two layout dialects of the
//! same schema-driven wire format: the *old* dialect, where tagged unions are
//! carried inline as a tag followed by data padded to the largest arm, and
//! the *v1* dialect, where the same logical unions are carried as a tagged
//! envelope pointing to an out-of-line payload.
//!
//! The walk is guided by [`coding`] tables — immutable descriptions of each
//! wire type emitted ahead of time by the schema compiler — and driven by a
//! single entry point, [`transform::transform`]. The transformer borrows both
//! buffers from the caller and never allocates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod coding;
pub mod transform;

mod private;

/// Things that can go wrong while transforming a message.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The root type of a transformation must be a struct.
    RootTypeMustBeAStruct,

    /// The direction code does not name a known transformation.
    UnknownTransformation(u64),

    /// Tables and extensible unions keep the same layout in every dialect
    /// and cannot appear in a transformation.
    TypeCannotBeTransformed,

    /// An extensible-union tag matched none of the union's arms.
    UnknownUnionOrdinal(u32),

    /// A union tag was zero or exceeded the number of arms.
    UnionTagOutOfRange(u32),

    /// The source buffer ended before the message did.
    MessageEndsPrematurely,

    /// A vector's element count overflows the addressable range.
    ElementCountOverflow,

    /// Message is too deeply nested.
    MessageIsTooDeeplyNested,

    /// The coding table is structurally invalid (missing dialect twin,
    /// mismatched arms, bad data offset).
    InvalidCodingTable,

    /// The transformed message does not fit in the destination buffer.
    DestinationBufferTooSmall,
}

impl ErrorKind {
    /// Static diagnostic for this kind of failure.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            Self::RootTypeMustBeAStruct => "root type of a transformation must be a struct",
            Self::UnknownTransformation(_) => "unknown transformation",
            Self::TypeCannotBeTransformed => "tables and extensible unions cannot be transformed",
            Self::UnknownUnionOrdinal(_) => "extensible-union ordinal matches no arm",
            Self::UnionTagOutOfRange(_) => "union tag matches no arm",
            Self::MessageEndsPrematurely => "message ends prematurely",
            Self::ElementCountOverflow => "vector element count overflows the addressable range",
            Self::MessageIsTooDeeplyNested => "message is too deeply nested",
            Self::InvalidCodingTable => "coding table is structurally invalid",
            Self::DestinationBufferTooSmall => "destination buffer is too small",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::UnknownTransformation(code) => {
                write!(fmt, "{}: {}", self.diagnostic(), code)
            }
            Self::UnknownUnionOrdinal(ordinal) => {
                write!(fmt, "{}: {:#010x}", self.diagnostic(), ordinal)
            }
            Self::UnionTagOutOfRange(tag) => write!(fmt, "{}: {}", self.diagnostic(), tag),
            _ => fmt.write_str(self.diagnostic()),
        }
    }
}

/// A failed transformation.
///
/// Any failure aborts the traversal; the partially written destination is
/// left in whatever state it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
}

impl Error {
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.kind.fmt(fmt)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type returned by the transformer.
pub type Result<T> = core::result::Result<T, Error>;

/// An 8-byte, 8-byte-aligned region of memory.
///
/// Messages are plain byte slices as far as the transformer is concerned;
/// `Word` exists so that tests and fixtures can state wire bytes one aligned
/// word per line.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    raw_content: [u8; 8],
}

/// Constructs a word with the given bytes.
#[allow(clippy::too_many_arguments)]
pub const fn word(b0: u8, b1: u8, b2: u8, b3: u8, b4: u8, b5: u8, b6: u8, b7: u8) -> Word {
    Word {
        raw_content: [b0, b1, b2, b3, b4, b5, b6, b7],
    }
}

impl Word {
    pub fn words_to_bytes(words: &[Word]) -> &[u8] {
        unsafe { core::slice::from_raw_parts(words.as_ptr() as *const u8, words.len() * 8) }
    }
}
