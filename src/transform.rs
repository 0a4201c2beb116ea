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

//! Top-level transformation of whole encoded messages.

use crate::coding::Type;
use crate::private::walker::Walker;
use crate::{Error, ErrorKind, Result};

/// Maximum size of an encoded message on the underlying transport. Callers
/// usually size destination buffers to this bound.
pub const MAX_MESSAGE_BYTES: usize = 65536;

/// Which dialect the source message is in and which to produce.
///
/// The discriminants are the wire-protocol transformation codes, so a
/// dispatcher holding a raw code can go through `TryFrom<u64>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Direction {
    /// Source and destination dialects agree; nothing to do.
    None = 0,
    /// The source is v1-encoded; produce the old encoding.
    V1ToOld = 1,
    /// The source is old-encoded; produce the v1 encoding.
    OldToV1 = 2,
}

impl TryFrom<u64> for Direction {
    type Error = Error;

    fn try_from(raw: u64) -> Result<Self> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::V1ToOld),
            2 => Ok(Self::OldToV1),
            other => Err(Error::from_kind(ErrorKind::UnknownTransformation(other))),
        }
    }
}

/// Transcodes the encoded message in `src` into `dst`, rewriting every
/// union between its inline and enveloped layouts, and returns the number
/// of destination bytes the transformed message occupies.
///
/// `root` is the coding table of the message's type in the **source**
/// dialect and must describe a struct. The source is never modified; the
/// destination must be large enough for the transformed message (callers
/// typically give it [`MAX_MESSAGE_BYTES`]). On failure the destination is
/// left partially written.
///
/// `Direction::None` writes nothing and returns 0; callers wanting an
/// identity copy should `copy_from_slice`.
///
/// ```
/// use wireshift::coding::{StructField, StructType, Type};
/// use wireshift::transform::{transform, Direction};
///
/// // A struct of two u64 words has no interesting content, so its two
/// // dialect layouts agree byte for byte.
/// static POINT_OLD: Type = Type::Struct(StructType {
///     fields: &[StructField { ty: None, offset: 16, padding: 0, alt: None }],
///     inline_size: 16,
///     alt: Some(&POINT_V1),
/// });
/// static POINT_V1: Type = Type::Struct(StructType {
///     fields: &[StructField { ty: None, offset: 16, padding: 0, alt: None }],
///     inline_size: 16,
///     alt: Some(&POINT_OLD),
/// });
///
/// let src = [0x11u8; 16];
/// let mut dst = [0u8; 16];
/// let len = transform(Direction::OldToV1, &POINT_OLD, &src, &mut dst)?;
/// assert_eq!(len, 16);
/// assert_eq!(dst, src);
/// # Ok::<(), wireshift::Error>(())
/// ```
pub fn transform(direction: Direction, root: &Type, src: &[u8], dst: &mut [u8]) -> Result<usize> {
    match direction {
        Direction::None => Ok(0),
        Direction::V1ToOld | Direction::OldToV1 => Walker::new(direction, src, dst).run(root),
    }
}
