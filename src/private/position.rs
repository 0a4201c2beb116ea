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

//! Walker positions.

/// Where the walker stands in all four arenas at once: inline and
/// out-of-line offsets into the source, and the same pair for the
/// destination. Copied at each recursion step, never shared.
///
/// Handlers return a `Position` whose out-of-line offsets have advanced
/// past everything the subtree consumed in either buffer; inline offsets
/// come back unchanged, since parents advance inline themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub src_inline: usize,
    pub src_out_of_line: usize,
    pub dst_inline: usize,
    pub dst_out_of_line: usize,
}

impl Position {
    #[inline]
    pub fn advance_src_inline(self, n: usize) -> Self {
        Self {
            src_inline: self.src_inline + n,
            ..self
        }
    }

    #[inline]
    pub fn advance_dst_inline(self, n: usize) -> Self {
        Self {
            dst_inline: self.dst_inline + n,
            ..self
        }
    }

    #[inline]
    pub fn advance_src_out_of_line(self, n: usize) -> Self {
        Self {
            src_out_of_line: self.src_out_of_line + n,
            ..self
        }
    }

    #[inline]
    pub fn advance_dst_out_of_line(self, n: usize) -> Self {
        Self {
            dst_out_of_line: self.dst_out_of_line + n,
            ..self
        }
    }

    /// Carries over the out-of-line progress a recursive call made while
    /// keeping this position's inline offsets.
    #[inline]
    pub fn with_out_of_line_from(self, other: Position) -> Self {
        Self {
            src_out_of_line: other.src_out_of_line,
            dst_out_of_line: other.dst_out_of_line,
            ..self
        }
    }
}
