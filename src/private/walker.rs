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

//! The transform driver: a recursive byte-walker over coding tables.
//!
//! Each handler reads from the source inline arena at its position, writes
//! the destination inline arena, and claims out-of-line space in both
//! buffers as it descends. Out-of-line offsets only ever grow, and every
//! out-of-line object starts 8-aligned.

use crate::coding::{StructType, Type, UnionType};
use crate::private::position::Position;
use crate::private::src_dst::SrcDst;
use crate::private::units::*;
use crate::transform::Direction;
use crate::{Error, ErrorKind, Result};

/// Inline size of a type in its own dialect. An absent descriptor stands
/// for a generic 8-byte slot.
pub fn inline_size(ty: Option<&Type>) -> usize {
    match ty {
        None => POINTER_SIZE,
        Some(Type::Primitive(p)) => p.size_in_bytes(),
        Some(Type::Enum(e)) => e.underlying.size_in_bytes(),
        Some(Type::Bits(b)) => b.underlying.size_in_bytes(),
        Some(Type::Struct(s)) => s.inline_size as usize,
        Some(Type::StructPointer(_)) => POINTER_SIZE,
        Some(Type::Union(u)) => u.inline_size as usize,
        Some(Type::ExtensibleUnion(_)) => EXTENSIBLE_UNION_INLINE_SIZE,
        Some(Type::Table(_)) => VECTOR_HEADER_SIZE,
        Some(Type::Array(a)) => {
            a.element_count as usize * (a.element_size as usize + a.element_padding as usize)
        }
        Some(Type::String(_)) | Some(Type::Vector(_)) => VECTOR_HEADER_SIZE,
        Some(Type::Handle(_)) => HANDLE_SIZE,
    }
}

fn invalid_table() -> Error {
    Error::from_kind(ErrorKind::InvalidCodingTable)
}

fn expect_struct(ty: Option<&'static Type>) -> Result<&'static StructType> {
    match ty {
        Some(Type::Struct(s)) => Ok(s),
        _ => Err(invalid_table()),
    }
}

fn expect_union(ty: Option<&'static Type>) -> Result<&'static UnionType> {
    match ty {
        Some(Type::Union(u)) => Ok(u),
        _ => Err(invalid_table()),
    }
}

/// One transformation in flight.
pub struct Walker<'s, 'd> {
    src_dst: SrcDst<'s, 'd>,
    direction: Direction,
    /// Present handle slots copied so far. Envelope emission snapshots this
    /// around the arm subtree to fill in `num_handles`.
    handles_seen: u32,
}

impl<'s, 'd> Walker<'s, 'd> {
    pub fn new(direction: Direction, src: &'s [u8], dst: &'d mut [u8]) -> Self {
        Self {
            src_dst: SrcDst::new(src, dst),
            direction,
            handles_seen: 0,
        }
    }

    /// Transforms a whole message rooted at `root`, which describes the
    /// source dialect's layout. Returns the destination length.
    pub fn run(&mut self, root: &Type) -> Result<usize> {
        let src_struct = match root {
            Type::Struct(s) => s,
            _ => return Err(Error::from_kind(ErrorKind::RootTypeMustBeAStruct)),
        };
        let dst_struct = expect_struct(src_struct.alt)?;
        let pos = Position {
            src_inline: 0,
            src_out_of_line: align8(src_struct.inline_size as usize),
            dst_inline: 0,
            dst_out_of_line: align8(dst_struct.inline_size as usize),
        };
        self.transform_struct(src_struct, pos, dst_struct.inline_size as usize, NESTING_LIMIT)?;
        Ok(self.src_dst.dst_len())
    }

    /// Transforms one value. `dst_size` is the number of destination bytes
    /// the parent reserved for it; the parent computes it, which is how
    /// padding context (such as a union arm slot) is carried.
    fn transform(
        &mut self,
        ty: Option<&Type>,
        pos: Position,
        dst_size: usize,
        nesting: i32,
    ) -> Result<Position> {
        if nesting <= 0 {
            return Err(Error::from_kind(ErrorKind::MessageIsTooDeeplyNested));
        }
        let nesting = nesting - 1;
        let ty = match ty {
            // No interesting content: the bytes are identical in both
            // dialects.
            None => {
                self.src_dst.copy(pos.src_inline, pos.dst_inline, dst_size)?;
                return Ok(pos);
            }
            Some(ty) => ty,
        };
        match ty {
            Type::Primitive(_) | Type::Enum(_) | Type::Bits(_) => {
                self.src_dst.copy(pos.src_inline, pos.dst_inline, dst_size)?;
                Ok(pos)
            }
            Type::Handle(_) => self.transform_handle(pos),
            Type::Struct(st) => self.transform_struct(st, pos, dst_size, nesting),
            Type::StructPointer(p) => self.transform_struct_pointer(p.target, pos, nesting),
            Type::Union(u) => match self.direction {
                Direction::V1ToOld => self.transform_extensible_to_static(u, pos, nesting),
                Direction::OldToV1 => self.transform_static_to_extensible(u, pos, nesting),
                Direction::None => Err(Error::from_kind(ErrorKind::UnknownTransformation(
                    Direction::None as u64,
                ))),
            },
            Type::Array(a) => {
                let dst = match a.alt {
                    Some(Type::Array(d)) => d,
                    _ => return Err(invalid_table()),
                };
                self.transform_array(
                    a.element,
                    dst.element,
                    a.element_count as usize,
                    a.element_size as usize,
                    a.element_padding as usize,
                    dst.element_size as usize,
                    dst.element_padding as usize,
                    pos,
                    dst_size,
                    nesting,
                )
            }
            Type::String(_) => self.transform_vector_like(None, None, 1, 1, pos, nesting),
            Type::Vector(v) => {
                let dst = match v.alt {
                    Some(Type::Vector(d)) => d,
                    _ => return Err(invalid_table()),
                };
                self.transform_vector_like(
                    v.element,
                    dst.element,
                    v.element_size as usize,
                    dst.element_size as usize,
                    pos,
                    nesting,
                )
            }
            Type::ExtensibleUnion(_) | Type::Table(_) => {
                Err(Error::from_kind(ErrorKind::TypeCannotBeTransformed))
            }
        }
    }

    fn transform_handle(&mut self, pos: Position) -> Result<Position> {
        let slot: u32 = self.src_dst.read(pos.src_inline)?;
        if slot == HANDLE_PRESENT {
            self.handles_seen += 1;
        }
        self.src_dst
            .copy(pos.src_inline, pos.dst_inline, HANDLE_SIZE)?;
        Ok(pos)
    }

    fn transform_struct(
        &mut self,
        src: &StructType,
        pos: Position,
        dst_size: usize,
        nesting: i32,
    ) -> Result<Position> {
        if src.fields.is_empty() {
            self.src_dst.copy(pos.src_inline, pos.dst_inline, dst_size)?;
            return Ok(pos);
        }
        let mut cursor = pos;
        for field in src.fields {
            match field.ty {
                None => {
                    // A pure-data run is laid out identically in both
                    // dialects; copy up to where its trailing padding
                    // starts.
                    let run_end = pos.src_inline + field.offset as usize;
                    let len = run_end
                        .checked_sub(cursor.src_inline)
                        .ok_or_else(invalid_table)?;
                    self.src_dst.copy(cursor.src_inline, cursor.dst_inline, len)?;
                    cursor = cursor.advance_src_inline(len).advance_dst_inline(len);
                }
                Some(_) => {
                    let alt_field = field.alt.ok_or_else(invalid_table)?;
                    let dst_offset = pos.dst_inline + alt_field.offset as usize;
                    // Materialize the inter-field padding the destination
                    // dialect requires.
                    let gap = dst_offset
                        .checked_sub(cursor.dst_inline)
                        .ok_or_else(invalid_table)?;
                    if gap > 0 {
                        self.src_dst.pad(cursor.dst_inline, gap)?;
                    }
                    cursor = Position {
                        src_inline: pos.src_inline + field.offset as usize,
                        dst_inline: dst_offset,
                        ..cursor
                    };
                    let field_dst_size = inline_size(alt_field.ty);
                    let end = self.transform(field.ty, cursor, field_dst_size, nesting)?;
                    cursor = cursor
                        .with_out_of_line_from(end)
                        .advance_src_inline(inline_size(field.ty))
                        .advance_dst_inline(field_dst_size);
                }
            }
        }
        let dst_end = pos.dst_inline + dst_size;
        if let Some(trailing) = dst_end.checked_sub(cursor.dst_inline) {
            if trailing > 0 {
                self.src_dst.pad(cursor.dst_inline, trailing)?;
            }
        }
        Ok(pos.with_out_of_line_from(cursor))
    }

    fn transform_struct_pointer(
        &mut self,
        target: &Type,
        pos: Position,
        nesting: i32,
    ) -> Result<Position> {
        let presence: u64 = self.src_dst.read(pos.src_inline)?;
        self.src_dst
            .copy(pos.src_inline, pos.dst_inline, POINTER_SIZE)?;
        if presence != ALLOC_PRESENT {
            return Ok(pos);
        }
        let src_struct = match target {
            Type::Struct(s) => s,
            _ => return Err(invalid_table()),
        };
        let dst_struct = expect_struct(src_struct.alt)?;
        let src_claim = align8(src_struct.inline_size as usize);
        let dst_claim = align8(dst_struct.inline_size as usize);
        let object = Position {
            src_inline: pos.src_out_of_line,
            src_out_of_line: pos.src_out_of_line + src_claim,
            dst_inline: pos.dst_out_of_line,
            dst_out_of_line: pos.dst_out_of_line + dst_claim,
        };
        let end = self.transform_struct(src_struct, object, dst_claim, nesting)?;
        Ok(pos.with_out_of_line_from(end))
    }

    /// v1 → old: the source inline slot is a tagged envelope, the payload
    /// out-of-line; the destination packs the arm inline after the tag.
    fn transform_extensible_to_static(
        &mut self,
        src: &UnionType,
        pos: Position,
        nesting: i32,
    ) -> Result<Position> {
        let dst = expect_union(src.alt)?;
        if src.arms.len() != dst.arms.len() {
            return Err(invalid_table());
        }
        let ordinal: u32 = self.src_dst.read(pos.src_inline)?;
        let index = match dst.arms.iter().position(|arm| arm.ordinal == ordinal) {
            Some(index) => index,
            None => return Err(Error::from_kind(ErrorKind::UnknownUnionOrdinal(ordinal))),
        };
        let src_arm = &src.arms[index];
        let dst_arm = &dst.arms[index];
        if src_arm.ordinal != dst_arm.ordinal {
            return Err(invalid_table());
        }

        let tag = (index + 1) as u32;
        match dst.data_offset {
            4 => self.src_dst.write::<u32>(pos.dst_inline, tag)?,
            8 => self.src_dst.write::<u64>(pos.dst_inline, tag as u64)?,
            _ => return Err(invalid_table()),
        }

        let slot = (dst.inline_size as usize)
            .checked_sub(dst.data_offset as usize)
            .ok_or_else(invalid_table)?;
        let trailing = dst_arm.padding as usize;
        let (src_claim, arm_dst_size) = match src_arm.ty {
            // Pure data: the v1 payload holds exactly the arm bytes,
            // rounded up to a word.
            None => {
                let data = slot.checked_sub(trailing).ok_or_else(invalid_table)?;
                (align8(data), data)
            }
            Some(ty) => (align8(inline_size(Some(ty))), slot),
        };
        let arm_pos = Position {
            src_inline: pos.src_out_of_line,
            dst_inline: pos.dst_inline + dst.data_offset as usize,
            ..pos
        }
        .advance_src_out_of_line(src_claim);
        let end = self.transform(src_arm.ty, arm_pos, arm_dst_size, nesting)?;
        if trailing > 0 {
            let arm_end = pos.dst_inline + dst.inline_size as usize;
            self.src_dst.pad(arm_end - trailing, trailing)?;
        }
        Ok(pos.with_out_of_line_from(end))
    }

    /// old → v1: the source packs the arm inline after the tag; the
    /// destination carries a tagged envelope pointing at an out-of-line
    /// payload whose size and handle count are only known once the arm has
    /// been walked.
    fn transform_static_to_extensible(
        &mut self,
        src: &UnionType,
        pos: Position,
        nesting: i32,
    ) -> Result<Position> {
        let dst = expect_union(src.alt)?;
        if src.arms.len() != dst.arms.len() {
            return Err(invalid_table());
        }
        let tag: u32 = self.src_dst.read(pos.src_inline)?;
        if tag == 0 || tag as usize > src.arms.len() {
            return Err(Error::from_kind(ErrorKind::UnionTagOutOfRange(tag)));
        }
        let index = (tag - 1) as usize;
        let src_arm = &src.arms[index];
        let dst_arm = &dst.arms[index];
        if src_arm.ordinal != dst_arm.ordinal {
            return Err(invalid_table());
        }

        self.src_dst.write::<u32>(pos.dst_inline, dst_arm.ordinal)?;
        self.src_dst.write::<u32>(pos.dst_inline + 4, 0)?;

        let data_offset = match src.data_offset {
            4 | 8 => src.data_offset as usize,
            _ => return Err(invalid_table()),
        };
        let slot = (src.inline_size as usize)
            .checked_sub(data_offset)
            .ok_or_else(invalid_table)?;
        let trailing = src_arm.padding as usize;
        let (dst_claim, arm_dst_size) = match src_arm.ty {
            None => {
                let data = slot.checked_sub(trailing).ok_or_else(invalid_table)?;
                (align8(data), data)
            }
            Some(_) => {
                let claim = align8(inline_size(dst_arm.ty));
                (claim, claim)
            }
        };

        let payload_start = pos.dst_out_of_line;
        let handles_before = self.handles_seen;
        let arm_pos = Position {
            src_inline: pos.src_inline + data_offset,
            dst_inline: payload_start,
            dst_out_of_line: payload_start,
            ..pos
        }
        .advance_dst_out_of_line(dst_claim);
        let end = self.transform(src_arm.ty, arm_pos, arm_dst_size, nesting)?;
        // Pure-data arms leave the tail of their word-aligned payload to us.
        if src_arm.ty.is_none() && dst_claim > arm_dst_size {
            self.src_dst
                .pad(payload_start + arm_dst_size, dst_claim - arm_dst_size)?;
        }

        let num_bytes = (end.dst_out_of_line - payload_start) as u32;
        let num_handles = self.handles_seen - handles_before;
        self.src_dst.write::<u32>(pos.dst_inline + 8, num_bytes)?;
        self.src_dst.write::<u32>(pos.dst_inline + 12, num_handles)?;
        self.src_dst.write::<u64>(pos.dst_inline + 16, ALLOC_PRESENT)?;
        Ok(pos.with_out_of_line_from(end))
    }

    /// N consecutive elements, each padded to its dialect's stride. Fills
    /// `dst_size` destination bytes: the elements, then zeros.
    #[allow(clippy::too_many_arguments)]
    fn transform_array(
        &mut self,
        src_element: Option<&Type>,
        dst_element: Option<&Type>,
        count: usize,
        src_elem_size: usize,
        src_elem_padding: usize,
        dst_elem_size: usize,
        dst_elem_padding: usize,
        pos: Position,
        dst_size: usize,
        nesting: i32,
    ) -> Result<Position> {
        let dst_total = count
            .checked_mul(dst_elem_size + dst_elem_padding)
            .ok_or_else(|| Error::from_kind(ErrorKind::ElementCountOverflow))?;
        let mut cursor = pos;
        if src_element.is_none() && dst_element.is_none() {
            self.src_dst
                .copy(pos.src_inline, pos.dst_inline, dst_total)?;
        } else {
            for _ in 0..count {
                let end = self.transform(src_element, cursor, dst_elem_size, nesting)?;
                if dst_elem_padding > 0 {
                    self.src_dst
                        .pad(cursor.dst_inline + dst_elem_size, dst_elem_padding)?;
                }
                cursor = cursor
                    .with_out_of_line_from(end)
                    .advance_src_inline(src_elem_size + src_elem_padding)
                    .advance_dst_inline(dst_elem_size + dst_elem_padding);
            }
        }
        if let Some(tail) = dst_size.checked_sub(dst_total) {
            if tail > 0 {
                self.src_dst.pad(pos.dst_inline + dst_total, tail)?;
            }
        }
        Ok(pos.with_out_of_line_from(cursor))
    }

    /// Vectors and strings: a 16-byte header inline, the elements
    /// out-of-line as an array strided by the scalar alignment law. Strings
    /// are vectors of bytes.
    fn transform_vector_like(
        &mut self,
        src_element: Option<&Type>,
        dst_element: Option<&Type>,
        src_elem_size: usize,
        dst_elem_size: usize,
        pos: Position,
        nesting: i32,
    ) -> Result<Position> {
        let count_raw: u64 = self.src_dst.read(pos.src_inline)?;
        let presence: u64 = self.src_dst.read(pos.src_inline + POINTER_SIZE)?;
        self.src_dst
            .copy(pos.src_inline, pos.dst_inline, VECTOR_HEADER_SIZE)?;
        if presence != ALLOC_PRESENT {
            return Ok(pos);
        }

        let overflow = || Error::from_kind(ErrorKind::ElementCountOverflow);
        let count = usize::try_from(count_raw).map_err(|_| overflow())?;
        let src_stride = round_up_natural(src_elem_size);
        let dst_stride = round_up_natural(dst_elem_size);
        let src_total = align8(count.checked_mul(src_stride).ok_or_else(overflow)?);
        let dst_total = align8(count.checked_mul(dst_stride).ok_or_else(overflow)?);
        let data = Position {
            src_inline: pos.src_out_of_line,
            src_out_of_line: pos
                .src_out_of_line
                .checked_add(src_total)
                .ok_or_else(overflow)?,
            dst_inline: pos.dst_out_of_line,
            dst_out_of_line: pos
                .dst_out_of_line
                .checked_add(dst_total)
                .ok_or_else(overflow)?,
        };
        let end = self.transform_array(
            src_element,
            dst_element,
            count,
            src_elem_size,
            src_stride - src_elem_size,
            dst_elem_size,
            dst_stride - dst_elem_size,
            data,
            dst_total,
            nesting,
        )?;
        Ok(pos.with_out_of_line_from(end))
    }
}
