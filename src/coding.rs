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

//! Coding tables: immutable, process-lifetime descriptions of wire types.
//!
//! A coding table is emitted by the schema compiler as constant data and
//! consumed here to guide the byte-walker. Descriptors whose layout differs
//! between the two wire dialects carry an `alt` reference to the descriptor
//! of the same logical type in the other dialect; the twin relation is
//! symmetric (`d.alt().alt() == d`). The transformer only ever reads these
//! tables.

/// Scalar wire types. Encoded at their natural size and alignment; booleans
/// are one byte, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl Primitive {
    /// Width of the scalar on the wire, in bytes.
    pub fn size_in_bytes(self) -> usize {
        match self {
            Self::Bool | Self::Int8 | Self::Uint8 => 1,
            Self::Int16 | Self::Uint16 => 2,
            Self::Int32 | Self::Uint32 | Self::Float32 => 4,
            Self::Int64 | Self::Uint64 | Self::Float64 => 8,
        }
    }
}

/// Validation predicate over an enum's underlying value. Carried for the
/// encoder and decoder collaborators; the transformer never calls it.
pub type EnumValidator = fn(u64) -> bool;

/// An enum over a scalar.
#[derive(Clone, Copy, Debug)]
pub struct EnumType {
    pub underlying: Primitive,
    pub validate: EnumValidator,
}

/// A bit set over a scalar. The mask is unused by the transformer.
#[derive(Clone, Copy, Debug)]
pub struct BitsType {
    pub underlying: Primitive,
    pub mask: u64,
}

/// One field of a coded struct.
///
/// A field with no type is a pure-data run carrying neither pointers nor
/// handles; `offset` is then the offset at which the run's trailing padding
/// begins rather than the offset of the field itself.
#[derive(Clone, Copy, Debug)]
pub struct StructField {
    pub ty: Option<&'static Type>,
    pub offset: u32,
    /// Padding bytes that follow the field.
    pub padding: u32,
    /// The same field in the twin dialect's struct. Present on typed fields.
    pub alt: Option<&'static StructField>,
}

/// A fixed-layout struct.
#[derive(Clone, Copy, Debug)]
pub struct StructType {
    /// Fields in declaration order. Runs of fields without interesting
    /// content are collapsed into single untyped entries.
    pub fields: &'static [StructField],
    /// Inline size of the struct, trailing padding included.
    pub inline_size: u32,
    pub alt: Option<&'static Type>,
}

/// A nullable out-of-line reference to a struct: an 8-byte presence word
/// inline, the target struct at the next aligned out-of-line offset when
/// present.
#[derive(Clone, Copy, Debug)]
pub struct StructPointerType {
    pub target: &'static Type,
}

/// One alternative of a union.
///
/// The arm's 1-origin position in the arm list is its tag value in the old
/// dialect; `ordinal` is its tag value in the v1 dialect. The mapping is
/// bijective within one union.
#[derive(Clone, Copy, Debug)]
pub struct UnionArm {
    /// Payload type; absent for payloads with no interesting content.
    pub ty: Option<&'static Type>,
    /// Trailing padding of the arm within its slot, in this dialect.
    pub padding: u32,
    pub ordinal: u32,
}

/// A tagged union.
///
/// In the old dialect the union is inline: a 32-bit tag, then the arm data
/// at `data_offset`, padded to the largest arm. The v1 twin of the same
/// logical union carries `inline_size = 24` and `data_offset = 8`: a 32-bit
/// tag, 32 bits of zero pad, and an envelope pointing at the out-of-line
/// arm payload.
#[derive(Clone, Copy, Debug)]
pub struct UnionType {
    pub arms: &'static [UnionArm],
    /// Offset of the arm data after the tag: 4, or 8 when the largest arm
    /// needs 8-byte alignment.
    pub data_offset: u32,
    pub inline_size: u32,
    pub alt: Option<&'static Type>,
}

/// A union whose payload stays enveloped and out-of-line in every dialect,
/// so that arms can be added without breaking layout compatibility. Its
/// layout never changes between dialects, so it cannot appear in a
/// transformation.
#[derive(Clone, Copy, Debug)]
pub struct ExtensibleUnionType {
    pub arms: &'static [UnionArm],
    pub strict: bool,
    pub alt: Option<&'static Type>,
}

/// One ordinal-keyed member of a table.
#[derive(Clone, Copy, Debug)]
pub struct TableField {
    pub ty: &'static Type,
    pub ordinal: u32,
}

/// An ordinal-keyed envelope sequence. Like extensible unions, tables keep
/// their layout across dialects and cannot appear in a transformation.
#[derive(Clone, Copy, Debug)]
pub struct TableType {
    pub fields: &'static [TableField],
}

/// A fixed-length run of identically typed elements, inline.
#[derive(Clone, Copy, Debug)]
pub struct ArrayType {
    /// Element type; absent when elements carry no interesting content.
    pub element: Option<&'static Type>,
    pub element_count: u32,
    pub element_size: u32,
    /// Padding between consecutive elements, and after the last one.
    pub element_padding: u32,
    pub alt: Option<&'static Type>,
}

/// A length-counted run of bytes, out-of-line behind a 16-byte header.
/// The bound is unused by the transformer.
#[derive(Clone, Copy, Debug)]
pub struct StringType {
    pub max_size: u32,
    pub nullable: bool,
}

/// A length-counted run of identically typed elements, out-of-line behind a
/// 16-byte header. The bound is unused by the transformer.
#[derive(Clone, Copy, Debug)]
pub struct VectorType {
    /// Element type; absent when elements carry no interesting content.
    pub element: Option<&'static Type>,
    pub max_count: u32,
    pub element_size: u32,
    pub nullable: bool,
    pub alt: Option<&'static Type>,
}

/// A kernel object reference: a 4-byte slot, all-ones when present. The
/// transformer treats handles as opaque inline bytes; it only ever counts
/// present slots.
#[derive(Clone, Copy, Debug)]
pub struct HandleType {
    pub subtype: u32,
    pub nullable: bool,
}

/// A coded wire type. The tag selects the layout; every transformer handler
/// matches exhaustively over these.
#[derive(Clone, Copy, Debug)]
pub enum Type {
    Primitive(Primitive),
    Enum(EnumType),
    Bits(BitsType),
    Struct(StructType),
    StructPointer(StructPointerType),
    Union(UnionType),
    ExtensibleUnion(ExtensibleUnionType),
    Table(TableType),
    Array(ArrayType),
    String(StringType),
    Vector(VectorType),
    Handle(HandleType),
}

impl Type {
    /// The descriptor of the same logical type in the other dialect, for
    /// the kinds that are laid out per dialect.
    pub fn alt(&self) -> Option<&'static Type> {
        match self {
            Self::Struct(s) => s.alt,
            Self::Union(u) => u.alt,
            Self::ExtensibleUnion(x) => x.alt,
            Self::Array(a) => a.alt,
            Self::Vector(v) => v.alt,
            _ => None,
        }
    }
}
