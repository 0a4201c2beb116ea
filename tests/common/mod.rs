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

//! Hand-built coding tables shared by the integration tests, standing in
//! for what the schema compiler would emit.
//!
//! The message shapes all follow the same pattern: a struct framing a union
//! (or a pointer) between two u32 markers, so that bytes before and after
//! the interesting field pin the layout down. In the old dialect a union is
//! inline (tag + arm padded to the largest arm); in the v1 dialect it is a
//! 24-byte tagged envelope with the arm out-of-line.

#![allow(dead_code)]

use wireshift::coding::{
    ArrayType, HandleType, StringType, StructField, StructPointerType, StructType, Type, UnionArm,
    UnionType, VectorType,
};
use wireshift::transform::{transform, Direction, MAX_MESSAGE_BYTES};

// A framed union: { before: u32, union, after: u32 }. Old layouts differ by
// the union's size and alignment; the v1 layout is always the same, since a
// v1 union slot is 24 bytes, 8-aligned.
macro_rules! framed_union {
    ($old:ident, $v1:ident, $old_fields:ident, $v1_fields:ident,
     $union_old:expr, $union_v1:expr,
     union_offset: $uoff:expr, union_size: $usize_:expr, old_size: $osize:expr) => {
        pub static $old_fields: [StructField; 3] = [
            StructField {
                ty: None,
                offset: 4,
                padding: $uoff - 4,
                alt: None,
            },
            StructField {
                ty: Some($union_old),
                offset: $uoff,
                padding: 0,
                alt: Some(&$v1_fields[1]),
            },
            StructField {
                ty: None,
                offset: $uoff + $usize_ + 4,
                padding: $osize - ($uoff + $usize_ + 4),
                alt: None,
            },
        ];
        pub static $v1_fields: [StructField; 3] = [
            StructField {
                ty: None,
                offset: 4,
                padding: 4,
                alt: None,
            },
            StructField {
                ty: Some($union_v1),
                offset: 8,
                padding: 0,
                alt: Some(&$old_fields[1]),
            },
            StructField {
                ty: None,
                offset: 36,
                padding: 4,
                alt: None,
            },
        ];
        pub static $old: Type = Type::Struct(StructType {
            fields: &$old_fields,
            inline_size: $osize,
            alt: Some(&$v1),
        });
        pub static $v1: Type = Type::Struct(StructType {
            fields: &$v1_fields,
            inline_size: 40,
            alt: Some(&$old),
        });
    };
}

// A union whose interesting arm is a single 32-bit scalar: 8 bytes inline
// in the old dialect, data at offset 4.
pub static WORD_UNION_OLD_ARMS: [UnionArm; 2] = [
    UnionArm {
        ty: None,
        padding: 3,
        ordinal: 0x12a15c41,
    },
    UnionArm {
        ty: None,
        padding: 0,
        ordinal: 0x7fc2f0db,
    },
];
pub static WORD_UNION_V1_ARMS: [UnionArm; 2] = [
    UnionArm {
        ty: None,
        padding: 7,
        ordinal: 0x12a15c41,
    },
    UnionArm {
        ty: None,
        padding: 4,
        ordinal: 0x7fc2f0db,
    },
];
pub static WORD_UNION_OLD: Type = Type::Union(UnionType {
    arms: &WORD_UNION_OLD_ARMS,
    data_offset: 4,
    inline_size: 8,
    alt: Some(&WORD_UNION_V1),
});
pub static WORD_UNION_V1: Type = Type::Union(UnionType {
    arms: &WORD_UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&WORD_UNION_OLD),
});

// Largest arm is six bytes of plain data: 12 bytes inline, data at 4.
pub static SIX_BYTE_UNION_OLD_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: None,
        padding: 7,
        ordinal: 0x076b47cd,
    },
    UnionArm {
        ty: None,
        padding: 6,
        ordinal: 0x1213f52a,
    },
    UnionArm {
        ty: None,
        padding: 2,
        ordinal: 0x20d1d3bf,
    },
];
pub static SIX_BYTE_UNION_V1_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: None,
        padding: 7,
        ordinal: 0x076b47cd,
    },
    UnionArm {
        ty: None,
        padding: 6,
        ordinal: 0x1213f52a,
    },
    UnionArm {
        ty: None,
        padding: 2,
        ordinal: 0x20d1d3bf,
    },
];
pub static SIX_BYTE_UNION_OLD: Type = Type::Union(UnionType {
    arms: &SIX_BYTE_UNION_OLD_ARMS,
    data_offset: 4,
    inline_size: 12,
    alt: Some(&SIX_BYTE_UNION_V1),
});
pub static SIX_BYTE_UNION_V1: Type = Type::Union(UnionType {
    arms: &SIX_BYTE_UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&SIX_BYTE_UNION_OLD),
});

// Largest arm is sixteen bytes needing 8-byte alignment: the old tag gets
// four bytes of padding, data at offset 8, 24 bytes inline.
pub static TWO_WORD_UNION_OLD_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: None,
        padding: 15,
        ordinal: 0x0ee22c3c,
    },
    UnionArm {
        ty: None,
        padding: 12,
        ordinal: 0x64e33c87,
    },
    UnionArm {
        ty: None,
        padding: 0,
        ordinal: 0x3404559b,
    },
];
pub static TWO_WORD_UNION_V1_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: None,
        padding: 7,
        ordinal: 0x0ee22c3c,
    },
    UnionArm {
        ty: None,
        padding: 4,
        ordinal: 0x64e33c87,
    },
    UnionArm {
        ty: None,
        padding: 0,
        ordinal: 0x3404559b,
    },
];
pub static TWO_WORD_UNION_OLD: Type = Type::Union(UnionType {
    arms: &TWO_WORD_UNION_OLD_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&TWO_WORD_UNION_V1),
});
pub static TWO_WORD_UNION_V1: Type = Type::Union(UnionType {
    arms: &TWO_WORD_UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&TWO_WORD_UNION_OLD),
});

// Largest arm is 32 bytes of 4-aligned data: data at offset 4, 36 bytes
// inline.
pub static EIGHT_WORD_UNION_OLD_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: None,
        padding: 31,
        ordinal: 0x2cc7bb4a,
    },
    UnionArm {
        ty: None,
        padding: 30,
        ordinal: 0x7e5c0b73,
    },
    UnionArm {
        ty: None,
        padding: 0,
        ordinal: 0x5e411019,
    },
];
pub static EIGHT_WORD_UNION_V1_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: None,
        padding: 7,
        ordinal: 0x2cc7bb4a,
    },
    UnionArm {
        ty: None,
        padding: 6,
        ordinal: 0x7e5c0b73,
    },
    UnionArm {
        ty: None,
        padding: 0,
        ordinal: 0x5e411019,
    },
];
pub static EIGHT_WORD_UNION_OLD: Type = Type::Union(UnionType {
    arms: &EIGHT_WORD_UNION_OLD_ARMS,
    data_offset: 4,
    inline_size: 36,
    alt: Some(&EIGHT_WORD_UNION_V1),
});
pub static EIGHT_WORD_UNION_V1: Type = Type::Union(UnionType {
    arms: &EIGHT_WORD_UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&EIGHT_WORD_UNION_OLD),
});

// A union of unions. The largest arm is TWO_WORD_UNION (24 bytes,
// 8-aligned), so the old layout is 32 bytes with data at offset 8.
pub static NESTED_UNION_OLD_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: Some(&WORD_UNION_OLD),
        padding: 16,
        ordinal: 0x20aadd60,
    },
    UnionArm {
        ty: Some(&SIX_BYTE_UNION_OLD),
        padding: 12,
        ordinal: 0x49b11b63,
    },
    UnionArm {
        ty: Some(&TWO_WORD_UNION_OLD),
        padding: 0,
        ordinal: 0x06722d1f,
    },
];
pub static NESTED_UNION_V1_ARMS: [UnionArm; 3] = [
    UnionArm {
        ty: Some(&WORD_UNION_V1),
        padding: 0,
        ordinal: 0x20aadd60,
    },
    UnionArm {
        ty: Some(&SIX_BYTE_UNION_V1),
        padding: 0,
        ordinal: 0x49b11b63,
    },
    UnionArm {
        ty: Some(&TWO_WORD_UNION_V1),
        padding: 0,
        ordinal: 0x06722d1f,
    },
];
pub static NESTED_UNION_OLD: Type = Type::Union(UnionType {
    arms: &NESTED_UNION_OLD_ARMS,
    data_offset: 8,
    inline_size: 32,
    alt: Some(&NESTED_UNION_V1),
});
pub static NESTED_UNION_V1: Type = Type::Union(UnionType {
    arms: &NESTED_UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&NESTED_UNION_OLD),
});

// Element and collection types for COLLECTION_UNION. Types whose layout
// agrees in both dialects are their own twins.
pub static BYTE_VECTOR: Type = Type::Vector(VectorType {
    element: None,
    max_count: u32::MAX,
    element_size: 1,
    nullable: false,
    alt: Some(&BYTE_VECTOR),
});
pub static TEXT_STRING: Type = Type::String(StringType {
    max_size: u32::MAX,
    nullable: false,
});
// Three bytes per element; the natural stride law rounds them to 4 in
// vectors either way, so one table serves both the packed and the padded
// element struct.
pub static TRIO_VECTOR: Type = Type::Vector(VectorType {
    element: None,
    max_count: u32::MAX,
    element_size: 3,
    nullable: false,
    alt: Some(&TRIO_VECTOR),
});
pub static RAW_HANDLE: Type = Type::Handle(HandleType {
    subtype: 0,
    nullable: false,
});
pub static HANDLE_VECTOR: Type = Type::Vector(VectorType {
    element: Some(&RAW_HANDLE),
    max_count: u32::MAX,
    element_size: 4,
    nullable: false,
    alt: Some(&HANDLE_VECTOR),
});
// Inline arrays keep their declared element stride: two three-byte elements
// pack back to back when 1-aligned and stride at 4 when 2-aligned.
pub static PACKED_PAIR_ARRAY: Type = Type::Array(ArrayType {
    element: None,
    element_count: 2,
    element_size: 3,
    element_padding: 0,
    alt: Some(&PACKED_PAIR_ARRAY),
});
pub static PADDED_PAIR_ARRAY: Type = Type::Array(ArrayType {
    element: None,
    element_count: 2,
    element_size: 3,
    element_padding: 1,
    alt: Some(&PADDED_PAIR_ARRAY),
});
pub static UNION_VECTOR_OLD: Type = Type::Vector(VectorType {
    element: Some(&WORD_UNION_OLD),
    max_count: u32::MAX,
    element_size: 8,
    nullable: false,
    alt: Some(&UNION_VECTOR_V1),
});
pub static UNION_VECTOR_V1: Type = Type::Vector(VectorType {
    element: Some(&WORD_UNION_V1),
    max_count: u32::MAX,
    element_size: 24,
    nullable: false,
    alt: Some(&UNION_VECTOR_OLD),
});

// A union over collections. Every arm that is a vector or string is 16
// bytes inline and 8-aligned, so the old layout is 24 bytes with data at
// offset 8; the inline-array arms ride in the same slot with trailing
// padding.
pub static COLLECTION_UNION_OLD_ARMS: [UnionArm; 8] = [
    UnionArm {
        ty: Some(&BYTE_VECTOR),
        padding: 0,
        ordinal: 0x79c3ccad,
    },
    UnionArm {
        ty: Some(&TEXT_STRING),
        padding: 0,
        ordinal: 0x3b314338,
    },
    UnionArm {
        ty: Some(&TRIO_VECTOR),
        padding: 0,
        ordinal: 0x4bc13cdc,
    },
    UnionArm {
        ty: Some(&TRIO_VECTOR),
        padding: 0,
        ordinal: 0x1d08aa3c,
    },
    UnionArm {
        ty: Some(&HANDLE_VECTOR),
        padding: 0,
        ordinal: 0x471eaa76,
    },
    UnionArm {
        ty: Some(&PACKED_PAIR_ARRAY),
        padding: 10,
        ordinal: 0x5ea0a810,
    },
    UnionArm {
        ty: Some(&PADDED_PAIR_ARRAY),
        padding: 8,
        ordinal: 0x5cf8b70d,
    },
    UnionArm {
        ty: Some(&UNION_VECTOR_OLD),
        padding: 0,
        ordinal: 0x2b768c31,
    },
];
pub static COLLECTION_UNION_V1_ARMS: [UnionArm; 8] = [
    UnionArm {
        ty: Some(&BYTE_VECTOR),
        padding: 0,
        ordinal: 0x79c3ccad,
    },
    UnionArm {
        ty: Some(&TEXT_STRING),
        padding: 0,
        ordinal: 0x3b314338,
    },
    UnionArm {
        ty: Some(&TRIO_VECTOR),
        padding: 0,
        ordinal: 0x4bc13cdc,
    },
    UnionArm {
        ty: Some(&TRIO_VECTOR),
        padding: 0,
        ordinal: 0x1d08aa3c,
    },
    UnionArm {
        ty: Some(&HANDLE_VECTOR),
        padding: 0,
        ordinal: 0x471eaa76,
    },
    UnionArm {
        ty: Some(&PACKED_PAIR_ARRAY),
        padding: 2,
        ordinal: 0x5ea0a810,
    },
    UnionArm {
        ty: Some(&PADDED_PAIR_ARRAY),
        padding: 0,
        ordinal: 0x5cf8b70d,
    },
    UnionArm {
        ty: Some(&UNION_VECTOR_V1),
        padding: 0,
        ordinal: 0x2b768c31,
    },
];
pub static COLLECTION_UNION_OLD: Type = Type::Union(UnionType {
    arms: &COLLECTION_UNION_OLD_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&COLLECTION_UNION_V1),
});
pub static COLLECTION_UNION_V1: Type = Type::Union(UnionType {
    arms: &COLLECTION_UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&COLLECTION_UNION_OLD),
});

framed_union!(
    WORD_FRAME_OLD,
    WORD_FRAME_V1,
    WORD_FRAME_OLD_FIELDS,
    WORD_FRAME_V1_FIELDS,
    &WORD_UNION_OLD,
    &WORD_UNION_V1,
    union_offset: 4,
    union_size: 8,
    old_size: 16
);
framed_union!(
    SIX_BYTE_FRAME_OLD,
    SIX_BYTE_FRAME_V1,
    SIX_BYTE_FRAME_OLD_FIELDS,
    SIX_BYTE_FRAME_V1_FIELDS,
    &SIX_BYTE_UNION_OLD,
    &SIX_BYTE_UNION_V1,
    union_offset: 4,
    union_size: 12,
    old_size: 20
);
framed_union!(
    TWO_WORD_FRAME_OLD,
    TWO_WORD_FRAME_V1,
    TWO_WORD_FRAME_OLD_FIELDS,
    TWO_WORD_FRAME_V1_FIELDS,
    &TWO_WORD_UNION_OLD,
    &TWO_WORD_UNION_V1,
    union_offset: 8,
    union_size: 24,
    old_size: 40
);
framed_union!(
    EIGHT_WORD_FRAME_OLD,
    EIGHT_WORD_FRAME_V1,
    EIGHT_WORD_FRAME_OLD_FIELDS,
    EIGHT_WORD_FRAME_V1_FIELDS,
    &EIGHT_WORD_UNION_OLD,
    &EIGHT_WORD_UNION_V1,
    union_offset: 4,
    union_size: 36,
    old_size: 44
);
framed_union!(
    NESTED_FRAME_OLD,
    NESTED_FRAME_V1,
    NESTED_FRAME_OLD_FIELDS,
    NESTED_FRAME_V1_FIELDS,
    &NESTED_UNION_OLD,
    &NESTED_UNION_V1,
    union_offset: 8,
    union_size: 32,
    old_size: 48
);
framed_union!(
    COLLECTION_FRAME_OLD,
    COLLECTION_FRAME_V1,
    COLLECTION_FRAME_OLD_FIELDS,
    COLLECTION_FRAME_V1_FIELDS,
    &COLLECTION_UNION_OLD,
    &COLLECTION_UNION_V1,
    union_offset: 8,
    union_size: 24,
    old_size: 40
);

// A frame around a nullable pointer to WORD_FRAME:
// { before: u32, opt: WORD_FRAME?, after: u32 }. Same 24-byte layout in
// both dialects; only the pointed-to struct changes shape.
pub static OPT_WORD_FRAME_OLD: Type = Type::StructPointer(StructPointerType {
    target: &WORD_FRAME_OLD,
});
pub static OPT_WORD_FRAME_V1: Type = Type::StructPointer(StructPointerType {
    target: &WORD_FRAME_V1,
});
pub static POINTER_FRAME_OLD_FIELDS: [StructField; 3] = [
    StructField {
        ty: None,
        offset: 4,
        padding: 4,
        alt: None,
    },
    StructField {
        ty: Some(&OPT_WORD_FRAME_OLD),
        offset: 8,
        padding: 0,
        alt: Some(&POINTER_FRAME_V1_FIELDS[1]),
    },
    StructField {
        ty: None,
        offset: 20,
        padding: 4,
        alt: None,
    },
];
pub static POINTER_FRAME_V1_FIELDS: [StructField; 3] = [
    StructField {
        ty: None,
        offset: 4,
        padding: 4,
        alt: None,
    },
    StructField {
        ty: Some(&OPT_WORD_FRAME_V1),
        offset: 8,
        padding: 0,
        alt: Some(&POINTER_FRAME_OLD_FIELDS[1]),
    },
    StructField {
        ty: None,
        offset: 20,
        padding: 4,
        alt: None,
    },
];
pub static POINTER_FRAME_OLD: Type = Type::Struct(StructType {
    fields: &POINTER_FRAME_OLD_FIELDS,
    inline_size: 24,
    alt: Some(&POINTER_FRAME_V1),
});
pub static POINTER_FRAME_V1: Type = Type::Struct(StructType {
    fields: &POINTER_FRAME_V1_FIELDS,
    inline_size: 24,
    alt: Some(&POINTER_FRAME_OLD),
});

/// Runs both directions over a fixture pair and compares byte for byte.
/// Destinations start poisoned so stray or missing writes show up.
pub fn assert_transforms_both_ways(
    v1_root: &'static Type,
    old_root: &'static Type,
    v1_bytes: &[u8],
    old_bytes: &[u8],
) {
    let mut actual = vec![0xcc_u8; MAX_MESSAGE_BYTES];
    let len = transform(Direction::V1ToOld, v1_root, v1_bytes, &mut actual).expect("v1 -> old");
    assert_eq!(&actual[..len], old_bytes, "v1 -> old bytes differ");

    let mut actual = vec![0xcc_u8; MAX_MESSAGE_BYTES];
    let len = transform(Direction::OldToV1, old_root, old_bytes, &mut actual).expect("old -> v1");
    assert_eq!(&actual[..len], v1_bytes, "old -> v1 bytes differ");
}
