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

#![no_main]

use libfuzzer_sys::fuzz_target;
use wireshift::coding::{StructField, StructType, Type, UnionArm, UnionType, VectorType};
use wireshift::transform::{transform, Direction, MAX_MESSAGE_BYTES};

// A struct framing a union of a 4-byte scalar arm and a byte-vector arm
// between two u32 markers. The vector arm makes the union 8-aligned in both
// dialects, so the frame layout happens to agree; the union itself does not.
static BYTES: Type = Type::Vector(VectorType {
    element: None,
    max_count: u32::MAX,
    element_size: 1,
    nullable: false,
    alt: Some(&BYTES),
});
static UNION_OLD_ARMS: [UnionArm; 2] = [
    UnionArm {
        ty: None,
        padding: 12,
        ordinal: 0x55e91a6e,
    },
    UnionArm {
        ty: Some(&BYTES),
        padding: 0,
        ordinal: 0x1a92c92d,
    },
];
static UNION_V1_ARMS: [UnionArm; 2] = [
    UnionArm {
        ty: None,
        padding: 4,
        ordinal: 0x55e91a6e,
    },
    UnionArm {
        ty: Some(&BYTES),
        padding: 0,
        ordinal: 0x1a92c92d,
    },
];
static UNION_OLD: Type = Type::Union(UnionType {
    arms: &UNION_OLD_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&UNION_V1),
});
static UNION_V1: Type = Type::Union(UnionType {
    arms: &UNION_V1_ARMS,
    data_offset: 8,
    inline_size: 24,
    alt: Some(&UNION_OLD),
});
static FRAME_OLD_FIELDS: [StructField; 3] = [
    StructField {
        ty: None,
        offset: 4,
        padding: 4,
        alt: None,
    },
    StructField {
        ty: Some(&UNION_OLD),
        offset: 8,
        padding: 0,
        alt: Some(&FRAME_V1_FIELDS[1]),
    },
    StructField {
        ty: None,
        offset: 36,
        padding: 4,
        alt: None,
    },
];
static FRAME_V1_FIELDS: [StructField; 3] = [
    StructField {
        ty: None,
        offset: 4,
        padding: 4,
        alt: None,
    },
    StructField {
        ty: Some(&UNION_V1),
        offset: 8,
        padding: 0,
        alt: Some(&FRAME_OLD_FIELDS[1]),
    },
    StructField {
        ty: None,
        offset: 36,
        padding: 4,
        alt: None,
    },
];
static FRAME_OLD: Type = Type::Struct(StructType {
    fields: &FRAME_OLD_FIELDS,
    inline_size: 40,
    alt: Some(&FRAME_V1),
});
static FRAME_V1: Type = Type::Struct(StructType {
    fields: &FRAME_V1_FIELDS,
    inline_size: 40,
    alt: Some(&FRAME_OLD),
});

fuzz_target!(|data: &[u8]| {
    let mut old = vec![0u8; MAX_MESSAGE_BYTES];
    if let Ok(old_len) = transform(Direction::V1ToOld, &FRAME_V1, data, &mut old) {
        // Whatever came out is a well-formed old message; pushing it back
        // and forth again must reproduce it byte for byte. The middle hop
        // can still outgrow the buffer near the size ceiling.
        let mut v1 = vec![0u8; MAX_MESSAGE_BYTES];
        if let Ok(v1_len) = transform(Direction::OldToV1, &FRAME_OLD, &old[..old_len], &mut v1) {
            let mut old_again = vec![0u8; MAX_MESSAGE_BYTES];
            let again_len = transform(Direction::V1ToOld, &FRAME_V1, &v1[..v1_len], &mut old_again)
                .expect("canonical message must transform");
            assert_eq!(&old[..old_len], &old_again[..again_len]);
        }
    }
    let mut v1 = vec![0u8; MAX_MESSAGE_BYTES];
    let _ = transform(Direction::OldToV1, &FRAME_OLD, data, &mut v1);
});
