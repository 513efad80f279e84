use smallvec::{smallvec, SmallVec};

pub(crate) const MAX_UNIT_COUNT: usize = 2;

const SURROGATE_TAG_MASK: u16 = 0b1111_1100_0000_0000;
const SURROGATE_VALUE_MASK: u16 = 0b0000_0011_1111_1111;
pub(crate) const HIGH_SURROGATE_START: u16 = 0xD800;
pub(crate) const LOW_SURROGATE_START: u16 = 0xDC00;
pub(crate) const SURROGATE_END: u16 = 0xDFFF;
pub(crate) const SUPPLEMENTARY_START: u32 = 0x10000;
pub(crate) const MAX_CODE_POINT: u32 = 0x10FFFF;

pub(crate) type UnitBuf = SmallVec<[u16; MAX_UNIT_COUNT]>;

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    unit & SURROGATE_TAG_MASK == HIGH_SURROGATE_START
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    unit & SURROGATE_TAG_MASK == LOW_SURROGATE_START
}

#[inline]
pub(crate) fn is_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=SURROGATE_END).contains(&unit)
}

/// Combines a high and a low surrogate. Only the low ten bits of each unit are used.
#[inline]
pub(crate) fn combine(high: u16, low: u16) -> u32 {
    SUPPLEMENTARY_START
        + (((high & SURROGATE_VALUE_MASK) as u32) << 10)
        + (low & SURROGATE_VALUE_MASK) as u32
}

pub(crate) fn utf16_len(code_point: u32) -> usize {
    if code_point < SUPPLEMENTARY_START {
        1
    } else {
        2
    }
}

/// Code points below `0x10000` (lone surrogates included) map to themselves.
pub(crate) fn encode_code_point(code_point: u32) -> UnitBuf {
    if code_point < SUPPLEMENTARY_START {
        smallvec![code_point as u16]
    } else {
        let v = code_point - SUPPLEMENTARY_START;
        smallvec![
            (v >> 10) as u16 + HIGH_SURROGATE_START,
            (v & SURROGATE_VALUE_MASK as u32) as u16 + LOW_SURROGATE_START,
        ]
    }
}
