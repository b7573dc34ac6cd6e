//! Low-level wire constants.
//!
//! This module defines:
//! - the header marker and header geometry,
//! - widths of the mandatory (non-dictionary) fields,
//! - cardinality limits imposed by the count fields.
//!
//! Widths of the bitmap-driven optional fields are *not* here; they
//! come from the [`FieldDictionary`](crate::dictionary::FieldDictionary).

/// Two-byte marker opening every request.
pub const PROTOCOL_MARKER: [u8; 2] = [0xBA, 0xBA];

/// Fixed header: marker (2) + length (2) + type (1) + reserved (1) + seq (4).
pub const HEADER_LEN: usize = 10;

/// Bytes of the header not covered by the length field (the marker).
pub const LENGTH_EXCLUDED: usize = PROTOCOL_MARKER.len();

/// Filler used to right-pad text and alpha fields.
pub const PAD_BYTE: u8 = b' ';

pub const CL_ORD_ID_WIDTH: usize = 20;
pub const CROSS_ID_WIDTH: usize = 20;
pub const CLEARING_FIRM_WIDTH: usize = 4;
pub const VOLUME_WIDTH: usize = 4;

/// Width of the bitmap-length marker preceding each optional block.
pub const BITMAP_LEN_WIDTH: usize = 1;

/// Width of the order count in cross messages.
pub const ORDER_COUNT_WIDTH: usize = 2;

/// Cross type byte written after the cross id.
pub const CROSS_TYPE: u8 = 0x01;

/// Width of the algorithmic-indicator trailer field (`Y`/`N`).
pub const ALGORITHMIC_INDICATOR_WIDTH: usize = 1;

/// Mandatory block of one order:
/// side (1) + volume (4) + cl_ord_id (20) + capacity (1)
/// + clearing firm (4) + account type (1).
pub const ORDER_MANDATORY_LEN: usize =
    1 + VOLUME_WIDTH + CL_ORD_ID_WIDTH + 1 + CLEARING_FIRM_WIDTH + 1;

/// Fixed part of a New Order ahead of the optional block:
/// header + cl_ord_id + side + volume + bitmap length.
pub const NEW_ORDER_PREFIX_LEN: usize =
    HEADER_LEN + CL_ORD_ID_WIDTH + 1 + VOLUME_WIDTH + BITMAP_LEN_WIDTH;

/// Total length of a New Order request. This is a protocol constant:
/// a field dictionary whose New Order layout disagrees is rejected.
pub const NEW_ORDER_LEN: usize = 78;

/// Upper bound on orders in a cross (agency included), set by the
/// 2-byte count field.
pub const MAX_ORDERS: usize = u16::MAX as usize;

/// Upper bound on legs in a complex order.
pub const MAX_LEGS: usize = u8::MAX as usize;

/// Largest message the 2-byte length field can describe.
pub const MAX_MESSAGE_LEN: usize = u16::MAX as usize + LENGTH_EXCLUDED;
