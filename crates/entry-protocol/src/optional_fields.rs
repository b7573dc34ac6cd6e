//! Optional-field encoders.
//!
//! Two flavours share this module:
//!
//! - the **bitmap** encoder, driven by an [`OptionalBlock`] from the field
//!   dictionary: a presence bitmap followed by the field values in schema
//!   order;
//! - the **sequential** encoder for order trailers, whose fields are
//!   always present and carry no bitmap.
//!
//! ```text
//! bitmap block:  [bitmap (bitmap_len)] [field 1] [field 2] ... [field n]
//! trailer:       [field 1] [field 2] ...
//! ```

use std::borrow::Cow;

use entry_core::{ComplexOrder, Decimal, Order, RequestKind};
use tracing::trace;

use crate::dictionary::{FieldEncoding, OptionalBlock, OptionalField, PriceFormat};
use crate::error::EncodeError;
use crate::primitives::{encode_alpha, encode_binary4, encode_char, encode_price, encode_text};
use crate::wire_types::ALGORITHMIC_INDICATOR_WIDTH;

/// A value for one optional field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Char(u8),
    Binary(u32),
    Price(Decimal),
    Text(&'a str),
}

/// Supplies optional-field values for one request.
pub trait FieldSource {
    fn kind(&self) -> RequestKind;

    /// `None` when the request has no such field.
    fn value(&self, field: OptionalField) -> Option<FieldValue<'_>>;
}

/// Encode a bitmap block starting at `pos`.
///
/// For each schema entry, in order: set its bit in the bitmap, then append
/// its value right after the bitmap region. The whole schema is always
/// emitted, so every scheduled bit ends up set and no other bit is.
pub fn encode_bitmap_block(
    buf: &mut [u8],
    pos: usize,
    block: &OptionalBlock,
    price_format: &PriceFormat,
    source: &dyn FieldSource,
) -> Result<usize, EncodeError> {
    let len = buf.len();
    let bitmap = buf
        .get_mut(pos..pos + block.bitmap_len)
        .ok_or(EncodeError::BufferOverrun {
            position: pos,
            width: block.bitmap_len,
            len,
        })?;
    bitmap.fill(0);

    let mut p = pos + block.bitmap_len;
    for spec in &block.fields {
        let value = source
            .value(spec.field)
            .ok_or(EncodeError::UnsupportedField {
                kind: source.kind(),
                field: spec.field,
            })?;

        match buf.get_mut(pos + spec.byte) {
            Some(bits) if spec.byte < block.bitmap_len => *bits |= spec.mask(),
            _ => {
                return Err(EncodeError::BufferOverrun {
                    position: pos + spec.byte,
                    width: 1,
                    len,
                })
            }
        }

        p = match value {
            FieldValue::Char(c) => encode_char(buf, p, c)?,
            FieldValue::Binary(v) => encode_binary4(buf, p, v)?,
            FieldValue::Price(v) => encode_price(buf, p, v, price_format)?,
            FieldValue::Text(s) => match spec.field.encoding() {
                FieldEncoding::Alpha => encode_alpha(buf, p, s, spec.width)?,
                _ => encode_text(buf, p, s, spec.width)?,
            },
        };
    }

    trace!(
        kind = %source.kind(),
        fields = block.fields.len(),
        bytes = p - pos,
        "encoded optional block"
    );
    Ok(p)
}

/// Trailer fields following an order's mandatory block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrailerField {
    /// One position code per leg.
    Legs,
    /// `Y` / `N`.
    AlgorithmicIndicator,
}

impl TrailerField {
    /// Wire width for an order with `leg_count` legs.
    pub fn width(self, leg_count: usize) -> usize {
        match self {
            TrailerField::Legs => leg_count,
            TrailerField::AlgorithmicIndicator => ALGORITHMIC_INDICATOR_WIDTH,
        }
    }
}

/// Trailer schema of a plain order.
pub const ORDER_TRAILER: &[TrailerField] = &[TrailerField::AlgorithmicIndicator];

/// Trailer schema of a complex order: legs ahead of the indicator.
pub const COMPLEX_ORDER_TRAILER: &[TrailerField] =
    &[TrailerField::Legs, TrailerField::AlgorithmicIndicator];

/// Supplies the text of each trailer field.
pub trait TrailerSource {
    fn leg_count(&self) -> usize;

    fn trailer_text(&self, field: TrailerField) -> Cow<'_, str>;
}

impl TrailerSource for Order {
    fn leg_count(&self) -> usize {
        0
    }

    fn trailer_text(&self, field: TrailerField) -> Cow<'_, str> {
        match field {
            TrailerField::Legs => Cow::Borrowed(""),
            TrailerField::AlgorithmicIndicator => Cow::Borrowed(self.algorithmic_indicator_code()),
        }
    }
}

impl TrailerSource for ComplexOrder {
    fn leg_count(&self) -> usize {
        self.leg_count()
    }

    fn trailer_text(&self, field: TrailerField) -> Cow<'_, str> {
        match field {
            TrailerField::Legs => Cow::Owned(self.leg_string()),
            TrailerField::AlgorithmicIndicator => {
                Cow::Borrowed(self.order.algorithmic_indicator_code())
            }
        }
    }
}

/// Bytes a trailer occupies for an order with `leg_count` legs.
pub fn trailer_len(schema: &[TrailerField], leg_count: usize) -> usize {
    schema.iter().map(|f| f.width(leg_count)).sum()
}

/// Encode trailer fields back to back, in schema order, no bitmap.
pub fn encode_trailer(
    buf: &mut [u8],
    pos: usize,
    schema: &[TrailerField],
    source: &dyn TrailerSource,
) -> Result<usize, EncodeError> {
    let leg_count = source.leg_count();
    let mut p = pos;
    for field in schema {
        let text = source.trailer_text(*field);
        p = encode_text(buf, p, &text, field.width(leg_count))?;
    }
    Ok(p)
}
