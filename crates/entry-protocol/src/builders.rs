//! Message builders.
//!
//! A builder sizes the message with the [`SizeCalculator`], validates
//! every input that could fail, and only then writes:
//!
//! ```text
//! New Order
//!   header (10)
//!   cl_ord_id (20) | side (1) | volume (4) | bitmap length (1)
//!   optional block (bitmap + fields per dictionary)
//!
//! New Order Cross / New Order Cross Multileg
//!   header (10)
//!   cross_id (20) | cross type (1) | side (1) | price | volume (4)
//!   bitmap length (1) | optional block
//!   order count (2)
//!   agency order, then each contra order in input order
//! ```
//!
//! The written length is compared with the calculated one before a
//! buffer is returned; a mismatch is reported as
//! [`EncodeError::SizeMismatch`] and the bytes are discarded.

use entry_core::{
    Decimal, NewOrder, NewOrderCross, NewOrderCrossMultileg, Order, Request, RequestKind,
};
use tracing::debug;

use crate::dictionary::{FieldDictionary, OptionalField};
use crate::error::{DictionaryError, EncodeError};
use crate::header::RequestHeader;
use crate::optional_fields::{encode_bitmap_block, FieldSource, FieldValue};
use crate::order_codec::{encode_complex_order, encode_order};
use crate::primitives::{encode, encode_binary2, encode_binary4, encode_char, encode_price, encode_text};
use crate::size::SizeCalculator;
use crate::wire_types::{CL_ORD_ID_WIDTH, CROSS_ID_WIDTH, CROSS_TYPE, NEW_ORDER_LEN};

/// Optional-field values of a New Order.
struct NewOrderFields<'a>(&'a NewOrder);

impl FieldSource for NewOrderFields<'_> {
    fn kind(&self) -> RequestKind {
        RequestKind::New
    }

    fn value(&self, field: OptionalField) -> Option<FieldValue<'_>> {
        let o = self.0;
        Some(match field {
            OptionalField::Price => FieldValue::Price(o.price),
            OptionalField::OrdType => FieldValue::Char(o.ord_type.wire_code()),
            OptionalField::TimeInForce => FieldValue::Char(o.time_in_force.wire_code()),
            OptionalField::MaxFloor => FieldValue::Binary(o.max_floor),
            OptionalField::Symbol => FieldValue::Text(&o.symbol),
            OptionalField::Capacity => FieldValue::Char(o.capacity.wire_code()),
            OptionalField::Account => FieldValue::Text(&o.account),
        })
    }
}

/// Optional-field values of both cross kinds.
struct CrossFields<'a> {
    kind: RequestKind,
    symbol: &'a str,
}

impl FieldSource for CrossFields<'_> {
    fn kind(&self) -> RequestKind {
        self.kind
    }

    fn value(&self, field: OptionalField) -> Option<FieldValue<'_>> {
        match field {
            OptionalField::Symbol => Some(FieldValue::Text(self.symbol)),
            _ => None,
        }
    }
}

/// Encodes requests against one field dictionary.
///
/// Holds no state besides the borrowed dictionary, so a single encoder can
/// be shared across threads.
#[derive(Debug, Copy, Clone)]
pub struct RequestEncoder<'d> {
    dict: &'d FieldDictionary,
}

impl<'d> RequestEncoder<'d> {
    /// Validates `dict` once; every later encode relies on it.
    pub fn new(dict: &'d FieldDictionary) -> Result<Self, DictionaryError> {
        dict.validate()?;
        Ok(RequestEncoder { dict })
    }

    pub fn dictionary(&self) -> &'d FieldDictionary {
        self.dict
    }

    pub fn sizes(&self) -> SizeCalculator<'d> {
        SizeCalculator::new(self.dict)
    }

    /// Exact encoded length of `request`, or the reason it cannot be encoded.
    pub fn message_size(&self, request: &Request) -> Result<usize, EncodeError> {
        let sizes = self.sizes();
        match request {
            Request::NewOrder(_) => Ok(sizes.new_order_size()),
            Request::NewOrderCross(c) => sizes.new_order_cross_size(c.contra_orders.len()),
            Request::NewOrderCrossMultileg(c) => {
                sizes.new_order_cross_multileg_size(&c.leg_counts())
            }
        }
    }

    /// Encode a New Order into its fixed-size array.
    pub fn new_order(
        &self,
        seq_no: u32,
        order: &NewOrder,
    ) -> Result<[u8; NEW_ORDER_LEN], EncodeError> {
        self.dict.price.to_ticks(order.price)?;

        let mut msg = [0u8; NEW_ORDER_LEN];
        let written = self.write_new_order(&mut msg, seq_no, order)?;
        finish(RequestKind::New, seq_no, NEW_ORDER_LEN, written)?;
        Ok(msg)
    }

    pub fn new_order_cross(
        &self,
        seq_no: u32,
        cross: &NewOrderCross,
    ) -> Result<Vec<u8>, EncodeError> {
        let size = self.sizes().new_order_cross_size(cross.contra_orders.len())?;
        self.dict.price.to_ticks(cross.price)?;

        let mut msg = vec![0u8; size];
        let written = self.write_new_order_cross(&mut msg, seq_no, cross)?;
        finish(RequestKind::NewCross, seq_no, size, written)?;
        Ok(msg)
    }

    pub fn new_order_cross_multileg(
        &self,
        seq_no: u32,
        cross: &NewOrderCrossMultileg,
    ) -> Result<Vec<u8>, EncodeError> {
        let size = self
            .sizes()
            .new_order_cross_multileg_size(&cross.leg_counts())?;
        self.dict.price.to_ticks(cross.price)?;

        let mut msg = vec![0u8; size];
        let written = self.write_new_order_cross_multileg(&mut msg, seq_no, cross)?;
        finish(RequestKind::NewCrossMultileg, seq_no, size, written)?;
        Ok(msg)
    }

    /// Encode any request into a freshly allocated buffer.
    pub fn encode(&self, seq_no: u32, request: &Request) -> Result<Vec<u8>, EncodeError> {
        match request {
            Request::NewOrder(o) => Ok(self.new_order(seq_no, o)?.to_vec()),
            Request::NewOrderCross(c) => self.new_order_cross(seq_no, c),
            Request::NewOrderCrossMultileg(c) => self.new_order_cross_multileg(seq_no, c),
        }
    }

    /// Encode into the front of a caller-provided buffer and return the
    /// number of bytes written.
    ///
    /// Nothing is written if the buffer is too small or an input is
    /// rejected. If writing itself fails the message region is zeroed
    /// again before returning.
    pub fn encode_into(
        &self,
        seq_no: u32,
        request: &Request,
        buf: &mut [u8],
    ) -> Result<usize, EncodeError> {
        let size = self.message_size(request)?;
        if buf.len() < size {
            return Err(EncodeError::BufferTooSmall {
                required: size,
                available: buf.len(),
            });
        }
        match request {
            Request::NewOrder(o) => self.dict.price.to_ticks(o.price)?,
            Request::NewOrderCross(c) => self.dict.price.to_ticks(c.price)?,
            Request::NewOrderCrossMultileg(c) => self.dict.price.to_ticks(c.price)?,
        };

        let region = &mut buf[..size];
        region.fill(0);
        let written = match request {
            Request::NewOrder(o) => self.write_new_order(region, seq_no, o),
            Request::NewOrderCross(c) => self.write_new_order_cross(region, seq_no, c),
            Request::NewOrderCrossMultileg(c) => {
                self.write_new_order_cross_multileg(region, seq_no, c)
            }
        }
        .and_then(|written| finish(request.kind(), seq_no, size, written));

        if written.is_err() {
            region.fill(0);
        }
        written
    }

    // Writers below get a buffer of exactly the calculated size.

    fn write_new_order(
        &self,
        buf: &mut [u8],
        seq_no: u32,
        order: &NewOrder,
    ) -> Result<usize, EncodeError> {
        let kind = RequestKind::New;
        let block = self.dict.block(kind);

        let header = RequestHeader::new(kind, buf.len(), self.dict.request_type(kind), seq_no)?;
        let mut p = header.write(buf, 0)?;
        p = encode_text(buf, p, &order.cl_ord_id, CL_ORD_ID_WIDTH)?;
        p = encode_char(buf, p, order.side.wire_code())?;
        p = encode_binary4(buf, p, order.volume)?;
        p = encode(buf, p, block.bitmap_len as u8)?;
        encode_bitmap_block(buf, p, block, &self.dict.price, &NewOrderFields(order))
    }

    fn write_new_order_cross(
        &self,
        buf: &mut [u8],
        seq_no: u32,
        cross: &NewOrderCross,
    ) -> Result<usize, EncodeError> {
        let kind = RequestKind::NewCross;
        let mut p = self.write_cross_main_part(
            buf,
            kind,
            seq_no,
            &cross.cross_id,
            cross.price,
            &cross.symbol,
            &cross.agency_order,
        )?;

        p = encode_binary2(buf, p, cross.order_count() as u16)?;
        for order in cross.orders() {
            p = encode_order(buf, p, order)?;
        }
        Ok(p)
    }

    fn write_new_order_cross_multileg(
        &self,
        buf: &mut [u8],
        seq_no: u32,
        cross: &NewOrderCrossMultileg,
    ) -> Result<usize, EncodeError> {
        let kind = RequestKind::NewCrossMultileg;
        let mut p = self.write_cross_main_part(
            buf,
            kind,
            seq_no,
            &cross.cross_id,
            cross.price,
            &cross.symbol,
            &cross.agency_order.order,
        )?;

        p = encode_binary2(buf, p, cross.order_count() as u16)?;
        for order in cross.orders() {
            p = encode_complex_order(buf, p, order)?;
        }
        Ok(p)
    }

    /// Header, cross fields and the optional block, up to the order count.
    #[allow(clippy::too_many_arguments)]
    fn write_cross_main_part(
        &self,
        buf: &mut [u8],
        kind: RequestKind,
        seq_no: u32,
        cross_id: &str,
        price: Decimal,
        symbol: &str,
        agency_order: &Order,
    ) -> Result<usize, EncodeError> {
        let block = self.dict.block(kind);

        let header = RequestHeader::new(kind, buf.len(), self.dict.request_type(kind), seq_no)?;
        let mut p = header.write(buf, 0)?;
        p = encode_text(buf, p, cross_id, CROSS_ID_WIDTH)?;
        p = encode_char(buf, p, CROSS_TYPE)?;
        p = encode_char(buf, p, agency_order.side.wire_code())?;
        p = encode_price(buf, p, price, &self.dict.price)?;
        p = encode_binary4(buf, p, agency_order.volume)?;
        p = encode(buf, p, block.bitmap_len as u8)?;
        encode_bitmap_block(buf, p, block, &self.dict.price, &CrossFields { kind, symbol })
    }
}

fn finish(
    kind: RequestKind,
    seq_no: u32,
    expected: usize,
    written: usize,
) -> Result<usize, EncodeError> {
    if written != expected {
        return Err(EncodeError::SizeMismatch {
            kind,
            expected,
            written,
        });
    }
    debug!(kind = %kind, seq_no, length = written, "encoded request");
    Ok(written)
}
