//! Per-order encoding inside cross messages.
//!
//! ```text
//! mandatory block (31 bytes)
//!   side            1
//!   volume          4  (u32 BE)
//!   cl_ord_id      20  (text)
//!   capacity        1
//!   clearing firm   4  (alpha)
//!   account type    1
//! trailer
//!   Order:         algorithmic indicator (1)
//!   ComplexOrder:  legs (1 per leg) + algorithmic indicator (1)
//! ```

use entry_core::{ComplexOrder, Order};

use crate::error::EncodeError;
use crate::optional_fields::{encode_trailer, COMPLEX_ORDER_TRAILER, ORDER_TRAILER};
use crate::primitives::{encode_alpha, encode_binary4, encode_char, encode_text};
use crate::wire_types::{CLEARING_FIRM_WIDTH, CL_ORD_ID_WIDTH};

/// Mandatory block shared by plain and complex orders.
pub fn encode_order_main_part(
    buf: &mut [u8],
    pos: usize,
    order: &Order,
) -> Result<usize, EncodeError> {
    let mut p = encode_char(buf, pos, order.side.wire_code())?;
    p = encode_binary4(buf, p, order.volume)?;
    p = encode_text(buf, p, &order.cl_ord_id, CL_ORD_ID_WIDTH)?;
    p = encode_char(buf, p, order.capacity.wire_code())?;
    p = encode_alpha(buf, p, &order.clearing_firm, CLEARING_FIRM_WIDTH)?;
    encode_char(buf, p, order.account_type.wire_code())
}

pub fn encode_order(buf: &mut [u8], pos: usize, order: &Order) -> Result<usize, EncodeError> {
    let p = encode_order_main_part(buf, pos, order)?;
    encode_trailer(buf, p, ORDER_TRAILER, order)
}

pub fn encode_complex_order(
    buf: &mut [u8],
    pos: usize,
    order: &ComplexOrder,
) -> Result<usize, EncodeError> {
    let p = encode_order_main_part(buf, pos, &order.order)?;
    encode_trailer(buf, p, COMPLEX_ORDER_TRAILER, order)
}
