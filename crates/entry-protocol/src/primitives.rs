//! Fixed-width primitive field encoders.
//!
//! Every encoder writes exactly `W` bytes at `pos` and returns `pos + W`.
//! Multi-byte integers are always big-endian.
//!
//! The only failure is [`EncodeError::BufferOverrun`]: builders size their
//! buffers with the size calculator first, so an overrun means the
//! calculator and the layout disagree.

use entry_core::Decimal;

use crate::dictionary::PriceFormat;
use crate::error::EncodeError;
use crate::wire_types::PAD_BYTE;

/// Integers with a fixed big-endian wire representation.
pub trait WireInt: Copy {
    const WIDTH: usize;

    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_wire_int {
    ($($t:ty),*) => {
        $(
            impl WireInt for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn write_be(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_wire_int!(u8, u16, u32, i32, i64);

/// Borrow `width` bytes at `pos`, or report the overrun.
fn slot(buf: &mut [u8], pos: usize, width: usize) -> Result<&mut [u8], EncodeError> {
    let len = buf.len();
    pos.checked_add(width)
        .and_then(|end| buf.get_mut(pos..end))
        .ok_or(EncodeError::BufferOverrun {
            position: pos,
            width,
            len,
        })
}

/// Generic big-endian integer (used for header sub-fields).
pub fn encode<T: WireInt>(buf: &mut [u8], pos: usize, value: T) -> Result<usize, EncodeError> {
    value.write_be(slot(buf, pos, T::WIDTH)?);
    Ok(pos + T::WIDTH)
}

/// Single byte, written as-is.
pub fn encode_char(buf: &mut [u8], pos: usize, value: u8) -> Result<usize, EncodeError> {
    encode(buf, pos, value)
}

pub fn encode_binary2(buf: &mut [u8], pos: usize, value: u16) -> Result<usize, EncodeError> {
    encode(buf, pos, value)
}

pub fn encode_binary4(buf: &mut [u8], pos: usize, value: u32) -> Result<usize, EncodeError> {
    encode(buf, pos, value)
}

/// Fixed-width text.
///
/// Shorter values are right-padded with [`PAD_BYTE`]; longer values are
/// truncated to their first `width` bytes. Exactly `width` bytes are
/// written either way.
pub fn encode_text(
    buf: &mut [u8],
    pos: usize,
    value: &str,
    width: usize,
) -> Result<usize, EncodeError> {
    let dst = slot(buf, pos, width)?;
    let src = value.as_bytes();
    let n = src.len().min(width);
    dst[..n].copy_from_slice(&src[..n]);
    dst[n..].fill(PAD_BYTE);
    Ok(pos + width)
}

/// Fixed-width uppercase-alpha field. Same padding and truncation rules
/// as [`encode_text`]; the content itself is not checked.
pub fn encode_alpha(
    buf: &mut [u8],
    pos: usize,
    value: &str,
    width: usize,
) -> Result<usize, EncodeError> {
    encode_text(buf, pos, value, width)
}

/// Fixed-point price: `value * 10^scale`, rounded half away from zero,
/// written as a signed big-endian integer of the format's width.
pub fn encode_price(
    buf: &mut [u8],
    pos: usize,
    value: Decimal,
    format: &PriceFormat,
) -> Result<usize, EncodeError> {
    let ticks = format.to_ticks(value)?;
    match format.width {
        4 => {
            let narrow = i32::try_from(ticks).map_err(|_| format.out_of_range(value))?;
            encode(buf, pos, narrow)
        }
        8 => encode(buf, pos, ticks),
        _ => Err(format.out_of_range(value)),
    }
}
