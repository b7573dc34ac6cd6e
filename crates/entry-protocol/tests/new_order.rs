// crates/entry-protocol/tests/new_order.rs
mod common;

use entry_core::{Decimal, Request, RequestKind};
use entry_protocol::{
    EncodeError, FieldDictionary, RequestEncoder, RequestHeader, SizeCalculator, NEW_ORDER_LEN,
};

use common::{be_i64, be_u32, new_order};

#[test]
fn new_order_matches_reference_layout() {
    let dict = FieldDictionary::standard();
    let encoder = RequestEncoder::new(&dict).unwrap();

    let msg = encoder.new_order(1, &new_order()).unwrap();
    assert_eq!(msg.len(), 78);
    assert_eq!(NEW_ORDER_LEN, 78);

    // header
    assert_eq!(
        &msg[0..10],
        &[0xBA, 0xBA, 0x00, 0x4C, 0x38, 0x00, 0x00, 0x00, 0x00, 0x01]
    );

    // mandatory part
    assert_eq!(&msg[10..30], b"ABC                 ");
    assert_eq!(msg[30], b'1');
    assert_eq!(be_u32(&msg[31..35]), 100);
    assert_eq!(msg[35], 3, "bitmap length");

    // bitmap: price|ord_type|tif|max_floor, symbol|capacity, account
    assert_eq!(&msg[36..39], &[0xB4, 0x41, 0x01]);

    // optional fields in schema order
    assert_eq!(be_i64(&msg[39..47]), 125_000);
    assert_eq!(msg[47], b'2');
    assert_eq!(msg[48], b'0');
    assert_eq!(be_u32(&msg[49..53]), 0);
    assert_eq!(&msg[53..61], b"MSFT    ");
    assert_eq!(msg[61], b'A');
    assert_eq!(&msg[62..78], b"ACCT1           ");
}

#[test]
fn new_order_size_is_constant() {
    let dict = FieldDictionary::standard();
    let sizes = SizeCalculator::new(&dict);
    assert_eq!(sizes.new_order_size(), NEW_ORDER_LEN);
    assert_eq!(
        sizes.calculate_size(RequestKind::New, 7, &[1, 2, 3]).unwrap(),
        NEW_ORDER_LEN
    );
}

#[test]
fn header_length_is_total_minus_marker() {
    let dict = FieldDictionary::standard();
    let encoder = RequestEncoder::new(&dict).unwrap();
    let msg = encoder.new_order(0xDEAD_BEEF, &new_order()).unwrap();

    let header = RequestHeader::parse(&msg).unwrap();
    assert_eq!(header.length as usize, msg.len() - 2);
    assert_eq!(header.message_len(), msg.len());
    assert_eq!(header.request_type, 0x38);
    assert_eq!(header.seq_no, 0xDEAD_BEEF);
}

#[test]
fn every_scheduled_bit_is_set_and_no_other() {
    let dict = FieldDictionary::standard();
    let encoder = RequestEncoder::new(&dict).unwrap();
    let msg = encoder.new_order(1, &new_order()).unwrap();

    let block = &dict.new_order;
    let mut expected = vec![0u8; block.bitmap_len];
    for spec in &block.fields {
        expected[spec.byte] |= 1 << spec.bit;
    }
    assert_eq!(&msg[36..36 + block.bitmap_len], expected.as_slice());
}

#[test]
fn long_identifiers_are_truncated_not_rejected() {
    let dict = FieldDictionary::standard();
    let encoder = RequestEncoder::new(&dict).unwrap();

    let mut order = new_order();
    order.cl_ord_id = "0123456789ABCDEFGHIJKLMNOP".to_string();
    order.symbol = "VERYLONGSYMBOL".to_string();

    let msg = encoder.new_order(1, &order).unwrap();
    assert_eq!(msg.len(), NEW_ORDER_LEN);
    assert_eq!(&msg[10..30], b"0123456789ABCDEFGHIJ");
    assert_eq!(&msg[53..61], b"VERYLONG");
}

#[test]
fn unified_encode_returns_the_same_bytes() {
    let dict = FieldDictionary::standard();
    let encoder = RequestEncoder::new(&dict).unwrap();
    let order = new_order();

    let fixed = encoder.new_order(9, &order).unwrap();
    let dynamic = encoder.encode(9, &Request::NewOrder(order)).unwrap();
    assert_eq!(dynamic, fixed.to_vec());
}

#[test]
fn dictionary_reorders_optional_fields() {
    let mut dict = FieldDictionary::standard();
    // move account ahead of everything else
    let account = dict.new_order.fields.pop().unwrap();
    dict.new_order.fields.insert(0, account);

    let encoder = RequestEncoder::new(&dict).unwrap();
    let msg = encoder.new_order(1, &new_order()).unwrap();

    assert_eq!(&msg[36..39], &[0xB4, 0x41, 0x01], "bits do not depend on order");
    assert_eq!(&msg[39..55], b"ACCT1           ");
    assert_eq!(be_i64(&msg[55..63]), 125_000);
}

#[test]
fn unrepresentable_price_fails_without_output() {
    let mut dict = FieldDictionary::standard();
    dict.price.width = 4;
    for spec in dict.new_order.fields.iter_mut() {
        if spec.width == 8 && spec.field == entry_protocol::OptionalField::Price {
            spec.width = 4;
        }
    }
    // keep the 78-byte footprint: the four freed bytes go to the account
    dict.new_order.fields.last_mut().unwrap().width += 4;

    let encoder = RequestEncoder::new(&dict).unwrap();
    let mut order = new_order();
    order.price = Decimal::new(1_000_000, 0);

    let err = encoder.new_order(1, &order).unwrap_err();
    assert!(matches!(err, EncodeError::PriceOutOfRange { width: 4, .. }));
}

#[test]
fn invalid_dictionary_is_refused_by_the_encoder() {
    let mut dict = FieldDictionary::standard();
    dict.new_order.fields[0].bit = 9;
    assert!(RequestEncoder::new(&dict).is_err());
}
