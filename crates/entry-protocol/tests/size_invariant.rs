// crates/entry-protocol/tests/size_invariant.rs
mod common;

use entry_core::{Request, RequestKind};
use entry_protocol::{FieldDictionary, RequestEncoder, RequestHeader};

use common::{cross, multileg_cross, new_order};

fn check(encoder: &RequestEncoder<'_>, request: &Request, contra: usize, legs: &[usize]) {
    let msg = encoder.encode(1, request).unwrap();
    let calculated = encoder
        .sizes()
        .calculate_size(request.kind(), contra, legs)
        .unwrap();
    assert_eq!(msg.len(), calculated, "{:?} contra={contra} legs={legs:?}", request.kind());
    assert_eq!(encoder.message_size(request).unwrap(), calculated);

    let header = RequestHeader::parse(&msg).unwrap();
    assert_eq!(header.length as usize, msg.len() - 2);
    assert_eq!(header.request_type, encoder.dictionary().request_type(request.kind()));
}

fn dictionaries() -> Vec<FieldDictionary> {
    let standard = FieldDictionary::standard();

    // wider cross bitmap, narrow price, longer symbol
    let mut custom = FieldDictionary::standard();
    custom.price.width = 4;
    for spec in custom.new_order.fields.iter_mut() {
        if spec.byte == 0 && spec.bit == 2 {
            spec.width = 4;
        }
    }
    custom.new_order.fields.last_mut().unwrap().width += 4;
    custom.new_order_cross.bitmap_len = 4;
    custom.new_order_cross.fields[0].width = 12;
    custom.new_order_cross_multileg.bitmap_len = 2;
    custom.new_order_cross_multileg.fields[0].byte = 1;

    vec![standard, custom]
}

#[test]
fn encoded_length_matches_size_calculator() {
    for dict in dictionaries() {
        let encoder = RequestEncoder::new(&dict).unwrap();

        check(&encoder, &Request::NewOrder(new_order()), 0, &[]);

        for contra in 0..=20 {
            check(&encoder, &Request::NewOrderCross(cross(contra)), contra, &[]);
        }

        let leg_patterns: [&[usize]; 6] = [
            &[0],
            &[1],
            &[4, 4],
            &[2, 0, 7],
            &[1, 2, 3, 4, 5, 6, 7, 8],
            &[255, 255],
        ];
        for legs in leg_patterns {
            let request = Request::NewOrderCrossMultileg(multileg_cross(legs));
            check(&encoder, &request, legs.len() - 1, legs);
        }
    }
}

#[test]
fn leg_counts_must_cover_every_order() {
    let dict = FieldDictionary::standard();
    let sizes = RequestEncoder::new(&dict).unwrap().sizes();
    let err = sizes
        .calculate_size(RequestKind::NewCrossMultileg, 2, &[1, 1])
        .unwrap_err();
    assert!(matches!(
        err,
        entry_protocol::EncodeError::LegCountMismatch {
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn complex_order_size_grows_one_byte_per_leg() {
    let dict = FieldDictionary::standard();
    let sizes = RequestEncoder::new(&dict).unwrap().sizes();
    assert_eq!(sizes.order_size(), 32);
    assert_eq!(sizes.complex_order_size(0), 32);
    assert_eq!(sizes.complex_order_size(5), 37);
}

#[test]
fn encoders_can_be_shared_between_threads() {
    let dict = FieldDictionary::standard();
    let encoder = RequestEncoder::new(&dict).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let encoder = &encoder;
                s.spawn(move || encoder.encode(i, &Request::NewOrderCross(cross(i as usize))))
            })
            .collect();

        for (i, h) in handles.into_iter().enumerate() {
            let msg = h.join().unwrap().unwrap();
            assert_eq!(RequestHeader::parse(&msg).unwrap().seq_no, i as u32);
        }
    });
}
