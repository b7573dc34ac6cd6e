// crates/entry-core/tests/wire_codes.rs
use entry_core::{
    AccountType, Capacity, ComplexOrder, Order, OrdType, Position, Request, RequestKind, Side,
    TimeInForce,
};

#[test]
fn enumerations_map_to_documented_codes() {
    assert_eq!(Side::Buy.wire_code(), b'1');
    assert_eq!(Side::Sell.wire_code(), b'2');

    assert_eq!(OrdType::Market.wire_code(), b'1');
    assert_eq!(OrdType::Limit.wire_code(), b'2');
    assert_eq!(OrdType::Pegged.wire_code(), b'P');

    assert_eq!(TimeInForce::Day.wire_code(), b'0');
    assert_eq!(TimeInForce::Ioc.wire_code(), b'3');
    assert_eq!(TimeInForce::Gtd.wire_code(), b'6');

    assert_eq!(Capacity::Agency.wire_code(), b'A');
    assert_eq!(Capacity::Principal.wire_code(), b'P');
    assert_eq!(Capacity::RisklessPrincipal.wire_code(), b'R');

    assert_eq!(AccountType::Client.wire_code(), b'1');
    assert_eq!(AccountType::House.wire_code(), b'3');

    assert_eq!(Position::Open.wire_code(), b'O');
    assert_eq!(Position::Close.wire_code(), b'C');
    assert_eq!(Position::None.wire_code(), b'N');
}

#[test]
fn wire_codes_are_reversible() {
    for side in [Side::Buy, Side::Sell] {
        assert_eq!(Side::from_wire_code(side.wire_code()), Some(side));
    }
    for t in [OrdType::Market, OrdType::Limit, OrdType::Pegged] {
        assert_eq!(OrdType::from_wire_code(t.wire_code()), Some(t));
    }
    for tif in [TimeInForce::Day, TimeInForce::Ioc, TimeInForce::Gtd] {
        assert_eq!(TimeInForce::from_wire_code(tif.wire_code()), Some(tif));
    }
    for c in [
        Capacity::Agency,
        Capacity::Principal,
        Capacity::RisklessPrincipal,
    ] {
        assert_eq!(Capacity::from_wire_code(c.wire_code()), Some(c));
    }
    for a in [AccountType::Client, AccountType::House] {
        assert_eq!(AccountType::from_wire_code(a.wire_code()), Some(a));
    }
    for p in [Position::Open, Position::Close, Position::None] {
        assert_eq!(Position::from_wire_code(p.wire_code()), Some(p));
    }

    assert_eq!(Side::from_wire_code(0), None);
    assert_eq!(Position::from_wire_code(b'X'), None);
}

fn order(algo: bool) -> Order {
    Order {
        side: Side::Sell,
        volume: 10,
        cl_ord_id: "ORD1".to_string(),
        capacity: Capacity::Principal,
        clearing_firm: "CLRB".to_string(),
        account_type: AccountType::House,
        algorithmic_indicator: algo,
    }
}

#[test]
fn algorithmic_indicator_is_y_or_n() {
    assert_eq!(order(true).algorithmic_indicator_code(), "Y");
    assert_eq!(order(false).algorithmic_indicator_code(), "N");
}

#[test]
fn leg_string_preserves_leg_order() {
    let complex = ComplexOrder {
        order: order(false),
        legs: vec![Position::Close, Position::Open, Position::None, Position::Open],
    };
    assert_eq!(complex.leg_string(), "CONO");
    assert_eq!(complex.leg_count(), 4);
}

#[test]
fn requests_deserialize_from_tagged_toml() {
    #[derive(serde::Deserialize)]
    struct File {
        request: Vec<Request>,
    }

    let text = r#"
        [[request]]
        kind = "new_order_cross_multileg"
        cross_id = "X1"
        price = "1.5"
        symbol = "SPX"
        agency_order = { side = "buy", volume = 5, cl_ord_id = "A", capacity = "agency", clearing_firm = "AAA", account_type = "client", legs = ["open", "close"] }
        contra_orders = [
          { side = "sell", volume = 5, cl_ord_id = "B", capacity = "principal", clearing_firm = "BBB", account_type = "house", algorithmic_indicator = true, legs = ["close", "open"] },
        ]
    "#;

    let file: File = toml::from_str(text).expect("valid request");
    assert_eq!(file.request.len(), 1);
    let request = &file.request[0];
    assert_eq!(request.kind(), RequestKind::NewCrossMultileg);

    match request {
        Request::NewOrderCrossMultileg(c) => {
            assert_eq!(c.leg_counts(), vec![2, 2]);
            assert_eq!(c.agency_order.leg_string(), "OC");
            assert!(!c.agency_order.order.algorithmic_indicator);
            assert!(c.contra_orders[0].order.algorithmic_indicator);
        }
        other => panic!("unexpected request {:?}", other),
    }
}

#[test]
fn account_type_has_its_own_module() {
    use entry_core::account_type::AccountType as Direct;

    assert_eq!(Direct::House, AccountType::House);
    assert_eq!(
        toml::from_str::<std::collections::BTreeMap<String, Direct>>("a = \"client\"").unwrap()["a"],
        AccountType::Client
    );
}
