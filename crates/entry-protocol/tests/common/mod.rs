// crates/entry-protocol/tests/common/mod.rs
#![allow(dead_code)]

use entry_core::{
    AccountType, Capacity, ComplexOrder, Decimal, NewOrder, NewOrderCross, NewOrderCrossMultileg,
    Order, OrdType, Position, Side, TimeInForce,
};

pub fn new_order() -> NewOrder {
    NewOrder {
        cl_ord_id: "ABC".to_string(),
        side: Side::Buy,
        volume: 100,
        price: Decimal::new(125, 1), // 12.5
        ord_type: OrdType::Limit,
        time_in_force: TimeInForce::Day,
        max_floor: 0,
        symbol: "MSFT".to_string(),
        capacity: Capacity::Agency,
        account: "ACCT1".to_string(),
    }
}

pub fn order(cl_ord_id: &str, side: Side, volume: u32) -> Order {
    Order {
        side,
        volume,
        cl_ord_id: cl_ord_id.to_string(),
        capacity: Capacity::Agency,
        clearing_firm: "CLRA".to_string(),
        account_type: AccountType::Client,
        algorithmic_indicator: false,
    }
}

pub fn cross(contra_count: usize) -> NewOrderCross {
    NewOrderCross {
        cross_id: "CROSS1".to_string(),
        price: Decimal::new(1025, 2), // 10.25
        symbol: "IBM".to_string(),
        agency_order: order("AGENCY", Side::Buy, 300),
        contra_orders: (0..contra_count)
            .map(|i| order(&format!("CONTRA{i}"), Side::Sell, 100))
            .collect(),
    }
}

pub fn complex_order(cl_ord_id: &str, side: Side, legs: &[Position]) -> ComplexOrder {
    ComplexOrder {
        order: order(cl_ord_id, side, 50),
        legs: legs.to_vec(),
    }
}

/// Multileg cross whose orders have the given leg counts, agency first.
pub fn multileg_cross(leg_counts: &[usize]) -> NewOrderCrossMultileg {
    let cycle = [Position::Open, Position::Close, Position::None];
    let mut orders: Vec<ComplexOrder> = leg_counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let legs: Vec<Position> = (0..n).map(|j| cycle[j % cycle.len()]).collect();
            let side = if i == 0 { Side::Buy } else { Side::Sell };
            complex_order(&format!("ML{i}"), side, &legs)
        })
        .collect();
    let agency_order = orders.remove(0);

    NewOrderCrossMultileg {
        cross_id: "MLX".to_string(),
        price: Decimal::new(-35, 1), // spreads can trade at negative prices
        symbol: "SPX".to_string(),
        agency_order,
        contra_orders: orders,
    }
}

pub fn be_u16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

pub fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

pub fn be_i64(bytes: &[u8]) -> i64 {
    let mut arr = [0u8; 8];
    arr.copy_from_slice(&bytes[..8]);
    i64::from_be_bytes(arr)
}
