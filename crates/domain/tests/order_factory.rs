//! Integration tests for building orders through the factory.

use chrono::{DateTime, TimeZone, Utc};
use common::UserId;
use domain::{
    DeliveryInfo, Money, OrderFactory, OrderItem, OrderNumber, OrderNumberGenerator, OrderStatus,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn delivery() -> DeliveryInfo {
    DeliveryInfo::new("Zhang San", "13800138000", "1 Chaoyang Road, Beijing")
}

fn item(id: &str, quantity: u32, price: Decimal) -> OrderItem {
    OrderItem::new(id, format!("Dish {id}"), quantity, Money::new(price))
}

mod pricing {
    use super::*;

    #[test]
    fn items_total_is_exact_sum_of_lines() {
        let cases: Vec<Vec<(u32, Decimal)>> = vec![
            vec![(2, dec!(28.00))],
            vec![(3, dec!(12.99))],
            vec![(1, dec!(0.10)), (1, dec!(0.20))],
            vec![(10, dec!(0.01)), (7, dec!(3.33)), (1, dec!(199.99))],
            (1..=50).map(|q| (q, dec!(0.07))).collect(),
        ];

        for lines in cases {
            let expected: Decimal = lines.iter().map(|(q, p)| Decimal::from(*q) * *p).sum();
            let items = lines
                .iter()
                .enumerate()
                .map(|(i, (q, p))| item(&format!("dish_{i}"), *q, *p))
                .collect();

            let order = OrderFactory::new().create_order(
                UserId::new(1),
                "merchant_001",
                items,
                delivery(),
                "",
            )
            .unwrap();

            assert_eq!(order.pricing().items_total().amount(), expected);
            assert_eq!(
                order.pricing().final_amount().amount(),
                expected + dec!(1.00) + dec!(3.00)
            );
        }
    }

    #[test]
    fn twelve_ninety_nine_times_three_has_no_float_drift() {
        let order = OrderFactory::new().create_order(
            UserId::new(1),
            "merchant_001",
            vec![item("dish_001", 3, dec!(12.99))],
            delivery(),
            "",
        )
        .unwrap();

        assert_eq!(order.pricing().items_total().to_string(), "38.97");
        assert_eq!(order.pricing().final_amount().to_string(), "42.97");
    }
}

mod order_numbers {
    use super::*;

    struct Sequence(std::sync::atomic::AtomicU32);

    impl OrderNumberGenerator for Sequence {
        fn generate(&self, created_at: DateTime<Utc>) -> OrderNumber {
            let next = self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            OrderNumber::from_parts(created_at, next)
        }
    }

    #[test]
    fn generated_numbers_embed_creation_time() {
        let factory = OrderFactory::new();
        for _ in 0..200 {
            let order = factory.create_order(
                UserId::new(1),
                "merchant_001",
                vec![item("dish_001", 1, dec!(1.00))],
                delivery(),
                "",
            )
            .unwrap();

            let number = order.order_number().as_str();
            assert_eq!(number.len(), 20);
            assert!(number.bytes().all(|b| b.is_ascii_digit()));
            assert_eq!(
                &number[..14],
                order.created_at().format("%Y%m%d%H%M%S").to_string()
            );
        }
    }

    #[test]
    fn factory_uses_injected_generator() {
        let factory = OrderFactory::with_generator(Sequence(0.into()));
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let first = factory.create_order_at(
            now,
            UserId::new(1),
            "merchant_001",
            vec![item("dish_001", 1, dec!(1.00))],
            delivery(),
            "",
        )
        .unwrap();
        let second = factory.create_order_at(
            now,
            UserId::new(1),
            "merchant_001",
            vec![item("dish_001", 1, dec!(1.00))],
            delivery(),
            "",
        )
        .unwrap();

        assert_eq!(first.order_number().as_str(), "20240102030405000000");
        assert_eq!(second.order_number().as_str(), "20240102030405000001");
    }
}

#[test]
fn new_orders_await_payment() {
    let order = OrderFactory::new().create_order(
        UserId::new(42),
        "merchant_009",
        vec![item("dish_001", 1, dec!(5.50))],
        delivery(),
        "no onions",
    )
    .unwrap();

    assert_eq!(order.status(), OrderStatus::PendingPayment);
    assert_eq!(order.created_at(), order.updated_at());
    assert_eq!(order.user_id(), UserId::new(42));
    assert_eq!(order.remark(), "no onions");
}
