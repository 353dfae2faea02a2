//! Concurrency tests for the in-memory order repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::UserId;
use domain::{
    DeliveryInfo, Money, Order, OrderFactory, OrderItem, OrderNumber, OrderNumberGenerator,
    OrderRepository, RepositoryError,
};
use order_store::InMemoryOrderRepository;
use rust_decimal_macros::dec;

struct FixedNumber(String);

impl OrderNumberGenerator for FixedNumber {
    fn generate(&self, _created_at: DateTime<Utc>) -> OrderNumber {
        OrderNumber::new(self.0.clone())
    }
}

fn order(number: &str, user_id: u64) -> Order {
    OrderFactory::with_generator(FixedNumber(number.to_string())).create_order(
        UserId::new(user_id),
        "merchant_001",
        vec![OrderItem::new(
            "dish_001",
            "Kung Pao Chicken",
            1,
            Money::new(dec!(28.00)),
        )],
        DeliveryInfo::new("Zhang San", "13800138000", "1 Chaoyang Road, Beijing"),
        "",
    )
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_creates_of_same_number_admit_exactly_one() {
    let repo = Arc::new(InMemoryOrderRepository::new());
    let number = "20250101120000424242";

    let handles: Vec<_> = (0..64)
        .map(|user| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.create(order(number, user)).await })
        })
        .collect();

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => successes += 1,
            Err(RepositoryError::Conflict(n)) => {
                assert_eq!(n.as_str(), number);
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 63);
    assert_eq!(repo.order_count().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_creates_of_distinct_numbers_all_succeed() {
    let repo = InMemoryOrderRepository::new();

    let handles: Vec<_> = (0..100u64)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                let number = format!("20250101120000{i:06}");
                repo.create(order(&number, i)).await.map(|_| number)
            })
        })
        .collect();

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.push(handle.await.unwrap().unwrap());
    }

    assert_eq!(repo.order_count().await, 100);
    for (i, number) in numbers.iter().enumerate() {
        let stored = repo
            .find_by_order_number(&OrderNumber::new(number.as_str()))
            .await
            .unwrap();
        assert_eq!(stored.user_id(), UserId::new(i as u64));
    }
}

#[tokio::test]
async fn winner_of_a_race_is_never_overwritten() {
    let repo = InMemoryOrderRepository::new();
    let number = "20250101120000000007";

    repo.create(order(number, 1)).await.unwrap();
    for user in 2..10 {
        let err = repo.create(order(number, user)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    let stored = repo
        .find_by_order_number(&OrderNumber::new(number))
        .await
        .unwrap();
    assert_eq!(stored.user_id(), UserId::new(1));
}
