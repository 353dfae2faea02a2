//! Domain layer for the order service.
//!
//! This crate provides:
//! - The order aggregate with its value objects and pricing rules
//! - The factory that assigns order numbers and builds new orders
//! - The repository port orders are persisted through

pub mod error;
pub mod order;
pub mod repository;

pub use error::{PricingError, RepositoryError};
pub use order::{
    DELIVERY_FEE, DeliveryInfo, DishId, Money, ORDER_NUMBER_LEN, Order, OrderFactory, OrderItem,
    OrderNumber, OrderNumberGenerator, OrderStatus, PACKAGING_FEE, Pricing,
    TimestampOrderNumberGenerator,
};
pub use repository::OrderRepository;
