//! Order aggregate and related types.

mod aggregate;
mod number;
mod pricing;
mod status;
mod value_objects;

pub use aggregate::{Order, OrderFactory};
pub use number::{
    ORDER_NUMBER_LEN, OrderNumber, OrderNumberGenerator, TimestampOrderNumberGenerator,
};
pub use pricing::{DELIVERY_FEE, PACKAGING_FEE, Pricing};
pub use status::OrderStatus;
pub use value_objects::{DeliveryInfo, DishId, Money, OrderItem};
