//! Application layer for the order service.
//!
//! Validates incoming order requests, runs them through the domain factory,
//! persists the result through the repository port and projects it back
//! into a caller-facing summary.

pub mod error;
pub mod request;
pub mod service;
pub mod validation;

pub use error::{ApplicationError, Result};
pub use request::{
    CreateOrderRequest, DeliveryInfoRequest, OrderItemRequest, OrderResult, PricingResult,
};
pub use service::OrderService;
pub use validation::{MAX_REMARK_CHARS, OrderRequestValidator};
