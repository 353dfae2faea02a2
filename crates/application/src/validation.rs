//! Validation of order creation requests.

use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{ApplicationError, Result};
use crate::request::{CreateOrderRequest, DeliveryInfoRequest, OrderItemRequest};

/// Mainland China mobile number: 11 digits, `1` then `3`-`9`.
const PHONE_PATTERN: &str = r"^1[3-9][0-9]{9}$";

/// Longest remark accepted, in characters.
pub const MAX_REMARK_CHARS: usize = 200;

/// Checks order creation requests before any domain object is built.
///
/// Fields are checked in a fixed order (merchant, items, delivery, remark)
/// and the first failure is reported. The validator holds no mutable state;
/// build it once and share it.
#[derive(Debug, Clone)]
pub struct OrderRequestValidator {
    phone: Regex,
}

impl OrderRequestValidator {
    /// Creates a validator, compiling the phone number pattern.
    pub fn new() -> Self {
        Self {
            phone: Regex::new(PHONE_PATTERN).expect("phone pattern is a valid regex"),
        }
    }

    /// Validates a request, returning the first failing field.
    pub fn validate(&self, request: &CreateOrderRequest) -> Result<()> {
        require("merchantId", &request.merchant_id)?;

        if request.items.is_empty() {
            return Err(ApplicationError::validation(
                "items",
                "at least one item is required",
            ));
        }
        for (index, item) in request.items.iter().enumerate() {
            validate_item(index, item)?;
        }

        self.validate_delivery(&request.delivery_info)?;

        if request.remark.chars().count() > MAX_REMARK_CHARS {
            return Err(ApplicationError::validation(
                "remark",
                format!("remark must be at most {MAX_REMARK_CHARS} characters"),
            ));
        }

        Ok(())
    }

    /// Returns true if `phone` is a well-formed mobile number.
    pub fn is_valid_phone(&self, phone: &str) -> bool {
        self.phone.is_match(phone)
    }

    fn validate_delivery(&self, delivery: &DeliveryInfoRequest) -> Result<()> {
        require("deliveryInfo.recipientName", &delivery.recipient_name)?;
        require("deliveryInfo.recipientPhone", &delivery.recipient_phone)?;
        if !self.is_valid_phone(&delivery.recipient_phone) {
            return Err(ApplicationError::validation(
                "deliveryInfo.recipientPhone",
                "recipientPhone must be an 11-digit mobile number",
            ));
        }
        require("deliveryInfo.address", &delivery.address)
    }
}

impl Default for OrderRequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_item(index: usize, item: &OrderItemRequest) -> Result<()> {
    let field = |name: &str| format!("items[{index}].{name}");

    require_named(field("dishId"), "dishId", &item.dish_id)?;
    require_named(field("dishName"), "dishName", &item.dish_name)?;

    if item.quantity <= 0 {
        return Err(ApplicationError::validation(
            field("quantity"),
            "quantity must be greater than 0",
        ));
    }
    if item.quantity > i64::from(u32::MAX) {
        return Err(ApplicationError::validation(
            field("quantity"),
            "quantity is out of range",
        ));
    }
    if item.price <= Decimal::ZERO {
        return Err(ApplicationError::validation(
            field("price"),
            "price must be greater than 0",
        ));
    }

    Ok(())
}

fn require(field: &str, value: &str) -> Result<()> {
    let name = field.rsplit('.').next().unwrap_or(field);
    require_named(field.to_string(), name, value)
}

fn require_named(field: String, name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApplicationError::validation(
            field,
            format!("{name} is required"),
        ));
    }
    Ok(())
}
