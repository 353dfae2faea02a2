//! Value objects for the order domain.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Dish identifier within a merchant's menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(String);

impl DishId {
    /// Creates a new dish ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the dish ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DishId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DishId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A monetary amount held as an exact decimal.
///
/// Arithmetic never rounds and is checked: a result outside the range of
/// [`Decimal`] yields `None`. Amounts are rounded half away from zero to two
/// fractional digits only when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Number of fractional digits amounts are rendered with.
    pub const SCALE: u32 = 2;

    /// Creates a money amount from an exact decimal.
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the exact decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiplies by a quantity, or `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(quantity)).map(Money)
    }

    /// Adds two amounts, or `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns the amount rounded to two places, half away from zero.
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        rounded
    }

    /// Renders the amount with exactly two fractional digits (`"42.97"`).
    pub fn to_fixed_string(&self) -> String {
        self.rounded().to_string()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fixed_string())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// A dish line in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The dish identifier.
    pub dish_id: DishId,

    /// Human-readable dish name.
    pub dish_name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit.
    pub unit_price: Money,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(
        dish_id: impl Into<DishId>,
        dish_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            dish_id: dish_id.into(),
            dish_name: dish_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns `quantity * unit_price`, or `None` if it overflows.
    pub fn subtotal(&self) -> Option<Money> {
        self.unit_price.checked_multiply(self.quantity)
    }
}

/// Where and to whom an order is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    pub recipient_name: String,
    pub recipient_phone: String,
    pub address: String,
}

impl DeliveryInfo {
    pub fn new(
        recipient_name: impl Into<String>,
        recipient_phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            recipient_phone: recipient_phone.into(),
            address: address.into(),
        }
    }
}
