//! Order workflows exposed to adapters.

use common::UserId;
use domain::{
    DeliveryInfo, Order, OrderFactory, OrderNumber, OrderNumberGenerator, OrderRepository,
    RepositoryError, TimestampOrderNumberGenerator,
};

use crate::error::{ApplicationError, Result};
use crate::request::{CreateOrderRequest, OrderResult};
use crate::validation::OrderRequestValidator;

/// Service for placing and looking up orders.
///
/// Each call is independent; the only shared state is the repository.
pub struct OrderService<R, G = TimestampOrderNumberGenerator> {
    repository: R,
    factory: OrderFactory<G>,
    validator: OrderRequestValidator,
}

impl<R: OrderRepository> OrderService<R> {
    /// Creates a new order service with the given repository.
    pub fn new(repository: R) -> Self {
        Self::with_factory(repository, OrderFactory::new())
    }
}

impl<R: OrderRepository, G: OrderNumberGenerator> OrderService<R, G> {
    /// Creates an order service with a custom order factory.
    pub fn with_factory(repository: R, factory: OrderFactory<G>) -> Self {
        Self {
            repository,
            factory,
            validator: OrderRequestValidator::new(),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates, prices and stores a new order for `user_id`.
    ///
    /// A duplicate order number is reported as an internal error: the caller
    /// did not choose the number and cannot fix the request. Nothing is
    /// retried.
    #[tracing::instrument(skip(self, request), fields(merchant_id = %request.merchant_id))]
    pub async fn create_order(
        &self,
        user_id: UserId,
        request: CreateOrderRequest,
    ) -> Result<OrderResult> {
        if let Err(err) = self.validator.validate(&request) {
            tracing::warn!(error = %err, "order request rejected");
            metrics::counter!("orders_rejected_total", "reason" => "validation").increment(1);
            return Err(err);
        }

        let items = request
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| item.to_order_item(index))
            .collect::<Result<Vec<_>>>()?;
        let delivery = DeliveryInfo::from(&request.delivery_info);

        let order = match self.factory.create_order(
            user_id,
            request.merchant_id,
            items,
            delivery,
            request.remark,
        ) {
            Ok(order) => order,
            Err(err) => {
                tracing::warn!(error = %err, "order amounts out of range");
                metrics::counter!("orders_rejected_total", "reason" => "pricing").increment(1);
                return Err(err.into());
            }
        };
        let result = OrderResult::from(&order);

        if let Err(err) = self.repository.create(order).await {
            if matches!(err, RepositoryError::Conflict(_)) {
                tracing::warn!(error = %err, "order number collision");
                metrics::counter!("orders_rejected_total", "reason" => "conflict").increment(1);
            }
            return Err(ApplicationError::internal("failed to create order", err));
        }

        tracing::info!(
            order_number = %result.order_number,
            %user_id,
            final_amount = %result.pricing.final_amount,
            "order created"
        );
        metrics::counter!("orders_created_total").increment(1);

        Ok(result)
    }

    /// Loads an order by its number.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_number: &OrderNumber) -> Result<Order> {
        match self.repository.find_by_order_number(order_number).await {
            Ok(order) => {
                metrics::counter!("order_lookups_total", "outcome" => "found").increment(1);
                Ok(order)
            }
            Err(RepositoryError::NotFound(number)) => {
                metrics::counter!("order_lookups_total", "outcome" => "not_found").increment(1);
                Err(ApplicationError::not_found(format!(
                    "order {number} not found"
                )))
            }
            Err(err) => Err(ApplicationError::internal("failed to load order", err)),
        }
    }
}
