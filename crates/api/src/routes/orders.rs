//! Order placement and lookup endpoints.

use std::sync::Arc;

use application::{
    CreateOrderRequest, DeliveryInfoRequest, OrderItemRequest, OrderResult, OrderService,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::SecondsFormat;
use domain::{Order, OrderNumber, OrderRepository};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: OrderRepository> {
    pub order_service: OrderService<R>,
}

// -- Request types --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrderBody {
    pub merchant_id: String,
    pub items: Vec<OrderItemBody>,
    pub delivery_info: DeliveryInfoBody,
    pub remark: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemBody {
    pub dish_id: String,
    pub dish_name: String,
    pub quantity: i64,
    /// Accepts a JSON number or a decimal string, both read digit for digit.
    pub price: Decimal,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryInfoBody {
    pub recipient_name: String,
    pub recipient_phone: String,
    pub address: String,
}

impl From<CreateOrderBody> for CreateOrderRequest {
    fn from(body: CreateOrderBody) -> Self {
        CreateOrderRequest {
            merchant_id: body.merchant_id,
            items: body
                .items
                .into_iter()
                .map(|item| OrderItemRequest {
                    dish_id: item.dish_id,
                    dish_name: item.dish_name,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            delivery_info: DeliveryInfoRequest {
                recipient_name: body.delivery_info.recipient_name,
                recipient_phone: body.delivery_info.recipient_phone,
                address: body.delivery_info.address,
            },
            remark: body.remark,
        }
    }
}

// -- Response types --

/// Envelope of successful responses.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: &'static str,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub items_total: String,
    pub packaging_fee: String,
    pub delivery_fee: String,
    pub final_amount: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    pub order_number: String,
    pub status: String,
    pub pricing: PricingResponse,
    pub created_at: String,
}

impl From<OrderResult> for OrderCreatedResponse {
    fn from(result: OrderResult) -> Self {
        Self {
            order_number: result.order_number,
            status: result.status,
            pricing: PricingResponse {
                items_total: result.pricing.items_total,
                packaging_fee: result.pricing.packaging_fee,
                delivery_fee: result.pricing.delivery_fee,
                final_amount: result.pricing.final_amount,
            },
            created_at: result.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub dish_id: String,
    pub dish_name: String,
    pub quantity: u32,
    pub price: String,
    pub subtotal: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_number: String,
    pub user_id: u64,
    pub merchant_id: String,
    pub status: String,
    pub items: Vec<OrderItemResponse>,
    pub delivery_info: DeliveryInfoBody,
    pub remark: String,
    pub pricing: PricingResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        let pricing = order.pricing();
        let delivery = order.delivery();

        Self {
            order_number: order.order_number().to_string(),
            user_id: order.user_id().as_u64(),
            merchant_id: order.merchant_id().to_string(),
            status: order.status().to_string(),
            items: order
                .items()
                .iter()
                .zip(pricing.item_subtotals())
                .map(|(item, subtotal)| OrderItemResponse {
                    dish_id: item.dish_id.to_string(),
                    dish_name: item.dish_name.clone(),
                    quantity: item.quantity,
                    price: item.unit_price.to_fixed_string(),
                    subtotal: subtotal.to_fixed_string(),
                })
                .collect(),
            delivery_info: DeliveryInfoBody {
                recipient_name: delivery.recipient_name.clone(),
                recipient_phone: delivery.recipient_phone.clone(),
                address: delivery.address.clone(),
            },
            remark: order.remark().to_string(),
            pricing: PricingResponse {
                items_total: pricing.items_total().to_fixed_string(),
                packaging_fee: pricing.packaging_fee().to_fixed_string(),
                delivery_fee: pricing.delivery_fee().to_fixed_string(),
                final_amount: pricing.final_amount().to_fixed_string(),
            },
            created_at: order.created_at().to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: order.updated_at().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

// -- Handlers --

/// POST /api/v1/orders: place a new order for the caller.
#[tracing::instrument(skip(state, body), fields(user_id = %user.0))]
pub async fn create<R: OrderRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    user: AuthenticatedUser,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<OrderCreatedResponse>>), ApiError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable order body");
        ApiError::BadRequest("invalid request body".to_string())
    })?;

    let result = state
        .order_service
        .create_order(user.0, CreateOrderRequest::from(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope {
            code: StatusCode::CREATED.as_u16(),
            message: "order created successfully",
            data: OrderCreatedResponse::from(result),
        }),
    ))
}

/// GET /api/v1/orders/{order_number}: load one of the caller's orders.
///
/// Orders placed by other users are reported as not found.
#[tracing::instrument(skip(state), fields(user_id = %user.0))]
pub async fn get<R: OrderRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    user: AuthenticatedUser,
    Path(order_number): Path<String>,
) -> Result<Json<Envelope<OrderResponse>>, ApiError> {
    let order_number = OrderNumber::new(order_number);
    let order = state.order_service.get_order(&order_number).await?;

    if order.user_id() != user.0 {
        return Err(ApiError::Application(application::ApplicationError::not_found(
            format!("order {order_number} not found"),
        )));
    }

    Ok(Json(Envelope {
        code: StatusCode::OK.as_u16(),
        message: "ok",
        data: OrderResponse::from(&order),
    }))
}
