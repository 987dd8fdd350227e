//! API handlers for the order HTTP endpoints
//!
//! Each handler translates one request into exactly one manager call and a
//! status code; no business logic lives here.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::api::models::*;
use crate::error::OrdersError;
use crate::manager::OrderManager;
use crate::types::{Charge, Deposit, Fee, Loan, Order, OrderElement, OrderId, Party, Service};

pub struct OrdersApiState {
    pub manager: Arc<OrderManager>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: OrdersError) -> ApiError {
    match err {
        OrdersError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("VALIDATION_ERROR", msg)),
        ),
        OrdersError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                "ORDER_NOT_FOUND",
                format!("Order {} not found", id),
            )),
        ),
    }
}

fn not_found(id: OrderId) -> ApiError {
    error_response(OrdersError::NotFound(id))
}

/// Health check handler
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "orders".to_string(),
    })
}

/// Create order handler
pub async fn create_order(
    State(state): State<Arc<OrdersApiState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Order>), ApiError> {
    let order = state
        .manager
        .create_order(req.into())
        .await
        .map_err(error_response)?;

    let location = format!("/orders/{}", order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order),
    ))
}

/// Get order handler
pub async fn get_order(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, ApiError> {
    match state.manager.get_order(id).await.map_err(error_response)? {
        Some(order) => Ok(Json(order)),
        None => Err(not_found(id)),
    }
}

/// List orders handler
pub async fn list_orders(
    State(state): State<Arc<OrdersApiState>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.manager.list_orders().await.map_err(error_response)?;
    Ok(Json(orders))
}

/// Delete order handler
pub async fn delete_order(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
) -> Result<StatusCode, ApiError> {
    if state.manager.delete_order(id).await.map_err(error_response)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

async fn upsert(
    state: &OrdersApiState,
    id: OrderId,
    element: OrderElement,
) -> Result<Json<Order>, ApiError> {
    state
        .manager
        .upsert_element(id, element)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Add-or-update service handler
pub async fn upsert_service(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
    Json(service): Json<Service>,
) -> Result<Json<Order>, ApiError> {
    upsert(&state, id, OrderElement::Service(service)).await
}

/// Add-or-update party handler
///
/// The party sub-type in the path is the upsert key; the body is stored as
/// sent.
pub async fn upsert_party(
    State(state): State<Arc<OrdersApiState>>,
    Path((id, party_type)): Path<(OrderId, String)>,
    Json(party): Json<Party>,
) -> Result<Json<Order>, ApiError> {
    upsert(
        &state,
        id,
        OrderElement::Party {
            key: party_type,
            party,
        },
    )
    .await
}

/// Add-or-update charge handler
pub async fn upsert_charge(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
    Json(charge): Json<Charge>,
) -> Result<Json<Order>, ApiError> {
    upsert(&state, id, OrderElement::Charge(charge)).await
}

/// Add-or-update deposit handler
pub async fn upsert_deposit(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
    Json(deposit): Json<Deposit>,
) -> Result<Json<Order>, ApiError> {
    upsert(&state, id, OrderElement::Deposit(deposit)).await
}

/// Add-or-update loan handler
pub async fn upsert_loan(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
    Json(loan): Json<Loan>,
) -> Result<Json<Order>, ApiError> {
    upsert(&state, id, OrderElement::Loan(loan)).await
}

/// Add-or-update fee handler
pub async fn upsert_fee(
    State(state): State<Arc<OrdersApiState>>,
    Path(id): Path<OrderId>,
    Json(fee): Json<Fee>,
) -> Result<Json<Order>, ApiError> {
    upsert(&state, id, OrderElement::Fee(fee)).await
}
