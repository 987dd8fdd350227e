//! API routes for the order service

use crate::api::handlers::*;
use crate::manager::OrderManager;
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

/// Create the order router
pub fn create_router(state: OrdersApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/orders", axum::routing::post(create_order).get(list_orders))
        .route("/orders/:id", get(get_order).delete(delete_order))
        .route("/orders/:id/services", put(upsert_service))
        .route("/orders/:id/parties/:party_type", put(upsert_party))
        .route("/orders/:id/charges", put(upsert_charge))
        .route("/orders/:id/deposits", put(upsert_deposit))
        .route("/orders/:id/loans", put(upsert_loan))
        .route("/orders/:id/fees", put(upsert_fee))
        .with_state(Arc::new(state))
}

/// Build the API state around a manager
pub fn create_api_state(manager: OrderManager) -> OrdersApiState {
    OrdersApiState {
        manager: Arc::new(manager),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryOrderStore;
    use crate::types::Order;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> Router {
        let manager = OrderManager::new(Arc::new(InMemoryOrderStore::new()));
        create_router(create_api_state(manager))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let app = router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/orders",
                json!({"organization": "AcmeTitle", "transactionType": "Sale with Cash"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/orders/5000"
        );

        let order: Order = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(order.id, 5000);
        assert_eq!(order.organization, "AcmeTitle");
    }

    #[tokio::test]
    async fn test_create_with_blank_organization_is_rejected() {
        let app = router();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/orders",
                json!({"organization": "  ", "transactionType": "Refinance"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        // The rejected create left nothing behind.
        let response = app
            .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_get_unknown_order_is_404() {
        let app = router();

        let response = app
            .oneshot(Request::get("/orders/4242").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "ORDER_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let app = router();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/orders",
                json!({"organization": "AcmeTitle", "transactionType": "Refinance"}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::delete("/orders/5000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::delete("/orders/5000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_service_upsert_replaces_across_case() {
        let app = router();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/orders",
                json!({"organization": "AcmeTitle", "transactionType": "Sale with Cash"}),
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/orders/5000/services",
                json!({"type": "Escrow"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["services"], json!([{"type": "Escrow"}]));

        let response = app
            .oneshot(json_request(
                "PUT",
                "/orders/5000/services",
                json!({"type": "escrow"}),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["services"], json!([{"type": "escrow"}]));
    }

    #[tokio::test]
    async fn test_party_upsert_uses_path_key() {
        let app = router();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/orders",
                json!({"organization": "AcmeTitle", "transactionType": "Sale with Mortgage"}),
            ))
            .await
            .unwrap();

        app.clone()
            .oneshot(json_request(
                "PUT",
                "/orders/5000/parties/buyer",
                json!({"type": "buyer", "name": "Jordan Fields"}),
            ))
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/orders/5000/parties/Buyer",
                json!({"type": "buyer", "name": "Avery Cole"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["parties"],
            json!([{"type": "buyer", "name": "Avery Cole"}])
        );
    }

    #[tokio::test]
    async fn test_upsert_on_unknown_order_is_404() {
        let app = router();

        for (uri, body) in [
            ("/orders/77/charges", json!({"description": "Tax", "amount": 10.0})),
            ("/orders/77/deposits", json!({"description": "Earnest", "amount": 5.0})),
            ("/orders/77/loans", json!({"lender": "First National", "amount": 1.0})),
            ("/orders/77/fees", json!({"description": "Courier", "amount": 2.0})),
        ] {
            let response = app
                .clone()
                .oneshot(json_request("PUT", uri, body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_health() {
        let app = router();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }
}
