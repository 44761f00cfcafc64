//! HTTP interface - axum routers and handlers.
//!
//! The API layer is deliberately thin: handlers deserialize payloads,
//! resolve the acting user, call into `core`, and serialize entity models
//! back as JSON. The acting user is taken from the `x-user-id` header, a
//! stand-in for the session layer that fronts this service in deployment.

pub mod categories;
pub mod error;
pub mod products;
pub mod reviews;
pub mod users;

use crate::{
    core,
    entities::user,
    errors::{Error, Result},
};
use axum::{
    Router,
    http::HeaderMap,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
}

/// Builds the full application router over the given database connection.
pub fn router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/users", post(users::create))
        .route("/users/:user_id", get(users::get_one))
        .route(
            "/categories",
            get(categories::list).post(categories::create),
        )
        .route("/categories/:category_id", delete(categories::remove))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:product_id",
            get(products::get_one)
                .put(products::update)
                .delete(products::remove),
        )
        .route(
            "/products/category/:category_id",
            get(products::list_by_category),
        )
        .route(
            "/products/:product_id/reviews",
            get(reviews::list_for_product),
        )
        .route("/reviews", get(reviews::list).post(reviews::create))
        .route("/reviews/:review_id", delete(reviews::remove))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { db })
}

/// Resolves the acting user from the `x-user-id` header.
pub(crate) async fn require_actor(
    db: &DatabaseConnection,
    headers: &HeaderMap,
) -> Result<user::Model> {
    let user_id = headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| Error::Forbidden {
            message: "Missing or invalid x-user-id header".to_string(),
        })?;

    core::user::get_active_user(db, user_id).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{
        create_test_admin, create_test_buyer, setup_test_db, setup_with_product,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_products_empty() -> Result<()> {
        let db = setup_test_db().await?;
        let app = router(db);

        let response = app
            .oneshot(Request::get("/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_product_maps_to_404() -> Result<()> {
        let db = setup_test_db().await?;
        let app = router(db);

        let response = app
            .oneshot(Request::get("/products/999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("not found"));

        Ok(())
    }

    #[tokio::test]
    async fn test_review_without_actor_is_forbidden() -> Result<()> {
        let (db, _seller, product) = setup_with_product().await?;
        let app = router(db);

        let response = app
            .oneshot(
                Request::post("/reviews")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"product_id": product.id, "grade": 5}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_grade_maps_to_400() -> Result<()> {
        let (db, _seller, product) = setup_with_product().await?;
        let buyer = create_test_buyer(&db, "buyer@example.com").await?;
        let app = router(db);

        let response = app
            .oneshot(
                Request::post("/reviews")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header("x-user-id", buyer.id.to_string())
                    .body(Body::from(
                        json!({"product_id": product.id, "grade": 6}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_review_lifecycle_over_http() -> Result<()> {
        let (db, _seller, product) = setup_with_product().await?;
        let buyer = create_test_buyer(&db, "buyer@example.com").await?;
        let admin = create_test_admin(&db).await?;
        let app = router(db);

        // Buyer posts a review
        let response = app
            .clone()
            .oneshot(
                Request::post("/reviews")
                    .header(header::CONTENT_TYPE, "application/json")
                    .header("x-user-id", buyer.id.to_string())
                    .body(Body::from(
                        json!({"product_id": product.id, "comment": "Great", "grade": 4})
                            .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let review = body_json(response).await;
        assert_eq!(review["grade"], 4);

        // The product now shows the recomputed rating
        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/products/{}", product.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let shown = body_json(response).await;
        assert_eq!(shown["rating"], 4.0);

        // Admin soft-deletes the review, resetting the rating
        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/reviews/{}", review["id"]))
                    .header("x-user-id", admin.id.to_string())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::get(format!("/products/{}", product.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let shown = body_json(response).await;
        assert_eq!(shown["rating"], 0.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_over_http() -> Result<()> {
        let db = setup_test_db().await?;
        let app = router(db);

        let response = app
            .clone()
            .oneshot(
                Request::post("/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"email": "new@example.com", "role": "seller"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["role"], "seller");

        // Unknown roles are rejected
        let response = app
            .oneshot(
                Request::post("/users")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"email": "bad@example.com", "role": "root"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}
