//! Tests for the invoices module
//!
//! HTTP-level tests driving the full router against an in-memory database:
//! listing, the nested-company detail shape, creation defaults, amount
//! updates, deletion, and the 404 convention. Plus a unit test for the
//! join-row reshape.

#[cfg(test)]
mod tests {
    use axum::{extract::Extension, http::StatusCode, Router};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use sqlx::SqlitePool;
    use std::str::FromStr;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::common::{migrations, AppState};
    use crate::invoices::models::{InvoiceCompanyRow, InvoiceDetail};

    async fn test_app() -> (TestServer, SqlitePool) {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("valid sqlite url")
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("in-memory pool");

        migrations::run_migrations(&pool).await.expect("migrations");

        let state = Arc::new(RwLock::new(AppState { db: pool.clone() }));
        let app = Router::new()
            .merge(crate::companies::companies_routes())
            .merge(crate::invoices::invoices_routes())
            .layer(Extension(state));

        (TestServer::new(app).expect("test server"), pool)
    }

    async fn seed_company(pool: &SqlitePool) {
        sqlx::query(
            "INSERT INTO companies (code, name, description) \
             VALUES ('msoft', 'Microsoft', 'Creator of Windows')",
        )
        .execute(pool)
        .await
        .expect("seed company");
    }

    async fn seed_invoice(pool: &SqlitePool, comp_code: &str, amt: f64) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date) \
             VALUES (?, ?, 0, '2024-01-10T00:00:00+00:00', NULL) RETURNING id",
        )
        .bind(comp_code)
        .bind(amt)
        .fetch_one(pool)
        .await
        .expect("seed invoice")
    }

    #[test]
    fn join_row_reshapes_into_nested_invoice() {
        let row = InvoiceCompanyRow {
            id: 7,
            amt: 50.0,
            paid: false,
            add_date: "2024-01-10T00:00:00+00:00".to_string(),
            paid_date: None,
            code: "msoft".to_string(),
            name: "Microsoft".to_string(),
            description: "Creator of Windows".to_string(),
        };

        let detail = InvoiceDetail::from(row);
        let value = serde_json::to_value(&detail).expect("serialize");

        assert_eq!(
            value,
            json!({
                "id": 7,
                "amt": 50.0,
                "paid": false,
                "add_date": "2024-01-10T00:00:00+00:00",
                "paid_date": null,
                "company": {
                    "code": "msoft",
                    "name": "Microsoft",
                    "description": "Creator of Windows"
                }
            })
        );
    }

    #[tokio::test]
    async fn get_invoices_returns_all_rows() {
        let (server, pool) = test_app().await;
        seed_company(&pool).await;
        let first = seed_invoice(&pool, "msoft", 50.0).await;
        let second = seed_invoice(&pool, "msoft", 75.0).await;

        let response = server.get("/invoices").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "invoices": [
                    {
                        "id": first,
                        "comp_code": "msoft",
                        "amt": 50.0,
                        "paid": false,
                        "add_date": "2024-01-10T00:00:00+00:00",
                        "paid_date": null
                    },
                    {
                        "id": second,
                        "comp_code": "msoft",
                        "amt": 75.0,
                        "paid": false,
                        "add_date": "2024-01-10T00:00:00+00:00",
                        "paid_date": null
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn get_invoice_nests_issuing_company() {
        let (server, pool) = test_app().await;
        seed_company(&pool).await;
        let id = seed_invoice(&pool, "msoft", 50.0).await;

        let response = server.get(&format!("/invoices/{}", id)).await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "invoice": {
                    "id": id,
                    "amt": 50.0,
                    "paid": false,
                    "add_date": "2024-01-10T00:00:00+00:00",
                    "paid_date": null,
                    "company": {
                        "code": "msoft",
                        "name": "Microsoft",
                        "description": "Creator of Windows"
                    }
                }
            })
        );
        assert!(body["invoice"].get("comp_code").is_none());
    }

    #[tokio::test]
    async fn get_missing_invoice_is_404() {
        let (server, _pool) = test_app().await;

        let response = server.get("/invoices/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "error": {
                    "message": "Invoice with id 999 doesn't exist",
                    "status": 404
                },
                "message": "Invoice with id 999 doesn't exist"
            })
        );
    }

    #[tokio::test]
    async fn non_numeric_invoice_id_is_rejected() {
        let (server, _pool) = test_app().await;

        let response = server.get("/invoices/not-a-number").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_invoice_defaults_unpaid_with_server_date() {
        let (server, pool) = test_app().await;
        seed_company(&pool).await;

        let response = server
            .post("/invoices")
            .json(&json!({"comp_code": "msoft", "amt": 30}))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        let invoice = &body["invoice"];
        assert_eq!(invoice["comp_code"], "msoft");
        assert_eq!(invoice["amt"], 30.0);
        assert_eq!(invoice["paid"], false);
        assert_eq!(invoice["paid_date"], Value::Null);
        assert!(invoice["id"].is_i64());
        assert!(invoice["add_date"].is_string());
    }

    #[tokio::test]
    async fn create_invoice_for_unknown_company_is_500() {
        let (server, _pool) = test_app().await;

        let response = server
            .post("/invoices")
            .json(&json!({"comp_code": "ghost", "amt": 10.0}))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"]["status"], 500);
        assert_eq!(body["message"], "Database operation failed");
    }

    #[tokio::test]
    async fn update_invoice_replaces_amount() {
        let (server, pool) = test_app().await;
        seed_company(&pool).await;
        let id = seed_invoice(&pool, "msoft", 50.0).await;

        let response = server
            .patch(&format!("/invoices/{}", id))
            .json(&json!({"amt": 30.0}))
            .await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "invoice": {
                    "id": id,
                    "comp_code": "msoft",
                    "amt": 30.0,
                    "paid": false,
                    "add_date": "2024-01-10T00:00:00+00:00",
                    "paid_date": null
                }
            })
        );
    }

    #[tokio::test]
    async fn update_missing_invoice_is_404() {
        let (server, _pool) = test_app().await;

        let response = server
            .patch("/invoices/999")
            .json(&json!({"amt": 10.0}))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invoice with id 999 doesn't exist");
        assert_eq!(body["error"]["status"], 404);
    }

    #[tokio::test]
    async fn delete_invoice_reports_status_then_404s() {
        let (server, pool) = test_app().await;
        seed_company(&pool).await;
        let id = seed_invoice(&pool, "msoft", 50.0).await;

        let response = server.delete(&format!("/invoices/{}", id)).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({"status": "deleted"}));

        let again = server.delete(&format!("/invoices/{}", id)).await;
        again.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(
            again.json::<Value>()["message"],
            format!("Invoice with id {} doesn't exist", id)
        );
    }
}
