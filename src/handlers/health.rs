// src/handlers/health.rs
// DOCUMENTATION: Liveness and readiness checks
// PURPOSE: Report process status and store reachability

use crate::config::{ping_db, Config};
use crate::errors::TransactionsError;
use actix_web::{http::header::ContentType, web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /health/live
/// Process is running; touches no dependency
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("ok")
}

/// GET /health/ready
/// Store answers a ping within READY_TIMEOUT_MS
pub async fn readiness(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
) -> Result<impl Responder, TransactionsError> {
    ping_db(pool.get_ref(), config.ready_timeout)
        .await
        .map_err(|e| {
            log::warn!("Readiness check failed: {}", e);
            TransactionsError::NotReady(e)
        })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("ready"))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("/live", web::get().to(liveness))
            .route("/ready", web::get().to(readiness)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        database_config, test_database_url, unreachable_config, unreachable_pool, GatedRelay,
    };
    use actix_web::{http::StatusCode, test, App};
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    #[actix_rt::test]
    async fn test_liveness_needs_no_store() {
        let config = unreachable_config();
        let pool = unreachable_pool(&config);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .app_data(web::Data::new(config))
                .configure(super::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/live").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await.as_ref(), b"ok");
    }

    #[actix_rt::test]
    async fn test_readiness_reports_unreachable_store() {
        let config = unreachable_config();
        let pool = unreachable_pool(&config);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .app_data(web::Data::new(config))
                .configure(super::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(test::read_body(resp).await.as_ref(), b"db not ready");
    }

    /// Store goes away and comes back behind the same pool; readiness follows it.
    /// Runs only when TEST_DATABASE_URL is set.
    #[actix_rt::test]
    async fn test_readiness_recovers_without_restart() {
        let Some(database_url) = test_database_url() else {
            eprintln!("TEST_DATABASE_URL not set, skipping");
            return;
        };

        let relay = GatedRelay::start(&database_url).await;
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_with(relay.connect_options(&database_url))
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .app_data(web::Data::new(database_config(&database_url)))
                .configure(super::config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await.as_ref(), b"ready");

        relay.cut();
        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(test::read_body(resp).await.as_ref(), b"db not ready");

        relay.restore();
        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await.as_ref(), b"ready");
    }
}
