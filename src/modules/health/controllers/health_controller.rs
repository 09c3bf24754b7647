use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::invoices::models::{LineItem, PricingConfig};
use crate::modules::invoices::services::compute_totals;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    pub totals_engine: String,
}

// One-row invoice through the engine; there are no external dependencies
fn totals_engine_check() -> bool {
    LineItem::new("health", 1, rust_decimal::Decimal::ONE_HUNDRED)
        .and_then(|item| compute_totals(&[item], &PricingConfig::default()))
        .map(|totals| !totals.total_amount.is_sign_negative())
        .unwrap_or(false)
}

/// GET /health - Liveness check
pub async fn health_check() -> impl Responder {
    let engine_ok = totals_engine_check();
    if !engine_ok {
        tracing::error!("Totals engine self-check failed");
    }

    let response = HealthResponse {
        status: if engine_ok { "healthy" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            totals_engine: if engine_ok { "ok" } else { "failed" }.to_string(),
        },
    };

    if engine_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
