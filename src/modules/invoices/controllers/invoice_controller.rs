use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::models::{InvoiceInput, InvoiceRecord, TotalsRequest};
use crate::modules::invoices::services::invoice_service::{today, InvoiceService};

/// Defaults for a new invoice form
/// GET /api/invoices/defaults
pub async fn get_defaults(
    service: web::Data<Arc<InvoiceService>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.defaults_view(today())))
}

/// Live totals while the invoice is edited
/// POST /api/invoices/totals
pub async fn calculate_totals(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<TotalsRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.calculate(request.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// Printable view of an unsaved invoice
/// POST /api/invoices/preview
pub async fn preview_invoice(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<InvoiceInput>,
) -> Result<HttpResponse, AppError> {
    let document = service.preview(request.into_inner(), today())?;

    Ok(HttpResponse::Ok().json(document))
}

/// Validate and produce the record to persist
/// POST /api/invoices/finalize
pub async fn finalize_invoice(
    service: web::Data<Arc<InvoiceService>>,
    request: web::Json<InvoiceInput>,
) -> Result<HttpResponse, AppError> {
    let record = service.finalize(request.into_inner(), today())?;

    Ok(HttpResponse::Created().json(record))
}

/// Re-derive totals of a stored invoice
/// POST /api/invoices/recalculate
pub async fn recalculate_invoice(
    service: web::Data<Arc<InvoiceService>>,
    record: web::Json<InvoiceRecord>,
) -> Result<HttpResponse, AppError> {
    let record = service.recalculate(record.into_inner())?;

    Ok(HttpResponse::Ok().json(record))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/invoices")
            .route("/defaults", web::get().to(get_defaults))
            .route("/totals", web::post().to(calculate_totals))
            .route("/preview", web::post().to(preview_invoice))
            .route("/finalize", web::post().to(finalize_invoice))
            .route("/recalculate", web::post().to(recalculate_invoice)),
    );
}
