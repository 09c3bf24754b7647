// Contract tests for the invoice HTTP endpoints
//
// Runs the real routes in-process and checks response shapes, status codes
// and the error envelope: {"error": {"message", "code"}}.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use jewelbill::config::{BusinessProfile, InvoiceDefaults};
use jewelbill::configure_routes;
use jewelbill::invoices::InvoiceService;
use jewelbill::middleware::{json_error_handler, RequestId};
use serde_json::{json, Value};

fn business() -> BusinessProfile {
    BusinessProfile {
        name: "Shree Jewellers".to_string(),
        state: Some("Maharashtra".to_string()),
        gst_number: Some("27ABCDE1234F1Z5".to_string()),
        ..BusinessProfile::default()
    }
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data(web::Data::new(Arc::new(InvoiceService::new(
                    InvoiceDefaults::default(),
                    business(),
                ))))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_routes),
        )
        .await
    };
}

fn credit_invoice() -> Value {
    json!({
        "invoice_number": "INV-2610-0042",
        "invoice_date": "2026-10-19",
        "customer_name": "Priya Sharma",
        "customer_phone": "9820012345",
        "items": [
            {
                "name": "Gold Necklace",
                "quantity": 1,
                "unit_price": 30000,
                "purity": "22K",
                "weight": 12.5
            },
            {"name": "Gold Earrings", "quantity": 1, "unit_price": "25000"}
        ],
        "pricing": {
            "discount_type": "percent",
            "discount_value": 5,
            "tax_rate": 3,
            "round_off": false,
            "payment_mode": "credit",
            "amount_paid": 20000
        }
    })
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = app!();
    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_totals_response_schema() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/totals")
        .set_json(json!({
            "items": credit_invoice()["items"],
            "pricing": credit_invoice()["pricing"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let totals = &body["totals"];
    for field in [
        "subtotal",
        "discount_amount",
        "after_discount",
        "tax_amount",
        "pre_round_total",
        "round_off",
        "total_amount",
        "amount_paid",
        "balance_due",
    ] {
        assert!(totals[field].is_string(), "{} must be a decimal string", field);
    }

    assert_eq!(totals["subtotal"], "55000.00");
    assert_eq!(totals["discount_amount"], "2750.00");
    assert_eq!(totals["tax_amount"], "1567.50");
    assert_eq!(totals["total_amount"], "53817.50");
    assert_eq!(totals["balance_due"], "33817.50");
    assert_eq!(totals["payment_status"], "partial");

    assert_eq!(body["items"][0]["line_total"], "30000.00");
    assert_eq!(body["gst"]["supply_type"], "intra_state");
    assert_eq!(body["gst"]["cgst"], "783.75");
    assert_eq!(body["gst"]["sgst"], "783.75");
}

#[actix_web::test]
async fn test_client_line_total_is_rejected() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/totals")
        .set_json(json!({
            "items": [{"name": "Ring", "quantity": 1, "unit_price": 100, "line_total": 1}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert!(body["error"]["message"].is_string());
}

#[actix_web::test]
async fn test_unparseable_amount_is_unprocessable() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/totals")
        .set_json(json!({
            "items": [{"name": "Ring", "quantity": 1, "unit_price": "12,000"}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 422);
}

#[actix_web::test]
async fn test_zero_quantity_is_bad_request() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/totals")
        .set_json(json!({
            "items": [{"name": "Ring", "quantity": 0, "unit_price": 100}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_finalize_returns_created_record() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/finalize")
        .set_json(credit_invoice())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let record: Value = test::read_body_json(resp).await;
    assert_eq!(record["invoice_number"], "INV-2610-0042");
    assert_eq!(record["invoice_date"], "2026-10-19");
    assert_eq!(record["customer"]["name"], "Priya Sharma");
    assert_eq!(record["payment_method"], "credit");
    assert_eq!(record["totals"]["payment_status"], "partial");
    assert_eq!(record["items"].as_array().map(|a| a.len()), Some(2));
}

#[actix_web::test]
async fn test_finalize_without_items_is_rejected() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/finalize")
        .set_json(json!({"customer_name": "Walk-in"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Add at least one item"));
}

#[actix_web::test]
async fn test_recalculate_discards_tampered_totals() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/invoices/finalize")
        .set_json(credit_invoice())
        .to_request();
    let mut record: Value = test::read_body_json(test::call_service(&app, req).await).await;

    record["totals"]["total_amount"] = json!("1.00");
    record["totals"]["payment_status"] = json!("paid");
    record["items"][0]["line_total"] = json!("5.00");

    let req = test::TestRequest::post()
        .uri("/api/invoices/recalculate")
        .set_json(&record)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["totals"]["total_amount"], "53817.50");
    assert_eq!(body["totals"]["payment_status"], "partial");
    assert_eq!(body["items"][0]["line_total"], "30000.00");
}

#[actix_web::test]
async fn test_preview_document() {
    let app = app!();
    let mut invoice = credit_invoice();
    invoice["state_of_supply"] = json!("Gujarat");

    let req = test::TestRequest::post()
        .uri("/api/invoices/preview")
        .set_json(&invoice)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let doc: Value = test::read_body_json(resp).await;
    assert_eq!(doc["header"]["business_name"], "Shree Jewellers");
    assert_eq!(doc["header"]["invoice_date"], "19 Oct 2026");
    assert_eq!(doc["grand_total"], "₹53,817.50");
    assert_eq!(doc["you_saved"], "₹2,750.00");
    assert_eq!(doc["balance_due"], "₹33,817.50");
    assert_eq!(doc["gst"][0]["label"], "IGST (3%)");
    assert_eq!(doc["rows"][0]["weight"], "12.50g");
    assert_eq!(
        doc["amount_in_words"],
        "Fifty Three Thousand Eight Hundred Seventeen Rupees and Fifty Paisa only"
    );
}

#[actix_web::test]
async fn test_defaults_endpoint() {
    let app = app!();
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/invoices/defaults").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["defaults"]["tax_rate_percent"], "3");
    assert_eq!(body["pricing"]["payment_mode"], "cash");
    assert!(body["suggested_invoice_number"]
        .as_str()
        .unwrap()
        .starts_with("INV-"));
}
