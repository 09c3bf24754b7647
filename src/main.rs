use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jewelbill::config::Config;
use jewelbill::configure_routes;
use jewelbill::middleware::{json_error_handler, ErrorLogger, RequestId};
use jewelbill::modules::invoices::InvoiceService;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "jewelbill={},actix_web=info",
            config.app.log_level
        ))
    });

    if config.app.is_development() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting JewelBill invoice service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        tax_rate = %config.invoice.tax_rate_percent,
        prefix = %config.invoice.invoice_prefix,
        round_off = config.invoice.round_off_enabled,
        "Invoice defaults loaded"
    );

    let service = web::Data::new(Arc::new(InvoiceService::new(
        config.invoice.clone(),
        config.business.clone(),
    )));
    let development = config.app.is_development();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = if development {
            Cors::permissive()
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .max_age(3600)
        };

        App::new()
            .wrap(ErrorLogger)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(service.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(configure_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")?;
    Ok(())
}
